// SPDX-License-Identifier: PMPL-1.0-or-later
//! Checklist generation: joins rule results and heuristics against the
//! static WCAG reference table.
//!
//! One item per table entry, in table order. A check passes when it found
//! nothing to inspect or nothing failed; severity comes from the fixed
//! table, never from failure counts.

use serde::Serialize;

use crate::checks::{RuleResults, Severity, CHECKS};
use crate::heuristics::HeuristicResult;

/// Pass/fail status of one checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pass => write!(f, "pass"),
            Status::Fail => write!(f, "fail"),
        }
    }
}

/// One row of the compliance checklist.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistItem {
    pub check: &'static str,
    pub wcag: &'static str,
    pub description: &'static str,
    pub status: Status,
    pub severity: Severity,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Failed element count, duplicated for the issues list.
    pub count: usize,
    pub fix: String,
}

/// Build the checklist from rule results and heuristic augmentation.
pub fn build(rule_results: &RuleResults, heuristics: &HeuristicResult) -> Vec<ChecklistItem> {
    let mut checklist = Vec::with_capacity(CHECKS.len());

    for def in CHECKS {
        let Some(result) = rule_results.get(def.key) else {
            continue;
        };

        let status = if result.total == 0 || result.failed == 0 {
            Status::Pass
        } else {
            Status::Fail
        };

        checklist.push(ChecklistItem {
            check: def.name,
            wcag: def.wcag,
            description: def.description,
            status,
            severity: def.severity,
            total: result.total,
            passed: result.passed,
            failed: result.failed,
            count: result.failed,
            fix: fix_text(def.key, result, heuristics),
        });
    }

    checklist
}

/// The first issue's suggested fix, augmented with heuristic insight for
/// low alt-text quality and vague link counts.
fn fix_text(
    key: &str,
    result: &crate::checks::CheckResult,
    heuristics: &HeuristicResult,
) -> String {
    let Some(first) = result.issues.first() else {
        return "No issues found".to_string();
    };

    let mut fix = first.fix.clone();

    if key == "images" && heuristics.alt_text_quality.average_score < 50.0 {
        fix.push_str(". Consider improving alt text descriptiveness.");
    }

    if key == "links" && heuristics.link_text_quality.vague_links > 0 {
        fix.push_str(&format!(
            " Replace {} vague link texts with descriptive alternatives.",
            heuristics.link_text_quality.vague_links
        ));
    }

    fix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks;
    use crate::heuristics;
    use scraper::Html;

    fn build_for(html: &str) -> Vec<ChecklistItem> {
        let document = Html::parse_document(html);
        let rule_results = checks::run_all(&document);
        let heuristic_results = heuristics::score(&document, &rule_results);
        build(&rule_results, &heuristic_results)
    }

    #[test]
    fn test_one_item_per_check_in_table_order() {
        let checklist = build_for(r#"<html lang="en"><h1>T</h1></html>"#);
        assert_eq!(checklist.len(), CHECKS.len());
        for (item, def) in checklist.iter().zip(CHECKS) {
            assert_eq!(item.check, def.name);
            assert_eq!(item.severity, def.severity);
        }
    }

    #[test]
    fn test_clean_page_all_pass() {
        let checklist = build_for(r#"<html lang="en"><h1>Title</h1></html>"#);
        for item in &checklist {
            assert_eq!(item.status, Status::Pass, "{} should pass", item.check);
            assert_eq!(item.fix, "No issues found");
        }
    }

    #[test]
    fn test_status_fail_iff_failures_with_elements() {
        let checklist = build_for(r#"<html><h1>T</h1><img src="a.jpg"></html>"#);
        for item in &checklist {
            let expect_fail = item.total > 0 && item.failed > 0;
            assert_eq!(
                item.status == Status::Fail,
                expect_fail,
                "{}: total={} failed={}",
                item.check,
                item.total,
                item.failed
            );
        }
    }

    #[test]
    fn test_zero_total_passes_even_with_page_issue() {
        // Missing h1 on a heading-free page: failed=1 but total=0.
        let checklist = build_for(r#"<html lang="en"><p>text</p></html>"#);
        let headings = checklist
            .iter()
            .find(|i| i.check == "Headings are structured")
            .unwrap();
        assert_eq!(headings.total, 0);
        assert_eq!(headings.failed, 1);
        assert_eq!(headings.status, Status::Pass);
    }

    #[test]
    fn test_images_fix_augmented_when_alt_quality_low() {
        let checklist = build_for(r#"<html lang="en"><h1>T</h1><img src="a.jpg"></html>"#);
        let images = checklist
            .iter()
            .find(|i| i.check == "Images have alt text")
            .unwrap();
        assert!(images.fix.contains("Add alt='description'"));
        assert!(images.fix.contains("Consider improving alt text descriptiveness."));
    }

    #[test]
    fn test_links_fix_interpolates_vague_count() {
        let checklist = build_for(
            r#"<html lang="en"><h1>T</h1>
               <a href="/1">click here</a><a href="/2">more</a></html>"#,
        );
        let links = checklist
            .iter()
            .find(|i| i.check == "Links are descriptive")
            .unwrap();
        assert_eq!(links.status, Status::Fail);
        assert!(links.fix.contains("Replace 2 vague link texts"));
    }

    #[test]
    fn test_count_mirrors_failed() {
        let checklist = build_for(r#"<html><img src="a.jpg"><img src="b.jpg"></html>"#);
        for item in &checklist {
            assert_eq!(item.count, item.failed);
        }
    }
}
