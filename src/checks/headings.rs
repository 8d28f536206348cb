// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy check - WCAG 1.3.1 Info and Relationships
//!
//! The page needs exactly one h1, and each heading may increase the level
//! by at most one over the previous heading in document order. H1-count
//! problems are page-level issues, reported independently of the
//! per-heading pass counts.

use scraper::{Html, Selector};

use super::{snippet, CheckResult, Issue};

pub fn check(document: &Html) -> CheckResult {
    let heading_selector = Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector");
    let headings: Vec<_> = document.select(&heading_selector).collect();

    let mut issues = Vec::new();
    let mut passed = 0;

    let h1_count = headings.iter().filter(|h| h.value().name() == "h1").count();
    if h1_count == 0 {
        issues.push(Issue {
            element: "Page structure".to_string(),
            issue: "Missing h1 heading".to_string(),
            fix: "Add at least one h1 heading to describe page content".to_string(),
        });
    } else if h1_count > 1 {
        issues.push(Issue {
            element: "Page structure".to_string(),
            issue: "Multiple h1 headings".to_string(),
            fix: "Use only one h1 per page for main content".to_string(),
        });
    }

    let mut last_level: u32 = 0;
    for heading in &headings {
        let level = heading_level(heading.value().name());

        if last_level == 0 {
            last_level = level;
            passed += 1;
            continue;
        }

        if level > last_level + 1 {
            issues.push(Issue {
                element: snippet(heading),
                issue: format!("Heading hierarchy skipped (h{} -> h{})", last_level, level),
                fix: format!("Use h{} instead of h{}", last_level + 1, level),
            });
        } else {
            passed += 1;
        }

        last_level = level;
    }

    CheckResult {
        total: headings.len(),
        passed,
        failed: issues.len(),
        issues,
    }
}

fn heading_level(name: &str) -> u32 {
    match name {
        "h1" => 1,
        "h2" => 2,
        "h3" => 3,
        "h4" => 4,
        "h5" => 5,
        _ => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> CheckResult {
        check(&Html::parse_document(html))
    }

    #[test]
    fn test_clean_hierarchy_passes() {
        let result = run("<h1>Title</h1><h2>Section</h2><h3>Sub</h3><h2>Next</h2>");
        assert_eq!(result.total, 4);
        assert_eq!(result.passed, 4);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn test_missing_h1_is_page_level_issue() {
        let result = run("<h2>Section</h2>");
        assert_eq!(result.failed, 1);
        assert_eq!(result.issues[0].element, "Page structure");
        assert_eq!(result.issues[0].issue, "Missing h1 heading");
        // The lone h2 itself still passes as the first heading.
        assert_eq!(result.passed, 1);
    }

    #[test]
    fn test_multiple_h1_flagged() {
        let result = run("<h1>One</h1><h1>Two</h1>");
        assert_eq!(result.failed, 1);
        assert_eq!(result.issues[0].issue, "Multiple h1 headings");
    }

    #[test]
    fn test_skipped_level_flagged() {
        let result = run("<h1>Title</h1><h3>Jumped</h3>");
        assert_eq!(result.failed, 1);
        assert!(result.issues[0].issue.contains("h1 -> h3"));
        assert!(result.issues[0].fix.contains("Use h2"));
    }

    #[test]
    fn test_decreasing_levels_allowed() {
        let result = run("<h1>A</h1><h2>B</h2><h3>C</h3><h1>D</h1>");
        // Multiple h1s is the only issue; downward jumps are fine.
        assert_eq!(result.failed, 1);
        assert_eq!(result.passed, 4);
    }

    #[test]
    fn test_no_headings_reports_missing_h1_with_zero_total() {
        let result = run("<p>Plain text</p>");
        assert_eq!(result.total, 0);
        assert_eq!(result.failed, 1);
    }
}
