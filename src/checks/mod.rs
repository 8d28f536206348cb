// SPDX-License-Identifier: PMPL-1.0-or-later
//! Rule-based WCAG checks over a parsed document.
//!
//! Each check module scans the tree once and produces a `CheckResult`;
//! all eight are pure functions that never fail - malformed markup simply
//! degrades to empty result sets. The `CHECKS` table is the single source
//! of truth for check identity: key, rule function, WCAG reference,
//! display name, description, and severity, in the fixed order the
//! checklist and scoring layers iterate.

pub mod aria;
pub mod buttons;
pub mod contrast;
pub mod forms;
pub mod headings;
pub mod images;
pub mod lang;
pub mod links;

use scraper::{ElementRef, Html};
use serde::Serialize;

/// Issue severity buckets, ordered highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
        }
    }
}

/// A single flagged element with its problem and suggested fix.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Serialized element, truncated to 100 characters.
    pub element: String,
    pub issue: String,
    pub fix: String,
}

/// Outcome of one check: element counts plus the flagged issues.
///
/// `total == passed + failed` is the conceptual target; the headings check
/// adds page-level issues independent of per-heading counts, and the
/// color-contrast heuristic derives `passed` from its sample instead.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub issues: Vec<Issue>,
}

/// Static definition of one check: identity, metadata, and rule function.
pub struct CheckDef {
    pub key: &'static str,
    pub name: &'static str,
    pub wcag: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub run: fn(&Html) -> CheckResult,
}

/// The fixed dispatch table. Iteration order here is the checklist order.
pub static CHECKS: &[CheckDef] = &[
    CheckDef {
        key: "images",
        name: "Images have alt text",
        wcag: "1.1.1",
        description: "All images must have descriptive alt text or be marked as decorative",
        severity: Severity::High,
        run: images::check,
    },
    CheckDef {
        key: "forms",
        name: "Forms have labels",
        wcag: "1.3.1, 3.3.2",
        description: "All form inputs must have associated labels",
        severity: Severity::High,
        run: forms::check,
    },
    CheckDef {
        key: "headings",
        name: "Headings are structured",
        wcag: "1.3.1",
        description: "Headings must follow proper hierarchy (h1 -> h2 -> h3, etc.)",
        severity: Severity::Medium,
        run: headings::check,
    },
    CheckDef {
        key: "links",
        name: "Links are descriptive",
        wcag: "2.4.4",
        description: "Link text should be descriptive and not vague",
        severity: Severity::Low,
        run: links::check,
    },
    CheckDef {
        key: "color_contrast",
        name: "Color contrast passes WCAG",
        wcag: "1.4.3",
        description: "Text must meet minimum contrast ratios",
        severity: Severity::Low,
        run: contrast::check,
    },
    CheckDef {
        key: "lang_attribute",
        name: "Page has lang attribute",
        wcag: "3.1.1",
        description: "HTML element must have lang attribute",
        severity: Severity::High,
        run: lang::check,
    },
    CheckDef {
        key: "buttons",
        name: "Buttons are accessible",
        wcag: "4.1.2",
        description: "Buttons must have accessible names",
        severity: Severity::Medium,
        run: buttons::check,
    },
    CheckDef {
        key: "aria_labels",
        name: "ARIA labels are properly used",
        wcag: "4.1.2",
        description: "ARIA attributes must be used correctly",
        severity: Severity::Medium,
        run: aria::check,
    },
];

/// Results of all checks, preserving table order.
#[derive(Debug, Clone, Default)]
pub struct RuleResults {
    results: Vec<(&'static str, CheckResult)>,
}

impl RuleResults {
    pub fn get(&self, key: &str) -> Option<&CheckResult> {
        self.results
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CheckResult)> {
        self.results.iter().map(|(k, r)| (*k, r))
    }
}

/// Run every check against the document.
pub fn run_all(document: &Html) -> RuleResults {
    RuleResults {
        results: CHECKS
            .iter()
            .map(|def| (def.key, (def.run)(document)))
            .collect(),
    }
}

/// Serialized element truncated for display.
pub(crate) fn snippet(element: &ElementRef) -> String {
    element.html().chars().take(100).collect()
}

/// Concatenated descendant text with each fragment trimmed.
pub(crate) fn collapsed_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_is_fixed() {
        let keys: Vec<_> = CHECKS.iter().map(|d| d.key).collect();
        assert_eq!(
            keys,
            vec![
                "images",
                "forms",
                "headings",
                "links",
                "color_contrast",
                "lang_attribute",
                "buttons",
                "aria_labels",
            ]
        );
    }

    #[test]
    fn test_run_all_covers_every_check() {
        let document = Html::parse_document("<html lang=\"en\"><body></body></html>");
        let results = run_all(&document);
        for def in CHECKS {
            assert!(results.get(def.key).is_some(), "missing {}", def.key);
        }
    }

    #[test]
    fn test_empty_page_passes_everything() {
        let document = Html::parse_document("<html lang=\"en\"><body><h1>T</h1></body></html>");
        let results = run_all(&document);
        for (key, result) in results.iter() {
            assert_eq!(result.failed, 0, "{} should not fail on a minimal page", key);
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
    }
}
