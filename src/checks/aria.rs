// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA hiding check - WCAG 4.1.2 Name, Role, Value
//!
//! `aria-hidden="true"` removes an element from the accessibility tree;
//! applying it to an interactive element leaves keyboard users able to
//! reach something assistive technology cannot announce.

use scraper::{Html, Selector};

use super::{snippet, CheckResult, Issue};

/// Tags that must never be hidden from assistive technology.
const INTERACTIVE_TAGS: &[&str] = &["a", "button", "input", "select", "textarea"];

pub fn check(document: &Html) -> CheckResult {
    let hidden_selector = Selector::parse(r#"[aria-hidden="true"]"#).expect("valid selector");

    let mut issues = Vec::new();
    let mut passed = 0;
    let mut total = 0;

    for element in document.select(&hidden_selector) {
        total += 1;
        if INTERACTIVE_TAGS.contains(&element.value().name()) {
            issues.push(Issue {
                element: snippet(&element),
                issue: "Interactive element with aria-hidden='true'".to_string(),
                fix: "Remove aria-hidden or make element non-interactive".to_string(),
            });
        } else {
            passed += 1;
        }
    }

    CheckResult {
        total,
        passed,
        failed: issues.len(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> CheckResult {
        check(&Html::parse_document(html))
    }

    #[test]
    fn test_decorative_hidden_span_passes() {
        let result = run(r#"<span aria-hidden="true">&#9733;</span>"#);
        assert_eq!(result.total, 1);
        assert_eq!(result.passed, 1);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn test_hidden_interactive_elements_fail() {
        let result = run(
            r#"<a href="/x" aria-hidden="true">hidden link</a>
               <button aria-hidden="true">hidden button</button>"#,
        );
        assert_eq!(result.total, 2);
        assert_eq!(result.failed, 2);
        assert_eq!(
            result.issues[0].issue,
            "Interactive element with aria-hidden='true'"
        );
    }

    #[test]
    fn test_no_hidden_elements_clean_pass() {
        let result = run("<p>Nothing hidden</p>");
        assert_eq!(result.total, 0);
        assert_eq!(result.failed, 0);
    }
}
