// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form labeling check - WCAG 1.3.1 Info and Relationships, 3.3.2 Labels
//!
//! Every visible input, textarea, and select needs an associated label:
//! a `<label for=...>` pointing at its id, an `aria-label` or
//! `aria-labelledby`, or a wrapping `<label>` element. Hidden inputs and
//! button-type inputs are out of scope.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

use super::{snippet, CheckResult, Issue};

pub fn check(document: &Html) -> CheckResult {
    let control_selector = Selector::parse("input, textarea, select").expect("valid selector");
    let label_selector = Selector::parse("label[for]").expect("valid selector");

    let labeled_ids: HashSet<&str> = document
        .select(&label_selector)
        .filter_map(|l| l.value().attr("for"))
        .collect();

    let mut issues = Vec::new();
    let mut passed = 0;
    let mut total = 0;

    for control in document.select(&control_selector) {
        let el = control.value();
        let input_type = el.attr("type").unwrap_or("").to_lowercase();

        if matches!(input_type.as_str(), "hidden" | "submit" | "reset" | "button") {
            continue;
        }
        total += 1;

        let has_label = el
            .attr("id")
            .map(|id| labeled_ids.contains(id))
            .unwrap_or(false)
            || el.attr("aria-label").is_some_and(|v| !v.is_empty())
            || el.attr("aria-labelledby").is_some_and(|v| !v.is_empty())
            || has_label_ancestor(&control);

        if has_label {
            passed += 1;
        } else {
            issues.push(Issue {
                element: snippet(&control),
                issue: "Form input missing label".to_string(),
                fix: "Add <label> element or aria-label attribute".to_string(),
            });
        }
    }

    CheckResult {
        total,
        passed,
        failed: issues.len(),
        issues,
    }
}

fn has_label_ancestor(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name() == "label")
}
