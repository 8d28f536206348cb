// SPDX-License-Identifier: PMPL-1.0-or-later
//! Button naming check - WCAG 4.1.2 Name, Role, Value
//!
//! `<button>` elements and button/submit inputs need an accessible name:
//! visible text, `aria-label`, `aria-labelledby`, or `title`. A button
//! whose only content is an image needs alt text on that image.

use scraper::{Html, Selector};

use super::{collapsed_text, snippet, CheckResult, Issue};

pub fn check(document: &Html) -> CheckResult {
    let button_selector =
        Selector::parse("button, input[type=button], input[type=submit]").expect("valid selector");
    let img_selector = Selector::parse("img").expect("valid selector");

    let mut issues = Vec::new();
    let mut passed = 0;
    let mut total = 0;

    for button in document.select(&button_selector) {
        total += 1;
        let el = button.value();

        let has_name = !collapsed_text(&button).is_empty()
            || el.attr("aria-label").is_some_and(|v| !v.is_empty())
            || el.attr("aria-labelledby").is_some_and(|v| !v.is_empty())
            || el.attr("title").is_some_and(|v| !v.is_empty());

        let image_missing_alt = button
            .select(&img_selector)
            .next()
            .map(|img| img.value().attr("alt").map_or(true, |a| a.is_empty()))
            .unwrap_or(false);

        if image_missing_alt {
            issues.push(Issue {
                element: snippet(&button),
                issue: "Button with image missing alt text".to_string(),
                fix: "Add alt text to image or aria-label to button".to_string(),
            });
        } else if !has_name {
            issues.push(Issue {
                element: snippet(&button),
                issue: "Button missing accessible name".to_string(),
                fix: "Add text content, aria-label, or aria-labelledby".to_string(),
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
