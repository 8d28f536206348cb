// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text check - WCAG 1.1.1 Non-text Content
//!
//! Every `<img>` needs a non-empty, non-generic `alt`, unless it is
//! marked decorative with `aria-hidden="true"` or `role="presentation"`.

use scraper::{Html, Selector};

use super::{snippet, CheckResult, Issue};

/// Alt values too generic to describe anything.
const GENERIC_ALT_VALUES: &[&str] = &["image", "img", "photo", "picture"];

pub fn check(document: &Html) -> CheckResult {
    let img_selector = Selector::parse("img").expect("valid selector");
    let mut issues = Vec::new();
    let mut passed = 0;
    let mut total = 0;

    for img in document.select(&img_selector) {
        total += 1;
        let el = img.value();

        let decorative = el
            .attr("aria-hidden")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
            || el
                .attr("role")
                .map(|v| v.eq_ignore_ascii_case("presentation"))
                .unwrap_or(false);

        if decorative {
            passed += 1;
            continue;
        }

        match el.attr("alt") {
            None => issues.push(Issue {
                element: snippet(&img),
                issue: "Missing alt attribute".to_string(),
                fix: "Add alt='description' attribute to img tag".to_string(),
            }),
            Some(alt) if alt.trim().is_empty() => issues.push(Issue {
                element: snippet(&img),
                issue: "Empty alt text".to_string(),
                fix: "Add descriptive alt text or set alt='' if decorative".to_string(),
            }),
            Some(alt)
                if alt.trim().chars().count() < 3
                    || GENERIC_ALT_VALUES.contains(&alt.to_lowercase().as_str()) =>
            {
                issues.push(Issue {
                    element: snippet(&img),
                    issue: "Poor alt text quality".to_string(),
                    fix: format!("Replace '{}' with descriptive alt text", alt),
                })
            }
            Some(_) => passed += 1,
        }
    }

    CheckResult {
        total,
        passed,
        failed: issues.len(),
        issues,
    }
}
