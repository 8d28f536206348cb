// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page language check - WCAG 3.1.1 Language of Page
//!
//! The document root must carry a non-empty `lang` attribute so assistive
//! technology can pick the right pronunciation rules.

use scraper::{Html, Selector};

use super::{CheckResult, Issue};

pub fn check(document: &Html) -> CheckResult {
    let html_selector = Selector::parse("html").expect("valid selector");

    let has_lang = document
        .select(&html_selector)
        .next()
        .and_then(|el| el.value().attr("lang"))
        .map(|lang| !lang.is_empty())
        .unwrap_or(false);

    let issues = if has_lang {
        Vec::new()
    } else {
        vec![Issue {
            element: "<html> tag".to_string(),
            issue: "Missing lang attribute".to_string(),
            fix: "Add lang='en' (or appropriate language) to <html> tag".to_string(),
        }]
    };

    CheckResult {
        total: 1,
        passed: usize::from(has_lang),
        failed: issues.len(),
        issues,
    }
}
