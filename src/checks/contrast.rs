// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast heuristic - WCAG 1.4.3 Contrast (Minimum)
//!
//! This is a manual-review signal, not real contrast math: computing
//! actual ratios would need the CSS cascade and rendered colors. Instead
//! it flags elements with inline color styling, and separately flags
//! elements whose class names hint at low contrast. Both signals feed the
//! score like exact checks do; upgrading this to real luminance
//! computation would change scoring semantics.

use regex::Regex;
use scraper::{Html, Selector};

use super::{snippet, CheckResult, Issue};

/// How many text-bearing elements to sample for class-name hints.
const SAMPLE_SIZE: usize = 50;

/// Cap on reported issues; `failed` still counts all flags.
const MAX_REPORTED_ISSUES: usize = 10;

/// Class-name fragments commonly used for washed-out text.
const LOW_CONTRAST_HINTS: &[&str] = &["light", "muted", "gray", "grey", "fade"];

pub fn check(document: &Html) -> CheckResult {
    let styled_selector = Selector::parse("[style]").expect("valid selector");
    let text_selector = Selector::parse("p, span, div, a, li").expect("valid selector");
    // Case-sensitive on purpose: matches lowercase inline styles only.
    let color_re = Regex::new(r"color|background").expect("valid regex");

    let styled: Vec<_> = document
        .select(&styled_selector)
        .filter(|el| color_re.is_match(el.value().attr("style").unwrap_or("")))
        .collect();

    let mut issues = Vec::new();

    for element in &styled {
        let style = element.value().attr("style").unwrap_or("").to_lowercase();
        if style.contains("color:") || style.contains("background") {
            issues.push(Issue {
                element: snippet(element),
                issue: "Inline color styles detected".to_string(),
                fix: "Ensure text meets WCAG AA contrast ratio (4.5:1 for normal text)"
                    .to_string(),
            });
        }
    }

    let sampled: Vec<_> = document.select(&text_selector).take(SAMPLE_SIZE).collect();

    for element in &sampled {
        let classes = element.value().attr("class").unwrap_or("").to_lowercase();
        if LOW_CONTRAST_HINTS.iter().any(|hint| classes.contains(hint)) {
            issues.push(Issue {
                element: snippet(element),
                issue: "Potential low contrast (class-based)".to_string(),
                fix: "Verify text meets WCAG AA contrast ratio".to_string(),
            });
        }
    }

    let failed = issues.len();
    let passed = sampled.len().saturating_sub(failed);
    issues.truncate(MAX_REPORTED_ISSUES);

    CheckResult {
        total: styled.len() + sampled.len(),
        passed,
        failed,
        issues,
    }
}
