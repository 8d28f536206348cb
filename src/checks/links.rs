// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link text check - WCAG 2.4.4 Link Purpose (In Context)
//!
//! Anchors with an `href` need non-empty, non-vague visible text or an
//! `aria-label`; image-only links need alt text on the image.

use scraper::{Html, Selector};

use super::{collapsed_text, snippet, CheckResult, Issue};

/// Link texts too vague to convey purpose.
const VAGUE_TEXTS: &[&str] = &["click here", "read more", "here", "link", "more", ">>", ">>>"];

pub fn check(document: &Html) -> CheckResult {
    let link_selector = Selector::parse("a[href]").expect("valid selector");
    let img_selector = Selector::parse("img").expect("valid selector");

    let mut issues = Vec::new();
    let mut passed = 0;
    let mut total = 0;

    for link in document.select(&link_selector) {
        total += 1;
        let text = collapsed_text(&link).to_lowercase();
        let aria_label = link.value().attr("aria-label").unwrap_or("");

        if !aria_label.is_empty() {
            passed += 1;
            continue;
        }

        if text.is_empty() || VAGUE_TEXTS.contains(&text.as_str()) {
            issues.push(Issue {
                element: snippet(&link),
                issue: format!("Vague or empty link text: '{}'", text),
                fix: "Use descriptive link text or add aria-label".to_string(),
            });
            continue;
        }

        let image_missing_alt = link
            .select(&img_selector)
            .next()
            .map(|img| img.value().attr("alt").map_or(true, |a| a.is_empty()))
            .unwrap_or(false);

        if image_missing_alt {
            issues.push(Issue {
                element: snippet(&link),
                issue: "Image link missing alt text".to_string(),
                fix: "Add alt text to image or descriptive link text".to_string(),
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
    fn test_descriptive_link_passes() {
        let result = run(r#"<a href="/contact">Contact our support team</a>"#);
        assert_eq!(result.passed, 1);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn test_vague_texts_fail() {
        for text in ["click here", "Read More", "here", "more", ">>"] {
            let result = run(&format!(r#"<a href="/x">{}</a>"#, text));
            assert_eq!(result.failed, 1, "'{}' should be vague", text);
        }
    }

    #[test]
    fn test_empty_link_fails() {
        let result = run(r#"<a href="/x"></a>"#);
        assert_eq!(result.failed, 1);
        assert!(result.issues[0].issue.contains("Vague or empty"));
    }

    #[test]
    fn test_aria_label_rescues_vague_text() {
        let result = run(r#"<a href="/x" aria-label="Read the full pricing article">more</a>"#);
        assert_eq!(result.passed, 1);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn test_image_link_without_alt_fails() {
        let result = run(r#"<a href="/x">go<img src="icon.png"></a>"#);
        assert_eq!(result.failed, 1);
        assert_eq!(result.issues[0].issue, "Image link missing alt text");
    }

    #[test]
    fn test_image_link_with_alt_passes() {
        let result = run(r#"<a href="/x">go<img src="icon.png" alt="Company home page"></a>"#);
        assert_eq!(result.passed, 1);
    }

    #[test]
    fn test_anchor_without_href_out_of_scope() {
        let result = run("<a>just an anchor</a>");
        assert_eq!(result.total, 0);
    }
}
