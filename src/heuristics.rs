// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heuristic text-quality scoring that augments the rule checks.
//!
//! Approximate NLP signals over the same parsed tree: per-image alt text
//! quality, per-link text quality, a sentence-length readability score,
//! and a severity tally over the rule failures. All pure, all infallible;
//! the outputs feed checklist fix-text augmentation and are informational
//! beyond that.

use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;

use crate::checks::{collapsed_text, RuleResults};

/// Words that signal lazy alt text when they appear anywhere in it.
const POOR_ALT_INDICATORS: &[&str] = &[
    "image",
    "img",
    "photo",
    "picture",
    "pic",
    "graphic",
    "icon",
    "logo",
    "banner",
    "screenshot",
];

/// Case-insensitive patterns for vague link text.
const VAGUE_LINK_PATTERNS: &[&str] = &[
    r"click\s+here",
    r"read\s+more",
    r"^here$",
    r"^link$",
    r"^more$",
    r"^>>+$",
    r"^learn\s+more$",
    r"^see\s+more$",
];

/// Low-severity rule failures are individually capped at this count so a
/// noisy heuristic check cannot dominate the tally.
const LOW_SEVERITY_CAP: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct AltTextQuality {
    pub average_score: f64,
    pub total_images: usize,
    pub scored_images: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkTextQuality {
    pub vague_links: usize,
    pub average_quality: f64,
    pub total_links: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadingLevel {
    Easy,
    Moderate,
    Difficult,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct Readability {
    pub score: f64,
    pub level: ReadingLevel,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
}

/// Rule failures bucketed by severity, with the low bucket capped.
#[derive(Debug, Clone, Serialize)]
pub struct SeverityTally {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Bundle of all heuristic outputs for one document.
#[derive(Debug, Clone, Serialize)]
pub struct HeuristicResult {
    pub alt_text_quality: AltTextQuality,
    pub link_text_quality: LinkTextQuality,
    pub readability: Readability,
    pub severity_tally: SeverityTally,
}

/// Run every heuristic against the document and rule results.
pub fn score(document: &Html, rule_results: &RuleResults) -> HeuristicResult {
    HeuristicResult {
        alt_text_quality: alt_text_quality(document),
        link_text_quality: link_text_quality(document),
        readability: readability(document),
        severity_tally: severity_tally(rule_results),
    }
}

/// Score alt text per image on a 0-100 scale.
///
/// Images with empty or missing alt score 0. Otherwise start at 100 and
/// deduct for poor-indicator words, short text, and the bare
/// "generic word + digits" pattern; long descriptive text earns a bonus.
fn alt_text_quality(document: &Html) -> AltTextQuality {
    let img_selector = Selector::parse("img").expect("valid selector");
    let generic_re =
        Regex::new(r"^(image|img|photo|picture)\s*\d*$").expect("valid regex");

    let mut scores: Vec<i32> = Vec::new();
    let mut total_images = 0;

    for img in document.select(&img_selector) {
        total_images += 1;
        let alt = img.value().attr("alt").unwrap_or("");

        if alt.trim().is_empty() {
            scores.push(0);
            continue;
        }

        let alt_lower = alt.trim().to_lowercase();
        let length = alt.chars().count();
        let mut score: i32 = 100;

        if POOR_ALT_INDICATORS
            .iter()
            .any(|indicator| alt_lower.contains(indicator))
        {
            score -= 30;
        }

        if length < 5 {
            score -= 20;
        } else if length < 10 {
            score -= 10;
        }

        if generic_re.is_match(&alt_lower) {
            score -= 40;
        }

        if length > 20 {
            score += 10;
        }

        scores.push(score.clamp(0, 100));
    }

    let average_score = if scores.is_empty() {
        0.0
    } else {
        round1(scores.iter().sum::<i32>() as f64 / scores.len() as f64)
    };

    AltTextQuality {
        average_score,
        total_images,
        scored_images: scores.len(),
    }
}

/// Score link text descriptiveness, preferring `aria-label` over visible
/// text. Vague matches score 30, very short text 40, everything else
/// `min(100, 50 + 2 x length)`.
fn link_text_quality(document: &Html) -> LinkTextQuality {
    let link_selector = Selector::parse("a[href]").expect("valid selector");
    let patterns: Vec<Regex> = VAGUE_LINK_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect();

    let mut scores: Vec<i32> = Vec::new();
    let mut vague_links = 0;
    let mut total_links = 0;

    for link in document.select(&link_selector) {
        total_links += 1;
        let text = collapsed_text(&link);
        let aria_label = link.value().attr("aria-label").unwrap_or("");

        if text.is_empty() && aria_label.is_empty() {
            vague_links += 1;
            scores.push(0);
            continue;
        }

        let display = if aria_label.is_empty() { text.as_str() } else { aria_label };
        let display_lower = display.to_lowercase();
        let length = display.chars().count();

        if patterns.iter().any(|p| p.is_match(&display_lower)) {
            vague_links += 1;
            scores.push(30);
        } else if length < 3 {
            scores.push(40);
        } else {
            scores.push((50 + 2 * length as i32).min(100));
        }
    }

    let average_quality = if scores.is_empty() {
        0.0
    } else {
        round1(scores.iter().sum::<i32>() as f64 / scores.len() as f64)
    };

    LinkTextQuality {
        vague_links,
        average_quality,
        total_links,
    }
}

/// Sentence-length readability over paragraph, heading, and list text.
fn readability(document: &Html) -> Readability {
    let text_selector =
        Selector::parse("p, h1, h2, h3, h4, h5, h6, li").expect("valid selector");
    let sentence_re = Regex::new(r"[.!?]+").expect("valid regex");

    let text = document
        .select(&text_selector)
        .map(|el| collapsed_text(&el))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        return Readability {
            score: 0.0,
            level: ReadingLevel::Unknown,
            word_count: 0,
            sentence_count: 0,
            avg_sentence_length: 0.0,
        };
    }

    let word_count = text.split_whitespace().count();
    let sentence_count = sentence_re
        .split(&text)
        .filter(|s| !s.trim().is_empty())
        .count();

    let avg_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    let score = (100.0 - avg_sentence_length * 2.0).clamp(0.0, 100.0);

    let level = if score >= 70.0 {
        ReadingLevel::Easy
    } else if score >= 50.0 {
        ReadingLevel::Moderate
    } else {
        ReadingLevel::Difficult
    };

    Readability {
        score: round1(score),
        level,
        word_count,
        sentence_count,
        avg_sentence_length: round1(avg_sentence_length),
    }
}

/// Sum rule failures into severity buckets. The low bucket caps each
/// contributing check at `LOW_SEVERITY_CAP` failures.
fn severity_tally(rule_results: &RuleResults) -> SeverityTally {
    let failed = |key: &str| rule_results.get(key).map(|r| r.failed).unwrap_or(0);

    SeverityTally {
        high: failed("images") + failed("forms") + failed("lang_attribute"),
        medium: failed("headings") + failed("buttons"),
        low: failed("links").min(LOW_SEVERITY_CAP)
            + failed("color_contrast").min(LOW_SEVERITY_CAP),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
