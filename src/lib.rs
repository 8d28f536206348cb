// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-analyzer - WCAG Accessibility Analysis Service
//!
//! Fetches a web page under strict security and resource bounds, evaluates
//! it against eight structural WCAG checks, augments the results with
//! heuristic text-quality scoring, and reduces everything to a 0-100
//! compliance score with a categorized checklist and prioritized issues.
//!
//! ## Pipeline
//!
//! Strictly linear per request, leaves first:
//!
//! 1. **Fetcher** - SSRF-hardened retrieval with timeout and size ceilings
//! 2. **Checks** - eight independent rule evaluations over the parsed tree
//! 3. **Heuristics** - alt/link text quality, readability, severity tally
//! 4. **Checklist** - join with the static WCAG reference table
//! 5. **Score** - severity-weighted penalty math with floors and caps
//!
//! Every stage after the fetch is a pure function of the parsed document;
//! nothing is shared or persisted across requests.

pub mod api;
pub mod checklist;
pub mod checks;
pub mod error;
pub mod fetcher;
pub mod heuristics;
pub mod report;
pub mod score;

use scraper::Html;

use crate::fetcher::FetchResult;
use crate::report::AnalyzeResponse;

/// Run the full analysis pipeline over an already-fetched document.
///
/// Pure apart from the metadata timestamp carried in `fetch`: the same
/// HTML always yields an identical checklist and score.
pub fn analyze_document(url: &str, fetch: &FetchResult) -> AnalyzeResponse {
    let document = Html::parse_document(&fetch.html);

    let rule_results = checks::run_all(&document);
    let heuristic_results = heuristics::score(&document, &rule_results);
    let checklist = checklist::build(&rule_results, &heuristic_results);
    let summary = score::aggregate(&checklist);

    report::build_response(url, fetch, checklist, summary)
}
