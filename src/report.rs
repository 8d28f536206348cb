// SPDX-License-Identifier: PMPL-1.0-or-later
//! Response assembly for the analysis API.
//!
//! Flattens the checklist and score into the wire envelope: summary
//! counts, the full checklist, a prioritized fail-only issues list, and
//! fetch metadata.

use serde::Serialize;

use crate::checklist::{ChecklistItem, Status};
use crate::checks::Severity;
use crate::fetcher::FetchResult;
use crate::score::ScoreSummary;

/// Complete analysis response for one request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub url: String,
    pub overall_score: u32,
    pub summary: Summary,
    pub checklist: Vec<ChecklistItem>,
    pub issues: Vec<IssueEntry>,
    pub metadata: Metadata,
}

/// Headline counts from the score aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_checks: usize,
    pub passed: usize,
    pub failed: usize,
    pub high_issues: usize,
    pub medium_issues: usize,
    pub low_issues: usize,
}

/// One failing check, flattened for the prioritized issue list.
#[derive(Debug, Clone, Serialize)]
pub struct IssueEntry {
    pub check: &'static str,
    pub wcag: &'static str,
    pub severity: Severity,
    pub fix: String,
    pub count: usize,
}

/// Fetch metadata echoed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub title: String,
    pub timestamp: String,
    pub html_size: usize,
}

/// Assemble the response envelope. Fail items become the issues list,
/// sorted High to Low (stable, so table order breaks ties).
pub fn build_response(
    url: &str,
    fetch: &FetchResult,
    checklist: Vec<ChecklistItem>,
    score: ScoreSummary,
) -> AnalyzeResponse {
    let mut issues: Vec<IssueEntry> = checklist
        .iter()
        .filter(|item| item.status == Status::Fail)
        .map(|item| IssueEntry {
            check: item.check,
            wcag: item.wcag,
            severity: item.severity,
            fix: item.fix.clone(),
            count: item.count,
        })
        .collect();
    issues.sort_by_key(|issue| issue.severity);

    AnalyzeResponse {
        url: url.to_string(),
        overall_score: score.overall_score,
        summary: Summary {
            total_checks: checklist.len(),
            passed: score.passed,
            failed: score.failed,
            high_issues: score.high_issues,
            medium_issues: score.medium_issues,
            low_issues: score.low_issues,
        },
        checklist,
        issues,
        metadata: Metadata {
            title: fetch.title.clone().unwrap_or_else(|| "Unknown".to_string()),
            timestamp: fetch.fetched_at.to_rfc3339(),
            html_size: fetch.byte_size,
        },
    }
}
