// SPDX-License-Identifier: PMPL-1.0-or-later
//! Score aggregation: reduces the checklist to a single 0-100 number.
//!
//! Base score is the fraction of checklist items that pass. A
//! severity-weighted multiplicative penalty is applied on top, derived
//! from per-severity failure *rates* (failed elements over total elements
//! inspected) scaled by fixed ceilings and capped. A floor guarantees a
//! mostly-passing page never collapses to a tiny score.

use serde::Serialize;
use tracing::debug;

use crate::checklist::{ChecklistItem, Status};
use crate::checks::Severity;

/// Penalty ceiling for high-severity failure rate.
const HIGH_PENALTY_CEILING: f64 = 0.25;
/// Penalty ceiling for medium-severity failure rate.
const MEDIUM_PENALTY_CEILING: f64 = 0.12;
/// Penalty ceiling for low-severity failure rate.
const LOW_PENALTY_CEILING: f64 = 0.05;
/// Combined penalty never exceeds this.
const TOTAL_PENALTY_CAP: f64 = 0.35;
/// Floor multiplier: a page keeps at least this share of its pass ratio.
const PASS_RATIO_FLOOR: f64 = 60.0;

/// Terminal scoring artifact returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub overall_score: u32,
    pub pass_percentage: f64,
    pub total_checks: usize,
    pub passed: usize,
    pub failed: usize,
    pub high_issues: usize,
    pub medium_issues: usize,
    pub low_issues: usize,
}

/// Reduce a checklist to an overall score and summary counts.
///
/// Pure arithmetic; an empty checklist degrades to a score of 100.
pub fn aggregate(checklist: &[ChecklistItem]) -> ScoreSummary {
    let total_checks = checklist.len();
    let passed = checklist
        .iter()
        .filter(|item| item.status == Status::Pass)
        .count();
    let failed = total_checks - passed;

    let severity_failed = |severity: Severity| -> usize {
        checklist
            .iter()
            .filter(|item| item.severity == severity)
            .map(|item| item.failed)
            .sum()
    };
    let high_issues = severity_failed(Severity::High);
    let medium_issues = severity_failed(Severity::Medium);
    let low_issues = severity_failed(Severity::Low);

    let base_score = if total_checks > 0 {
        passed as f64 / total_checks as f64 * 100.0
    } else {
        100.0
    };

    debug!(
        "Scoring: {}/{} checks passed, base_score={}",
        passed, total_checks, base_score
    );
    debug!(
        "Issue counts - High: {}, Medium: {}, Low: {}",
        high_issues, medium_issues, low_issues
    );

    let total_elements: usize = checklist.iter().map(|item| item.total).sum();

    let mut overall_score = if total_elements > 0 {
        let elements = total_elements as f64;
        let high_penalty = high_issues as f64 / elements * HIGH_PENALTY_CEILING;
        let medium_penalty = medium_issues as f64 / elements * MEDIUM_PENALTY_CEILING;
        let low_penalty = low_issues as f64 / elements * LOW_PENALTY_CEILING;
        let total_penalty =
            (high_penalty + medium_penalty + low_penalty).min(TOTAL_PENALTY_CAP);

        debug!(
            "Penalties - High: {:.4}, Medium: {:.4}, Low: {:.4}, Total: {:.4}",
            high_penalty, medium_penalty, low_penalty, total_penalty
        );

        base_score * (1.0 - total_penalty)
    } else {
        base_score
    };

    if passed > 0 {
        let min_score = passed as f64 / total_checks as f64 * PASS_RATIO_FLOOR;
        overall_score = overall_score.max(min_score);
    }

    overall_score = overall_score.clamp(0.0, 100.0);

    debug!("Final score: {}", overall_score);

    let pass_percentage = if total_checks > 0 {
        (passed as f64 / total_checks as f64 * 1000.0).round() / 10.0
    } else {
        0.0
    };

    ScoreSummary {
        overall_score: overall_score.round() as u32,
        pass_percentage,
        total_checks,
        passed,
        failed,
        high_issues,
        medium_issues,
        low_issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(severity: Severity, total: usize, failed: usize) -> ChecklistItem {
        ChecklistItem {
            check: "test check",
            wcag: "0.0.0",
            description: "test",
            status: if total == 0 || failed == 0 {
                Status::Pass
            } else {
                Status::Fail
            },
            severity,
            total,
            passed: total.saturating_sub(failed),
            failed,
            count: failed,
            fix: String::new(),
        }
    }

    #[test]
    fn test_empty_checklist_scores_100() {
        let summary = aggregate(&[]);
        assert_eq!(summary.overall_score, 100);
        assert_eq!(summary.pass_percentage, 0.0);
        assert_eq!(summary.total_checks, 0);
    }

    #[test]
    fn test_all_passing_scores_100() {
        let checklist = vec![
            item(Severity::High, 5, 0),
            item(Severity::Medium, 3, 0),
            item(Severity::Low, 0, 0),
        ];
        let summary = aggregate(&checklist);
        assert_eq!(summary.overall_score, 100);
        assert_eq!(summary.pass_percentage, 100.0);
    }

    #[test]
    fn test_penalty_formula_exact() {
        // 6/8 pass, 2 high-severity element failures, 1 medium, 2 elements
        // total: base 75, penalty min(2/2*0.25 + 1/2*0.12, 0.35) = 0.31,
        // 75 * 0.69 = 51.75 -> 52; floor 6/8*60 = 45 does not apply.
        let checklist = vec![
            item(Severity::High, 1, 1),
            item(Severity::High, 1, 1),
            item(Severity::Medium, 0, 1),
            item(Severity::Low, 0, 0),
            item(Severity::Low, 0, 0),
            item(Severity::High, 0, 0),
            item(Severity::Medium, 0, 0),
            item(Severity::Medium, 0, 0),
        ];
        let summary = aggregate(&checklist);
        assert_eq!(summary.passed, 6);
        assert_eq!(summary.high_issues, 2);
        assert_eq!(summary.medium_issues, 1);
        assert_eq!(summary.overall_score, 52);
    }

    #[test]
    fn test_penalty_capped_at_35_percent() {
        // Page-level issues can push failed counts past the element total,
        // so the raw penalty exceeds the cap: 5/1*0.25 = 1.25 -> 0.35.
        let checklist = vec![
            item(Severity::High, 1, 5),
            item(Severity::Medium, 0, 0),
            item(Severity::Low, 0, 0),
            item(Severity::High, 0, 0),
        ];
        let summary = aggregate(&checklist);
        // base 75, capped penalty 0.35 -> 48.75; floor 3/4*60 = 45.
        assert_eq!(summary.overall_score, 49);
    }

    #[test]
    fn test_floor_guarantees_pass_ratio_share() {
        // With the penalty capped at 0.35 the floor is a hard guarantee:
        // any page with passing checks keeps at least 60% of its pass
        // ratio, even under a total failure rate.
        let mut checklist = vec![item(Severity::High, 100, 100)];
        for _ in 0..7 {
            checklist.push(item(Severity::Low, 0, 0));
        }
        let summary = aggregate(&checklist);
        // base 87.5, high penalty at its 0.25 ceiling -> 65.625.
        assert_eq!(summary.overall_score, 66);
        assert!(summary.overall_score as f64 >= 7.0 / 8.0 * 60.0);
    }

    #[test]
    fn test_score_monotonic_in_passes() {
        let mut previous = 0;
        for passing in 0..=4 {
            let checklist: Vec<_> = (0..4)
                .map(|i| {
                    if i < passing {
                        item(Severity::High, 2, 0)
                    } else {
                        item(Severity::High, 2, 1)
                    }
                })
                .collect();
            let summary = aggregate(&checklist);
            assert!(
                summary.overall_score >= previous,
                "score dropped from {} to {} at {} passes",
                previous,
                summary.overall_score,
                passing
            );
            previous = summary.overall_score;
        }
    }

    #[test]
    fn test_score_always_in_range() {
        let checklist = vec![item(Severity::High, 1, 1)];
        let summary = aggregate(&checklist);
        assert!(summary.overall_score <= 100);
    }

    #[test]
    fn test_zero_elements_skips_penalty() {
        // Failed check with zero inspected elements anywhere: base only.
        let checklist = vec![item(Severity::High, 0, 1), item(Severity::Low, 0, 0)];
        let summary = aggregate(&checklist);
        // First item passes (total == 0), so base is 100.
        assert_eq!(summary.overall_score, 100);
    }
}
