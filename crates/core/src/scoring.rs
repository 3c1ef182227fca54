//! Aggregate scoring for employee evaluations.
//!
//! The total score is the arithmetic mean of the non-null self scores,
//! rounded half-up to two decimals. Null scores are excluded from the
//! denominator; an evaluation with no scored answers has no total score and
//! no grade. HR scores are stored but never blended into the total.

use serde::Serialize;

/// Computed score and letter grade for an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    /// Mean of non-null self scores, two decimals. None when no answer
    /// carries a score.
    pub total_score: Option<f64>,
    /// Letter grade derived from `total_score` via [`grade_for_score`].
    pub grade: Option<String>,
}

/// Grade band thresholds, highest first. A score at or above the threshold
/// earns the grade.
const GRADE_BANDS: &[(f64, &str)] = &[
    (90.0, "A"),
    (80.0, "B"),
    (70.0, "C"),
    (60.0, "D"),
];

/// Grade for scores below every band threshold.
const GRADE_FLOOR: &str = "F";

/// Compute the total score and grade from the self scores of an
/// evaluation's answers.
pub fn compute_score(self_scores: &[Option<i32>]) -> ScoreSummary {
    let scored: Vec<i32> = self_scores.iter().filter_map(|s| *s).collect();

    if scored.is_empty() {
        return ScoreSummary {
            total_score: None,
            grade: None,
        };
    }

    let sum: i64 = scored.iter().map(|s| i64::from(*s)).sum();
    let mean = sum as f64 / scored.len() as f64;
    let rounded = round_two_decimals(mean);

    ScoreSummary {
        total_score: Some(rounded),
        grade: Some(grade_for_score(rounded).to_string()),
    }
}

/// Map a total score to its letter grade.
pub fn grade_for_score(score: f64) -> &'static str {
    for (threshold, grade) in GRADE_BANDS {
        if score >= *threshold {
            return grade;
        }
    }
    GRADE_FLOOR
}

/// Round half-up to two decimal places.
fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_two_scores() {
        let summary = compute_score(&[Some(80), Some(90)]);
        assert_eq!(summary.total_score, Some(85.0));
        assert_eq!(summary.grade.as_deref(), Some("B"));
    }

    #[test]
    fn test_null_scores_excluded_from_denominator() {
        let summary = compute_score(&[Some(80), None, Some(90), None]);
        assert_eq!(summary.total_score, Some(85.0));
    }

    #[test]
    fn test_all_null_scores_yield_no_score() {
        let summary = compute_score(&[None, None]);
        assert_eq!(summary.total_score, None);
        assert_eq!(summary.grade, None);
    }

    #[test]
    fn test_empty_answer_set_yields_no_score() {
        let summary = compute_score(&[]);
        assert_eq!(summary.total_score, None);
        assert_eq!(summary.grade, None);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // (70 + 80 + 85) / 3 = 78.333... -> 78.33
        let summary = compute_score(&[Some(70), Some(80), Some(85)]);
        assert_eq!(summary.total_score, Some(78.33));

        // (85 + 90 + 92) / 3 = 89.0
        let summary = compute_score(&[Some(85), Some(90), Some(92)]);
        assert_eq!(summary.total_score, Some(89.0));
        assert_eq!(summary.grade.as_deref(), Some("B"));
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(grade_for_score(100.0), "A");
        assert_eq!(grade_for_score(90.0), "A");
        assert_eq!(grade_for_score(89.99), "B");
        assert_eq!(grade_for_score(80.0), "B");
        assert_eq!(grade_for_score(70.0), "C");
        assert_eq!(grade_for_score(60.0), "D");
        assert_eq!(grade_for_score(59.99), "F");
        assert_eq!(grade_for_score(0.0), "F");
    }

    #[test]
    fn test_single_score() {
        let summary = compute_score(&[Some(100)]);
        assert_eq!(summary.total_score, Some(100.0));
        assert_eq!(summary.grade.as_deref(), Some("A"));
    }
}
