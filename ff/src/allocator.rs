//! Priority-weighted time allocation
//!
//! Splits a daily study budget across subjects in proportion to their priority
//! weight. Each share is truncated to whole hours, then the remainder truncated
//! to whole minutes. Truncation (never rounding) is part of the output format:
//! the displayed total can fall short of the budget by up to one minute per
//! subject.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Priority, SubjectRequest};
use crate::error::ValidationError;

/// Time assigned to one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub subject: String,
    pub priority: Priority,
    /// Whole hours (truncated)
    pub allocated_hours: u64,
    /// Whole minutes left after the hours, in `0..=59` (truncated)
    pub allocated_minutes: u8,
    /// `"2hr 30min"`, or `"2hr"` when minutes are zero
    pub formatted_label: String,
    /// Share in hours before truncation
    pub allocated_time: f64,
}

impl AllocationResult {
    /// Displayed allocation in minutes
    pub fn total_minutes(&self) -> u64 {
        self.allocated_hours.saturating_mul(60).saturating_add(u64::from(self.allocated_minutes))
    }

    /// Displayed allocation in hours
    pub fn displayed_hours(&self) -> f64 {
        self.allocated_hours as f64 + f64::from(self.allocated_minutes) / 60.0
    }
}

/// Render hours and minutes the way plans display them
pub fn format_label(hours: u64, minutes: u8) -> String {
    if minutes == 0 {
        format!("{}hr", hours)
    } else {
        format!("{}hr {}min", hours, minutes)
    }
}

/// Check the total-hours budget: finite and strictly positive
pub fn validate_hours(total_hours: f64) -> Result<(), ValidationError> {
    if total_hours.is_finite() && total_hours > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidDuration(total_hours.to_string()))
    }
}

/// Allocate `total_hours` across `requests` by priority weight
///
/// Results come back in input order. All input is validated before anything
/// is computed.
pub fn allocate(requests: &[SubjectRequest], total_hours: f64) -> Result<Vec<AllocationResult>, ValidationError> {
    debug!(count = requests.len(), total_hours, "allocate: called");

    if requests.is_empty() || requests.iter().any(|r| r.subject.is_empty()) {
        debug!("allocate: empty request list or subject name");
        return Err(ValidationError::MissingSubject);
    }
    validate_hours(total_hours)?;

    let total_weight: u32 = requests.iter().map(|r| r.priority.weight()).sum();
    debug!(total_weight, "allocate: weights summed");

    let results = requests
        .iter()
        .map(|request| {
            let weight = request.priority.weight();
            let allocated_time = (f64::from(weight) / f64::from(total_weight)) * total_hours;
            let hours = allocated_time.floor();
            // fraction is in [0, 1), so this stays below 60
            let minutes = ((allocated_time - hours) * 60.0).floor() as u8;
            let allocated_hours = hours as u64;

            AllocationResult {
                subject: request.subject.clone(),
                priority: request.priority,
                allocated_hours,
                allocated_minutes: minutes,
                formatted_label: format_label(allocated_hours, minutes),
                allocated_time,
            }
        })
        .collect();

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn req(subject: &str, priority: Priority) -> SubjectRequest {
        SubjectRequest::new(subject, priority)
    }

    fn labels(results: &[AllocationResult]) -> Vec<&str> {
        results.iter().map(|r| r.formatted_label.as_str()).collect()
    }

    #[test]
    fn test_high_and_low_split_evenly_into_hours() {
        let results = allocate(&[req("Math", Priority::High), req("Art", Priority::Low)], 8.0).unwrap();

        assert_eq!(labels(&results), vec!["6hr", "2hr"]);
        assert_eq!(results[0].allocated_hours, 6);
        assert_eq!(results[0].allocated_minutes, 0);
        assert_eq!(results[1].allocated_hours, 2);
    }

    #[test]
    fn test_minutes_are_truncated() {
        let results = allocate(
            &[
                req("Math", Priority::High),
                req("Art", Priority::Medium),
                req("Music", Priority::Low),
            ],
            7.0,
        )
        .unwrap();

        assert_eq!(labels(&results), vec!["3hr 30min", "2hr 19min", "1hr 9min"]);
        assert_eq!(results[1].allocated_minutes, 19);
        assert_eq!(results[2].allocated_minutes, 9);
    }

    #[test]
    fn test_results_keep_input_order_and_fields() {
        let input = vec![
            req("Zoology", Priority::Low),
            req("Algebra", Priority::High),
            req("Zoology", Priority::Medium),
        ];
        let results = allocate(&input, 6.0).unwrap();

        assert_eq!(results.len(), 3);
        for (request, result) in input.iter().zip(&results) {
            assert_eq!(request.subject, result.subject);
            assert_eq!(request.priority, result.priority);
        }
        assert_eq!(labels(&results), vec!["1hr", "3hr", "2hr"]);
    }

    #[test]
    fn test_single_subject_gets_everything() {
        let results = allocate(&[req("Physics", Priority::Low)], 2.75).unwrap();
        assert_eq!(results[0].formatted_label, "2hr 45min");
    }

    #[test]
    fn test_sub_hour_budget() {
        let results = allocate(&[req("Latin", Priority::High), req("Greek", Priority::High)], 0.5).unwrap();
        assert_eq!(labels(&results), vec!["0hr 15min", "0hr 15min"]);
    }

    #[test]
    fn test_empty_requests_rejected() {
        assert_eq!(allocate(&[], 8.0), Err(ValidationError::MissingSubject));
    }

    #[test]
    fn test_empty_subject_rejected() {
        let result = allocate(&[req("Math", Priority::High), req("", Priority::Low)], 8.0);
        assert_eq!(result, Err(ValidationError::MissingSubject));
    }

    #[test]
    fn test_bad_hours_rejected() {
        let input = [req("Math", Priority::High)];
        for hours in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(allocate(&input, hours), Err(ValidationError::InvalidDuration(_))),
                "expected rejection for {}",
                hours
            );
        }
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(2, 0), "2hr");
        assert_eq!(format_label(2, 30), "2hr 30min");
        assert_eq!(format_label(0, 5), "0hr 5min");
    }

    #[test]
    fn test_total_minutes() {
        let results = allocate(&[req("Math", Priority::High)], 3.5).unwrap();
        assert_eq!(results[0].total_minutes(), 210);
        assert!((results[0].displayed_hours() - 3.5).abs() < 1e-12);
    }

    fn priority_strategy() -> impl Strategy<Value = Priority> {
        prop_oneof![Just(Priority::High), Just(Priority::Medium), Just(Priority::Low)]
    }

    fn requests_strategy() -> impl Strategy<Value = Vec<SubjectRequest>> {
        prop::collection::vec(("[a-z]{1,8}", priority_strategy()), 1..20)
            .prop_map(|pairs| pairs.into_iter().map(|(s, p)| SubjectRequest::new(s, p)).collect())
    }

    proptest! {
        #[test]
        fn prop_same_length_and_order(requests in requests_strategy(), hours in 0.01f64..48.0) {
            let results = allocate(&requests, hours).unwrap();
            prop_assert_eq!(results.len(), requests.len());
            for (request, result) in requests.iter().zip(&results) {
                prop_assert_eq!(&request.subject, &result.subject);
                prop_assert_eq!(request.priority, result.priority);
            }
        }

        #[test]
        fn prop_shares_proportional_to_weight(requests in requests_strategy(), hours in 0.01f64..48.0) {
            let results = allocate(&requests, hours).unwrap();
            let first = &results[0];
            for result in &results {
                let expected = f64::from(result.priority.weight()) / f64::from(first.priority.weight());
                let actual = result.allocated_time / first.allocated_time;
                prop_assert!((actual - expected).abs() <= 1e-9 * expected);
            }
        }

        #[test]
        fn prop_truncation_bound(requests in requests_strategy(), hours in 0.01f64..48.0) {
            let results = allocate(&requests, hours).unwrap();
            let displayed: f64 = results.iter().map(AllocationResult::displayed_hours).sum();
            let n = results.len() as f64;
            prop_assert!(displayed <= hours + 1e-9);
            prop_assert!(hours - displayed < n / 60.0 + 1e-9);
        }

        #[test]
        fn prop_minutes_in_range_and_label_shape(requests in requests_strategy(), hours in 0.01f64..48.0) {
            for result in allocate(&requests, hours).unwrap() {
                prop_assert!(result.allocated_minutes < 60);
                if result.allocated_minutes == 0 {
                    prop_assert!(!result.formatted_label.contains("min"));
                } else {
                    prop_assert!(result.formatted_label.ends_with("min"));
                }
            }
        }

        #[test]
        fn prop_non_positive_hours_rejected(requests in requests_strategy(), hours in -48.0f64..=0.0) {
            prop_assert!(matches!(allocate(&requests, hours), Err(ValidationError::InvalidDuration(_))));
        }
    }
}
