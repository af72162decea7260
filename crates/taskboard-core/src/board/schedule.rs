//! Completion date projection for a project.
//!
//! The projection assumes a single worker: every active task runs to its
//! estimated end, then the pending tasks run back to back. Dependencies
//! between pending tasks are not considered, only their summed durations.

use jiff::{Span, Timestamp, Zoned};
use log::warn;

use crate::{error::Result, models::CompletionEstimate};

/// Largest day count a `jiff::Span` can carry.
const MAX_SPAN_DAYS: i64 = 7_304_484;

/// An active task reduced to what the projection needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    pub started: Timestamp,
    pub duration_days: i64,
}

/// Everything the projection reads for one project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleInput {
    /// Tasks that are started and not completed
    pub active: Vec<ActiveWindow>,
    /// Sum of durations of tasks that were never started
    pub pending_total: i64,
}

/// Storage handle the projection reads its inputs from.
///
/// Implemented by [`crate::Database`]; passed in explicitly so the
/// projection never reaches for ambient connection state.
pub trait ScheduleSource {
    /// Started-but-not-completed tasks of the project.
    fn active_windows(&self, project_id: u64) -> Result<Vec<ActiveWindow>>;

    /// Total duration of the project's never-started tasks, 0 when none.
    fn pending_duration_total(&self, project_id: u64) -> Result<i64>;

    fn schedule_input(&self, project_id: u64) -> Result<ScheduleInput> {
        Ok(ScheduleInput {
            active: self.active_windows(project_id)?,
            pending_total: self.pending_duration_total(project_id)?,
        })
    }
}

/// Loads the inputs for `project_id` from `source` and projects them.
pub fn estimate_for<S>(source: &S, project_id: u64, now: &Zoned) -> Result<CompletionEstimate>
where
    S: ScheduleSource + ?Sized,
{
    let input = source.schedule_input(project_id)?;
    Ok(project_completion(&input, now))
}

/// Projects when the remaining work described by `input` will be done.
///
/// The baseline is `now`, pushed out to the latest estimated end of the
/// active tasks when that lies in the future. Pending durations are added to
/// the baseline in calendar days in the time zone of `now`. With nothing
/// active and nothing pending the project counts as completed.
pub fn project_completion(input: &ScheduleInput, now: &Zoned) -> CompletionEstimate {
    let latest_active_end = input
        .active
        .iter()
        .map(|window| {
            let started = window.started.to_zoned(now.time_zone().clone());
            add_days(&started, window.duration_days)
        })
        .max_by_key(Zoned::timestamp);

    let baseline = match latest_active_end {
        Some(end) if end.timestamp() > now.timestamp() => end,
        _ => now.clone(),
    };

    if input.pending_total > 0 {
        CompletionEstimate::Possible(add_days(&baseline, input.pending_total).date())
    } else if !input.active.is_empty() {
        CompletionEstimate::Possible(baseline.date())
    } else {
        CompletionEstimate::AllCompleted
    }
}

/// Calendar-day addition that never fails; out of range results keep `at`.
fn add_days(at: &Zoned, days: i64) -> Zoned {
    let days = days.clamp(-MAX_SPAN_DAYS, MAX_SPAN_DAYS);
    match Span::new()
        .try_days(days)
        .and_then(|span| at.checked_add(span))
    {
        Ok(shifted) => shifted,
        Err(e) => {
            warn!("Cannot shift {at} by {days} days, keeping it unchanged: {e}");
            at.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone, ToSpan};

    use super::*;
    use crate::error::TrackerError;

    /// 2024-03-10 12:00 UTC
    fn fixed_now() -> Zoned {
        date(2024, 3, 10)
            .at(12, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    fn days_ago(now: &Zoned, days: i64) -> Timestamp {
        now.checked_sub(days.days()).unwrap().timestamp()
    }

    #[test]
    fn test_nothing_left_is_all_completed() {
        let estimate = project_completion(&ScheduleInput::default(), &fixed_now());
        assert_eq!(estimate, CompletionEstimate::AllCompleted);
    }

    #[test]
    fn test_pending_only_counts_from_now() {
        let input = ScheduleInput {
            active: Vec::new(),
            pending_total: 5,
        };
        assert_eq!(
            project_completion(&input, &fixed_now()),
            CompletionEstimate::Possible(date(2024, 3, 15))
        );
    }

    #[test]
    fn test_overdue_active_task_falls_back_to_now() {
        let now = fixed_now();
        let input = ScheduleInput {
            active: vec![ActiveWindow {
                started: days_ago(&now, 10),
                duration_days: 3,
            }],
            pending_total: 2,
        };
        assert_eq!(
            project_completion(&input, &now),
            CompletionEstimate::Possible(date(2024, 3, 12))
        );
    }

    #[test]
    fn test_active_task_without_pending_work() {
        let now = fixed_now();
        let input = ScheduleInput {
            active: vec![ActiveWindow {
                started: now.timestamp(),
                duration_days: 10,
            }],
            pending_total: 0,
        };
        assert_eq!(
            project_completion(&input, &now),
            CompletionEstimate::Possible(date(2024, 3, 20))
        );
    }

    #[test]
    fn test_overdue_active_task_without_pending_is_today() {
        let now = fixed_now();
        let input = ScheduleInput {
            active: vec![ActiveWindow {
                started: days_ago(&now, 30),
                duration_days: 1,
            }],
            pending_total: 0,
        };
        assert_eq!(
            project_completion(&input, &now),
            CompletionEstimate::Possible(date(2024, 3, 10))
        );
    }

    #[test]
    fn test_latest_active_end_sets_baseline() {
        let now = fixed_now();
        let input = ScheduleInput {
            active: vec![
                ActiveWindow {
                    started: days_ago(&now, 1),
                    duration_days: 3,
                },
                ActiveWindow {
                    started: days_ago(&now, 2),
                    duration_days: 8,
                },
            ],
            pending_total: 4,
        };
        // Second window ends 2024-03-16, plus four pending days.
        assert_eq!(
            project_completion(&input, &now),
            CompletionEstimate::Possible(date(2024, 3, 20))
        );
    }

    #[test]
    fn test_pending_days_cross_month_boundary() {
        let input = ScheduleInput {
            active: Vec::new(),
            pending_total: 25,
        };
        assert_eq!(
            project_completion(&input, &fixed_now()),
            CompletionEstimate::Possible(date(2024, 4, 4))
        );
    }

    #[test]
    fn test_non_positive_pending_total_is_ignored() {
        let input = ScheduleInput {
            active: Vec::new(),
            pending_total: -3,
        };
        assert_eq!(
            project_completion(&input, &fixed_now()),
            CompletionEstimate::AllCompleted
        );
    }

    #[test]
    fn test_huge_duration_does_not_panic() {
        let now = fixed_now();
        let input = ScheduleInput {
            active: vec![ActiveWindow {
                started: now.timestamp(),
                duration_days: i64::MAX,
            }],
            pending_total: i64::MAX,
        };
        assert!(matches!(
            project_completion(&input, &now),
            CompletionEstimate::Possible(_)
        ));
    }

    struct FixedSource {
        input: ScheduleInput,
    }

    impl ScheduleSource for FixedSource {
        fn active_windows(&self, _project_id: u64) -> Result<Vec<ActiveWindow>> {
            Ok(self.input.active.clone())
        }

        fn pending_duration_total(&self, _project_id: u64) -> Result<i64> {
            Ok(self.input.pending_total)
        }
    }

    struct FailingSource;

    impl ScheduleSource for FailingSource {
        fn active_windows(&self, project_id: u64) -> Result<Vec<ActiveWindow>> {
            Err(TrackerError::ProjectNotFound { id: project_id })
        }

        fn pending_duration_total(&self, _project_id: u64) -> Result<i64> {
            Ok(0)
        }
    }

    #[test]
    fn test_estimate_for_reads_from_source() {
        let source = FixedSource {
            input: ScheduleInput {
                active: Vec::new(),
                pending_total: 1,
            },
        };
        let estimate = estimate_for(&source, 1, &fixed_now()).unwrap();
        assert_eq!(estimate.date(), Some(date(2024, 3, 11)));
    }

    #[test]
    fn test_estimate_for_propagates_storage_errors() {
        let err = estimate_for(&FailingSource, 42, &fixed_now()).unwrap_err();
        assert!(matches!(err, TrackerError::ProjectNotFound { id: 42 }));
    }
}
