//! Derived board state: task statuses, completion projections, job board.
//!
//! Everything in this module is pure and read-only. Inputs are loaded fresh
//! for every request and the derived values are recomputed on every call;
//! nothing is cached between requests because rows can change at any time.
//!
//! ```text
//! task rows ──▶ TaskLookup ──▶ resolve_status      ──▶ TaskStatus
//!                         └──▶ resolve_job_status  ──▶ JobStatus (or omitted)
//!
//! ScheduleSource ──▶ ScheduleInput ──▶ project_completion ──▶ CompletionEstimate
//! ```
//!
//! The two derivations disagree on purpose: status resolution treats a
//! dependency as blocking, while the completion projection sums pending
//! durations serially and ignores dependency edges entirely.

pub mod assemble;
pub mod lookup;
pub mod schedule;
pub mod status;

pub use assemble::{assemble_job_board, assemble_projects};
pub use lookup::TaskLookup;
pub use schedule::{
    estimate_for, project_completion, ActiveWindow, ScheduleInput, ScheduleSource,
};
pub use status::{resolve_job_status, resolve_status};
