//! Inputs for the completion projection, read straight from storage.

use rusqlite::params;

use super::utils::parse_stamp;
use crate::{
    board::{ActiveWindow, ScheduleSource},
    error::{DatabaseResultExt, Result},
};

const SELECT_ACTIVE_WINDOWS_SQL: &str = "SELECT Started, Duration FROM Tasks WHERE ProjectID = ?1 AND Started IS NOT NULL AND Completed IS NULL ORDER BY TaskID";
const SELECT_PENDING_TOTAL_SQL: &str =
    "SELECT SUM(Duration) FROM Tasks WHERE ProjectID = ?1 AND Started IS NULL";

impl ScheduleSource for super::Database {
    fn active_windows(&self, project_id: u64) -> Result<Vec<ActiveWindow>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ACTIVE_WINDOWS_SQL)
            .db_context("Failed to prepare query")?;

        let windows = stmt
            .query_map(params![project_id as i64], |row| {
                let raw: String = row.get(0)?;
                let started = parse_stamp(&raw).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        0,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(ActiveWindow {
                    started,
                    duration_days: row.get(1)?,
                })
            })
            .db_context("Failed to query active tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch active tasks")?;

        Ok(windows)
    }

    fn pending_duration_total(&self, project_id: u64) -> Result<i64> {
        let total: Option<i64> = self
            .connection
            .query_row(SELECT_PENDING_TOTAL_SQL, params![project_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to sum pending durations")?;

        Ok(total.unwrap_or(0))
    }
}
