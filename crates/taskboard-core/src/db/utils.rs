//! Row decoding and existence helpers shared by the query modules.

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use rusqlite::{params, types::Type, Connection, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Task,
};

pub(crate) const TASK_COLUMNS: &str =
    "TaskID, ProjectID, Description, Notes, Duration, Started, Completed, DependentTaskID";

pub(crate) const CHECK_PROJECT_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM Project WHERE ProjectID = ?1)";
pub(crate) const CHECK_TASK_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM Tasks WHERE TaskID = ?1)";
pub(crate) const CHECK_RESOURCE_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM Resources WHERE ResourceID = ?1)";

/// Parses a stored timestamp.
///
/// RFC 3339 instants are what this crate writes. Naive ISO datetimes without
/// an offset (`2024-05-01T09:30:00.123456`) are read as host-local time.
pub(crate) fn parse_stamp(raw: &str) -> std::result::Result<Timestamp, jiff::Error> {
    raw.parse::<Timestamp>().or_else(|err| {
        let naive = raw.parse::<DateTime>().map_err(|_| err)?;
        naive
            .to_zoned(TimeZone::system())
            .map(|zoned| zoned.timestamp())
    })
}

/// Reads a nullable timestamp column.
pub(crate) fn stamp_column(row: &Row, idx: usize) -> rusqlite::Result<Option<Timestamp>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| {
        parse_stamp(&s)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    })
    .transpose()
}

/// Builds a [`Task`] from a row selected with [`TASK_COLUMNS`].
pub(crate) fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get::<_, i64>(0)? as u64,
        project_id: row.get::<_, i64>(1)? as u64,
        description: row.get(2)?,
        notes: row.get(3)?,
        duration: row.get(4)?,
        started: stamp_column(row, 5)?,
        completed: stamp_column(row, 6)?,
        dependent_task_id: row.get::<_, Option<i64>>(7)?.map(|id| id as u64),
    })
}

/// Runs one of the `CHECK_*_EXISTS_SQL` queries for `id`.
pub(crate) fn row_exists(connection: &Connection, sql: &str, id: u64) -> Result<bool> {
    connection
        .query_row(sql, params![id as i64], |row| row.get(0))
        .db_context("Failed to check row existence")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339_stamp() {
        let stamp = parse_stamp("2024-03-01T08:00:00Z").unwrap();
        assert_eq!(stamp, Timestamp::from_second(1_709_280_000).unwrap());
    }

    #[test]
    fn test_parse_naive_stamp_as_local_time() {
        let stamp = parse_stamp("2024-03-01T08:00:00.250000").unwrap();
        let local = stamp.to_zoned(TimeZone::system());
        assert_eq!(local.date(), jiff::civil::date(2024, 3, 1));
        assert_eq!(local.hour(), 8);
    }

    #[test]
    fn test_parse_garbage_stamp_fails() {
        assert!(parse_stamp("yesterday").is_err());
    }
}
