#![allow(dead_code)]

use jiff::{civil::date, tz::TimeZone, Zoned};
use taskboard_core::{params::ProjectInput, Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker backed by a fresh database file
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

pub fn project_input(description: &str, bucket: Option<&str>) -> ProjectInput {
    ProjectInput {
        description: description.to_string(),
        bucket: bucket.map(str::to_string),
        notes: None,
    }
}

/// 2024-03-10 12:00 UTC
pub fn fixed_now() -> Zoned {
    date(2024, 3, 10)
        .at(12, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("valid fixed clock")
}
