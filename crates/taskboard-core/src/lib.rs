//! Core library for the taskboard project tracker.
//!
//! Projects hold tasks; tasks have a duration in days, optional start and
//! completion stamps, an optional single dependency, and a set of required
//! resources. On top of the stored rows this crate derives three things per
//! request:
//!
//! - a display **status** for every task ([`board::resolve_status`]),
//! - a **possible completion date** for every project
//!   ([`board::project_completion`]),
//! - the **job board**: for each resource, the tasks that can be worked on
//!   now ([`board::assemble_job_board`]).
//!
//! # Layers
//!
//! - [`models`] and [`params`]: plain data, serde shapes used by the REST API
//! - [`db`]: one SQLite connection per [`Database`], all SQL lives here
//! - [`board`]: pure derivation over loaded rows, no I/O
//! - [`tracker`]: async facade opening a fresh [`Database`] per call
//! - [`display`]: markdown `Display` wrappers for the terminal
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use taskboard_core::{
//!     params::{CreateResource, CreateTask, ProjectInput},
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let project = tracker
//!     .create_project(&ProjectInput {
//!         description: "Garden shed".to_string(),
//!         bucket: Some("Home".to_string()),
//!         notes: None,
//!     })
//!     .await?;
//! let saw = tracker
//!     .create_resource(&CreateResource {
//!         description: "Circular saw".to_string(),
//!     })
//!     .await?;
//! tracker
//!     .create_task(&CreateTask {
//!         project_id: project.id,
//!         description: "Cut rafters".to_string(),
//!         duration: 2,
//!         resource_ids: vec![saw.id],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for entry in tracker.job_board().await? {
//!     println!("{entry}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{JobBoard, LocalDateTime, OperationStatus, ProjectOverview, Resources};
pub use error::{Result, TrackerError};
pub use models::{
    CompletionEstimate, JobBoardEntry, JobStatus, Project, ProjectView, Resource, Task,
    TaskStatus,
};
pub use params::{CreateResource, CreateTask, LinkResource, ProjectInput, UpdateTask};
pub use tracker::{Tracker, TrackerBuilder};
