//! Markdown display wrappers for board data.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! get newtype wrappers that also handle the empty case. The CLI renders the
//! resulting markdown with termimad.
//!
//! ```rust
//! use taskboard_core::{display::Resources, models::Resource};
//!
//! let resources = Resources(vec![Resource {
//!     id: 1,
//!     description: "Table saw".to_string(),
//! }]);
//! assert_eq!(resources.to_string(), "- Table saw (ID: 1)\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{JobBoard, ProjectOverview, Resources, DEFAULT_BUCKET};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
