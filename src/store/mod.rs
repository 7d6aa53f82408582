//! Record store and dataset ingestion
//!
//! The store is filled once from a delimited text source and never mutated.
//! Rows with a missing value in any column are dropped during loading; a row
//! that is complete but unparseable aborts the load.

mod error;
mod loader;
mod record_store;

pub use error::{LoadError, LoadResult};
pub use loader::{CourseLoader, LoadOutcome, LoadStats, COLUMNS, LAUNCH_DATE_FORMAT};
pub use record_store::CourseStore;
