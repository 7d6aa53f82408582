//! In-memory analytical query engine over online course records.
//!
//! Records are loaded once into a [`store::CourseStore`] and queried through
//! [`analytics::CourseAnalyzer`]: grouped aggregation, top-K ranking,
//! substring/range search, and demographic-similarity recommendation.

pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use analytics::{AnalyticsError, AnalyticsResult, CourseAnalyzer};
pub use error::{AppError, Result};
pub use store::CourseStore;
