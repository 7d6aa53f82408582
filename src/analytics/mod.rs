//! Analytical query engine over course records
//!
//! Four query families run against the immutable [`CourseStore`](crate::store::CourseStore):
//!
//! - **Aggregation**: participant totals per institution or institution/subject,
//!   and solo/co-taught portfolios per instructor
//! - **Ranking**: top-K distinct titles by hours or participants
//! - **Search**: subject substring plus audit and hours thresholds
//! - **Recommendation**: courses whose averaged audience is closest to a learner
//!
//! # Example
//!
//! ```no_run
//! use course_analyzer::analytics::CourseAnalyzer;
//! use course_analyzer::models::RankMetric;
//! use course_analyzer::store::CourseStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = CourseStore::load("data/online_courses.csv")?;
//!     let analyzer = CourseAnalyzer::new(store);
//!
//!     let top = analyzer.rank_courses(10, RankMetric::Participants);
//!     let picks = analyzer.recommend_courses(25, 1, 1)?;
//!     println!("{top:?}\n{picks:?}");
//!
//!     Ok(())
//! }
//! ```

mod aggregation;
mod engine;
mod error;
mod ranking;
mod recommend;
mod search;

pub use aggregation::{group_by, group_by_each, CourseAggregator};
pub use engine::CourseAnalyzer;
pub use error::{AnalyticsError, AnalyticsResult};
pub use ranking::{
    distinct_labels, nearest_chain, top_k_chain, CourseRanker, RankedItem, SortChain, SortKey,
    SortOrder,
};
pub use recommend::{LearnerProfile, Recommender};
pub use search::{CourseMatcher, CourseQuery, CourseSearch};
