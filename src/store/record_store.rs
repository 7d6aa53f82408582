//! Immutable in-memory store of admitted course records

use crate::models::CourseRecord;
use crate::store::error::LoadResult;
use crate::store::loader::{CourseLoader, LoadStats};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Read-only record store, populated once and shared between queries
///
/// Cloning is cheap and every clone sees the same records in load order.
#[derive(Debug, Clone, Default)]
pub struct CourseStore {
    records: Arc<[CourseRecord]>,
    stats: LoadStats,
}

impl CourseStore {
    /// Create a store from already validated records
    pub fn new(records: Vec<CourseRecord>) -> Self {
        let stats = LoadStats {
            admitted: records.len(),
            skipped: 0,
        };
        Self {
            records: records.into(),
            stats,
        }
    }

    /// Load a store from a dataset file
    pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let outcome = CourseLoader::from_path(path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            admitted = outcome.stats.admitted,
            skipped = outcome.stats.skipped,
            "Course dataset loaded"
        );
        Ok(Self::from_outcome(outcome.records, outcome.stats))
    }

    /// Load a store from a reader over the dataset format
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let outcome = CourseLoader::from_reader(reader)?;
        tracing::info!(
            admitted = outcome.stats.admitted,
            skipped = outcome.stats.skipped,
            "Course dataset loaded"
        );
        Ok(Self::from_outcome(outcome.records, outcome.stats))
    }

    fn from_outcome(records: Vec<CourseRecord>, stats: LoadStats) -> Self {
        Self {
            records: records.into(),
            stats,
        }
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CourseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row counts from the load that built this store
    pub fn load_stats(&self) -> LoadStats {
        self.stats
    }
}

impl From<Vec<CourseRecord>> for CourseStore {
    fn from(records: Vec<CourseRecord>) -> Self {
        Self::new(records)
    }
}
