//! Conjunctive filtering of course records

use crate::models::CourseRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Search criteria; a record must satisfy all of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseQuery {
    /// Case-insensitive substring of the course subject; empty matches all
    pub subject: String,

    /// Minimum percent audited, inclusive
    pub min_audited: f64,

    /// Maximum total course hours, inclusive
    pub max_hours: f64,
}

impl CourseQuery {
    /// Create a query with no audit or hours limits
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            min_audited: 0.0,
            max_hours: f64::INFINITY,
        }
    }

    pub fn with_min_audited(mut self, min_audited: f64) -> Self {
        self.min_audited = min_audited;
        self
    }

    pub fn with_max_hours(mut self, max_hours: f64) -> Self {
        self.max_hours = max_hours;
        self
    }

    /// Compile the query for repeated matching
    pub fn matcher(&self) -> CourseMatcher<'_> {
        CourseMatcher {
            subject: self.subject.to_lowercase(),
            query: self,
        }
    }
}

/// A query with its subject needle lower-cased once
pub struct CourseMatcher<'a> {
    subject: String,
    query: &'a CourseQuery,
}

impl CourseMatcher<'_> {
    pub fn matches(&self, record: &CourseRecord) -> bool {
        record.course_subject.to_lowercase().contains(&self.subject)
            && record.percent_audited >= self.query.min_audited
            && record.total_course_hours <= self.query.max_hours
    }
}

/// Title search over the record store
pub struct CourseSearch;

impl CourseSearch {
    /// Distinct matching titles in ascending order
    pub fn run(records: &[CourseRecord], query: &CourseQuery) -> Vec<String> {
        let matcher = query.matcher();
        records
            .iter()
            .filter(|r| matcher.matches(r))
            .map(|r| r.course_title.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
