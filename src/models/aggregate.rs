use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Summed participant count for one group key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub key: String,
    pub total: u64,
}

impl GroupTotal {
    pub fn new(key: impl Into<String>, total: u64) -> Self {
        Self {
            key: key.into(),
            total,
        }
    }
}

/// Titles an instructor has taught, split by whether they taught alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorPortfolio {
    /// Titles taught as the only listed instructor
    pub solo_titles: BTreeSet<String>,

    /// Titles taught with at least one co-instructor
    pub co_titles: BTreeSet<String>,
}

/// Averaged demographic vector of every offering sharing a course number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProfile {
    pub course_number: String,

    /// Title of the earliest-launched offering
    pub title: String,

    pub mean_age: f64,
    pub mean_percent_male: f64,
    pub mean_percent_bachelor_or_higher: f64,

    /// Number of offerings averaged into this profile
    pub offerings: usize,
}

impl CourseProfile {
    /// Squared Euclidean distance to a target profile
    ///
    /// `gender` and `is_bachelor_or_higher` are 0/1 flags scaled onto the
    /// percentage axes.
    pub fn distance_to(&self, age: i32, gender: u8, is_bachelor_or_higher: u8) -> f64 {
        (f64::from(age) - self.mean_age).powi(2)
            + (f64::from(gender) * 100.0 - self.mean_percent_male).powi(2)
            + (f64::from(is_bachelor_or_higher) * 100.0 - self.mean_percent_bachelor_or_higher)
                .powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let profile = CourseProfile {
            course_number: "C1".to_string(),
            title: "Intro".to_string(),
            mean_age: 25.0,
            mean_percent_male: 50.0,
            mean_percent_bachelor_or_higher: 60.0,
            offerings: 2,
        };

        assert_eq!(profile.distance_to(25, 1, 1), 4100.0);
        assert_eq!(profile.distance_to(25, 0, 0), 2500.0 + 3600.0);
    }
}
