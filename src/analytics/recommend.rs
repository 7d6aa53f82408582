//! Demographic-similarity course recommendation

use super::aggregation::CourseAggregator;
use super::error::{AnalyticsError, AnalyticsResult};
use super::ranking::{nearest_chain, RankedItem};
use crate::models::{CourseProfile, CourseRecord};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The learner a recommendation is made for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LearnerProfile {
    pub age: i32,

    /// 1 targets the percent-male axis, 0 the opposite end
    #[validate(range(min = 0, max = 1))]
    pub gender: i32,

    /// 1 when the learner holds a bachelor's degree or higher
    #[validate(range(min = 0, max = 1))]
    pub is_bachelor_or_higher: i32,
}

impl LearnerProfile {
    pub fn new(age: i32, gender: i32, is_bachelor_or_higher: i32) -> Self {
        Self {
            age,
            gender,
            is_bachelor_or_higher,
        }
    }

    /// Squared Euclidean distance to a course profile
    pub fn distance_to(&self, course: &CourseProfile) -> f64 {
        course.distance_to(
            self.age,
            flag(self.gender),
            flag(self.is_bachelor_or_higher),
        )
    }
}

fn flag(value: i32) -> u8 {
    u8::from(value != 0)
}

/// Ranks courses by how closely their audience matches a learner
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    recommend_num: usize,
}

impl Recommender {
    pub fn new(recommend_num: usize) -> Self {
        Self { recommend_num }
    }

    pub fn recommend_num(&self) -> usize {
        self.recommend_num
    }

    /// Every course profile scored by distance, nearest first
    ///
    /// Equal distances are ordered by descending title. There is one entry per
    /// course number, so a title shared by two course numbers appears twice.
    pub fn rank(
        &self,
        records: &[CourseRecord],
        learner: &LearnerProfile,
    ) -> AnalyticsResult<Vec<RankedItem>> {
        learner.validate()?;

        let mut items: Vec<RankedItem> = CourseAggregator::course_profiles(records)
            .into_iter()
            .map(|profile| {
                let distance = learner.distance_to(&profile);
                RankedItem::new(profile.title, distance)
            })
            .collect();

        nearest_chain().sort(&mut items);
        Ok(items)
    }

    /// The `recommend_num` nearest course titles
    ///
    /// Fails with `OutOfRange` when the dataset has fewer distinct course
    /// numbers than requested.
    pub fn recommend(
        &self,
        records: &[CourseRecord],
        learner: &LearnerProfile,
    ) -> AnalyticsResult<Vec<String>> {
        let ranked = self.rank(records, learner)?;

        if ranked.len() < self.recommend_num {
            return Err(AnalyticsError::OutOfRange(format!(
                "requested {} recommendations but only {} distinct courses exist",
                self.recommend_num,
                ranked.len()
            )));
        }

        Ok(ranked
            .into_iter()
            .take(self.recommend_num)
            .map(|item| item.label)
            .collect())
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(10)
    }
}
