use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// One offering of a course: a specific run at a specific institution and year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CourseRecord {
    /// Course holder
    #[validate(length(min = 1))]
    pub institution: String,

    /// Identifier shared by every offering of the same course
    #[validate(length(min = 1))]
    pub course_number: String,

    pub launch_date: NaiveDate,

    #[validate(length(min = 1))]
    pub course_title: String,

    /// Instructors in listed order
    #[validate(length(min = 1))]
    pub instructors: Vec<String>,

    #[validate(length(min = 1))]
    pub course_subject: String,

    pub year: i32,

    /// Honor code certificates offered (1) or not (0)
    pub honor_code_certificates: u8,

    /// Participants who accessed the course
    pub participant_count: u64,

    /// Participants who audited more than 50% of the course
    pub audited_count: u64,

    pub certified_count: u64,

    pub percent_audited: f64,
    pub percent_certified: f64,

    /// Percent certified among participants who accessed more than 50%
    pub percent_certified_of_50: f64,

    pub percent_played_video: f64,
    pub percent_posted_forum: f64,
    pub percent_grade_above_zero: f64,

    /// Total course hours, in thousands
    pub total_course_hours: f64,

    pub median_hours_for_certification: f64,
    pub median_age: f64,
    pub percent_male: f64,
    pub percent_female: f64,
    pub percent_bachelor_or_higher: f64,
}

impl CourseRecord {
    /// Create a record with the identifying fields set and every metric zeroed
    pub fn new(
        institution: impl Into<String>,
        course_number: impl Into<String>,
        launch_date: NaiveDate,
        course_title: impl Into<String>,
        instructors: Vec<String>,
        course_subject: impl Into<String>,
    ) -> Self {
        Self {
            institution: institution.into(),
            course_number: course_number.into(),
            year: launch_date.year(),
            launch_date,
            course_title: course_title.into(),
            instructors,
            course_subject: course_subject.into(),
            honor_code_certificates: 0,
            participant_count: 0,
            audited_count: 0,
            certified_count: 0,
            percent_audited: 0.0,
            percent_certified: 0.0,
            percent_certified_of_50: 0.0,
            percent_played_video: 0.0,
            percent_posted_forum: 0.0,
            percent_grade_above_zero: 0.0,
            total_course_hours: 0.0,
            median_hours_for_certification: 0.0,
            median_age: 0.0,
            percent_male: 0.0,
            percent_female: 0.0,
            percent_bachelor_or_higher: 0.0,
        }
    }

    pub fn with_participants(mut self, count: u64) -> Self {
        self.participant_count = count;
        self
    }

    pub fn with_total_hours(mut self, hours: f64) -> Self {
        self.total_course_hours = hours;
        self
    }

    pub fn with_percent_audited(mut self, percent: f64) -> Self {
        self.percent_audited = percent;
        self
    }

    /// Set the demographic attributes used for recommendation profiles
    pub fn with_demographics(
        mut self,
        median_age: f64,
        percent_male: f64,
        percent_bachelor_or_higher: f64,
    ) -> Self {
        self.median_age = median_age;
        self.percent_male = percent_male;
        self.percent_female = 100.0 - percent_male;
        self.percent_bachelor_or_higher = percent_bachelor_or_higher;
        self
    }

    /// True when the course was taught by a single instructor
    pub fn is_solo(&self) -> bool {
        self.instructors.len() == 1
    }
}

/// Numeric attribute a course ranking is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RankMetric {
    /// Total course hours
    Hours,
    /// Participant count
    Participants,
}

impl RankMetric {
    /// Metric value of a record as a float
    pub fn value_of(&self, record: &CourseRecord) -> f64 {
        match self {
            RankMetric::Hours => record.total_course_hours,
            RankMetric::Participants => record.participant_count as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> CourseRecord {
        CourseRecord::new(
            "MITx",
            "6.002x",
            NaiveDate::from_ymd_opt(2012, 9, 5).unwrap(),
            "Circuits and Electronics",
            vec!["Khurram Afridi".to_string()],
            "Science, Technology, Engineering, and Mathematics",
        )
    }

    #[test]
    fn test_new_derives_year_from_launch_date() {
        assert_eq!(sample().year, 2012);
    }

    #[test]
    fn test_solo_instructor() {
        let mut record = sample();
        assert!(record.is_solo());

        record.instructors.push("Gerald Sussman".to_string());
        assert!(!record.is_solo());
    }

    #[test]
    fn test_record_validation() {
        let mut record = sample();
        assert!(record.validate().is_ok());

        record.instructors.clear();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_rank_metric_parsing() {
        assert_eq!(RankMetric::from_str("hours").unwrap(), RankMetric::Hours);
        assert_eq!(
            RankMetric::from_str("participants").unwrap(),
            RankMetric::Participants
        );
        assert!(RankMetric::from_str("rating").is_err());
        assert!(RankMetric::from_str("Hours").is_err());
        assert_eq!(RankMetric::Hours.to_string(), "hours");
    }

    #[test]
    fn test_rank_metric_value_of() {
        let record = sample().with_participants(42).with_total_hours(3.5);
        assert_eq!(RankMetric::Participants.value_of(&record), 42.0);
        assert_eq!(RankMetric::Hours.value_of(&record), 3.5);
    }
}
