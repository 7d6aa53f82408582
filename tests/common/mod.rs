//! Common test utilities for course analytics testing
//!
//! Provides a record builder and helpers that render records back into the
//! dataset's delimited text format.

#![allow(dead_code)]

use chrono::NaiveDate;
use course_analyzer::models::CourseRecord;
use course_analyzer::store::{CourseStore, COLUMNS, LAUNCH_DATE_FORMAT};

/// Builder for test course records
pub struct CourseBuilder {
    record: CourseRecord,
}

impl CourseBuilder {
    pub fn new(institution: &str, course_number: &str, title: &str) -> Self {
        Self {
            record: CourseRecord::new(
                institution,
                course_number,
                NaiveDate::from_ymd_opt(2014, 9, 1).unwrap(),
                title,
                vec!["Default Instructor".to_string()],
                "Computer Science",
            ),
        }
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.record.course_subject = subject.to_string();
        self
    }

    pub fn instructors(mut self, instructors: &[&str]) -> Self {
        self.record.instructors = instructors.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn launched(mut self, year: i32, month: u32, day: u32) -> Self {
        self.record.launch_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self.record.year = year;
        self
    }

    pub fn participants(mut self, count: u64) -> Self {
        self.record.participant_count = count;
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.record.total_course_hours = hours;
        self
    }

    pub fn audited(mut self, percent: f64) -> Self {
        self.record.percent_audited = percent;
        self
    }

    pub fn demographics(mut self, age: f64, male: f64, bachelor: f64) -> Self {
        self.record = self.record.with_demographics(age, male, bachelor);
        self
    }

    pub fn build(self) -> CourseRecord {
        self.record
    }
}

/// Store built from records in the given order
pub fn store_of(records: Vec<CourseRecord>) -> CourseStore {
    CourseStore::new(records)
}

/// Render records as a dataset file body, header included
pub fn to_csv(records: &[CourseRecord]) -> String {
    let mut out = COLUMNS.join(",");
    out.push('\n');
    for record in records {
        out.push_str(&to_csv_row(record));
        out.push('\n');
    }
    out
}

/// Render one record as a dataset row
pub fn to_csv_row(record: &CourseRecord) -> String {
    let fields = [
        quote(&record.institution),
        quote(&record.course_number),
        record.launch_date.format(LAUNCH_DATE_FORMAT).to_string(),
        quote(&record.course_title),
        quote(&record.instructors.join(", ")),
        quote(&record.course_subject),
        record.year.to_string(),
        record.honor_code_certificates.to_string(),
        record.participant_count.to_string(),
        record.audited_count.to_string(),
        record.certified_count.to_string(),
        record.percent_audited.to_string(),
        record.percent_certified.to_string(),
        record.percent_certified_of_50.to_string(),
        record.percent_played_video.to_string(),
        record.percent_posted_forum.to_string(),
        record.percent_grade_above_zero.to_string(),
        record.total_course_hours.to_string(),
        record.median_hours_for_certification.to_string(),
        record.median_age.to_string(),
        record.percent_male.to_string(),
        record.percent_female.to_string(),
        record.percent_bachelor_or_higher.to_string(),
    ];
    fields.join(",")
}

fn quote(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
