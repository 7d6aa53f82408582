//! Delimited-text loader producing validated course records

use crate::models::CourseRecord;
use crate::store::error::{LoadError, LoadResult};
use chrono::NaiveDate;
use csv::StringRecord;
use serde::Serialize;
use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use validator::Validate;

/// Column names in source order
pub const COLUMNS: [&str; 23] = [
    "Institution",
    "Course Number",
    "Launch Date",
    "Course Title",
    "Instructors",
    "Course Subject",
    "Year",
    "Honor Code Certificates",
    "Participants",
    "Audited",
    "Certified",
    "% Audited",
    "% Certified",
    "% Certified of > 50% Course Content Accessed",
    "% Played Video",
    "% Posted in Forum",
    "% Grade Higher Than Zero",
    "Total Course Hours (Thousands)",
    "Median Hours for Certification",
    "Median Age",
    "% Male",
    "% Female",
    "% Bachelor's Degree or Higher",
];

/// Launch dates are written month first
pub const LAUNCH_DATE_FORMAT: &str = "%m/%d/%Y";

const INSTRUCTOR_SEPARATOR: &str = ", ";

/// Row counts from one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub admitted: usize,
    pub skipped: usize,
}

/// Records admitted from a source, in source order
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub records: Vec<CourseRecord>,
    pub stats: LoadStats,
}

/// Reads the course dataset format
pub struct CourseLoader;

impl CourseLoader {
    /// Load records from a file on disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> LoadResult<LoadOutcome> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Reading course dataset");
        Self::from_reader(file)
    }

    /// Load records from any reader; the first line is a header
    ///
    /// Rows without exactly one value per column, or with any empty value,
    /// are skipped, as are rows whose parsed record fails validation (such as
    /// an instructor list that splits into no names). Admitted rows must
    /// parse cleanly.
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<LoadOutcome> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        let mut stats = LoadStats::default();

        for (index, result) in reader.records().enumerate() {
            let row = result?;
            let line = row
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);

            if !is_admissible(&row) {
                stats.skipped += 1;
                tracing::debug!(line, fields = row.len(), "Skipping incomplete row");
                continue;
            }

            let record = parse_row(&row, line)?;
            if let Err(errors) = record.validate() {
                stats.skipped += 1;
                tracing::debug!(line, error = %errors, "Skipping invalid record");
                continue;
            }

            records.push(record);
            stats.admitted += 1;
        }

        Ok(LoadOutcome { records, stats })
    }
}

fn is_admissible(row: &StringRecord) -> bool {
    row.len() == COLUMNS.len() && row.iter().all(|field| !field.is_empty())
}

fn parse_row(row: &StringRecord, line: u64) -> LoadResult<CourseRecord> {
    let fields = RowFields { row, line };

    Ok(CourseRecord {
        institution: fields.text(0),
        course_number: fields.text(1),
        launch_date: fields.date(2)?,
        course_title: fields.text(3),
        instructors: fields.instructors(4),
        course_subject: fields.text(5),
        year: fields.parse(6)?,
        honor_code_certificates: fields.parse(7)?,
        participant_count: fields.parse(8)?,
        audited_count: fields.parse(9)?,
        certified_count: fields.parse(10)?,
        percent_audited: fields.parse(11)?,
        percent_certified: fields.parse(12)?,
        percent_certified_of_50: fields.parse(13)?,
        percent_played_video: fields.parse(14)?,
        percent_posted_forum: fields.parse(15)?,
        percent_grade_above_zero: fields.parse(16)?,
        total_course_hours: fields.parse(17)?,
        median_hours_for_certification: fields.parse(18)?,
        median_age: fields.parse(19)?,
        percent_male: fields.parse(20)?,
        percent_female: fields.parse(21)?,
        percent_bachelor_or_higher: fields.parse(22)?,
    })
}

struct RowFields<'a> {
    row: &'a StringRecord,
    line: u64,
}

impl RowFields<'_> {
    fn raw(&self, index: usize) -> &str {
        self.row.get(index).unwrap_or_default()
    }

    fn text(&self, index: usize) -> String {
        self.raw(index).to_string()
    }

    fn instructors(&self, index: usize) -> Vec<String> {
        self.raw(index)
            .split(INSTRUCTOR_SEPARATOR)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn date(&self, index: usize) -> LoadResult<NaiveDate> {
        let value = self.raw(index);
        NaiveDate::parse_from_str(value, LAUNCH_DATE_FORMAT)
            .map_err(|e| self.invalid(index, e))
    }

    fn parse<T>(&self, index: usize) -> LoadResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.raw(index).parse().map_err(|e| self.invalid(index, e))
    }

    fn invalid(&self, index: usize, reason: impl Display) -> LoadError {
        LoadError::InvalidField {
            line: self.line,
            field: COLUMNS[index],
            value: self.text(index),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Institution,Course Number,Launch Date,Course Title,Instructors,Course Subject,Year,Honor Code Certificates,Participants (Course Content Accessed),Audited (> 50% Course Content Accessed),Certified,% Audited,% Certified,% Certified of > 50% Course Content Accessed,% Played Video,% Posted in Forum,% Grade Higher Than Zero,Total Course Hours (Thousands),Median Hours for Certification,Median Age,% Male,% Female,% Bachelor's Degree or Higher\n";

    const ROW: &str = "MITx,6.002x,09/05/2012,Circuits and Electronics,Khurram Afridi,\"Science, Technology, Engineering, and Mathematics\",2012,1,36105,5431,3003,15.04,8.32,54.98,83.2,8.17,28.97,418.94,64.45,26,88.28,11.72,60.68\n";

    #[test]
    fn test_parses_quoted_subject() {
        let data = format!("{HEADER}{ROW}");
        let outcome = CourseLoader::from_reader(data.as_bytes()).unwrap();

        assert_eq!(outcome.stats, LoadStats { admitted: 1, skipped: 0 });
        let record = &outcome.records[0];
        assert_eq!(
            record.course_subject,
            "Science, Technology, Engineering, and Mathematics"
        );
        assert_eq!(record.launch_date, NaiveDate::from_ymd_opt(2012, 9, 5).unwrap());
        assert_eq!(record.participant_count, 36105);
        assert_eq!(record.honor_code_certificates, 1);
        assert_eq!(record.median_age, 26.0);
        assert_eq!(record.percent_bachelor_or_higher, 60.68);
    }

    #[test]
    fn test_splits_instructors_in_order() {
        let row = ROW.replace("Khurram Afridi", "\"Anant Agarwal, Gerald Sussman\"");
        let data = format!("{HEADER}{row}");
        let outcome = CourseLoader::from_reader(data.as_bytes()).unwrap();

        assert_eq!(
            outcome.records[0].instructors,
            vec!["Anant Agarwal".to_string(), "Gerald Sussman".to_string()]
        );
    }

    #[test]
    fn test_skips_row_with_empty_field() {
        let incomplete = ROW.replace(",26,", ",,");
        let data = format!("{HEADER}{incomplete}{ROW}");
        let outcome = CourseLoader::from_reader(data.as_bytes()).unwrap();

        assert_eq!(outcome.stats, LoadStats { admitted: 1, skipped: 1 });
    }

    #[test]
    fn test_skips_row_with_wrong_field_count() {
        let data = format!("{HEADER}MITx,6.002x,09/05/2012\n{ROW}");
        let outcome = CourseLoader::from_reader(data.as_bytes()).unwrap();

        assert_eq!(outcome.stats.admitted, 1);
        assert_eq!(outcome.stats.skipped, 1);
    }

    #[test]
    fn test_unparseable_number_is_fatal() {
        let bad = ROW.replace(",36105,", ",lots,");
        let data = format!("{HEADER}{bad}");
        let err = CourseLoader::from_reader(data.as_bytes()).unwrap_err();

        match err {
            LoadError::InvalidField { line, field, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(field, "Participants");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skips_row_without_instructor_names() {
        let row = ROW.replace("Khurram Afridi", "\", \"");
        let data = format!("{HEADER}{row}{ROW}");
        let outcome = CourseLoader::from_reader(data.as_bytes()).unwrap();

        assert_eq!(outcome.stats, LoadStats { admitted: 1, skipped: 1 });
        assert!(outcome.records.iter().all(|r| !r.instructors.is_empty()));
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let err = CourseLoader::from_path("/nonexistent/courses.csv").unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
