//! Grouping and per-group reduction over course records
//!
//! Every aggregate is computed in two phases: records are first partitioned
//! into groups (members keep load order), then each group is reduced on its
//! own. No accumulator is shared between groups.

use crate::models::{CourseProfile, CourseRecord, GroupTotal, InstructorPortfolio};
use std::collections::BTreeMap;

/// Partition records by a single derived key
pub fn group_by<'a, K, F>(
    records: &'a [CourseRecord],
    key: F,
) -> BTreeMap<K, Vec<&'a CourseRecord>>
where
    K: Ord,
    F: Fn(&CourseRecord) -> K,
{
    group_by_each(records, |record| std::iter::once(key(record)))
}

/// Partition records where one record may belong to several groups
pub fn group_by_each<'a, K, I, F>(
    records: &'a [CourseRecord],
    keys: F,
) -> BTreeMap<K, Vec<&'a CourseRecord>>
where
    K: Ord,
    I: IntoIterator<Item = K>,
    F: Fn(&CourseRecord) -> I,
{
    let mut groups: BTreeMap<K, Vec<&'a CourseRecord>> = BTreeMap::new();
    for record in records {
        for key in keys(record) {
            groups.entry(key).or_default().push(record);
        }
    }
    groups
}

/// Aggregations over the record store
pub struct CourseAggregator;

impl CourseAggregator {
    /// Total participants per institution, ascending by institution
    pub fn participants_by_institution(records: &[CourseRecord]) -> BTreeMap<String, u64> {
        group_by(records, |r| r.institution.clone())
            .into_iter()
            .map(|(institution, group)| (institution, sum_participants(&group)))
            .collect()
    }

    /// Total participants per `<institution>-<subject>`
    ///
    /// Ordered by descending total; equal totals are ordered by ascending key.
    pub fn participants_by_institution_and_subject(records: &[CourseRecord]) -> Vec<GroupTotal> {
        let mut totals: Vec<GroupTotal> = group_by(records, |r| {
            format!("{}-{}", r.institution, r.course_subject)
        })
        .into_iter()
        .map(|(key, group)| GroupTotal::new(key, sum_participants(&group)))
        .collect();

        // Groups arrive in ascending key order, so a stable sort keeps that as the tie-break.
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals
    }

    /// Solo and co-taught titles per instructor
    pub fn instructor_portfolios(
        records: &[CourseRecord],
    ) -> BTreeMap<String, InstructorPortfolio> {
        group_by_each(records, |r| r.instructors.clone())
            .into_iter()
            .map(|(instructor, group)| (instructor, build_portfolio(&group)))
            .collect()
    }

    /// Demographic profile per course number, ascending by course number
    pub fn course_profiles(records: &[CourseRecord]) -> Vec<CourseProfile> {
        group_by(records, |r| r.course_number.clone())
            .into_iter()
            .filter_map(|(course_number, group)| build_profile(course_number, &group))
            .collect()
    }
}

fn sum_participants(group: &[&CourseRecord]) -> u64 {
    group.iter().map(|r| r.participant_count).sum()
}

fn build_portfolio(group: &[&CourseRecord]) -> InstructorPortfolio {
    let mut portfolio = InstructorPortfolio::default();
    for record in group {
        let titles = if record.is_solo() {
            &mut portfolio.solo_titles
        } else {
            &mut portfolio.co_titles
        };
        titles.insert(record.course_title.clone());
    }
    portfolio
}

fn build_profile(course_number: String, group: &[&CourseRecord]) -> Option<CourseProfile> {
    // min_by_key keeps the first of several equal dates, i.e. load order.
    let representative = group.iter().min_by_key(|r| r.launch_date)?;

    Some(CourseProfile {
        title: representative.course_title.clone(),
        mean_age: mean(group, |r| r.median_age),
        mean_percent_male: mean(group, |r| r.percent_male),
        mean_percent_bachelor_or_higher: mean(group, |r| r.percent_bachelor_or_higher),
        offerings: group.len(),
        course_number,
    })
}

fn mean<F>(group: &[&CourseRecord], value: F) -> f64
where
    F: Fn(&CourseRecord) -> f64,
{
    if group.is_empty() {
        return 0.0;
    }
    group.iter().map(|r| value(*r)).sum::<f64>() / group.len() as f64
}
