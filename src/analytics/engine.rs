//! Query facade over the record store

use super::aggregation::CourseAggregator;
use super::error::{AnalyticsError, AnalyticsResult};
use super::ranking::CourseRanker;
use super::recommend::{LearnerProfile, Recommender};
use super::search::{CourseQuery, CourseSearch};
use crate::config::RecommendationConfig;
use crate::models::{CourseProfile, GroupTotal, InstructorPortfolio, RankMetric};
use crate::store::CourseStore;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Answers analytical queries over an immutable course store
///
/// Every query is recomputed from the store on each call and nothing is
/// cached, so identical calls return identical results. The analyzer is
/// `Send + Sync` and can be shared across threads by cloning.
#[derive(Debug, Clone)]
pub struct CourseAnalyzer {
    store: CourseStore,
    recommender: Recommender,
}

impl CourseAnalyzer {
    /// Create an analyzer returning the default ten recommendations
    pub fn new(store: CourseStore) -> Self {
        Self {
            store,
            recommender: Recommender::default(),
        }
    }

    /// Create an analyzer using recommendation settings from configuration
    pub fn with_config(store: CourseStore, config: &RecommendationConfig) -> Self {
        Self::new(store).with_recommend_num(config.recommend_num)
    }

    pub fn with_recommend_num(mut self, recommend_num: usize) -> Self {
        self.recommender = Recommender::new(recommend_num);
        self
    }

    pub fn store(&self) -> &CourseStore {
        &self.store
    }

    pub fn recommend_num(&self) -> usize {
        self.recommender.recommend_num()
    }

    /// Total participants per institution, ascending by institution
    pub fn participants_by_institution(&self) -> BTreeMap<String, u64> {
        let totals = CourseAggregator::participants_by_institution(self.store.records());
        tracing::debug!(groups = totals.len(), "Aggregated participants by institution");
        totals
    }

    /// Total participants per institution and subject, largest first
    pub fn participants_by_institution_and_subject(&self) -> Vec<GroupTotal> {
        let totals =
            CourseAggregator::participants_by_institution_and_subject(self.store.records());
        tracing::debug!(
            groups = totals.len(),
            "Aggregated participants by institution and subject"
        );
        totals
    }

    /// Solo and co-taught titles of every instructor
    pub fn instructor_portfolios(&self) -> BTreeMap<String, InstructorPortfolio> {
        let portfolios = CourseAggregator::instructor_portfolios(self.store.records());
        tracing::debug!(instructors = portfolios.len(), "Built instructor portfolios");
        portfolios
    }

    /// Highest `top_k` distinct titles by `metric`
    pub fn rank_courses(&self, top_k: usize, metric: RankMetric) -> Vec<String> {
        let titles = CourseRanker::rank(self.store.records(), top_k, metric);
        tracing::debug!(top_k, %metric, results = titles.len(), "Ranked courses");
        titles
    }

    /// Like [`rank_courses`](Self::rank_courses) with the metric given by name
    pub fn rank_courses_by(&self, top_k: usize, by: &str) -> AnalyticsResult<Vec<String>> {
        let metric = RankMetric::from_str(by).map_err(|_| {
            AnalyticsError::InvalidArgument(format!(
                "unknown ranking metric '{by}', expected 'hours' or 'participants'"
            ))
        })?;
        Ok(self.rank_courses(top_k, metric))
    }

    /// Distinct titles matching all criteria, ascending
    pub fn search_courses(&self, subject: &str, min_audited: f64, max_hours: f64) -> Vec<String> {
        let query = CourseQuery::new(subject)
            .with_min_audited(min_audited)
            .with_max_hours(max_hours);
        self.search(&query)
    }

    pub fn search(&self, query: &CourseQuery) -> Vec<String> {
        let titles = CourseSearch::run(self.store.records(), query);
        tracing::debug!(
            subject = %query.subject,
            min_audited = query.min_audited,
            max_hours = query.max_hours,
            results = titles.len(),
            "Searched courses"
        );
        titles
    }

    /// Averaged demographic profile of each course number
    pub fn course_profiles(&self) -> Vec<CourseProfile> {
        CourseAggregator::course_profiles(self.store.records())
    }

    /// The configured number of course titles nearest to a learner
    pub fn recommend_courses(
        &self,
        age: i32,
        gender: i32,
        is_bachelor_or_higher: i32,
    ) -> AnalyticsResult<Vec<String>> {
        let learner = LearnerProfile::new(age, gender, is_bachelor_or_higher);
        let titles = self.recommender.recommend(self.store.records(), &learner)?;
        tracing::debug!(age, gender, is_bachelor_or_higher, "Recommended courses");
        Ok(titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseRecord;
    use chrono::NaiveDate;

    fn analyzer() -> CourseAnalyzer {
        let records = (0..3)
            .map(|i| {
                CourseRecord::new(
                    "MITx",
                    format!("N{i}"),
                    NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
                    format!("Title {i}"),
                    vec!["X".to_string()],
                    "CS",
                )
                .with_participants(10 * (i + 1))
            })
            .collect();
        CourseAnalyzer::new(CourseStore::new(records))
    }

    #[test]
    fn test_rank_courses_by_unknown_metric() {
        let err = analyzer().rank_courses_by(3, "rating").unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidArgument(_)));
    }

    #[test]
    fn test_rank_courses_by_name() {
        let titles = analyzer().rank_courses_by(2, "participants").unwrap();
        assert_eq!(titles, vec!["Title 2", "Title 1"]);
    }

    #[test]
    fn test_recommend_num_from_config() {
        let config = RecommendationConfig { recommend_num: 3 };
        let analyzer = CourseAnalyzer::with_config(analyzer().store().clone(), &config);
        assert_eq!(analyzer.recommend_num(), 3);
        assert_eq!(analyzer.recommend_courses(30, 1, 0).unwrap().len(), 3);
    }

    #[test]
    fn test_default_recommend_num_exceeds_small_dataset() {
        let err = analyzer().recommend_courses(30, 1, 0).unwrap_err();
        assert!(matches!(err, AnalyticsError::OutOfRange(_)));
    }

    #[test]
    fn test_analyzer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CourseAnalyzer>();
    }
}
