//! Dashboard reports
//!
//! Bundles the individual metrics into the two shapes the dashboards render:
//! one [`StudentReport`] per student and one [`ClassReport`] per class.
//! An undefined indicator (zero total weight, empty pool) is reported as
//! `None`, meaning "insufficient data"; every other error propagates.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::class::{calculate_average_query_complexity, calculate_class_topic_average};
use crate::config::MetricsConfig;
use crate::error::{MetricsError, Result};
use crate::growth::calculate_complexity_growth_with;
use crate::mastery::{calculate_topic_mastery_with, normalize_topic_mastery};
use crate::query::calculate_query_analytics_with;
use crate::ranking::find_worst_performing_topics_with;
use crate::types::{AssessmentRecord, GrowthResult, QueryRecord, TopicScore};

/// Everything the host fetched for one student
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecords {
    pub student_id: String,
    pub assessments: Vec<AssessmentRecord>,
    /// Most-recent-first
    pub queries: Vec<QueryRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentReport {
    pub student_id: String,
    pub mastery: f64,
    pub normalized_mastery: f64,
    pub engagement: Option<f64>,
    pub growth: GrowthResult,
    pub assessment_count: usize,
    pub query_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassReport {
    pub class_average: f64,
    pub average_query_complexity: Option<f64>,
    pub worst_topics: Vec<TopicScore>,
    pub student_count: usize,
}

pub fn build_student_report(
    records: &StudentRecords,
    config: &MetricsConfig,
) -> Result<StudentReport> {
    config.validate()?;
    student_report(records, config)
}

/// Reports for many students, computed in parallel. Fails with the first
/// error encountered.
pub fn build_student_reports(
    students: &[StudentRecords],
    config: &MetricsConfig,
) -> Result<Vec<StudentReport>> {
    config.validate()?;
    students
        .par_iter()
        .map(|records| student_report(records, config))
        .collect()
}

/// Class view from already computed student reports.
///
/// `class_queries` is the pooled query history of the class and
/// `topic_scores` the per-topic class scores to rank.
pub fn build_class_report(
    reports: &[StudentReport],
    class_queries: &[QueryRecord],
    topic_scores: &[TopicScore],
    config: &MetricsConfig,
) -> Result<ClassReport> {
    let masteries: Vec<f64> = reports.iter().map(|r| r.mastery).collect();
    let class_average = calculate_class_topic_average(&masteries)?;
    let average_query_complexity =
        insufficient_as_none(calculate_average_query_complexity(class_queries))?;
    let worst_topics = find_worst_performing_topics_with(topic_scores, config.worst_topic_count)?;

    tracing::debug!(
        students = reports.len(),
        class_average,
        average_query_complexity = ?average_query_complexity,
        worst_topics = worst_topics.len(),
        "class report built"
    );

    Ok(ClassReport {
        class_average,
        average_query_complexity,
        worst_topics,
        student_count: reports.len(),
    })
}

/// Student reports plus the class view in one call. Queries of all students
/// are pooled for the class complexity average.
pub fn summarize_class(
    students: &[StudentRecords],
    topic_scores: &[TopicScore],
    config: &MetricsConfig,
) -> Result<(Vec<StudentReport>, ClassReport)> {
    let reports = build_student_reports(students, config)?;
    let pooled: Vec<QueryRecord> = students
        .iter()
        .flat_map(|s| s.queries.iter().copied())
        .collect();
    let class = build_class_report(&reports, &pooled, topic_scores, config)?;
    Ok((reports, class))
}

fn student_report(records: &StudentRecords, config: &MetricsConfig) -> Result<StudentReport> {
    let mastery = calculate_topic_mastery_with(&records.assessments, &config.weights)?;
    let normalized_mastery =
        normalize_topic_mastery(&records.assessments, &config.weights, config.max_score)?;
    let engagement = insufficient_as_none(calculate_query_analytics_with(
        &records.queries,
        &config.query_params(),
    ))?;
    let growth = calculate_complexity_growth_with(&records.queries, config.growth_window)?;

    tracing::debug!(
        student_id = %records.student_id,
        mastery,
        engagement = ?engagement,
        level_change = growth.level_change,
        "student report built"
    );

    Ok(StudentReport {
        student_id: records.student_id.clone(),
        mastery,
        normalized_mastery,
        engagement,
        growth,
        assessment_count: records.assessments.len(),
        query_count: records.queries.len(),
    })
}

fn insufficient_as_none(result: Result<f64>) -> Result<Option<f64>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(MetricsError::UndefinedResult(_)) | Err(MetricsError::EmptyInput(_)) => Ok(None),
        Err(err) => Err(err),
    }
}
