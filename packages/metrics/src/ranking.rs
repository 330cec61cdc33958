//! Weakest-topic ranking

use std::cmp::Ordering;

use crate::error::Result;
use crate::sanitize::validate_topic_scores;
use crate::types::{TopicScore, DEFAULT_WORST_TOPIC_COUNT};

/// The three lowest-scoring topics, worst first
pub fn find_worst_performing_topics(topic_scores: &[TopicScore]) -> Result<Vec<TopicScore>> {
    find_worst_performing_topics_with(topic_scores, DEFAULT_WORST_TOPIC_COUNT)
}

/// The `count` lowest-scoring topics in ascending score order.
///
/// Ties keep their input order. With fewer than `count` topics all of them
/// are returned. The input slice is left untouched.
pub fn find_worst_performing_topics_with(
    topic_scores: &[TopicScore],
    count: usize,
) -> Result<Vec<TopicScore>> {
    validate_topic_scores(topic_scores)?;

    let mut ranked: Vec<&TopicScore> = topic_scores.iter().collect();
    // stable: equal scores stay in input order
    ranked.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));

    Ok(ranked.into_iter().take(count).cloned().collect())
}
