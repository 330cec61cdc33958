//! # learning-metrics - learning analytics engine
//!
//! Turns already-fetched learning records into the indicators shown on the
//! student and instructor dashboards:
//!
//! - **Topic mastery** - weighted sum of graded assessments
//! - **Query analytics** - recency- and complexity-weighted query quality
//! - **Complexity growth** - change in query complexity between two windows
//! - **Class aggregation** - class mastery average, pooled query complexity
//! - **Topic ranking** - weakest topics, worst first
//!
//! ## Design
//!
//! - **Pure** - no I/O, no persistence, no state kept between calls
//! - **Explicit policy** - weights, decay and window sizes travel in
//!   [`MetricsConfig`] instead of module-level globals
//! - **Typed degenerate cases** - a zero denominator is an error or `None`,
//!   never a silent `0` or NaN
//!
//! ## Modules
//!
//! - [`weights`] - category weight table with neutral fallback
//! - [`mastery`] - topic mastery and its bounded normalization
//! - [`query`] - query engagement score
//! - [`growth`] - complexity growth between windows
//! - [`class`] - class-level averages
//! - [`ranking`] - weakest-topic ranking
//! - [`report`] - per-student and per-class dashboard reports
//! - [`config`] - policy configuration (JSON / environment)
//! - [`sanitize`] - numeric input validation
//! - [`types`] - shared records, results and defaults
//!
//! ## Example
//!
//! ```rust
//! use learning_metrics::{
//!     calculate_query_analytics, calculate_topic_mastery, AssessmentRecord, QueryRecord,
//! };
//!
//! let mastery = calculate_topic_mastery(&[
//!     AssessmentRecord::new("exam", 80.0),
//!     AssessmentRecord::new("quiz", 90.0),
//!     AssessmentRecord::new("homework", 70.0),
//! ])
//! .unwrap();
//! assert!((mastery - 81.0).abs() < 1e-9);
//!
//! let engagement = calculate_query_analytics(&[QueryRecord::new(0.8, 3.0)]).unwrap();
//! assert!((engagement - 0.8).abs() < 1e-9);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod class;
pub mod config;
pub mod error;
pub mod growth;
pub mod mastery;
pub mod query;
pub mod ranking;
pub mod report;
pub mod sanitize;
pub mod types;
pub mod weights;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use error::{MetricsError, Result};

pub use weights::WeightTable;

pub use mastery::{calculate_topic_mastery, calculate_topic_mastery_with, normalize_topic_mastery};

pub use query::{calculate_query_analytics, calculate_query_analytics_with, QueryAnalyticsParams};

pub use growth::{calculate_complexity_growth, calculate_complexity_growth_with};

pub use class::{calculate_average_query_complexity, calculate_class_topic_average};

pub use ranking::{find_worst_performing_topics, find_worst_performing_topics_with};

pub use config::MetricsConfig;

pub use report::{
    build_class_report, build_student_report, build_student_reports, summarize_class,
    ClassReport, StudentRecords, StudentReport,
};
