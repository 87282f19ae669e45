//! Counters emitted by the evaluation pipeline.
//!
//! Recording goes through the `metrics` facade and is a no-op until the host
//! process installs a recorder.

use crate::Comment;

pub const EVALUATIONS_TOTAL: &str = "daily_coach_evaluations_total";
pub const COMMENTS_TOTAL: &str = "daily_coach_comments_total";
pub const COMMENTS_DROPPED_TOTAL: &str = "daily_coach_comments_dropped_total";

pub fn record_evaluation(shown: &[Comment], dropped: usize) {
    metrics::counter!(EVALUATIONS_TOTAL).increment(1);
    for comment in shown {
        metrics::counter!(
            COMMENTS_TOTAL,
            "category" => comment.category.as_str(),
            "tone" => comment.tone.as_str()
        )
        .increment(1);
    }
    if dropped > 0 {
        metrics::counter!(COMMENTS_DROPPED_TOTAL).increment(dropped as u64);
    }
}
