//! Splits a model reply into summary and recommendation
//!
//! A textual heuristic, not a parser: it assumes the model followed the
//! two-section format and does nothing to repair replies that did not.

use crate::models::AnalysisResult;

pub const SUMMARY_LABEL: &str = "Summary:";
pub const RECOMMENDATION_MARKER: &str = "Recommendation:";

/// Split on the first `Recommendation:` marker.
///
/// Everything before it, with `Summary:` removed and trimmed, is the summary.
/// Everything after it, trimmed, is the recommendation; later markers stay in
/// the recommendation text. Without a marker the recommendation is empty.
pub fn extract_sections(reply: &str) -> AnalysisResult {
    let (head, tail) = match reply.trim().split_once(RECOMMENDATION_MARKER) {
        Some((head, tail)) => (head, Some(tail)),
        None => (reply.trim(), None),
    };

    let summary = head.replace(SUMMARY_LABEL, "").trim().to_string();
    let recommendation = tail.map(str::trim).unwrap_or_default().to_string();

    AnalysisResult {
        summary,
        recommendation,
    }
}
