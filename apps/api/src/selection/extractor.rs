//! Pulls a (role, explanation) pair out of a free-text completion.
//!
//! Single forward pass over the lines of the completion:
//! - a line containing "recommend" (any case) sets the role to the text after
//!   its first colon, or the whole line when there is no colon. Text after a
//!   second colon stays part of the role ("Role: Lead: Data" gives "Lead: Data");
//!   do not switch this to the last colon
//! - a line containing "explain" or "reason" (any case) sets the explanation to
//!   the following line, when one exists
//!
//! Both rules are checked on every line and the scan never stops early, so the
//! last matching line wins for each field. Fields that never match keep their
//! sentinel defaults.

use crate::models::profile::Recommendation;

pub fn extract_recommendation(completion: &str) -> Recommendation {
    let mut recommendation = Recommendation::default();
    let lines: Vec<&str> = completion.split('\n').collect();

    for (i, line) in lines.iter().enumerate() {
        let lowered = line.to_lowercase();

        if lowered.contains("recommend") {
            let role = line.split_once(':').map_or(*line, |(_, rest)| rest);
            recommendation.recommended_role = role.trim().to_string();
        }

        if lowered.contains("explain") || lowered.contains("reason") {
            if let Some(next) = lines.get(i + 1) {
                recommendation.explanation = next.trim().to_string();
            }
        }
    }

    recommendation
}
