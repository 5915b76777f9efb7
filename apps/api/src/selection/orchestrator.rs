//! Team selection — runs one submission end to end.
//!
//! Flow: build prompt → log user turn → completion (or fallback) →
//!       log assistant turn → extract recommendation → append record.
//!
//! Steps run strictly in order. A generation failure does not stop the flow;
//! a persistence failure does.

use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{complete_or_fallback, CompletionClient};
use crate::models::profile::Profile;
use crate::selection::extractor::extract_recommendation;
use crate::selection::prompts::build_recommendation_prompt;
use crate::selection::store::append_record;
use crate::selection::transcript::{Role, Transcript};

/// Result of one submission, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub record_id: i64,
    pub recommended_role: String,
    pub explanation: String,
    /// Set when the completion service failed and the fallback text was used.
    pub generation_error: Option<String>,
}

pub async fn submit(
    pool: &SqlitePool,
    client: &dyn CompletionClient,
    profile: Profile,
    transcript: &mut Transcript,
) -> Result<Submission, AppError> {
    let prompt = build_recommendation_prompt(&profile);
    transcript.push(Role::User, prompt.as_str());

    info!("Requesting role recommendation for {:?}", profile.name);
    let completion = complete_or_fallback(client, &prompt).await;
    transcript.push(Role::Assistant, completion.text.as_str());

    let recommendation = extract_recommendation(&completion.text);

    let record_id = append_record(pool, &profile, &recommendation)
        .await
        .map_err(|e| {
            warn!("Persisting submission failed: {e}");
            AppError::Database(e)
        })?;

    info!(
        "Submission stored as record {record_id} ({} transcript entries)",
        transcript.entries().len()
    );

    Ok(Submission {
        record_id,
        recommended_role: recommendation.recommended_role,
        explanation: recommendation.explanation,
        generation_error: completion.error.map(|e| e.to_string()),
    })
}
