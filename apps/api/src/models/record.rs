use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted row of `team_members`: the profile, its recommendation and the
/// identifier assigned on insert. Rows are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecordRow {
    pub id: i64,
    pub name: String,
    pub project_management: String,
    pub public_speaking: String,
    pub ppt_development: String,
    pub database_management: String,
    pub coding: String,
    pub deployment: String,
    pub passion: String,
    pub recommended_role: String,
    pub explanation: String,
}
