//! Append-only persistence of a profile and its recommendation.
//!
//! There is no UPDATE or DELETE anywhere in this module. The id is assigned by
//! SQLite on insert.

use sqlx::SqlitePool;
use tracing::info;

use crate::models::profile::{Profile, Recommendation};
use crate::models::record::RecordRow;

/// Inserts one record and returns the id SQLite assigned to it.
pub async fn append_record(
    pool: &SqlitePool,
    profile: &Profile,
    recommendation: &Recommendation,
) -> Result<i64, sqlx::Error> {
    let id = sqlx::query(
        r#"
        INSERT INTO team_members
            (name, project_management, public_speaking, ppt_development,
             database_management, coding, deployment, passion,
             recommended_role, explanation)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&profile.name)
    .bind(profile.project_management.as_str())
    .bind(profile.public_speaking.as_str())
    .bind(profile.ppt_development.as_str())
    .bind(profile.database_management.as_str())
    .bind(profile.coding.as_str())
    .bind(profile.deployment.as_str())
    .bind(profile.passion.as_str())
    .bind(&recommendation.recommended_role)
    .bind(&recommendation.explanation)
    .execute(pool)
    .await?
    .last_insert_rowid();

    info!(
        "Appended record {id} (recommended_role={:?})",
        recommendation.recommended_role
    );
    Ok(id)
}

/// Returns every record in insertion order.
pub async fn list_records(pool: &SqlitePool) -> Result<Vec<RecordRow>, sqlx::Error> {
    sqlx::query_as::<_, RecordRow>("SELECT * FROM team_members ORDER BY id ASC")
        .fetch_all(pool)
        .await
}

pub async fn get_record(pool: &SqlitePool, id: i64) -> Result<Option<RecordRow>, sqlx::Error> {
    sqlx::query_as::<_, RecordRow>("SELECT * FROM team_members WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}
