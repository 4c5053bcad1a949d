use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::DbError;

/// A person in the rotation. Display names are unique across the group.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Participant {
    pub participant_id: i64,
    pub display_name: String,
    pub join_date: NaiveDate,
}

impl Participant {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        display_name: &str,
        join_date: NaiveDate,
    ) -> Result<Self, DbError> {
        sqlx::query("INSERT INTO participants (display_name, join_date) VALUES (?, ?)")
            .bind(display_name)
            .bind(join_date)
            .execute(pool)
            .await?;

        Self::find_by_display_name(pool, display_name)
            .await?
            .ok_or_else(|| DbError::from(sqlx::Error::RowNotFound))
    }

    pub async fn find_by_display_name(
        pool: &sqlx::SqlitePool,
        display_name: &str,
    ) -> Result<Option<Self>, DbError> {
        let participant = sqlx::query_as::<_, Participant>(
            "SELECT participant_id, display_name, join_date FROM participants WHERE display_name = ?",
        )
        .bind(display_name)
        .fetch_optional(pool)
        .await?;

        Ok(participant)
    }

    pub async fn all(pool: &sqlx::SqlitePool) -> Result<Vec<Self>, DbError> {
        let participants = sqlx::query_as::<_, Participant>(
            "SELECT participant_id, display_name, join_date FROM participants ORDER BY participant_id",
        )
        .fetch_all(pool)
        .await?;

        Ok(participants)
    }
}
