use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::DbError;

/// One occurrence on the calendar: either a paid turn linked to a
/// participant, or a holiday placeholder with `not_available` set. Dates are
/// unique across all events.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub event_id: i64,
    pub participant_id: Option<i64>,
    pub date: NaiveDate,
    pub not_available: bool,
}

impl Event {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        participant_id: i64,
        date: NaiveDate,
    ) -> Result<Self, DbError> {
        sqlx::query("INSERT INTO events (participant_id, date, not_available) VALUES (?, ?, 0)")
            .bind(participant_id)
            .bind(date)
            .execute(pool)
            .await?;

        Self::find_by_date(pool, date)
            .await?
            .ok_or_else(|| DbError::from(sqlx::Error::RowNotFound))
    }

    /// Records a week nobody pays for. The date slot is still consumed.
    pub async fn create_holiday(pool: &sqlx::SqlitePool, date: NaiveDate) -> Result<Self, DbError> {
        sqlx::query("INSERT INTO events (participant_id, date, not_available) VALUES (NULL, ?, 1)")
            .bind(date)
            .execute(pool)
            .await?;

        Self::find_by_date(pool, date)
            .await?
            .ok_or_else(|| DbError::from(sqlx::Error::RowNotFound))
    }

    pub async fn find_by_date(
        pool: &sqlx::SqlitePool,
        date: NaiveDate,
    ) -> Result<Option<Self>, DbError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT event_id, participant_id, date, not_available FROM events WHERE date = ?",
        )
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(event)
    }

    /// The full history, most recent first: the order the rotation
    /// resolver expects.
    pub async fn all_descending(pool: &sqlx::SqlitePool) -> Result<Vec<Self>, DbError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT event_id, participant_id, date, not_available FROM events ORDER BY date DESC",
        )
        .fetch_all(pool)
        .await?;

        Ok(events)
    }

    pub async fn most_recent(pool: &sqlx::SqlitePool) -> Result<Option<Self>, DbError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT event_id, participant_id, date, not_available FROM events ORDER BY date DESC LIMIT 1",
        )
        .fetch_optional(pool)
        .await?;

        Ok(event)
    }

    pub async fn recent(pool: &sqlx::SqlitePool, limit: i64) -> Result<Vec<Self>, DbError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT event_id, participant_id, date, not_available FROM events ORDER BY date DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(events)
    }
}
