use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::DbError;

/// A Telegram account that has talked to the bot. Only admins may log
/// turns or touch the participant list.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub telegram_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub is_admin: bool,
}

impl User {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        telegram_id: i64,
        first_name: &str,
        last_name: Option<&str>,
    ) -> Result<Self, DbError> {
        sqlx::query(
            "INSERT INTO users (telegram_id, first_name, last_name, is_admin) VALUES (?, ?, ?, 0)",
        )
        .bind(telegram_id)
        .bind(first_name)
        .bind(last_name)
        .execute(pool)
        .await?;

        Self::find_by_telegram_id(pool, telegram_id)
            .await?
            .ok_or_else(|| DbError::from(sqlx::Error::RowNotFound))
    }

    pub async fn find_by_telegram_id(
        pool: &sqlx::SqlitePool,
        telegram_id: i64,
    ) -> Result<Option<Self>, DbError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, telegram_id, first_name, last_name, is_admin FROM users WHERE telegram_id = ?",
        )
        .bind(telegram_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    pub async fn all(pool: &sqlx::SqlitePool) -> Result<Vec<Self>, DbError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT user_id, telegram_id, first_name, last_name, is_admin FROM users ORDER BY user_id",
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Flips the admin flag; false when no such user is registered.
    pub async fn set_admin(
        pool: &sqlx::SqlitePool,
        telegram_id: i64,
        is_admin: bool,
    ) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE users SET is_admin = ? WHERE telegram_id = ?")
            .bind(is_admin)
            .bind(telegram_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// False for unknown users as well as for registered non-admins.
    pub async fn is_admin(pool: &sqlx::SqlitePool, telegram_id: i64) -> Result<bool, DbError> {
        let user = Self::find_by_telegram_id(pool, telegram_id).await?;
        Ok(user.map(|u| u.is_admin).unwrap_or(false))
    }
}
