use chrono::Utc;
use teloxide::prelude::*;

use crate::bot::commands::ensure_admin;
use crate::database::connection::DatabaseManager;
use crate::database::models::Event;
use crate::utils::datetime::{format_date, next_occurrence};
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_command_start, log_command_success, log_database_error};

pub async fn handle_holiday(bot: Bot, msg: Message, db: &DatabaseManager) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot, msg.chat.id);
    let Some(from) = msg.from() else {
        return Ok(());
    };
    let telegram_id = from.id.0 as i64;
    let username = from.username.as_deref().unwrap_or("unknown");
    log_command_start("/holiday", username, telegram_id, msg.chat.id.0);

    if !ensure_admin(&feedback, db, telegram_id).await? {
        return Ok(());
    }

    let anchor = match Event::most_recent(&db.pool).await {
        Ok(event) => event
            .map(|e| e.date)
            .unwrap_or_else(|| Utc::now().date_naive()),
        Err(e) => {
            log_database_error("select", "events", &e.to_string());
            feedback.error("Failed to read the event history").await?;
            return Ok(());
        }
    };
    let date = next_occurrence(anchor);

    match Event::create_holiday(&db.pool, date).await {
        Ok(event) => {
            log_command_success(
                "/holiday",
                username,
                telegram_id,
                msg.chat.id.0,
                &format!("holiday {} on {}", event.event_id, event.date),
            );
            feedback
                .success(&format!(
                    "Holiday week: nobody pays on {}",
                    format_date(date)
                ))
                .await?;
        }
        Err(e) if e.is_constraint() => {
            feedback
                .validation_error(
                    &format!("There is already a round on {}", format_date(date)),
                    "Each date can hold a single round",
                )
                .await?;
        }
        Err(e) => {
            log_database_error("insert", "events", &e.to_string());
            feedback.error("Failed to record the holiday").await?;
        }
    }

    Ok(())
}
