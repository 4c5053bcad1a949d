use chrono::Utc;
use teloxide::prelude::*;

use crate::bot::commands::ensure_admin;
use crate::database::connection::DatabaseManager;
use crate::database::models::{Event, Participant};
use crate::utils::datetime::{format_date, next_occurrence};
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{
    log_command_start, log_command_success, log_database_error, log_validation_error,
};
use crate::utils::validation::validate_display_name;

pub async fn handle_event(
    bot: Bot,
    msg: Message,
    name: String,
    db: &DatabaseManager,
) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot, msg.chat.id);
    let Some(from) = msg.from() else {
        return Ok(());
    };
    let telegram_id = from.id.0 as i64;
    let username = from.username.as_deref().unwrap_or("unknown");
    log_command_start("/event", username, telegram_id, msg.chat.id.0);

    if !ensure_admin(&feedback, db, telegram_id).await? {
        return Ok(());
    }

    let name = name.trim();
    if let Err(e) = validate_display_name(name) {
        log_validation_error("/event", "name", name, &e.to_string());
        feedback
            .validation_error(
                &format!("Invalid participant name: {e}"),
                "Usage: /event <participant name>",
            )
            .await?;
        return Ok(());
    }

    let participant = match Participant::find_by_display_name(&db.pool, name).await {
        Ok(Some(participant)) => participant,
        Ok(None) => {
            feedback
                .validation_error(
                    &format!("No participant called '{name}'"),
                    "Use /ranking to see who is in the rotation",
                )
                .await?;
            return Ok(());
        }
        Err(e) => {
            log_database_error("select", "participants", &e.to_string());
            feedback.error("Failed to read the participant list").await?;
            return Ok(());
        }
    };

    // Anchor the schedule on the most recent event, today when there is none.
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

    match Event::create(&db.pool, participant.participant_id, date).await {
        Ok(event) => {
            log_command_success(
                "/event",
                username,
                telegram_id,
                msg.chat.id.0,
                &format!("event {} on {}", event.event_id, event.date),
            );
            feedback
                .success(&format!(
                    "Recorded: {} pays on {}",
                    participant.display_name,
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
            feedback.error("Failed to record the round").await?;
        }
    }

    Ok(())
}
