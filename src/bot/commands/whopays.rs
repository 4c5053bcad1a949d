use chrono::Utc;
use teloxide::prelude::*;

use crate::database::connection::DatabaseManager;
use crate::database::models::{Event, Participant};
use crate::rotation::resolve_turn_order;
use crate::utils::datetime::{format_date, next_occurrence};
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::log_database_error;

pub async fn handle_whopays(bot: Bot, msg: Message, db: &DatabaseManager) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    let participants = match Participant::all(&db.pool).await {
        Ok(participants) => participants,
        Err(e) => {
            log_database_error("select", "participants", &e.to_string());
            feedback.error("Failed to read the participant list").await?;
            return Ok(());
        }
    };

    if participants.is_empty() {
        feedback
            .info("Nobody is in the rotation yet. An admin can add people with /participant <name>")
            .await?;
        return Ok(());
    }

    let events = match Event::all_descending(&db.pool).await {
        Ok(events) => events,
        Err(e) => {
            log_database_error("select", "events", &e.to_string());
            feedback.error("Failed to read the event history").await?;
            return Ok(());
        }
    };

    let queue = resolve_turn_order(&participants, &events);

    // With no prior event the schedule anchors on today.
    let anchor = events
        .first()
        .map(|e| e.date)
        .unwrap_or_else(|| Utc::now().date_naive());
    let due = next_occurrence(anchor);

    if let Some(name) = queue.first() {
        feedback
            .success(&format!(
                "{} pays the next round, on {}",
                name,
                format_date(due)
            ))
            .await?;
    }

    Ok(())
}
