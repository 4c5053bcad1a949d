use teloxide::prelude::*;

use crate::database::connection::DatabaseManager;
use crate::database::models::{Event, Participant};
use crate::rotation::resolve_turn_order;
use crate::utils::feedback::{CommandFeedback, FeedbackType};
use crate::utils::logging::log_database_error;

pub async fn handle_ranking(bot: Bot, msg: Message, db: &DatabaseManager) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    let processing_msg = feedback.send_processing("Computing the turn queue...").await?;

    let participants = match Participant::all(&db.pool).await {
        Ok(participants) => participants,
        Err(e) => {
            log_database_error("select", "participants", &e.to_string());
            feedback
                .update_message(
                    processing_msg.id,
                    FeedbackType::Error,
                    "Failed to read the participant list",
                )
                .await?;
            return Ok(());
        }
    };

    if participants.is_empty() {
        feedback
            .update_message(
                processing_msg.id,
                FeedbackType::Info,
                "Nobody is in the rotation yet. An admin can add people with /participant <name>",
            )
            .await?;
        return Ok(());
    }

    let events = match Event::all_descending(&db.pool).await {
        Ok(events) => events,
        Err(e) => {
            log_database_error("select", "events", &e.to_string());
            feedback
                .update_message(
                    processing_msg.id,
                    FeedbackType::Error,
                    "Failed to read the event history",
                )
                .await?;
            return Ok(());
        }
    };

    let queue = resolve_turn_order(&participants, &events);

    let mut message_text = String::from("Turn queue, next payer first:\n");
    for (i, name) in queue.iter().enumerate() {
        message_text.push_str(&format!("{}. {}\n", i + 1, name));
    }

    feedback
        .update_message(processing_msg.id, FeedbackType::Success, &message_text)
        .await?;

    Ok(())
}
