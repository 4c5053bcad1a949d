use std::collections::HashMap;

use teloxide::prelude::*;

use crate::database::connection::DatabaseManager;
use crate::database::models::{Event, Participant};
use crate::utils::datetime::format_date;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::log_database_error;

/// How far back /log reaches.
const LOG_LIMIT: i64 = 10;

pub async fn handle_log(bot: Bot, msg: Message, db: &DatabaseManager) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    let events = match Event::recent(&db.pool, LOG_LIMIT).await {
        Ok(events) => events,
        Err(e) => {
            log_database_error("select", "events", &e.to_string());
            feedback.error("Failed to read the event history").await?;
            return Ok(());
        }
    };

    if events.is_empty() {
        feedback.info("No rounds recorded yet").await?;
        return Ok(());
    }

    let participants = match Participant::all(&db.pool).await {
        Ok(participants) => participants,
        Err(e) => {
            log_database_error("select", "participants", &e.to_string());
            feedback.error("Failed to read the participant list").await?;
            return Ok(());
        }
    };
    let names: HashMap<i64, &str> = participants
        .iter()
        .map(|p| (p.participant_id, p.display_name.as_str()))
        .collect();

    let mut message_text = format!("Last {} rounds, newest first:\n", events.len());
    for event in &events {
        if event.not_available {
            message_text.push_str(&format!("{} - holiday, nobody paid\n", format_date(event.date)));
        } else {
            let name = event
                .participant_id
                .and_then(|id| names.get(&id).copied())
                .unwrap_or("(no longer in the rotation)");
            message_text.push_str(&format!("{} - {}\n", format_date(event.date), name));
        }
    }

    feedback.info(&message_text).await?;

    Ok(())
}
