use chrono::Utc;
use teloxide::prelude::*;

use crate::bot::commands::ensure_admin;
use crate::database::connection::DatabaseManager;
use crate::database::models::Participant;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{
    log_command_start, log_command_success, log_database_error, log_validation_error,
};
use crate::utils::validation::validate_display_name;

pub async fn handle_participant(
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
    log_command_start("/participant", username, telegram_id, msg.chat.id.0);

    if !ensure_admin(&feedback, db, telegram_id).await? {
        return Ok(());
    }

    let name = name.trim();
    if let Err(e) = validate_display_name(name) {
        log_validation_error("/participant", "name", name, &e.to_string());
        feedback
            .validation_error(
                &format!("Invalid display name: {e}"),
                "Usage: /participant <display name>",
            )
            .await?;
        return Ok(());
    }

    match Participant::create(&db.pool, name, Utc::now().date_naive()).await {
        Ok(participant) => {
            log_command_success(
                "/participant",
                username,
                telegram_id,
                msg.chat.id.0,
                &format!("participant {} added", participant.participant_id),
            );
            feedback
                .success(&format!(
                    "{} joined the rotation. Never having paid, they go to the front of the queue.",
                    participant.display_name
                ))
                .await?;
        }
        Err(e) if e.is_constraint() => {
            feedback
                .validation_error(
                    &format!("'{name}' is already in the rotation"),
                    "Display names are unique; pick another one",
                )
                .await?;
        }
        Err(e) => {
            log_database_error("insert", "participants", &e.to_string());
            feedback.error("Failed to add the participant").await?;
        }
    }

    Ok(())
}
