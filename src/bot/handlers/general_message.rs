use teloxide::prelude::*;

use crate::database::connection::DatabaseManager;
use crate::database::models::User;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_command_success, log_database_error};

/// Plain-text messages: the admin password unlock, plus gentle hints for
/// anything that looks like a mistyped command. Other chatter is ignored.
pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
    db: DatabaseManager,
    admin_password: String,
) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot, msg.chat.id);
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let text = text.trim();

    if text == admin_password {
        return promote_sender(&feedback, &msg, &db).await;
    }

    if text.starts_with('/') {
        let error_msg = format!(
            "Unknown command: {}",
            text.split_whitespace().next().unwrap_or(text)
        );
        feedback
            .validation_error(&error_msg, "Use /help to see all available commands")
            .await?;
    } else if text.to_lowercase().contains("pay") || text.to_lowercase().contains("cremaet") {
        feedback
            .info("Wondering about the round? /whopays tells you whose turn it is.")
            .await?;
    }
    // Other messages stay unanswered to avoid spam.

    Ok(())
}

async fn promote_sender(
    feedback: &CommandFeedback,
    msg: &Message,
    db: &DatabaseManager,
) -> ResponseResult<()> {
    let Some(from) = msg.from() else {
        return Ok(());
    };
    let telegram_id = from.id.0 as i64;
    let username = from.username.as_deref().unwrap_or("unknown");

    // First contact may happen through the password itself; register then.
    let known = match User::find_by_telegram_id(&db.pool, telegram_id).await {
        Ok(user) => user.is_some(),
        Err(e) => {
            log_database_error("select", "users", &e.to_string());
            feedback.error("Failed to update your permissions").await?;
            return Ok(());
        }
    };
    if !known {
        if let Err(e) =
            User::create(&db.pool, telegram_id, &from.first_name, from.last_name.as_deref()).await
        {
            log_database_error("insert", "users", &e.to_string());
            feedback.error("Failed to update your permissions").await?;
            return Ok(());
        }
    }

    match User::set_admin(&db.pool, telegram_id, true).await {
        Ok(true) => {
            log_command_success("admin-unlock", username, telegram_id, msg.chat.id.0, "promoted");
            feedback
                .success("You are an admin now. /event, /holiday and /participant are unlocked.")
                .await?;
        }
        Ok(false) => {
            feedback
                .error("Could not promote you, try /start first")
                .await?;
        }
        Err(e) => {
            log_database_error("update", "users", &e.to_string());
            feedback.error("Failed to update your permissions").await?;
        }
    }

    Ok(())
}
