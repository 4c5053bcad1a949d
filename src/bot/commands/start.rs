use teloxide::prelude::*;

use crate::bot::commands::menu::menu_keyboard;
use crate::database::connection::DatabaseManager;
use crate::database::models::User;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_command_start, log_command_success, log_database_error};

pub async fn handle_start(bot: Bot, msg: Message, db: &DatabaseManager) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot.clone(), msg.chat.id);
    let Some(from) = msg.from() else {
        return Ok(());
    };
    let telegram_id = from.id.0 as i64;
    let username = from.username.as_deref().unwrap_or("unknown");
    log_command_start("/start", username, telegram_id, msg.chat.id.0);

    match User::find_by_telegram_id(&db.pool, telegram_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            match User::create(&db.pool, telegram_id, &from.first_name, from.last_name.as_deref())
                .await
            {
                Ok(user) => {
                    log_command_success(
                        "/start",
                        username,
                        telegram_id,
                        msg.chat.id.0,
                        &format!("registered user {}", user.user_id),
                    );
                }
                Err(e) => {
                    log_database_error("insert", "users", &e.to_string());
                    feedback
                        .error("Could not register you right now, try again later")
                        .await?;
                    return Ok(());
                }
            }
        }
        Err(e) => {
            log_database_error("select", "users", &e.to_string());
            feedback
                .error("Could not register you right now, try again later")
                .await?;
            return Ok(());
        }
    }

    bot.send_message(
        msg.chat.id,
        "☕ Welcome to the cremaet rotation!\n\nUse /whopays to see whose turn it is, /ranking for the full queue, or pick an action below.",
    )
    .reply_markup(menu_keyboard())
    .await?;

    Ok(())
}
