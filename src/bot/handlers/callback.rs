use chrono::Utc;
use teloxide::prelude::*;

use crate::database::connection::DatabaseManager;
use crate::database::models::{Event, Participant, User};
use crate::rotation::resolve_turn_order;
use crate::utils::datetime::{format_date, next_occurrence};
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::log_database_error;

/// Routes the quick-actions keyboard. Callback data is "menu:<action>".
pub async fn callback_handler(bot: Bot, q: CallbackQuery, db: DatabaseManager) -> ResponseResult<()> {
    let Some(data) = q.data.clone() else {
        bot.answer_callback_query(q.id)
            .text("Invalid callback data")
            .await?;
        return Ok(());
    };

    tracing::info!("Callback received: '{}' from user {}", data, q.from.id);

    let Some(action) = data.strip_prefix("menu:") else {
        bot.answer_callback_query(q.id).text("Unknown action").await?;
        return Ok(());
    };

    match action {
        "whopays" => {
            bot.answer_callback_query(q.id.clone()).await?;
            if let Some(message) = q.message {
                crate::bot::commands::whopays::handle_whopays(bot, message, &db).await?;
            }
        }
        "ranking" => {
            bot.answer_callback_query(q.id.clone()).await?;
            if let Some(message) = q.message {
                crate::bot::commands::ranking::handle_ranking(bot, message, &db).await?;
            }
        }
        "log" => {
            bot.answer_callback_query(q.id.clone()).await?;
            if let Some(message) = q.message {
                crate::bot::commands::log::handle_log(bot, message, &db).await?;
            }
        }
        "turn" => {
            let telegram_id = q.from.id.0 as i64;
            let is_admin = match User::is_admin(&db.pool, telegram_id).await {
                Ok(is_admin) => is_admin,
                Err(e) => {
                    log_database_error("select", "users", &e.to_string());
                    false
                }
            };
            if !is_admin {
                bot.answer_callback_query(q.id)
                    .text("Admins only. Send the admin password to unlock.")
                    .await?;
                return Ok(());
            }
            bot.answer_callback_query(q.id.clone()).await?;
            if let Some(message) = q.message {
                record_next_turn(bot, message, &db).await?;
            }
        }
        _ => {
            bot.answer_callback_query(q.id).text("Unknown action").await?;
        }
    }

    Ok(())
}

/// The one-tap shortcut: log a round for whoever the rotation says is next.
async fn record_next_turn(bot: Bot, msg: Message, db: &DatabaseManager) -> ResponseResult<()> {
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
    let Some(next_name) = queue.first() else {
        return Ok(());
    };
    let Some(payer) = participants.iter().find(|p| &p.display_name == next_name) else {
        return Ok(());
    };

    let anchor = events
        .first()
        .map(|e| e.date)
        .unwrap_or_else(|| Utc::now().date_naive());
    let date = next_occurrence(anchor);

    match Event::create(&db.pool, payer.participant_id, date).await {
        Ok(_) => {
            feedback
                .success(&format!(
                    "Recorded: {} pays on {}",
                    payer.display_name,
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
