pub mod event;
pub mod holiday;
pub mod log;
pub mod menu;
pub mod participant;
pub mod ranking;
pub mod start;
pub mod whopays;

use teloxide::utils::command::BotCommands;

use crate::database::connection::DatabaseManager;
use crate::database::models::User;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::log_database_error;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Cremaet rotation bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Register with the bot and open the menu")]
    Start,
    #[command(description = "Show who pays the next round and when")]
    WhoPays,
    #[command(description = "Show the full turn queue")]
    Ranking,
    #[command(description = "Show the most recent rounds")]
    Log,
    #[command(description = "Record the next round for a participant (admin)")]
    Event { name: String },
    #[command(description = "Mark the next round as a holiday week (admin)")]
    Holiday,
    #[command(description = "Add a participant to the rotation (admin)")]
    Participant { name: String },
    #[command(description = "Open the quick actions menu")]
    Menu,
}

/// Admin gate shared by the mutating commands. Reports to the chat and
/// returns false when the caller may not proceed.
pub(crate) async fn ensure_admin(
    feedback: &CommandFeedback,
    db: &DatabaseManager,
    telegram_id: i64,
) -> teloxide::prelude::ResponseResult<bool> {
    match User::is_admin(&db.pool, telegram_id).await {
        Ok(true) => Ok(true),
        Ok(false) => {
            feedback
                .error("Only admins can do that. Send the admin password to unlock.")
                .await?;
            Ok(false)
        }
        Err(e) => {
            log_database_error("select", "users", &e.to_string());
            feedback.error("Failed to check permissions").await?;
            Ok(false)
        }
    }
}
