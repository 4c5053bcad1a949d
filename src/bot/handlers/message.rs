use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::database::connection::DatabaseManager;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: DatabaseManager,
) -> ResponseResult<()> {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            crate::bot::commands::start::handle_start(bot, msg, &db).await?;
        }
        Command::WhoPays => {
            crate::bot::commands::whopays::handle_whopays(bot, msg, &db).await?;
        }
        Command::Ranking => {
            crate::bot::commands::ranking::handle_ranking(bot, msg, &db).await?;
        }
        Command::Log => {
            crate::bot::commands::log::handle_log(bot, msg, &db).await?;
        }
        Command::Event { name } => {
            crate::bot::commands::event::handle_event(bot, msg, name, &db).await?;
        }
        Command::Holiday => {
            crate::bot::commands::holiday::handle_holiday(bot, msg, &db).await?;
        }
        Command::Participant { name } => {
            crate::bot::commands::participant::handle_participant(bot, msg, name, &db).await?;
        }
        Command::Menu => {
            crate::bot::commands::menu::handle_menu(bot, msg).await?;
        }
    }
    Ok(())
}
