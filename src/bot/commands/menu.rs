use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// The quick-actions keyboard shown on /start and /menu.
pub fn menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("💸 Who pays?", "menu:whopays"),
            InlineKeyboardButton::callback("📋 Ranking", "menu:ranking"),
        ],
        vec![
            InlineKeyboardButton::callback("🗓 Log", "menu:log"),
            InlineKeyboardButton::callback("☕ Record turn", "menu:turn"),
        ],
    ])
}

pub async fn handle_menu(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, "What do you need?")
        .reply_markup(menu_keyboard())
        .await?;
    Ok(())
}
