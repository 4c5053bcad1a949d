pub mod callback;
pub mod general_message;
pub mod message;

use teloxide::{
    dispatching::{dialogue, UpdateHandler},
    prelude::*,
};

use crate::database::connection::DatabaseManager;

pub struct BotHandler {
    pub db: DatabaseManager,
    pub admin_password: String,
}

impl BotHandler {
    pub fn new(db: DatabaseManager, admin_password: String) -> Self {
        Self { db, admin_password }
    }

    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        use teloxide::dispatching::UpdateFilterExt;

        let db = self.db.clone();
        let db_text = self.db.clone();
        let db_callback = self.db.clone();
        let admin_password = self.admin_password.clone();

        dialogue::enter::<Update, teloxide::dispatching::dialogue::InMemStorage<()>, (), _>()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: crate::bot::commands::Command| {
                        let db = db.clone();
                        async move { message::command_handler(bot, msg, cmd, db).await }
                    }),
            )
            .branch(Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
                let db = db_text.clone();
                let admin_password = admin_password.clone();
                async move {
                    general_message::handle_general_message(bot, msg, db, admin_password).await
                }
            }))
            .branch(Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let db = db_callback.clone();
                async move { callback::callback_handler(bot, q, db).await }
            }))
    }
}
