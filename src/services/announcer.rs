use std::sync::Arc;

use chrono::Utc;
use teloxide::prelude::*;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::database::connection::DatabaseManager;
use crate::database::models::{Event, Participant, User};
use crate::rotation::resolve_turn_order;
use crate::utils::datetime::is_payday;
use crate::utils::logging::log_system_event;

/// Broadcasts whose turn it is to every registered user on Friday mornings.
/// Delivery is best effort; a user the bot cannot reach is logged and
/// skipped.
pub struct AnnouncerService {
    bot: Bot,
    db: Arc<DatabaseManager>,
    scheduler: JobScheduler,
}

impl AnnouncerService {
    pub async fn new(
        bot: Bot,
        db: Arc<DatabaseManager>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self { bot, db, scheduler })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bot = self.bot.clone();
        let db = self.db.clone();

        // Friday mornings, 09:00 UTC
        let announce_job = Job::new_async("0 0 9 * * Fri", move |_uuid, _l| {
            let bot = bot.clone();
            let db = db.clone();
            Box::pin(async move {
                if let Err(e) = announce_round(bot, db).await {
                    tracing::error!("Failed to announce the round: {}", e);
                }
            })
        })?;

        self.scheduler.add(announce_job).await?;
        self.scheduler.start().await?;

        log_system_event("announcer started", Some("Fridays at 09:00 UTC"));
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    /// Manual trigger for debugging.
    pub async fn announce_now(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        announce_round(self.bot.clone(), self.db.clone()).await
    }
}

async fn announce_round(
    bot: Bot,
    db: Arc<DatabaseManager>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let today = Utc::now().date_naive();
    if !is_payday(today) {
        return Ok(());
    }

    let participants = Participant::all(&db.pool).await?;
    if participants.is_empty() {
        return Ok(());
    }

    let text = match Event::find_by_date(&db.pool, today).await? {
        Some(event) if event.not_available => "☕ No round today - holiday week.".to_string(),
        Some(event) => {
            let payer = event
                .participant_id
                .and_then(|id| participants.iter().find(|p| p.participant_id == id))
                .map(|p| p.display_name.as_str())
                .unwrap_or("someone no longer in the rotation");
            format!("☕ Cremaet day! Today's round is already logged: {payer} pays.")
        }
        None => {
            let events = Event::all_descending(&db.pool).await?;
            let queue = resolve_turn_order(&participants, &events);
            let Some(name) = queue.first() else {
                return Ok(());
            };
            format!("☕ Cremaet day! Today it's {name}'s turn to pay.")
        }
    };

    let users = User::all(&db.pool).await?;
    let recipients = users.len();
    for user in users {
        if let Err(e) = bot.send_message(ChatId(user.telegram_id), text.as_str()).await {
            tracing::warn!("Could not reach user {}: {}", user.telegram_id, e);
        }
    }
    log_system_event("round announced", Some(&format!("{recipients} recipients")));

    Ok(())
}
