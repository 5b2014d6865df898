//! Message dispatch
//!
//! Pure-ish message handling over the repository and gateway ports, so the
//! whole conversation logic is testable on in-memory fakes. The polling
//! loop in `poller` feeds it batches of updates.

use std::sync::Arc;

use goals_core::entities::TgAccount;
use goals_core::traits::{BotGateway, GoalOrdering, GoalQuery, GoalRepository, TgAccountRepository};
use goals_core::value_objects::SnowflakeGenerator;
use goals_tg::{TgMessage, TgUpdate};
use tracing::{debug, info, instrument, warn};

/// Cap on goals listed into a single chat message
const MAX_LISTED_GOALS: i64 = 100;

/// Handles decoded updates and talks back through the gateway
pub struct BotDispatcher {
    tg_accounts: Arc<dyn TgAccountRepository>,
    goals: Arc<dyn GoalRepository>,
    gateway: Arc<dyn BotGateway>,
    ids: Arc<SnowflakeGenerator>,
    site_url: String,
}

impl BotDispatcher {
    /// Create a new BotDispatcher
    pub fn new(
        tg_accounts: Arc<dyn TgAccountRepository>,
        goals: Arc<dyn GoalRepository>,
        gateway: Arc<dyn BotGateway>,
        ids: Arc<SnowflakeGenerator>,
        site_url: String,
    ) -> Self {
        Self {
            tg_accounts,
            goals,
            gateway,
            ids,
            site_url,
        }
    }

    /// Process one batch of updates, returning the next offset
    ///
    /// The offset advances past each update BEFORE its message is handled,
    /// so a failing or malformed update is skipped and never re-fetched.
    /// Per-message errors are logged; they never abort the batch.
    pub async fn process_batch(&self, updates: Vec<TgUpdate>, mut offset: i64) -> i64 {
        for update in updates {
            offset = update.update_id + 1;

            let Some(message) = update.message else {
                debug!(update_id = update.update_id, "Update without a message, skipping");
                continue;
            };

            if let Err(e) = self.handle_message(&message).await {
                warn!(
                    update_id = update.update_id,
                    error = %e,
                    "Failed to handle message, skipping"
                );
            }
        }
        offset
    }

    /// Handle a single incoming message
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    pub async fn handle_message(&self, message: &TgMessage) -> anyhow::Result<()> {
        let Some(from) = &message.from else {
            debug!("Message without a sender, skipping");
            return Ok(());
        };
        let chat_id = message.chat.id;

        let account = match self.tg_accounts.find_by_tg_user_id(from.id).await? {
            Some(account) => account,
            None => {
                let account = TgAccount::new(
                    self.ids.generate(),
                    from.id,
                    chat_id,
                    from.username.clone(),
                );
                self.tg_accounts.create(&account).await?;
                info!(tg_user_id = from.id, "New chat identity registered");
                self.gateway.send_message(chat_id, "Greetings!").await?;
                account
            }
        };

        if account.is_linked() {
            self.handle_linked(message, &account).await
        } else {
            self.handle_unlinked(chat_id, account).await
        }
    }

    /// Every message from an unlinked identity gets a fresh code
    async fn handle_unlinked(&self, chat_id: i64, mut account: TgAccount) -> anyhow::Result<()> {
        let code = account.issue_verification_code().to_string();
        self.tg_accounts.update(&account).await?;

        let text = format!(
            "You're not verified.\nYour verification code:   {code}\nEnter this code into corresponding field on the {}",
            self.site_url
        );
        self.gateway.send_message(chat_id, &text).await?;
        Ok(())
    }

    async fn handle_linked(&self, message: &TgMessage, account: &TgAccount) -> anyhow::Result<()> {
        let chat_id = message.chat.id;

        let text = message.text.as_deref().unwrap_or_default();
        if text.is_empty() {
            self.gateway
                .send_message(chat_id, "Doesn't look like anything to me")
                .await?;
            return Ok(());
        }

        if text.contains("/goals") {
            self.show_goals(chat_id, account).await?;
        } else if text.contains("/create") {
            // Accepted but not implemented over chat; the web surface is
            // the write path
        } else {
            self.gateway.send_message(chat_id, "Unknown command").await?;
        }
        Ok(())
    }

    async fn show_goals(&self, chat_id: i64, account: &TgAccount) -> anyhow::Result<()> {
        let user_id = account
            .user_id
            .ok_or_else(|| anyhow::anyhow!("linked account without user id"))?;

        let query = GoalQuery {
            search: None,
            due_date_from: None,
            due_date_to: None,
            ordering: GoalOrdering::CreatedAsc,
            limit: MAX_LISTED_GOALS,
            offset: 0,
        };
        let goals = self.goals.find_active(user_id, &query).await?;

        if goals.is_empty() {
            self.gateway
                .send_message(chat_id, "You have no goals here")
                .await?;
        } else {
            let lines: Vec<String> = goals
                .iter()
                .map(|goal| format!("#{} {}", goal.id, goal.title))
                .collect();
            let text = format!("Your goals:\n{}", lines.join("\n"));
            self.gateway.send_message(chat_id, &text).await?;
        }
        Ok(())
    }
}
