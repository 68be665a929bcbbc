use serenity::all::{Context, EventHandler, Member, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::reply::{AutoReplyRule, DEFAULT_RULES};
use crate::suggestions::SuggestionStore;
use crate::tickets::TicketStore;
use crate::welcome::WelcomeCardClient;

pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler.
///
/// Owns every piece of shared context the event flows need: the static
/// configuration, the welcome card client, the ticket counter store, the
/// suggestion store, and the auto-reply rules.
pub struct Handler {
    pub config: Arc<Config>,
    pub welcome: WelcomeCardClient,
    pub tickets: TicketStore,
    pub suggestions: SuggestionStore,
    pub rules: &'static [AutoReplyRule],
}

impl Handler {
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        Ok(Self {
            config,
            welcome: WelcomeCardClient::new()?,
            tickets: TicketStore::default(),
            suggestions: SuggestionStore::new(),
            rules: DEFAULT_RULES,
        })
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called when a member joins the guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.config, &self.welcome, ctx, new_member).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self.rules, ctx, message).await;
    }
}
