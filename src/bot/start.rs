use serenity::all::{Client, GatewayIntents};
use songbird::SerenityInit;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner.
///
/// This function creates and starts the Discord bot client. It should be
/// called from within a tokio::spawn task since it will block until the bot
/// shuts down. Reconnection is left entirely to serenity; no recovery logic
/// lives here.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: Arc<Config>) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive
    // MESSAGE_CONTENT and GUILD_MEMBERS are privileged intents - must be
    // enabled in the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES;

    // Create the event handler with its shared context
    let handler = Handler::new(config.clone())?;

    // Build the client; songbird handles the voice channel presence
    let mut client = Client::builder(&config.token, intents)
        .event_handler(handler)
        .register_songbird()
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
