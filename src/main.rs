use std::sync::Arc;

use guildbot::{bot, config::Config, web};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::load() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Register slash commands concurrently with the gateway login;
    // failure is logged and startup continues
    let commands_config = config.clone();
    tokio::spawn(async move {
        match bot::commands::register_guild_commands(&commands_config).await {
            Ok(()) => tracing::info!("Slash commands registered"),
            Err(e) => tracing::error!("Slash command registration failed: {}", e),
        }
    });

    // Start Discord bot in a separate task
    let bot_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_config).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // The liveness endpoint runs in the foreground and keeps the process
    // reachable for uptime probes even if the bot task dies
    if let Err(e) = web::start(config.port).await {
        tracing::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
