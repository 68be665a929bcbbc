use serenity::all::{ApplicationId, CreateCommand, GuildId};
use serenity::http::Http;

use crate::config::Config;
use crate::error::AppError;

/// Opens the ticket panel.
pub const PANEL_COMMAND: &str = "panel";

/// Sends a test welcome card.
pub const TEST_WELCOME_COMMAND: &str = "testwelcome";

/// The bot's slash command definitions.
pub fn guild_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(PANEL_COMMAND).description("لوحة التذاكر"),
        CreateCommand::new(TEST_WELCOME_COMMAND).description("تجربة الترحيب"),
    ]
}

/// Registers the slash commands with the configured guild.
///
/// Uses a standalone HTTP client so registration can run concurrently with
/// the gateway login. `set_commands` overwrites the guild's command set, so
/// re-registration on every restart is safe and expected.
///
/// # Arguments
/// - `config` - Application configuration carrying the token, application id
///   and guild id
///
/// # Returns
/// - `Ok(())` - Commands registered (or overwritten) successfully
/// - `Err(AppError::DiscordErr)` - The registration call failed; the caller
///   logs and continues, startup is never aborted
pub async fn register_guild_commands(config: &Config) -> Result<(), AppError> {
    let http = Http::new(&config.token);
    http.set_application_id(ApplicationId::new(config.client_id));

    GuildId::new(config.guild_id)
        .set_commands(&http, guild_commands())
        .await?;

    Ok(())
}
