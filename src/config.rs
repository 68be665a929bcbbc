use serde::Deserialize;
use std::path::Path;

use crate::error::{config::ConfigError, AppError};

/// Relative path of the static platform configuration file.
pub const CONFIG_FILE: &str = "config.json";

const DEFAULT_PORT: u16 = 3000;

/// Raw shape of `config.json`.
///
/// Identifiers are stored as strings in the file (Discord snowflakes overflow
/// JSON number tooling) and parsed into `u64` during load.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(rename = "CLIENT_ID")]
    client_id: String,
    #[serde(rename = "GUILD_ID")]
    guild_id: String,
    #[serde(rename = "VOICE_CHANNEL_ID", default)]
    voice_channel_id: Option<String>,
    #[serde(rename = "WELCOME_CHANNEL_ID")]
    welcome_channel_id: String,
}

/// Static application configuration, loaded once at startup.
#[derive(Debug)]
pub struct Config {
    /// Discord bot token from the `TOKEN` environment variable.
    pub token: String,

    /// Liveness server port from the `PORT` environment variable (default 3000).
    pub port: u16,

    /// Discord application id used for slash command registration.
    pub client_id: u64,

    /// The single guild this bot serves.
    pub guild_id: u64,

    /// Voice channel to sit in after connecting. `"0"` or absent disables
    /// the auto-join.
    pub voice_channel_id: Option<u64>,

    /// Channel that receives welcome messages for new members.
    pub welcome_channel_id: u64,
}

impl Config {
    /// Loads configuration from `config.json` and the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - Fully parsed configuration
    /// - `Err(AppError::IoErr)` - The configuration file could not be read
    /// - `Err(AppError::ConfigErr)` - `TOKEN` is missing or a value is malformed
    pub fn load() -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(Path::new(CONFIG_FILE))?;
        Self::from_json(&raw, std::env::var("TOKEN").ok(), std::env::var("PORT").ok())
    }

    /// Builds configuration from raw JSON and pre-fetched environment values.
    ///
    /// Split out of `load` so tests can exercise parsing without touching the
    /// process environment or the filesystem.
    ///
    /// # Arguments
    /// - `raw` - Contents of `config.json`
    /// - `token` - Value of the `TOKEN` environment variable, if set
    /// - `port` - Value of the `PORT` environment variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - Fully parsed configuration
    /// - `Err(AppError::ConfigErr)` - `TOKEN` is missing or a value is malformed
    /// - `Err(AppError::JsonErr)` - The configuration file is not valid JSON
    pub fn from_json(
        raw: &str,
        token: Option<String>,
        port: Option<String>,
    ) -> Result<Self, AppError> {
        let file: ConfigFile = serde_json::from_str(raw)?;

        let token = token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("TOKEN".to_string()))?;

        let port = match port {
            None => DEFAULT_PORT,
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                value,
            })?,
        };

        // "0" and absent both mean "do not join a voice channel"
        let voice_channel_id = match file.voice_channel_id.as_deref() {
            None | Some("") | Some("0") => None,
            Some(value) => Some(parse_id("VOICE_CHANNEL_ID", value)?),
        };

        Ok(Self {
            token,
            port,
            client_id: parse_id("CLIENT_ID", &file.client_id)?,
            guild_id: parse_id("GUILD_ID", &file.guild_id)?,
            voice_channel_id,
            welcome_channel_id: parse_id("WELCOME_CHANNEL_ID", &file.welcome_channel_id)?,
        })
    }
}

/// Parses a Discord snowflake id from its string form.
///
/// Zero is rejected along with non-numeric input: serenity's id constructors
/// treat zero as invalid.
///
/// # Arguments
/// - `name` - Configuration key, used in the error message
/// - `value` - The raw string to parse
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed non-zero id
/// - `Err(AppError::ConfigErr(InvalidValue))` - Malformed or zero id
fn parse_id(name: &str, value: &str) -> Result<u64, AppError> {
    let id = value
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;

    Ok(id)
}
