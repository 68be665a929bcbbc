//! Discord bot integration.
//!
//! This module wires platform lifecycle events to the bot's features: the
//! ready event triggers the voice channel auto-join, member joins trigger the
//! welcome card flow, and guild messages feed the auto-reply matcher. Slash
//! command registration runs as a separate startup task alongside the gateway
//! login.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel cache population
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read message text for keyword matching (privileged intent)
//! - `GUILD_MEMBERS` - Receive member join events (privileged intent)
//! - `GUILD_VOICE_STATES` - Maintain the voice channel presence
//!
//! Note: privileged intents must be explicitly enabled in the Discord
//! Developer Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod start;
