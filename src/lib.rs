//! Community assistant Discord bot.
//!
//! Registers the guild slash commands, greets new members with a generated
//! welcome card, answers keyword-triggered auto-replies, keeps a persistent
//! ticket counter, and serves a liveness endpoint for uptime monitoring.

pub mod bot;
pub mod config;
pub mod error;
pub mod reply;
pub mod suggestions;
pub mod tickets;
pub mod web;
pub mod welcome;
