//! Discord bot integration: slash commands, buttons and prefix commands.
//!
//! The bot is initialized during startup and runs in a separate tokio task so the status
//! API is never blocked by the gateway connection. All state changes go through the
//! services in `server::service`; this module only performs Discord I/O around them.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and interaction events
//! - `GUILD_MEMBERS` - Receive member joins for the welcome message (privileged intent)
//! - `GUILD_MESSAGES` - Receive messages for the `!say` and `!sessions` prefix commands
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod notify;
pub mod start;
