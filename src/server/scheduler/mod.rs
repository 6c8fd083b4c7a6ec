//! Cron jobs started by the bot.

pub mod activity;
