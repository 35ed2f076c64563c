//! Telegram front-end for the pencari content search bot.
//!
//! This crate wires the search client, result cache, and pager to the
//! Telegram Bot API:
//! - **config**: environment-driven configuration
//! - **telegram**: minimal Bot API client (long polling, messages,
//!   inline keyboards)
//! - **dispatch**: routes inbound updates to the three entry points
//!   (`on_start`, `on_text_message`, `on_navigation_action`)
//! - **render**: user-facing message formatting

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dispatch;
mod render;
mod telegram;

pub use config::BotConfig;
pub use dispatch::Dispatcher;
pub use telegram::{
    CallbackQuery, Chat, InlineKeyboardButton, InlineKeyboardMarkup, Message, TelegramClient,
    Update,
};
