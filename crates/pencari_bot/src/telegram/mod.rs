//! Minimal Telegram Bot API transport.
//!
//! Only the handful of methods the bot needs: `getUpdates` long
//! polling, `sendMessage`, `editMessageText`, and
//! `answerCallbackQuery`. Wire models live in `models`, the HTTP client
//! in `client`.

mod client;
mod models;

pub use client::TelegramClient;
pub use models::{
    CALLBACK_DATA_LIMIT, CallbackQuery, Chat, InlineKeyboardButton, InlineKeyboardMarkup, Message,
    Update,
};
