//! JSON wire models for the Telegram Bot API.
//!
//! Decoded from Bot API responses and encoded into request payloads.
//! Only the fields the bot reads are modeled; everything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

/// Byte limit Telegram imposes on inline button callback data.
///
/// Navigation tokens that would exceed it degrade to their digest form.
pub const CALLBACK_DATA_LIMIT: usize = 64;

/// Envelope every Bot API method call answers with.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One inbound update from `getUpdates`.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters, derive_new::new)]
pub struct Update {
    /// Monotonically increasing update identifier
    update_id: i64,
    /// Present for plain text messages and commands
    #[serde(default)]
    message: Option<Message>,
    /// Present for inline button presses
    #[serde(default)]
    callback_query: Option<CallbackQuery>,
}

/// A chat message, inbound or echoed back from a send.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters, derive_new::new)]
pub struct Message {
    /// Message identifier, unique within the chat
    message_id: i64,
    /// Chat the message belongs to
    chat: Chat,
    /// Text content, absent for non-text messages
    #[serde(default)]
    text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters, derive_new::new)]
pub struct Chat {
    /// Chat identifier
    id: i64,
}

/// An inline button press.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters, derive_new::new)]
pub struct CallbackQuery {
    /// Callback query identifier, needed to answer it
    id: String,
    /// Opaque callback data carried by the pressed button
    #[serde(default)]
    data: Option<String>,
    /// The message the button was attached to
    #[serde(default)]
    message: Option<Message>,
}

/// Inline keyboard attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct InlineKeyboardMarkup {
    /// Button rows, outer vec top to bottom
    inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// One inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    /// Button label
    text: String,
    /// Opaque payload echoed back in the callback query
    callback_data: String,
}

impl InlineKeyboardButton {
    /// Create a button with a label and callback payload.
    pub fn new(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}
