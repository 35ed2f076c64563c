//! Telegram Bot API HTTP client.

use super::models::{ApiResponse, InlineKeyboardMarkup, Message, Update};
use pencari_error::{TelegramError, TelegramErrorKind, TelegramResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, error, instrument};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Bound on ordinary method calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Extra slack on top of the long-poll window.
const POLL_SLACK: Duration = Duration::from_secs(10);

/// Client for the Telegram Bot API.
///
/// Thin wrapper over the four methods the bot uses. Every call POSTs a
/// JSON payload to `<base>/bot<token>/<method>` and unwraps the `ok` /
/// `result` envelope.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    /// Create a client against the production Bot API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(token: impl Into<String>) -> TelegramResult<Self> {
        Self::with_base_url(TELEGRAM_API_URL, token)
    }

    /// Create a client against an alternate base URL (used in tests).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> TelegramResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| TelegramError::new(TelegramErrorKind::Request(e.to_string())))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        payload: Value,
        timeout: Duration,
    ) -> TelegramResult<T> {
        let url = format!("{}/bot{}/{}", self.base_url, self.token, method);
        let response = self
            .client
            .post(&url)
            .timeout(timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(method, error = %e, "Bot API request failed");
                TelegramError::new(TelegramErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(TelegramError::new(TelegramErrorKind::InvalidToken));
        }

        let envelope: ApiResponse<T> = response.json().await.map_err(|e| {
            error!(method, error = %e, "Failed to decode Bot API response");
            TelegramError::new(TelegramErrorKind::Decode(e.to_string()))
        })?;

        match envelope.result {
            Some(result) if envelope.ok => Ok(result),
            _ => {
                let description = envelope.description.unwrap_or_default();
                error!(method, status = status.as_u16(), description = %description, "Bot API rejected call");
                Err(TelegramError::new(TelegramErrorKind::Api {
                    status: status.as_u16(),
                    description,
                }))
            }
        }
    }

    /// Long-poll for updates past `offset`, waiting up to `timeout_secs`.
    #[instrument(skip(self))]
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> TelegramResult<Vec<Update>> {
        let updates: Vec<Update> = self
            .call(
                "getUpdates",
                json!({
                    "offset": offset,
                    "timeout": timeout_secs,
                    "allowed_updates": ["message", "callback_query"],
                }),
                Duration::from_secs(timeout_secs) + POLL_SLACK,
            )
            .await?;
        debug!(count = updates.len(), "Received updates");
        Ok(updates)
    }

    /// Send a Markdown message, optionally with an inline keyboard.
    #[instrument(skip(self, text, reply_markup), fields(text_len = text.len()))]
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> TelegramResult<Message> {
        let mut payload = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });
        if let Some(markup) = reply_markup {
            payload["reply_markup"] = serde_json::to_value(markup)
                .map_err(|e| TelegramError::new(TelegramErrorKind::Decode(e.to_string())))?;
        }
        self.call("sendMessage", payload, REQUEST_TIMEOUT).await
    }

    /// Replace an existing message's text and keyboard in place.
    #[instrument(skip(self, text, reply_markup), fields(text_len = text.len()))]
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> TelegramResult<Message> {
        let mut payload = json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": text,
            "parse_mode": "Markdown",
        });
        if let Some(markup) = reply_markup {
            payload["reply_markup"] = serde_json::to_value(markup)
                .map_err(|e| TelegramError::new(TelegramErrorKind::Decode(e.to_string())))?;
        }
        self.call("editMessageText", payload, REQUEST_TIMEOUT).await
    }

    /// Acknowledge a callback query so the client stops its spinner.
    #[instrument(skip(self))]
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> TelegramResult<()> {
        let _: bool = self
            .call(
                "answerCallbackQuery",
                json!({ "callback_query_id": callback_query_id }),
                REQUEST_TIMEOUT,
            )
            .await?;
        Ok(())
    }
}
