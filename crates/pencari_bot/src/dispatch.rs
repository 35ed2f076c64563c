//! Update routing and the per-interaction state machine.

use crate::render;
use crate::telegram::{CallbackQuery, TelegramClient, Update};
use pencari_cache::SearchCache;
use pencari_core::{NavControls, NavToken, paginate};
use pencari_search::SearchClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Long-poll window for `getUpdates`.
const POLL_TIMEOUT_SECS: u64 = 30;

/// Pause before re-polling after a transport failure.
const POLL_BACKOFF: Duration = Duration::from_secs(3);

/// Routes inbound chat events to the search, cache, and pager layers.
///
/// One inbound event per entry point: `/start` → [`Dispatcher::on_start`],
/// free text → [`Dispatcher::on_text_message`], button presses →
/// [`Dispatcher::on_navigation_action`]. No failure here ever takes the
/// process down; bad interactions are answered or dropped and the poll
/// loop continues.
pub struct Dispatcher {
    telegram: TelegramClient,
    search: SearchClient,
    cache: Arc<SearchCache>,
    page_size: usize,
}

impl Dispatcher {
    /// Wire a dispatcher to its collaborators.
    pub fn new(
        telegram: TelegramClient,
        search: SearchClient,
        cache: Arc<SearchCache>,
        page_size: usize,
    ) -> Self {
        Self {
            telegram,
            search,
            cache,
            page_size,
        }
    }

    /// Poll for updates forever, dispatching each in arrival order.
    pub async fn run(&self) {
        info!(page_size = self.page_size, "Dispatcher started, polling for updates");
        let mut offset = 0i64;
        loop {
            let updates = match self.telegram.get_updates(offset, POLL_TIMEOUT_SECS).await {
                Ok(updates) => updates,
                Err(error) => {
                    warn!(error = %error, "getUpdates failed, backing off");
                    tokio::time::sleep(POLL_BACKOFF).await;
                    continue;
                }
            };
            for update in updates {
                offset = offset.max(update.update_id() + 1);
                self.handle_update(&update).await;
            }
        }
    }

    /// Route one update to the matching entry point.
    pub async fn handle_update(&self, update: &Update) {
        if let Some(message) = update.message() {
            let Some(text) = message.text() else {
                return;
            };
            let chat_id = *message.chat().id();
            if text == "/start" {
                self.on_start(chat_id).await;
            } else {
                self.on_text_message(chat_id, text).await;
            }
        } else if let Some(callback) = update.callback_query() {
            self.on_navigation_action(callback).await;
        }
    }

    /// Greet a new session.
    #[instrument(skip(self))]
    pub async fn on_start(&self, chat_id: i64) {
        if let Err(error) = self.telegram.send_message(chat_id, render::WELCOME, None).await {
            warn!(error = %error, chat_id, "Failed to send welcome message");
        }
    }

    /// Run a search and render page 0 with navigation controls.
    ///
    /// Empty result sets and remote failures both collapse to the same
    /// "not found" reply; only the logs tell them apart.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn on_text_message(&self, chat_id: i64, query: &str) {
        // Best-effort acknowledgment; correctness does not depend on it.
        if let Err(error) = self.telegram.send_message(chat_id, render::SEARCHING, None).await {
            warn!(error = %error, chat_id, "Failed to send search acknowledgment");
        }

        let results = match self.search.search(query).await {
            Ok(results) => results,
            Err(error) => {
                debug!(error = %error, "Search failed, replying not found");
                Arc::new(Vec::new())
            }
        };

        if results.is_empty() {
            if let Err(error) = self.telegram.send_message(chat_id, render::NOT_FOUND, None).await {
                warn!(error = %error, chat_id, "Failed to send not-found reply");
            }
            return;
        }

        let page = paginate(&results, 0, self.page_size);
        let controls = self.controls_for(query, 0);
        let text = render::results_message(&page);
        if let Err(error) = self
            .telegram
            .send_message(chat_id, &text, render::keyboard(&controls).as_ref())
            .await
        {
            warn!(error = %error, chat_id, "Failed to send search results");
        }
    }

    /// Decode a navigation token and update the rendered page in place.
    ///
    /// Undecodable tokens and tokens for queries never stored in this
    /// process lifetime are dropped silently; the only effect is the
    /// callback acknowledgment that clears the client's spinner.
    #[instrument(skip(self, callback), fields(callback_id = %callback.id()))]
    pub async fn on_navigation_action(&self, callback: &CallbackQuery) {
        if let Err(error) = self.telegram.answer_callback_query(callback.id()).await {
            debug!(error = %error, "Failed to answer callback query");
        }

        let Some(data) = callback.data() else {
            return;
        };
        let token = match NavToken::decode(data) {
            Ok(token) => token,
            Err(error) => {
                debug!(error = %error, "Dropping undecodable navigation token");
                return;
            }
        };
        let Some((query, results)) = self.cache.resolve(token.query_ref()) else {
            debug!("Dropping navigation token for unknown query");
            return;
        };
        let Some(message) = callback.message() else {
            return;
        };
        let chat_id = *message.chat().id();
        let message_id = *message.message_id();

        let page = paginate(&results, *token.page_index(), self.page_size);
        let controls = self.controls_for(&query, *token.page_index());
        let text = render::results_message(&page);
        if let Err(error) = self
            .telegram
            .edit_message_text(chat_id, message_id, &text, render::keyboard(&controls).as_ref())
            .await
        {
            warn!(error = %error, chat_id, message_id, "Failed to edit results message");
        }
    }

    /// Derive navigation controls from the live cache length.
    ///
    /// A query absent from the cache counts as length 0, so `next`
    /// fails safe to "no more".
    fn controls_for(&self, query: &str, page_index: usize) -> NavControls {
        let total_len = self.cache.lookup(query).map(|r| r.len()).unwrap_or(0);
        NavControls::build(query, page_index, self.page_size, total_len)
    }
}
