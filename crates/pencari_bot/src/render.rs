//! User-facing message formatting.

use crate::telegram::{CALLBACK_DATA_LIMIT, InlineKeyboardButton, InlineKeyboardMarkup};
use pencari_core::{NavControls, Page};
use std::fmt::Write;

/// Greeting for the `/start` command.
pub(crate) const WELCOME: &str = "\
🌟 *Selamat datang di Database HARIAGUNG.COM* 🌟

Silakan masukkan kata kunci untuk mencari data.

📝 *Petunjuk Penggunaan:*
• Ketik kata kunci atau nomor
• Gunakan tombol navigasi untuk melihat hasil lainnya
• Data ditampilkan 5 per halaman

🔍 *Mulai pencarian sekarang!*";

/// Best-effort acknowledgment while the search runs.
pub(crate) const SEARCHING: &str = "🔍 Sedang mencari...";

/// Shown for empty result sets and for any remote failure; the two are
/// deliberately indistinguishable to the user.
pub(crate) const NOT_FOUND: &str = "❌ Data tidak ditemukan.";

/// Shown when navigation lands past the end of the result set.
pub(crate) const NO_MORE: &str = "❌ Tidak ada hasil lain.";

const RULE: &str = "━━━━━━━━━━━━━━━";

/// Format one result page as a Markdown message.
///
/// An empty page renders as the "no further results" text, the normal
/// terminal state of forward navigation.
pub(crate) fn results_message(page: &Page) -> String {
    if page.is_empty() {
        return NO_MORE.to_string();
    }

    let mut message = String::from("🔍 Hasil Pencarian:\n\n");
    for (offset, item) in page.items().iter().enumerate() {
        let ordinal = page.first_ordinal() + offset;
        // write! into a String cannot fail
        let _ = write!(
            message,
            "📎 *Data #{ordinal}*\n{RULE}\n📌 *Judul:* {}\n🔗 *Link:* {}\n{RULE}\n\n",
            item.title(),
            item.link(),
        );
    }

    let _ = write!(
        message,
        "📊 Halaman {} dari {}\n📝 Total data: {}",
        page.page_number(),
        page.total_pages(),
        page.total_count(),
    );
    message
}

/// Turn navigation controls into an inline keyboard, or `None` when
/// neither direction is valid.
pub(crate) fn keyboard(controls: &NavControls) -> Option<InlineKeyboardMarkup> {
    let mut row = Vec::new();
    if let Some(token) = controls.previous() {
        row.push(InlineKeyboardButton::new(
            "⬅️ Sebelumnya",
            token.encode(CALLBACK_DATA_LIMIT),
        ));
    }
    if let Some(token) = controls.next() {
        row.push(InlineKeyboardButton::new(
            "Selanjutnya ➡️",
            token.encode(CALLBACK_DATA_LIMIT),
        ));
    }
    (!row.is_empty()).then(|| InlineKeyboardMarkup::new(vec![row]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pencari_core::{ResultItem, paginate};

    fn results(n: usize) -> Vec<ResultItem> {
        (1..=n)
            .map(|i| ResultItem::new(format!("Data {i}"), format!("https://example.com/{i}")))
            .collect()
    }

    #[test]
    fn first_page_of_twelve_renders_header_and_footer() {
        let set = results(12);
        let message = results_message(&paginate(&set, 0, 5));

        assert!(message.starts_with("🔍 Hasil Pencarian:"));
        assert!(message.contains("*Data #1*"));
        assert!(message.contains("*Data #5*"));
        assert!(!message.contains("*Data #6*"));
        assert!(message.contains("📊 Halaman 1 dari 3"));
        assert!(message.contains("📝 Total data: 12"));
    }

    #[test]
    fn last_page_keeps_absolute_ordinals() {
        let set = results(12);
        let message = results_message(&paginate(&set, 2, 5));

        assert!(message.contains("*Data #11*"));
        assert!(message.contains("*Data #12*"));
        assert!(message.contains("📊 Halaman 3 dari 3"));
    }

    #[test]
    fn page_past_the_end_renders_no_more() {
        let set = results(12);
        assert_eq!(results_message(&paginate(&set, 9, 5)), NO_MORE);
    }

    #[test]
    fn keyboard_reflects_controls() {
        let both = NavControls::build("q", 1, 5, 12);
        let markup = keyboard(&both).unwrap();
        let body = serde_json::to_string(&markup).unwrap();
        assert!(body.contains("Sebelumnya"));
        assert!(body.contains("Selanjutnya"));
        assert!(body.contains("prev|q|0"));
        assert!(body.contains("next|q|2"));
    }

    #[test]
    fn no_valid_direction_means_no_keyboard() {
        let none = NavControls::build("q", 0, 5, 3);
        assert!(keyboard(&none).is_none());
    }
}
