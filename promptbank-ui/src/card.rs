//! Prompt cards: the items the board lays out.
//!
//! A card is an image area above a title bar. The title wraps inside the bar
//! and the button row sits under it, so only the title affects the height.

use promptbank_layout::{LayoutItem, Rect, Size};
use promptbank_store::PromptRecord;
use unicode_width::UnicodeWidthChar;

// =========================================================================
// Metrics
// =========================================================================

/// Fixed card width.
pub const CARD_WIDTH: f32 = 450.0;
/// Height of the image area.
pub const IMAGE_HEIGHT: f32 = 253.0;
/// Inset of the title bar contents.
pub const TITLE_BAR_PADDING: f32 = 10.0;
/// Gap between the title and the button row.
pub const TITLE_BUTTON_GAP: f32 = 5.0;
/// Height of the edit / details / delete buttons.
pub const BUTTON_ROW_HEIGHT: f32 = 25.0;

/// Monospace estimate at the base font size.
pub const CHAR_WIDTH: f32 = 8.4;
pub const LINE_HEIGHT: f32 = 18.0;
pub const BASE_FONT_SIZE: f32 = 14.0;
/// 15pt bold at 96 dpi.
pub const TITLE_FONT_SIZE: f32 = 20.0;

/// Display width of `text` in character cells.
pub(crate) fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

/// Number of lines `text` takes when word-wrapped to `max_width`.
///
/// Words longer than a line are broken across lines. Empty text still takes
/// one line.
pub(crate) fn wrapped_line_count(text: &str, max_width: f32, char_width: f32) -> usize {
    let cells_per_line = (max_width / char_width).floor().max(1.0);
    let mut lines = 1usize;
    let mut used = 0.0f32;

    for word in text.split_whitespace() {
        let word_cells = unicode_display_width(word);
        let needed = if used > 0.0 { used + 1.0 + word_cells } else { word_cells };

        if needed <= cells_per_line {
            used = needed;
            continue;
        }
        if used > 0.0 {
            lines += 1;
        }
        // A long word fills whole lines and leaves the remainder on the last.
        let full_lines = ((word_cells - 1.0).max(0.0) / cells_per_line).floor();
        lines += full_lines as usize;
        used = word_cells - full_lines * cells_per_line;
    }
    lines
}

// =========================================================================
// PromptCard
// =========================================================================

/// A card showing one prompt record.
#[derive(Debug, Clone)]
pub struct PromptCard {
    record: PromptRecord,
    visible: bool,
    geometry: Rect,
    size: Size,
}

impl PromptCard {
    pub fn new(record: PromptRecord) -> Self {
        let size = Self::measure(&record);
        Self {
            record,
            visible: true,
            geometry: Rect::ZERO,
            size,
        }
    }

    /// Card size for `record`: fixed width, height grows with the title.
    pub fn measure(record: &PromptRecord) -> Size {
        let scale = TITLE_FONT_SIZE / BASE_FONT_SIZE;
        let title_width = CARD_WIDTH - 2.0 * TITLE_BAR_PADDING;
        let lines = wrapped_line_count(&record.title, title_width, CHAR_WIDTH * scale);
        let title_height = lines as f32 * LINE_HEIGHT * scale;

        let title_bar = TITLE_BAR_PADDING + title_height + TITLE_BUTTON_GAP + BUTTON_ROW_HEIGHT
            + TITLE_BAR_PADDING;
        Size::new(CARD_WIDTH, IMAGE_HEIGHT + title_bar)
    }

    pub fn record(&self) -> &PromptRecord {
        &self.record
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    /// Replace the record and re-measure.
    pub fn set_record(&mut self, record: PromptRecord) {
        self.size = Self::measure(&record);
        self.record = record;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Rect assigned by the last layout pass.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }
}

impl LayoutItem for PromptCard {
    fn preferred_size(&self) -> Size {
        self.size
    }

    fn minimum_size(&self) -> Size {
        self.size
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(wrapped_line_count("", 100.0, 10.0), 1);
        assert_eq!(wrapped_line_count("abc def", 100.0, 10.0), 1);
        // 10 cells per line: "abcde fghij" needs 11.
        assert_eq!(wrapped_line_count("abcde fghij", 100.0, 10.0), 2);
        assert_eq!(wrapped_line_count("abcdefghijklmnopqrstu", 100.0, 10.0), 3);
        assert_eq!(wrapped_line_count("abcdefghij", 100.0, 10.0), 1);
    }

    #[test]
    fn test_wide_chars_count_double() {
        assert_eq!(unicode_display_width("猫"), 2.0);
        assert_eq!(wrapped_line_count("猫猫猫猫猫猫", 100.0, 10.0), 2);
    }

    #[test]
    fn test_short_title_card_size() {
        let card = PromptCard::new(PromptRecord::new("Cat").prompt("a cat"));
        let line = LINE_HEIGHT * TITLE_FONT_SIZE / BASE_FONT_SIZE;
        let expected = IMAGE_HEIGHT + 10.0 + line + 5.0 + 25.0 + 10.0;
        assert_eq!(card.preferred_size().width, CARD_WIDTH);
        assert!((card.preferred_size().height - expected).abs() < 1e-3);
        assert_eq!(card.minimum_size(), card.preferred_size());
    }

    #[test]
    fn test_long_title_grows_card() {
        let short = PromptCard::new(PromptRecord::new("Cat"));
        let long = PromptCard::new(PromptRecord::new(
            "A very long title that certainly needs more than one line in the title bar",
        ));
        assert_eq!(long.preferred_size().width, CARD_WIDTH);
        assert!(long.preferred_size().height > short.preferred_size().height);
    }

    #[test]
    fn test_set_record_remeasures() {
        let mut card = PromptCard::new(PromptRecord::new("Cat"));
        let before = card.preferred_size();
        card.set_record(PromptRecord::new("word ".repeat(40)));
        assert!(card.preferred_size().height > before.height);
        assert_eq!(card.title(), "word ".repeat(40));
    }
}
