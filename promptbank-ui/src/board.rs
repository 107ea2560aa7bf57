//! The prompt board: the library and its cards, kept in step.
//!
//! Card `i` in the flow container always shows record `i` of the library.
//! Every operation that changes one changes the other at the same index.

use std::path::Path;

use promptbank_layout::{FlowContainer, ItemHandle, LayoutConfig, LayoutItem, Rect};
use promptbank_store::{PromptLibrary, PromptRecord, StoreError};
use thiserror::Error;

use crate::card::PromptCard;

pub type CardHandle = ItemHandle<PromptCard>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("card is not on the board")]
    UnknownCard,
}

pub type Result<T> = std::result::Result<T, BoardError>;

/// The prompt library laid out as a wrapping grid of cards.
pub struct PromptBoard {
    library: PromptLibrary,
    flow: FlowContainer<CardHandle>,
    /// Active title filter. Empty shows everything.
    filter: String,
}

impl PromptBoard {
    /// Build a card for every record in `library`.
    pub fn new(library: PromptLibrary, config: LayoutConfig) -> Self {
        let mut board = Self {
            library,
            flow: FlowContainer::with_config(config),
            filter: String::new(),
        };
        board.reload_all();
        board
    }

    pub fn library(&self) -> &PromptLibrary {
        &self.library
    }

    pub fn layout(&self) -> &FlowContainer<CardHandle> {
        &self.flow
    }

    /// Every card, in board order.
    pub fn cards(&self) -> impl Iterator<Item = &CardHandle> {
        self.flow.iter()
    }

    /// Cards that pass the current filter.
    pub fn visible_cards(&self) -> impl Iterator<Item = &CardHandle> {
        self.flow.iter().filter(|card| card.is_visible())
    }

    pub fn card_count(&self) -> usize {
        self.flow.count()
    }

    /// Look a card up by its position on the board or by its exact title.
    ///
    /// A number is tried as a position first.
    pub fn find(&self, target: &str) -> Option<CardHandle> {
        if let Ok(index) = target.parse::<usize>() {
            if let Some(card) = self.flow.item_at(index) {
                return Some(card.clone());
            }
        }
        self.flow
            .iter()
            .find(|card| card.borrow().title() == target)
            .cloned()
    }

    /// Drop every card and rebuild from the library.
    pub fn reload_all(&mut self) {
        let filter = &self.filter;
        self.flow.replace_items(self.library.records().iter().map(|record| {
            let mut card = PromptCard::new(record.clone());
            card.set_visible(record.matches(filter));
            ItemHandle::new(card)
        }));
        tracing::debug!(cards = self.flow.count(), "reloaded prompt cards");
    }

    /// Save a new record and append its card.
    pub fn create(&mut self, record: PromptRecord) -> Result<CardHandle> {
        let index = self.library.add(record)?;
        let record = self.library.get(index).ok_or(StoreError::NotFound(index))?;

        let mut card = PromptCard::new(record.clone());
        card.set_visible(record.matches(&self.filter));
        let handle = ItemHandle::new(card);
        self.flow.add(handle.clone());
        tracing::info!(title = %record.title, "created prompt");
        Ok(handle)
    }

    /// Replace the record behind `card`.
    pub fn edit(&mut self, card: &CardHandle, record: PromptRecord) -> Result<()> {
        let index = self.index_of(card)?;
        self.library.update(index, record)?;
        let record = self.library.get(index).ok_or(StoreError::NotFound(index))?;

        let mut card = card.borrow_mut();
        card.set_record(record.clone());
        card.set_visible(record.matches(&self.filter));
        tracing::info!(title = %record.title, "edited prompt");
        Ok(())
    }

    /// Remove `card` and its record.
    ///
    /// The card itself lives on while the caller still holds a handle.
    pub fn delete(&mut self, card: &CardHandle) -> Result<PromptRecord> {
        let index = self.index_of(card)?;
        let record = self.library.remove(index)?;
        self.flow.take_at(index);
        tracing::info!(title = %record.title, "deleted prompt");
        Ok(record)
    }

    /// Show only cards whose title contains `query`, ignoring case.
    /// Returns the number of cards left visible.
    pub fn filter(&mut self, query: &str) -> usize {
        self.filter = query.to_string();
        let mut shown = 0usize;
        for card in self.flow.iter() {
            let mut card = card.borrow_mut();
            let visible = card.record().matches(query);
            card.set_visible(visible);
            shown += visible as usize;
        }
        tracing::debug!(query, shown, "filtered prompt cards");
        shown
    }

    /// Merge the records in `path` by title and rebuild the cards when
    /// anything was added. Returns the number of new records.
    pub fn import(&mut self, path: &Path) -> Result<usize> {
        let added = self.library.import_file(path)?;
        if added > 0 {
            self.reload_all();
        }
        Ok(added)
    }

    /// Write every record to `path`.
    pub fn export(&self, path: &Path) -> Result<()> {
        self.library.export_file(path)?;
        Ok(())
    }

    /// Lay the cards out for a viewport `width` wide and return the content
    /// height the scroll area needs.
    pub fn resize(&mut self, width: f32) -> f32 {
        let height = self.flow.height_for_width(width);
        self.flow.set_geometry(Rect::new(0.0, 0.0, width, height))
    }

    fn index_of(&self, card: &CardHandle) -> Result<usize> {
        self.flow.index_of(card).ok_or(BoardError::UnknownCard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> PromptBoard {
        let library = PromptLibrary::from_records(vec![
            PromptRecord::new("Sunset").prompt("orange sky"),
            PromptRecord::new("Forest").prompt("tall pines"),
        ]);
        PromptBoard::new(library, LayoutConfig::board())
    }

    #[test]
    fn test_cards_follow_library() {
        let board = board();
        let titles: Vec<String> = board.cards().map(|c| c.borrow().title().to_string()).collect();
        assert_eq!(titles, vec!["Sunset", "Forest"]);
    }

    #[test]
    fn test_create_rejects_invalid_record() {
        let mut board = board();
        let err = board.create(PromptRecord::new("")).unwrap_err();
        assert!(matches!(err, BoardError::Store(StoreError::Validation(_))));
        assert_eq!(board.card_count(), 2);
    }

    #[test]
    fn test_find_by_position_or_title() {
        let board = board();
        let forest = board.find("Forest").unwrap();
        assert!(board.find("1").unwrap().ptr_eq(&forest));
        assert_eq!(board.find("0").unwrap().borrow().title(), "Sunset");
        assert!(board.find("7").is_none());
        assert!(board.find("forest").is_none());
    }

    #[test]
    fn test_unknown_card() {
        let mut board = board();
        let stranger = ItemHandle::new(PromptCard::new(PromptRecord::new("x")));
        assert!(matches!(board.delete(&stranger), Err(BoardError::UnknownCard)));
        assert!(matches!(
            board.edit(&stranger, PromptRecord::new("y").prompt("z")),
            Err(BoardError::UnknownCard)
        ));
    }
}
