//! promptbank-ui: prompt cards and the board that lays them out.
//!
//! The board owns the [`PromptLibrary`](promptbank_store::PromptLibrary) and a
//! [`FlowContainer`](promptbank_layout::FlowContainer) of card handles. The
//! `promptbank` binary drives it headlessly: list, preview the layout for a
//! viewport width, import, export and flip the theme.

pub mod board;
pub mod card;

pub use board::{BoardError, CardHandle, PromptBoard};
pub use card::{CARD_WIDTH, PromptCard};
