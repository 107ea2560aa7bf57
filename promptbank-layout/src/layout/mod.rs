//! Layout system for the prompt board.
//!
//! Items are held in a [`FlowContainer`] that wraps them into rows. The
//! container answers two questions for an enclosing scroll area:
//!
//! ```text
//! height_for_width(w) -> content height   (dry run, no mutation)
//! set_geometry(rect)  -> item rects       (real pass)
//! ```

pub mod config;
pub mod flow;
pub mod item;

pub use config::{LayoutConfig, Spacing, BOARD_MARGIN, BOARD_SPACING, DEFAULT_MARGIN, STYLE_SPACING};
pub use flow::{FlowContainer, Orientations};
pub use item::{FixedItem, ItemHandle, LayoutItem};
