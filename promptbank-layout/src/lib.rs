//! promptbank-layout: geometry and the flow layout behind the prompt board.
//!
//! The crate computes geometry only; it never paints. Items implement
//! [`LayoutItem`] and are shared with the rest of the application through
//! [`ItemHandle`], whose equality is identity so a card can be removed from
//! the container without comparing its contents.
//!
//! ```
//! use promptbank_layout::{FixedItem, FlowContainer, LayoutConfig, Rect};
//!
//! let mut flow = FlowContainer::with_config(LayoutConfig::new().margin(0.0).spacing(0.0))
//!     .push(FixedItem::new(60.0, 20.0))
//!     .push(FixedItem::new(60.0, 20.0));
//!
//! assert_eq!(flow.height_for_width(100.0), 40.0);
//! assert_eq!(flow.set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0)), 40.0);
//! ```

pub mod layout;
pub mod primitives;

pub use layout::{
    FixedItem, FlowContainer, ItemHandle, LayoutConfig, LayoutItem, Orientations, Spacing,
    STYLE_SPACING,
};
pub use primitives::{Rect, Size};
