//! Flow Container - row-wrapping layout for a variable number of items.
//!
//! Items are placed left to right at their preferred size until the next one
//! would cross the right edge, then wrap to a new row. The container reports
//! height-for-width so an enclosing scroll area can size its content to the
//! viewport width and scroll the overflow.

use crate::primitives::{Rect, Size};

use super::config::LayoutConfig;
use super::item::LayoutItem;

// =========================================================================
// Orientations
// =========================================================================

/// Directions in which a layout wants to grow beyond its size hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientations {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Orientations {
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
    };
}

// =========================================================================
// FlowContainer
// =========================================================================

/// A container that wraps its items into rows.
///
/// The container owns the ordered item sequence. Insertion order is placement
/// order and survives inserts and removals. Placement never shrinks, skips or
/// reorders an item; hidden items are ignored entirely.
#[derive(Debug, Clone)]
pub struct FlowContainer<I> {
    /// Tracked items in placement order.
    items: Vec<I>,
    config: LayoutConfig,
    /// Rect from the last `set_geometry` call.
    geometry: Rect,
}

impl<I> FlowContainer<I> {
    /// Create an empty container with the default configuration.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create an empty container. The config is normalized first.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            items: Vec::new(),
            config: config.normalized(),
            geometry: Rect::ZERO,
        }
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Append an item at the end of the sequence.
    pub fn add(&mut self, item: I) {
        self.items.push(item);
    }

    /// Builder form of [`add`](Self::add).
    pub fn push(mut self, item: I) -> Self {
        self.items.push(item);
        self
    }

    /// Number of tracked items, hidden ones included.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, if any.
    pub fn item_at(&self, index: usize) -> Option<&I> {
        self.items.get(index)
    }

    /// Remove and return the item at `index`, or `None` when out of range.
    ///
    /// The item is handed back to the caller, not destroyed.
    pub fn take_at(&mut self, index: usize) -> Option<I> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove the first item equal to `item`.
    pub fn remove(&mut self, item: &I) -> Option<I>
    where
        I: PartialEq,
    {
        let index = self.items.iter().position(|tracked| tracked == item)?;
        Some(self.items.remove(index))
    }

    /// Position of the first item equal to `item`.
    pub fn index_of(&self, item: &I) -> Option<usize>
    where
        I: PartialEq,
    {
        self.items.iter().position(|tracked| tracked == item)
    }

    /// Drop every tracked item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Rebuild the sequence wholesale.
    pub fn replace_items(&mut self, items: impl IntoIterator<Item = I>) {
        self.items.clear();
        self.items.extend(items);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }

    /// Rect passed to the last `set_geometry` call.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// The container sizes to content and never grows on its own.
    pub fn expanding_directions(&self) -> Orientations {
        Orientations::NONE
    }

    /// Row wrapping ties height to width.
    pub fn has_height_for_width(&self) -> bool {
        true
    }
}

impl<I: LayoutItem> FlowContainer<I> {
    /// Component-wise maximum of every item's minimum size, plus a margin on
    /// each side.
    pub fn minimum_size(&self) -> Size {
        self.items
            .iter()
            .fold(Size::ZERO, |acc, item| acc.expanded_to(item.minimum_size()))
            .grown_by(2.0 * self.config.margin)
    }

    /// Same as [`minimum_size`](Self::minimum_size).
    pub fn size_hint(&self) -> Size {
        self.minimum_size()
    }

    /// Height needed to lay out every visible item in `width`.
    ///
    /// Dry run: nothing is positioned.
    pub fn height_for_width(&self, width: f32) -> f32 {
        let mut cursor = FlowCursor::new(&self.config, Rect::with_width(width));
        for item in self.items.iter().filter(|item| item.is_visible()) {
            cursor.place(item.preferred_size());
        }
        let height = cursor.consumed_height();
        tracing::trace!(width, height, "flow height_for_width");
        height
    }

    /// Rects each visible item would receive at `width`, in order, paired
    /// with the item's index.
    pub fn placements(&self, width: f32) -> Vec<(usize, Rect)> {
        let mut cursor = FlowCursor::new(&self.config, Rect::with_width(width));
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_visible())
            .map(|(index, item)| (index, cursor.place(item.preferred_size())))
            .collect()
    }

    /// Position every visible item inside `rect` and return the height used.
    ///
    /// The rect's height is advisory; rows continue past the bottom edge.
    pub fn set_geometry(&mut self, rect: Rect) -> f32 {
        self.geometry = rect;
        let mut cursor = FlowCursor::new(&self.config, rect);
        let mut placed = 0usize;
        for item in self.items.iter_mut().filter(|item| item.is_visible()) {
            let target = cursor.place(item.preferred_size());
            item.set_geometry(target);
            placed += 1;
        }
        let height = cursor.consumed_height();
        tracing::trace!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            placed,
            height,
            "flow set_geometry"
        );
        height
    }
}

impl<I> Default for FlowContainer<I> {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Placement Cursor
// =========================================================================

/// Running state of a single placement pass.
///
/// Shared by the dry run and the real pass so both wrap identically.
struct FlowCursor {
    left: f32,
    top: f32,
    /// Exclusive right edge.
    right: f32,
    spacing_x: f32,
    spacing_y: f32,
    x: f32,
    y: f32,
    row_height: f32,
}

impl FlowCursor {
    fn new(config: &LayoutConfig, rect: Rect) -> Self {
        let (spacing_x, spacing_y) = config.resolved_spacing();
        Self {
            left: rect.x,
            top: rect.y,
            right: rect.right(),
            spacing_x,
            spacing_y,
            x: rect.x,
            y: rect.y,
            row_height: 0.0,
        }
    }

    /// Place one item of `size` and advance.
    ///
    /// An item only wraps when the current row already has height, so an
    /// item wider than the rect sits alone at the start of its row.
    fn place(&mut self, size: Size) -> Rect {
        let mut next_x = self.x + size.width + self.spacing_x;
        // `right` is `x + width`, one past Qt's inclusive `QRect::right()`, so
        // an item ending exactly on the edge stays on the row here where Qt
        // would wrap it.
        if next_x - self.spacing_x > self.right && self.row_height > 0.0 {
            self.x = self.left;
            self.y += self.row_height + self.spacing_y;
            self.row_height = 0.0;
            next_x = self.x + size.width + self.spacing_x;
        }
        let rect = Rect::new(self.x, self.y, size.width, size.height);
        self.x = next_x;
        self.row_height = self.row_height.max(size.height);
        rect
    }

    fn consumed_height(&self) -> f32 {
        self.y + self.row_height - self.top
    }
}

// =========================================================================
// Tests
// =========================================================================
