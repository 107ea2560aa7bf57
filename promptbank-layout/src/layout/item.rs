//! Items managed by a flow container.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::primitives::{Rect, Size};

/// A positionable element.
///
/// The layout reads the preferred size, minimum size and visibility, and
/// writes the geometry. Nothing else is touched.
pub trait LayoutItem {
    /// Size the item would like to occupy.
    fn preferred_size(&self) -> Size;

    /// Smallest size the item accepts.
    fn minimum_size(&self) -> Size;

    /// Hidden items are skipped by placement.
    fn is_visible(&self) -> bool {
        true
    }

    /// Assign the item's on-screen rect.
    fn set_geometry(&mut self, rect: Rect);
}

// =========================================================================
// ItemHandle
// =========================================================================

/// Shared, single-threaded handle to a layout item.
///
/// Equality is identity: two handles are equal when they point at the same
/// item. Removing a handle from a container only drops that reference, the
/// item is freed once the last handle goes away.
pub struct ItemHandle<T>(Rc<RefCell<T>>);

impl<T> ItemHandle<T> {
    pub fn new(item: T) -> Self {
        Self(Rc::new(RefCell::new(item)))
    }

    /// Borrow the item.
    ///
    /// Panics if the item is currently borrowed mutably.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutably borrow the item.
    ///
    /// Panics if the item is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether two handles refer to the same item.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this item.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl<T> Clone for ItemHandle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for ItemHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for ItemHandle<T> {}

impl<T: fmt::Debug> fmt::Debug for ItemHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(item) => f.debug_tuple("ItemHandle").field(&*item).finish(),
            Err(_) => f.write_str("ItemHandle(<borrowed>)"),
        }
    }
}

impl<T: LayoutItem> LayoutItem for ItemHandle<T> {
    fn preferred_size(&self) -> Size {
        self.0.borrow().preferred_size()
    }

    fn minimum_size(&self) -> Size {
        self.0.borrow().minimum_size()
    }

    fn is_visible(&self) -> bool {
        self.0.borrow().is_visible()
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.0.borrow_mut().set_geometry(rect);
    }
}

// =========================================================================
// FixedItem
// =========================================================================

/// A plain item with a fixed size. Useful for previews and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedItem {
    pub size: Size,
    pub min: Size,
    pub visible: bool,
    pub geometry: Option<Rect>,
}

impl FixedItem {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            min: Size::new(width, height),
            visible: true,
            geometry: None,
        }
    }

    /// Set the minimum size.
    pub fn min(mut self, width: f32, height: f32) -> Self {
        self.min = Size::new(width, height);
        self
    }

    /// Mark the item hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl LayoutItem for FixedItem {
    fn preferred_size(&self) -> Size {
        self.size
    }

    fn minimum_size(&self) -> Size {
        self.min
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = Some(rect);
    }
}
