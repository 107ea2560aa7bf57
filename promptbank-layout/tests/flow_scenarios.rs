//! Integration tests for the flow container as a scroll area drives it.
//!
//! A scroll area asks for `height_for_width` on every resize, then calls
//! `set_geometry` with the viewport width. These tests walk through that
//! sequence with shared item handles, the way the prompt board holds cards.

use promptbank_layout::{FixedItem, FlowContainer, ItemHandle, LayoutConfig, LayoutItem, Rect, Size};

/// Test harness: a flow container plus the handles the caller keeps.
struct Board {
    flow: FlowContainer<ItemHandle<FixedItem>>,
    handles: Vec<ItemHandle<FixedItem>>,
}

impl Board {
    fn new(config: LayoutConfig) -> Self {
        Self {
            flow: FlowContainer::with_config(config),
            handles: Vec::new(),
        }
    }

    fn add(&mut self, width: f32, height: f32) -> ItemHandle<FixedItem> {
        let handle = ItemHandle::new(FixedItem::new(width, height));
        self.flow.add(handle.clone());
        self.handles.push(handle.clone());
        handle
    }

    /// Resize the viewport and return the content height.
    fn resize(&mut self, width: f32) -> f32 {
        let height = self.flow.height_for_width(width);
        self.flow.set_geometry(Rect::new(0.0, 0.0, width, height))
    }
}

fn tight() -> LayoutConfig {
    LayoutConfig::new().margin(0.0).spacing(0.0)
}

#[test]
fn three_items_stack_in_a_narrow_viewport() {
    let mut board = Board::new(tight());
    for _ in 0..3 {
        board.add(60.0, 20.0);
    }

    assert_eq!(board.resize(100.0), 60.0);
    let origins: Vec<(f32, f32)> = board
        .handles
        .iter()
        .map(|h| {
            let r = h.borrow().geometry.unwrap();
            (r.x, r.y)
        })
        .collect();
    assert_eq!(origins, vec![(0.0, 0.0), (0.0, 20.0), (0.0, 40.0)]);
}

#[test]
fn item_wider_than_viewport_is_not_shrunk() {
    let mut board = Board::new(tight());
    let wide = board.add(80.0, 30.0);

    assert_eq!(board.resize(50.0), 30.0);
    assert_eq!(wide.borrow().geometry, Some(Rect::new(0.0, 0.0, 80.0, 30.0)));
}

#[test]
fn take_at_out_of_range_leaves_items_alone() {
    let mut board = Board::new(tight());
    for _ in 0..3 {
        board.add(10.0, 10.0);
    }
    assert!(board.flow.take_at(5).is_none());
    assert_eq!(board.flow.count(), 3);
}

#[test]
fn widening_the_viewport_reflows_rows() {
    let mut board = Board::new(LayoutConfig::board());
    for _ in 0..4 {
        board.add(450.0, 300.0);
    }

    // One card per row.
    assert_eq!(board.resize(500.0), 4.0 * 300.0 + 3.0 * 15.0);
    // Two cards per row: 450 + 15 + 450 = 915.
    assert_eq!(board.resize(915.0), 2.0 * 300.0 + 15.0);
    assert_eq!(board.handles[1].borrow().geometry.unwrap().x, 465.0);
    // Back to narrow.
    assert_eq!(board.resize(914.0), 4.0 * 300.0 + 3.0 * 15.0);
}

#[test]
fn removing_by_identity_keeps_order_and_defers_release() {
    let mut board = Board::new(tight());
    let first = board.add(10.0, 10.0);
    let middle = board.add(10.0, 10.0);
    let last = board.add(10.0, 10.0);

    let removed = board.flow.remove(&middle).unwrap();
    assert!(removed.ptr_eq(&middle));
    // The caller still holds the item after the container lets go.
    assert_eq!(middle.handle_count(), 3);
    drop(removed);
    assert_eq!(middle.handle_count(), 2);

    assert_eq!(board.flow.count(), 2);
    assert!(board.flow.item_at(0).unwrap().ptr_eq(&first));
    assert!(board.flow.item_at(1).unwrap().ptr_eq(&last));
    assert!(board.flow.remove(&middle).is_none());
}

#[test]
fn hiding_an_item_closes_its_gap() {
    let mut board = Board::new(tight());
    let a = board.add(50.0, 10.0);
    let b = board.add(50.0, 10.0);
    let c = board.add(50.0, 10.0);

    assert_eq!(board.resize(100.0), 20.0);
    assert_eq!(c.borrow().geometry.unwrap().y, 10.0);

    b.borrow_mut().visible = false;
    assert_eq!(board.resize(100.0), 10.0);
    assert_eq!(c.borrow().geometry, Some(Rect::new(50.0, 0.0, 50.0, 10.0)));
    // Hidden item keeps whatever it had.
    assert_eq!(b.borrow().geometry, Some(Rect::new(50.0, 0.0, 50.0, 10.0)));
    assert!(a.is_visible());
}

#[test]
fn minimum_size_tracks_largest_item() {
    let mut board = Board::new(LayoutConfig::new().margin(15.0));
    assert_eq!(board.flow.minimum_size(), Size::new(30.0, 30.0));
    board.add(450.0, 320.0);
    board.add(200.0, 500.0);
    assert_eq!(board.flow.minimum_size(), Size::new(480.0, 530.0));
}
