//! Render surfaces hosted by the TUI.
//!
//! The cart manager pushes a snapshot into each slot after every mutation;
//! the draw loop reads the latest snapshot back out. Both the inline summary
//! and the drawer get their own slot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use storefront_core::{CartView, RenderSurface};

/// Shared handle to the most recent snapshot a surface received.
#[derive(Clone, Default)]
pub struct ViewSlot {
    latest: Rc<RefCell<Option<CartView>>>,
    renders: Rc<Cell<usize>>,
}

impl ViewSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent snapshot, if the manager has rendered yet.
    pub fn latest(&self) -> Option<CartView> {
        self.latest.borrow().clone()
    }

    /// Number of snapshots received.
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}

impl RenderSurface for ViewSlot {
    fn render(&mut self, view: &CartView) {
        *self.latest.borrow_mut() = Some(view.clone());
        self.renders.set(self.renders.get() + 1);
    }
}
