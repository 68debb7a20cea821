//! Slide-out cart drawer visibility.

/// Inputs that affect the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    /// The cart trigger (badge button) was activated
    TriggerClicked,
    /// The drawer's own close control
    CloseClicked,
    /// A click landed outside both the drawer and the trigger
    OutsideClick,
    /// Escape key
    Escape,
}

/// Open/closed state of the drawer. Closed by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip the drawer; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Apply an event; returns whether visibility changed.
    pub fn handle(&mut self, event: DrawerEvent) -> bool {
        let before = self.open;
        match event {
            DrawerEvent::TriggerClicked => {
                self.toggle();
            }
            DrawerEvent::CloseClicked | DrawerEvent::OutsideClick | DrawerEvent::Escape => {
                self.close();
            }
        }
        before != self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_toggles() {
        let mut drawer = DrawerState::new();
        assert!(drawer.handle(DrawerEvent::TriggerClicked));
        assert!(drawer.is_open());
        assert!(drawer.handle(DrawerEvent::TriggerClicked));
        assert!(!drawer.is_open());
    }

    #[test]
    fn close_events_only_close() {
        for event in [
            DrawerEvent::CloseClicked,
            DrawerEvent::OutsideClick,
            DrawerEvent::Escape,
        ] {
            let mut drawer = DrawerState::new();
            assert!(!drawer.handle(event));
            drawer.open();
            assert!(drawer.handle(event));
            assert!(!drawer.is_open());
        }
    }
}
