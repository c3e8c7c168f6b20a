use std::cell::Cell;
use std::rc::Rc;

use egui::Pos2;

/// Latest known pointer position and whether it is over the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub position: Pos2,
    pub active: bool,
}

impl PointerState {
    pub fn at(position: Pos2) -> Self {
        Self {
            position,
            active: true,
        }
    }

    pub fn inactive() -> Self {
        Self::default()
    }
}

/// Shared handle the input side writes and the engine reads.
///
/// Holds a single snapshot; the last write wins and every read sees a whole
/// [`PointerState`]. Cloning shares the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct PointerSource {
    state: Rc<Cell<PointerState>>,
}

impl PointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved inside the viewport
    pub fn move_to(&self, position: Pos2) {
        self.state.set(PointerState::at(position));
    }

    /// Pointer left the viewport; keeps the last position
    pub fn leave(&self) {
        let mut state = self.state.get();
        state.active = false;
        self.state.set(state);
    }

    pub fn set(&self, state: PointerState) {
        self.state.set(state);
    }

    pub fn snapshot(&self) -> PointerState {
        self.state.get()
    }
}
