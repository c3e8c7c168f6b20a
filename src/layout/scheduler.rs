use std::cell::Cell;
use std::rc::Rc;

/// Source of frame callbacks.
///
/// The engine asks for the next frame after starting and after every tick
/// while running; the host answers by calling
/// [`LayoutEngine::tick`](super::LayoutEngine::tick) once the frame arrives.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// egui repaints on request, and every repaint is a frame.
impl FrameScheduler for egui::Context {
    fn request_frame(&mut self) {
        self.request_repaint();
    }
}

/// Pending-frame flag for hosts that drive the loop themselves.
///
/// Clones share the flag: hand one to the engine and poll the other.
#[derive(Debug, Clone, Default)]
pub struct FrameFlag {
    pending: Rc<Cell<bool>>,
    requests: Rc<Cell<u64>>,
}

impl FrameFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Consume the pending request, if any
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }

    /// Total frames requested so far
    pub fn requests(&self) -> u64 {
        self.requests.get()
    }
}

impl FrameScheduler for FrameFlag {
    fn request_frame(&mut self) {
        self.pending.set(true);
        self.requests.set(self.requests.get() + 1);
    }
}
