//! Layout engine: seeds floating items and drives them on a frame clock.
//!
//! ```ignore
//! let flag = FrameFlag::new();
//! let mut engine = LayoutEngine::new(&EngineConfig::glyphs(800.0, 600.0), flag.clone())?;
//! engine.on_frame(|frame| render(frame));
//! engine.start();
//!
//! while flag.take() {
//!     engine.tick(clock.elapsed_secs());
//! }
//! ```

mod config;
mod engine;
mod scheduler;

pub use config::{EngineConfig, Placement, Spacing};
pub use engine::{EngineState, ItemPosition, LayoutEngine};
pub use scheduler::{FrameFlag, FrameScheduler};
