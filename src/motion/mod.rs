//! Per-frame motion of floating items.
//!
//! Each item floats around its anchor on two independent harmonics and is
//! pushed away from the pointer when it comes close. Positions ease toward the
//! resulting target, so pushes and releases look smooth.

mod field;
mod item;
mod params;
mod pointer;

pub use field::{MotionField, PARALLEL_THRESHOLD, REPEL_EPSILON};
pub use item::{MotionItem, Phase};
pub use params::MotionParams;
pub use pointer::{PointerSource, PointerState};
