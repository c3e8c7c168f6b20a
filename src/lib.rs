#![warn(clippy::all, rust_2018_idioms)]

pub mod error;
pub mod layout;
pub mod motion;
pub mod spatial;

pub use error::ConfigError;
pub use layout::{EngineConfig, EngineState, FrameFlag, FrameScheduler, ItemPosition, LayoutEngine};
pub use motion::{MotionField, MotionItem, MotionParams, Phase, PointerSource, PointerState};
pub use spatial::PoissonDiskSampler;
