use egui::Pos2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{EngineConfig, FrameScheduler, Placement};
use crate::error::ConfigError;
use crate::motion::{MotionField, MotionItem, Phase, PointerSource};
use crate::spatial::{CenterClearScatter, PoissonDiskSampler};

/// Published position of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPosition {
    pub id: usize,
    pub position: Pos2,
}

impl From<&MotionItem> for ItemPosition {
    fn from(item: &MotionItem) -> Self {
        Self {
            id: item.id(),
            position: item.position(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Stopped,
    Running,
}

type FrameListener = Box<dyn FnMut(&[ItemPosition])>;

/// Owns the floating items and drives them frame by frame.
///
/// Anchors and phases are generated once in [`LayoutEngine::new`]. While
/// running, every [`tick`](Self::tick) advances all items against the latest
/// pointer snapshot, hands the frame to each listener in registration order
/// and asks the scheduler for the next frame.
pub struct LayoutEngine<S: FrameScheduler> {
    items: Vec<MotionItem>,
    field: MotionField,
    pointer: PointerSource,
    scheduler: S,
    listeners: Vec<FrameListener>,
    frame: Vec<ItemPosition>,
    state: EngineState,
    seed: u64,
    ticks: u64,
}

impl<S: FrameScheduler> LayoutEngine<S> {
    pub fn new(config: &EngineConfig, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = MotionField::new(config.motion)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let min_dist = config.min_distance();

        let anchors = match config.placement {
            Placement::PoissonDisk { attempts } => {
                PoissonDiskSampler::new(config.width, config.height, min_dist, config.count)?
                    .with_attempts(attempts)?
                    .sample(&mut rng)
            }
            Placement::CenterClear { margin, clear_band } => {
                CenterClearScatter::new(config.width, config.height, margin, clear_band)?
                    .sample(config.count, &mut rng)
            }
        };

        if anchors.len() < config.count {
            log::warn!(
                "only {} of {} anchors fit in {}x{} at spacing {:.1}",
                anchors.len(),
                config.count,
                config.width,
                config.height,
                min_dist
            );
        }

        let items: Vec<MotionItem> = anchors
            .into_iter()
            .enumerate()
            .map(|(id, anchor)| MotionItem::new(id, anchor, Phase::random(&mut rng)))
            .collect();
        let frame = items.iter().map(ItemPosition::from).collect();

        log::info!(
            "layout engine created: {} items in {}x{}, seed {}",
            items.len(),
            config.width,
            config.height,
            seed
        );

        Ok(Self {
            items,
            field,
            pointer: PointerSource::new(),
            scheduler,
            listeners: Vec::new(),
            frame,
            state: EngineState::Stopped,
            seed,
            ticks: 0,
        })
    }

    /// Register a frame listener; listeners run in registration order
    pub fn on_frame(&mut self, listener: impl FnMut(&[ItemPosition]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Handle for the input side to publish pointer updates
    pub fn pointer(&self) -> PointerSource {
        self.pointer.clone()
    }

    pub fn start(&mut self) {
        if self.state == EngineState::Running {
            return;
        }
        log::debug!("layout engine: {:?} -> {:?}", self.state, EngineState::Running);
        self.state = EngineState::Running;
        self.scheduler.request_frame();
    }

    pub fn stop(&mut self) {
        if self.state == EngineState::Stopped {
            return;
        }
        log::debug!("layout engine: {:?} -> {:?}", self.state, EngineState::Stopped);
        self.state = EngineState::Stopped;
    }

    /// Advance every item to time `t` (seconds) and publish the frame.
    ///
    /// A frame that arrives after [`stop`](Self::stop) is ignored.
    pub fn tick(&mut self, t: f64) {
        if self.state != EngineState::Running {
            return;
        }

        let pointer = self.pointer.snapshot();
        self.field.advance_all(&mut self.items, t, pointer);

        self.frame.clear();
        self.frame.extend(self.items.iter().map(ItemPosition::from));
        for listener in self.listeners.iter_mut() {
            listener(&self.frame);
        }

        self.ticks += 1;
        self.scheduler.request_frame();
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn items(&self) -> &[MotionItem] {
        &self.items
    }

    /// Last published frame, or the anchors before the first tick
    pub fn frame(&self) -> &[ItemPosition] {
        &self.frame
    }

    pub fn field(&self) -> &MotionField {
        &self.field
    }

    /// Seed the anchors and phases were drawn from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::layout::{FrameFlag, Spacing};

    fn config() -> EngineConfig {
        EngineConfig::glyphs(800.0, 600.0).with_seed(7)
    }

    #[test]
    fn starts_stopped_with_items_at_anchors() {
        let flag = FrameFlag::new();
        let engine = LayoutEngine::new(&config(), flag.clone()).unwrap();

        assert_eq!(engine.state(), EngineState::Stopped);
        assert_eq!(engine.len(), 25);
        assert_eq!(flag.requests(), 0);
        for (id, item) in engine.items().iter().enumerate() {
            assert_eq!(item.id(), id);
            assert_eq!(item.position(), item.anchor());
            assert_eq!(engine.frame()[id].position, item.anchor());
        }
    }

    #[test]
    fn start_and_stop_transitions() {
        let flag = FrameFlag::new();
        let mut engine = LayoutEngine::new(&config(), flag.clone()).unwrap();

        engine.stop();
        assert_eq!(engine.state(), EngineState::Stopped);
        assert_eq!(flag.requests(), 0);

        engine.start();
        assert!(engine.is_running());
        assert_eq!(flag.requests(), 1);

        // 重复 start 不会再请求帧
        engine.start();
        assert_eq!(flag.requests(), 1);

        assert!(flag.take());
        engine.tick(0.016);
        assert_eq!(flag.requests(), 2);

        engine.stop();
        assert!(!engine.is_running());
        assert!(flag.take());
        engine.tick(0.032);
        assert_eq!(flag.requests(), 2);
        assert!(!flag.is_pending());
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn tick_while_stopped_is_ignored() {
        let mut engine = LayoutEngine::new(&config(), FrameFlag::new()).unwrap();
        let before: Vec<_> = engine.items().to_vec();

        engine.tick(5.0);

        assert_eq!(engine.items(), &before[..]);
        assert_eq!(engine.ticks(), 0);
    }

    #[test]
    fn listeners_run_in_order_with_full_frame() {
        let mut engine = LayoutEngine::new(&config(), FrameFlag::new()).unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));

        for name in ["first", "second"] {
            let calls = calls.clone();
            engine.on_frame(move |frame| {
                calls.borrow_mut().push((name, frame.len(), frame[0].id));
            });
        }

        engine.start();
        engine.tick(0.5);

        assert_eq!(
            *calls.borrow(),
            vec![("first", 25, 0), ("second", 25, 0)]
        );
    }

    #[test]
    fn frame_reflects_advanced_positions() {
        let mut engine = LayoutEngine::new(&config(), FrameFlag::new()).unwrap();
        let published = Rc::new(RefCell::new(Vec::new()));
        {
            let published = published.clone();
            engine.on_frame(move |frame| *published.borrow_mut() = frame.to_vec());
        }

        engine.start();
        for frame in 0..10 {
            engine.tick(frame as f64 / 60.0);
        }

        let published = published.borrow();
        assert_eq!(published.len(), engine.len());
        for (entry, item) in published.iter().zip(engine.items()) {
            assert_eq!(entry.id, item.id());
            assert_eq!(entry.position, item.position());
        }
        assert!(engine.items().iter().any(|item| item.position() != item.anchor()));
    }

    #[test]
    fn pointer_pushes_items_away() {
        let mut config = config();
        config.motion.float_range = 0.0;
        let mut engine = LayoutEngine::new(&config, FrameFlag::new()).unwrap();
        let anchor = engine.items()[0].anchor();

        // 指针放在第一个元素左侧 40px 处
        engine.pointer().move_to(anchor - egui::vec2(40.0, 0.0));

        engine.start();
        for frame in 0..400 {
            engine.tick(frame as f64 / 60.0);
        }

        let item = &engine.items()[0];
        assert!(item.position().x > anchor.x + 100.0);
        assert!((item.position().y - anchor.y).abs() < 1e-3);
    }

    #[test]
    fn same_seed_same_layout() {
        let a = LayoutEngine::new(&config(), FrameFlag::new()).unwrap();
        let b = LayoutEngine::new(&config(), FrameFlag::new()).unwrap();
        assert_eq!(a.items(), b.items());
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn under_delivery_is_not_an_error() {
        let config = EngineConfig {
            spacing: Spacing::Fixed(500.0),
            ..config().with_count(50)
        };
        let engine = LayoutEngine::new(&config, FrameFlag::new()).unwrap();
        assert!(engine.len() >= 1);
        assert!(engine.len() < 50);
    }

    #[test]
    fn unbounded_count_with_fixed_spacing_fills_viewport() {
        let config = EngineConfig {
            spacing: Spacing::Fixed(60.0),
            ..config().with_count(usize::MAX)
        };
        let engine = LayoutEngine::new(&config, FrameFlag::new()).unwrap();
        assert!(engine.len() > 50);
    }

    #[test]
    fn image_preset_uses_exact_count() {
        let engine =
            LayoutEngine::new(&EngineConfig::images(1000.0, 800.0).with_seed(3), FrameFlag::new())
                .unwrap();
        assert_eq!(engine.len(), 15);
        for item in engine.items() {
            assert!((item.anchor().x - 500.0).abs() >= 250.0 - 1e-3);
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = config().with_count(0);
        assert_eq!(
            LayoutEngine::new(&config, FrameFlag::new()).err(),
            Some(ConfigError::ZeroCount)
        );
    }
}
