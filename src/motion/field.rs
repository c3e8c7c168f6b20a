use egui::{Pos2, Vec2};

use super::{MotionItem, MotionParams, Phase, PointerState};
use crate::error::ConfigError;

/// Distances below this are treated as "pointer on top of the item".
pub const REPEL_EPSILON: f32 = 1e-3;

/// Item count from which [`MotionField::advance_all`] fans out over rayon.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Computes where each item wants to be and eases it there.
///
/// The target is the anchor plus a per-axis harmonic float, pushed away from
/// the pointer when it is within `repel_radius`. Items never read each other,
/// so they can be advanced in any order.
#[derive(Debug, Clone, Copy)]
pub struct MotionField {
    params: MotionParams,
    step: f32,
}

impl MotionField {
    pub fn new(params: MotionParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            params,
            step: params.step(),
        })
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    /// Harmonic offset from the anchor at time `t` (seconds)
    pub fn float_offset(&self, phase: Phase, t: f64) -> Vec2 {
        let wt = t * self.params.angular_rate as f64;
        let range = self.params.float_range;
        Vec2::new(
            (wt + phase.dx as f64).sin() as f32 * range,
            (wt + phase.dy as f64).cos() as f32 * range,
        )
    }

    /// Push applied to `target` by the pointer, zero when inactive or out of range
    pub fn repulsion(&self, target: Pos2, pointer: PointerState, phase: Phase) -> Vec2 {
        if !pointer.active {
            return Vec2::ZERO;
        }

        let radius = self.params.repel_radius;
        let offset = target - pointer.position;
        let dist = offset.length();
        if dist >= radius {
            return Vec2::ZERO;
        }

        // Normalise via the larger component first so tiny offsets keep their
        // direction even when `length()` underflows. Only an exact overlap
        // falls back to the item's phase.
        let scale = offset.x.abs().max(offset.y.abs());
        let direction = if scale > 0.0 {
            let unit = offset / scale;
            unit / unit.length()
        } else {
            Vec2::angled(phase.dx)
        };

        let falloff = (1.0 - dist.max(REPEL_EPSILON) / radius).max(0.0);
        direction * falloff * self.params.repel_strength
    }

    /// Where `item` is heading at time `t`
    pub fn target(&self, item: &MotionItem, t: f64, pointer: PointerState) -> Pos2 {
        let target = item.anchor() + self.float_offset(item.phase(), t);
        target + self.repulsion(target, pointer, item.phase())
    }

    /// Move `item` one easing step toward its target and return the new position
    pub fn advance(&self, item: &mut MotionItem, t: f64, pointer: PointerState) -> Pos2 {
        let target = self.target(item, t, pointer);
        item.position = if self.step >= 1.0 {
            target
        } else {
            item.position + (target - item.position) * self.step
        };
        item.position
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn advance_all(&self, items: &mut [MotionItem], t: f64, pointer: PointerState) {
        use rayon::prelude::*;

        if items.len() >= PARALLEL_THRESHOLD {
            items.par_iter_mut().for_each(|item| {
                self.advance(item, t, pointer);
            });
        } else {
            for item in items.iter_mut() {
                self.advance(item, t, pointer);
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn advance_all(&self, items: &mut [MotionItem], t: f64, pointer: PointerState) {
        for item in items.iter_mut() {
            self.advance(item, t, pointer);
        }
    }
}
