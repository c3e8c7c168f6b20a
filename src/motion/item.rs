use std::f32::consts::TAU;

use egui::Pos2;
use rand::Rng;

/// Per-axis oscillation offsets, each in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Phase {
    pub dx: f32,
    pub dy: f32,
}

impl Phase {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Draw both offsets uniformly from `[0, 2π)`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            dx: unit_to_angle(rng.random()),
            dy: unit_to_angle(rng.random()),
        }
    }
}

/// Map `u ∈ [0, 1)` onto `[0, 2π)`; rounding may land on 2π, which wraps to 0
fn unit_to_angle(u: f32) -> f32 {
    let angle = u * TAU;
    if angle < TAU {
        angle
    } else {
        0.0
    }
}

/// One floating element.
///
/// Anchor and phase are fixed when the item is created; only the position
/// moves, and only through [`MotionField::advance`](super::MotionField::advance).
#[derive(Debug, Clone, PartialEq)]
pub struct MotionItem {
    id: usize,
    anchor: Pos2,
    phase: Phase,
    pub(crate) position: Pos2,
}

impl MotionItem {
    /// New item resting at its anchor
    pub fn new(id: usize, anchor: Pos2, phase: Phase) -> Self {
        Self {
            id,
            anchor,
            phase,
            position: anchor,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }
}
