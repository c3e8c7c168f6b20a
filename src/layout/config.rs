use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::motion::MotionParams;
use crate::spatial::{self, DEFAULT_ATTEMPTS};

/// How far apart anchors must be.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Spacing {
    /// Explicit minimum distance in pixels
    Fixed(f32),

    /// Derived from the viewport area shared by `count` items:
    /// `sqrt(area / count / π) * spread`
    Density { spread: f32 },
}

/// How anchors are scattered over the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// Collision-free Poisson-disk sampling
    PoissonDisk { attempts: usize },

    /// Uniform random on both sides of a clear centre band, no spacing guarantee
    CenterClear { margin: f32, clear_band: f32 },
}

impl Default for Placement {
    fn default() -> Self {
        Placement::PoissonDisk {
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

/// Everything the engine needs, applied once at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: f32,
    pub height: f32,

    /// Target number of items; sampling may deliver fewer
    pub count: usize,

    pub spacing: Spacing,
    pub placement: Placement,
    pub motion: MotionParams,

    /// Seed for anchors and phases; a random one is drawn and logged when unset
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::glyphs(1280.0, 720.0)
    }
}

impl EngineConfig {
    /// Background text glyphs spread evenly over the whole viewport
    pub fn glyphs(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            count: 25,
            spacing: Spacing::Density { spread: 1.2 },
            placement: Placement::default(),
            motion: MotionParams::glyphs(),
            seed: None,
        }
    }

    /// Fewer, larger images kept to the sides of the viewport
    pub fn images(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            count: 15,
            spacing: Spacing::Density { spread: 1.3 },
            placement: Placement::CenterClear {
                margin: 0.1,
                clear_band: 0.25,
            },
            motion: MotionParams::images(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Minimum anchor distance after resolving [`Spacing`]
    pub fn min_distance(&self) -> f32 {
        match self.spacing {
            Spacing::Fixed(dist) => dist,
            Spacing::Density { spread } => {
                let area_per_item = self.width * self.height / self.count.max(1) as f32;
                (area_per_item / PI).sqrt() * spread
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        spatial::validate_viewport(self.width, self.height)?;
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }

        if let Spacing::Density { spread } = self.spacing {
            if !spread.is_finite() || spread <= 0.0 {
                return Err(ConfigError::InvalidSpread(spread));
            }
        }
        let min_dist = self.min_distance();
        if !min_dist.is_finite() || min_dist <= 0.0 {
            return Err(ConfigError::InvalidMinDistance(min_dist));
        }

        match self.placement {
            Placement::PoissonDisk { attempts } => {
                if attempts == 0 {
                    return Err(ConfigError::ZeroAttempts);
                }
                spatial::SampleGrid::dimensions(self.width, self.height, min_dist)?;
            }
            Placement::CenterClear { margin, clear_band } => {
                spatial::CenterClearScatter::new(self.width, self.height, margin, clear_band)?;
                if self.count > spatial::MAX_SCATTER_POINTS {
                    return Err(ConfigError::TooManyItems {
                        count: self.count,
                        limit: spatial::MAX_SCATTER_POINTS,
                    });
                }
            }
        }

        self.motion.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::glyphs(800.0, 600.0).validate().is_ok());
        assert!(EngineConfig::images(800.0, 600.0).validate().is_ok());
    }

    #[test]
    fn density_spacing() {
        let config = EngineConfig::glyphs(800.0, 600.0).with_count(24);
        let expected = (800.0 * 600.0 / 24.0 / PI).sqrt() * 1.2;
        assert!((config.min_distance() - expected).abs() < 1e-3);

        let config = EngineConfig {
            spacing: Spacing::Fixed(42.0),
            ..config
        };
        assert_eq!(config.min_distance(), 42.0);
    }

    #[test]
    fn rejects_invalid_configs() {
        let base = EngineConfig::glyphs(800.0, 600.0);

        assert_eq!(base.clone().with_count(0).validate(), Err(ConfigError::ZeroCount));
        assert!(matches!(
            EngineConfig { width: f32::INFINITY, ..base.clone() }.validate(),
            Err(ConfigError::InvalidViewport { .. })
        ));
        assert!(matches!(
            EngineConfig { spacing: Spacing::Fixed(0.0), ..base.clone() }.validate(),
            Err(ConfigError::InvalidMinDistance(_))
        ));
        assert!(matches!(
            EngineConfig { spacing: Spacing::Density { spread: -1.0 }, ..base.clone() }.validate(),
            Err(ConfigError::InvalidSpread(_))
        ));
        assert_eq!(
            EngineConfig { placement: Placement::PoissonDisk { attempts: 0 }, ..base.clone() }.validate(),
            Err(ConfigError::ZeroAttempts)
        );

        assert_eq!(
            EngineConfig::images(800.0, 600.0).with_count(usize::MAX).validate(),
            Err(ConfigError::TooManyItems {
                count: usize::MAX,
                limit: spatial::MAX_SCATTER_POINTS,
            })
        );

        let mut bad_motion = base;
        bad_motion.motion.speed = 0.0;
        assert_eq!(bad_motion.validate(), Err(ConfigError::InvalidSpeed(0.0)));
    }
}
