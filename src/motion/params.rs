use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tuning for the floating and repulsion behaviour of every item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Amplitude of the harmonic float, in pixels
    pub float_range: f32,

    /// Angular rate of the float, in radians per second
    pub angular_rate: f32,

    /// Distance within which the pointer pushes items away
    pub repel_radius: f32,

    /// Push distance at zero range; falls off linearly to 0 at `repel_radius`
    pub repel_strength: f32,

    /// Fraction of the remaining distance covered per tick, scaled by `speed`
    pub ease_factor: f32,

    pub speed: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self::glyphs()
    }
}

impl MotionParams {
    /// Small text glyphs: wide float, strong push
    pub fn glyphs() -> Self {
        Self {
            float_range: 30.0,
            angular_rate: 1.0,
            repel_radius: 150.0,
            repel_strength: 200.0,
            ease_factor: 0.05,
            speed: 0.3,
        }
    }

    /// Larger images: calmer float, softer push
    pub fn images() -> Self {
        Self {
            float_range: 20.0,
            repel_strength: 160.0,
            ..Self::glyphs()
        }
    }

    /// Per-tick easing step, `ease_factor * speed`
    pub fn step(&self) -> f32 {
        self.ease_factor * self.speed
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("float_range", self.float_range)?;
        non_negative("angular_rate", self.angular_rate)?;
        non_negative("repel_strength", self.repel_strength)?;

        if !self.repel_radius.is_finite() || self.repel_radius <= 0.0 {
            return Err(ConfigError::InvalidRepelRadius(self.repel_radius));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !self.ease_factor.is_finite() || self.ease_factor <= 0.0 || self.ease_factor > 1.0 {
            return Err(ConfigError::InvalidEaseFactor(self.ease_factor));
        }
        // Larger steps overshoot the target and oscillate instead of easing.
        if self.step() > 1.0 {
            return Err(ConfigError::EaseStepTooLarge(self.step()));
        }

        Ok(())
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(MotionParams::glyphs().validate().is_ok());
        assert!(MotionParams::images().validate().is_ok());
        assert_eq!(MotionParams::default(), MotionParams::glyphs());
    }

    #[test]
    fn rejects_non_positive_radius_and_speed() {
        let params = MotionParams {
            repel_radius: 0.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::InvalidRepelRadius(0.0)));

        let params = MotionParams {
            speed: -0.3,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::InvalidSpeed(-0.3)));
    }

    #[test]
    fn rejects_bad_easing() {
        let params = MotionParams {
            ease_factor: 0.0,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::InvalidEaseFactor(_))));

        let params = MotionParams {
            ease_factor: 1.0,
            speed: 2.0,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::EaseStepTooLarge(_))));
    }

    #[test]
    fn rejects_nan_range() {
        let params = MotionParams {
            float_range: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParameter { name: "float_range", .. })
        ));
    }
}
