//! Configuration for counting labels
//!
//! Labels can be configured from presets through [`CountingProfile`] or from
//! a JSON document deserialized into [`CountingLabelConfig`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::EasingOption;
use crate::CountingError;

/// Duration used when none (or a non-positive one) is configured
pub const DEFAULT_ANIMATION_DURATION: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CountingProfile {
    #[default]
    Standard,
    Snappy,
    Leisurely,
    Custom(CountingLabelConfig),
}

impl CountingProfile {
    pub fn resolve(&self) -> CountingLabelConfig {
        match self {
            Self::Standard => CountingLabelConfig::default(),
            Self::Snappy => CountingLabelConfig {
                animation_duration: 0.6,
                easing: EasingOption::EaseOut,
                frame_timing: FrameTimingConfig { target_fps: 60 },
            },
            Self::Leisurely => CountingLabelConfig {
                animation_duration: 4.0,
                easing: EasingOption::EaseInOut,
                frame_timing: FrameTimingConfig { target_fps: 30 },
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountingLabelConfig {
    /// Seconds used by the duration-less counting calls
    pub animation_duration: f64,
    pub easing: EasingOption,
    pub frame_timing: FrameTimingConfig,
}

impl Default for CountingLabelConfig {
    fn default() -> Self {
        Self {
            animation_duration: DEFAULT_ANIMATION_DURATION,
            easing: EasingOption::Linear,
            frame_timing: FrameTimingConfig::default(),
        }
    }
}

impl CountingLabelConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(CountingError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(CountingError::from)?)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !self.animation_duration.is_finite() || self.animation_duration < 0.0 {
            return Err(CountingError::InvalidConfig(format!(
                "animation_duration must be a finite, non-negative number of seconds (got {})",
                self.animation_duration
            ))
            .into());
        }
        self.frame_timing.validate()
    }
}

/// Cadence used by hosts that drive the frame clock from a timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameTimingConfig {
    pub target_fps: u32,
}

impl Default for FrameTimingConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

impl FrameTimingConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.target_fps == 0 {
            return Err(CountingError::InvalidConfig("target_fps must be at least 1".into()).into());
        }
        Ok(())
    }
}
