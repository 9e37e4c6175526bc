use serde::{Deserialize, Serialize};

/// Exponent shared by every non-linear curve.
pub const RATE: f64 = 3.0;

/// Easing policies for counting animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingOption {
    /// Constant rate of change
    #[default]
    Linear,
    /// Slow start, accelerate
    EaseIn,
    /// Fast start, decelerate
    EaseOut,
    /// Slow start and slow finish
    EaseInOut,
}

impl EasingOption {
    pub const ALL: [EasingOption; 4] = [
        EasingOption::Linear,
        EasingOption::EaseIn,
        EasingOption::EaseOut,
        EasingOption::EaseInOut,
    ];

    /// Map a normalized time value (0.0 to 1.0) to normalized progress
    pub fn update(self, t: f64) -> f64 {
        self.update_with_rate(t, RATE)
    }

    /// Same curves as [`update`](Self::update) with a caller-chosen exponent.
    ///
    /// The input is not clamped. For `EaseInOut` the second half mirrors the
    /// first through `sign`, which is `-1` for even exponents and `1` otherwise.
    pub fn update_with_rate(self, t: f64, rate: f64) -> f64 {
        match self {
            EasingOption::Linear => t,
            EasingOption::EaseIn => t.powf(rate),
            EasingOption::EaseOut => 1.0 - (1.0 - t).powf(rate),
            EasingOption::EaseInOut => {
                let sign = if (rate as i64) % 2 == 0 { -1.0 } else { 1.0 };
                let u = t * 2.0;
                if u < 1.0 {
                    0.5 * u.powf(rate)
                } else {
                    sign * 0.5 * ((u - 2.0).powf(rate) + sign * 2.0)
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EasingOption::Linear => "linear",
            EasingOption::EaseIn => "ease_in",
            EasingOption::EaseOut => "ease_out",
            EasingOption::EaseInOut => "ease_in_out",
        }
    }
}

impl std::fmt::Display for EasingOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
