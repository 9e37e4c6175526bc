//! # counting-label
//!
//! Counter style animations for UI labels (odometers, score tickers).
//!
//! A [`CountingLabel`] interpolates between two numbers over a fixed duration,
//! shaping the rate of change with an [`EasingOption`]. It is driven by a
//! [`FrameClock`] such as [`DisplayLink`], which the host ticks once per
//! frame, and renders every interim value through a caller-supplied formatter.
//!
//! ```
//! use std::rc::Rc;
//! use counting_label::{clock::DisplayLink, text::format, CountingLabel};
//!
//! let link = Rc::new(DisplayLink::manual());
//! let label = CountingLabel::new(link.clone());
//! label.set_formatter(format::with_suffix(format::integer, " Hi"));
//! label.count_from_with_duration(0.0, 99.0, 2.0);
//!
//! link.advance(1.0);
//! assert_eq!(label.text(), "49 Hi");
//! link.advance(1.0);
//! assert_eq!(label.text(), "99 Hi");
//! assert!(!label.is_animating());
//! ```

pub mod animation;
pub mod clock;
pub mod config;
pub mod label;
pub mod prelude;
#[cfg(feature = "tokio-runtime")]
pub mod runtime;
pub mod text;
#[cfg(feature = "egui")]
pub mod ui;

// Re-export public API
pub use animation::{CounterRun, EasingOption};
pub use clock::{DisplayLink, FrameClock, ManualTime, MonotonicTime, Subscription, TimeSource};
pub use config::{CountingLabelConfig, CountingProfile, FrameTimingConfig};
pub use label::{CountingLabel, WeakCountingLabel};
pub use text::{Formatter, LabelContent, RenderTarget, StyledText, TextStyle};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum CountingError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error type alias for convenience
pub type Error = CountingError;

/// Initialize `env_logger` once; later calls are ignored
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
