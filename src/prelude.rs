//! Prelude module for common counting-label types and traits
//!
//! `use counting_label::prelude::*;` brings in everything needed to set up a
//! label, a clock and a formatter.

pub use crate::animation::{CounterRun, EasingOption};

pub use crate::clock::{
    DisplayLink, FrameClock, ManualTime, MonotonicTime, Subscription, SubscriptionSlot,
    TimeSource,
};

pub use crate::config::{CountingLabelConfig, CountingProfile, FrameTimingConfig};

pub use crate::label::{CountingLabel, WeakCountingLabel};

pub use crate::text::{
    format, Color, Formatter, LabelContent, RenderTarget, StyledText, TextSpan, TextStyle,
};

#[cfg(feature = "tokio-runtime")]
pub use crate::runtime::drive_until_idle;

#[cfg(feature = "egui")]
pub use crate::ui::widget::CountingLabelWidget;

pub use crate::{CountingError, Result};

pub use std::rc::Rc;
