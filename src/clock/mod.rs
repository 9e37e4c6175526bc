//! Frame clock abstraction
//!
//! Animations never assume a refresh rate. They subscribe to a [`FrameClock`]
//! and measure the real time between ticks through [`FrameClock::now`].

pub mod display_link;
pub mod subscription;

use std::cell::Cell;
use std::rc::Rc;

use instant::Instant;

pub use display_link::DisplayLink;
pub use subscription::{Subscription, SubscriptionSlot};

/// Monotonic time in seconds
pub trait TimeSource {
    fn now(&self) -> f64;
}

/// Wall-clock time measured from the moment the source was created
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven time, shared between clones.
///
/// Useful for tests and for hosts that already track their own frame time.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<f64>>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward. Negative steps are ignored.
    pub fn advance(&self, secs: f64) {
        if secs > 0.0 {
            self.now.set(self.now.get() + secs);
        }
    }

    /// Jump to an absolute time, never moving backwards
    pub fn set(&self, secs: f64) {
        if secs > self.now.get() {
            self.now.set(secs);
        }
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// A registrable periodic callback source with explicit release
pub trait FrameClock {
    /// Current time in seconds
    fn now(&self) -> f64;

    /// Register `callback` to run on every frame until the returned
    /// subscription is released or dropped
    fn subscribe(&self, callback: Box<dyn FnMut()>) -> Subscription;
}
