use crate::animation::easing::EasingOption;

/// Timing state of a single counting run.
///
/// A run interpolates from `start` to `end` over `total` seconds. `elapsed`
/// only grows and never exceeds `total`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterRun {
    pub start: f64,
    pub end: f64,
    elapsed: f64,
    total: f64,
    pub easing: EasingOption,
}

impl CounterRun {
    /// Create a run that has not consumed any time yet
    pub fn new(start: f64, end: f64, total: f64, easing: EasingOption) -> Self {
        let total = if total > 0.0 { total } else { 0.0 };
        Self {
            start,
            end,
            elapsed: 0.0,
            total,
            easing,
        }
    }

    /// A run that is already over and rests on `end`
    pub fn finished(start: f64, end: f64, easing: EasingOption) -> Self {
        Self::new(start, end, 0.0, easing)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Add wall-clock time to the run and report whether it is now complete.
    ///
    /// Negative deltas are ignored so a misbehaving clock cannot rewind.
    pub fn advance(&mut self, delta: f64) -> bool {
        if delta > 0.0 {
            self.elapsed += delta;
        }
        if self.elapsed >= self.total {
            self.elapsed = self.total;
        }
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.total
    }

    /// Fraction of the duration consumed so far (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        if self.is_complete() {
            1.0
        } else {
            self.elapsed / self.total
        }
    }

    /// Interpolated value at the current elapsed time
    pub fn current_value(&self) -> f64 {
        if self.is_complete() {
            return self.end;
        }

        let eased = self.easing.update(self.elapsed / self.total);
        self.start + eased * (self.end - self.start)
    }
}
