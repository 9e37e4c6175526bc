//! Counting label driver
//!
//! A [`CountingLabel`] animates its displayed number from one value to
//! another. Every frame delivered by its [`FrameClock`] advances the run by
//! the real time that passed since the previous frame, eases the fraction,
//! interpolates the value and renders it through the configured
//! [`Formatter`]. When the run reaches its duration the frame subscription is
//! released and the completion callback fires once.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::animation::{CounterRun, EasingOption};
use crate::clock::{FrameClock, SubscriptionSlot};
use crate::config::{CountingLabelConfig, DEFAULT_ANIMATION_DURATION};
use crate::text::{Formatter, LabelContent, RenderTarget, StyledText};

type CompletionCallback = Box<dyn FnOnce()>;

struct LabelState {
    clock: Rc<dyn FrameClock>,
    easing: EasingOption,
    animation_duration: f64,
    formatter: Formatter,
    completion: Option<CompletionCallback>,
    /// `None` until the first run is configured
    run: Option<CounterRun>,
    last_update: f64,
    timer: SubscriptionSlot,
    content: LabelContent,
    target: Option<Box<dyn RenderTarget>>,
}

/// A label that counts between numbers.
///
/// All methods take `&self`; the label is single-threaded and may be driven
/// from inside its own callbacks (e.g. a completion callback that starts the
/// next run through a [`WeakCountingLabel`]).
pub struct CountingLabel {
    state: Rc<RefCell<LabelState>>,
}

/// Non-owning handle to a [`CountingLabel`]
#[derive(Clone)]
pub struct WeakCountingLabel {
    state: Weak<RefCell<LabelState>>,
}

impl WeakCountingLabel {
    pub fn upgrade(&self) -> Option<CountingLabel> {
        self.state.upgrade().map(|state| CountingLabel { state })
    }
}

impl CountingLabel {
    pub fn new(clock: Rc<dyn FrameClock>) -> Self {
        Self::with_config(clock, &CountingLabelConfig::default())
    }

    pub fn with_config(clock: Rc<dyn FrameClock>, config: &CountingLabelConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(LabelState {
                clock,
                easing: config.easing,
                animation_duration: config.animation_duration,
                formatter: Formatter::Unset,
                completion: None,
                run: None,
                last_update: 0.0,
                timer: SubscriptionSlot::new(),
                content: LabelContent::Empty,
                target: None,
            })),
        }
    }

    pub fn downgrade(&self) -> WeakCountingLabel {
        WeakCountingLabel {
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn easing(&self) -> EasingOption {
        self.state.borrow().easing
    }

    /// Easing for runs started after this call
    pub fn set_easing(&self, easing: EasingOption) {
        self.state.borrow_mut().easing = easing;
    }

    pub fn animation_duration(&self) -> f64 {
        self.state.borrow().animation_duration
    }

    /// Duration used by [`count_from`](Self::count_from) and the other
    /// duration-less calls
    pub fn set_animation_duration(&self, secs: f64) {
        self.state.borrow_mut().animation_duration = secs;
    }

    /// Render values as plain text
    pub fn set_formatter<F>(&self, formatter: F)
    where
        F: Fn(f64) -> String + 'static,
    {
        self.state.borrow_mut().formatter = Formatter::plain(formatter);
    }

    /// Render values as styled text
    pub fn set_styled_formatter<F>(&self, formatter: F)
    where
        F: Fn(f64) -> StyledText + 'static,
    {
        self.state.borrow_mut().formatter = Formatter::styled(formatter);
    }

    pub fn clear_formatter(&self) {
        self.state.borrow_mut().formatter = Formatter::Unset;
    }

    /// One-shot callback for the end of the next run to finish
    pub fn set_completion<F>(&self, completion: F)
    where
        F: FnOnce() + 'static,
    {
        self.state.borrow_mut().completion = Some(Box::new(completion));
    }

    /// Forward every rendered frame to `target`
    pub fn set_render_target(&self, target: Box<dyn RenderTarget>) {
        self.state.borrow_mut().target = Some(target);
    }

    /// Count using the configured animation duration.
    ///
    /// A non-positive duration is replaced with the 2 second default first.
    pub fn count_from(&self, from: f64, to: f64) {
        let duration = {
            let mut state = self.state.borrow_mut();
            if !(state.animation_duration > 0.0) {
                state.animation_duration = DEFAULT_ANIMATION_DURATION;
            }
            state.animation_duration
        };
        self.count_from_with_duration(from, to, duration);
    }

    /// Start a run from `from` to `to` lasting `duration` seconds.
    ///
    /// Any run in flight is abandoned and its frame subscription released. A
    /// zero duration renders `to` and completes immediately without
    /// subscribing to the clock. Negative and NaN durations are treated as
    /// zero, so they also complete synchronously.
    pub fn count_from_with_duration(&self, from: f64, to: f64, duration: f64) {
        let immediate = !(duration > 0.0);
        if immediate && duration != 0.0 {
            log::warn!("counting duration {} is not positive, jumping to the end value", duration);
        }

        {
            let mut state = self.state.borrow_mut();
            state.timer.clear();

            if immediate {
                state.run = Some(CounterRun::finished(from, to, state.easing));
            } else {
                log::debug!(
                    "counting from {} to {} over {}s ({})",
                    from,
                    to,
                    duration,
                    state.easing
                );
                state.run = Some(CounterRun::new(from, to, duration, state.easing));
                state.last_update = state.clock.now();

                let weak = Rc::downgrade(&self.state);
                let subscription = state.clock.subscribe(Box::new(move || {
                    if let Some(state) = weak.upgrade() {
                        Self::update_value(&state);
                    }
                }));
                state.timer.replace(Some(subscription));
            }
        }

        if immediate {
            Self::set_text_value(&self.state, to);
            Self::run_completion(&self.state);
        }
    }

    pub fn count_from_current_value_to(&self, to: f64) {
        self.count_from(self.current_value(), to);
    }

    pub fn count_from_current_value_to_with_duration(&self, to: f64, duration: f64) {
        self.count_from_with_duration(self.current_value(), to, duration);
    }

    pub fn count_from_zero_to(&self, to: f64) {
        self.count_from(0.0, to);
    }

    pub fn count_from_zero_to_with_duration(&self, to: f64, duration: f64) {
        self.count_from_with_duration(0.0, to, duration);
    }

    /// Interpolated value right now; `0.0` before the first run
    pub fn current_value(&self) -> f64 {
        self.state
            .borrow()
            .run
            .as_ref()
            .map(CounterRun::current_value)
            .unwrap_or(0.0)
    }

    /// Fraction of the current (or last) run's duration consumed
    pub fn progress(&self) -> f64 {
        self.state
            .borrow()
            .run
            .as_ref()
            .map(CounterRun::progress)
            .unwrap_or(0.0)
    }

    /// Whether a run is in flight and subscribed to the clock
    pub fn is_animating(&self) -> bool {
        self.state.borrow().timer.is_active()
    }

    pub fn content(&self) -> LabelContent {
        self.state.borrow().content.clone()
    }

    /// Displayed text without styling
    pub fn text(&self) -> String {
        self.state.borrow().content.as_plain_text()
    }

    fn update_value(state: &Rc<RefCell<LabelState>>) {
        let (value, finished) = {
            let mut guard = state.borrow_mut();
            let now = guard.clock.now();
            let delta = now - guard.last_update;
            guard.last_update = now;

            let Some(mut run) = guard.run else {
                guard.timer.clear();
                return;
            };
            let finished = run.advance(delta);
            let value = run.current_value();
            guard.run = Some(run);
            log::trace!("tick +{:.4}s -> {}", delta, value);

            if finished {
                guard.timer.clear();
            }
            (value, finished)
        };

        Self::set_text_value(state, value);

        if finished {
            log::debug!("counting finished at {}", value);
            Self::run_completion(state);
        }
    }

    fn set_text_value(state: &Rc<RefCell<LabelState>>, value: f64) {
        let formatter = state.borrow().formatter.clone();
        let Some(content) = formatter.format(value) else {
            panic!("No formatter set, call `set_formatter` or `set_styled_formatter` before counting");
        };

        let target = {
            let mut guard = state.borrow_mut();
            guard.content = content.clone();
            guard.target.take()
        };

        if let Some(mut target) = target {
            target.display(&content);
            let mut guard = state.borrow_mut();
            // a target installed from inside `display` wins
            if guard.target.is_none() {
                guard.target = Some(target);
            }
        }
    }

    fn run_completion(state: &Rc<RefCell<LabelState>>) {
        let completion = state.borrow_mut().completion.take();
        if let Some(completion) = completion {
            completion();
        }
    }
}

impl std::fmt::Debug for CountingLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("CountingLabel")
            .field("easing", &state.easing)
            .field("animation_duration", &state.animation_duration)
            .field("formatter", &state.formatter)
            .field("run", &state.run)
            .field("animating", &state.timer.is_active())
            .field("content", &state.content)
            .finish()
    }
}
