use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::clock::{FrameClock, ManualTime, MonotonicTime, Subscription, TimeSource};

pub(crate) type TickCallback = Rc<RefCell<Box<dyn FnMut()>>>;

/// Live callbacks keyed by subscription id, in subscription order.
#[derive(Default)]
pub(crate) struct Registry {
    next_id: u64,
    callbacks: BTreeMap<u64, TickCallback>,
}

impl Registry {
    fn insert(&mut self, callback: Box<dyn FnMut()>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.callbacks.insert(id, Rc::new(RefCell::new(callback)));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> Option<TickCallback> {
        self.callbacks.remove(&id)
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.callbacks.contains_key(&id)
    }

    fn snapshot(&self) -> Vec<(u64, TickCallback)> {
        self.callbacks
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect()
    }
}

/// Frame clock that fans host ticks out to its subscribers.
///
/// The host calls [`tick`](Self::tick) once per frame (from a render loop, an
/// interval timer or a test). Callbacks run synchronously on the calling
/// thread in subscription order.
pub struct DisplayLink<T: TimeSource = MonotonicTime> {
    time: T,
    registry: Rc<RefCell<Registry>>,
    frames: Cell<u64>,
}

impl DisplayLink<MonotonicTime> {
    /// Display link measuring real wall-clock time
    pub fn new() -> Self {
        Self::with_time_source(MonotonicTime::new())
    }
}

impl Default for DisplayLink<MonotonicTime> {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayLink<ManualTime> {
    /// Display link whose time only moves when told to
    pub fn manual() -> Self {
        Self::with_time_source(ManualTime::new())
    }

    /// Move time forward by `secs` and deliver one tick
    pub fn advance(&self, secs: f64) -> usize {
        self.time.advance(secs);
        self.tick()
    }
}

impl<T: TimeSource> DisplayLink<T> {
    pub fn with_time_source(time: T) -> Self {
        Self {
            time,
            registry: Rc::new(RefCell::new(Registry::default())),
            frames: Cell::new(0),
        }
    }

    pub fn time_source(&self) -> &T {
        &self.time
    }

    /// Deliver one frame to every live subscriber and return how many fired.
    ///
    /// Subscribers released during the tick are skipped once released.
    /// Subscribers added during the tick first fire on the next one.
    pub fn tick(&self) -> usize {
        self.frames.set(self.frames.get() + 1);
        let snapshot = self.registry.borrow().snapshot();

        let mut fired = 0;
        for (id, callback) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            (callback.borrow_mut())();
            fired += 1;
        }

        log::trace!("frame {} delivered to {} subscribers", self.frames.get(), fired);
        fired
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().callbacks.len()
    }

    pub fn has_subscribers(&self) -> bool {
        self.subscriber_count() > 0
    }

    /// Number of ticks delivered so far
    pub fn frame_count(&self) -> u64 {
        self.frames.get()
    }
}

impl<T: TimeSource> FrameClock for DisplayLink<T> {
    fn now(&self) -> f64 {
        self.time.now()
    }

    fn subscribe(&self, callback: Box<dyn FnMut()>) -> Subscription {
        let id = self.registry.borrow_mut().insert(callback);
        log::debug!("frame subscription {} registered", id);
        Subscription::new(id, &self.registry)
    }
}
