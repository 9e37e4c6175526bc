use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::clock::display_link::Registry;

/// Exclusively owned registration of a tick callback.
///
/// The callback keeps firing until the subscription is released, either
/// explicitly or by dropping it.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub(crate) fn new(id: u64, registry: &Rc<RefCell<Registry>>) -> Self {
        Self {
            id,
            registry: Rc::downgrade(registry),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the callback is still registered with a live clock
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.borrow().contains(self.id))
            .unwrap_or(false)
    }

    /// Unregister the callback. Calling this more than once is a no-op.
    pub fn release(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let removed = registry.borrow_mut().remove(self.id);
            if removed.is_some() {
                log::debug!("released frame subscription {}", self.id);
            }
        }
        self.registry = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Holder for at most one subscription.
///
/// Storing a new subscription always releases the previous one first, so two
/// registrations never overlap.
#[derive(Debug, Default)]
pub struct SubscriptionSlot {
    current: Option<Subscription>,
}

impl SubscriptionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, subscription: Option<Subscription>) {
        if let Some(mut old) = self.current.take() {
            old.release();
        }
        self.current = subscription;
    }

    pub fn clear(&mut self) {
        self.replace(None);
    }

    pub fn is_active(&self) -> bool {
        self.current.as_ref().is_some_and(Subscription::is_active)
    }
}
