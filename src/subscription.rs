//! Component-scoped event listeners.
//!
//! A [`ListenerSet`] stands in for a host-wide event source (such as a page
//! level click listener). Subscribing returns a [`Subscription`] guard, and the
//! handler stays registered only as long as the guard lives.

use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::rc::{Rc, Weak};

/// Callback type for listener notifications.
pub type Handler<E> = Rc<dyn Fn(&E)>;

struct Listeners<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
}

/// An event source that delivers `E` to its current subscribers.
///
/// # Example
///
/// ```rust
/// use phone_pattern::ListenerSet;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let clicks = ListenerSet::<u32>::new();
/// let seen = Rc::new(Cell::new(0));
///
/// let counter = seen.clone();
/// let subscription = clicks.subscribe(move |n| counter.set(counter.get() + n));
/// clicks.emit(&2);
/// drop(subscription);
/// clicks.emit(&5);
///
/// assert_eq!(seen.get(), 2);
/// ```
pub struct ListenerSet<E> {
    inner: Rc<RefCell<Listeners<E>>>,
}

impl<E: 'static> ListenerSet<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Register `handler` until the returned guard is dropped.
    #[must_use = "dropping the subscription unregisters the handler immediately"]
    pub fn subscribe(&self, handler: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut listeners = self.inner.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.handlers.push((id, Rc::new(handler)));
            id
        };

        let weak: Weak<RefCell<Listeners<E>>> = Rc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().handlers.retain(|(hid, _)| *hid != id);
                }
            })),
        }
    }

    /// Deliver `event` to every subscriber registered at the time of the call.
    ///
    /// Handlers may subscribe or unsubscribe while being notified.
    pub fn emit(&self, event: &E) {
        let handlers: Vec<Handler<E>> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.inner.borrow().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for ListenerSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Debug for ListenerSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("handlers", &self.inner.borrow().handlers.len())
            .finish()
    }
}

/// Guard for a registered handler. Dropping it unregisters the handler.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unregister now. Equivalent to dropping the guard.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
