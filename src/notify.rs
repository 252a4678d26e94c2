//! Publish/subscribe channel for model change notifications.
//!
//! Observable entities hold a [`Channel`] instead of inheriting listener
//! bookkeeping. Delivery is synchronous: `notify_all` returns only after every
//! listener has run, in the order the listeners were registered.

use std::fmt;

/// A registered listener callback
pub type Listener<E> = Box<dyn FnMut(&E) + Send>;

/// Ordered set of listeners for events of type `E`
pub struct Channel<E> {
    listeners: Vec<Listener<E>>,
}

impl<E> Channel<E> {
    /// Create a channel with no listeners
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener.
    ///
    /// Registering the same closure twice is allowed and results in the
    /// event being delivered twice.
    pub fn subscribe(&mut self, listener: Listener<E>) {
        self.listeners.push(listener);
    }

    /// Deliver `event` to every listener in registration order.
    ///
    /// A panicking listener is not caught; the panic propagates to the
    /// caller of the mutating operation.
    pub fn notify_all(&mut self, event: &E) {
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for Channel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Channel<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// An entity that owns a notification channel
pub trait Observable {
    /// The event type delivered to listeners
    type Event;

    /// Access to the owned channel
    fn channel_mut(&mut self) -> &mut Channel<Self::Event>;

    /// Register a listener on this entity's channel
    fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Self::Event) + Send + 'static,
    {
        self.channel_mut().subscribe(Box::new(listener));
    }
}
