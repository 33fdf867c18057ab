//! Typed publish/subscribe hub.
//!
//! Components that raise notifications (survival thresholds, perk level-ups,
//! actor movement, combat interactions) own an [`EventHub`]. Subscribers
//! register a handler and get back a [`SubscriptionId`] that is the only
//! thing needed to unregister later; the hub never keeps any other reference
//! to the subscriber.

use core::fmt;

/// Handle returned by [`EventHub::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Handler<E> = Box<dyn FnMut(&E)>;

/// Registration list of handlers for events of type `E`.
///
/// Handlers run synchronously, in registration order, inside `publish`.
pub struct EventHub<E> {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler<E>)>,
}

impl<E> EventHub<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }

    /// Registers a handler and returns its subscription handle.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Unregisters a handler. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Delivers the event to every registered handler.
    pub fn publish(&mut self, event: &E) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E> Default for EventHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventHub<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn delivers_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut hub = EventHub::<u32>::new();

        let first = Rc::clone(&seen);
        hub.subscribe(move |value| first.borrow_mut().push(("first", *value)));
        let second = Rc::clone(&seen);
        hub.subscribe(move |value| second.borrow_mut().push(("second", *value)));

        hub.publish(&7);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribed_handler_stops_receiving() {
        let count = Rc::new(RefCell::new(0));
        let mut hub = EventHub::<()>::new();

        let counter = Rc::clone(&count);
        let id = hub.subscribe(move |_| *counter.borrow_mut() += 1);
        hub.publish(&());

        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
        hub.publish(&());

        assert_eq!(*count.borrow(), 1);
        assert!(hub.is_empty());
    }
}
