//! Small client-side state stores.
//!
//! Each store is an independent [`Store`] cell: a value, a getter, a setter
//! and explicit subscriptions. Stores are created once by the app root and
//! handed out through Dioxus context; `use_store` turns one into a signal.

pub mod loading;
pub mod session;
pub mod user;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

pub use loading::{LoadingState, LoadingStore};
pub use session::SessionStore;
pub use user::{UserProfile, UserStore};

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct StoreInner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
}

/// Named observable cell. Clones share the same value.
pub struct Store<T> {
    name: &'static str,
    inner: Rc<RefCell<StoreInner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(name: &'static str, value: T) -> Self {
        Self {
            name,
            inner: Rc::new(RefCell::new(StoreInner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    pub fn subscribe(&self, subscriber: impl Fn(&T) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(sub_id, _)| *sub_id != id);
    }

    // Subscribers run without the borrow held so they may read or write the store.
    fn notify(&self) {
        let (value, subscribers) = {
            let inner = self.inner.borrow();
            let subscribers: Vec<Subscriber<T>> =
                inner.subscribers.iter().map(|(_, s)| s.clone()).collect();
            (inner.value.clone(), subscribers)
        };
        trace!("Store {} changed, notifying {}", self.name, subscribers.len());
        for subscriber in subscribers {
            subscriber(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_get_set() {
        let store = Store::new("counter", 1);
        assert_eq!(store.get(), 1);
        store.set(2);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn test_clones_share_value() {
        let store = Store::new("shared", String::from("a"));
        let other = store.clone();
        other.set("b".to_string());
        assert_eq!(store.get(), "b");
    }

    #[test]
    fn test_subscribers_see_new_value() {
        let store = Store::new("counter", 0);
        let seen = Rc::new(Cell::new(0));
        let sink = seen.clone();
        store.subscribe(move |v: &i32| sink.set(*v));

        store.set(5);
        assert_eq!(seen.get(), 5);

        store.set(6);
        assert_eq!(seen.get(), 6);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = Store::new("counter", 0);
        let calls = Rc::new(Cell::new(0));
        let sink = calls.clone();
        let id = store.subscribe(move |_: &i32| sink.set(sink.get() + 1));

        store.set(1);
        store.unsubscribe(id);
        store.set(2);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscriber_can_read_store() {
        let store = Store::new("counter", 0);
        let reader = store.clone();
        let seen = Rc::new(Cell::new(0));
        let sink = seen.clone();
        store.subscribe(move |_: &i32| sink.set(reader.get()));

        store.set(9);
        assert_eq!(seen.get(), 9);
    }
}
