use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ScrollPosition {
    pub y: f64,
}

type Listener = Rc<dyn Fn(ScrollPosition)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Fan-out point for the page scroll position. Readers subscribe and get
/// a guard back; dropping the guard removes the listener.
#[derive(Default)]
pub struct ScrollSignal {
    registry: Rc<RefCell<Registry>>,
    latest: Cell<Option<ScrollPosition>>,
}

#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ScrollSubscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> ScrollSubscription
    where
        F: Fn(ScrollPosition) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));

        ScrollSubscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Delivers a position to every current listener. Listeners may
    /// subscribe or unsubscribe while being called.
    pub fn publish(&self, position: ScrollPosition) {
        self.latest.set(Some(position));

        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(position);
        }
    }

    pub fn latest(&self) -> Option<ScrollPosition> {
        self.latest.get()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_receive_published_positions() {
        let signal = ScrollSignal::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = Rc::clone(&seen);
            signal.subscribe(move |position| seen.borrow_mut().push(position.y))
        };

        signal.publish(ScrollPosition { y: 120.0 });
        signal.publish(ScrollPosition { y: 480.0 });

        assert_eq!(*seen.borrow(), vec![120.0, 480.0]);
        assert_eq!(signal.latest(), Some(ScrollPosition { y: 480.0 }));
    }

    #[test]
    fn dropping_the_guard_unsubscribes() {
        let signal = ScrollSignal::new();
        let hits = Rc::new(Cell::new(0));
        let subscription = {
            let hits = Rc::clone(&hits);
            signal.subscribe(move |_| hits.set(hits.get() + 1))
        };

        signal.publish(ScrollPosition { y: 1.0 });
        drop(subscription);
        signal.publish(ScrollPosition { y: 2.0 });

        assert_eq!(hits.get(), 1);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn repeated_mounts_do_not_accumulate_listeners() {
        let signal = ScrollSignal::new();

        for _ in 0..10 {
            let _subscription = signal.subscribe(|_| {});
            assert_eq!(signal.listener_count(), 1);
        }

        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn guard_outliving_the_signal_is_harmless() {
        let subscription = {
            let signal = ScrollSignal::new();
            signal.subscribe(|_| {})
        };

        drop(subscription);
    }

    #[test]
    fn listener_may_subscribe_during_publish() {
        let signal = Rc::new(ScrollSignal::new());
        let late = Rc::new(RefCell::new(Vec::new()));
        let _first = {
            let signal_handle = Rc::clone(&signal);
            let late = Rc::clone(&late);
            signal.subscribe(move |_| {
                late.borrow_mut().push(signal_handle.subscribe(|_| {}));
            })
        };

        signal.publish(ScrollPosition { y: 10.0 });

        assert_eq!(signal.listener_count(), 2);
    }
}
