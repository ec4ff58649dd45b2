//! A minimal observable state container.
//!
//! Consumers `subscribe` to receive every new state synchronously after each
//! mutation, read the current value through `snapshot`, and `unsubscribe`
//! when they unmount.

use std::fmt;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S) + Send>;

pub struct Store<S> {
    state: S,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_id: u64,
}

impl<S: Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S> Store<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn snapshot(&self) -> &S {
        &self.state
    }

    /// Registers a listener. Listeners run in subscription order.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&S) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Mutates the state, then notifies every listener with the result.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut S) -> R) -> R {
        let result = mutate(&mut self.state);
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        result
    }
}
