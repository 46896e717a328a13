//! Synchronous fan-out to subscribers.
//!
//! A [`Broadcast`] holds an ordered list of listeners.  [`Broadcast::publish`]
//! calls each of them in subscription order with the same reference before
//! returning.  There is no buffering and nothing is dropped: a slow listener
//! slows the tick loop down.

use std::fmt;

/// Receives every value published on one stream.
///
/// Implemented for any `FnMut(&T) + Send` closure, so most callers never
/// name this trait.
///
/// # Example — keep the last five summaries
///
/// ```rust,ignore
/// struct Tail(VecDeque<EpochSummary>);
///
/// impl Listener<EpochSummary> for Tail {
///     fn on_event(&mut self, summary: &EpochSummary) {
///         if self.0.len() == 5 {
///             self.0.pop_front();
///         }
///         self.0.push_back(*summary);
///     }
/// }
/// ```
pub trait Listener<T>: Send {
    fn on_event(&mut self, event: &T);
}

impl<T, F> Listener<T> for F
where
    F: FnMut(&T) + Send,
{
    #[inline]
    fn on_event(&mut self, event: &T) {
        self(event)
    }
}

/// Handle returned by a subscription; pass it back to unsubscribe.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Ordered listener list for values of type `T`.
pub struct Broadcast<T> {
    listeners: Vec<(SubscriptionId, Box<dyn Listener<T>>)>,
}

impl<T> Broadcast<T> {
    pub fn new() -> Self {
        Self { listeners: Vec::new() }
    }

    /// Append `listener` under `id`.  The caller keeps ids unique.
    pub fn insert(&mut self, id: SubscriptionId, listener: impl Listener<T> + 'static) {
        self.listeners.push((id, Box::new(listener)));
    }

    /// Remove the listener registered under `id`.  Returns `false` if there
    /// was none.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        match self.listeners.iter().position(|(sub, _)| *sub == id) {
            Some(idx) => {
                self.listeners.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Deliver `event` to every listener, in subscription order.
    ///
    /// Returns the number of listeners called.
    pub fn publish(&mut self, event: &T) -> usize {
        for (_, listener) in &mut self.listeners {
            listener.on_event(event);
        }
        self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<SubscriptionId> = self.listeners.iter().map(|(id, _)| *id).collect();
        f.debug_struct("Broadcast").field("listeners", &ids).finish()
    }
}
