//! Change notification for observable entities.
//!
//! An entity owns a [`ChangeNotifier`] and routes every attribute write
//! through [`ChangeNotifier::set`], which stores the value and notifies
//! subscribers only when the value actually changed.

use std::fmt;

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A boxed change listener.
pub type Listener<E> = Box<dyn FnMut(&E)>;

/// Store `value` into `field` unless `same` reports it equal to the current value.
///
/// Calls `on_changed` after the store and returns `true` when a change
/// happened. Equal values leave the field untouched and return `false`.
pub fn set_if_changed_by<T>(
    field: &mut T,
    value: T,
    same: impl FnOnce(&T, &T) -> bool,
    on_changed: impl FnOnce(),
) -> bool {
    if same(field, &value) {
        return false;
    }
    *field = value;
    on_changed();
    true
}

/// [`set_if_changed_by`] using `PartialEq`.
pub fn set_if_changed<T: PartialEq>(field: &mut T, value: T, on_changed: impl FnOnce()) -> bool {
    set_if_changed_by(field, value, T::eq, on_changed)
}

/// Value equality for `f64` attributes: NaN equals NaN and `0.0` equals `-0.0`.
pub fn same_f64(a: &f64, b: &f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Subscription registry for a single "attribute changed" event type.
///
/// Delivery is synchronous: listeners run in subscription order on the
/// caller's thread before `notify` returns.
pub struct ChangeNotifier<E> {
    listeners: Vec<(SubscriptionId, Listener<E>)>,
    next_id: u64,
}

impl<E> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E> ChangeNotifier<E> {
    /// Create a notifier with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a listener. It receives every event notified from now on.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to every listener.
    pub fn notify(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// Guarded set: store `value` and notify `event` only if it changed.
    pub fn set<T: PartialEq>(&mut self, field: &mut T, value: T, event: E) -> bool {
        set_if_changed(field, value, || self.notify(&event))
    }

    /// Guarded set for `f64` attributes, compared with [`same_f64`].
    pub fn set_f64(&mut self, field: &mut f64, value: f64, event: E) -> bool {
        set_if_changed_by(field, value, same_f64, || self.notify(&event))
    }
}
