//! Stale-response protection for view state
//!
//! Backend calls are dispatched on user actions and may resolve in any
//! order, so "last response wins" would let a superseded request overwrite
//! newer data. A [`ViewSlot`] hands out a [`Ticket`] per fetch and applies
//! a response only while its ticket is still the latest; anything older is
//! discarded. Resetting the slot on navigation away gives best-effort
//! abort semantics: in-flight responses can no longer touch the state.

use parking_lot::Mutex;

/// Lifecycle of one async-loaded piece of view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState<T> {
    /// Nothing requested yet, or reset after navigation away.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Ready(T),
    /// The latest fetch failed, with a user-facing message.
    Failed(String),
}

/// Proof of which fetch a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
struct SlotInner<T> {
    seq: u64,
    state: SlotState<T>,
}

/// One async state field of a view, guarded against stale responses.
#[derive(Debug)]
pub struct ViewSlot<T> {
    inner: Mutex<SlotInner<T>>,
}

impl<T: Clone> ViewSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SlotInner {
                seq: 0,
                state: SlotState::Idle,
            }),
        }
    }

    /// Start a fetch: the slot switches to [`SlotState::Loading`] and any
    /// earlier ticket becomes stale.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.inner.lock();
        inner.seq += 1;
        inner.state = SlotState::Loading;
        Ticket(inner.seq)
    }

    /// Apply a successful response.
    ///
    /// Returns `false` when the ticket is stale; the value is dropped and
    /// the slot is left untouched.
    pub fn complete(&self, ticket: Ticket, value: T) -> bool {
        let mut inner = self.inner.lock();
        if ticket.0 != inner.seq {
            return false;
        }
        inner.state = SlotState::Ready(value);
        true
    }

    /// Apply a failed response.
    ///
    /// Returns `false` when the ticket is stale; the slot keeps whatever a
    /// newer fetch put there.
    pub fn fail(&self, ticket: Ticket, message: impl Into<String>) -> bool {
        let mut inner = self.inner.lock();
        if ticket.0 != inner.seq {
            return false;
        }
        inner.state = SlotState::Failed(message.into());
        true
    }

    /// Current state of the slot.
    pub fn snapshot(&self) -> SlotState<T> {
        self.inner.lock().state.clone()
    }

    /// Return to [`SlotState::Idle`] and invalidate every outstanding ticket.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.seq += 1;
        inner.state = SlotState::Idle;
    }
}

impl<T: Clone> Default for ViewSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
