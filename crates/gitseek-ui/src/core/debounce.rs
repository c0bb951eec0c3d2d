//! Generation-tagged debounce primitive.
//!
//! # Design
//! - Keep the timer outside: the host arms one timeout per generation and
//!   drops the previous one, this type only decides what gets committed.
//! - A stale generation never commits, so a timer that fires late after a
//!   newer keystroke is harmless.
//! - Timer callbacks hold a [`TimerHandle`], never the slot itself, so a
//!   pending timer cannot keep its own slot alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Debounced mirror of a frequently changing value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Debounced<T> {
    committed: T,
    pending: Option<T>,
    generation: u64,
}

impl<T: PartialEq> Debounced<T> {
    /// Start with an already committed value.
    #[must_use]
    pub const fn new(initial: T) -> Self {
        Self {
            committed: initial,
            pending: None,
            generation: 0,
        }
    }

    /// Record a new source value and return the generation the host must
    /// report back once the quiescence window elapses.
    pub fn set(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    /// Commit the pending value if `generation` is still the latest one.
    ///
    /// Returns `true` only when the committed value changed.
    pub fn fire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(next) = self.pending.take() else {
            return false;
        };
        if next == self.committed {
            return false;
        }
        self.committed = next;
        true
    }

    /// Last committed value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.committed
    }
}

/// Weak handle to the host's single timer slot.
pub struct TimerHandle<H> {
    slot: Weak<RefCell<Option<H>>>,
}

impl<H> Clone for TimerHandle<H> {
    fn clone(&self) -> Self {
        Self {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<H> TimerHandle<H> {
    /// Handle onto `slot`; the caller keeps the only strong reference.
    #[must_use]
    pub fn new(slot: &Rc<RefCell<Option<H>>>) -> Self {
        Self {
            slot: Rc::downgrade(slot),
        }
    }

    /// Store `handle`, dropping the previous one.
    ///
    /// Returns `false` when the slot owner is gone; `handle` is dropped then.
    pub fn replace(&self, handle: H) -> bool {
        let Some(slot) = self.slot.upgrade() else {
            return false;
        };
        let previous = slot.borrow_mut().replace(handle);
        drop(previous);
        true
    }
}
