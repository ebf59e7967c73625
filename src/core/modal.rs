//! # Modal Slots
//!
//! A modal screen is shown exactly when its sub-state exists. There is no
//! separate `is_showing` flag to drift out of sync with the data.
//!
//! ```text
//!            show()                    hide()
//!   Absent ──────────▶ Present(S) ──────────▶ Absent
//!     ▲  │                 │  ▲
//!     │  └── hide() ───────┘  └── show() is a no-op
//!     └── (idempotent)
//! ```
//!
//! `show()` always builds `S::default()`: nothing survives a dismiss/re-show
//! cycle. Because a nested slot lives *inside* its parent's state, clearing
//! the parent drops the whole subtree in one assignment.

use log::debug;

/// Presence of a modal's state. `Present` means the modal is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalSlot<S> {
    Absent,
    Present(S),
}

impl<S> Default for ModalSlot<S> {
    fn default() -> Self {
        ModalSlot::Absent
    }
}

impl<S: Default> ModalSlot<S> {
    /// Transition `Absent → Present` with a fresh default state.
    ///
    /// Already present: no-op, so in-progress input is kept.
    /// Returns `true` if the slot transitioned.
    pub fn show(&mut self) -> bool {
        if self.is_present() {
            debug!("show ignored: modal already present");
            return false;
        }
        *self = ModalSlot::Present(S::default());
        true
    }
}

impl<S> ModalSlot<S> {
    /// Transition to `Absent`, dropping the sub-state. Idempotent.
    /// Returns `true` if something was dismissed.
    pub fn hide(&mut self) -> bool {
        let was_present = self.is_present();
        *self = ModalSlot::Absent;
        was_present
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ModalSlot::Present(_))
    }

    pub fn as_ref(&self) -> Option<&S> {
        match self {
            ModalSlot::Present(state) => Some(state),
            ModalSlot::Absent => None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut S> {
        match self {
            ModalSlot::Present(state) => Some(state),
            ModalSlot::Absent => None,
        }
    }

    /// Run a child reducer against the sub-state if it is present.
    ///
    /// An action addressed to an absent modal is dropped, not an error.
    /// Returns `true` if the reducer ran.
    pub fn forward<A: std::fmt::Debug>(&mut self, action: A, reducer: impl FnOnce(&mut S, A)) -> bool {
        match self.as_mut() {
            Some(state) => {
                reducer(state, action);
                true
            }
            None => {
                debug!("dropping {:?}: modal not present", action);
                false
            }
        }
    }
}
