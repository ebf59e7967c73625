//! # Screen State
//!
//! One state struct per screen. Nesting mirrors presentation:
//!
//! ```text
//! ContentState
//! └── first_modal: ModalSlot<FirstModalState>
//!     ├── text: String                       // search bar input
//!     └── second_modal: ModalSlot<SecondModalState>
//!         └── text: String                   // search bar input
//! ```
//!
//! State changes only happen through the reducers in `reducer.rs`.

use crate::core::modal::ModalSlot;

/// Root screen state. `first_modal` being present *is* the cover being shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentState {
    pub first_modal: ModalSlot<FirstModalState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstModalState {
    pub second_modal: ModalSlot<SecondModalState>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondModalState {
    pub text: String,
}
