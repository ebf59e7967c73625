//! # Reducers
//!
//! `update(state, action)` mutates state in place and does nothing else.
//! No I/O, no scheduling. Log lines are the only trace.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! Parents compose children the same way at every level: first hand child
//! actions to the child reducer through [`ModalSlot::forward`] (dropped if
//! the child is not presented), then apply local transitions.
//!
//! [`ModalSlot::forward`]: crate::core::modal::ModalSlot::forward

use log::debug;

use crate::core::action::{ContentAction, FirstModalAction, SecondModalAction};
use crate::core::state::{ContentState, FirstModalState, SecondModalState};

/// Root reducer.
pub fn update(state: &mut ContentState, action: ContentAction) {
    debug!("ContentAction: {:?}", action);
    match action {
        ContentAction::FirstModal(child) => {
            state.first_modal.forward(child, update_first_modal);
        }
        ContentAction::ShowFirstModal => {
            state.first_modal.show();
        }
        ContentAction::HideFirstModal => {
            state.first_modal.hide();
        }
    }
}

pub fn update_first_modal(state: &mut FirstModalState, action: FirstModalAction) {
    match action {
        FirstModalAction::SecondModal(child) => {
            state.second_modal.forward(child, update_second_modal);
        }
        FirstModalAction::ShowSecondModal => {
            state.second_modal.show();
        }
        FirstModalAction::HideSecondModal => {
            state.second_modal.hide();
        }
        FirstModalAction::TextChanged(text) => state.text = text,
    }
}

pub fn update_second_modal(state: &mut SecondModalState, action: SecondModalAction) {
    match action {
        SecondModalAction::TextChanged(text) => state.text = text,
    }
}
