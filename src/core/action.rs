//! # Actions
//!
//! Everything that can happen to a screen becomes an action.
//! User taps "Show FirstModalSearch"? That's `ContentAction::ShowFirstModal`.
//! User types into the nested search bar? That's
//! `ContentAction::FirstModal(FirstModalAction::SecondModal(SecondModalAction::TextChanged(..)))`.
//!
//! Child actions are wrapped by their parent, so a single `send` on the root
//! store can address any level:
//!
//! ```text
//! ContentAction
//! ├── ShowFirstModal / HideFirstModal
//! └── FirstModal(FirstModalAction)
//!     ├── ShowSecondModal / HideSecondModal / TextChanged
//!     └── SecondModal(SecondModalAction)
//!         └── TextChanged
//! ```

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentAction {
    FirstModal(FirstModalAction),
    ShowFirstModal,
    HideFirstModal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstModalAction {
    SecondModal(SecondModalAction),
    ShowSecondModal,
    HideSecondModal,
    TextChanged(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondModalAction {
    TextChanged(String),
}
