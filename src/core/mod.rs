//! # Core Application Logic
//!
//! Screen state, actions, and reducers. Knows nothing about ratatui.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (per screen)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Store / Binding      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ snapshots, bindings
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: one state struct per screen
//! - [`action`]: one action enum per screen
//! - [`reducer`]: the `update` functions
//! - [`modal`]: `ModalSlot`, presence-as-visibility
//! - [`store`]: state container with scoping
//! - [`binding`]: two-way value views
//! - [`config`]: settings resolution

pub mod action;
pub mod binding;
pub mod config;
pub mod modal;
pub mod reducer;
pub mod state;
pub mod store;
