//! # Screens
//!
//! The demo's three screens plus a pushed detail page. Each screen is a
//! function from a (scoped) store to a component tree.
//!
//! ```text
//!  content_view                        Store<ContentState, ContentAction>
//!   ├─ NavigationDecorator
//!   │    └─ home: "Hello, world!", [Show FirstModalSearch], Details ›
//!   │                                 └─ details_view (pushed)
//!   └─ FullScreenCover ── first_modal_view     scope(first_modal)
//!                          └─ BottomPopover ── second_modal_view   scope(second_modal)
//! ```

mod content;
mod details;
mod first_modal;
mod second_modal;

pub use content::content_view;
pub use details::details_view;
pub use first_modal::first_modal_view;
pub use second_modal::second_modal_view;

use crate::core::config::ResolvedConfig;
use crate::tui::deferred::DeferredQueue;
use crate::tui::navigation::NavigationStyles;

/// Everything a screen needs besides its store.
#[derive(Clone)]
pub struct ScreenContext {
    pub styles: NavigationStyles,
    pub deferred: DeferredQueue,
    pub popover_max_height: u16,
    pub dim_overlay: bool,
}

impl ScreenContext {
    pub fn from_config(config: &ResolvedConfig, deferred: DeferredQueue) -> Self {
        Self {
            styles: NavigationStyles::from_config(config),
            deferred,
            popover_max_height: config.popover_max_height,
            dim_overlay: config.dim_overlay,
        }
    }
}

impl Default for ScreenContext {
    fn default() -> Self {
        Self::from_config(&ResolvedConfig::default(), DeferredQueue::new())
    }
}
