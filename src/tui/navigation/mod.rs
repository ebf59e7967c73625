//! # Navigation Chrome
//!
//! Everything between a screen's content and the title bar above it.
//!
//! ```text
//!  NavigationDecorator          stack of containers, top one drawn
//!   └─ NavigationContainer      collects preferences, picks layout
//!       ├─ NavigationBar        drawn by a NavigationBarStyle
//!       └─ content              publishes preferences via modifiers
//! ```
//!
//! Styles are injected through [`NavigationStyles`] and shared between every
//! container of one decorator.

pub mod bar;
pub mod bar_style;
pub mod container;
pub mod container_style;
pub mod decorator;
pub mod link;
pub mod modifiers;
pub mod preference;

use std::rc::Rc;

use crate::core::config::ResolvedConfig;
use crate::{BarStyleKind, ContainerStyleKind};

pub use bar::{BackAction, NavigationBar, NavigationBarConfiguration, RenderedBar};
pub use bar_style::{AccentBarStyle, DefaultBarStyle, NavigationBarStyle};
pub use container::{BarPreferences, NavigationContainer};
pub use container_style::{
    ContainerConfiguration, ContainerLayout, NavigationContainerStyle, OverlayContainerStyle,
    StackedContainerStyle,
};
pub use decorator::{NavigationDecorator, Navigator};
pub use link::{LinkId, NavigationLink};
pub use modifiers::{NavigationModifiers, Preferred};
pub use preference::{PreferenceChannel, PreferenceKey, Preferences};

/// The bar and container styles in effect for a navigation stack.
#[derive(Clone)]
pub struct NavigationStyles {
    pub bar: Rc<dyn NavigationBarStyle>,
    pub container: Rc<dyn NavigationContainerStyle>,
}

impl Default for NavigationStyles {
    fn default() -> Self {
        Self {
            bar: Rc::new(DefaultBarStyle),
            container: Rc::new(StackedContainerStyle),
        }
    }
}

impl NavigationStyles {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let bar: Rc<dyn NavigationBarStyle> = match config.bar_style {
            BarStyleKind::Default => Rc::new(DefaultBarStyle),
            BarStyleKind::Accent => Rc::new(
                AccentBarStyle::new(Some(config.accent_color))
                    .with_menu_item(config.menu_item.clone())
                    .with_trailing_item(config.trailing_item.clone()),
            ),
        };
        let container: Rc<dyn NavigationContainerStyle> = match config.container_style {
            ContainerStyleKind::Stacked => Rc::new(StackedContainerStyle),
            ContainerStyleKind::Overlay => Rc::new(OverlayContainerStyle),
        };
        Self { bar, container }
    }

    pub fn with_bar(mut self, bar: Rc<dyn NavigationBarStyle>) -> Self {
        self.bar = bar;
        self
    }

    pub fn with_container(mut self, container: Rc<dyn NavigationContainerStyle>) -> Self {
        self.container = container;
        self
    }
}
