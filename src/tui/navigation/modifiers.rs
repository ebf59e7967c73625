//! Builder-style modifiers that attach navigation preferences to a component.
//!
//! ```rust,ignore
//! let home = HomeView::new(store)
//!     .navigation_title("Content view")
//!     .navigation_subtitle(Some("Hello".into()))
//!     .navigation_bar_tint_color(Some(Color::Cyan));
//! ```

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::navigation::preference::{
    NavigationBackButtonHidden, NavigationBackgroundColor, NavigationBarHidden,
    NavigationSubtitle, NavigationTintColor, NavigationTitle, PreferenceKey, Preferences,
};

/// `content` plus one published preference value.
///
/// Publishes after its content, so it overrides anything the content
/// declared for the same key.
pub struct Preferred<C, K: PreferenceKey> {
    content: C,
    value: K::Value,
}

impl<C: Component, K: PreferenceKey> Preferred<C, K> {
    pub fn new(content: C, value: K::Value) -> Self {
        Self { content, value }
    }
}

impl<C: Component, K: PreferenceKey> Component for Preferred<C, K> {
    fn preferences(&self, preferences: &mut Preferences) {
        self.content.preferences(preferences);
        preferences.publish::<K>(self.value.clone());
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.content.render(frame, area);
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        self.content.handle_input(event)
    }

    fn desired_height(&self) -> Option<u16> {
        self.content.desired_height()
    }
}

pub trait NavigationModifiers: Component + Sized {
    /// Title shown by the nearest navigation container.
    fn navigation_title(self, title: impl Into<String>) -> Preferred<Self, NavigationTitle> {
        Preferred::new(self, title.into())
    }

    /// Secondary line beneath the title.
    fn navigation_subtitle(self, subtitle: Option<String>) -> Preferred<Self, NavigationSubtitle> {
        Preferred::new(self, subtitle)
    }

    /// Hides the back item of the nearest navigation container.
    fn navigation_back_button_hidden(self, hidden: bool) -> Preferred<Self, NavigationBackButtonHidden> {
        Preferred::new(self, hidden)
    }

    /// Background of the bar.
    fn navigation_background_color(self, color: Color) -> Preferred<Self, NavigationBackgroundColor> {
        Preferred::new(self, color)
    }

    /// Color of bar text and items. `None` lets the bar style decide.
    fn navigation_bar_tint_color(self, color: Option<Color>) -> Preferred<Self, NavigationTintColor> {
        Preferred::new(self, color)
    }

    /// Removes the bar; content gets the whole area.
    fn navigation_bar_hidden(self, hidden: bool) -> Preferred<Self, NavigationBarHidden> {
        Preferred::new(self, hidden)
    }
}

impl<C: Component> NavigationModifiers for C {}
