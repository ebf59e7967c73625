//! # Navigation Container
//!
//! Wraps one screen of content, collects the navigation preferences the
//! content declares and decides how the bar and content share the area.
//!
//! ```text
//!  render(area)
//!    │
//!    ├─ content.preferences(&mut prefs)     one pass, depth-first
//!    ├─ channel.commit(&prefs, &mut bar)    update local BarPreferences
//!    │
//!    ├─ bar_hidden? ── yes ──▶ content.render(area)
//!    │
//!    └─ no ──▶ container_style.make_body({ bar, content })
//! ```
//!
//! The container is a preference boundary: whatever its content publishes
//! stops here.

use std::rc::Rc;

use log::debug;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::navigation::bar::{BackAction, NavigationBar, NavigationBarConfiguration};
use crate::tui::navigation::container_style::{ContainerConfiguration, ContainerLayout};
use crate::tui::navigation::preference::{
    NavigationBackButtonHidden, NavigationBackgroundColor, NavigationBarHidden,
    NavigationSubtitle, NavigationTintColor, NavigationTitle, PreferenceChannel, PreferenceKey,
    Preferences,
};
use crate::tui::navigation::NavigationStyles;

/// The container's local view of the six navigation preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPreferences {
    pub title: String,
    pub subtitle: Option<String>,
    pub back_button_hidden: bool,
    pub bar_hidden: bool,
    pub background_color: Color,
    pub tint_color: Option<Color>,
}

impl Default for BarPreferences {
    fn default() -> Self {
        Self {
            title: NavigationTitle::default_value(),
            subtitle: NavigationSubtitle::default_value(),
            back_button_hidden: NavigationBackButtonHidden::default_value(),
            bar_hidden: NavigationBarHidden::default_value(),
            background_color: NavigationBackgroundColor::default_value(),
            tint_color: NavigationTintColor::default_value(),
        }
    }
}

fn bar_channel() -> PreferenceChannel<BarPreferences> {
    let mut channel: PreferenceChannel<BarPreferences> = PreferenceChannel::new();
    channel.observe::<NavigationTitle>(|bar, title| bar.title = title);
    channel.observe::<NavigationSubtitle>(|bar, subtitle| bar.subtitle = subtitle);
    channel.observe::<NavigationBackButtonHidden>(|bar, hidden| bar.back_button_hidden = hidden);
    channel.observe::<NavigationBarHidden>(|bar, hidden| bar.bar_hidden = hidden);
    channel.observe::<NavigationBackgroundColor>(|bar, color| bar.background_color = color);
    channel.observe::<NavigationTintColor>(|bar, tint| bar.tint_color = tint);
    channel
}

pub struct NavigationContainer<C> {
    content: C,
    channel: PreferenceChannel<BarPreferences>,
    preferences: BarPreferences,
    styles: NavigationStyles,
    back_action: BackAction,
    bar: Option<NavigationBar>,
    layout: Option<ContainerLayout>,
}

impl<C: Component> NavigationContainer<C> {
    pub fn new(content: C, styles: NavigationStyles) -> Self {
        Self {
            content,
            channel: bar_channel(),
            preferences: BarPreferences::default(),
            styles,
            back_action: Rc::new(|| {}),
            bar: None,
            layout: None,
        }
    }

    /// What the back item does. Defaults to nothing.
    pub fn with_back_action(mut self, back_action: BackAction) -> Self {
        self.back_action = back_action;
        self
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Preferences resolved during the last render.
    pub fn bar_preferences(&self) -> &BarPreferences {
        &self.preferences
    }

    /// Layout chosen by the container style during the last render.
    pub fn layout(&self) -> Option<ContainerLayout> {
        self.layout
    }

    fn configuration(&self) -> NavigationBarConfiguration {
        NavigationBarConfiguration {
            is_back_visible: !self.preferences.back_button_hidden,
            title: self.preferences.title.clone(),
            subtitle: self.preferences.subtitle.clone(),
            tint_color: self.preferences.tint_color,
            back_action: Rc::clone(&self.back_action),
        }
    }

    fn collect_preferences(&mut self) {
        let mut preferences = Preferences::new();
        self.content.preferences(&mut preferences);
        if self.channel.commit(&preferences, &mut self.preferences) {
            debug!("Navigation bar preferences now {:?}", self.preferences);
        }
    }
}

impl<C: Component> Component for NavigationContainer<C> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.collect_preferences();

        if self.preferences.bar_hidden {
            self.bar = None;
            self.content.render(frame, area);
            self.layout = Some(ContainerLayout { bar: None, content: area });
            return;
        }

        let mut bar = NavigationBar::new(
            self.configuration(),
            self.preferences.background_color,
            Rc::clone(&self.styles.bar),
        );
        let configuration = ContainerConfiguration {
            bar: Some(&mut bar as &mut dyn Component),
            content: &mut self.content,
        };
        self.layout = Some(self.styles.container.make_body(configuration, frame, area));
        self.bar = Some(bar);
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        if let Some(bar) = &mut self.bar {
            if bar.handle_input(event) {
                return true;
            }
        }
        self.content.handle_input(event)
    }
}
