//! Bar styles: how a [`NavigationBarConfiguration`] is laid out and colored.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::tui::navigation::bar::{NavigationBarConfiguration, RenderedBar};

/// Converts a bar configuration into a renderable body.
///
/// Styles are shared as `Rc<dyn NavigationBarStyle>` and invoked on every
/// render, so `make_body` must be cheap and must not keep state.
pub trait NavigationBarStyle {
    fn make_body(&self, configuration: &NavigationBarConfiguration) -> RenderedBar;
}

fn tinted(tint: Option<Color>) -> Style {
    tint.map(|color| Style::new().fg(color)).unwrap_or_default()
}

/// Plain bar: `<` back item, bold title, dimmed subtitle underneath.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBarStyle;

impl DefaultBarStyle {
    const BACK_GLYPH: &'static str = " < ";
    const BACK_ITEM_WIDTH: u16 = 4;
}

impl NavigationBarStyle for DefaultBarStyle {
    fn make_body(&self, configuration: &NavigationBarConfiguration) -> RenderedBar {
        let base = tinted(configuration.tint_color);
        let back = configuration.is_back_visible;

        RenderedBar {
            leading: back.then(|| Span::styled(Self::BACK_GLYPH, base)),
            leading_is_back: back,
            title: configuration.title.clone(),
            title_style: base.add_modifier(Modifier::BOLD),
            subtitle: configuration.subtitle.clone(),
            subtitle_style: base.add_modifier(Modifier::DIM),
            trailing: None,
            // Mirror the back item on the right so the title stays centered.
            group_width: if back { Self::BACK_ITEM_WIDTH } else { 0 },
            padding: 0,
        }
    }
}

/// Branded bar with fixed-width side groups.
///
/// The leading group shows the back item, or the menu item when there is
/// nothing to go back to. The trailing item never changes.
#[derive(Debug, Clone, Default)]
pub struct AccentBarStyle {
    pub menu_item: Option<String>,
    pub trailing_item: Option<String>,
    /// Tint used when the content did not declare one.
    pub default_accent: Option<Color>,
}

impl AccentBarStyle {
    pub const GROUP_WIDTH: u16 = 10;
    pub const PADDING: u16 = 2;
    const BACK_GLYPH: &'static str = "‹ Back";

    pub fn new(default_accent: Option<Color>) -> Self {
        Self {
            default_accent,
            ..Self::default()
        }
    }

    pub fn with_menu_item(mut self, item: Option<String>) -> Self {
        self.menu_item = item;
        self
    }

    pub fn with_trailing_item(mut self, item: Option<String>) -> Self {
        self.trailing_item = item;
        self
    }
}

impl NavigationBarStyle for AccentBarStyle {
    fn make_body(&self, configuration: &NavigationBarConfiguration) -> RenderedBar {
        let base = tinted(configuration.tint_color.or(self.default_accent));

        let leading = if configuration.is_back_visible {
            Some(Span::styled(Self::BACK_GLYPH, base))
        } else {
            self.menu_item.clone().map(|item| Span::styled(item, base))
        };

        RenderedBar {
            leading,
            leading_is_back: configuration.is_back_visible,
            title: configuration.title.clone(),
            title_style: base.add_modifier(Modifier::BOLD),
            subtitle: configuration.subtitle.clone(),
            subtitle_style: Style::new().fg(Color::DarkGray),
            trailing: self.trailing_item.clone().map(|item| Span::styled(item, base)),
            group_width: Self::GROUP_WIDTH,
            padding: Self::PADDING,
        }
    }
}
