use ratatui::style::{Color, Style};

use crate::tui::component::Component;
use crate::tui::components::{Text, VStack};
use crate::tui::navigation::NavigationModifiers;

/// Destination of the home screen's link. Declares a full set of bar
/// preferences so every key is visible in a pushed container.
pub fn details_view() -> impl Component {
    VStack::new()
        .padding(1)
        .child(Text::new("Pushed onto the navigation stack."))
        .child(Text::new("Press ← or click ‹ to go back.").style(Style::new().fg(Color::DarkGray)))
        .navigation_title("Details")
        .navigation_subtitle(Some("Navigation link".to_string()))
        .navigation_bar_tint_color(Some(Color::Cyan))
}
