//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::rc::Rc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::navigation::NavigationBarConfiguration;

/// A leaf component that prints its text and does little else.
pub struct Label {
    text: String,
    height: Option<u16>,
    consume_input: bool,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            height: None,
            consume_input: false,
        }
    }

    pub fn with_height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    /// Make `handle_input` report every event as consumed.
    pub fn consuming(mut self) -> Self {
        self.consume_input = true;
        self
    }
}

impl Component for Label {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.text.as_str()), area);
    }

    fn handle_input(&mut self, _event: &TuiEvent) -> bool {
        self.consume_input
    }

    fn desired_height(&self) -> Option<u16> {
        self.height
    }
}

/// Bar configuration with a no-op back action.
pub fn configuration(title: &str, is_back_visible: bool) -> NavigationBarConfiguration {
    NavigationBarConfiguration {
        is_back_visible,
        title: title.to_string(),
        subtitle: None,
        tint_color: None,
        back_action: Rc::new(|| {}),
    }
}

/// The symbols of one buffer row as a string.
pub fn buffer_line(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area;
    (area.x..area.x + area.width)
        .map(|x| buffer[(x, row)].symbol())
        .collect()
}

/// Every symbol in the buffer, row by row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
