use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Emitted when the button fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pressed;

/// A one-line button, pressed by Enter or a click on its label.
pub struct Button {
    label: String,
    hint: Option<String>,
    on_press: Box<dyn Fn()>,
    area: Option<Rect>,
}

impl Button {
    pub fn new(label: impl Into<String>, on_press: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            hint: Some("Enter".to_string()),
            on_press: Box::new(on_press),
            area: None,
        }
    }

    pub fn without_hint(mut self) -> Self {
        self.hint = None;
        self
    }

    fn press(&self) -> Option<Pressed> {
        (self.on_press)();
        Some(Pressed)
    }
}

impl Component for Button {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label = format!("[ {} ]", self.label);
        let mut spans = vec![Span::styled(
            label.clone(),
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if let Some(hint) = &self.hint {
            spans.push(Span::styled(format!(" {hint}"), Style::new().fg(Color::DarkGray)));
        }
        frame.render_widget(Line::from(spans), area);

        self.area = Some(Rect {
            width: (label.width() as u16).min(area.width),
            height: area.height.min(1),
            ..area
        });
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        self.handle_event(event).is_some()
    }

    fn desired_height(&self) -> Option<u16> {
        Some(1)
    }
}

impl EventHandler for Button {
    type Event = Pressed;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Pressed> {
        match event {
            TuiEvent::Submit => self.press(),
            TuiEvent::MouseClick(col, row) => self
                .area
                .filter(|area| area.contains(Position::new(*col, *row)))
                .and_then(|_| self.press()),
            _ => None,
        }
    }
}
