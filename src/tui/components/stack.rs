use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::navigation::Preferences;

/// Children laid out top to bottom.
///
/// A child with a desired height gets exactly that; the rest share what is
/// left. Preferences and input visit children in order, so a later child's
/// navigation preference wins over an earlier one.
#[derive(Default)]
pub struct VStack {
    children: Vec<Box<dyn Component>>,
    background: Option<Color>,
    padding: u16,
}

impl VStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Horizontal padding on both sides.
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    fn natural_height(&self) -> Option<u16> {
        self.children
            .iter()
            .map(|child| child.desired_height())
            .sum::<Option<u16>>()
    }
}

impl Component for VStack {
    fn preferences(&self, preferences: &mut Preferences) {
        for child in &self.children {
            child.preferences(preferences);
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(color) = self.background {
            frame.render_widget(Block::new().style(Style::new().bg(color)), area);
        }

        let inner = Rect {
            x: area.x.saturating_add(self.padding),
            width: area.width.saturating_sub(self.padding * 2),
            ..area
        };
        let mut constraints: Vec<Constraint> = self
            .children
            .iter()
            .map(|child| child.desired_height().map_or(Constraint::Fill(1), Constraint::Length))
            .collect();
        // Leftover space goes to the bottom, keeping children top-aligned.
        constraints.push(Constraint::Fill(1));

        let areas = Layout::vertical(constraints).split(inner);
        for (child, child_area) in self.children.iter_mut().zip(areas.iter()) {
            child.render(frame, *child_area);
        }
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        self.children.iter_mut().any(|child| child.handle_input(event))
    }

    fn desired_height(&self) -> Option<u16> {
        self.natural_height()
    }
}
