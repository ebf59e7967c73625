//! # SearchBar Component
//!
//! Labeled single-line search field.
//!
//! ## State Management
//!
//! The text is a prop: a `Binding<String>` owned by whoever created the bar,
//! usually a store binding that sends a `TextChanged` action. Focus is
//! internal state and only affects how the bar looks.
//!
//! ```text
//!  unfocused, empty          focused or non-empty
//!  ╭──────────────────╮      ╭──────────────────╮
//!  │ ⌕ FirstModalSearch│      │ ⌕ hello▏         │ Cancel
//!  ╰──────────────────╯      ╰──────────────────╯
//! ```

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::core::binding::Binding;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows taken by the bordered field.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

const CANCEL_LABEL: &str = " Cancel";

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The text changed; carries the new text.
    Changed(String),
    FocusChanged(bool),
    Cancelled,
}

pub struct SearchBar {
    text: Binding<String>,
    label: String,
    icon: String,
    focused: bool,
    cancel_action: Option<Box<dyn Fn()>>,
    field_area: Option<Rect>,
    cancel_area: Option<Rect>,
}

impl SearchBar {
    pub fn new(text: Binding<String>, label: impl Into<String>) -> Self {
        Self {
            text,
            label: label.into(),
            icon: "⌕".to_string(),
            focused: false,
            cancel_action: None,
            field_area: None,
            cancel_area: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Shows a "Cancel" item while the bar is active.
    pub fn with_cancel_action(mut self, cancel: impl Fn() + 'static) -> Self {
        self.cancel_action = Some(Box::new(cancel));
        self
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn is_active(&self, text: &str) -> bool {
        self.focused || !text.is_empty()
    }

    fn edit(&mut self, edit: impl FnOnce(&mut String) -> bool) -> Option<SearchEvent> {
        let mut text = self.text.get();
        if !edit(&mut text) {
            return None;
        }
        self.focused = true;
        self.text.set(text.clone());
        Some(SearchEvent::Changed(text))
    }

    fn cancel(&mut self) -> Option<SearchEvent> {
        let cancel = self.cancel_action.as_ref()?;
        self.focused = false;
        cancel();
        Some(SearchEvent::Cancelled)
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.text.get();
        let active = self.is_active(&text);
        let show_cancel = active && self.cancel_action.is_some();

        let [field, cancel] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(if show_cancel { CANCEL_LABEL.width() as u16 } else { 0 }),
        ])
        .areas(area);

        let border = if active { Color::Gray } else { Color::DarkGray };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(border));

        let muted = Style::new().fg(Color::DarkGray);
        let line = if active {
            Line::from(vec![Span::styled(format!("{} ", self.icon), muted), Span::raw(text.clone())])
        } else {
            Line::from(vec![
                Span::styled(format!("{} ", self.icon), muted),
                Span::styled(self.label.clone(), muted.add_modifier(Modifier::BOLD)),
            ])
        };
        frame.render_widget(Paragraph::new(line).block(block), field);

        if self.focused && field.width > 2 && field.height > 2 {
            let offset = self.icon.width() + 1 + text.width();
            let last_column = field.right().saturating_sub(2);
            let x = (usize::from(field.x) + 1 + offset).min(usize::from(last_column)) as u16;
            frame.set_cursor_position((x, field.y + 1));
        }

        self.cancel_area = if show_cancel {
            let row = Rect {
                y: cancel.y + cancel.height.min(SEARCH_BAR_HEIGHT) / 2,
                height: 1,
                ..cancel
            };
            frame.render_widget(Line::raw(CANCEL_LABEL), row);
            Some(row)
        } else {
            None
        };
        self.field_area = Some(field);
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        self.handle_event(event).is_some()
    }

    fn desired_height(&self) -> Option<u16> {
        Some(SEARCH_BAR_HEIGHT)
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => self.edit(|text| {
                text.push(*c);
                true
            }),
            TuiEvent::Paste(pasted) => self.edit(|text| {
                text.push_str(pasted);
                !pasted.is_empty()
            }),
            TuiEvent::Backspace => self.edit(|text| text.pop().is_some()),
            TuiEvent::Escape if self.is_active(&self.text.get()) => self.cancel(),
            TuiEvent::MouseClick(col, row) => {
                let position = Position::new(*col, *row);
                if self.cancel_area.is_some_and(|area| area.contains(position)) {
                    return self.cancel();
                }
                if self.field_area.is_some_and(|area| area.contains(position)) {
                    self.focused = !self.focused;
                    return Some(SearchEvent::FocusChanged(self.focused));
                }
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_line;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::cell::Cell;
    use std::rc::Rc;

    fn draw(bar: &mut SearchBar) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(30, SEARCH_BAR_HEIGHT)).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
    }

    #[test]
    fn test_typing_writes_through_binding() {
        let text = Binding::local(String::new());
        let mut bar = SearchBar::new(text.clone(), "Search");

        assert_eq!(bar.handle_event(&TuiEvent::InputChar('h')), Some(SearchEvent::Changed("h".into())));
        bar.handle_event(&TuiEvent::InputChar('i'));
        assert_eq!(text.get(), "hi");
        assert!(bar.is_focused());
    }

    #[test]
    fn test_backspace_and_paste() {
        let text = Binding::local("ab".to_string());
        let mut bar = SearchBar::new(text.clone(), "Search");

        bar.handle_event(&TuiEvent::Backspace);
        assert_eq!(text.get(), "a");
        bar.handle_event(&TuiEvent::Paste("xyz".into()));
        assert_eq!(text.get(), "axyz");
    }

    #[test]
    fn test_cursor_stays_inside_field_after_huge_paste() {
        let text = Binding::local(String::new());
        let mut bar = SearchBar::new(text.clone(), "Search");
        bar.handle_event(&TuiEvent::Paste("a".repeat(70_000)));
        assert!(bar.is_focused());

        let mut terminal = draw(&mut bar);
        assert_eq!(text.get().len(), 70_000);
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(28, 1));
    }

    #[test]
    fn test_backspace_on_empty_is_ignored() {
        let mut bar = SearchBar::new(Binding::local(String::new()), "Search");
        assert_eq!(bar.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_submit_is_not_consumed() {
        let mut bar = SearchBar::new(Binding::local("x".to_string()), "Search");
        assert!(!bar.handle_input(&TuiEvent::Submit));
    }

    #[test]
    fn test_placeholder_shows_label_until_active() {
        let text = Binding::local(String::new());
        let mut bar = SearchBar::new(text.clone(), "FirstModalSearch");
        let terminal = draw(&mut bar);
        assert!(buffer_line(terminal.backend().buffer(), 1).contains("FirstModalSearch"));

        bar.handle_event(&TuiEvent::InputChar('q'));
        let terminal = draw(&mut bar);
        let line = buffer_line(terminal.backend().buffer(), 1);
        assert!(!line.contains("FirstModalSearch"));
        assert!(line.contains("⌕ q"));
    }

    #[test]
    fn test_escape_cancels_only_with_cancel_action() {
        let mut plain = SearchBar::new(Binding::local("x".to_string()), "Search");
        assert_eq!(plain.handle_event(&TuiEvent::Escape), None);

        let cancelled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&cancelled);
        let mut bar = SearchBar::new(Binding::local("x".to_string()), "Search")
            .with_cancel_action(move || flag.set(true));
        let terminal = draw(&mut bar);
        assert!(buffer_line(terminal.backend().buffer(), 1).ends_with("Cancel"));
        assert_eq!(bar.handle_event(&TuiEvent::Escape), Some(SearchEvent::Cancelled));
        assert!(cancelled.get());
    }

    #[test]
    fn test_click_toggles_focus() {
        let mut bar = SearchBar::new(Binding::local(String::new()), "Search");
        draw(&mut bar);
        assert_eq!(bar.handle_event(&TuiEvent::MouseClick(3, 1)), Some(SearchEvent::FocusChanged(true)));
        assert_eq!(bar.handle_event(&TuiEvent::MouseClick(3, 1)), Some(SearchEvent::FocusChanged(false)));
        assert_eq!(bar.handle_event(&TuiEvent::MouseClick(3, 10)), None);
    }
}
