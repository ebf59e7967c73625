//! # Navigation Bar
//!
//! Turns a [`NavigationBarConfiguration`] into pixels (well, cells) through
//! an injected [`NavigationBarStyle`].
//!
//! ```text
//! configuration ──▶ style.make_body() ──▶ RenderedBar ──▶ buffer
//! ```
//!
//! The configuration is rebuilt from scratch by the container on every
//! render, so a bar never holds stale titles or stale back actions.
//!
//! [`NavigationBarStyle`]: crate::tui::navigation::bar_style::NavigationBarStyle

use std::fmt;
use std::rc::Rc;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::navigation::bar_style::NavigationBarStyle;

/// Invoked when the back item is activated.
pub type BackAction = Rc<dyn Fn()>;

/// Snapshot handed to a bar style.
#[derive(Clone)]
pub struct NavigationBarConfiguration {
    pub is_back_visible: bool,
    pub title: String,
    pub subtitle: Option<String>,
    pub tint_color: Option<Color>,
    pub back_action: BackAction,
}

impl fmt::Debug for NavigationBarConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationBarConfiguration")
            .field("is_back_visible", &self.is_back_visible)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("tint_color", &self.tint_color)
            .finish_non_exhaustive()
    }
}

/// Style output: what goes where, independent of the final width.
///
/// ```text
/// │pad│ leading │        title         │ trailing │pad│
/// │   │         │       subtitle       │          │   │
/// ```
///
/// With `group_width > 0` the leading and trailing groups are both exactly
/// that wide, which keeps the title centered on the bar. With `0` they
/// shrink to their content.
#[derive(Debug, Clone, Default)]
pub struct RenderedBar {
    pub leading: Option<Span<'static>>,
    /// Whether `leading` is the back item (and thus clickable).
    pub leading_is_back: bool,
    pub title: String,
    pub title_style: Style,
    pub subtitle: Option<String>,
    pub subtitle_style: Style,
    pub trailing: Option<Span<'static>>,
    pub group_width: u16,
    pub padding: u16,
}

impl RenderedBar {
    pub fn height(&self) -> u16 {
        1 + u16::from(self.subtitle.is_some())
    }

    fn group_widths(&self) -> (u16, u16) {
        if self.group_width > 0 {
            return (self.group_width, self.group_width);
        }
        let width = |span: &Option<Span<'static>>| span.as_ref().map_or(0, |s| s.width() as u16);
        (width(&self.leading), width(&self.trailing))
    }

    fn columns(&self, area: Rect) -> [Rect; 3] {
        let inner = Rect {
            x: area.x.saturating_add(self.padding),
            width: area.width.saturating_sub(self.padding * 2),
            ..area
        };
        let (leading, trailing) = self.group_widths();
        Layout::horizontal([
            Constraint::Length(leading),
            Constraint::Fill(1),
            Constraint::Length(trailing),
        ])
        .areas(inner)
    }

    /// Clickable region of the back item within a bar drawn at `area`.
    pub fn back_area(&self, area: Rect) -> Option<Rect> {
        if !self.leading_is_back || self.leading.is_none() {
            return None;
        }
        let [leading, _, _] = self.columns(area);
        Some(Rect { height: 1, ..leading })
    }
}

impl Widget for &RenderedBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [leading, center, trailing] = self.columns(area);

        if let Some(item) = &self.leading {
            Line::from(item.clone()).render(Rect { height: 1, ..leading }, buf);
        }

        let mut lines = vec![Line::styled(
            truncate_to_width(&self.title, center.width),
            self.title_style,
        )];
        if let Some(subtitle) = &self.subtitle {
            lines.push(Line::styled(truncate_to_width(subtitle, center.width), self.subtitle_style));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(center, buf);

        if let Some(item) = &self.trailing {
            Line::from(item.clone())
                .alignment(Alignment::Right)
                .render(Rect { height: 1, ..trailing }, buf);
        }
    }
}

/// Events emitted by the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarEvent {
    Back,
}

/// The bar as a component: configuration + background + style.
pub struct NavigationBar {
    configuration: NavigationBarConfiguration,
    background_color: Color,
    style: Rc<dyn NavigationBarStyle>,
    back_area: Option<Rect>,
}

impl NavigationBar {
    pub fn new(
        configuration: NavigationBarConfiguration,
        background_color: Color,
        style: Rc<dyn NavigationBarStyle>,
    ) -> Self {
        Self {
            configuration,
            background_color,
            style,
            back_area: None,
        }
    }

    pub fn configuration(&self) -> &NavigationBarConfiguration {
        &self.configuration
    }

    pub fn height(&self) -> u16 {
        self.style.make_body(&self.configuration).height()
    }

    fn activate_back(&self) -> Option<BarEvent> {
        if !self.configuration.is_back_visible {
            return None;
        }
        (self.configuration.back_action)();
        Some(BarEvent::Back)
    }
}

impl Component for NavigationBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body = self.style.make_body(&self.configuration);
        if self.background_color != Color::Reset {
            frame.buffer_mut().set_style(area, Style::new().bg(self.background_color));
        }
        frame.render_widget(&body, area);
        self.back_area = if self.configuration.is_back_visible {
            body.back_area(area)
        } else {
            None
        };
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        self.handle_event(event).is_some()
    }

    fn desired_height(&self) -> Option<u16> {
        Some(self.height())
    }
}

impl EventHandler for NavigationBar {
    type Event = BarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<BarEvent> {
        match event {
            TuiEvent::Back => self.activate_back(),
            TuiEvent::MouseClick(col, row) => {
                let hit = self
                    .back_area
                    .is_some_and(|area| area.contains(Position::new(*col, *row)));
                if hit { self.activate_back() } else { None }
            }
            _ => None,
        }
    }
}

/// Cut `text` to `max_width` display columns, ending in "…" when cut.
pub fn truncate_to_width(text: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
