//! Navigation links: a tappable label that pushes a destination.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::core::binding::Binding;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::navigation::decorator::Navigator;

static LINK_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(u64);

impl LinkId {
    pub fn next() -> Self {
        Self(LINK_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Pushes its destination onto the enclosing navigation stack.
///
/// Exactly one thing decides whether the destination is shown:
///
/// - [`NavigationLink::new`] keeps an internal toggle that taps flip on.
/// - [`NavigationLink::with_binding`] follows an external `Binding<bool>`;
///   taps are ignored and only the binding pushes or pops.
///
/// Either way, popping writes `false` back so the link can push again.
pub struct NavigationLink {
    id: LinkId,
    navigator: Navigator,
    label: String,
    destination: Rc<dyn Fn() -> Box<dyn Component>>,
    is_active: Binding<bool>,
    external: bool,
    label_area: Option<Rect>,
}

impl NavigationLink {
    pub fn new(
        navigator: &Navigator,
        label: impl Into<String>,
        destination: impl Fn() -> Box<dyn Component> + 'static,
    ) -> Self {
        Self::build(navigator, Binding::local(false), false, label.into(), Rc::new(destination))
    }

    pub fn with_binding(
        navigator: &Navigator,
        is_active: Binding<bool>,
        label: impl Into<String>,
        destination: impl Fn() -> Box<dyn Component> + 'static,
    ) -> Self {
        Self::build(navigator, is_active, true, label.into(), Rc::new(destination))
    }

    fn build(
        navigator: &Navigator,
        is_active: Binding<bool>,
        external: bool,
        label: String,
        destination: Rc<dyn Fn() -> Box<dyn Component>>,
    ) -> Self {
        Self {
            id: LinkId::next(),
            navigator: navigator.clone(),
            label,
            destination,
            is_active,
            external,
            label_area: None,
        }
    }

    pub fn id(&self) -> LinkId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.is_active.get()
    }

    fn request_push(&self) {
        let destination = Rc::clone(&self.destination);
        self.navigator
            .push(self.id, Box::new(move || destination()), self.is_active.clone());
    }

    fn activate(&mut self) -> bool {
        if self.external {
            debug!("Ignoring tap on {:?}: driven by external binding", self.id);
            return false;
        }
        self.is_active.set(true);
        self.request_push();
        true
    }
}

impl Component for NavigationLink {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.is_active.get() && !self.navigator.is_active(self.id) {
            self.request_push();
        }

        let text = format!("{} ›", self.label);
        let width = (text.width() as u16).min(area.width);
        let label_area = Rect {
            width,
            height: area.height.min(1),
            ..area
        };
        let line = Line::from(Span::styled(
            text,
            Style::new().add_modifier(Modifier::UNDERLINED),
        ));
        frame.render_widget(line, label_area);
        self.label_area = Some(label_area);
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::Activate => self.activate(),
            TuiEvent::MouseClick(col, row) => {
                let hit = self
                    .label_area
                    .is_some_and(|area| area.contains(Position::new(*col, *row)));
                hit && self.activate()
            }
            _ => false,
        }
    }

    fn desired_height(&self) -> Option<u16> {
        Some(1)
    }
}
