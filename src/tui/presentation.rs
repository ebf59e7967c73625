//! # Modal Presentation
//!
//! Two ways to show a component on top of another, both driven by a
//! `Binding<bool>`:
//!
//! ```text
//!  FullScreenCover                 BottomPopover
//!  ┌──────────────────┐            ┌──────────────────┐
//!  │                  │            │░░░ presenter ░░░░│  dimmed
//!  │  presented view  │            │░░░░░░░░░░░░░░░░░░│
//!  │                  │            ├──────────────────┤
//!  │                  │            │  presented view  │  ≤ max height
//!  └──────────────────┘            └──────────────────┘
//! ```
//!
//! The presented component is built when the binding turns true and dropped
//! when it turns false, so reopening always starts from a fresh view.
//! Dismissal (Esc, or a click on the dimmed area) only writes `false` to the
//! binding; whoever owns the binding decides what that means.
//!
//! A presented view is its own hierarchy. Its navigation preferences never
//! reach the presenter.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use crate::core::binding::Binding;
use crate::tui::component::Component;
use crate::tui::deferred::DeferredQueue;
use crate::tui::event::TuiEvent;
use crate::tui::navigation::Preferences;

/// Builds the presented view each time presentation starts.
pub type PresentedBuilder = Box<dyn Fn() -> Box<dyn Component>>;

struct Presentation {
    name: &'static str,
    is_presented: Binding<bool>,
    build: PresentedBuilder,
    content: Option<Box<dyn Component>>,
    on_dismiss: Option<Box<dyn Fn()>>,
}

impl Presentation {
    fn new(name: &'static str, is_presented: Binding<bool>, build: PresentedBuilder) -> Self {
        Self {
            name,
            is_presented,
            build,
            content: None,
            on_dismiss: None,
        }
    }

    /// Build or drop the content to match the binding. Returns `true` if the
    /// content just appeared.
    fn sync(&mut self) -> bool {
        match (self.is_presented.get(), self.content.is_some()) {
            (true, false) => {
                info!("Presenting {}", self.name);
                self.content = Some((self.build)());
                true
            }
            (false, true) => {
                info!("Dismissed {}", self.name);
                self.content = None;
                if let Some(on_dismiss) = &self.on_dismiss {
                    on_dismiss();
                }
                false
            }
            _ => false,
        }
    }

    fn dismiss(&mut self) {
        debug!("Requesting dismissal of {}", self.name);
        self.is_presented.set(false);
        self.sync();
    }
}

/// Backing painted behind a full-screen cover's content.
///
/// The presenter is not rendered while the cover is up, so the backing is
/// all that shows through wherever the content leaves cells untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing {
    /// Solid [`OPAQUE_BACKING`] fill, used for the first frame of a
    /// presentation.
    Opaque,
    /// Cleared to the terminal's default background.
    Transparent,
}

pub const OPAQUE_BACKING: Color = Color::Black;

/// Covers the whole area while `is_presented` reads true.
///
/// The backing starts opaque on every presentation and a deferred hook
/// switches it to transparent after the first frame.
pub struct FullScreenCover<P> {
    presenter: P,
    presentation: Presentation,
    backing: Rc<Cell<Backing>>,
    deferred: DeferredQueue,
}

impl<P: Component> FullScreenCover<P> {
    pub fn new(
        presenter: P,
        is_presented: Binding<bool>,
        deferred: DeferredQueue,
        build: impl Fn() -> Box<dyn Component> + 'static,
    ) -> Self {
        Self {
            presenter,
            presentation: Presentation::new("full-screen cover", is_presented, Box::new(build)),
            backing: Rc::new(Cell::new(Backing::Opaque)),
            deferred,
        }
    }

    pub fn on_dismiss(mut self, on_dismiss: impl Fn() + 'static) -> Self {
        self.presentation.on_dismiss = Some(Box::new(on_dismiss));
        self
    }

    pub fn is_presented(&self) -> bool {
        self.presentation.content.is_some()
    }

    pub fn backing(&self) -> Backing {
        self.backing.get()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Match the presented content to the binding. A fresh presentation
    /// starts opaque and queues the switch to transparent.
    fn sync(&mut self) {
        if self.presentation.sync() {
            self.backing.set(Backing::Opaque);
            let backing = Rc::clone(&self.backing);
            self.deferred.schedule(move || backing.set(Backing::Transparent));
        }
    }

    fn paint_backing(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        if self.backing.get() == Backing::Opaque {
            frame.render_widget(Block::new().style(Style::new().bg(OPAQUE_BACKING)), area);
        }
    }
}

impl<P: Component> Component for FullScreenCover<P> {
    fn preferences(&self, preferences: &mut Preferences) {
        self.presenter.preferences(preferences);
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.sync();
        if self.presentation.content.is_none() {
            self.presenter.render(frame, area);
            return;
        }
        self.paint_backing(frame, area);
        if let Some(content) = &mut self.presentation.content {
            content.render(frame, area);
        }
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        self.sync();
        let Some(content) = &mut self.presentation.content else {
            return self.presenter.handle_input(event);
        };
        if content.handle_input(event) {
            return true;
        }
        if *event == TuiEvent::Escape {
            self.presentation.dismiss();
        }
        // The cover swallows everything while it is up.
        true
    }
}

/// Bottom-anchored panel over a dimmed presenter.
pub struct BottomPopover<P> {
    presenter: P,
    presentation: Presentation,
    max_height: u16,
    dim_overlay: bool,
    panel: Option<Rect>,
}

impl<P: Component> BottomPopover<P> {
    pub fn new(
        presenter: P,
        is_presented: Binding<bool>,
        max_height: u16,
        build: impl Fn() -> Box<dyn Component> + 'static,
    ) -> Self {
        Self {
            presenter,
            presentation: Presentation::new("bottom popover", is_presented, Box::new(build)),
            max_height: max_height.max(1),
            dim_overlay: true,
            panel: None,
        }
    }

    pub fn dim_overlay(mut self, dim: bool) -> Self {
        self.dim_overlay = dim;
        self
    }

    pub fn on_dismiss(mut self, on_dismiss: impl Fn() + 'static) -> Self {
        self.presentation.on_dismiss = Some(Box::new(on_dismiss));
        self
    }

    pub fn is_presented(&self) -> bool {
        self.presentation.content.is_some()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Where the panel was drawn last frame, if presented.
    pub fn panel_area(&self) -> Option<Rect> {
        self.panel
    }

    /// Match the presented content to the binding. The panel rect belongs
    /// to one presentation and is forgotten when content appears or goes.
    fn sync(&mut self) {
        let appeared = self.presentation.sync();
        if appeared || self.presentation.content.is_none() {
            self.panel = None;
        }
    }

    fn dismiss(&mut self) {
        self.presentation.dismiss();
        self.panel = None;
    }

    fn panel_height(&self, content: &dyn Component, area: Rect) -> u16 {
        content
            .desired_height()
            .unwrap_or(self.max_height)
            .min(self.max_height)
            .min(area.height)
    }
}

impl<P: Component> Component for BottomPopover<P> {
    fn preferences(&self, preferences: &mut Preferences) {
        self.presenter.preferences(preferences);
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.sync();
        self.presenter.render(frame, area);

        let Some(content) = &self.presentation.content else {
            return;
        };
        if self.dim_overlay {
            frame
                .buffer_mut()
                .set_style(area, Style::new().add_modifier(Modifier::DIM));
        }
        let height = self.panel_height(content.as_ref(), area);
        let panel = Rect {
            y: area.bottom().saturating_sub(height),
            height,
            ..area
        };
        frame.render_widget(Clear, panel);
        if let Some(content) = &mut self.presentation.content {
            content.render(frame, panel);
        }
        self.panel = Some(panel);
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        self.sync();
        let Some(content) = &mut self.presentation.content else {
            return self.presenter.handle_input(event);
        };
        if let TuiEvent::MouseClick(col, row) = event {
            // Nothing to hit-test until the panel has been drawn once.
            let Some(panel) = self.panel else {
                debug!("Ignoring click before the popover panel is laid out");
                return true;
            };
            if !panel.contains(Position::new(*col, *row)) {
                self.dismiss();
                return true;
            }
        }
        if content.handle_input(event) {
            return true;
        }
        if *event == TuiEvent::Escape {
            self.dismiss();
        }
        true
    }
}

/// Attach a presentation to any component.
pub trait PresentationModifiers: Component + Sized {
    fn full_screen_cover(
        self,
        is_presented: Binding<bool>,
        deferred: DeferredQueue,
        build: impl Fn() -> Box<dyn Component> + 'static,
    ) -> FullScreenCover<Self> {
        FullScreenCover::new(self, is_presented, deferred, build)
    }

    fn bottom_popover(
        self,
        is_presented: Binding<bool>,
        max_height: u16,
        build: impl Fn() -> Box<dyn Component> + 'static,
    ) -> BottomPopover<Self> {
        BottomPopover::new(self, is_presented, max_height, build)
    }
}

impl<C: Component> PresentationModifiers for C {}
