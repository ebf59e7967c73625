//! # Navigation Decorator
//!
//! Root of a navigation stack. The root content and every pushed destination
//! each get their own [`NavigationContainer`]; only the top one is drawn and
//! receives input.
//!
//! ```text
//!   NavigationLink ── push ──▶ Navigator (queue) ──▶ NavigationDecorator
//!   back item      ── pop  ──▶                        applies between renders
//! ```
//!
//! The stack never changes while a frame is rendering. Requests queued
//! during a render are applied right after it, and the top is drawn again.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::core::binding::Binding;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::navigation::container::NavigationContainer;
use crate::tui::navigation::link::LinkId;
use crate::tui::navigation::modifiers::{NavigationModifiers, Preferred};
use crate::tui::navigation::preference::NavigationBackButtonHidden;
use crate::tui::navigation::NavigationStyles;

/// Builds the view a link navigates to.
pub type DestinationBuilder = Box<dyn FnOnce() -> Box<dyn Component>>;

enum NavigationRequest {
    Push {
        link: LinkId,
        destination: DestinationBuilder,
        is_active: Binding<bool>,
    },
    Pop,
}

#[derive(Default)]
struct NavigatorState {
    requests: Vec<NavigationRequest>,
    /// Links that are pushed or waiting to be.
    active: Vec<LinkId>,
}

/// Handle for queueing stack changes. Cheap to clone.
#[derive(Clone, Default)]
pub struct Navigator {
    state: Rc<RefCell<NavigatorState>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a push. Ignored if `link` is already pushed or queued.
    pub fn push(&self, link: LinkId, destination: DestinationBuilder, is_active: Binding<bool>) {
        let mut state = self.state.borrow_mut();
        if state.active.contains(&link) {
            return;
        }
        debug!("Queued push for {:?}", link);
        state.active.push(link);
        state.requests.push(NavigationRequest::Push {
            link,
            destination,
            is_active,
        });
    }

    /// Queue a pop of the top destination.
    pub fn pop(&self) {
        debug!("Queued pop");
        self.state.borrow_mut().requests.push(NavigationRequest::Pop);
    }

    pub fn is_active(&self, link: LinkId) -> bool {
        self.state.borrow().active.contains(&link)
    }

    fn take_requests(&self) -> Vec<NavigationRequest> {
        std::mem::take(&mut self.state.borrow_mut().requests)
    }

    fn release(&self, link: LinkId) {
        self.state.borrow_mut().active.retain(|id| *id != link);
    }
}

type PushedContainer = NavigationContainer<Preferred<Box<dyn Component>, NavigationBackButtonHidden>>;

struct PushedFrame {
    link: LinkId,
    container: PushedContainer,
    is_active: Binding<bool>,
}

pub struct NavigationDecorator<C> {
    navigator: Navigator,
    styles: NavigationStyles,
    root: NavigationContainer<C>,
    pushed: Vec<PushedFrame>,
}

impl<C: Component> NavigationDecorator<C> {
    pub fn new(styles: NavigationStyles, build: impl FnOnce(&Navigator) -> C) -> Self {
        let navigator = Navigator::new();
        let root = NavigationContainer::new(build(&navigator), styles.clone());
        Self {
            navigator,
            styles,
            root,
            pushed: Vec::new(),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Number of pushed destinations above the root.
    pub fn depth(&self) -> usize {
        self.pushed.len()
    }

    pub fn root(&self) -> &NavigationContainer<C> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut NavigationContainer<C> {
        &mut self.root
    }

    /// Apply queued requests and drop frames whose binding went false.
    /// Returns `true` if the stack changed.
    fn sync(&mut self) -> bool {
        let mut changed = false;

        for request in self.navigator.take_requests() {
            match request {
                NavigationRequest::Push { link, destination, is_active } => {
                    if !is_active.get() {
                        // Deactivated before it was ever shown.
                        self.navigator.release(link);
                        continue;
                    }
                    let navigator = self.navigator.clone();
                    let container = NavigationContainer::new(
                        destination().navigation_back_button_hidden(false),
                        self.styles.clone(),
                    )
                    .with_back_action(Rc::new(move || navigator.pop()));
                    self.pushed.push(PushedFrame { link, container, is_active });
                    info!("Pushed {:?} (depth {})", link, self.pushed.len());
                    changed = true;
                }
                NavigationRequest::Pop => changed |= self.pop_to(self.pushed.len().saturating_sub(1)),
            }
        }

        if let Some(index) = self.pushed.iter().position(|frame| !frame.is_active.get()) {
            changed |= self.pop_to(index);
        }
        changed
    }

    /// Remove every frame at `index` and above, resetting their bindings.
    fn pop_to(&mut self, index: usize) -> bool {
        if index >= self.pushed.len() {
            return false;
        }
        for frame in self.pushed.drain(index..).rev() {
            frame.is_active.set(false);
            self.navigator.release(frame.link);
            info!("Popped {:?}", frame.link);
        }
        true
    }

    fn render_top(&mut self, frame: &mut Frame, area: Rect) {
        match self.pushed.last_mut() {
            Some(top) => top.container.render(frame, area),
            None => self.root.render(frame, area),
        }
    }
}

impl<C: Component> Component for NavigationDecorator<C> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.sync();
        self.render_top(frame, area);
        if self.sync() {
            frame.render_widget(Clear, area);
            self.render_top(frame, area);
        }
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        match self.pushed.last_mut() {
            Some(top) => top.container.handle_input(event),
            None => self.root.handle_input(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_line, Label};
    use crate::tui::navigation::link::NavigationLink;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn details() -> Box<dyn Component> {
        Box::new(Label::new("details").navigation_title("Details"))
    }

    fn draw<C: Component>(decorator: &mut NavigationDecorator<C>) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(24, 4)).unwrap();
        terminal.draw(|f| decorator.render(f, f.area())).unwrap();
        terminal
    }

    #[test]
    fn test_root_renders_inside_container() {
        let mut decorator = NavigationDecorator::new(NavigationStyles::default(), |_| {
            Label::new("home").navigation_title("Home")
        });
        let terminal = draw(&mut decorator);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer_line(buffer, 0).trim(), "Home");
        assert_eq!(buffer_line(buffer, 1).trim_end(), "home");
        assert_eq!(decorator.depth(), 0);
    }

    #[test]
    fn test_link_push_shows_back_and_back_pops() {
        let mut decorator = NavigationDecorator::new(NavigationStyles::default(), |navigator| {
            NavigationLink::new(navigator, "Open", details)
        });
        draw(&mut decorator);

        assert!(decorator.handle_input(&TuiEvent::Activate));
        let terminal = draw(&mut decorator);
        let buffer = terminal.backend().buffer();
        assert_eq!(decorator.depth(), 1);
        assert!(buffer_line(buffer, 0).starts_with(" <"));
        assert!(buffer_line(buffer, 0).contains("Details"));
        assert_eq!(buffer_line(buffer, 1).trim_end(), "details");

        assert!(decorator.handle_input(&TuiEvent::Back));
        draw(&mut decorator);
        assert_eq!(decorator.depth(), 0);
        assert!(!decorator.root().content().is_active());

        // The toggle was reset, so the link can push again.
        assert!(decorator.handle_input(&TuiEvent::Activate));
        draw(&mut decorator);
        assert_eq!(decorator.depth(), 1);
    }

    #[test]
    fn test_external_binding_drives_push_and_pop() {
        let is_active = Binding::local(false);
        let binding = is_active.clone();
        let mut decorator = NavigationDecorator::new(NavigationStyles::default(), move |navigator| {
            NavigationLink::with_binding(navigator, binding, "Open", details)
        });
        draw(&mut decorator);

        // Taps are ignored when the binding is external.
        assert!(!decorator.handle_input(&TuiEvent::Activate));
        draw(&mut decorator);
        assert_eq!(decorator.depth(), 0);

        is_active.set(true);
        draw(&mut decorator);
        assert_eq!(decorator.depth(), 1);

        is_active.set(false);
        draw(&mut decorator);
        assert_eq!(decorator.depth(), 0);
    }

    #[test]
    fn test_back_resets_external_binding() {
        let is_active = Binding::local(true);
        let binding = is_active.clone();
        let mut decorator = NavigationDecorator::new(NavigationStyles::default(), move |navigator| {
            NavigationLink::with_binding(navigator, binding, "Open", details)
        });
        draw(&mut decorator);
        assert_eq!(decorator.depth(), 1);

        assert!(decorator.handle_input(&TuiEvent::Back));
        draw(&mut decorator);
        assert_eq!(decorator.depth(), 0);
        assert!(!is_active.get());
    }

    #[test]
    fn test_duplicate_push_is_ignored() {
        let navigator = Navigator::new();
        let link = LinkId::next();
        let active = Binding::local(true);
        navigator.push(link, Box::new(details), active.clone());
        navigator.push(link, Box::new(details), active);
        assert_eq!(navigator.take_requests().len(), 1);
        assert!(navigator.is_active(link));
    }
}
