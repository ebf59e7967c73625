use ratatui::layout::Rect;
use ratatui::Frame;

use crate::tui::event::TuiEvent;
use crate::tui::navigation::Preferences;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields or bindings).
/// - They may hold internal state.
/// - They render to a `Frame` within a given `Rect`.
///
/// # Preferences
///
/// Before a navigation container draws anything it calls
/// [`preferences`](Component::preferences) on its content. Wrappers must
/// forward to their children *before* publishing their own values, which is
/// what makes an outer modifier win over an inner one.
///
/// # Mutability
///
/// The `render` method takes `&mut self` to allow components to:
/// 1. Update internal caches (e.g. hit areas for mouse clicks).
/// 2. Sync presentation state (e.g. build a modal's view when it appears).
pub trait Component {
    /// Publish navigation preferences for this subtree.
    fn preferences(&self, _preferences: &mut Preferences) {}

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Offer an input event. Returns `true` if it was consumed.
    fn handle_input(&mut self, _event: &TuiEvent) -> bool {
        false
    }

    /// Height the component would like, if it has a natural one.
    fn desired_height(&self) -> Option<u16> {
        None
    }
}

impl Component for Box<dyn Component> {
    fn preferences(&self, preferences: &mut Preferences) {
        (**self).preferences(preferences)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        (**self).render(frame, area)
    }

    fn handle_input(&mut self, event: &TuiEvent) -> bool {
        (**self).handle_input(event)
    }

    fn desired_height(&self) -> Option<u16> {
        (**self).desired_height()
    }
}

/// A component that turns terminal events into its own typed events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
