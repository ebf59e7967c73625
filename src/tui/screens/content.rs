use crate::core::action::ContentAction;
use crate::core::state::ContentState;
use crate::core::store::Store;
use crate::tui::component::Component;
use crate::tui::components::{Button, Text, VStack};
use crate::tui::navigation::{NavigationDecorator, NavigationLink, NavigationModifiers};
use crate::tui::presentation::PresentationModifiers;
use crate::tui::screens::{details_view, first_modal_view, ScreenContext};

/// Root screen: greeting, a button that presents the first modal over
/// everything, and a link into a pushed detail page.
pub fn content_view(
    store: Store<ContentState, ContentAction>,
    context: &ScreenContext,
) -> impl Component + use<> {
    let sender = store.clone();
    let home = NavigationDecorator::new(context.styles.clone(), move |navigator| {
        VStack::new()
            .padding(1)
            .child(Text::new("Hello, world!"))
            .child(Button::new("Show FirstModalSearch", move || {
                sender.send(ContentAction::ShowFirstModal)
            }))
            .child(NavigationLink::new(navigator, "Details", || Box::new(details_view())))
            .navigation_title("Content view")
    });

    let is_presented = store
        .binding(
            |state| state.first_modal.as_ref().cloned(),
            |_| ContentAction::HideFirstModal,
        )
        .mapped_to_bool();
    let modal_store = store.scope(|state| state.first_modal.as_ref().cloned(), ContentAction::FirstModal);
    let modal_context = context.clone();

    home.full_screen_cover(is_presented, context.deferred.clone(), move || {
        Box::new(first_modal_view(modal_store.clone(), &modal_context))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reducer::update;
    use crate::test_support::{buffer_line, buffer_text};
    use crate::tui::event::TuiEvent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn setup() -> (Store<ContentState, ContentAction>, impl Component) {
        let store = Store::new(ContentState::default(), update);
        let view = content_view(store.clone(), &ScreenContext::default());
        (store, view)
    }

    fn draw(view: &mut impl Component) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        terminal
    }

    #[test]
    fn test_home_shows_title_and_greeting() {
        let (_store, mut view) = setup();
        let terminal = draw(&mut view);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer_line(buffer, 0).trim(), "Content view");
        assert!(buffer_text(buffer).contains("Hello, world!"));
        assert!(buffer_text(buffer).contains("Show FirstModalSearch"));
    }

    #[test]
    fn test_enter_presents_first_modal() {
        let (store, mut view) = setup();
        draw(&mut view);

        assert!(view.handle_input(&TuiEvent::Submit));
        assert!(store.state().unwrap().first_modal.is_present());

        let terminal = draw(&mut view);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("FirstModalSearch"));
        assert!(!text.contains("Hello, world!"));
    }

    #[test]
    fn test_escape_on_cover_hides_first_modal() {
        let (store, mut view) = setup();
        store.send(ContentAction::ShowFirstModal);
        draw(&mut view);

        assert!(view.handle_input(&TuiEvent::Escape));
        assert!(!store.state().unwrap().first_modal.is_present());
        let terminal = draw(&mut view);
        assert!(buffer_text(terminal.backend().buffer()).contains("Hello, world!"));
    }

    #[test]
    fn test_escape_at_home_is_not_consumed() {
        let (_store, mut view) = setup();
        draw(&mut view);
        assert!(!view.handle_input(&TuiEvent::Escape));
    }
}
