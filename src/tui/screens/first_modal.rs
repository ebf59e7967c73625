use ratatui::style::Color;

use crate::core::action::FirstModalAction;
use crate::core::state::FirstModalState;
use crate::core::store::Store;
use crate::tui::component::Component;
use crate::tui::components::{Button, SearchBar, VStack};
use crate::tui::navigation::NavigationDecorator;
use crate::tui::presentation::PresentationModifiers;
use crate::tui::screens::{second_modal_view, ScreenContext};

/// Search field plus a button that raises the second modal from the bottom.
pub fn first_modal_view(
    store: Store<FirstModalState, FirstModalAction>,
    context: &ScreenContext,
) -> impl Component + use<> {
    let text = store.binding(|state| state.text.clone(), FirstModalAction::TextChanged);
    let sender = store.clone();
    let body = NavigationDecorator::new(context.styles.clone(), move |_| {
        VStack::new()
            .background(Color::Green)
            .child(SearchBar::new(text, "FirstModalSearch"))
            .child(Button::new("Show SecondModalSearch", move || {
                sender.send(FirstModalAction::ShowSecondModal)
            }))
    });

    let is_presented = store
        .binding(
            |state| state.second_modal.as_ref().cloned(),
            |_| FirstModalAction::HideSecondModal,
        )
        .mapped_to_bool();
    let popover_store = store.scope(
        |state| state.second_modal.as_ref().cloned(),
        FirstModalAction::SecondModal,
    );

    body.bottom_popover(is_presented, context.popover_max_height, move || {
        Box::new(second_modal_view(popover_store.clone()))
    })
    .dim_overlay(context.dim_overlay)
}
