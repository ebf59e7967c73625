use ratatui::style::Color;

use crate::core::action::SecondModalAction;
use crate::core::binding::Binding;
use crate::core::state::SecondModalState;
use crate::core::store::Store;
use crate::tui::component::Component;
use crate::tui::components::{SearchBar, Text, VStack};

const ORANGE: Color = Color::Rgb(0xff, 0xa5, 0x00);

/// Search field with a live echo of what was typed.
pub fn second_modal_view(store: Store<SecondModalState, SecondModalAction>) -> impl Component {
    let text = store.binding(|state| state.text.clone(), SecondModalAction::TextChanged);
    let echo = Binding::new(
        move || {
            let typed = store.state().map(|state| state.text).unwrap_or_default();
            format!("SecondModalSearch {typed}")
        },
        |_| {},
    );

    VStack::new()
        .background(ORANGE)
        .child(SearchBar::new(text, "SecondModalSearch"))
        .child(Text::bound(echo))
}
