use navchrome::core::action::{ContentAction, FirstModalAction, SecondModalAction};
use navchrome::core::modal::ModalSlot;
use navchrome::core::reducer::update;
use navchrome::core::state::{ContentState, FirstModalState, SecondModalState};
use navchrome::core::store::Store;

// ============================================================================
// Helper Functions
// ============================================================================

fn root_store() -> Store<ContentState, ContentAction> {
    Store::new(ContentState::default(), update)
}

fn first_text(state: &ContentState) -> Option<&str> {
    state.first_modal.as_ref().map(|m| m.text.as_str())
}

fn run(actions: impl IntoIterator<Item = ContentAction>) -> ContentState {
    let mut state = ContentState::default();
    for action in actions {
        update(&mut state, action);
    }
    state
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_a_show_first_modal() {
    let state = run([ContentAction::ShowFirstModal]);
    assert_eq!(
        state,
        ContentState {
            first_modal: ModalSlot::Present(FirstModalState {
                second_modal: ModalSlot::Absent,
                text: String::new(),
            }),
        }
    );
}

#[test]
fn test_scenario_b_text_changed() {
    let state = run([
        ContentAction::ShowFirstModal,
        ContentAction::FirstModal(FirstModalAction::TextChanged("abc".into())),
    ]);
    assert_eq!(first_text(&state), Some("abc"));
}

#[test]
fn test_scenario_c_show_second_modal() {
    let state = run([
        ContentAction::ShowFirstModal,
        ContentAction::FirstModal(FirstModalAction::TextChanged("abc".into())),
        ContentAction::FirstModal(FirstModalAction::ShowSecondModal),
    ]);
    let first = state.first_modal.as_ref().unwrap();
    assert_eq!(first.second_modal, ModalSlot::Present(SecondModalState::default()));
    assert_eq!(first.text, "abc");
}

#[test]
fn test_scenario_d_hide_first_discards_second() {
    let state = run([
        ContentAction::ShowFirstModal,
        ContentAction::FirstModal(FirstModalAction::TextChanged("abc".into())),
        ContentAction::FirstModal(FirstModalAction::ShowSecondModal),
        ContentAction::HideFirstModal,
    ]);
    assert_eq!(state, ContentState::default());
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_cascade_teardown_then_fresh_reopen() {
    let state = run([
        ContentAction::ShowFirstModal,
        ContentAction::FirstModal(FirstModalAction::TextChanged("kept?".into())),
        ContentAction::FirstModal(FirstModalAction::ShowSecondModal),
        ContentAction::FirstModal(FirstModalAction::SecondModal(SecondModalAction::TextChanged(
            "inner".into(),
        ))),
        ContentAction::HideFirstModal,
        ContentAction::ShowFirstModal,
    ]);
    let first = state.first_modal.as_ref().unwrap();
    assert_eq!(first.text, "");
    assert!(!first.second_modal.is_present());
}

#[test]
fn test_reset_on_reopen_for_many_inputs() {
    for input in ["", "a", "hello world", "ünïcödé", "  spaces  "] {
        let state = run([
            ContentAction::ShowFirstModal,
            ContentAction::FirstModal(FirstModalAction::TextChanged(input.into())),
            ContentAction::HideFirstModal,
            ContentAction::ShowFirstModal,
        ]);
        assert_eq!(first_text(&state), Some(""), "input {input:?} survived reopen");
    }
}

#[test]
fn test_orphan_actions_leave_state_unchanged() {
    let state = run([
        ContentAction::FirstModal(FirstModalAction::TextChanged("lost".into())),
        ContentAction::FirstModal(FirstModalAction::ShowSecondModal),
        ContentAction::FirstModal(FirstModalAction::SecondModal(SecondModalAction::TextChanged(
            "lost".into(),
        ))),
    ]);
    assert_eq!(state, ContentState::default());

    let state = run([
        ContentAction::ShowFirstModal,
        ContentAction::FirstModal(FirstModalAction::TextChanged("here".into())),
        ContentAction::FirstModal(FirstModalAction::SecondModal(SecondModalAction::TextChanged(
            "lost".into(),
        ))),
    ]);
    let first = state.first_modal.as_ref().unwrap();
    assert_eq!(first.text, "here");
    assert!(!first.second_modal.is_present());
}

#[test]
fn test_presentation_binding_only_ever_hides() {
    let store = root_store();
    let presented = store
        .binding(
            |state| state.first_modal.as_ref().cloned(),
            |_| ContentAction::HideFirstModal,
        )
        .mapped_to_bool();

    presented.set(true);
    assert!(!presented.get());
    assert!(!store.state().unwrap().first_modal.is_present());

    store.send(ContentAction::ShowFirstModal);
    assert!(presented.get());
    presented.set(true);
    assert!(presented.get());

    presented.set(false);
    assert!(!presented.get());
    assert!(!store.state().unwrap().first_modal.is_present());
}

#[test]
fn test_scoped_stores_route_to_root() {
    let root = root_store();
    let first = root.scope(|s| s.first_modal.as_ref().cloned(), ContentAction::FirstModal);
    let second = first.scope(|s| s.second_modal.as_ref().cloned(), FirstModalAction::SecondModal);

    assert!(first.state().is_none());
    second.send(SecondModalAction::TextChanged("dropped".into()));
    assert_eq!(root.state().unwrap(), ContentState::default());

    root.send(ContentAction::ShowFirstModal);
    first.send(FirstModalAction::ShowSecondModal);
    second.send(SecondModalAction::TextChanged("deep".into()));
    assert_eq!(second.state().unwrap().text, "deep");

    root.send(ContentAction::HideFirstModal);
    assert!(second.state().is_none());
}
