//! # Store
//!
//! Owns the root state and runs the reducer for every sent action.
//! Screens never touch state directly; they read snapshots and send actions.
//!
//! ```text
//!   Store<ContentState, ContentAction>          (owns the RefCell)
//!     └── scope(first_modal, ContentAction::FirstModal)
//!           Store<FirstModalState, FirstModalAction>
//!             └── scope(second_modal, FirstModalAction::SecondModal)
//!                   Store<SecondModalState, SecondModalAction>
//! ```
//!
//! A scoped store reads through its parent and wraps its actions on the way
//! up, so every action still lands in the one root reducer. A scoped store's
//! state is `None` while its modal is absent.
//!
//! The reducer borrows the root state mutably only for the duration of one
//! action. Snapshots are clones, so no borrow outlives a call.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::binding::Binding;

pub struct Store<S, A> {
    state: Rc<dyn Fn() -> Option<S>>,
    send: Rc<dyn Fn(A)>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            send: Rc::clone(&self.send),
        }
    }
}

impl<S: Clone + 'static, A: 'static> Store<S, A> {
    pub fn new(initial: S, reducer: fn(&mut S, A)) -> Self {
        let cell = Rc::new(RefCell::new(initial));
        let read = Rc::clone(&cell);
        Self {
            state: Rc::new(move || Some(read.borrow().clone())),
            send: Rc::new(move |action| reducer(&mut cell.borrow_mut(), action)),
        }
    }

    /// Snapshot of the current state, `None` if this scope's modal is absent.
    pub fn state(&self) -> Option<S> {
        (self.state)()
    }

    pub fn send(&self, action: A) {
        (self.send)(action)
    }

    /// Derive a store focused on a child state.
    pub fn scope<C: Clone + 'static, CA: 'static>(
        &self,
        to_child: impl Fn(&S) -> Option<C> + 'static,
        embed: impl Fn(CA) -> A + 'static,
    ) -> Store<C, CA> {
        let parent_state = Rc::clone(&self.state);
        let parent_send = Rc::clone(&self.send);
        Store {
            state: Rc::new(move || parent_state().and_then(|state| to_child(&state))),
            send: Rc::new(move |action| parent_send(embed(action))),
        }
    }

    /// Two-way binding: reads a projection of state, writes by sending an action.
    pub fn binding<T: Default + 'static>(
        &self,
        get: impl Fn(&S) -> T + 'static,
        send: impl Fn(T) -> A + 'static,
    ) -> Binding<T> {
        let reader = self.clone();
        let sender = self.clone();
        Binding::new(
            move || reader.state().map(|state| get(&state)).unwrap_or_default(),
            move |value| sender.send(send(value)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{ContentAction, FirstModalAction};
    use crate::core::reducer::update;
    use crate::core::state::{ContentState, FirstModalState};

    fn first_modal_store(root: &Store<ContentState, ContentAction>) -> Store<FirstModalState, FirstModalAction> {
        root.scope(|s| s.first_modal.as_ref().cloned(), ContentAction::FirstModal)
    }

    #[test]
    fn test_send_runs_reducer() {
        let store = Store::new(ContentState::default(), update);
        store.send(ContentAction::ShowFirstModal);
        assert!(store.state().is_some_and(|s| s.first_modal.is_present()));
    }

    #[test]
    fn test_scope_is_none_while_absent() {
        let store = Store::new(ContentState::default(), update);
        let child = first_modal_store(&store);
        assert!(child.state().is_none());

        store.send(ContentAction::ShowFirstModal);
        assert_eq!(child.state(), Some(FirstModalState::default()));
    }

    #[test]
    fn test_scoped_send_reaches_root() {
        let store = Store::new(ContentState::default(), update);
        let child = first_modal_store(&store);
        store.send(ContentAction::ShowFirstModal);
        child.send(FirstModalAction::TextChanged("abc".to_string()));

        let root = store.state().unwrap_or_default();
        assert_eq!(root.first_modal.as_ref().map(|m| m.text.as_str()), Some("abc"));
    }

    #[test]
    fn test_text_binding_sends_action() {
        let store = Store::new(ContentState::default(), update);
        store.send(ContentAction::ShowFirstModal);
        let child = first_modal_store(&store);
        let text = child.binding(|s| s.text.clone(), FirstModalAction::TextChanged);

        text.set("query".to_string());
        assert_eq!(text.get(), "query");
    }

    #[test]
    fn test_presentation_binding_dismisses() {
        let store = Store::new(ContentState::default(), update);
        let presented = store
            .binding(|s| s.first_modal.as_ref().cloned(), |_| ContentAction::HideFirstModal)
            .mapped_to_bool();

        presented.set(true);
        assert!(!presented.get());

        store.send(ContentAction::ShowFirstModal);
        assert!(presented.get());

        presented.set(false);
        assert!(!presented.get());
        assert_eq!(store.state(), Some(ContentState::default()));
    }
}
