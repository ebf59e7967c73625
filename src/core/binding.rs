//! # Bindings
//!
//! A `Binding<T>` is a two-way view of a value owned somewhere else: reading
//! calls `get`, writing calls `set`. Components take bindings instead of
//! owning their data, so a search bar can edit text that lives in a reducer
//! state without knowing about the reducer.
//!
//! Everything runs on the UI thread, so bindings share their closures with
//! `Rc` and are cheap to clone.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

pub struct Binding<T> {
    get: Rc<dyn Fn() -> T>,
    set: Rc<dyn Fn(T)>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

impl<T: 'static> Binding<T> {
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// A binding that owns its value. Used where a component keeps private
    /// state but wants to expose it the same way as external state.
    pub fn local(initial: T) -> Self
    where
        T: Clone,
    {
        let cell = Rc::new(RefCell::new(initial));
        let read = Rc::clone(&cell);
        Self::new(
            move || read.borrow().clone(),
            move |value| *cell.borrow_mut() = value,
        )
    }

    /// A read-only binding. Writes are discarded.
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone(), |_| {})
    }

    pub fn get(&self) -> T {
        (self.get)()
    }

    pub fn set(&self, value: T) {
        (self.set)(value)
    }
}

impl<W: 'static> Binding<Option<W>> {
    /// Boolean view over an optional: `true` iff the optional is present.
    ///
    /// Writing `false` clears the optional. Writing `true` cannot restore a
    /// value that no longer exists, so it is ignored.
    pub fn mapped_to_bool(self) -> Binding<bool> {
        let read = self.clone();
        Binding::new(
            move || read.get().is_some(),
            move |presented| {
                if presented {
                    debug!("ignoring write of `true` to optional-backed binding");
                    return;
                }
                self.set(None);
            },
        )
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.get()).finish()
    }
}
