//! Work scheduled during a render that must run after it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// Post-render hook queue, drained at the top of each event-loop iteration.
#[derive(Clone, Default)]
pub struct DeferredQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Run everything queued so far. Tasks scheduled while running wait for
    /// the next call. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let pending = std::mem::take(&mut *self.tasks.borrow_mut());
        let count = pending.len();
        for task in pending {
            task();
        }
        count
    }
}
