//! One-shot deferred tasks that run when a view attaches to the live document.
//!
//! The link operation is invoked on the server before the browser has
//! necessarily rendered anything, so its script cannot run right away. Tasks
//! queue here until the framework reports the view attached, then run exactly
//! once against that page.

use std::cell::RefCell;
use std::rc::Rc;

use crate::view::{AttachTask, BrowserPage};

enum State {
    Detached(Vec<AttachTask>),
    Attached(Rc<dyn BrowserPage>),
}

/// Queue of one-shot tasks waiting for the owning view to attach.
///
/// Tasks registered while detached run in registration order on `fire`. Tasks
/// registered after that run immediately against the attached page. Everything
/// is single-threaded cooperative scheduling; there is no cancellation, a
/// queued task cannot be revoked short of discarding the whole view.
pub struct AttachQueue {
    state: RefCell<State>,
}

impl AttachQueue {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State::Detached(Vec::new())),
        }
    }

    /// Register a task. Runs it on the spot when the view is already attached.
    pub fn enqueue(&self, task: AttachTask) {
        let page = match &mut *self.state.borrow_mut() {
            State::Detached(tasks) => {
                tasks.push(task);
                return;
            }
            State::Attached(page) => Rc::clone(page),
        };
        task(page.as_ref());
    }

    /// Mark the view attached and drain pending tasks in order.
    ///
    /// A second `fire` only replaces the remembered page; tasks never run twice.
    pub fn fire(&self, page: Rc<dyn BrowserPage>) {
        let drained = match std::mem::replace(
            &mut *self.state.borrow_mut(),
            State::Attached(Rc::clone(&page)),
        ) {
            State::Detached(tasks) => tasks,
            State::Attached(_) => Vec::new(),
        };
        for task in drained {
            task(page.as_ref());
        }
    }

    /// Number of tasks still waiting for attach.
    pub fn pending(&self) -> usize {
        match &*self.state.borrow() {
            State::Detached(tasks) => tasks.len(),
            State::Attached(_) => 0,
        }
    }
}

impl Default for AttachQueue {
    fn default() -> Self {
        Self::new()
    }
}
