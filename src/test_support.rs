//! Test doubles for the DOM and timer seams.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::UiElement;
use crate::util::timer::Scheduler;

// =============================================================
// FakeElement
// =============================================================

#[derive(Default)]
struct FakeState {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    value: Option<String>,
    checked: bool,
}

/// In-memory element; clones share the same node, like DOM handles.
#[derive(Clone, Default)]
pub(crate) struct FakeElement {
    state: Rc<RefCell<FakeState>>,
}

impl FakeElement {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A form control holding `value`.
    pub(crate) fn field(value: &str) -> Self {
        let el = Self::new();
        el.set_value(value);
        el
    }

    pub(crate) fn with_attribute(self, name: &str, value: &str) -> Self {
        UiElement::set_attribute(&self, name, value);
        self
    }

    pub(crate) fn set_value(&self, value: &str) {
        self.state.borrow_mut().value = Some(value.to_owned());
    }

    pub(crate) fn set_checked(&self, checked: bool) {
        self.state.borrow_mut().checked = checked;
    }

    pub(crate) fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }
}

impl UiElement for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    fn set_class(&self, class: &str, on: bool) {
        let mut state = self.state.borrow_mut();
        state.classes.retain(|c| c != class);
        if on {
            state.classes.push(class.to_owned());
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&self, name: &str) {
        self.state.borrow_mut().attributes.remove(name);
    }

    fn value(&self) -> Option<String> {
        self.state.borrow().value.clone()
    }

    fn is_checked(&self) -> bool {
        self.state.borrow().checked
    }
}

// =============================================================
// ManualScheduler
// =============================================================

struct ManualTask {
    due_ms: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_seq: u64,
    tasks: Vec<ManualTask>,
}

/// Virtual clock; callbacks run only inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

pub(crate) struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
    armed: bool,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if self.armed {
            self.cancelled.set(true);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due_ms = clock.now_ms + u64::from(delay_ms);
        clock.tasks.push(ManualTask { due_ms, seq, cancelled: Rc::clone(&cancelled), run: task });
        ManualHandle { cancelled, armed: true }
    }

    fn detach(&self, mut handle: ManualHandle) {
        handle.armed = false;
    }
}

impl ManualScheduler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Live (not cancelled, not yet run) callbacks.
    pub(crate) fn pending(&self) -> usize {
        self.clock
            .borrow()
            .tasks
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }

    /// Move the clock forward, running due callbacks in order.
    pub(crate) fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                clock.tasks.retain(|t| !t.cancelled.get());
                let idx = clock
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.seq))
                    .map(|(i, _)| i);
                idx.map(|i| {
                    let task = clock.tasks.remove(i);
                    clock.now_ms = task.due_ms;
                    task
                })
            };
            let Some(task) = next else {
                break;
            };
            (task.run)();
        }
        self.clock.borrow_mut().now_ms = target;
    }
}
