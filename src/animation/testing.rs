//! Deterministic timers for driving runners in tests.

use std::{cell::RefCell, rc::Rc, time::Duration};

use super::Scheduler;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Behaviour {
    Normal,
    IgnoreCancel,
    Refuse,
}

struct Task {
    due: Duration,
    id: u64,
    run: Box<dyn FnOnce()>,
}

struct Clock {
    now: Duration,
    next_id: u64,
    tasks: Vec<Task>,
    behaviour: Behaviour,
}

/// Virtual clock: nothing runs until the test advances time.
#[derive(Clone)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::with_behaviour(Behaviour::Normal)
    }

    /// Cancellation is a no-op, as with a host that lost the handle.
    pub fn ignoring_cancel() -> Self {
        Self::with_behaviour(Behaviour::IgnoreCancel)
    }

    /// Every `schedule` call fails.
    pub fn refusing() -> Self {
        Self::with_behaviour(Behaviour::Refuse)
    }

    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            clock: Rc::new(RefCell::new(Clock {
                now: Duration::ZERO,
                next_id: 0,
                tasks: Vec::new(),
                behaviour,
            })),
        }
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    /// Delay of the earliest pending task relative to now.
    pub fn next_delay(&self) -> Option<Duration> {
        let clock = self.clock.borrow();
        clock
            .tasks
            .iter()
            .map(|t| t.due)
            .min()
            .map(|due| due.saturating_sub(clock.now))
    }

    /// Jumps to the earliest pending task and runs it.
    pub fn run_next(&self) -> bool {
        let task = {
            let mut clock = self.clock.borrow_mut();
            let Some(pos) = Self::earliest(&clock.tasks) else {
                return false;
            };
            let task = clock.tasks.remove(pos);
            clock.now = clock.now.max(task.due);
            task
        };
        (task.run)();
        true
    }

    /// Runs every task that falls due within `by`, including ones scheduled
    /// along the way.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let task = {
                let mut clock = self.clock.borrow_mut();
                let pos = match Self::earliest(&clock.tasks) {
                    Some(pos) if clock.tasks[pos].due <= target => pos,
                    _ => break,
                };
                let task = clock.tasks.remove(pos);
                clock.now = task.due;
                task
            };
            (task.run)();
        }
        self.clock.borrow_mut().now = target;
    }

    fn earliest(tasks: &[Task]) -> Option<usize> {
        tasks
            .iter()
            .enumerate()
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<u64> {
        let mut clock = self.clock.borrow_mut();
        if clock.behaviour == Behaviour::Refuse {
            return None;
        }
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.tasks.push(Task { due, id, run: task });
        Some(id)
    }

    fn cancel(&self, handle: u64) {
        let mut clock = self.clock.borrow_mut();
        if clock.behaviour == Behaviour::IgnoreCancel {
            return;
        }
        clock.tasks.retain(|t| t.id != handle);
    }
}

/// Collects every string an observer receives.
#[derive(Clone, Default)]
pub struct Recorder {
    seen: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observer(&self) -> impl Fn(&str) + 'static {
        let seen = Rc::clone(&self.seen);
        move |text: &str| seen.borrow_mut().push(text.to_string())
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.seen.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }
}
