pub mod counter;
pub mod tagline;
pub mod typewriter;

#[cfg(test)]
pub(crate) mod testing;

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
    time::Duration,
};

/// Timer facility provided by the host (browser timeouts, a test clock, ...).
pub trait Scheduler {
    type Handle;

    /// Arms a one-shot timer. `None` means no timer could be armed.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// Result of advancing an animation by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// New display string, only when it changed.
    pub text: Option<String>,
    /// Delay before the next tick, `None` once the animation is done.
    pub next: Option<Duration>,
}

pub trait Animation {
    fn first_delay(&self) -> Duration;
    fn tick(&mut self) -> Frame;
}

pub type Observer = Rc<dyn Fn(&str)>;

struct Shared<S: Scheduler, A> {
    scheduler: S,
    observer: Observer,
    animation: RefCell<Option<A>>,
    pending: RefCell<Option<S::Handle>>,
    // bumped on every start/stop so stale timers become no-ops
    generation: Cell<u64>,
    running: Cell<bool>,
}

/// Drives an [`Animation`] with at most one outstanding timer.
///
/// The next tick is only ever scheduled from the completion of the previous
/// one, so the animation is mutated strictly sequentially. The observer is
/// invoked with no internal borrow held and may call [`Runner::stop`] or
/// [`Runner::start`] re-entrantly.
pub struct Runner<S: Scheduler, A> {
    shared: Rc<Shared<S, A>>,
}

impl<S: Scheduler, A> Clone for Runner<S, A> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S, A> Runner<S, A>
where
    S: Scheduler + 'static,
    A: Animation + 'static,
{
    pub fn new(scheduler: S, observer: impl Fn(&str) + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                observer: Rc::new(observer),
                animation: RefCell::new(None),
                pending: RefCell::new(None),
                generation: Cell::new(0),
                running: Cell::new(false),
            }),
        }
    }

    /// Replaces the current animation and schedules its first tick.
    pub fn start(&self, animation: A) {
        self.stop();
        let delay = animation.first_delay();
        *self.shared.animation.borrow_mut() = Some(animation);
        self.shared.running.set(true);
        let generation = self.shared.generation.get();
        schedule(&self.shared, delay, generation);
    }

    /// Cancels the pending timer. The animation keeps its last state.
    pub fn stop(&self) {
        let shared = &self.shared;
        shared.generation.set(shared.generation.get().wrapping_add(1));
        shared.running.set(false);
        let pending = shared.pending.borrow_mut().take();
        if let Some(handle) = pending {
            shared.scheduler.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }

    /// Runs `f` against the current animation, if one was ever started.
    pub fn with_animation<R>(&self, f: impl FnOnce(&A) -> R) -> Option<R> {
        self.shared.animation.borrow().as_ref().map(f)
    }

    /// Removes the animation, leaving the runner stopped and empty.
    pub fn take_animation(&self) -> Option<A> {
        self.stop();
        self.shared.animation.borrow_mut().take()
    }

    pub(crate) fn notify(&self, text: &str) {
        (self.shared.observer)(text);
    }
}

fn schedule<S, A>(shared: &Rc<Shared<S, A>>, delay: Duration, generation: u64)
where
    S: Scheduler + 'static,
    A: Animation + 'static,
{
    let weak: Weak<Shared<S, A>> = Rc::downgrade(shared);
    let task = Box::new(move || {
        if let Some(shared) = weak.upgrade() {
            fire(&shared, generation);
        }
    });
    match shared.scheduler.schedule(delay, task) {
        Some(handle) => {
            *shared.pending.borrow_mut() = Some(handle);
        }
        None => {
            log::error!("could not arm animation timer, animation halted");
            shared.running.set(false);
        }
    }
}

fn fire<S, A>(shared: &Rc<Shared<S, A>>, generation: u64)
where
    S: Scheduler + 'static,
    A: Animation + 'static,
{
    if shared.generation.get() != generation {
        return;
    }
    shared.pending.borrow_mut().take();

    let frame = match shared.animation.borrow_mut().as_mut() {
        Some(animation) => animation.tick(),
        None => return,
    };

    if let Some(text) = &frame.text {
        let observer = Rc::clone(&shared.observer);
        observer(text);
    }

    // the observer may have stopped or restarted us
    if shared.generation.get() != generation {
        return;
    }
    match frame.next {
        Some(delay) => schedule(shared, delay, generation),
        None => shared.running.set(false),
    }
}
