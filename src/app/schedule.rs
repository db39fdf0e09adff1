use std::time::Duration;

use leptos::prelude::*;

use crate::animation::Scheduler;

/// Browser timeouts through `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(task, delay)
            .inspect_err(|e| log::error!("setTimeout failed: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}
