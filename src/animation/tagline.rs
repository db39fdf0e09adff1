use super::{
    typewriter::{AnimatorState, PhraseList, TaglineConfig, TaglineError, Typewriter},
    Runner, Scheduler,
};

/// Rotating tagline: a [`Typewriter`] driven by a host [`Scheduler`].
///
/// The observer receives the displayed text on every change. `stop` leaves
/// the last state in place for inspection; a later `start` resumes at the same
/// phrase but types it again from the beginning.
pub struct TaglineAnimator<S: Scheduler> {
    runner: Runner<S, Typewriter>,
}

impl<S: Scheduler> Clone for TaglineAnimator<S> {
    fn clone(&self) -> Self {
        Self {
            runner: self.runner.clone(),
        }
    }
}

impl<S: Scheduler + 'static> TaglineAnimator<S> {
    pub fn new(scheduler: S, observer: impl Fn(&str) + 'static) -> Self {
        Self {
            runner: Runner::new(scheduler, observer),
        }
    }

    pub fn start<I, P>(&self, phrases: I, config: TaglineConfig) -> Result<(), TaglineError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let phrases = PhraseList::new(phrases).inspect_err(|e| {
            log::warn!("tagline animator not started: {e}");
        })?;
        self.start_with(phrases, config);
        Ok(())
    }

    /// Starts from an already validated list, so it cannot fail.
    pub fn start_with(&self, phrases: PhraseList, config: TaglineConfig) {
        self.runner.stop();
        let previous = self.runner.take_animation();
        let (index, was_showing) = previous
            .as_ref()
            .map(|tw| (tw.state().phrase_index, !tw.state().displayed.is_empty()))
            .unwrap_or((0, false));

        let typewriter = Typewriter::starting_at(phrases, config, index);
        log::debug!(
            "tagline animator starting at phrase {} of {}",
            typewriter.state().phrase_index,
            typewriter.phrases().len()
        );
        self.runner.start(typewriter);
        if was_showing {
            self.runner.notify("");
        }
    }

    pub fn stop(&self) {
        if self.runner.is_running() {
            log::debug!("tagline animator stopped");
        }
        self.runner.stop();
    }

    pub fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    /// Snapshot of the current state, `None` before the first successful start.
    pub fn state(&self) -> Option<AnimatorState> {
        self.runner.with_animation(|tw| tw.state().clone())
    }
}
