//! Typewriter text rotation.
//!
//! Each phrase is typed one character at a time, held, deleted one character
//! at a time, and followed by a short gap before the next phrase starts:
//!
//! ```text
//! Typing -> Pausing -> Deleting -> Advancing -> Typing -> ...
//! ```
//!
//! The cycle has no terminal state. [`Typewriter`] is a plain state machine;
//! timing is left to whoever drives it (see [`super::Runner`]).

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Animation, Frame};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaglineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    EmptyPhraseList,
    EmptyPhrase { index: usize },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPhraseList => write!(f, "phrase list is empty"),
            Self::EmptyPhrase { index } => write!(f, "phrase {index} is empty"),
        }
    }
}

/// Non-empty, read-only list of non-empty phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList(Vec<String>);

impl PhraseList {
    pub fn new<I, P>(phrases: I) -> Result<Self, TaglineError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let phrases = phrases.into_iter().map(Into::into).collect::<Vec<String>>();
        if phrases.is_empty() {
            return Err(TaglineError::InvalidConfiguration(
                ConfigIssue::EmptyPhraseList,
            ));
        }
        if let Some(index) = phrases.iter().position(|p| p.is_empty()) {
            return Err(TaglineError::InvalidConfiguration(
                ConfigIssue::EmptyPhrase { index },
            ));
        }
        Ok(Self(phrases))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Delays in milliseconds. Missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaglineConfig {
    pub typing_delay_ms: u64,
    pub deleting_delay_ms: u64,
    pub pause_after_typed_ms: u64,
    pub pause_before_next_ms: u64,
}

impl Default for TaglineConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 100,
            deleting_delay_ms: 50,
            pause_after_typed_ms: 2500,
            pause_before_next_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Typing,
    Pausing,
    Deleting,
    Advancing,
}

impl Mode {
    pub fn next(self) -> Self {
        match self {
            Self::Typing => Self::Pausing,
            Self::Pausing => Self::Deleting,
            Self::Deleting => Self::Advancing,
            Self::Advancing => Self::Typing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimatorState {
    pub phrase_index: usize,
    /// Always a prefix of the current phrase.
    pub displayed: String,
    pub mode: Mode,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: PhraseList,
    config: TaglineConfig,
    state: AnimatorState,
}

impl Typewriter {
    pub fn new(phrases: PhraseList, config: TaglineConfig) -> Self {
        Self::starting_at(phrases, config, 0)
    }

    /// Fresh typing state at `phrase_index` (wrapped to the list length).
    pub fn starting_at(phrases: PhraseList, config: TaglineConfig, phrase_index: usize) -> Self {
        let phrase_index = phrase_index % phrases.len();
        Self {
            phrases,
            config,
            state: AnimatorState {
                phrase_index,
                displayed: String::new(),
                mode: Mode::Typing,
            },
        }
    }

    pub fn state(&self) -> &AnimatorState {
        &self.state
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    pub fn current_phrase(&self) -> &str {
        self.phrases.get(self.state.phrase_index)
    }

    /// Delay before the tick that handles the current mode.
    pub fn delay(&self) -> Duration {
        let ms = match self.state.mode {
            Mode::Typing => self.config.typing_delay_ms,
            Mode::Pausing => self.config.pause_after_typed_ms,
            Mode::Deleting => self.config.deleting_delay_ms,
            Mode::Advancing => self.config.pause_before_next_ms,
        };
        Duration::from_millis(ms)
    }

    /// Advances by one character or one phase. Returns whether the displayed
    /// text changed.
    pub fn step(&mut self) -> bool {
        match self.state.mode {
            Mode::Typing => {
                let phrase = self.phrases.get(self.state.phrase_index);
                let typed = self.state.displayed.len();
                if let Some(c) = phrase[typed..].chars().next() {
                    self.state.displayed.push(c);
                }
                if self.state.displayed.len() == phrase.len() {
                    self.state.mode = Mode::Pausing;
                }
                true
            }
            Mode::Pausing => {
                self.state.mode = Mode::Deleting;
                false
            }
            Mode::Deleting => {
                self.state.displayed.pop();
                if self.state.displayed.is_empty() {
                    self.state.mode = Mode::Advancing;
                }
                true
            }
            Mode::Advancing => {
                self.state.phrase_index = (self.state.phrase_index + 1) % self.phrases.len();
                self.state.mode = Mode::Typing;
                false
            }
        }
    }
}

impl Animation for Typewriter {
    fn first_delay(&self) -> Duration {
        self.delay()
    }

    fn tick(&mut self) -> Frame {
        let changed = self.step();
        Frame {
            text: changed.then(|| self.state.displayed.clone()),
            next: Some(self.delay()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taglines() -> PhraseList {
        PhraseList::new(["Full-Stack Developer", "Shopify Specialist", "ML Engineer"])
            .expect("taglines are valid")
    }

    fn run_until(tw: &mut Typewriter, mode: Mode) -> usize {
        let mut steps = 0;
        while tw.state().mode != mode {
            tw.step();
            steps += 1;
            assert!(steps < 10_000, "never reached {mode:?}");
        }
        steps
    }

    #[test]
    fn test_rejects_empty_list() {
        let err = PhraseList::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(
            err,
            TaglineError::InvalidConfiguration(ConfigIssue::EmptyPhraseList)
        );
    }

    #[test]
    fn test_rejects_empty_phrase() {
        let err = PhraseList::new(["", "ok"]).unwrap_err();
        assert_eq!(
            err,
            TaglineError::InvalidConfiguration(ConfigIssue::EmptyPhrase { index: 0 })
        );
        assert_eq!(
            err.to_string(),
            "invalid configuration: phrase 0 is empty"
        );
    }

    #[test]
    fn test_types_first_phrase_then_pauses() {
        let mut tw = Typewriter::new(taglines(), TaglineConfig::default());
        let steps = run_until(&mut tw, Mode::Pausing);
        assert_eq!(steps, "Full-Stack Developer".len());
        assert_eq!(tw.state().displayed, "Full-Stack Developer");
        assert_eq!(tw.delay(), Duration::from_millis(2500));
    }

    #[test]
    fn test_deletes_then_advances() {
        let mut tw = Typewriter::new(taglines(), TaglineConfig::default());
        run_until(&mut tw, Mode::Pausing);

        assert!(!tw.step());
        assert_eq!(tw.state().mode, Mode::Deleting);
        assert_eq!(tw.delay(), Duration::from_millis(50));

        run_until(&mut tw, Mode::Advancing);
        assert_eq!(tw.state().displayed, "");
        assert_eq!(tw.state().phrase_index, 0);
        assert_eq!(tw.delay(), Duration::from_millis(200));

        assert!(!tw.step());
        assert_eq!(tw.state().phrase_index, 1);
        assert_eq!(tw.state().mode, Mode::Typing);
        assert_eq!(tw.delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_mode_follows_fixed_cycle() {
        let mut tw = Typewriter::new(taglines(), TaglineConfig::default());
        let mut mode = tw.state().mode;
        for _ in 0..500 {
            tw.step();
            let now = tw.state().mode;
            assert!(now == mode || now == mode.next(), "{mode:?} -> {now:?}");
            mode = now;
        }
    }

    #[test]
    fn test_displayed_is_always_prefix() {
        let phrases = PhraseList::new(["héllo wörld", "日本語", "a"]).unwrap();
        let mut tw = Typewriter::new(phrases, TaglineConfig::default());
        for _ in 0..1000 {
            tw.step();
            assert!(tw.current_phrase().starts_with(&tw.state().displayed));
        }
    }

    #[test]
    fn test_visits_every_phrase_in_order() {
        let mut tw = Typewriter::new(taglines(), TaglineConfig::default());
        let mut visited = vec![tw.state().phrase_index];
        while visited.len() < 7 {
            let before = tw.state().phrase_index;
            tw.step();
            if tw.state().phrase_index != before {
                visited.push(tw.state().phrase_index);
            }
        }
        assert_eq!(visited, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_single_phrase_cycles() {
        let phrases = PhraseList::new(["Solo"]).unwrap();
        let mut tw = Typewriter::new(phrases, TaglineConfig::default());
        let mut shown = Vec::new();
        for _ in 0..2 {
            run_until(&mut tw, Mode::Pausing);
            shown.push(tw.state().displayed.clone());
            run_until(&mut tw, Mode::Advancing);
            shown.push(tw.state().displayed.clone());
            run_until(&mut tw, Mode::Typing);
            assert_eq!(tw.state().phrase_index, 0);
        }
        assert_eq!(shown, vec!["Solo", "", "Solo", ""]);
    }

    #[test]
    fn test_starting_at_wraps_index() {
        let tw = Typewriter::starting_at(taglines(), TaglineConfig::default(), 4);
        assert_eq!(tw.state().phrase_index, 1);
        assert_eq!(tw.state().displayed, "");
        assert_eq!(tw.current_phrase(), "Shopify Specialist");
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config: TaglineConfig =
            serde_json::from_str(r#"{ "typing_delay_ms": 80 }"#).unwrap();
        assert_eq!(config.typing_delay_ms, 80);
        assert_eq!(config.deleting_delay_ms, 50);
        assert_eq!(config.pause_after_typed_ms, 2500);
        assert_eq!(config.pause_before_next_ms, 200);
    }
}
