use std::time::Duration;

use super::{Animation, Frame};

const FRAME: Duration = Duration::from_millis(16);

pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Counts a number up from zero with an ease-out curve.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: f64,
    duration: Duration,
    decimals: usize,
    suffix: String,
    frame: Duration,
    elapsed: Duration,
}

impl CountUp {
    pub fn new(target: f64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            decimals: 0,
            suffix: String::new(),
            frame: FRAME,
            elapsed: Duration::ZERO,
        }
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn frame(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }

    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value(&self) -> f64 {
        if self.progress() >= 1.0 {
            self.target
        } else {
            ease_out_quart(self.progress()) * self.target
        }
    }

    pub fn text(&self) -> String {
        format!("{:.*}{}", self.decimals, self.value(), self.suffix)
    }
}

impl Animation for CountUp {
    fn first_delay(&self) -> Duration {
        self.frame
    }

    fn tick(&mut self) -> Frame {
        self.elapsed = (self.elapsed + self.frame).min(self.duration);
        Frame {
            text: Some(self.text()),
            next: (self.progress() < 1.0).then_some(self.frame),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{
        testing::{ManualScheduler, Recorder},
        Runner,
    };

    #[test]
    fn test_ease_out_quart_bounds() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(-3.0), 0.0);
        assert_eq!(ease_out_quart(7.0), 1.0);
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_counts_up_and_lands_on_target() {
        let clock = ManualScheduler::new();
        let recorder = Recorder::new();
        let runner = Runner::new(clock.clone(), recorder.observer());

        runner.start(CountUp::new(95.0, Duration::from_millis(160)).suffix("%"));
        clock.advance(Duration::from_secs(1));

        let seen = recorder.seen();
        assert_eq!(seen.len(), 10);
        assert_eq!(seen.last().map(String::as_str), Some("95%"));
        let values = seen
            .iter()
            .map(|s| s.trim_end_matches('%').parse::<f64>().unwrap())
            .collect::<Vec<_>>();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(!runner.is_running());
    }

    #[test]
    fn test_decimals() {
        let mut count = CountUp::new(8.3, Duration::from_millis(32)).decimals(1).suffix("K+");
        count.tick();
        let last = count.tick();
        assert_eq!(last.text.as_deref(), Some("8.3K+"));
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut count = CountUp::new(15.0, Duration::ZERO);
        let frame = count.tick();
        assert_eq!(frame.text.as_deref(), Some("15"));
        assert_eq!(frame.next, None);
    }
}
