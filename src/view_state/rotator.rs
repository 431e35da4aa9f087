use std::{sync::Arc, time::Duration};

use thiserror::Error;

pub const ROTATION_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotatorError {
    #[error("text rotator needs at least one entry")]
    Empty,
    #[error("rotation interval must be greater than zero")]
    ZeroInterval,
}

/// Cycles through a fixed list of headlines.
#[derive(Debug, Clone)]
pub struct TextRotator {
    texts: Arc<[String]>,
    index: usize,
    interval: Duration,
    pending: Duration,
}

impl TextRotator {
    pub fn new(texts: Vec<String>) -> Result<Self, RotatorError> {
        Self::with_interval(texts, ROTATION_INTERVAL)
    }

    pub fn with_interval(texts: Vec<String>, interval: Duration) -> Result<Self, RotatorError> {
        if texts.is_empty() {
            return Err(RotatorError::Empty);
        }
        if interval.is_zero() {
            return Err(RotatorError::ZeroInterval);
        }
        Ok(Self {
            texts: texts.into(),
            index: 0,
            interval,
            pending: Duration::ZERO,
        })
    }

    /// A rotator that never changes text.
    pub fn single(text: String) -> Self {
        Self {
            texts: Arc::from([text]),
            index: 0,
            interval: ROTATION_INTERVAL,
            pending: Duration::ZERO,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn current(&self) -> &str {
        &self.texts[self.index]
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn tick(&mut self) -> usize {
        self.index = (self.index + 1) % self.texts.len();
        self.index
    }

    /// Advances a virtual clock, ticking once per whole interval elapsed.
    pub fn elapse(&mut self, elapsed: Duration) -> usize {
        self.pending += elapsed;
        while self.pending >= self.interval {
            self.pending -= self.interval;
            self.tick();
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotator() -> TextRotator {
        TextRotator::new(vec!["a".into(), "b".into(), "c".into()]).unwrap()
    }

    #[test]
    fn test_rejects_empty_list() {
        assert_eq!(TextRotator::new(vec![]).unwrap_err(), RotatorError::Empty);
        assert_eq!(
            TextRotator::with_interval(vec!["a".into()], Duration::ZERO).unwrap_err(),
            RotatorError::ZeroInterval
        );
    }

    #[test]
    fn test_tick_wraps() {
        let mut r = rotator();
        assert_eq!(r.current(), "a");
        assert_eq!(r.tick(), 1);
        assert_eq!(r.tick(), 2);
        assert_eq!(r.tick(), 0);
        assert_eq!(r.current(), "a");
    }

    #[test]
    fn test_virtual_clock_only_ticks_on_whole_intervals() {
        let mut r = rotator();
        assert_eq!(r.elapse(Duration::from_millis(2999)), 0);
        assert_eq!(r.elapse(Duration::from_millis(1)), 1);
        assert_eq!(r.elapse(Duration::from_millis(6500)), 0);
        assert_eq!(r.elapse(Duration::from_millis(2500)), 1);
    }

    #[test]
    fn test_single_entry_stays_put() {
        let mut r = TextRotator::new(vec!["only".into()]).unwrap();
        r.tick();
        r.tick();
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn test_single_never_advances() {
        let mut r = TextRotator::single("fallback".into());
        assert_eq!(r.elapse(Duration::from_secs(30)), 0);
        assert_eq!(r.current(), "fallback");
        assert_eq!(r.interval(), ROTATION_INTERVAL);
    }
}
