use std::time::Duration;

pub const LOADING_TICK: Duration = Duration::from_millis(40);
pub const COMPLETION_HOLD: Duration = Duration::from_millis(400);

const STAGES: [(u8, &str); 4] = [
    (0, "Importing footage"),
    (35, "Cutting the timeline"),
    (70, "Color grading"),
    (95, "Rendering"),
];

/// Time-driven progress for the loading screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LoadingProgress {
    total: Duration,
    elapsed: Duration,
    completion_taken: bool,
}

impl LoadingProgress {
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            elapsed: Duration::ZERO,
            completion_taken: false,
        }
    }

    pub fn advance(&mut self, step: Duration) -> u8 {
        self.elapsed = self.elapsed.saturating_add(step).min(self.total);
        self.percent()
    }

    pub fn percent(&self) -> u8 {
        if self.total.is_zero() {
            return 100;
        }

        let ratio = self.elapsed.as_secs_f64() / self.total.as_secs_f64();
        (ratio * 100.0).floor().clamp(0.0, 100.0) as u8
    }

    pub fn is_full(&self) -> bool {
        self.elapsed >= self.total
    }

    /// True exactly once, on the first call after progress is full.
    pub fn take_completion(&mut self) -> bool {
        if !self.is_full() || self.completion_taken {
            return false;
        }

        self.completion_taken = true;
        true
    }

    pub fn stage_label(&self) -> &'static str {
        let percent = self.percent();
        STAGES
            .iter()
            .rev()
            .find(|(threshold, _)| percent >= *threshold)
            .map(|(_, label)| *label)
            .unwrap_or(STAGES[0].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_monotonic_and_capped() {
        let mut progress = LoadingProgress::new(Duration::from_millis(1_000));
        let mut last = progress.percent();

        for _ in 0..60 {
            let next = progress.advance(LOADING_TICK);
            assert!(next >= last);
            assert!(next <= 100);
            last = next;
        }

        assert_eq!(last, 100);
        assert!(progress.is_full());
    }

    #[test]
    fn completion_is_reported_once() {
        let mut progress = LoadingProgress::new(Duration::from_millis(200));

        assert!(!progress.take_completion());
        progress.advance(Duration::from_millis(500));
        assert!(progress.take_completion());
        assert!(!progress.take_completion());
    }

    #[test]
    fn zero_duration_is_immediately_full() {
        let mut progress = LoadingProgress::new(Duration::ZERO);

        assert_eq!(progress.percent(), 100);
        assert!(progress.take_completion());
    }

    #[test]
    fn stage_label_follows_progress() {
        let mut progress = LoadingProgress::new(Duration::from_millis(1_000));
        assert_eq!(progress.stage_label(), "Importing footage");

        progress.advance(Duration::from_millis(500));
        assert_eq!(progress.stage_label(), "Cutting the timeline");

        progress.advance(Duration::from_millis(500));
        assert_eq!(progress.stage_label(), "Rendering");
    }
}
