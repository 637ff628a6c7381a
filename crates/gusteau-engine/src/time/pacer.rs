use std::time::{Duration, Instant};

/// Rate used when a configured rate is unusable.
pub const DEFAULT_RATE_HZ: f32 = 24.0;

/// Fixed-rate wake-up schedule.
///
/// Tracks when the loop last ran and derives the next deadline from it. The
/// loop is free to run early (e.g. on input); `mark` restarts the interval.
#[derive(Debug, Clone)]
pub struct Pacer {
    interval: Duration,
    last: Option<Instant>,
}

impl Pacer {
    /// Creates a pacer firing `rate_hz` times per second.
    ///
    /// Zero, negative or non-finite rates fall back to [`DEFAULT_RATE_HZ`].
    pub fn new(rate_hz: f32) -> Self {
        let rate = if rate_hz.is_finite() && rate_hz > 0.0 {
            rate_hz
        } else {
            log::warn!("invalid pacing rate {rate_hz}, using {DEFAULT_RATE_HZ} Hz");
            DEFAULT_RATE_HZ
        };

        Self {
            interval: Duration::from_secs_f32(1.0 / rate),
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Deadline for the next run. A pacer that never ran is due at `now`.
    pub fn next_deadline(&self, now: Instant) -> Instant {
        self.last.map_or(now, |last| last + self.interval)
    }

    /// Deadline to hand to the event loop: the next deadline, but never
    /// earlier than `now`.
    ///
    /// Runs that were requested but never delivered do not leave a deadline
    /// in the past, provided the caller marks each wake-up.
    pub fn wait_deadline(&self, now: Instant) -> Instant {
        self.next_deadline(now).max(now)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline(now)
    }

    /// Records a run at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_HZ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_matches_rate() {
        let p = Pacer::new(24.0);
        let expected = Duration::from_secs_f32(1.0 / 24.0);
        assert_eq!(p.interval(), expected);
    }

    #[test]
    fn invalid_rates_fall_back() {
        let default = Pacer::default().interval();
        assert_eq!(Pacer::new(0.0).interval(), default);
        assert_eq!(Pacer::new(-5.0).interval(), default);
        assert_eq!(Pacer::new(f32::NAN).interval(), default);
        assert_eq!(Pacer::new(f32::INFINITY).interval(), default);
    }

    #[test]
    fn fresh_pacer_is_due() {
        let now = Instant::now();
        assert!(Pacer::new(10.0).is_due(now));
    }

    #[test]
    fn deadline_follows_last_mark() {
        let t0 = Instant::now();
        let mut p = Pacer::new(10.0);
        p.mark(t0);

        assert_eq!(p.next_deadline(t0), t0 + p.interval());
        assert!(!p.is_due(t0 + Duration::from_millis(50)));
        assert!(p.is_due(t0 + p.interval()));
    }

    #[test]
    fn wait_deadline_never_in_the_past() {
        let t0 = Instant::now();
        let mut p = Pacer::new(24.0);
        p.mark(t0);

        let late = t0 + p.interval() * 10;
        assert_eq!(p.wait_deadline(late), late);
        assert_eq!(p.wait_deadline(t0), t0 + p.interval());
    }

    #[test]
    fn undelivered_runs_still_wait_a_full_interval() {
        let t0 = Instant::now();
        let mut p = Pacer::new(24.0);
        p.mark(t0);

        // Wake-ups keep happening but no run is ever delivered; each wake-up
        // is marked, so consecutive deadlines stay one interval apart.
        let mut now = t0 + p.interval() * 10;
        for _ in 0..5 {
            let deadline = p.wait_deadline(now);
            assert!(deadline >= now);
            now = deadline;
            assert!(p.is_due(now));
            p.mark(now);
            assert_eq!(p.wait_deadline(now), now + p.interval());
        }
    }
}
