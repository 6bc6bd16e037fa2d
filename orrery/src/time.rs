//! Wall-clock to simulated-minute conversion for host loops

use std::time::{Duration, Instant};

/// Milliseconds of wall-clock time per simulated minute
pub const MINUTES_TO_MILLISECONDS: f64 = 60_000.0;

/// Convert a wall-clock duration into simulated minutes
pub fn duration_to_minutes(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0 / MINUTES_TO_MILLISECONDS
}

/// Frame clock measuring the simulated minutes between ticks
///
/// Backed by a monotonic clock, so the elapsed value handed to the update
/// system is never negative.
#[derive(Debug)]
pub struct SimClock {
    last: Instant,
}

impl SimClock {
    /// Create a clock whose first tick measures from now
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Simulated minutes elapsed since the previous tick (or construction)
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        duration_to_minutes(elapsed)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_to_minutes() {
        assert_eq!(duration_to_minutes(Duration::from_secs(60)), 1.0);
        assert_eq!(duration_to_minutes(Duration::from_millis(16)), 16.0 / 60_000.0);
        assert_eq!(duration_to_minutes(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_tick_is_non_negative() {
        let mut clock = SimClock::new();
        for _ in 0..3 {
            assert!(clock.tick() >= 0.0);
        }
    }
}
