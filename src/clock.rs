use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// Source of "now" for the handlers. Injected through `AppState` so tests can
/// control timestamps instead of racing the wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that advances by a fixed step on every reading, so
/// consecutive readings are strictly increasing.
pub struct ManualClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl ManualClock {
    pub fn starting_at(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + self.step;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn manual_clock_readings_strictly_increase() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::starting_at(start, Duration::seconds(1));

        let first = clock.now();
        let second = clock.now();
        let third = clock.now();

        assert_eq!(first, start);
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
