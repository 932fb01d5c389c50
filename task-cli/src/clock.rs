use chrono::{Local, NaiveDateTime, Timelike};
use mockall::automock;

/// Source of "now" timestamps, injectable so tests can pin time.
#[automock]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the local system time, truncated to whole seconds to
/// match the precision of persisted timestamps.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_truncates_to_whole_seconds() {
        let now = SystemClock.now();

        assert_eq!(now.nanosecond(), 0);
    }

    #[test]
    fn mock_clock_returns_programmed_time() {
        let expected = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let mut clock = MockClock::new();
        clock.expect_now().returning(move || expected);

        assert_eq!(clock.now(), expected);
    }
}
