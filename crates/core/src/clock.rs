use chrono::{Local, NaiveDateTime};

/// Source of the current wall-clock time.
///
/// Availability math never reads the system clock itself; callers resolve
/// "now" once through this trait and pass it down, keeping the booking cutoff
/// logic deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock reading the local system time. Salon operating hours are
/// naive local times, so "now" is taken in the same frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
