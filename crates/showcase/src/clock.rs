//! Clock capability for render-time timestamps

use time::OffsetDateTime;

/// Source of the current time, injected into the renderer so the footer
/// year can be pinned in tests instead of tracking the wall clock.
pub trait Clock {
    fn now_utc(&self) -> OffsetDateTime;

    /// Calendar year at the current instant
    fn year(&self) -> i32 {
        self.now_utc().year()
    }
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock frozen at a fixed instant, for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now_utc(&self) -> OffsetDateTime {
        self.0
    }
}
