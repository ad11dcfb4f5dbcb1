use time::{Date, OffsetDateTime};
use time_tz::{ToTimezone, timezones};

/// Source of the current calendar date.
pub trait Clock {
    fn today(&self) -> Date;

    /// Monday-based weekday index of [`Clock::today`].
    fn today_index(&self) -> usize {
        self.today().weekday().number_days_from_monday() as usize
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}

/// Wall clock, optionally shifted into an IANA timezone.
#[derive(Debug, Clone, Default)]
pub struct SystemClock {
    timezone: Option<String>,
}

impl SystemClock {
    pub fn new(timezone: Option<String>) -> Self {
        if let Some(tz) = timezone.as_deref() {
            if timezones::get_by_name(tz).is_none() {
                tracing::warn!("unknown timezone {tz}, falling back to UTC");
            }
        }

        Self { timezone }
    }

    pub fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();

        match self.timezone.as_deref().and_then(timezones::get_by_name) {
            Some(tz) => now.to_timezone(tz),
            None => now,
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        self.now().date()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
