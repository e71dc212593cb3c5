use chrono::{NaiveDate, NaiveDateTime};

use crate::ports::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// 2025-06-01 09:30:15
    pub fn morning() -> Self {
        Self(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(9, 30, 15).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
