//! Unit tests for the task domain and services.


use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Mutex, PoisonError};

/// Clock whose time only moves when a test says so.
#[derive(Debug)]
pub(super) struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub(super) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let now = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .expect("valid test timestamp");
        Self {
            now: Mutex::new(now),
        }
    }

    pub(super) fn set(&self, year: i32, month: u32, day: u32, hour: u32, minute: u32) {
        let next = Self::at(year, month, day, hour, minute).utc();
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
