//! Implements Clock with the local system time.

use crate::ports::Clock;
use chrono::{DateTime, Local};

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
