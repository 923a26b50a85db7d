use crate::abstract_trait::clock::Clock;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
