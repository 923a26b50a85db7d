use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type DynClock = Arc<dyn Clock + Send + Sync>;

/// Time source seam. The business-hours gate must be checked against a
/// fixed civil time zone regardless of the server's own locale, so the
/// current instant is injected rather than read ambiently.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
