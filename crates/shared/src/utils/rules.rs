use chrono::{DateTime, FixedOffset, Timelike, Utc};
use std::ops::Range;

/// Whole-currency-unit minimum for a withdrawal request.
pub const MIN_WITHDRAWAL: f64 = 200.0;

/// Flat withholding rate applied to every withdrawal.
pub const TAX_RATE: f64 = 0.18;

/// Half-open window of civil hours during which withdrawals are processed.
pub const BUSINESS_HOURS: Range<u32> = 9..17;

/// East Africa Time, UTC+3, no daylight saving.
pub fn east_africa_offset() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).expect("UTC+3 is a valid offset")
}

/// Business-hours gate as a pure function of the instant and a fixed
/// offset, so it is independent of the server's own time zone.
pub fn within_business_hours(instant: DateTime<Utc>, offset: FixedOffset) -> bool {
    let hour = instant.with_timezone(&offset).hour();
    BUSINESS_HOURS.contains(&hour)
}

/// Net payout after the flat tax, truncated to a whole currency unit.
/// The fractional remainder is discarded, not retained anywhere.
pub fn net_after_tax(gross: f64) -> f64 {
    (gross - gross * TAX_RATE).floor()
}
