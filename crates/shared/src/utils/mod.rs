mod clock;
mod logs;
mod parse_amount;
mod rules;
mod shutdown;

pub use self::clock::SystemClock;
pub use self::logs::Logger;
pub use self::parse_amount::deserialize_lenient_amount;
pub use self::rules::{
    BUSINESS_HOURS, MIN_WITHDRAWAL, TAX_RATE, east_africa_offset, net_after_tax,
    within_business_hours,
};
pub use self::shutdown::shutdown_signal;
