pub mod clock_utils;
pub mod date_utils;

pub use clock_utils::{ClockTime, parse_clock_time, worked_hours};
pub use date_utils::{
    DateUtilsError, decode_serial_date, iso_weekday_number, month_dates, parse_iso_date,
};
