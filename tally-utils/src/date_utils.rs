use thiserror::Error;
use time::macros::format_description;
use time::{Date, Duration, Month};

#[derive(Debug, Error)]
pub enum DateUtilsError {
    #[error("Invalid date: {0}")]
    DateError(#[from] time::error::ComponentRange),
}

/// ISO weekday number: Monday is 1 through Sunday is 7.
///
/// Fixed numbering, independent of locale and timezone.  Day classification
/// is sensitive to this, so it must never follow platform conventions.
pub fn iso_weekday_number(date: Date) -> u8 {
    date.weekday().number_from_monday()
}

/// Parse a trimmed `YYYY-MM-DD` token.  Anything else is `None`.
pub fn parse_iso_date(token: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(token.trim(), &format).ok()
}

/// Decode a spreadsheet day serial in the 1900 date system.
///
/// Serial 1 is 1900-01-01.  The 1900 system counts a fictitious 1900-02-29
/// (Lotus treated 1900 as a leap year), so serials from 61 on are shifted
/// down one day.  Serial 60 itself, the day which never happened, maps to
/// 1900-02-28.  The fraction of a serial carries the time of day and is
/// discarded here.
pub fn decode_serial_date(serial: f64) -> Option<Date> {
    if !serial.is_finite() {
        return None;
    }
    let serial = serial.floor() as i64;
    if serial <= 0 {
        return None;
    }
    let day_offset = if serial < 60 { serial } else { serial - 1 };
    let base = Date::from_calendar_date(1899, Month::December, 31).ok()?;
    base.checked_add(Duration::days(day_offset))
}

/// Every date of the given month in ascending order.
///
/// Errors only on impossible calendar coordinates such as month 0 or 13.
pub fn month_dates(year: i32, month: u8) -> Result<Vec<Date>, DateUtilsError> {
    let month = Month::try_from(month)?;
    let last_day = month.length(year);
    (1..=last_day)
        .map(|day| Ok(Date::from_calendar_date(year, month, day)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_iso_weekday_number() {
        assert_eq!(iso_weekday_number(date!(2025 - 09 - 01)), 1); // Monday
        assert_eq!(iso_weekday_number(date!(2025 - 09 - 06)), 6); // Saturday
        assert_eq!(iso_weekday_number(date!(2025 - 09 - 07)), 7); // Sunday
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2025-09-03"), Some(date!(2025 - 09 - 03)));
        assert_eq!(parse_iso_date("  2025-01-31 "), Some(date!(2025 - 01 - 31)));
        assert_eq!(parse_iso_date("2025-02-30"), None);
        assert_eq!(parse_iso_date("03/09/2025"), None);
        assert_eq!(parse_iso_date("not a date"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_decode_serial_date_around_leap_quirk() {
        assert_eq!(decode_serial_date(1.0), Some(date!(1900 - 01 - 01)));
        assert_eq!(decode_serial_date(59.0), Some(date!(1900 - 02 - 28)));
        // The fictitious 1900-02-29 collapses onto the 28th.
        assert_eq!(decode_serial_date(60.0), Some(date!(1900 - 02 - 28)));
        assert_eq!(decode_serial_date(61.0), Some(date!(1900 - 03 - 01)));
    }

    #[test]
    fn test_decode_serial_date_modern_values() {
        assert_eq!(decode_serial_date(36526.0), Some(date!(2000 - 01 - 01)));
        assert_eq!(decode_serial_date(45292.0), Some(date!(2024 - 01 - 01)));
        assert_eq!(decode_serial_date(45351.0), Some(date!(2024 - 02 - 29)));
    }

    #[test]
    fn test_decode_serial_date_discards_time_fraction() {
        assert_eq!(decode_serial_date(45292.75), Some(date!(2024 - 01 - 01)));
    }

    #[test]
    fn test_decode_serial_date_rejects_unusable_values() {
        assert_eq!(decode_serial_date(0.0), None);
        assert_eq!(decode_serial_date(-3.0), None);
        assert_eq!(decode_serial_date(f64::NAN), None);
        assert_eq!(decode_serial_date(f64::INFINITY), None);
    }

    #[test]
    fn test_month_dates_is_dense_and_ascending() {
        let dates = month_dates(2025, 9).unwrap();
        assert_eq!(dates.len(), 30);
        assert_eq!(dates.first(), Some(&date!(2025 - 09 - 01)));
        assert_eq!(dates.last(), Some(&date!(2025 - 09 - 30)));
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_month_dates_leap_february() {
        assert_eq!(month_dates(2024, 2).unwrap().len(), 29);
        assert_eq!(month_dates(2025, 2).unwrap().len(), 28);
    }

    #[test]
    fn test_month_dates_invalid_month() {
        assert!(month_dates(2025, 0).is_err());
        assert!(month_dates(2025, 13).is_err());
    }
}
