//! Date display and parsing.
//!
//! Trip dates are shown as `dd.MM.yyyy` in a given time zone. The same form
//! is accepted back from the user, either with dots or as the bare eight
//! digits `ddMMyyyy`.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::error::{Result, TripError};

/// Pattern used for every user-facing trip date.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Formats `timestamp` as `dd.MM.yyyy` in `time_zone`.
pub fn format_date(timestamp: Timestamp, time_zone: &TimeZone) -> String {
    timestamp
        .to_zoned(time_zone.clone())
        .strftime(DATE_FORMAT)
        .to_string()
}

/// A trip date shown in the system time zone.
pub struct LocalDate<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(*self.0, &TimeZone::system()))
    }
}

/// A full timestamp in the system time zone: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Inserts the separating dots into typed date digits.
///
/// Non-digits are dropped and at most eight digits are kept, so `"12"`
/// stays `"12"`, `"1203"` becomes `"12.03"` and `"12032023"` becomes
/// `"12.03.2023"`.
pub fn mask_date_digits(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).take(8).collect();
    let mut out = String::with_capacity(10);
    for (i, digit) in digits.iter().enumerate() {
        out.push(*digit);
        if (i == 1 || i == 3) && i < digits.len() - 1 {
            out.push('.');
        }
    }
    out
}

/// Parses a `dd.MM.yyyy` (or `ddMMyyyy`) date into the instant of local
/// midnight in `time_zone`.
///
/// # Errors
///
/// Returns `TripError::InvalidInput` naming `field` when the text is not a
/// valid calendar date.
pub fn parse_display_date(field: &str, text: &str, time_zone: &TimeZone) -> Result<Timestamp> {
    let text = text.trim();
    let normalized = if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        mask_date_digits(text)
    } else {
        text.to_string()
    };

    let date = Date::strptime(DATE_FORMAT, &normalized).map_err(|e| {
        TripError::invalid_input(field).with_reason(format!("expected dd.mm.yyyy, got '{text}': {e}"))
    })?;

    date.to_zoned(time_zone.clone())
        .map(|zoned| zoned.timestamp())
        .map_err(|e| TripError::invalid_input(field).with_reason(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_date_digits() {
        assert_eq!(mask_date_digits(""), "");
        assert_eq!(mask_date_digits("1"), "1");
        assert_eq!(mask_date_digits("12"), "12");
        assert_eq!(mask_date_digits("123"), "12.3");
        assert_eq!(mask_date_digits("1203"), "12.03");
        assert_eq!(mask_date_digits("12032023"), "12.03.2023");
        assert_eq!(mask_date_digits("1203202399"), "12.03.2023");
        assert_eq!(mask_date_digits("12/03/2023"), "12.03.2023");
    }

    #[test]
    fn test_format_date_uses_given_zone() {
        let ts: Timestamp = "2025-05-01T23:30:00Z".parse().unwrap();
        assert_eq!(format_date(ts, &TimeZone::UTC), "01.05.2025");
        let plus_two = TimeZone::fixed(jiff::tz::offset(2));
        assert_eq!(format_date(ts, &plus_two), "02.05.2025");
    }

    #[test]
    fn test_parse_display_date_forms() {
        let expected: Timestamp = "2025-05-01T00:00:00Z".parse().unwrap();
        assert_eq!(
            parse_display_date("start", "01.05.2025", &TimeZone::UTC).unwrap(),
            expected
        );
        assert_eq!(
            parse_display_date("start", "01052025", &TimeZone::UTC).unwrap(),
            expected
        );
        assert_eq!(
            parse_display_date("start", " 01.05.2025 ", &TimeZone::UTC).unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_display_date_rejects_garbage() {
        let err = parse_display_date("end", "31.02.2025", &TimeZone::UTC).unwrap_err();
        assert!(err.to_string().contains("'end'"));
        assert!(parse_display_date("end", "tomorrow", &TimeZone::UTC).is_err());
        assert!(parse_display_date("end", "", &TimeZone::UTC).is_err());
    }

    #[test]
    fn test_parse_then_format_round_trip() {
        let tz = TimeZone::fixed(jiff::tz::offset(-5));
        let ts = parse_display_date("start", "15.08.2024", &tz).unwrap();
        assert_eq!(format_date(ts, &tz), "15.08.2024");
    }
}
