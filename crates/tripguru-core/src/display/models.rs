//! Display implementations for domain models.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{Trip, TripEvent};

impl Trip {
    /// Writes the date line(s) shared by the detail and list formats.
    pub(crate) fn fmt_dates(&self, f: &mut fmt::Formatter<'_>, bold: bool) -> fmt::Result {
        let label = |name: &str| {
            if bold {
                format!("**{name}**")
            } else {
                name.to_string()
            }
        };
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => writeln!(
                f,
                "- {}: {} - {}",
                label("Dates"),
                LocalDate(start),
                LocalDate(end)
            ),
            (Some(start), None) => writeln!(f, "- {}: {}", label("Starts"), LocalDate(start)),
            (None, Some(end)) => writeln!(f, "- {}: {}", label("Ends"), LocalDate(end)),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        if let Some(destination) = self.destination.as_deref().filter(|d| !d.is_empty()) {
            writeln!(f, "- Destination: {destination}")?;
        }
        self.fmt_dates(f, false)?;
        writeln!(f, "- Participants: {}", self.participants_or_default())?;
        if let Some(created_at) = &self.created_at {
            writeln!(f, "- Created: {}", LocalDateTime(created_at))?;
        }

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }

        Ok(())
    }
}

impl fmt::Display for TripEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripEvent::SaveSucceeded => writeln!(f, "Trip saved."),
            TripEvent::SaveFailed { message }
            | TripEvent::DeleteFailed { message }
            | TripEvent::ListFailed { message } => writeln!(f, "Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::Date, tz::TimeZone, Timestamp};

    use super::*;

    /// Local noon in the zone the display types use.
    fn noon(date: &str) -> Timestamp {
        let date: Date = date.parse().unwrap();
        date.at(12, 0, 0, 0)
            .to_zoned(TimeZone::system())
            .unwrap()
            .timestamp()
    }

    #[test]
    fn test_trip_detail_display() {
        let trip = Trip {
            id: 4,
            destination: Some("Rome".to_string()),
            participants: Some(3),
            start_date: Some(noon("2025-05-01")),
            end_date: Some(noon("2025-05-07")),
            description: Some("Colosseum first".to_string()),
            ..Trip::new("Rome Trip")
        };

        let output = trip.to_string();
        assert!(output.starts_with("# 4. Rome Trip\n"));
        assert!(output.contains("- Destination: Rome"));
        assert!(output.contains("- Dates: 01.05.2025 - 07.05.2025"));
        assert!(output.contains("- Participants: 3"));
        assert!(output.ends_with("Colosseum first\n"));
    }

    #[test]
    fn test_trip_display_skips_empty_optionals() {
        let trip = Trip {
            id: 1,
            destination: Some(String::new()),
            ..Trip::new("Weekend")
        };

        let output = trip.to_string();
        assert!(!output.contains("Destination"));
        assert!(!output.contains("Dates"));
        assert!(output.contains("- Participants: 1"));
    }

    #[test]
    fn test_trip_display_single_date() {
        let trip = Trip {
            start_date: Some(noon("2024-12-24")),
            ..Trip::new("Holidays")
        };
        assert!(trip.to_string().contains("- Starts: 24.12.2024"));
    }

    #[test]
    fn test_event_display() {
        assert_eq!(TripEvent::SaveSucceeded.to_string(), "Trip saved.\n");
        let failed = TripEvent::SaveFailed {
            message: "Failed to save trip: disk full".to_string(),
        };
        assert_eq!(failed.to_string(), "Error: Failed to save trip: disk full\n");
        let list_failed = TripEvent::ListFailed {
            message: "Failed to load trips: query failed".to_string(),
        };
        assert_eq!(
            list_failed.to_string(),
            "Error: Failed to load trips: query failed\n"
        );
    }
}
