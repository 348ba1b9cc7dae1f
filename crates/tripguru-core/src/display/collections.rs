//! Collection wrapper types for displaying groups of trips.

use std::fmt;

use crate::models::Trip;

/// Newtype wrapper for displaying a trip list, one card per trip.
pub struct Trips<'a>(pub &'a [Trip]);

impl fmt::Display for Trips<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No trips found.");
        }

        for trip in self.0 {
            writeln!(f, "## {} (ID: {})", trip.name, trip.id)?;
            writeln!(f)?;
            if let Some(destination) = trip.destination.as_deref().filter(|d| !d.is_empty()) {
                writeln!(f, "- **Destination**: {destination}")?;
            }
            trip.fmt_dates(f, true)?;
            if let Some(description) = trip.description.as_deref().filter(|d| !d.is_empty()) {
                writeln!(f, "- *{description}*")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
