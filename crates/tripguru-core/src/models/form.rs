//! Form state for authoring or editing a trip.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{FieldError, DEFAULT_PARTICIPANTS};

/// Immutable snapshot of the trip form.
///
/// The participant count is kept as raw text so partially typed input
/// survives between keystrokes. `can_be_saved` is derived and recomputed by
/// the controller after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripFormState {
    pub name: String,
    pub name_error: Option<FieldError>,

    pub destination: String,

    pub participants: String,
    pub participants_error: Option<FieldError>,

    pub start_date: Option<Timestamp>,
    pub start_date_display: String,
    pub start_date_error: Option<FieldError>,

    pub end_date: Option<Timestamp>,
    pub end_date_display: String,
    pub end_date_error: Option<FieldError>,

    pub description: String,

    /// A save is in flight
    pub is_saving: bool,
    /// Every validated field is error-free and the name is non-blank
    pub can_be_saved: bool,
    /// Present iff the form edits an existing trip
    pub editing_trip_id: Option<u64>,
}

impl Default for TripFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            name_error: None,
            destination: String::new(),
            participants: DEFAULT_PARTICIPANTS.to_string(),
            participants_error: None,
            start_date: None,
            start_date_display: String::new(),
            start_date_error: None,
            end_date: None,
            end_date_display: String::new(),
            end_date_error: None,
            description: String::new(),
            is_saving: false,
            can_be_saved: false,
            editing_trip_id: None,
        }
    }
}

impl TripFormState {
    /// Whether the form edits a stored trip rather than creating one.
    pub fn is_editing(&self) -> bool {
        self.editing_trip_id.is_some()
    }

    /// Current field errors, labelled by field, in form order.
    pub fn field_errors(&self) -> Vec<(&'static str, FieldError)> {
        [
            ("name", self.name_error),
            ("participants", self.participants_error),
            ("start date", self.start_date_error),
            ("end date", self.end_date_error),
        ]
        .into_iter()
        .filter_map(|(field, error)| error.map(|e| (field, e)))
        .collect()
    }
}
