//! Trip model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Identifier carried by a trip that has not been stored yet.
pub const UNSAVED_TRIP_ID: u64 = 0;

/// Participant count assumed when a trip does not record one.
pub const DEFAULT_PARTICIPANTS: u32 = 1;

/// Upper bound the participant stepper will move to.
pub const MAX_PARTICIPANTS: u32 = 1000;

/// A recorded journey.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trip {
    /// Store-assigned identifier, [`UNSAVED_TRIP_ID`] until first insert
    #[serde(default)]
    pub id: u64,

    /// Name of the trip, never blank once saved
    pub name: String,

    /// Where the trip goes
    pub destination: Option<String>,

    /// Number of people travelling
    pub participants: Option<u32>,

    /// First day of the trip
    pub start_date: Option<Timestamp>,

    /// Last day of the trip, never before `start_date` when both are set
    pub end_date: Option<Timestamp>,

    /// Free-form notes
    pub description: Option<String>,

    /// Set by the store on first insert and never changed afterwards
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl Trip {
    /// Creates an unsaved trip with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Participant count, falling back to [`DEFAULT_PARTICIPANTS`].
    pub fn participants_or_default(&self) -> u32 {
        self.participants.unwrap_or(DEFAULT_PARTICIPANTS)
    }
}
