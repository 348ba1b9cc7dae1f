//! One-shot controller events.

use serde::{Deserialize, Serialize};

/// Notification delivered once to the active observer.
///
/// Events are kept apart from the continuously observable state so a late
/// subscriber never sees a stale outcome replayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TripEvent {
    /// The trip was stored; the form can be closed
    SaveSucceeded,
    /// The store rejected the save
    SaveFailed { message: String },
    /// The store rejected a delete request
    DeleteFailed { message: String },
    /// The trip list could not be read; the last list is kept
    ListFailed { message: String },
}
