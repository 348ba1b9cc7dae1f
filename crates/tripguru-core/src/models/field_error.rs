//! Inline validation errors for the trip form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validation problem attached to a single form field.
///
/// These are recomputed on every edit and never propagated as failures.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// The trip name is empty or whitespace
    #[error("Trip name is required")]
    NameRequired,

    /// The participant count is not a whole number
    #[error("Enter a whole number")]
    InvalidNumber,

    /// The participant count is below one
    #[error("At least one participant is required")]
    TooFewParticipants,

    /// The end date lies before the start date
    #[error("End date cannot be before the start date")]
    EndBeforeStart,

    /// A start date is set but the end date is not
    #[error("Select an end date")]
    EndDateMissing,

    /// An end date is set but the start date is not
    #[error("Select a start date")]
    StartDateMissing,
}
