//! Data models for trips and the trip form.
//!
//! [`Trip`] is the persisted domain entity. [`TripFormState`] is the
//! transient snapshot the controller publishes while a trip is being
//! authored or edited, with one [`FieldError`] slot per validated field.
//! [`TripEvent`] values are one-shot notifications emitted by the
//! controller after a save or delete attempt.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use tripguru_core::models::{Trip, TripFormState, UNSAVED_TRIP_ID};
//!
//! let trip = Trip::new("Rome Trip");
//! assert_eq!(trip.id, UNSAVED_TRIP_ID);
//! assert_eq!(trip.participants_or_default(), 1);
//!
//! let form = TripFormState::default();
//! assert_eq!(form.participants, "1");
//! assert!(!form.can_be_saved);
//! ```

pub mod event;
pub mod field_error;
pub mod form;
pub mod trip;


pub use event::TripEvent;
pub use field_error::FieldError;
pub use form::TripFormState;
pub use trip::{Trip, DEFAULT_PARTICIPANTS, MAX_PARTICIPANTS, UNSAVED_TRIP_ID};
