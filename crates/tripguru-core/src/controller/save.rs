//! Save, edit, reset and delete orchestration.

use std::sync::Arc;

use log::{debug, warn};

use super::{
    validation::{apply_date_errors, can_be_saved, parse_participants, revalidate, validate_participants},
    ControllerState, SaveAttempt, TripController,
};
use crate::{
    display::format_date,
    models::{Trip, TripEvent, TripFormState, DEFAULT_PARTICIPANTS, UNSAVED_TRIP_ID},
};

/// Message shown when the store rejects a save.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save trip";

/// Message shown when the store rejects a delete.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete trip";

impl TripController {
    /// Validates the whole form and, when it is valid, saves it in the
    /// background.
    ///
    /// Every field is revalidated from its current value first. A valid form
    /// flips `is_saving` on immediately, then the add or update use case
    /// runs depending on whether the form edits a stored trip. The outcome
    /// arrives as [`TripEvent::SaveSucceeded`] or [`TripEvent::SaveFailed`],
    /// after `is_saving` has been cleared.
    ///
    /// Calls made while a save is in flight are ignored.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn attempt_save_trip(&self) -> SaveAttempt {
        let mut attempt = SaveAttempt::Invalid;
        let mut snapshot = None;

        self.state.form.send_if_modified(|form| {
            if form.is_saving {
                attempt = SaveAttempt::AlreadySaving;
                return false;
            }
            revalidate(form);
            if form.can_be_saved {
                form.is_saving = true;
                attempt = SaveAttempt::Started;
                snapshot = Some(form.clone());
            }
            true
        });

        match snapshot {
            Some(form) => {
                let trip = build_trip(&form);
                let editing = form.is_editing();
                debug!("Saving trip '{}' (editing: {editing})", trip.name);
                let state = Arc::clone(&self.state);
                self.tasks()
                    .spawn(async move { state.save_trip(trip, editing).await });
            }
            None if attempt == SaveAttempt::AlreadySaving => {
                debug!("Ignoring save request while a save is in flight");
            }
            None => debug!("Trip form has validation errors"),
        }

        attempt
    }

    /// Replaces the form with the contents of a stored trip.
    ///
    /// This is the only way a form enters edit mode. A trip without a
    /// participant count loads as "1" and is saved back as `Some(1)`.
    pub fn load_trip_for_editing(&self, trip: &Trip) {
        let time_zone = &self.state.time_zone;
        let mut form = TripFormState {
            name: trip.name.clone(),
            destination: trip.destination.clone().unwrap_or_default(),
            participants: trip.participants_or_default().to_string(),
            start_date: trip.start_date,
            start_date_display: trip
                .start_date
                .map(|d| format_date(d, time_zone))
                .unwrap_or_default(),
            end_date: trip.end_date,
            end_date_display: trip
                .end_date
                .map(|d| format_date(d, time_zone))
                .unwrap_or_default(),
            description: trip.description.clone().unwrap_or_default(),
            editing_trip_id: Some(trip.id),
            ..Default::default()
        };
        form.participants_error = validate_participants(&form.participants);
        apply_date_errors(&mut form);
        form.can_be_saved = can_be_saved(&form);

        self.replace_form(form);
    }

    /// Resets the form to a blank new trip.
    pub fn clear_form_state(&self) {
        self.replace_form(TripFormState::default());
    }

    /// Swaps in a new form; a save in flight stays visible as `is_saving`
    /// until it completes.
    fn replace_form(&self, next: TripFormState) {
        self.state.form.send_modify(|form| {
            let is_saving = form.is_saving;
            *form = next;
            form.is_saving = is_saving;
        });
    }

    /// Asks the store to delete `trip` without waiting for the result.
    ///
    /// The list is not touched here; it follows the store's query once the
    /// delete commits. A failure is reported as [`TripEvent::DeleteFailed`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn delete_trip(&self, trip: &Trip) {
        let state = Arc::clone(&self.state);
        let trip = trip.clone();
        self.tasks().spawn(async move {
            if let Err(e) = state.use_cases.delete_trip.execute(&trip).await {
                warn!("Deleting trip {} failed: {e}", trip.id);
                state.emit(TripEvent::DeleteFailed {
                    message: format!("{DELETE_FAILED_MESSAGE}: {e}"),
                });
            }
        });
    }
}

impl ControllerState {
    async fn save_trip(&self, trip: Trip, editing: bool) {
        let result = if editing {
            self.use_cases.update_trip.execute(&trip).await
        } else {
            self.use_cases.add_trip.execute(&trip).await.map(drop)
        };

        self.form.send_modify(|form| form.is_saving = false);

        match result {
            Ok(()) => self.emit(TripEvent::SaveSucceeded),
            Err(e) => {
                warn!("Saving trip '{}' failed: {e}", trip.name);
                self.emit(TripEvent::SaveFailed {
                    message: format!("{SAVE_FAILED_MESSAGE}: {e}"),
                });
            }
        }
    }
}

/// Builds the trip a form describes, trimming its text fields.
///
/// The participant count is always present; unparseable text falls back to
/// [`DEFAULT_PARTICIPANTS`].
fn build_trip(form: &TripFormState) -> Trip {
    let optional = |text: &str| {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    Trip {
        id: form.editing_trip_id.unwrap_or(UNSAVED_TRIP_ID),
        name: form.name.trim().to_string(),
        destination: optional(&form.destination),
        participants: Some(
            parse_participants(&form.participants)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(DEFAULT_PARTICIPANTS),
        ),
        start_date: form.start_date,
        end_date: form.end_date,
        description: optional(&form.description),
        created_at: None,
    }
}
