//! Field-level form updates.
//!
//! Each operation takes the new raw value, recomputes the affected field
//! errors (both date fields for any date change) and publishes the next
//! snapshot. All of them are synchronous.

use jiff::Timestamp;

use super::{
    validation::{
        apply_date_errors, decrement_participants, increment_participants, validate_name,
        validate_participants,
    },
    TripController,
};
use crate::display::format_date;

impl TripController {
    pub fn on_name_changed(&self, name: impl Into<String>) {
        let name = name.into();
        self.update_form(|form| {
            form.name_error = validate_name(&name);
            form.name = name;
        });
    }

    pub fn on_destination_changed(&self, destination: impl Into<String>) {
        let destination = destination.into();
        self.update_form(|form| form.destination = destination);
    }

    pub fn on_description_changed(&self, description: impl Into<String>) {
        let description = description.into();
        self.update_form(|form| form.description = description);
    }

    /// Sets the start date and revalidates both date fields.
    pub fn on_start_date_selected(&self, date: Timestamp) {
        let display = format_date(date, &self.state.time_zone);
        self.update_form(|form| {
            form.start_date = Some(date);
            form.start_date_display = display;
            apply_date_errors(form);
        });
    }

    /// Sets the end date and revalidates both date fields.
    pub fn on_end_date_selected(&self, date: Timestamp) {
        let display = format_date(date, &self.state.time_zone);
        self.update_form(|form| {
            form.end_date = Some(date);
            form.end_date_display = display;
            apply_date_errors(form);
        });
    }

    pub fn clear_start_date(&self) {
        self.update_form(|form| {
            form.start_date = None;
            form.start_date_display.clear();
            apply_date_errors(form);
        });
    }

    pub fn clear_end_date(&self) {
        self.update_form(|form| {
            form.end_date = None;
            form.end_date_display.clear();
            apply_date_errors(form);
        });
    }

    /// Stores the participant text as typed, valid or not.
    pub fn on_number_of_people_changed(&self, text: impl Into<String>) {
        let text = text.into();
        self.update_form(|form| {
            form.participants_error = validate_participants(&text);
            form.participants = text;
        });
    }

    pub fn increment_number_of_people(&self) {
        self.update_form(|form| {
            form.participants = increment_participants(&form.participants);
            form.participants_error = validate_participants(&form.participants);
        });
    }

    pub fn decrement_number_of_people(&self) {
        self.update_form(|form| {
            form.participants = decrement_participants(&form.participants);
            form.participants_error = validate_participants(&form.participants);
        });
    }
}
