//! List and detail observation.

use std::sync::Arc;

use futures::StreamExt;
use log::{debug, warn};

use super::TripController;
use crate::models::TripEvent;

/// Message shown when the trip list cannot be read.
pub const LIST_FAILED_MESSAGE: &str = "Failed to load trips";

impl TripController {
    /// Subscribes the list state to the store's "all trips" query.
    ///
    /// The subscription lives until the controller is dropped. Calling this
    /// again replaces the previous subscription. A failed emission keeps the
    /// last published list and is reported as [`TripEvent::ListFailed`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn load_trips(&self) {
        let state = Arc::clone(&self.state);
        let mut tasks = self.tasks();
        if let Some(previous) = tasks.list.take() {
            previous.abort();
        }

        debug!("Subscribing to trip list");
        let handle = tasks.spawn(async move {
            let mut updates = state.use_cases.get_trips.execute();
            while let Some(result) = updates.next().await {
                match result {
                    Ok(trips) => {
                        state.trips.send_replace(trips);
                    }
                    Err(e) => {
                        warn!("Trip list query failed: {e}");
                        state.emit(TripEvent::ListFailed {
                            message: format!("{LIST_FAILED_MESSAGE}: {e}"),
                        });
                    }
                }
            }
        });
        tasks.list = Some(handle);
    }

    /// Selects a trip and starts observing it.
    ///
    /// The selected trip restarts from `None` and then follows the store's
    /// "trip by id" query. Query failures are mapped to `None`. Selecting a
    /// new id abandons the previous query; its late results are discarded.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn load_trip_details(&self, id: u64) {
        let mut tasks = self.tasks();
        if let Some(previous) = tasks.detail.take() {
            previous.abort();
        }

        self.state.selected_id.send_replace(Some(id));
        self.state.selected_trip.send_replace(None);

        debug!("Observing trip {id}");
        let state = Arc::clone(&self.state);
        let handle = tasks.spawn(async move {
            let mut updates = state.use_cases.get_trip_by_id.execute(id);
            while let Some(result) = updates.next().await {
                let trip = result.unwrap_or_else(|e| {
                    warn!("Loading trip {id} failed: {e}");
                    None
                });
                state.selected_trip.send_if_modified(|current| {
                    if *state.selected_id.borrow() != Some(id) {
                        return false;
                    }
                    *current = trip;
                    true
                });
            }
        });
        tasks.detail = Some(handle);
    }

    /// Deselects the current trip; the selected trip becomes `None`.
    pub fn clear_selected_trip(&self) {
        let mut tasks = self.tasks();
        if let Some(previous) = tasks.detail.take() {
            previous.abort();
        }

        self.state.selected_id.send_replace(None);
        self.state.selected_trip.send_replace(None);
    }
}
