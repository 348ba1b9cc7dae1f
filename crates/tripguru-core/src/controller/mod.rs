//! The trip controller: observable list, detail and form state.
//!
//! [`TripController`] owns four pieces of state and exposes each through a
//! [`tokio::sync::watch`] receiver:
//!
//! - the trip list, republished from the store's "all trips" query
//! - the selected trip id and the trip loaded for it
//! - the form snapshot ([`TripFormState`]) with per-field errors
//!
//! Every mutation reads the current snapshot, computes the next one and
//! publishes it in a single `send_modify`, so observers never see a
//! half-applied change. Save and delete outcomes are delivered separately as
//! one-shot [`TripEvent`]s over an mpsc channel.
//!
//! ```text
//! on_*_changed ──▶ validation ──▶ form snapshot ──▶ form_state()
//! attempt_save_trip ──▶ AddTrip / UpdateTrip ──▶ TripEvent ──▶ take_events()
//! load_trips ──────▶ GetTrips stream ─────▶ trips()
//! load_trip_details ▶ GetTripById stream ─▶ selected_trip()   (switch-latest)
//! ```
//!
//! Background work runs on the tokio runtime the controller is used from
//! and is aborted when the controller is dropped.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use tripguru_core::{
//!     models::TripEvent, SaveAttempt, StoreTripRepository, TripController, TripStoreBuilder,
//!     TripUseCases,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TripStoreBuilder::new().build().await?;
//! let repository = Arc::new(StoreTripRepository::new(Arc::new(store)));
//! let controller = TripController::new(TripUseCases::new(repository));
//! let mut events = controller.take_events().expect("first taker");
//!
//! controller.on_name_changed("Rome Trip");
//! assert_eq!(controller.attempt_save_trip(), SaveAttempt::Started);
//! assert_eq!(events.recv().await, Some(TripEvent::SaveSucceeded));
//! # Ok(())
//! # }
//! ```

use std::{
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use jiff::tz::TimeZone;
use log::debug;
use tokio::{
    sync::{mpsc, watch},
    task::{AbortHandle, JoinSet},
};

use crate::{
    models::{Trip, TripEvent, TripFormState},
    use_cases::TripUseCases,
};

mod form;
mod observe;
mod save;
pub mod validation;

/// Outcome of [`TripController::attempt_save_trip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAttempt {
    /// The form was valid; the save now runs in the background
    Started,
    /// The form has errors; they are visible in the form state
    Invalid,
    /// A save is already in flight; the call was ignored
    AlreadySaving,
}

/// State shared between the controller and its background tasks.
struct ControllerState {
    use_cases: TripUseCases,
    time_zone: TimeZone,
    trips: watch::Sender<Vec<Trip>>,
    selected_id: watch::Sender<Option<u64>>,
    selected_trip: watch::Sender<Option<Trip>>,
    form: watch::Sender<TripFormState>,
    events: mpsc::UnboundedSender<TripEvent>,
}

/// Background tasks owned by one controller.
#[derive(Default)]
struct Tasks {
    set: JoinSet<()>,
    list: Option<AbortHandle>,
    detail: Option<AbortHandle>,
}

impl Tasks {
    fn spawn<F>(&mut self, task: F) -> AbortHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        while self.set.try_join_next().is_some() {}
        self.set.spawn(task)
    }
}

/// View-model for trip list, trip details and the trip form.
pub struct TripController {
    state: Arc<ControllerState>,
    tasks: Mutex<Tasks>,
    event_receiver: Mutex<Option<mpsc::UnboundedReceiver<TripEvent>>>,
}

impl TripController {
    /// Creates a controller that displays dates in the system time zone.
    pub fn new(use_cases: TripUseCases) -> Self {
        Self::with_time_zone(use_cases, TimeZone::system())
    }

    /// Creates a controller that displays dates in `time_zone`.
    pub fn with_time_zone(use_cases: TripUseCases, time_zone: TimeZone) -> Self {
        let (events, event_receiver) = mpsc::unbounded_channel();
        let state = ControllerState {
            use_cases,
            time_zone,
            trips: watch::Sender::new(Vec::new()),
            selected_id: watch::Sender::new(None),
            selected_trip: watch::Sender::new(None),
            form: watch::Sender::new(TripFormState::default()),
            events,
        };

        Self {
            state: Arc::new(state),
            tasks: Mutex::new(Tasks::default()),
            event_receiver: Mutex::new(Some(event_receiver)),
        }
    }

    /// The trip list, newest first.
    pub fn trips(&self) -> watch::Receiver<Vec<Trip>> {
        self.state.trips.subscribe()
    }

    /// The trip loaded for the selected id, or `None` while loading, when
    /// nothing is selected, or when the trip does not exist.
    pub fn selected_trip(&self) -> watch::Receiver<Option<Trip>> {
        self.state.selected_trip.subscribe()
    }

    /// Identifier last passed to [`TripController::load_trip_details`].
    pub fn selected_trip_id(&self) -> Option<u64> {
        *self.state.selected_id.borrow()
    }

    /// The form snapshot.
    pub fn form_state(&self) -> watch::Receiver<TripFormState> {
        self.state.form.subscribe()
    }

    /// Hands out the one-shot event receiver. Only the first call gets it.
    pub fn take_events(&self) -> Option<mpsc::UnboundedReceiver<TripEvent>> {
        self.event_receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn tasks(&self) -> MutexGuard<'_, Tasks> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `change` to the form and recomputes the save flag in the same
    /// publish.
    fn update_form<F>(&self, change: F)
    where
        F: FnOnce(&mut TripFormState),
    {
        self.state.form.send_modify(|form| {
            change(form);
            form.can_be_saved = validation::can_be_saved(form);
        });
    }
}

impl ControllerState {
    fn emit(&self, event: TripEvent) {
        if self.events.send(event).is_err() {
            debug!("Dropping trip event: no receiver");
        }
    }
}
