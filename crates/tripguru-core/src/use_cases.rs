//! Single-operation wrappers around the trip repository.
//!
//! Each use case does exactly one thing, which gives the controller a stable
//! seam and lets every operation be exercised on its own.

use std::sync::Arc;

use futures::StreamExt;

use crate::{
    error::Result,
    models::Trip,
    repository::{TripRepository, TripStream},
};

/// Stores a new trip.
#[derive(Clone)]
pub struct AddTrip {
    repository: Arc<dyn TripRepository>,
}

impl AddTrip {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    /// Returns the identifier assigned by the store.
    pub async fn execute(&self, trip: &Trip) -> Result<u64> {
        self.repository.insert_trip(trip).await
    }
}

/// Observes every trip.
#[derive(Clone)]
pub struct GetTrips {
    repository: Arc<dyn TripRepository>,
}

impl GetTrips {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> TripStream<Vec<Trip>> {
        self.repository.all_trips()
    }
}

/// Observes a single trip.
#[derive(Clone)]
pub struct GetTripById {
    repository: Arc<dyn TripRepository>,
}

impl GetTripById {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, id: u64) -> TripStream<Option<Trip>> {
        self.repository.trip_by_id(id)
    }

    /// Current state of one trip, read once.
    pub async fn fetch(&self, id: u64) -> Result<Option<Trip>> {
        self.execute(id).next().await.unwrap_or(Ok(None))
    }
}

/// Overwrites an existing trip.
#[derive(Clone)]
pub struct UpdateTrip {
    repository: Arc<dyn TripRepository>,
}

impl UpdateTrip {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, trip: &Trip) -> Result<()> {
        self.repository.update_trip(trip).await
    }
}

/// Removes a trip.
#[derive(Clone)]
pub struct DeleteTrip {
    repository: Arc<dyn TripRepository>,
}

impl DeleteTrip {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, trip: &Trip) -> Result<()> {
        self.repository.delete_trip(trip).await
    }
}

/// The full set of trip use cases, sharing one repository.
#[derive(Clone)]
pub struct TripUseCases {
    pub add_trip: AddTrip,
    pub get_trips: GetTrips,
    pub get_trip_by_id: GetTripById,
    pub update_trip: UpdateTrip,
    pub delete_trip: DeleteTrip,
}

impl TripUseCases {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self {
            add_trip: AddTrip::new(Arc::clone(&repository)),
            get_trips: GetTrips::new(Arc::clone(&repository)),
            get_trip_by_id: GetTripById::new(Arc::clone(&repository)),
            update_trip: UpdateTrip::new(Arc::clone(&repository)),
            delete_trip: DeleteTrip::new(repository),
        }
    }
}
