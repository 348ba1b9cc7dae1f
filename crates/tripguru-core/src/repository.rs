//! Translation between stored trip records and domain trips.
//!
//! [`TripRepository`] is the seam the use cases depend on. The production
//! implementation, [`StoreTripRepository`], is a pure pass-through over a
//! [`TripStore`]; tests substitute their own implementation.

use std::sync::Arc;

use async_trait::async_trait;
use futures::{stream::BoxStream, StreamExt};
use jiff::Timestamp;

use crate::{
    db::TripRecord,
    error::{Result, TripError},
    models::Trip,
    store::TripStore,
};

/// Stream of domain query results.
pub type TripStream<T> = BoxStream<'static, Result<T>>;

/// Access to stored trips.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Every trip, newest first, re-emitted whenever the stored set changes.
    fn all_trips(&self) -> TripStream<Vec<Trip>>;

    /// One trip or `None`, re-emitted whenever the stored set changes.
    fn trip_by_id(&self, id: u64) -> TripStream<Option<Trip>>;

    /// Stores a new trip and returns its identifier.
    async fn insert_trip(&self, trip: &Trip) -> Result<u64>;

    /// Overwrites an existing trip.
    async fn update_trip(&self, trip: &Trip) -> Result<()>;

    /// Removes a trip.
    async fn delete_trip(&self, trip: &Trip) -> Result<()>;
}

/// [`TripRepository`] backed by the SQLite [`TripStore`].
#[derive(Clone)]
pub struct StoreTripRepository {
    store: Arc<TripStore>,
}

impl StoreTripRepository {
    pub fn new(store: Arc<TripStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TripRepository for StoreTripRepository {
    fn all_trips(&self) -> TripStream<Vec<Trip>> {
        self.store
            .observe_trips()
            .map(|records| {
                records?
                    .into_iter()
                    .map(Trip::try_from)
                    .collect::<Result<Vec<_>>>()
            })
            .boxed()
    }

    fn trip_by_id(&self, id: u64) -> TripStream<Option<Trip>> {
        self.store
            .observe_trip(id as i64)
            .map(|record| record?.map(Trip::try_from).transpose())
            .boxed()
    }

    async fn insert_trip(&self, trip: &Trip) -> Result<u64> {
        let id = self.store.insert(TripRecord::from(trip)).await?;
        Ok(id as u64)
    }

    async fn update_trip(&self, trip: &Trip) -> Result<()> {
        self.store.update(TripRecord::from(trip)).await
    }

    async fn delete_trip(&self, trip: &Trip) -> Result<()> {
        self.store.delete(trip.id as i64).await
    }
}

impl From<&Trip> for TripRecord {
    fn from(trip: &Trip) -> Self {
        TripRecord {
            id: trip.id as i64,
            name: trip.name.clone(),
            destination: trip.destination.clone(),
            start_date: trip.start_date.map(|t| t.as_millisecond()),
            end_date: trip.end_date.map(|t| t.as_millisecond()),
            description: trip.description.clone(),
            participants: trip.participants.map(i64::from),
            create_date: trip.created_at.map(|t| t.as_millisecond()),
        }
    }
}

impl TryFrom<TripRecord> for Trip {
    type Error = TripError;

    fn try_from(record: TripRecord) -> Result<Self> {
        let id = record.id as u64;
        let timestamp = |millis: Option<i64>, column: &str| {
            millis
                .map(Timestamp::from_millisecond)
                .transpose()
                .map_err(|e| TripError::CorruptRecord {
                    id,
                    reason: format!("{column}: {e}"),
                })
        };
        let participants = record
            .participants
            .map(u32::try_from)
            .transpose()
            .map_err(|e| TripError::CorruptRecord {
                id,
                reason: format!("participants: {e}"),
            })?;

        Ok(Trip {
            id,
            name: record.name,
            destination: record.destination,
            participants,
            start_date: timestamp(record.start_date, "start_date")?,
            end_date: timestamp(record.end_date, "end_date")?,
            description: record.description,
            created_at: timestamp(record.create_date, "create_date")?,
        })
    }
}
