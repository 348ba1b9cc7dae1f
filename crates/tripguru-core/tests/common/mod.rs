#![allow(dead_code)]

use std::{
    cmp::Reverse,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use futures::StreamExt;
use tempfile::TempDir;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tripguru_core::{
    Result, StoreTripRepository, Trip, TripError, TripRepository, TripStream, TripStoreBuilder,
    TripUseCases,
};

/// How long tests wait for background work before giving up.
pub const WAIT: Duration = Duration::from_secs(5);

/// A repository call recorded by [`FakeTripRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Insert(Trip),
    Update(Trip),
    Delete(u64),
}

/// In-memory repository with call recording and failure injection.
pub struct FakeTripRepository {
    trips: watch::Sender<Vec<Trip>>,
    next_id: AtomicU64,
    calls: Mutex<Vec<Call>>,
    fail_writes: AtomicBool,
    fail_queries: Arc<AtomicBool>,
    paused: watch::Sender<bool>,
}

impl Default for FakeTripRepository {
    fn default() -> Self {
        Self {
            trips: watch::Sender::new(Vec::new()),
            next_id: AtomicU64::new(1),
            calls: Mutex::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
            fail_queries: Arc::new(AtomicBool::new(false)),
            paused: watch::Sender::new(false),
        }
    }
}

impl FakeTripRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Stores `trip` directly, bypassing call recording.
    pub fn seed(&self, trip: Trip) -> Trip {
        let trip = Trip {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            ..trip
        };
        let stored = trip.clone();
        self.trips.send_modify(|trips| {
            trips.push(stored);
            sort_newest_first(trips);
        });
        trip
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<Trip> {
        self.trips.borrow().clone()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    /// Holds every write until [`FakeTripRepository::resume`] is called.
    pub fn pause(&self) {
        self.paused.send_replace(true);
    }

    pub fn resume(&self) {
        self.paused.send_replace(false);
    }

    async fn write(&self, call: Call) -> Result<()> {
        let mut paused = self.paused.subscribe();
        let _ = paused.wait_for(|paused| !*paused).await;

        self.calls.lock().unwrap().push(call);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(
                TripError::database("disk full").with_source(rusqlite::Error::InvalidQuery)
            );
        }
        Ok(())
    }
}

fn query_failed() -> TripError {
    TripError::database("query failed").with_source(rusqlite::Error::InvalidQuery)
}

fn sort_newest_first(trips: &mut [Trip]) {
    trips.sort_by_key(|trip| {
        (
            Reverse(trip.start_date.or(trip.created_at)),
            Reverse(trip.id),
        )
    });
}

#[async_trait]
impl TripRepository for FakeTripRepository {
    fn all_trips(&self) -> TripStream<Vec<Trip>> {
        let fail = Arc::clone(&self.fail_queries);
        WatchStream::new(self.trips.subscribe())
            .map(move |trips| {
                if fail.load(Ordering::SeqCst) {
                    Err(query_failed())
                } else {
                    Ok(trips)
                }
            })
            .boxed()
    }

    fn trip_by_id(&self, id: u64) -> TripStream<Option<Trip>> {
        let fail = Arc::clone(&self.fail_queries);
        WatchStream::new(self.trips.subscribe())
            .map(move |trips| {
                if fail.load(Ordering::SeqCst) {
                    Err(query_failed())
                } else {
                    Ok(trips.into_iter().find(|trip| trip.id == id))
                }
            })
            .boxed()
    }

    async fn insert_trip(&self, trip: &Trip) -> Result<u64> {
        self.write(Call::Insert(trip.clone())).await?;
        Ok(self.seed(trip.clone()).id)
    }

    async fn update_trip(&self, trip: &Trip) -> Result<()> {
        self.write(Call::Update(trip.clone())).await?;
        let mut found = false;
        self.trips.send_if_modified(|trips| {
            if let Some(stored) = trips.iter_mut().find(|t| t.id == trip.id) {
                *stored = Trip {
                    created_at: stored.created_at,
                    ..trip.clone()
                };
                found = true;
                sort_newest_first(trips);
            }
            found
        });
        if found {
            Ok(())
        } else {
            Err(TripError::TripNotFound { id: trip.id })
        }
    }

    async fn delete_trip(&self, trip: &Trip) -> Result<()> {
        self.write(Call::Delete(trip.id)).await?;
        let mut found = false;
        self.trips.send_if_modified(|trips| {
            let before = trips.len();
            trips.retain(|t| t.id != trip.id);
            found = trips.len() != before;
            found
        });
        if found {
            Ok(())
        } else {
            Err(TripError::TripNotFound { id: trip.id })
        }
    }
}

pub fn use_cases(repository: &Arc<FakeTripRepository>) -> TripUseCases {
    TripUseCases::new(Arc::clone(repository) as Arc<dyn TripRepository>)
}

/// Helper function to create use cases over a fresh on-disk store
pub async fn create_test_use_cases() -> (TempDir, TripUseCases) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = TripStoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("Failed to create store");
    let repository = StoreTripRepository::new(Arc::new(store));
    (temp_dir, TripUseCases::new(Arc::new(repository)))
}

/// Waits until `receiver` holds a value matching `predicate`.
pub async fn wait_for<T, F>(receiver: &mut watch::Receiver<T>, predicate: F) -> T
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    tokio::time::timeout(WAIT, receiver.wait_for(predicate))
        .await
        .expect("timed out waiting for state")
        .expect("state sender dropped")
        .clone()
}
