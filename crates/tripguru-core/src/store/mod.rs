//! Asynchronous, observable access to the trip database.
//!
//! [`TripStore`] runs every database call on the blocking thread pool and
//! keeps a change counter in a [`tokio::sync::watch`] channel. Writes bump
//! the counter after they commit, and the observable queries re-run
//! whenever it moves, so subscribers always see committed state.
//!
//! ```text
//! insert/update/delete ──▶ Database (spawn_blocking) ──▶ changes += 1
//!                                                          │
//! observe_trips / observe_trip ◀── re-query on change ◀────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use tripguru_core::{db::TripRecord, TripStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TripStoreBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let mut trips = store.observe_trips();
//! store
//!     .insert(TripRecord {
//!         name: "Rome Trip".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! while let Some(snapshot) = trips.next().await {
//!     println!("{} trips", snapshot?.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use futures::{stream::BoxStream, StreamExt};
use log::debug;
use tokio::{
    sync::{watch, Mutex},
    task,
};
use tokio_stream::wrappers::WatchStream;

use crate::{
    db::{Database, TripRecord},
    error::Result,
};

pub mod builder;

pub use builder::TripStoreBuilder;

/// Stream of query results re-emitted after every committed write.
pub type RecordStream<T> = BoxStream<'static, Result<T>>;

/// Durable single-table trip storage with observable queries.
pub struct TripStore {
    db_path: PathBuf,
    changes: watch::Sender<u64>,
    write_lock: Mutex<()>,
}

impl TripStore {
    /// Creates a store over an already initialised database file.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            db_path,
            changes,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Inserts a trip and returns its new identifier.
    pub async fn insert(&self, record: TripRecord) -> Result<i64> {
        self.write(move |db| db.insert_trip(&record)).await
    }

    /// Updates a trip by identifier.
    pub async fn update(&self, record: TripRecord) -> Result<()> {
        self.write(move |db| db.update_trip(&record)).await
    }

    /// Deletes a trip by identifier.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.write(move |db| db.delete_trip(id)).await
    }

    /// Every trip in list order, re-emitted after each committed write.
    pub fn observe_trips(&self) -> RecordStream<Vec<TripRecord>> {
        self.observe(Database::list_trips)
    }

    /// A single trip (or `None`), re-emitted after each committed write.
    pub fn observe_trip(&self, id: i64) -> RecordStream<Option<TripRecord>> {
        self.observe(move |db| db.get_trip(id))
    }

    fn observe<T, F>(&self, query: F) -> RecordStream<T>
    where
        T: Send + 'static,
        F: Fn(&Database) -> Result<T> + Clone + Send + Sync + 'static,
    {
        let db_path = self.db_path.clone();
        WatchStream::new(self.changes.subscribe())
            .then(move |version| {
                debug!("Re-running trip query at change {version}");
                read(db_path.clone(), query.clone())
            })
            .boxed()
    }

    /// Runs a write on the blocking pool, one at a time, then notifies
    /// observers.
    async fn write<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let _guard = self.write_lock.lock().await;
        let db_path = self.db_path.clone();

        let value = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await??;

        self.changes.send_modify(|version| *version += 1);
        Ok(value)
    }
}

async fn read<T, F>(db_path: PathBuf, query: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&Database) -> Result<T> + Send + 'static,
{
    task::spawn_blocking(move || {
        let db = Database::new(&db_path)?;
        query(&db)
    })
    .await?
}
