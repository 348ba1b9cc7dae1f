//! Core library for the TripGuru trip tracker.
//!
//! Users record trips (name, destination, date range, participant count,
//! description), list them, view details, edit and delete them. The layers,
//! leaves first:
//!
//! - [`db`] / [`store`]: the SQLite trip table and its async, observable
//!   wrapper
//! - [`repository`]: translation between stored rows and [`Trip`]s
//! - [`use_cases`]: one wrapper per operation
//! - [`controller`]: observable list, detail and form state with field
//!   validation and save/delete orchestration
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tripguru_core::{
//!     models::TripEvent, SaveAttempt, StoreTripRepository, TripController, TripStoreBuilder,
//!     TripUseCases,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::TempDir::new()?;
//! let store = TripStoreBuilder::new()
//!     .with_database_path(Some(dir.path().join("trips.db")))
//!     .build()
//!     .await?;
//! let repository = Arc::new(StoreTripRepository::new(Arc::new(store)));
//! let controller = TripController::new(TripUseCases::new(repository));
//! let mut events = controller.take_events().expect("events are taken once");
//!
//! controller.on_name_changed("Rome Trip");
//! controller.on_destination_changed("Rome");
//! assert!(controller.form_state().borrow().can_be_saved);
//!
//! assert_eq!(controller.attempt_save_trip(), SaveAttempt::Started);
//! assert_eq!(events.recv().await, Some(TripEvent::SaveSucceeded));
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod repository;
pub mod store;
pub mod use_cases;

// Re-export commonly used types
pub use controller::{SaveAttempt, TripController};
pub use db::Database;
pub use display::{FormErrors, Trips};
pub use error::{Result, TripError};
pub use models::{FieldError, Trip, TripEvent, TripFormState};
pub use repository::{StoreTripRepository, TripRepository, TripStream};
pub use store::{TripStore, TripStoreBuilder};
pub use use_cases::TripUseCases;
