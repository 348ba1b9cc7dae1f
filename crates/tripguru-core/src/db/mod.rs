//! SQLite persistence for trips.
//!
//! This module is the trip store proper: a single `trips` table with plain
//! CRUD queries. It works on [`TripRecord`] rows; translating rows into
//! domain trips is the repository's job.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod record;
pub mod trip_queries;

pub use record::TripRecord;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
