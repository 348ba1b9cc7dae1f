//! Trip CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::TripRecord;
use crate::error::{DatabaseResultExt, Result, TripError};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (name, destination, start_date, end_date, description, participants, create_date) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TRIP_SQL: &str = "UPDATE trips SET name = ?1, destination = ?2, start_date = ?3, end_date = ?4, description = ?5, participants = ?6 WHERE id = ?7";
const DELETE_TRIP_SQL: &str = "DELETE FROM trips WHERE id = ?1";

impl super::Database {
    /// Inserts a trip and returns the identifier SQLite assigned to it.
    ///
    /// The record's own `id` is ignored. `create_date` defaults to the
    /// current time when the record does not carry one.
    pub fn insert_trip(&mut self, record: &TripRecord) -> Result<i64> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let create_date = record
            .create_date
            .unwrap_or_else(|| Timestamp::now().as_millisecond());

        tx.execute(
            INSERT_TRIP_SQL,
            params![
                record.name,
                record.destination,
                record.start_date,
                record.end_date,
                record.description,
                record.participants,
                create_date,
            ],
        )
        .db_context("Failed to insert trip")?;

        let id = tx.last_insert_rowid();

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(id)
    }

    /// Overwrites every editable column of an existing trip.
    ///
    /// The creation date is left untouched.
    pub fn update_trip(&mut self, record: &TripRecord) -> Result<()> {
        let changed = self
            .connection
            .execute(
                UPDATE_TRIP_SQL,
                params![
                    record.name,
                    record.destination,
                    record.start_date,
                    record.end_date,
                    record.description,
                    record.participants,
                    record.id,
                ],
            )
            .db_context("Failed to update trip")?;

        if changed == 0 {
            return Err(TripError::TripNotFound {
                id: record.id as u64,
            });
        }
        Ok(())
    }

    /// Removes a trip by identifier.
    pub fn delete_trip(&mut self, id: i64) -> Result<()> {
        let changed = self
            .connection
            .execute(DELETE_TRIP_SQL, params![id])
            .db_context("Failed to delete trip")?;

        if changed == 0 {
            return Err(TripError::TripNotFound { id: id as u64 });
        }
        Ok(())
    }

    /// Retrieves a trip by its ID.
    pub fn get_trip(&self, id: i64) -> Result<Option<TripRecord>> {
        let sql = format!("SELECT {} FROM trips WHERE id = ?1", TripRecord::COLUMNS);
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id], TripRecord::from_row)
            .optional()
            .db_context("Failed to query trip")
    }

    /// Lists every trip, newest first by start date or, for trips without
    /// one, by creation date.
    pub fn list_trips(&self) -> Result<Vec<TripRecord>> {
        let sql = format!(
            "SELECT {} FROM trips ORDER BY coalesce(start_date, create_date) DESC, id DESC",
            TripRecord::COLUMNS
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], TripRecord::from_row)
            .db_context("Failed to query trips")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read trip row")
    }
}
