//! Row representation of the `trips` table.

use rusqlite::Row;

/// One row of the `trips` table, with dates as epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripRecord {
    pub id: i64,
    pub name: String,
    pub destination: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub description: Option<String>,
    pub participants: Option<i64>,
    /// Filled in by the store on insert when absent
    pub create_date: Option<i64>,
}

impl TripRecord {
    /// Column list matching [`TripRecord::from_row`].
    pub(crate) const COLUMNS: &'static str =
        "id, name, destination, start_date, end_date, description, participants, create_date";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            destination: row.get(2)?,
            start_date: row.get(3)?,
            end_date: row.get(4)?,
            description: row.get(5)?,
            participants: row.get(6)?,
            create_date: row.get(7)?,
        })
    }
}
