//! # Storage Layer
//!
//! This module defines the storage abstraction for sisu. The [`DataStore`] trait
//! is the generic create/find/update/delete surface every command is written
//! against; [`Record`] describes how one record type maps onto a table.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage in a single SQLite file
//!   - Opening creates the file if needed and applies [`schema`]
//!   - Every call is its own statement; there are no multi-statement transactions
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - One `BTreeMap` per record type, ids handed out per table
//!
//! ## Identifiers
//!
//! Records carry an `i64` id. A record that was never inserted has id `0`;
//! `insert` ignores whatever id the record carries and writes back the one the
//! store assigned.

use crate::error::Result;
use rusqlite::{Row, ToSql};

pub mod memory;
pub mod schema;
pub mod sqlite;

/// One record type stored in its own table.
pub trait Record: Clone + 'static {
    /// Table name, also used by `export` (`<TABLE>.csv`)
    const TABLE: &'static str;
    /// Human name used in messages ("Removed task 3")
    const SINGULAR: &'static str;
    /// Every column except `id`, in the order of [`Record::to_params`]
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);

    /// Values for [`Record::COLUMNS`], in order.
    fn to_params(&self) -> Vec<Box<dyn ToSql>>;

    /// Builds a record from a row laid out as `id, COLUMNS...`.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Abstract interface for record storage.
pub trait DataStore {
    /// All records of a type, ordered by id ascending
    fn list<R: Record>(&self) -> Result<Vec<R>>;

    /// A record by id, `SisuError::NotFound` if missing
    fn find<R: Record>(&self, id: i64) -> Result<R>;

    /// Insert a record, assigning and returning its new id
    fn insert<R: Record>(&mut self, record: &mut R) -> Result<i64>;

    /// Overwrite an existing record, `SisuError::NotFound` if missing
    fn update<R: Record>(&mut self, record: &R) -> Result<()>;

    /// Delete a record by id, `SisuError::NotFound` if missing
    fn delete<R: Record>(&mut self, id: i64) -> Result<()>;
}
