use super::{schema, DataStore, Record};
use crate::crud::lifecycle::{Close, Connect};
use crate::error::{Result, SisuError};
use rusqlite::{Connection, OptionalExtension, ToSql};
use std::path::{Path, PathBuf};

/// Production storage backed by one SQLite file.
pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path` and applies the schema.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::configure(&conn)?;
        schema::apply(&conn)?;
        log::debug!("opened database {}", path.display());
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Opens a private in-memory database (for testing).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::configure(&conn)?;
        schema::apply(&conn)?;
        Ok(Self {
            conn,
            path: PathBuf::from(":memory:"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| SisuError::Database(e))?;
        log::debug!("closed database {}", path.display());
        Ok(())
    }
}

impl Close for SqliteStore {
    fn close(self) -> Result<()> {
        SqliteStore::close(self)
    }
}

/// Opens [`SqliteStore`]s at one path, for use with [`crate::crud::Lifecycle`].
#[derive(Debug, Clone)]
pub struct SqliteConnector {
    path: PathBuf,
}

impl SqliteConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Connect for SqliteConnector {
    type Handle = SqliteStore;

    fn connect(&self) -> Result<SqliteStore> {
        SqliteStore::open(&self.path)
    }
}

fn quoted_columns<R: Record>() -> String {
    R::COLUMNS
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ")
}

fn not_found<R: Record>(id: i64) -> SisuError {
    SisuError::NotFound {
        entity: R::SINGULAR,
        id,
    }
}

impl DataStore for SqliteStore {
    fn list<R: Record>(&self) -> Result<Vec<R>> {
        let sql = format!(
            "SELECT id, {} FROM {} ORDER BY id ASC",
            quoted_columns::<R>(),
            R::TABLE
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], R::from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<R>>>()?)
    }

    fn find<R: Record>(&self, id: i64) -> Result<R> {
        let sql = format!(
            "SELECT id, {} FROM {} WHERE id = ?1",
            quoted_columns::<R>(),
            R::TABLE
        );
        self.conn
            .query_row(&sql, [id], R::from_row)
            .optional()?
            .ok_or_else(|| not_found::<R>(id))
    }

    fn insert<R: Record>(&mut self, record: &mut R) -> Result<i64> {
        let placeholders = (1..=R::COLUMNS.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            quoted_columns::<R>(),
            placeholders
        );

        let params = record.to_params();
        let params_refs: Vec<&dyn ToSql> = params.iter().map(AsRef::as_ref).collect();
        self.conn.execute(&sql, params_refs.as_slice())?;

        let id = self.conn.last_insert_rowid();
        record.set_id(id);
        Ok(id)
    }

    fn update<R: Record>(&mut self, record: &R) -> Result<()> {
        let assignments = R::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, c)| format!("\"{}\" = ?{}", c, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            R::TABLE,
            assignments,
            R::COLUMNS.len() + 1
        );

        let id = record.id();
        let params = record.to_params();
        let mut params_refs: Vec<&dyn ToSql> = params.iter().map(AsRef::as_ref).collect();
        params_refs.push(&id);

        if self.conn.execute(&sql, params_refs.as_slice())? == 0 {
            return Err(not_found::<R>(id));
        }
        Ok(())
    }

    fn delete<R: Record>(&mut self, id: i64) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", R::TABLE);
        if self.conn.execute(&sql, [id])? == 0 {
            return Err(not_found::<R>(id));
        }
        Ok(())
    }
}
