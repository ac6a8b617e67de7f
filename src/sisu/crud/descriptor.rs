use super::completion::{self, CompletionEntry};
use crate::error::Result;

/// Table layout for `list`. Headers and row builder always come together.
pub struct TableSpec<T> {
    pub headers: &'static [&'static str],
    pub row: fn(&T) -> Vec<String>,
}

// Derived impls would require `T: Clone`.
impl<T> Clone for TableSpec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TableSpec<T> {}

/// Describes how the generic `list`/`rm`/completion commands handle one entity
/// stored in `S`.
pub struct EntityDescriptor<T, S> {
    /// Used in messages: "Removed task 3"
    pub singular: &'static str,
    pub list: fn(&S) -> Result<Vec<T>>,
    pub remove: fn(&mut S, i64) -> Result<()>,
    /// `(id, display line)`
    pub format: fn(&T) -> (i64, String),
    pub table: Option<TableSpec<T>>,
    /// Completion hint; the display line is used when absent
    pub hint: Option<fn(&T) -> String>,
}

impl<T, S> EntityDescriptor<T, S> {
    /// Id suggestions for a partially typed argument. Never fails.
    pub fn complete(&self, store: &S, excluded: &[String], partial: &str) -> Vec<CompletionEntry> {
        completion::build((self.list)(store), self.format, self.hint, excluded, partial)
    }
}
