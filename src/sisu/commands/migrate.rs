use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::schema;
use crate::store::sqlite::SqliteStore;

/// Applies the schema to an open database. Safe to repeat.
pub fn run(store: &SqliteStore) -> Result<CmdResult> {
    schema::apply(store.conn())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Migrations applied; database at {}",
        store.path().display()
    )));
    Ok(result)
}
