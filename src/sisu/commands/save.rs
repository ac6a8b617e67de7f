use super::{parse_id, CmdMessage, CmdResult};
use crate::entities::Entity;
use crate::error::Result;
use crate::store::DataStore;
use chrono::NaiveDate;

/// Loads the record an `edit` starts from.
pub fn find<T: Entity, S: DataStore>(store: &S, raw_id: &str) -> Result<T> {
    let id = parse_id(raw_id)?;
    store.find::<T>(id)
}

pub fn create<T: Entity, S: DataStore>(
    store: &mut S,
    mut record: T,
    today: NaiveDate,
) -> Result<CmdResult> {
    record.before_insert(today);
    let id = store.insert(&mut record)?;

    let mut result = CmdResult::default().with_affected_ids(vec![id]);
    result.add_message(CmdMessage::success(format!("Created {} {}", T::SINGULAR, id)));
    Ok(result)
}

pub fn update<T: Entity, S: DataStore>(store: &mut S, record: &T) -> Result<CmdResult> {
    store.update(record)?;

    let mut result = CmdResult::default().with_affected_ids(vec![record.id()]);
    result.add_message(CmdMessage::success(format!(
        "Updated {} {}",
        T::SINGULAR,
        record.id()
    )));
    Ok(result)
}
