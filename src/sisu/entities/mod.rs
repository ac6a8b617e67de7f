//! Per-entity wiring: display formats, wizard fields, CSV rows and the
//! descriptor handed to the generic `list`/`rm`/completion commands.

use crate::crud::field::show_date;
use crate::crud::{EntityDescriptor, Field, TableSpec};
use crate::store::{DataStore, Record};
use chrono::NaiveDate;

mod calendar;
mod coach;
mod milestone;
mod review;
mod session;
mod task;

/// A record type the CLI can list, remove, add and edit.
pub trait Entity: Record + Default {
    /// `(id, one-line description)` used by `list` and as the fallback hint
    fn format(&self) -> (i64, String);

    /// Renders `list` as a table instead of `id<TAB>line`
    fn table() -> Option<TableSpec<Self>> {
        None
    }

    fn hint() -> Option<fn(&Self) -> String> {
        None
    }

    /// Wizard fields seeded from `seed`. A seed with id `0` is a new record;
    /// its required dates start at `today`.
    fn fields(seed: &Self, today: NaiveDate) -> Vec<Field<Self>>;

    /// Cells for `export`, in `id, COLUMNS...` order
    fn csv_row(&self) -> Vec<String>;

    /// Fills defaults that depend on the current date.
    fn before_insert(&mut self, _today: NaiveDate) {}
}

pub fn descriptor<T: Entity, S: DataStore>() -> EntityDescriptor<T, S> {
    EntityDescriptor {
        singular: T::SINGULAR,
        list: |store: &S| store.list::<T>(),
        remove: |store: &mut S, id| store.delete::<T>(id),
        format: T::format,
        table: T::table(),
        hint: T::hint(),
    }
}

/// Initial text for a required date: `today` for new records.
fn seed_date(id: i64, date: &NaiveDate, today: NaiveDate) -> String {
    if id == 0 {
        show_date(&today)
    } else {
        show_date(date)
    }
}

fn cell<V: ToString>(value: &Option<V>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn date_cell(value: &Option<NaiveDate>) -> String {
    value.as_ref().map(show_date).unwrap_or_default()
}
