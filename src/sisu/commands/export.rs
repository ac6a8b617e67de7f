use super::{CmdMessage, CmdResult};
use crate::entities::Entity;
use crate::error::{Result, SisuError};
use crate::model::{CalendarNote, Coach, Milestone, Review, Session, Task};
use crate::store::{DataStore, Record};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Every exportable table, in `--all` order.
pub const TABLES: &[&str] = &[
    Task::TABLE,
    Session::TABLE,
    Milestone::TABLE,
    Review::TABLE,
    Coach::TABLE,
    CalendarNote::TABLE,
];

/// Writes `<table>.csv` into `dir` for each requested table.
///
/// Table names are checked before anything is written, so an unknown name
/// leaves no partial export behind.
pub fn run<S: DataStore>(store: &S, tables: &[String], dir: &Path) -> Result<CmdResult> {
    if let Some(unknown) = tables.iter().find(|t| !TABLES.contains(&t.as_str())) {
        return Err(SisuError::Api(format!(
            "unknown table {:?} (expected one of: {})",
            unknown,
            TABLES.join(", ")
        )));
    }

    fs::create_dir_all(dir)?;

    let mut result = CmdResult::default();
    let mut written = Vec::new();
    for table in tables {
        let path = match table.as_str() {
            "tasks" => export_table::<Task, S>(store, dir)?,
            "sessions" => export_table::<Session, S>(store, dir)?,
            "milestones" => export_table::<Milestone, S>(store, dir)?,
            "reviews" => export_table::<Review, S>(store, dir)?,
            "coach" => export_table::<Coach, S>(store, dir)?,
            "calendar" => export_table::<CalendarNote, S>(store, dir)?,
            other => return Err(SisuError::Api(format!("unknown table {:?}", other))),
        };
        result.add_message(CmdMessage::success(format!("Exported {}", path.display())));
        written.push(path);
    }

    Ok(result.with_written_files(written))
}

fn export_table<T: Entity, S: DataStore>(store: &S, dir: &Path) -> Result<PathBuf> {
    let records = store.list::<T>()?;
    let path = dir.join(format!("{}.csv", T::TABLE));

    let mut out = BufWriter::new(File::create(&path)?);
    let header: Vec<&str> = std::iter::once("id").chain(T::COLUMNS.iter().copied()).collect();
    write_record(&mut out, &header)?;
    for record in &records {
        write_record(&mut out, &record.csv_row())?;
    }
    out.flush()?;

    log::debug!("wrote {} {} rows to {}", records.len(), T::TABLE, path.display());
    Ok(path)
}

fn write_record<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S]) -> std::io::Result<()> {
    let line = cells
        .iter()
        .map(|c| csv_field(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(out, "{}", line)
}

/// Quotes a cell when it holds a comma, quote or line break (RFC 4180).
fn csv_field(value: &str) -> String {
    if value.contains(|c| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
