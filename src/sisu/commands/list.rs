use crate::crud::table::render_table;
use crate::crud::EntityDescriptor;
use crate::error::Result;

/// What `list` prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Table {
        headers: &'static [&'static str],
        rows: Vec<Vec<String>>,
    },
    /// `(id, display line)` per record
    Lines(Vec<(i64, String)>),
}

impl Listing {
    pub fn render(&self) -> String {
        match self {
            Listing::Table { headers, rows } => render_table(headers, rows),
            Listing::Lines(lines) => lines
                .iter()
                .map(|(id, line)| format!("{}\t{}\n", id, line))
                .collect(),
        }
    }
}

pub fn run<T, S>(descriptor: &EntityDescriptor<T, S>, store: &S) -> Result<Listing> {
    let records = (descriptor.list)(store)?;

    Ok(match &descriptor.table {
        Some(table) => Listing::Table {
            headers: table.headers,
            rows: records.iter().map(table.row).collect(),
        },
        None => Listing::Lines(records.iter().map(descriptor.format).collect()),
    })
}
