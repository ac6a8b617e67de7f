use std::collections::HashSet;
use std::fmt;

/// One shell suggestion, printed as `id<TAB>hint`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEntry {
    pub id_text: String,
    pub hint: String,
}

impl fmt::Display for CompletionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.id_text, self.hint)
    }
}

/// Builds id suggestions from a record listing.
///
/// A record is skipped when its id is in `excluded`, was already suggested, or
/// does not start with the (trimmed) `partial`. The hint is `hint(record)` when
/// given, else the display line from `format`. A failed listing suggests nothing.
pub fn build<T, E, F>(
    items: Result<Vec<T>, E>,
    format: F,
    hint: Option<fn(&T) -> String>,
    excluded: &[String],
    partial: &str,
) -> Vec<CompletionEntry>
where
    E: fmt::Display,
    F: Fn(&T) -> (i64, String),
{
    let items = match items {
        Ok(items) => items,
        Err(e) => {
            log::debug!("completion listing failed: {}", e);
            return Vec::new();
        }
    };

    let partial = partial.trim();
    let mut seen: HashSet<String> = excluded.iter().map(|s| s.trim().to_string()).collect();
    let mut entries = Vec::new();

    for item in &items {
        let (id, line) = format(item);
        let id_text = id.to_string();
        if !partial.is_empty() && !id_text.starts_with(partial) {
            continue;
        }
        if !seen.insert(id_text.clone()) {
            continue;
        }
        let hint = match hint {
            Some(hint) => hint(item),
            None => line,
        };
        entries.push(CompletionEntry {
            id_text,
            hint: single_line(&hint),
        });
    }

    entries
}

// Tabs and newlines would split the entry in the shell.
fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\t' || c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
