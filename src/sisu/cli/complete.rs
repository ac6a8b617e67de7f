//! The hidden `__complete` command behind the shell completion scripts.
//!
//! Output is one `id<TAB>hint` line per candidate. Completion must never break
//! the shell, so an unknown entity or an unreadable database prints nothing and
//! still exits 0; the cause is only logged.

use super::registrar::{find_group, EntityGroup};
use super::render::render_completions;
use sisu::crud::{scoped, CompletionEntry};
use sisu::error::Result;
use sisu::store::sqlite::SqliteConnector;

pub fn handle_complete(
    groups: &[Box<dyn EntityGroup>],
    connector: SqliteConnector,
    entity: &str,
    action: &str,
    words: &[String],
) -> Result<()> {
    print!("{}", render_completions(&candidates(groups, connector, entity, action, words)));
    Ok(())
}

fn candidates(
    groups: &[Box<dyn EntityGroup>],
    connector: SqliteConnector,
    entity: &str,
    action: &str,
    words: &[String],
) -> Vec<CompletionEntry> {
    let Some(group) = find_group(groups, entity) else {
        log::debug!("no completions for unknown entity {:?}", entity);
        return Vec::new();
    };

    let result = scoped(connector, |lifecycle| {
        let store = lifecycle.ensure_open()?;
        Ok(group.complete(store, action, words))
    });
    match result {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("completion for {} {} failed: {}", entity, action, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::registrar::entity_groups;
    use sisu::model::Coach;
    use sisu::store::sqlite::SqliteStore;
    use sisu::store::DataStore;

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lists_coach_ids_with_trigger_hints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sisu.db");
        {
            let mut store = SqliteStore::open(&path).unwrap();
            for trigger in ["monday", "slump"] {
                store
                    .insert(&mut Coach {
                        trigger: trigger.into(),
                        content: "keep going".into(),
                        ..Default::default()
                    })
                    .unwrap();
            }
        }

        let entries = candidates(
            &entity_groups(),
            SqliteConnector::new(&path),
            "coach",
            "rm",
            &words(&[""]),
        );

        assert_eq!(render_completions(&entries), "1\tmonday\n2\tslump\n");
    }

    #[test]
    fn unknown_entity_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let entries = candidates(
            &entity_groups(),
            SqliteConnector::new(dir.path().join("sisu.db")),
            "habit",
            "rm",
            &[],
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn unreadable_database_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file.
        let entries = candidates(
            &entity_groups(),
            SqliteConnector::new(dir.path()),
            "task",
            "rm",
            &[],
        );
        assert!(entries.is_empty());
    }
}
