//! One command group per entity, generated from its [`Entity`] impl.
//!
//! Every group has the same shape:
//!
//! ```text
//! sisu <entity> list
//! sisu <entity> rm <ID>...
//! sisu <entity> add
//! sisu <entity> edit <ID>
//! ```
//!
//! The group is object safe so the dispatcher can hold all six in one list and
//! look them up by name.

use super::render::print_messages;
use chrono::NaiveDate;
use clap::{Arg, ArgMatches, Command};
use sisu::commands::{list, remove, save, CmdMessage};
use sisu::crud::{wizard, CompletionEntry, EntityDescriptor, Lifecycle, LineSource, WizardOutcome};
use sisu::entities::{descriptor, Entity};
use sisu::error::{Result, SisuError};
use sisu::model::{CalendarNote, Coach, Milestone, Review, Session, Task};
use sisu::store::sqlite::{SqliteConnector, SqliteStore};
use std::marker::PhantomData;

pub trait EntityGroup {
    /// Subcommand name, e.g. `task`
    fn name(&self) -> &'static str;

    fn command(&self) -> Command;

    /// Runs the matched action (`list`, `rm`, `add`, `edit`).
    fn run(
        &self,
        lifecycle: &mut Lifecycle<SqliteConnector>,
        matches: &ArgMatches,
        input: &mut dyn LineSource,
        today: NaiveDate,
    ) -> Result<()>;

    /// Id suggestions for `rm`/`edit`. `words` are the arguments typed after
    /// the action; the last one is the partial being completed.
    fn complete(&self, store: &SqliteStore, action: &str, words: &[String])
        -> Vec<CompletionEntry>;
}

pub struct Registered<T> {
    name: &'static str,
    about: &'static str,
    entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Registered<T> {
    pub fn new(name: &'static str, about: &'static str) -> Self {
        Self {
            name,
            about,
            entity: PhantomData,
        }
    }

    fn descriptor(&self) -> EntityDescriptor<T, SqliteStore> {
        descriptor::<T, SqliteStore>()
    }
}

impl<T: Entity> EntityGroup for Registered<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn command(&self) -> Command {
        let singular = T::SINGULAR;
        Command::new(self.name)
            .about(self.about)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(Command::new("list").about(format!("List every {singular}")))
            .subcommand(
                Command::new("rm")
                    .about(format!("Remove {singular} records by id"))
                    .arg(
                        Arg::new("ids")
                            .value_name("ID")
                            .required(true)
                            .num_args(1..)
                            .help("Ids to remove, processed in order"),
                    ),
            )
            .subcommand(Command::new("add").about(format!("Add a {singular} interactively")))
            .subcommand(
                Command::new("edit")
                    .about(format!("Edit a {singular} interactively"))
                    .arg(Arg::new("id").value_name("ID").required(true)),
            )
    }

    fn run(
        &self,
        lifecycle: &mut Lifecycle<SqliteConnector>,
        matches: &ArgMatches,
        input: &mut dyn LineSource,
        today: NaiveDate,
    ) -> Result<()> {
        let descriptor = self.descriptor();
        let store = lifecycle.ensure_open()?;

        match matches.subcommand() {
            Some(("list", _)) => {
                let listing = list::run(&descriptor, store)?;
                print!("{}", listing.render());
                Ok(())
            }
            Some(("rm", sub)) => {
                let ids: Vec<String> = sub
                    .get_many::<String>("ids")
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default();
                let report = remove::run(&descriptor, store, &ids);
                print_messages(&report.messages);
                match report.failure {
                    Some(e) => Err(e),
                    None => Ok(()),
                }
            }
            Some(("add", _)) => {
                let mut record = T::default();
                let fields = T::fields(&record, today);
                match wizard::run(fields, &mut record, input)? {
                    WizardOutcome::Completed => {
                        let result = save::create(store, record, today)?;
                        print_messages(&result.messages);
                    }
                    WizardOutcome::Cancelled => print_cancelled(),
                }
                Ok(())
            }
            Some(("edit", sub)) => {
                let raw = sub.get_one::<String>("id").map(String::as_str).unwrap_or("");
                let mut record: T = save::find(store, raw)?;
                let fields = T::fields(&record, today);
                match wizard::run(fields, &mut record, input)? {
                    WizardOutcome::Completed => {
                        let result = save::update(store, &record)?;
                        print_messages(&result.messages);
                    }
                    WizardOutcome::Cancelled => print_cancelled(),
                }
                Ok(())
            }
            Some((other, _)) => Err(SisuError::Api(format!(
                "unknown {} command: {}",
                self.name, other
            ))),
            None => Err(SisuError::Api(format!("missing {} command", self.name))),
        }
    }

    fn complete(
        &self,
        store: &SqliteStore,
        action: &str,
        words: &[String],
    ) -> Vec<CompletionEntry> {
        let (partial, typed) = match words.split_last() {
            Some((last, rest)) => (last.as_str(), rest),
            None => ("", &[][..]),
        };
        match action {
            "rm" => self.descriptor().complete(store, typed, partial),
            // edit takes a single id
            "edit" if typed.is_empty() => self.descriptor().complete(store, &[], partial),
            _ => Vec::new(),
        }
    }
}

fn print_cancelled() {
    print_messages(&[CmdMessage::warning("Cancelled, nothing saved.")]);
}

/// Every entity group, in help order.
pub fn entity_groups() -> Vec<Box<dyn EntityGroup>> {
    vec![
        Box::new(Registered::<Task>::new("task", "Manage tasks")),
        Box::new(Registered::<Session>::new("session", "Log work sessions")),
        Box::new(Registered::<Milestone>::new("milestone", "Track milestones")),
        Box::new(Registered::<Review>::new("review", "Write weekly reviews")),
        Box::new(Registered::<Coach>::new("coach", "Keep coaching prompts")),
        Box::new(Registered::<CalendarNote>::new("calendar", "Keep calendar notes")),
    ]
}

pub fn find_group<'g>(groups: &'g [Box<dyn EntityGroup>], name: &str) -> Option<&'g dyn EntityGroup> {
    groups.iter().find(|g| g.name() == name).map(|g| g.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sisu::crud::{scoped, Line, Prompt};
    use sisu::store::DataStore;
    use std::collections::VecDeque;

    /// Plays back answers; an exhausted script interrupts.
    #[derive(Default)]
    struct Answers {
        lines: VecDeque<String>,
        initials: Vec<String>,
    }

    impl Answers {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
                initials: Vec::new(),
            }
        }
    }

    impl LineSource for Answers {
        fn read_line(&mut self, prompt: &Prompt<'_>) -> Result<Line> {
            self.initials.push(prompt.initial.to_string());
            Ok(match self.lines.pop_front() {
                Some(line) => Line::Submitted(line),
                None => Line::Interrupted,
            })
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn matches_for(group: &dyn EntityGroup, args: &[&str]) -> ArgMatches {
        let mut argv = vec![group.name()];
        argv.extend_from_slice(args);
        group.command().try_get_matches_from(argv).unwrap()
    }

    fn run_group(
        path: &std::path::Path,
        name: &str,
        args: &[&str],
        lines: &mut Answers,
    ) -> Result<()> {
        let groups = entity_groups();
        let group = find_group(&groups, name).unwrap();
        let matches = matches_for(group, args);
        scoped(SqliteConnector::new(path), |lc| {
            group.run(lc, &matches, lines, today())
        })
    }

    #[test]
    fn groups_have_unique_names_matching_their_records() {
        let groups = entity_groups();
        let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();
        assert_eq!(
            names,
            vec!["task", "session", "milestone", "review", "coach", "calendar"]
        );
        for group in &groups {
            group.command().debug_assert();
        }
    }

    #[test]
    fn add_saves_the_completed_wizard() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sisu.db");
        let mut lines = Answers::new(&["Write book", "", "", ""]);

        run_group(&path, "task", &["add"], &mut lines).unwrap();

        let store = SqliteStore::open(&path).unwrap();
        let tasks = store.list::<Task>().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Write book");
        assert_eq!(tasks[0].date_start, Some(today()));
    }

    #[test]
    fn cancelled_add_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sisu.db");
        let mut lines = Answers::new(&["Write book"]);

        run_group(&path, "task", &["add"], &mut lines).unwrap();

        let store = SqliteStore::open(&path).unwrap();
        assert!(store.list::<Task>().unwrap().is_empty());
    }

    #[test]
    fn edit_starts_from_stored_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sisu.db");
        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.insert(&mut Task::named("Draft")).unwrap();
        }
        let mut lines = Answers::new(&["Final", "", "", ""]);

        run_group(&path, "task", &["edit", "1"], &mut lines).unwrap();

        assert_eq!(lines.initials[0], "Draft");
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.find::<Task>(1).unwrap().name, "Final");
    }

    #[test]
    fn edit_of_missing_id_fails_before_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sisu.db");
        let mut lines = Answers::default();

        let err = run_group(&path, "coach", &["edit", "4"], &mut lines).unwrap_err();

        assert!(matches!(err, SisuError::NotFound { id: 4, .. }));
        assert!(lines.initials.is_empty());
    }

    #[test]
    fn rm_reports_the_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sisu.db");
        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.insert(&mut Task::named("a")).unwrap();
            store.insert(&mut Task::named("b")).unwrap();
        }
        let mut lines = Answers::default();

        let err = run_group(&path, "task", &["rm", "1", "9", "2"], &mut lines).unwrap_err();

        assert!(matches!(err, SisuError::NotFound { id: 9, .. }));
        let store = SqliteStore::open(&path).unwrap();
        let left: Vec<i64> = store.list::<Task>().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(left, vec![2]);
    }

    #[test]
    fn completion_excludes_typed_ids_for_rm_only() {
        let mut store = SqliteStore::open_memory().unwrap();
        for name in ["alpha", "beta", "gamma"] {
            store.insert(&mut Task::named(name)).unwrap();
        }
        let groups = entity_groups();
        let task = find_group(&groups, "task").unwrap();
        let words = |w: &[&str]| w.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let rm: Vec<String> = task
            .complete(&store, "rm", &words(&["2", ""]))
            .iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(rm, vec!["1\talpha", "3\tgamma"]);

        assert_eq!(task.complete(&store, "edit", &words(&["3"])).len(), 1);
        assert!(task.complete(&store, "edit", &words(&["1", ""])).is_empty());
        assert!(task.complete(&store, "list", &[]).is_empty());
        assert_eq!(task.complete(&store, "rm", &[]).len(), 3);
    }
}
