use super::registrar::EntityGroup;
use clap::{Command, CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
}

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2025-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

const ABOUT: &str = "Track goals, work sessions, milestones and reviews";

#[derive(Parser, Debug)]
#[command(name = "sisu", bin_name = "sisu", version = get_version())]
#[command(about = ABOUT, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// SQLite database file [default: from config, else sisu.db]
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub db: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Commands that are not tied to one entity. Entity groups (`task`, `session`,
/// ...) are added at runtime by [`build_command`].
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database if needed and apply the schema
    #[command(display_order = 20)]
    Migrate,

    /// Export one or more tables to CSV files
    #[command(display_order = 21)]
    Export {
        /// Tables to export (tasks sessions milestones reviews coach calendar)
        #[arg(num_args = 0..)]
        tables: Vec<String>,

        /// Export all tables
        #[arg(long)]
        all: bool,

        /// Directory to write the CSV files into [default: from config, else .]
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Show or set configuration (db_path, export_dir)
    #[command(display_order = 30)]
    Config {
        /// Configuration key
        key: Option<String>,

        /// New value; omit to show the current one
        value: Option<String>,
    },

    /// Generate shell completions
    #[command(display_order = 31)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },

    /// Output id suggestions for shell completion (hidden)
    #[command(hide = true, name = "__complete")]
    Complete {
        /// Entity command name (task, session, ...)
        entity: String,

        /// Subcommand being completed (rm, edit)
        action: String,

        /// Arguments typed so far; the last one is the partial being completed
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

/// The full command tree: derived globals and commands plus one subcommand per entity.
pub fn build_command(groups: &[Box<dyn EntityGroup>]) -> Command {
    let mut cmd = Cli::command();
    for (i, group) in groups.iter().enumerate() {
        cmd = cmd.subcommand(group.command().display_order(i + 1));
    }
    cmd
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Entity,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Entity => "Entity Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str, entities: &[&str]) -> Option<Self> {
        match name {
            "migrate" | "export" => Some(CommandGroup::Data),
            "config" | "completions" | "help" => Some(CommandGroup::Misc),
            n if entities.contains(&n) => Some(CommandGroup::Entity),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Entity, CommandGroup::Data, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help(groups: &[Box<dyn EntityGroup>]) -> String {
    let cmd = build_command(groups);
    let version = cmd.get_version().unwrap_or("unknown");
    let entities: Vec<&str> = groups.iter().map(|g| g.name()).collect();

    let mut output = String::new();
    output.push_str(&format!("sisu {version}\n"));
    output.push_str(ABOUT);
    output.push_str("\n\n");
    output.push_str("Usage: sisu [OPTIONS] <COMMAND>\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set()
                    && CommandGroup::for_command(sc.get_name(), &entities) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --db <PATH>  SQLite database file\n");
    output.push_str("  -v, --verbose    Verbose output (debug logging)\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help(groups: &[Box<dyn EntityGroup>]) {
    print!("{}", get_grouped_help(groups));
}

/// Prints help for a top-level command by name
pub fn print_help_for_command(groups: &[Box<dyn EntityGroup>], name: &str) {
    let mut cmd = build_command(groups);
    match cmd.find_subcommand_mut(name) {
        Some(sub) => print!("{}", sub.render_help()),
        None => {
            eprintln!("Unknown command: {}", name);
            eprintln!();
            print_grouped_help(groups);
        }
    }
}
