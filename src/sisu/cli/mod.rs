//! # CLI Behavior
//!
//! This is the terminal client for the sisu library. It is the only code that
//! reads from the terminal, prints, or decides the exit status.
//!
//! ## Command Shape
//!
//! ```text
//! sisu <entity> list | rm <ID>... | add | edit <ID>
//! sisu migrate
//! sisu export [TABLE...] [--all] [--dir DIR]
//! sisu completions <bash|zsh>
//! ```
//!
//! Entities are `task`, `session`, `milestone`, `review`, `coach` and
//! `calendar`. Running `sisu` with no arguments prints grouped help.
//!
//! ## Interactive Forms
//!
//! `add` and `edit` walk the entity's fields one at a time. Each answer line is
//! pre-filled (the stored value on `edit`), Enter accepts it, and a rejected
//! answer is shown again with the error under the prompt. Ctrl+C or Ctrl+D
//! cancels the whole form and nothing is written.
//!
//! ## Layout
//!
//! - `setup.rs`: clap definitions, version string, grouped help
//! - `registrar.rs`: the generated per-entity command groups
//! - `commands.rs`: dispatch and handlers
//! - `input.rs`: rustyline-backed wizard input
//! - `render.rs` / `styles.rs`: output formatting
//! - `complete.rs` + `*.completion.sh`: shell completion

mod commands;
mod complete;
mod input;
mod registrar;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
