//! # Sisu CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/sisu/cli/`, and
//! this file only invokes `cli::run()` and turns an error into a one-line
//! diagnostic and exit status 1.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/sisu/cli/)                                  │
//! │  - clap parsing and entity registration (setup, registrar) │
//! │  - Dispatch and lifecycle wiring (commands.rs)              │
//! │  - Terminal input and rendering (input, render, styles)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (sisu::commands, sisu::crud, sisu::store)          │
//! │  - Pure business logic + data access                        │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Library: unit tests beside the code, mostly against `InMemoryStore`.
//! - CLI modules: parsing, rendering and dispatch tests against temp databases.
//! - `tests/`: end-to-end runs of the built binary with `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
