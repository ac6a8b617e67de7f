//! # Sisu Architecture
//!
//! Sisu tracks tasks, work sessions, milestones, reviews, coach triggers and
//! calendar notes in a local SQLite file. Every entity gets the same command
//! surface (`list`, `rm`, `add`, `edit`), generated from a small descriptor
//! instead of being written six times.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, registers one command group per entity │
//! │  - Owns the terminal: wizard line editing, colours, exit    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / rm / create / update / export / migrate           │
//! │  - Returns structured results (`CmdResult`, `Listing`, ...) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CRUD Framework (crud/) + Entities (entities/)              │
//! │  - Field descriptors, form wizard, completion, tables       │
//! │  - Scoped open/close of the database handle                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over `Record` types             │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in the Library
//!
//! Below the CLI, code takes Rust arguments and returns Rust values. It never
//! writes to stdout/stderr and never calls `std::process::exit`. The wizard
//! reads through the [`crud::LineSource`] trait, so the same flow runs against a
//! scripted source in tests.
//!
//! ## Errors
//!
//! Field-level validation and parse failures ([`crud::FieldError`]) stay inside
//! the wizard and are shown inline. Everything else is a [`error::SisuError`]
//! propagated with `?` up to `main`, which prints `Error: <message>` and exits 1.
//! A cancelled wizard is an outcome, not an error.
//!
//! ## Module Overview
//!
//! - [`crud`]: Field descriptors, wizard, completion builder, tables, lifecycle
//! - [`entities`]: Per-entity formats, fields and descriptors
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Record types (`Task`, `Session`, ...)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, printing and shell completions for the binary (not part of the lib API)

pub mod commands;
pub mod config;
pub mod crud;
pub mod entities;
pub mod error;
pub mod model;
pub mod store;
