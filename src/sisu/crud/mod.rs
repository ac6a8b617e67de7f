//! # Generic CRUD Framework
//!
//! The pieces every entity command is assembled from:
//!
//! - [`field`]: typed input descriptors (`validate → parse → assign`)
//! - [`wizard`]: the sequential form over a list of fields
//! - [`descriptor`]: how to list, format, remove and hint one entity
//! - [`completion`]: `id<TAB>hint` suggestions for id arguments
//! - [`table`]: fixed-width ASCII tables for `list`
//! - [`lifecycle`]: open-before / close-after ownership of the database handle
//!
//! None of these know about a terminal. The CLI supplies the line source for
//! the wizard and prints what the commands return.

pub mod completion;
pub mod descriptor;
pub mod field;
pub mod lifecycle;
pub mod table;
pub mod wizard;

pub use completion::CompletionEntry;
pub use descriptor::{EntityDescriptor, TableSpec};
pub use field::{BlankText, Field, FieldError};
pub use lifecycle::{scoped, Close, Connect, Lifecycle};
pub use wizard::{Line, LineSource, Prompt, WizardOutcome, WizardSession, WizardState};
