//! Field descriptors for the form wizard.
//!
//! A [`Field`] pairs a label and initial text with a parser and an assignment.
//! The parsed value type is fixed when the field is built and then erased, so a
//! `Vec<Field<T>>` can mix strings, integers and dates while `assign` only ever
//! receives what its own `parse` produced.
//!
//! Blank input is only accepted by the `optional_*` builders, and always yields
//! `None` (or `Some("")` for [`BlankText::Empty`]), never a zero value.

use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A field-local failure, shown inline by the wizard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct FieldError(pub String);

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// What a blank submission means for an optional text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankText {
    /// Blank is "not provided" and stores `NULL`
    Absent,
    /// Blank is "provided, empty" and stores `''`
    Empty,
}

type Validator = Box<dyn Fn(&str) -> Result<(), String>>;
type Apply<T> = Box<dyn Fn(&mut T, &str) -> Result<(), FieldError>>;

pub struct Field<T> {
    label: String,
    initial: String,
    validator: Option<Validator>,
    apply: Apply<T>,
}

impl<T: 'static> Field<T> {
    /// Builds a field from a parser and the assignment of its parsed value.
    pub fn new<V, P, A>(label: impl Into<String>, initial: impl Into<String>, parse: P, assign: A) -> Self
    where
        V: 'static,
        P: Fn(&str) -> Result<V, FieldError> + 'static,
        A: Fn(&mut T, V) + 'static,
    {
        Self {
            label: label.into(),
            initial: initial.into(),
            validator: None,
            apply: Box::new(move |target, text| {
                let value = parse(text)?;
                assign(target, value);
                Ok(())
            }),
        }
    }

    /// Required, non-blank text. Surrounding whitespace is trimmed.
    pub fn text<A>(label: impl Into<String>, initial: impl Into<String>, assign: A) -> Self
    where
        A: Fn(&mut T, String) + 'static,
    {
        Self::new(label, initial, parse_text, assign)
    }

    pub fn optional_text<A>(
        label: impl Into<String>,
        initial: impl Into<String>,
        blank: BlankText,
        assign: A,
    ) -> Self
    where
        A: Fn(&mut T, Option<String>) + 'static,
    {
        Self::new(label, initial, move |s| Ok(parse_optional_text(s, blank)), assign)
    }

    pub fn integer<A>(label: impl Into<String>, initial: impl Into<String>, assign: A) -> Self
    where
        A: Fn(&mut T, i64) + 'static,
    {
        Self::new(label, initial, parse_integer, assign)
    }

    pub fn optional_integer<A>(label: impl Into<String>, initial: impl Into<String>, assign: A) -> Self
    where
        A: Fn(&mut T, Option<i64>) + 'static,
    {
        Self::new(label, initial, parse_optional_integer, assign)
    }

    pub fn date<A>(label: impl Into<String>, initial: impl Into<String>, assign: A) -> Self
    where
        A: Fn(&mut T, NaiveDate) + 'static,
    {
        Self::new(label, initial, parse_date, assign)
    }

    pub fn optional_date<A>(label: impl Into<String>, initial: impl Into<String>, assign: A) -> Self
    where
        A: Fn(&mut T, Option<NaiveDate>) + 'static,
    {
        Self::new(label, initial, parse_optional_date, assign)
    }

    /// Runs `check` on the raw text before parsing.
    pub fn with_validator<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + 'static,
    {
        self.validator = Some(Box::new(check));
        self
    }
}

impl<T> Field<T> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Always succeeds when no validator is attached.
    pub fn validate(&self, text: &str) -> Result<(), FieldError> {
        match &self.validator {
            Some(check) => check(text).map_err(FieldError),
            None => Ok(()),
        }
    }

    /// Parses `text` and, only on success, writes the value into `target`.
    pub fn apply(&self, target: &mut T, text: &str) -> Result<(), FieldError> {
        (self.apply)(target, text)
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("label", &self.label)
            .field("initial", &self.initial)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

// --- Parsers ---

pub fn parse_text(s: &str) -> Result<String, FieldError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("value cannot be blank"));
    }
    Ok(trimmed.to_string())
}

pub fn parse_optional_text(s: &str, blank: BlankText) -> Option<String> {
    let trimmed = s.trim();
    match (trimmed.is_empty(), blank) {
        (true, BlankText::Absent) => None,
        (true, BlankText::Empty) => Some(String::new()),
        (false, _) => Some(trimmed.to_string()),
    }
}

pub fn parse_integer(s: &str) -> Result<i64, FieldError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("a number is required"));
    }
    trimmed
        .parse()
        .map_err(|_| FieldError::new(format!("{:?} is not a whole number", trimmed)))
}

pub fn parse_optional_integer(s: &str) -> Result<Option<i64>, FieldError> {
    if s.trim().is_empty() {
        return Ok(None);
    }
    parse_integer(s).map(Some)
}

/// Accepts only the canonical `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate, FieldError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("a date is required (YYYY-MM-DD)"));
    }
    let invalid = || FieldError::new(format!("{:?} is not a date (YYYY-MM-DD)", trimmed));
    if trimmed.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

pub fn parse_optional_date(s: &str) -> Result<Option<NaiveDate>, FieldError> {
    if s.trim().is_empty() {
        return Ok(None);
    }
    parse_date(s).map(Some)
}

// --- Display helpers (inverse of the parsers, used to seed edits) ---

pub fn show_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn show_optional_date(date: &Option<NaiveDate>) -> String {
    date.as_ref().map(show_date).unwrap_or_default()
}

pub fn show_optional_integer(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn show_optional_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
