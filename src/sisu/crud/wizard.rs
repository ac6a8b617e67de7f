//! The sequential form wizard.
//!
//! [`WizardSession`] is the state machine: it owns the field list and a mutable
//! borrow of the record being filled, and moves through
//! `Active(0) .. Active(n-1)` to `Completed`, or to `Cancelled` from any active
//! state. It does no I/O. [`run`] drives a session from a [`LineSource`].

use super::field::Field;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Active(usize),
    Completed,
    Cancelled,
}

/// How a wizard run ended. A cancelled target must not be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed,
    Cancelled,
}

pub struct WizardSession<'a, T> {
    fields: Vec<Field<T>>,
    index: usize,
    target: &'a mut T,
    text: String,
    error: Option<String>,
    cancelled: bool,
}

impl<'a, T> WizardSession<'a, T> {
    pub fn new(fields: Vec<Field<T>>, target: &'a mut T) -> Self {
        let text = fields
            .first()
            .map(|f| f.initial().to_string())
            .unwrap_or_default();
        Self {
            fields,
            index: 0,
            target,
            text,
            error: None,
            cancelled: false,
        }
    }

    pub fn state(&self) -> WizardState {
        if self.cancelled {
            WizardState::Cancelled
        } else if self.index >= self.fields.len() {
            WizardState::Completed
        } else {
            WizardState::Active(self.index)
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.state(), WizardState::Active(_))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field waiting for input, if any.
    pub fn current(&self) -> Option<&Field<T>> {
        match self.state() {
            WizardState::Active(i) => self.fields.get(i),
            _ => None,
        }
    }

    /// Editable text for the current field.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Message from the last rejected submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn target(&self) -> &T {
        &*self.target
    }

    /// Submits `text` for the current field: validate, parse, assign, advance.
    ///
    /// A rejected submission keeps the index, remembers the error and keeps
    /// `text` as the editable text. Submitting after the session finished is a
    /// no-op.
    pub fn submit(&mut self, text: &str) -> WizardState {
        let field = match self.state() {
            WizardState::Active(i) => &self.fields[i],
            finished => return finished,
        };

        let accepted = field
            .validate(text)
            .and_then(|()| field.apply(self.target, text));

        match accepted {
            Ok(()) => {
                self.index += 1;
                self.error = None;
                self.text = self
                    .fields
                    .get(self.index)
                    .map(|f| f.initial().to_string())
                    .unwrap_or_default();
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.text = text.to_string();
            }
        }
        self.state()
    }

    pub fn cancel(&mut self) {
        if !self.is_finished() {
            self.cancelled = true;
        }
    }
}

/// What the wizard shows while waiting for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt<'p> {
    /// 1-based position of the field
    pub step: usize,
    pub total: usize,
    pub label: &'p str,
    /// Text pre-filled in the editable line
    pub initial: &'p str,
    pub error: Option<&'p str>,
}

impl Prompt<'_> {
    /// `[i/n] Label`
    pub fn header(&self) -> String {
        format!("[{}/{}] {}", self.step, self.total, self.label)
    }
}

pub enum Line {
    Submitted(String),
    /// The user aborted (Ctrl-C / Ctrl-D)
    Interrupted,
}

/// Where the wizard reads its answers from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &Prompt<'_>) -> Result<Line>;
}

/// Runs the fields against `target` until every field is accepted or the user cancels.
pub fn run<T, L: LineSource + ?Sized>(
    fields: Vec<Field<T>>,
    target: &mut T,
    source: &mut L,
) -> Result<WizardOutcome> {
    let mut session = WizardSession::new(fields, target);
    loop {
        let line = match session.state() {
            WizardState::Completed => return Ok(WizardOutcome::Completed),
            WizardState::Cancelled => return Ok(WizardOutcome::Cancelled),
            WizardState::Active(i) => {
                let prompt = Prompt {
                    step: i + 1,
                    total: session.len(),
                    label: session.fields[i].label(),
                    initial: session.text(),
                    error: session.error(),
                };
                source.read_line(&prompt)?
            }
        };

        match line {
            Line::Submitted(text) => {
                session.submit(&text);
            }
            Line::Interrupted => session.cancel(),
        }
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Answers prompts from a fixed script and records every prompt it saw.
    /// Running out of answers counts as an interrupt.
    #[derive(Debug, Default)]
    pub struct ScriptedLines {
        answers: VecDeque<Option<String>>,
        pub seen: Vec<SeenPrompt>,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SeenPrompt {
        pub header: String,
        pub initial: String,
        pub error: Option<String>,
    }

    impl ScriptedLines {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(|a| Some(a.into())).collect(),
                seen: Vec::new(),
            }
        }

        /// Queues an interrupt after the answers given so far.
        pub fn then_interrupt(mut self) -> Self {
            self.answers.push_back(None);
            self
        }
    }

    impl LineSource for ScriptedLines {
        fn read_line(&mut self, prompt: &Prompt<'_>) -> Result<Line> {
            self.seen.push(SeenPrompt {
                header: prompt.header(),
                initial: prompt.initial.to_string(),
                error: prompt.error.map(str::to_string),
            });
            Ok(match self.answers.pop_front().flatten() {
                Some(answer) => Line::Submitted(answer),
                None => Line::Interrupted,
            })
        }
    }
}
