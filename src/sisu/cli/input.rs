//! Wizard input from the terminal, through rustyline.
//!
//! The editor is created on the first prompt, so commands that never ask for
//! input (`list`, `rm`) do not touch the terminal. Prompts go to stdout and
//! each answer line starts pre-filled with the field's initial text.

use super::render::{render_hint, render_prompt};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sisu::crud::{Line, LineSource, Prompt};
use sisu::error::{Result, SisuError};

const INPUT_PROMPT: &str = "> ";

#[derive(Default)]
pub struct TerminalInput {
    editor: Option<DefaultEditor>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn editor(&mut self) -> Result<&mut DefaultEditor> {
        if self.editor.is_none() {
            let editor = DefaultEditor::new().map_err(|e| SisuError::Input(e.to_string()))?;
            self.editor = Some(editor);
        }
        self.editor
            .as_mut()
            .ok_or_else(|| SisuError::Input("line editor unavailable".to_string()))
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &Prompt<'_>) -> Result<Line> {
        if prompt.step == 1 && prompt.error.is_none() {
            print!("{}", render_hint());
        }
        print!("{}", render_prompt(prompt));

        let editor = self.editor()?;
        match editor.readline_with_initial(INPUT_PROMPT, (prompt.initial, "")) {
            Ok(line) => Ok(Line::Submitted(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                log::debug!("wizard interrupted at step {}", prompt.step);
                Ok(Line::Interrupted)
            }
            Err(e) => Err(SisuError::Input(e.to_string())),
        }
    }
}
