//! Everything the CLI prints, as strings first so it can be tested.

use super::styles::WIZARD_STYLES;
use colored::Colorize;
use sisu::commands::{CmdMessage, MessageLevel};
use sisu::crud::{CompletionEntry, Prompt};

pub const WIZARD_HINT: &str = "(enter to confirm, ctrl+c to cancel)";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// The lines shown above the editable input: `[i/n] Label`, then the
/// validation error from the previous attempt, if any.
pub fn render_prompt(prompt: &Prompt<'_>) -> String {
    let styles = &*WIZARD_STYLES;
    let mut output = format!(
        "{} {}\n",
        styles.step.apply_to(format!("[{}/{}]", prompt.step, prompt.total)),
        styles.label.apply_to(prompt.label)
    );
    if let Some(error) = prompt.error {
        output.push_str(&format!("{}\n", styles.error.apply_to(format!("! {}", error))));
    }
    output
}

pub fn render_hint() -> String {
    format!("{}\n", WIZARD_STYLES.hint.apply_to(WIZARD_HINT))
}

/// One `id<TAB>hint` line per entry, as the completion scripts expect.
pub fn render_completions(entries: &[CompletionEntry]) -> String {
    entries.iter().map(|e| format!("{}\n", e)).collect()
}
