//! Terminal styles for the interactive wizard.
//!
//! Plain command output (success, warning, error lines) is coloured through
//! `colored` in [`super::render`]. The wizard prompt is drawn with
//! `console::Style`, which respects `console::colors_enabled()` and so stays
//! plain when stdout is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub struct WizardStyles {
    /// `[i/n]` progress marker
    pub step: Style,
    pub label: Style,
    /// Inline validation message under the prompt
    pub error: Style,
    /// Key help shown when a form starts
    pub hint: Style,
}

pub static WIZARD_STYLES: Lazy<WizardStyles> = Lazy::new(|| WizardStyles {
    step: Style::new().cyan().bold(),
    label: Style::new().bold(),
    error: Style::new().red(),
    hint: Style::new().dim().italic(),
});
