//! Interactive prompts.

use console::Term;
use dialoguer::Confirm;

use crate::error::{GreenroomError, Result};

use super::Prompt;

/// Convert dialoguer errors to GreenroomError.
fn map_dialoguer_err(e: dialoguer::Error) -> GreenroomError {
    GreenroomError::TerminalInteraction {
        message: e.to_string(),
    }
}

/// Put a yes/no question to the user on the given terminal.
pub fn confirm_user(prompt: &Prompt, term: &Term) -> Result<bool> {
    Confirm::new()
        .with_prompt(&prompt.question)
        .default(prompt.default_yes)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
