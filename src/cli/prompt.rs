//! Interactive prompts for inputs not given on the command line.

use crate::error::BaselineError;
use dialoguer::Input;
use std::path::PathBuf;

/// Use `given`, or ask for it on the terminal
pub fn path_or_prompt(given: Option<PathBuf>, prompt: &str) -> Result<PathBuf, BaselineError> {
    if let Some(path) = given {
        return Ok(path);
    }

    let answer: String = Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| BaselineError::InputError(format!("Failed to get user input: {}", e)))?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(BaselineError::InputError(format!("{}: no value given", prompt)));
    }
    Ok(PathBuf::from(answer))
}
