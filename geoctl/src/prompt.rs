//! Interactive prompts for the terminal.
//!
//! Confirmation is behind the [Confirmer] trait so destructive commands can
//! be driven deterministically in tests; the text helpers wrap [inquire]
//! for the interactive add/modify paths.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Prompt(#[from] inquire::InquireError),
}

pub trait Confirmer {
    fn confirm(&self, message: &str) -> Result<bool, Error>;
}

/// Asks the operator on the terminal, defaulting to "no".
pub struct ConsoleConfirmer;

impl Confirmer for ConsoleConfirmer {
    fn confirm(&self, message: &str) -> Result<bool, Error> {
        inquire::Confirm::new(message)
            .with_default(false)
            .prompt()
            .map_err(Error::from)
    }
}

pub fn required_text(message: &str) -> Result<String, Error> {
    inquire::Text::new(message).prompt().map_err(Error::from)
}

/// Prompt for an optional value; an empty answer means "skip".
pub fn optional_text(message: &str) -> Result<Option<String>, Error> {
    let val = inquire::Text::new(message).prompt()?;
    match val.trim().is_empty() {
        true => Ok(None),
        false => Ok(Some(val)),
    }
}

/// Prompt pre-filled with the current value, for edit-in-place.
pub fn prefilled_text(message: &str, current: &str) -> Result<String, Error> {
    inquire::Text::new(message)
        .with_initial_value(current)
        .prompt()
        .map_err(Error::from)
}
