use core_types::CoreError;
use thiserror::Error;

/// Problems with a line typed into the interactive session.
///
/// These are reported back to the user and the session carries on; they never
/// reach the roster or the calculation engine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a valid investor id.")]
    InvalidId(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
