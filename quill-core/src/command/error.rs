//! Errors raised while dispatching or executing a command.
use thiserror::Error;

/// An error raised while dispatching or executing a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The command line held no label.
    #[error("No command given")]
    EmptyCommand,
    /// No command is registered under the label.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    /// The sender lacks the permission the command requires.
    #[error("Missing permission: {0}")]
    PermissionDenied(String),
    /// An argument was missing or could not be parsed.
    #[error("Expected {expected} at argument {index}")]
    InvalidArgument {
        /// The position of the offending argument.
        index: usize,
        /// A description of what was expected there.
        expected: &'static str,
    },
    /// The arguments did not match the command's usage.
    #[error("Usage: {0}")]
    Usage(String),
    /// A name or alias is already taken by another command.
    #[error("A command named {0} is already registered")]
    AlreadyRegistered(String),
}
