//! This module contains everything related to commands.
pub mod arguments;
pub mod commands;
pub mod dispatcher;
pub mod error;
pub mod sender;

use crate::command::arguments::CommandArguments;
use crate::command::error::CommandError;

/// Describes a registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    names: Vec<String>,
    description: String,
    permission: Option<String>,
    usage: Option<String>,
}

impl CommandInfo {
    /// Creates a command descriptor with its primary name.
    #[must_use]
    pub fn new(name: &str, description: impl Into<String>) -> Self {
        Self {
            names: vec![name.to_owned()],
            description: description.into(),
            permission: None,
            usage: None,
        }
    }

    /// Adds alternative names the command can be invoked with.
    #[must_use]
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.names
            .extend(aliases.iter().map(|alias| (*alias).to_owned()));
        self
    }

    /// Requires senders to hold `permission` to run the command.
    #[must_use]
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Sets the usage line shown on misuse.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// The primary name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    /// The primary name followed by every alias.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// A short description of what the command does.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The permission required to run the command, if any.
    #[must_use]
    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    /// The usage line, falling back to the bare name.
    #[must_use]
    pub fn usage(&self) -> &str {
        self.usage.as_deref().unwrap_or_else(|| self.name())
    }

    /// A usage error for this command.
    #[must_use]
    pub fn usage_error(&self) -> CommandError {
        CommandError::Usage(self.usage().to_owned())
    }
}

/// Runs a command once its arguments are known.
pub trait CommandExecutor: Send + Sync {
    /// Executes the command.
    fn execute(&self, args: &CommandArguments) -> Result<(), CommandError>;
}

impl<F> CommandExecutor for F
where
    F: Fn(&CommandArguments) -> Result<(), CommandError> + Send + Sync,
{
    fn execute(&self, args: &CommandArguments) -> Result<(), CommandError> {
        self(args)
    }
}
