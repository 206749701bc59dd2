//! Positional access to the arguments of a single command invocation.
use std::str::FromStr;
use std::sync::Arc;

use crate::command::CommandInfo;
use crate::command::sender::CommandSender;
use crate::player::Player;

/// The arguments of one command invocation, along with who sent it and how.
///
/// Lookups never fail loudly: an index past the end or a token that does not
/// parse as the requested type both come back as `None`.
pub struct CommandArguments {
    sender: CommandSender,
    command: Arc<CommandInfo>,
    label: String,
    arguments: Vec<String>,
}

impl CommandArguments {
    /// Wraps an invocation of `command` under `label`.
    #[must_use]
    pub fn new(
        sender: CommandSender,
        command: Arc<CommandInfo>,
        label: impl Into<String>,
        arguments: Vec<String>,
    ) -> Self {
        Self {
            sender,
            command,
            label: label.into(),
            arguments,
        }
    }

    /// The sender of the command.
    #[must_use]
    pub const fn sender(&self) -> &CommandSender {
        &self.sender
    }

    /// The sender as a player, if it is one.
    #[must_use]
    pub const fn player(&self) -> Option<&Arc<Player>> {
        self.sender.as_player()
    }

    /// The invoked command.
    #[must_use]
    pub fn command(&self) -> &CommandInfo {
        &self.command
    }

    /// The name or alias the command was invoked with.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Every argument, in order.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Whether the command was invoked without arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// The argument at `index`.
    #[must_use]
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    /// The argument at `index` parsed as `T`.
    #[must_use]
    pub fn argument_as<T: FromStr>(&self, index: usize) -> Option<T> {
        self.argument(index)?.parse().ok()
    }

    /// The argument at `index` as a base-10 `i32`.
    #[must_use]
    pub fn argument_as_int(&self, index: usize) -> Option<i32> {
        self.argument_as(index)
    }

    /// The argument at `index` as a base-10 `i64`.
    #[must_use]
    pub fn argument_as_long(&self, index: usize) -> Option<i64> {
        self.argument_as(index)
    }

    /// The argument at `index` as an `f32`.
    #[must_use]
    pub fn argument_as_float(&self, index: usize) -> Option<f32> {
        self.argument_as(index)
    }

    /// The argument at `index` as an `f64`.
    #[must_use]
    pub fn argument_as_double(&self, index: usize) -> Option<f64> {
        self.argument_as(index)
    }

    /// True only if the argument at `index` is exactly `"true"`.
    ///
    /// Unlike the numeric accessors this does not wrap the result: a missing
    /// or unrecognised argument is simply `false`.
    #[must_use]
    pub fn argument_as_bool(&self, index: usize) -> bool {
        self.argument(index) == Some("true")
    }

    /// Whether the sender is a player.
    #[must_use]
    pub const fn is_sender_player(&self) -> bool {
        self.sender.is_player()
    }

    /// Whether the sender is the console or another non-player.
    #[must_use]
    pub const fn is_sender_console(&self) -> bool {
        !self.is_sender_player()
    }

    /// Checks a permission against the sender.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.sender.has_permission(permission)
    }

    /// Sends `message` to the sender. Does nothing for `None`; an empty
    /// string is still sent.
    pub fn send_message(&self, message: Option<&str>) {
        if let Some(message) = message {
            self.sender.send_message(message);
        }
    }
}
