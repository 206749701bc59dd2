//! Handler for the "say" command.
use crate::command::arguments::CommandArguments;
use crate::command::error::CommandError;
use crate::command::{CommandExecutor, CommandInfo};

/// Handler for the "say" command.
#[must_use]
pub fn command_handler() -> (CommandInfo, impl CommandExecutor) {
    (
        CommandInfo::new("say", "Displays a message.")
            .with_permission("quill.command.say")
            .with_usage("say <message>"),
        SayCommandExecutor,
    )
}

struct SayCommandExecutor;

impl CommandExecutor for SayCommandExecutor {
    fn execute(&self, args: &CommandArguments) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(args.command().usage_error());
        }
        let message = format!("[{}] {}", args.sender().name(), args.arguments().join(" "));
        args.send_message(Some(&message));
        Ok(())
    }
}
