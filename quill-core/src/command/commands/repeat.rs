//! Handler for the "repeat" command.
use crate::command::arguments::CommandArguments;
use crate::command::error::CommandError;
use crate::command::{CommandExecutor, CommandInfo};

const MAX_REPEATS: i32 = 10;

/// Handler for the "repeat" command.
#[must_use]
pub fn command_handler() -> (CommandInfo, impl CommandExecutor) {
    (
        CommandInfo::new("repeat", "Sends a message back several times.")
            .with_permission("quill.command.repeat")
            .with_usage("repeat <times> <shout> <message>"),
        RepeatCommandExecutor,
    )
}

struct RepeatCommandExecutor;

impl CommandExecutor for RepeatCommandExecutor {
    fn execute(&self, args: &CommandArguments) -> Result<(), CommandError> {
        if args.len() < 3 {
            return Err(args.command().usage_error());
        }
        let times = args
            .argument_as_int(0)
            .filter(|times| (1..=MAX_REPEATS).contains(times))
            .ok_or(CommandError::InvalidArgument {
                index: 0,
                expected: "a whole number from 1 to 10",
            })?;

        let mut message = args.arguments()[2..].join(" ");
        if args.argument_as_bool(1) {
            message = message.to_uppercase();
        }
        for _ in 0..times {
            args.send_message(Some(&message));
        }
        Ok(())
    }
}
