//! Handler for the "sum" command.
use crate::command::arguments::CommandArguments;
use crate::command::error::CommandError;
use crate::command::{CommandExecutor, CommandInfo};

/// Handler for the "sum" command.
#[must_use]
pub fn command_handler() -> (CommandInfo, impl CommandExecutor) {
    (
        CommandInfo::new("sum", "Adds numbers together.")
            .with_aliases(&["add"])
            .with_permission("quill.command.sum")
            .with_usage("sum <number> [number...]"),
        SumCommandExecutor,
    )
}

struct SumCommandExecutor;

impl CommandExecutor for SumCommandExecutor {
    fn execute(&self, args: &CommandArguments) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(args.command().usage_error());
        }

        // Whole numbers stay exact, anything else falls back to doubles.
        let longs: Option<Vec<i64>> = (0..args.len()).map(|i| args.argument_as_long(i)).collect();
        let total = match longs {
            Some(longs) => longs
                .into_iter()
                .try_fold(0i64, i64::checked_add)
                .map_or_else(|| "overflow".to_owned(), |total| total.to_string()),
            None => {
                let mut total = 0.0;
                for index in 0..args.len() {
                    total += args.argument_as_double(index).ok_or(
                        CommandError::InvalidArgument {
                            index,
                            expected: "a number",
                        },
                    )?;
                }
                total.to_string()
            }
        };

        args.send_message(Some(&format!("Sum: {total}")));
        Ok(())
    }
}
