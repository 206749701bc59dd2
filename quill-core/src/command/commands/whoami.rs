//! Handler for the "whoami" command.
use crate::command::arguments::CommandArguments;
use crate::command::error::CommandError;
use crate::command::sender::CommandSender;
use crate::command::{CommandExecutor, CommandInfo};

/// Handler for the "whoami" command.
#[must_use]
pub fn command_handler() -> (CommandInfo, impl CommandExecutor) {
    (
        CommandInfo::new("whoami", "Describes the sender of the command.")
            .with_permission("quill.command.whoami")
            .with_usage("whoami [permission]"),
        WhoamiCommandExecutor,
    )
}

struct WhoamiCommandExecutor;

impl CommandExecutor for WhoamiCommandExecutor {
    fn execute(&self, args: &CommandArguments) -> Result<(), CommandError> {
        let description = match args.sender() {
            CommandSender::Player(player) => format!(
                "You are the player {} ({})",
                player.gameprofile.name, player.gameprofile.id
            ),
            CommandSender::Console => "You are the console".to_owned(),
            CommandSender::Rcon => "You are a remote console".to_owned(),
        };
        args.send_message(Some(&description));

        if let Some(permission) = args.argument(0) {
            let verdict = if args.has_permission(permission) {
                "have"
            } else {
                "do not have"
            };
            args.send_message(Some(&format!("You {verdict} {permission}")));
        }
        Ok(())
    }
}
