//! The commands every server ships with.
pub mod repeat;
pub mod say;
pub mod sum;
pub mod whoami;

use crate::command::dispatcher::CommandDispatcher;
use crate::command::error::CommandError;

/// Registers all builtin commands.
pub fn register_builtin(dispatcher: &mut CommandDispatcher) -> Result<(), CommandError> {
    let (info, executor) = repeat::command_handler();
    dispatcher.register(info, executor)?;
    let (info, executor) = say::command_handler();
    dispatcher.register(info, executor)?;
    let (info, executor) = sum::command_handler();
    dispatcher.register(info, executor)?;
    let (info, executor) = whoami::command_handler();
    dispatcher.register(info, executor)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::command::dispatcher::CommandDispatcher;
    use crate::command::sender::CommandSender;
    use crate::player::{GameProfile, Player};

    pub fn dispatcher() -> CommandDispatcher {
        let mut dispatcher = CommandDispatcher::new();
        super::register_builtin(&mut dispatcher).expect("builtin commands register");
        dispatcher
    }

    pub fn operator() -> (CommandSender, UnboundedReceiver<String>) {
        let (player, rx) = Player::new(GameProfile::new("Alex"), true);
        (CommandSender::from(Arc::new(player)), rx)
    }

    pub fn drain(rx: &mut UnboundedReceiver<String>) -> Vec<String> {
        let mut messages = Vec::new();
        while let Ok(message) = rx.try_recv() {
            messages.push(message);
        }
        messages
    }
}
