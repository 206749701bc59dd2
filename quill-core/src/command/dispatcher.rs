//! Routes command lines to registered executors.
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::command::arguments::CommandArguments;
use crate::command::error::CommandError;
use crate::command::sender::CommandSender;
use crate::command::{CommandExecutor, CommandInfo};

struct RegisteredCommand {
    info: Arc<CommandInfo>,
    executor: Box<dyn CommandExecutor>,
}

/// Holds every registered command, keyed by lower-cased name and alias.
#[derive(Default)]
pub struct CommandDispatcher {
    commands: FxHashMap<String, Arc<RegisteredCommand>>,
}

impl CommandDispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under all of its names.
    /// Nothing is registered if any of the names is already taken.
    pub fn register(
        &mut self,
        info: CommandInfo,
        executor: impl CommandExecutor + 'static,
    ) -> Result<(), CommandError> {
        let keys: Vec<String> = info.names().iter().map(|n| n.to_lowercase()).collect();
        if let Some(taken) = keys.iter().find(|key| self.commands.contains_key(*key)) {
            return Err(CommandError::AlreadyRegistered(taken.clone()));
        }

        log::debug!("Registering command {}", info.name());
        let command = Arc::new(RegisteredCommand {
            info: Arc::new(info),
            executor: Box::new(executor),
        });
        for key in keys {
            self.commands.insert(key, command.clone());
        }
        Ok(())
    }

    /// Removes the command known as `name` along with its aliases.
    /// Returns false if no such command exists.
    pub fn unregister(&mut self, name: &str) -> bool {
        let Some(command) = self.commands.get(&name.to_lowercase()).cloned() else {
            return false;
        };
        self.commands
            .retain(|_, registered| !Arc::ptr_eq(registered, &command));
        log::debug!("Unregistered command {}", command.info.name());
        true
    }

    /// Looks up a command by name or alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommandInfo> {
        self.commands
            .get(&name.to_lowercase())
            .map(|command| command.info.as_ref())
    }

    /// Every registered command once, sorted by primary name.
    #[must_use]
    pub fn commands(&self) -> Vec<&CommandInfo> {
        let mut infos: Vec<&CommandInfo> = self
            .commands
            .iter()
            .filter(|(key, command)| **key == command.info.name().to_lowercase())
            .map(|(_, command)| command.info.as_ref())
            .collect();
        infos.sort_by(|a, b| a.name().cmp(b.name()));
        infos
    }

    /// Parses and runs a command line such as `/say hello world`.
    pub fn dispatch(&self, sender: CommandSender, line: &str) -> Result<(), CommandError> {
        let line = line.trim_start();
        let line = line.strip_prefix('/').unwrap_or(line);
        let mut tokens = line.split_whitespace();
        let label = tokens.next().ok_or(CommandError::EmptyCommand)?;

        let command = self
            .commands
            .get(&label.to_lowercase())
            .ok_or_else(|| CommandError::UnknownCommand(label.to_owned()))?;

        if let Some(permission) = command.info.permission()
            && !sender.has_permission(permission)
        {
            log::warn!(
                "{} was denied /{label}, missing {permission}",
                sender.name()
            );
            return Err(CommandError::PermissionDenied(permission.to_owned()));
        }

        log::debug!("{} issued /{line}", sender.name());
        let args = CommandArguments::new(
            sender,
            command.info.clone(),
            label,
            tokens.map(ToOwned::to_owned).collect(),
        );
        command.executor.execute(&args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{GameProfile, Player};
    use parking_lot::Mutex;

    fn recording_dispatcher(seen: Arc<Mutex<Vec<(String, Vec<String>)>>>) -> CommandDispatcher {
        let mut dispatcher = CommandDispatcher::new();
        dispatcher
            .register(
                CommandInfo::new("record", "Records its arguments.")
                    .with_aliases(&["rec"])
                    .with_permission("quill.command.record"),
                move |args: &CommandArguments| -> Result<(), CommandError> {
                    seen.lock()
                        .push((args.label().to_owned(), args.arguments().to_vec()));
                    Ok(())
                },
            )
            .expect("first registration");
        dispatcher
    }

    #[test]
    fn dispatch_splits_label_and_arguments() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = recording_dispatcher(seen.clone());

        dispatcher
            .dispatch(CommandSender::Console, "/record  one two\tthree ")
            .expect("dispatch");
        dispatcher
            .dispatch(CommandSender::Console, "REC")
            .expect("dispatch");

        let seen = seen.lock();
        assert_eq!(seen[0].0, "record");
        assert_eq!(seen[0].1, ["one", "two", "three"]);
        assert_eq!(seen[1].0, "REC");
        assert!(seen[1].1.is_empty());
    }

    #[test]
    fn empty_and_unknown_lines() {
        let dispatcher = recording_dispatcher(Arc::new(Mutex::new(Vec::new())));
        assert_eq!(
            dispatcher.dispatch(CommandSender::Console, "   "),
            Err(CommandError::EmptyCommand)
        );
        assert_eq!(
            dispatcher.dispatch(CommandSender::Console, "/"),
            Err(CommandError::EmptyCommand)
        );
        assert_eq!(
            dispatcher.dispatch(CommandSender::Console, "nope 1 2"),
            Err(CommandError::UnknownCommand("nope".to_owned()))
        );
    }

    #[test]
    fn permission_is_checked_before_execution() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = recording_dispatcher(seen.clone());
        let (player, _rx) = Player::new(GameProfile::new("Alex"), false);
        let player = Arc::new(player);

        assert_eq!(
            dispatcher.dispatch(CommandSender::from(player.clone()), "record"),
            Err(CommandError::PermissionDenied("quill.command.record".to_owned()))
        );
        assert!(seen.lock().is_empty());

        player.grant_permission("quill.command.record");
        dispatcher
            .dispatch(CommandSender::from(player), "record")
            .expect("granted");
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn aliases_conflict_on_registration() {
        let mut dispatcher = recording_dispatcher(Arc::new(Mutex::new(Vec::new())));
        let result = dispatcher.register(
            CommandInfo::new("fresh", "Clashes on its alias.").with_aliases(&["Rec"]),
            |_: &CommandArguments| -> Result<(), CommandError> { Ok(()) },
        );
        assert_eq!(result, Err(CommandError::AlreadyRegistered("rec".to_owned())));
        assert!(dispatcher.get("fresh").is_none());
    }

    #[test]
    fn unregister_removes_every_alias() {
        let mut dispatcher = recording_dispatcher(Arc::new(Mutex::new(Vec::new())));
        assert_eq!(dispatcher.commands().len(), 1);
        assert!(dispatcher.unregister("REC"));
        assert!(dispatcher.get("record").is_none());
        assert!(dispatcher.get("rec").is_none());
        assert!(dispatcher.commands().is_empty());
        assert!(!dispatcher.unregister("record"));
    }

    #[test]
    fn executor_errors_are_returned() {
        let mut dispatcher = CommandDispatcher::new();
        dispatcher
            .register(
                CommandInfo::new("fail", "Always fails.").with_usage("fail <never>"),
                |args: &CommandArguments| -> Result<(), CommandError> {
                    Err(args.command().usage_error())
                },
            )
            .expect("registration");
        assert_eq!(
            dispatcher.dispatch(CommandSender::Rcon, "fail"),
            Err(CommandError::Usage("fail <never>".to_owned()))
        );
    }
}
