//! The sender of a command.
use std::io::{self, Write};
use std::sync::Arc;

use crate::player::Player;

/// Whoever invoked a command.
#[derive(Clone)]
pub enum CommandSender {
    /// A player typing into chat.
    Player(Arc<Player>),
    /// The server console.
    Console,
    /// A remote console connection.
    Rcon,
}

impl CommandSender {
    /// Sends a message to the sender.
    pub fn send_message(&self, message: &str) {
        match self {
            Self::Player(player) => player.send_message(message),
            Self::Console | Self::Rcon => {
                write_console_message(&mut io::stdout().lock(), message);
            }
        }
    }

    /// Checks if the sender holds a permission.
    /// Console and rcon are trusted with everything.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        match self {
            Self::Player(player) => player.has_permission(permission),
            Self::Console | Self::Rcon => true,
        }
    }

    /// Whether the sender is a player.
    #[must_use]
    pub const fn is_player(&self) -> bool {
        matches!(self, Self::Player(_))
    }

    /// Whether the sender is console-like, i.e. anything but a player.
    #[must_use]
    pub const fn is_console(&self) -> bool {
        !self.is_player()
    }

    /// Narrows the sender to a player.
    #[must_use]
    pub const fn as_player(&self) -> Option<&Arc<Player>> {
        match self {
            Self::Player(player) => Some(player),
            Self::Console | Self::Rcon => None,
        }
    }

    /// The display name of the sender.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Player(player) => &player.gameprofile.name,
            Self::Console => "Console",
            Self::Rcon => "Rcon",
        }
    }
}

/// Console output bypasses the logger so replies survive any log level.
fn write_console_message(out: &mut impl Write, message: &str) {
    if let Err(e) = writeln!(out, "{message}").and_then(|()| out.flush()) {
        log::debug!("Failed to write console message: {e}");
    }
}

impl From<Arc<Player>> for CommandSender {
    fn from(player: Arc<Player>) -> Self {
        Self::Player(player)
    }
}
