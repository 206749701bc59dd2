//! This module contains the player type used as a command sender.
use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// The identity of a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProfile {
    /// The player's unique id.
    pub id: Uuid,
    /// The player's name.
    pub name: String,
}

impl GameProfile {
    /// Creates a profile with a random id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A connected player.
pub struct Player {
    /// The player's profile.
    pub gameprofile: GameProfile,
    operator: bool,
    permissions: RwLock<FxHashSet<String>>,
    outgoing: UnboundedSender<String>,
}

impl Player {
    /// Creates a player together with the receiving end of its message channel.
    #[must_use]
    pub fn new(gameprofile: GameProfile, operator: bool) -> (Self, UnboundedReceiver<String>) {
        let (outgoing, incoming) = mpsc::unbounded_channel();
        let player = Self {
            gameprofile,
            operator,
            permissions: RwLock::new(FxHashSet::default()),
            outgoing,
        };
        (player, incoming)
    }

    /// Whether the player is a server operator.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.operator
    }

    /// Grants a permission. Returns false if it was already granted.
    pub fn grant_permission(&self, permission: impl Into<String>) -> bool {
        self.permissions.write().insert(permission.into())
    }

    /// Revokes a permission. Returns false if it was not granted.
    pub fn revoke_permission(&self, permission: &str) -> bool {
        self.permissions.write().remove(permission)
    }

    /// Operators hold every permission, everyone else needs an exact grant.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.operator || self.permissions.read().contains(permission)
    }

    /// Queues a chat message for this player.
    pub fn send_message(&self, message: &str) {
        if self.outgoing.send(message.to_owned()).is_err() {
            log::debug!(
                "Dropped message for {}, connection is closed",
                self.gameprofile.name
            );
        }
    }
}
