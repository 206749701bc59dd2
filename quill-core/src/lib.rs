//! # Quill Core
//!
//! The command layer of Quill: senders, players, command registration and the
//! argument accessor handed to every command executor.
pub mod command;
pub mod player;
