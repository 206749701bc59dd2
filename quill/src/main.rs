//! # Quill
//!
//! A console front end for the Quill command layer.
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use quill_core::command::commands::register_builtin;
use quill_core::command::dispatcher::CommandDispatcher;
use quill_core::command::error::CommandError;
use quill_core::command::sender::CommandSender;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use tokio::signal::ctrl_c;

mod config;
mod console;

use crate::config::{CONFIG_PATH, QuillConfig};
use crate::console::spawn_stdin_reader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = QuillConfig::load_or_create(Path::new(CONFIG_PATH))?;

    TermLogger::init(
        config.log_level()?,
        ConfigBuilder::new().set_target_level(LevelFilter::Off).build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("failed to install the logger")?;

    let mut dispatcher = CommandDispatcher::new();
    register_builtin(&mut dispatcher)?;
    for name in &config.disabled_commands {
        if !dispatcher.unregister(name) {
            log::warn!("Cannot disable unknown command {name}");
        }
    }
    log::info!(
        "Loaded {} commands, type a command or press Ctrl-C to stop",
        dispatcher.commands().len()
    );

    let mut lines = spawn_stdin_reader().context("failed to start the stdin reader")?;
    let ctrl_c = ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            result = &mut ctrl_c => {
                result.context("failed to listen for Ctrl-C")?;
                None
            }
        };
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = match dispatcher.dispatch(CommandSender::Console, &line) {
            Ok(()) => continue,
            Err(CommandError::UnknownCommand(label)) => config.unknown_command(&label),
            Err(e) => e.to_string(),
        };
        log::debug!("Console command failed: {reply}");
        CommandSender::Console.send_message(&reply);
    }

    log::info!("Stopping");
    Ok(())
}
