//! Reads console input off the async runtime.
use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc::{self, Receiver, Sender};

const LINE_BUFFER: usize = 64;

/// Spawns a thread that forwards stdin line by line. The receiver yields
/// `None` once stdin reaches EOF or fails.
///
/// The thread is never joined; a read still blocked when the server stops
/// dies with the process.
pub fn spawn_stdin_reader() -> io::Result<Receiver<String>> {
    let (tx, rx) = mpsc::channel(LINE_BUFFER);
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || forward_lines(io::stdin().lock(), &tx))?;
    Ok(rx)
}

/// Sends every line of `reader` until EOF, an io error, or a closed receiver.
fn forward_lines(reader: impl BufRead, tx: &Sender<String>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read from stdin: {e}");
                return;
            }
        };
        if tx.blocking_send(line).is_err() {
            return;
        }
    }
    log::debug!("Reached the end of stdin");
}
