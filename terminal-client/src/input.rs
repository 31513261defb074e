use std::io::BufRead;
use tokio::sync::mpsc;
use tictactoe_engine::log;

/// Reads stdin on a plain thread and forwards each line. The channel closes
/// on EOF or read failure.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (line_tx, line_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    line_rx
}
