//! Input thread: reads raw lines from a byte stream into the line queue.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace};

use crate::queue::LineSender;

/// Delay before retrying after end-of-stream or a failed read.
pub const RETRY_DELAY: Duration = Duration::from_millis(30);

/// Where readings come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSpec {
    /// Standard input (default).
    #[default]
    Stdin,
    /// A regular file or FIFO.
    File(PathBuf),
}

/// Errors starting the input thread.
#[derive(Debug, Clone)]
pub enum SourceError {
    /// The input file could not be opened.
    Open { path: PathBuf, message: String },
    /// The OS refused to start the thread.
    Spawn(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Open { path, message } => {
                write!(f, "cannot open input '{}': {}", path.display(), message)
            }
            SourceError::Spawn(msg) => write!(f, "cannot start input thread: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// Handle to the running input thread.
///
/// The thread keeps reading until [`LineSource::stop`] is called. A read that
/// blocks forever (an idle pipe) delays `stop` until the read returns.
pub struct LineSource {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl LineSource {
    /// Starts a thread pushing every line of `reader` into `sender`.
    pub fn spawn<R>(reader: R, sender: LineSender) -> Result<Self, SourceError>
    where
        R: BufRead + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("line-source".to_string())
            .spawn(move || read_loop(reader, sender, &thread_stop))
            .map_err(|e| SourceError::Spawn(e.to_string()))?;
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Opens `input` and starts reading it.
    pub fn open(input: &InputSpec, sender: LineSender) -> Result<Self, SourceError> {
        match input {
            InputSpec::Stdin => Self::spawn(BufReader::new(io::stdin()), sender),
            InputSpec::File(path) => {
                let file = File::open(path).map_err(|e| SourceError::Open {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                Self::spawn(BufReader::new(file), sender)
            }
        }
    }

    /// Signals the thread to stop and waits for it to exit.
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            debug!("line source thread panicked");
        }
    }
}

impl Drop for LineSource {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

fn read_loop<R: BufRead>(mut reader: R, sender: LineSender, stop: &AtomicBool) {
    debug!("line source started");
    let mut line = String::new();
    while !stop.load(Ordering::Relaxed) {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => thread::sleep(RETRY_DELAY),
            Ok(_) => {
                if sender.send(std::mem::take(&mut line)) {
                    trace!("line queue full, oldest line dropped");
                }
            }
            Err(e) => {
                debug!("input read failed: {}", e);
                thread::sleep(RETRY_DELAY);
            }
        }
    }
    debug!("line source stopped");
}
