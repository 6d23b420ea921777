use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Append-only log of entered command lines. Write failures disable it for
/// the rest of the session instead of interrupting the user.
pub struct History {
    file: Option<File>,
}

impl History {
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn open(path: &Path) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                debug!(path = %path.display(), "history file opened");
                Self { file: Some(file) }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "history disabled");
                Self::disabled()
            }
        }
    }

    pub fn record(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if let Some(file) = self.file.as_mut() {
            if let Err(err) = writeln!(file, "{line}") {
                warn!(error = %err, "history write failed");
                self.file = None;
            }
        }
    }
}
