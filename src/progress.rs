//! Scan progress reporting.
//!
//! Reports observable progress while the directory tree is being walked so
//! users see what is being scanned. Progress is emitted on **stderr** so
//! stdout remains parseable for scripts.

use std::io::Write;

/// A single progress event for the scan.
#[derive(Clone, Debug)]
pub enum ScanEvent {
    /// A directory is being listed. Path is relative to the scan root;
    /// empty for the root itself.
    Directory { path: String },
    /// The walk finished; `files` files were collected.
    Finished { files: u64 },
}

/// Reports scan progress. Implementations write to stderr (human or JSON).
pub trait ScanProgressReporter {
    /// Emit a progress event. Called from the tree walker.
    fn report(&self, event: ScanEvent);
}

/// Human-friendly progress on stderr: "scan  src/parser".
pub struct StderrProgress;

impl ScanProgressReporter for StderrProgress {
    fn report(&self, event: ScanEvent) {
        let line = match &event {
            ScanEvent::Directory { path } => {
                if path.is_empty() {
                    "scan  .\n".to_string()
                } else {
                    format!("scan  {}\n", path)
                }
            }
            ScanEvent::Finished { files } => format!("scan  done, {} files\n", files),
        };
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
        let _ = std::io::stderr().lock().flush();
    }
}

/// Machine-readable progress: one JSON object per line on stderr.
pub struct JsonProgress;

impl ScanProgressReporter for JsonProgress {
    fn report(&self, event: ScanEvent) {
        let obj = match &event {
            ScanEvent::Directory { path } => serde_json::json!({
                "event": "progress",
                "phase": "scanning",
                "dir": path
            }),
            ScanEvent::Finished { files } => serde_json::json!({
                "event": "progress",
                "phase": "done",
                "files": files
            }),
        };
        if let Ok(line) = serde_json::to_string(&obj) {
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
            let _ = std::io::stderr().lock().flush();
        }
    }
}

/// No-op reporter when progress is disabled.
pub struct NoProgress;

impl ScanProgressReporter for NoProgress {
    fn report(&self, _event: ScanEvent) {}
}

/// Progress mode for the CLI: off, human (stderr), or JSON (stderr).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProgressMode {
    Off,
    Human,
    Json,
}

impl ProgressMode {
    /// Default: human progress when stderr is a TTY, otherwise off.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            ProgressMode::Human
        } else {
            ProgressMode::Off
        }
    }

    /// Build a reporter for this mode. Caller passes it to the scanner.
    pub fn reporter(&self) -> Box<dyn ScanProgressReporter> {
        match self {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Human => Box::new(StderrProgress),
            ProgressMode::Json => Box::new(JsonProgress),
        }
    }
}
