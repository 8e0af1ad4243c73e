//! [`StatusBar`] implementation backed by the `sketchybar` CLI.
//!
//! Every command is one short-lived child process.  Arguments are passed
//! to it directly, so layer names never pass through a shell.

use crate::event::{SinkCommand, LAYER_EVENT, MOD_EVENT};
use crate::traits::StatusBar;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// SketchyBar-backed status bar.
pub struct SketchyBar {
    program: PathBuf,
}

/// Errors that can occur when invoking SketchyBar.
#[derive(Debug, thiserror::Error)]
pub enum SketchyBarError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}")]
    Status {
        command: String,
        status: std::process::ExitStatus,
    },
}

impl SketchyBar {
    /// Create a handle that runs `program` for every command.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }
}

impl StatusBar for SketchyBar {
    type Error = SketchyBarError;

    fn send(&mut self, command: &SinkCommand) -> Result<(), Self::Error> {
        debug!("sketchybar {}", command);
        let status = Command::new(&self.program)
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|source| SketchyBarError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(SketchyBarError::Status {
                command: command.to_string(),
                status,
            })
        }
    }
}

/// Announce the custom events the bridge triggers.
///
/// Failures are logged; the bridge keeps running without them since
/// SketchyBar may simply not be up yet.
pub fn register_events<B: StatusBar>(bar: &mut B) {
    for name in [LAYER_EVENT, MOD_EVENT] {
        let result = SinkCommand::add_event(name)
            .map_err(|e| e.to_string())
            .and_then(|cmd| bar.send(&cmd).map_err(|e| e.to_string()));
        if let Err(e) = result {
            warn!("failed to register event {}: {}", name, e);
        }
    }
}
