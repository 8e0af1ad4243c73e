//! Events decoded from kanata and the commands they turn into.
//!
//! [`Event`] is the normalized form of the two kanata notifications the
//! bridge understands.  [`SinkCommand`] is the argument vector handed to
//! the status bar; its [`Display`](fmt::Display) form is the quoted
//! command line (`--trigger kbd_layer LAYER='nav'`) and is what the
//! length limit is measured against.

use std::fmt;

/// SketchyBar event fired on layer changes.
pub const LAYER_EVENT: &str = "kbd_layer";

/// SketchyBar event fired on modifier changes.
pub const MOD_EVENT: &str = "kbd_mod";

/// Longest rendered command the status bar accepts, in bytes.
pub const MAX_COMMAND_LEN: usize = 511;

/// A decoded kanata notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The active layer switched to `layer`.
    LayerChange { layer: String },
    /// A `group:name:state` push message.
    ///
    /// `group` is carried along but not forwarded to the bar.
    ModifierState {
        group: String,
        name: String,
        state: String,
    },
}

impl Event {
    /// Build the trigger command for this event.
    pub fn to_command(&self) -> Result<SinkCommand, SinkCommandError> {
        match self {
            Event::LayerChange { layer } => {
                SinkCommand::trigger(LAYER_EVENT, &[("LAYER", layer.as_str())])
            }
            Event::ModifierState { name, state, .. } => SinkCommand::trigger(
                MOD_EVENT,
                &[("MOD", name.as_str()), ("STATE", state.as_str())],
            ),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::LayerChange { layer } => write!(f, "layer -> {}", layer),
            Event::ModifierState { name, state, .. } => write!(f, "mod {} -> {}", name, state),
        }
    }
}

/// Errors from building a [`SinkCommand`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkCommandError {
    #[error("command is {len} bytes, limit is {}", MAX_COMMAND_LEN)]
    TooLong { len: usize },
}

/// One invocation of the status bar program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkCommand {
    args: Vec<String>,
}

impl SinkCommand {
    /// `--add event <name>`, sent once per event at startup.
    pub fn add_event(name: &str) -> Result<Self, SinkCommandError> {
        Self::checked(vec!["--add".into(), "event".into(), name.into()])
    }

    /// `--trigger <name> KEY=value ...`
    pub fn trigger(name: &str, params: &[(&str, &str)]) -> Result<Self, SinkCommandError> {
        let mut args = Vec::with_capacity(params.len() + 2);
        args.push("--trigger".to_string());
        args.push(name.to_string());
        args.extend(params.iter().map(|(k, v)| format!("{}={}", k, v)));
        Self::checked(args)
    }

    fn checked(args: Vec<String>) -> Result<Self, SinkCommandError> {
        let cmd = Self { args };
        let len = cmd.to_string().len();
        if len > MAX_COMMAND_LEN {
            return Err(SinkCommandError::TooLong { len });
        }
        Ok(cmd)
    }

    /// Program arguments, unquoted.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for SinkCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match arg.split_once('=') {
                Some((key, value)) if !arg.starts_with('-') => write!(f, "{}='{}'", key, value)?,
                _ => f.write_str(arg)?,
            }
        }
        Ok(())
    }
}
