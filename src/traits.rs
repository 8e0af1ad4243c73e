//! The seam between the bridge and the status bar it drives.
//!
//! The [`ConnectionManager`](crate::connection::ConnectionManager) only
//! knows about [`StatusBar`], so framing and decoding can be exercised
//! against a recording test double instead of a real `sketchybar` process.

use crate::event::SinkCommand;

/// Something that accepts status bar commands.
///
/// An implementation might spawn the `sketchybar` binary, or it might
/// simply record what it was asked to do.
///
/// # Contract
///
/// * [`send`](StatusBar::send) is synchronous; the bridge does not read
///   from kanata again until it returns.
/// * A returned error is logged by the caller and otherwise ignored.  It
///   never affects the kanata connection.
pub trait StatusBar {
    /// The error type produced by this sink.
    type Error: std::error::Error + Send + 'static;

    /// Deliver one command.
    fn send(&mut self, command: &SinkCommand) -> Result<(), Self::Error>;
}
