//! The kanata connection loop.
//!
//! [`ConnectionManager`] drives a three-state machine:
//!
//! ```text
//!            connect ok
//! Connecting ──────────► Connected ──┐ read > 0: frame, decode, emit
//!     ▲                      │  ◄────┘
//!     │ after delay          │ EOF / read error
//!     │                      ▼
//!     └───────────── Disconnected ◄── connect failed
//! ```
//!
//! The socket and its receive buffer live inside the `Connected` state, so
//! a lost connection drops both and the next connection starts from an
//! empty buffer.  Retries are unbounded with a fixed delay.

use crate::config::Config;
use crate::decode::decode;
use crate::framer::Framer;
use crate::traits::StatusBar;
use log::{debug, info, warn};
use std::io::{ErrorKind, Read};
use std::net::TcpStream;

/// Read chunk size for a single `read` call.
const READ_CHUNK: usize = 4096;

/// Why a connection attempt or session ended.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),
    #[error("connection closed by peer")]
    Closed,
}

/// Where the connection loop currently is.
#[derive(Debug)]
pub enum ConnectionState<S = TcpStream> {
    /// Waiting out the reconnect delay.
    Disconnected,
    /// About to attempt a connect.
    Connecting,
    /// Reading from a live socket.
    Connected { stream: S, framer: Framer },
}

impl<S> ConnectionState<S> {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }
}

/// Owns the kanata connection and forwards decoded events to a
/// [`StatusBar`].
pub struct ConnectionManager<B> {
    config: Config,
    bar: B,
}

impl<B: StatusBar> ConnectionManager<B> {
    pub fn new(config: Config, bar: B) -> Self {
        Self { config, bar }
    }

    pub fn bar(&self) -> &B {
        &self.bar
    }

    /// Run forever.  The first connect attempt is immediate.
    pub fn run(mut self) -> ! {
        info!(
            "bridging kanata at {}:{}",
            self.config.host, self.config.port
        );
        let mut state = ConnectionState::Connecting;
        loop {
            state = self.step(state);
        }
    }

    /// Perform exactly one transition.
    pub fn step(&mut self, state: ConnectionState) -> ConnectionState {
        match state {
            ConnectionState::Disconnected => {
                std::thread::sleep(self.config.reconnect_delay);
                ConnectionState::Connecting
            }
            ConnectionState::Connecting => match self.connect() {
                Ok(stream) => {
                    info!(
                        "connected to kanata at {}:{}",
                        self.config.host, self.config.port
                    );
                    ConnectionState::Connected {
                        stream,
                        framer: Framer::new(self.config.buffer_capacity),
                    }
                }
                Err(e) => {
                    debug!("{}", e);
                    ConnectionState::Disconnected
                }
            },
            ConnectionState::Connected { stream, framer } => self.read_step(stream, framer),
        }
    }

    /// One read on a live connection: stay `Connected` on data, drop to
    /// `Disconnected` on EOF or error.
    fn read_step<S: Read>(&mut self, mut stream: S, mut framer: Framer) -> ConnectionState<S> {
        match self.read_once(&mut stream, &mut framer) {
            Ok(()) => ConnectionState::Connected { stream, framer },
            Err(e) => {
                info!("kanata connection lost: {}", e);
                // Dropping `stream` closes the socket; `framer` and any
                // partial line go with it.
                ConnectionState::Disconnected
            }
        }
    }

    /// Resolve the configured host and connect to the first address that
    /// accepts.
    fn connect(&self) -> Result<TcpStream, ConnectionError> {
        let addr = (self.config.host.as_str(), self.config.port);
        TcpStream::connect(addr).map_err(|source| ConnectionError::Connect {
            addr: format!("{}:{}", self.config.host, self.config.port),
            source,
        })
    }

    /// Block for one read and process whatever arrived.
    fn read_once<R: Read>(
        &mut self,
        reader: &mut R,
        framer: &mut Framer,
    ) -> Result<(), ConnectionError> {
        let mut chunk = [0u8; READ_CHUNK];
        let n = loop {
            match reader.read(&mut chunk) {
                Ok(0) => return Err(ConnectionError::Closed),
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ConnectionError::Read(e)),
            }
        };
        framer.feed(&chunk[..n], |msg| emit(&mut self.bar, msg));
        Ok(())
    }

    /// Decode one message and send the resulting command, if any.
    pub fn handle_message(&mut self, message: &str) {
        emit(&mut self.bar, message);
    }
}

fn emit<B: StatusBar>(bar: &mut B, message: &str) {
    let Some(event) = decode(message) else {
        debug!("ignoring message: {}", message);
        return;
    };
    match event.to_command() {
        Ok(cmd) => {
            debug!("{}", event);
            if let Err(e) = bar.send(&cmd) {
                warn!("status bar command failed: {}", e);
            }
        }
        Err(e) => warn!("dropping {}: {}", event, e),
    }
}
