//! Newline framing over a byte stream.
//!
//! [`Framer`] owns the receive buffer for one connection.  Bytes are fed in
//! whatever chunks the socket hands out; every complete `\n`-terminated line
//! is passed to a callback in arrival order and the trailing partial line is
//! kept for the next call.
//!
//! The buffer never grows past its capacity.  A line that does not fit is
//! dropped whole: the partial content is discarded and everything up to the
//! next newline is skipped, after which framing resumes normally.  Whether a
//! line is dropped depends only on its length, never on how it was chunked.

use log::warn;

/// Default receive buffer capacity, in bytes.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Line framer with a bounded receive buffer.
#[derive(Debug)]
pub struct Framer {
    buf: Vec<u8>,
    capacity: usize,
    /// Set while skipping the remainder of an oversized line.
    discarding: bool,
}

impl Default for Framer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Framer {
    /// Create an empty framer holding at most `capacity` bytes of a
    /// partial line.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
            discarding: false,
        }
    }

    /// Bytes of the incomplete trailing line currently held.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append `bytes` and call `on_message` for every complete non-empty
    /// line, without its terminator.
    ///
    /// Lines that are not valid UTF-8 are passed through lossily.
    pub fn feed(&mut self, mut bytes: &[u8], mut on_message: impl FnMut(&str)) {
        while let Some(pos) = bytes.iter().position(|&b| b == b'\n') {
            let (segment, rest) = (&bytes[..pos], &bytes[pos + 1..]);
            bytes = rest;

            if self.discarding {
                self.discarding = false;
                continue;
            }
            if self.buf.len() + segment.len() > self.capacity {
                warn!(
                    "dropping {}-byte line (limit {})",
                    self.buf.len() + segment.len(),
                    self.capacity
                );
                self.buf.clear();
                continue;
            }

            let line: &[u8] = if self.buf.is_empty() {
                segment
            } else {
                self.buf.extend_from_slice(segment);
                &self.buf
            };
            if !line.is_empty() {
                on_message(&String::from_utf8_lossy(line));
            }
            self.buf.clear();
        }

        if bytes.is_empty() || self.discarding {
            return;
        }
        if self.buf.len() + bytes.len() > self.capacity {
            warn!(
                "line exceeds {} bytes, skipping to next newline",
                self.capacity
            );
            self.buf.clear();
            self.discarding = true;
            return;
        }
        self.buf.extend_from_slice(bytes);
    }

    /// Convenience wrapper around [`feed`](Self::feed) that collects the
    /// lines.
    pub fn feed_collect(&mut self, bytes: &[u8]) -> Vec<String> {
        let mut out = Vec::new();
        self.feed(bytes, |m| out.push(m.to_string()));
        out
    }
}
