//! **kanata-sketchybar**: forwards kanata keyboard events to SketchyBar.
//!
//! The bridge keeps a TCP connection to kanata's notification server open,
//! splits the stream into newline-delimited messages, recognizes layer
//! changes and modifier push messages, and fires the matching SketchyBar
//! custom events (`kbd_layer`, `kbd_mod`).
//!
//! # Architecture
//!
//! Data flows leaf-ward through four small pieces:
//!
//! * [`connection`] owns the socket and the reconnect loop.
//! * [`framer`] turns arbitrary read chunks into complete lines.
//! * [`decode`] classifies a line into an [`event::Event`].
//! * [`extract`] pulls single string fields out of a line without a JSON
//!   parser.
//!
//! Output goes through the [`traits::StatusBar`] trait so the loop is not
//! coupled to a real `sketchybar` process; the production backend lives in
//! [`sketchybar`].

pub mod config;
pub mod connection;
pub mod decode;
pub mod event;
pub mod extract;
pub mod framer;
pub mod sketchybar;
pub mod traits;
