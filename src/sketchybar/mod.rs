//! SketchyBar-specific implementations.
//!
//! This module provides the concrete [`StatusBar`](crate::traits::StatusBar)
//! backend that drives SketchyBar through its command-line client.
//!
//! Nothing outside this module should reference SketchyBar directly.

pub mod bar;
