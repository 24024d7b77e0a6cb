//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Gallery input handling (drag, window-wide drag tracking, wheel)

pub mod gallery_input_handler;
