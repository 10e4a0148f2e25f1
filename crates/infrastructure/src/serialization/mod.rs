//! JSON serialization for settings files and export artifacts.
//!
//! Output is pretty printed with 2-space indentation and a trailing
//! newline so files stay readable and diff cleanly.

mod json;

pub use json::*;
