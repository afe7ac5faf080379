//! Utilities for the command-line driver.
//!
//! - [`input`] - Loading input from files (memory-mapped), literals or stdin
//! - [`progress`] - Progress bar over a construction pass

pub mod input;
pub mod progress;

pub use input::*;
pub use progress::*;
