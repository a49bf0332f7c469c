//! # CLI Behavior
//!
//! The only place that knows about stdin, stdout and exit codes.
//!
//! ## Module Structure
//!
//! - `setup`: Process arguments via clap, version string
//! - `parser`: Splits an input line into a [`parser::Command`]
//! - `commands`: The read/dispatch/print loop and the error boundary
//! - `render`: Turns `CmdResult`s into terminal text

mod commands;
mod parser;
mod render;
mod setup;

pub use commands::run;
