//! # Addrbook CLI
//!
//! The binary is intentionally thin: everything user-facing lives in
//! `src/addrbook/cli/`, and this file only invokes `cli::run()` and handles
//! process termination.
//!
//! Once started, addrbook reads one command per line from stdin until it sees
//! `exit`, `close`, `good bye` or end of input. Errors caused by a command
//! (bad phone, unknown contact, missing arguments) are printed and the loop
//! goes on; only a failure to read the config or to talk to the terminal ends
//! the process with a non-zero status.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
