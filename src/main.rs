//! header-paths: Convert header-file path lists between separator conventions
//!
//! Reads a fixed list of whitespace-separated path tokens, keeps the ones
//! that reference header files, and rewrites their separators from the
//! Windows convention to the POSIX convention.

use anyhow::Result;

mod cli;
mod convert;

fn main() -> Result<()> {
    cli::run()
}
