//! Greeting output.

use anyhow::Result;
use std::io::Write;

/// Write `Hello, <name>` followed by a newline to the given writer.
///
/// The name is not constrained; an empty name still produces the
/// `Hello, ` prefix with its trailing space.
pub fn greet_to(out: &mut impl Write, name: &str) -> Result<()> {
    writeln!(out, "Hello, {}", name)?;
    Ok(())
}

/// Print the greeting to stdout.
pub fn greet(name: &str) -> Result<()> {
    let stdout = std::io::stdout();
    greet_to(&mut stdout.lock(), name)
}
