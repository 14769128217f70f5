//! The fixed entry sequence: greeting, counting loop, accumulated value.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::accumulator::accumulate;
use crate::greeter::greet_to;

/// Iterations of the counting step.
const COUNT_ITERATIONS: i64 = 3;

/// Runs the three steps in strict order against a writer.
///
/// Defaults reproduce the canonical transcript: greet `"world"`, count
/// `0..3`, then print the accumulated value for bound `10`.
pub struct EntrySequence {
    /// Name passed to the greeting step
    pub name: String,
    /// Exclusive upper bound passed to the accumulator step
    pub bound: i64,
}

impl EntrySequence {
    pub fn new() -> Self {
        Self {
            name: "world".to_string(),
            bound: 10,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_bound(mut self, bound: i64) -> Self {
        self.bound = bound;
        self
    }

    /// Execute the sequence, writing every line to `out`.
    ///
    /// The counting step completes before the accumulator runs, and the
    /// greeting precedes both.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        greet_to(out, &self.name)?;

        for i in 0..COUNT_ITERATIONS {
            writeln!(out, "i: {}", i)?;
        }

        let value = accumulate(self.bound);
        debug!("accumulated {} over bound {}", value, self.bound);
        writeln!(out, "value: {}", value)?;

        Ok(())
    }
}

impl Default for EntrySequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(sequence: &EntrySequence) -> String {
        let mut out = Vec::new();
        sequence.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_transcript() {
        assert_eq!(
            transcript(&EntrySequence::new()),
            "Hello, world\ni: 0\ni: 1\ni: 2\nvalue: 70\n"
        );
    }

    #[test]
    fn test_overrides() {
        let sequence = EntrySequence::new().with_name("Ada").with_bound(4);
        assert_eq!(
            transcript(&sequence),
            "Hello, Ada\ni: 0\ni: 1\ni: 2\nvalue: 10\n"
        );
    }

    #[test]
    fn test_line_count_and_order() {
        let text = transcript(&EntrySequence::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Hello, world");
        assert_eq!(lines[1..4], ["i: 0", "i: 1", "i: 2"]);
        assert_eq!(lines[4], "value: 70");
    }
}
