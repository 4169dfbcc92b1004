//! Pass/fail report lines

use std::io::{self, Write};

/// Write the report line for one case: `"<test> success"` or `"<test> failed"`
pub fn write_outcome<W: Write>(out: &mut W, test: &str, passed: bool) -> io::Result<()> {
    let word = if passed { "success" } else { "failed" };
    writeln!(out, "{test} {word}")?;
    out.flush()
}
