//! Informational lines printed around the table.

use std::io::Write;
use std::time::Duration;

/// Printed once the plan list is in, before the fan-out starts.
pub fn write_plan_count<W: Write>(out: &mut W, count: usize) -> std::io::Result<()> {
    writeln!(out, "\nNumber of received plans: {count}")?;
    writeln!(out, "Querying plans... This may take a few seconds...\n")
}

/// Wall time of the fan-out and join, in whole milliseconds.
pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> std::io::Result<()> {
    writeln!(out, "Request took: {} ms\n", elapsed.as_millis())
}
