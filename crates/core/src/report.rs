//! Human-readable result lines.

use std::io::Write;

use crate::container::{ContainerKind, Operation};
use crate::percent::percent_relative;
use crate::result::Result;
use crate::timer::Millis;

/// One timed operation on one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    kind: ContainerKind,
    operation: Operation,
    elapsed: Millis,
}

impl Measurement {
    #[must_use]
    pub const fn new(kind: ContainerKind, operation: Operation, elapsed: Millis) -> Self {
        Self {
            kind,
            operation,
            elapsed,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        self.kind
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub const fn elapsed(&self) -> Millis {
        self.elapsed
    }
}

/// Format one result line, without the trailing newline.
///
/// Baseline lines stop after the elapsed time. Other lines append the
/// percentage of `baseline`, or `N/A` when the baseline measured zero.
///
/// # Examples
///
/// ```
/// use ctbench_core::{format_result, ContainerKind, Millis, Operation};
///
/// let line = format_result(
///     Millis::new(3),
///     Millis::new(7),
///     ContainerKind::List,
///     Operation::InsertBack,
/// );
/// assert_eq!(
///     line,
///     "List: Inserting at the end, elapsed time: 7ms. 233% relative to vector's time."
/// );
/// ```
#[must_use]
pub fn format_result(
    baseline: Millis,
    measured: Millis,
    kind: ContainerKind,
    operation: Operation,
) -> String {
    let head = format!(
        "{}: {}, elapsed time: {}.",
        kind.label(),
        operation.description(),
        measured
    );

    if kind.is_baseline() {
        return head;
    }

    match percent_relative(baseline, measured) {
        Some(percent) => format!("{head} {percent}% relative to vector's time."),
        None => format!("{head} N/A relative to vector's time."),
    }
}

/// Writes result lines to an output sink.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit the line for `measurement` against `baseline`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the sink rejects the write.
    pub fn report(&mut self, baseline: Millis, measurement: &Measurement) -> Result<()> {
        let line = format_result(
            baseline,
            measurement.elapsed(),
            measurement.kind(),
            measurement.operation(),
        );
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Emit the empty line between phases.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the sink rejects the write.
    pub fn separator(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the sink fails to flush.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
