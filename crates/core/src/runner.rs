//! Driver running every benchmark phase in a fixed order.

use std::io::Write;

use crate::config::BenchConfig;
use crate::container::{Containers, ContainerKind, InsertTarget, Operation, Position};
use crate::dataset::{DATASET_SIZE, Dataset};
use crate::insert::time_insertion;
use crate::lookup::{time_linear_lookup, time_native_lookup};
use crate::report::{Measurement, Reporter};
use crate::result::Result;
use crate::timer::Millis;

/// Runs the insert-at-back, insert-at-front and lookup phases.
pub struct BenchRunner {
    config: BenchConfig,
    dataset_size: usize,
}

impl BenchRunner {
    /// Create a runner over the standard 100,000-value dataset.
    #[must_use]
    pub const fn new(config: BenchConfig) -> Self {
        Self {
            config,
            dataset_size: DATASET_SIZE,
        }
    }

    /// Use a different dataset size. Intended for tests and benches.
    #[must_use]
    pub const fn with_dataset_size(mut self, size: usize) -> Self {
        self.dataset_size = size;
        self
    }

    /// Run every phase, writing the report to `out`.
    ///
    /// Order: insert at back for all four containers, a blank line, insert
    /// at front into the cleared containers, a blank line, then lookups on
    /// the containers exactly as the front phase left them.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The dataset size is out of range
    /// - Writing to `out` fails
    ///
    /// # Examples
    ///
    /// ```
    /// # use ctbench_core::{BenchConfig, BenchRunner};
    /// let summary = BenchRunner::new(BenchConfig::new(Some(5)))
    ///     .with_dataset_size(1_000)
    ///     .run(Vec::new())
    ///     .unwrap();
    /// assert_eq!(summary.measurements().len(), 12);
    /// ```
    pub fn run<W: Write>(self, out: W) -> Result<RunSummary> {
        let dataset = Dataset::shuffled(self.dataset_size, self.config.seed())?;
        tracing::info!(
            size = dataset.len(),
            seed = ?dataset.seed(),
            "starting benchmark run"
        );

        let mut reporter = Reporter::new(out);
        let mut measurements = Vec::with_capacity(12);
        let mut containers = Containers::new();

        for position in [Position::Back, Position::Front] {
            let mut phase = Phase::new(Operation::from(position), &mut reporter, &mut measurements);
            phase.record(
                ContainerKind::Vector,
                refill(&dataset, &mut containers.vector, position),
            )?;
            phase.record(
                ContainerKind::List,
                refill(&dataset, &mut containers.list, position),
            )?;
            phase.record(
                ContainerKind::Set,
                refill(&dataset, &mut containers.set, position),
            )?;
            phase.record(
                ContainerKind::UnorderedSet,
                refill(&dataset, &mut containers.unordered_set, position),
            )?;
            reporter.separator()?;
        }

        let mut phase = Phase::new(Operation::Lookup, &mut reporter, &mut measurements);
        phase.record(ContainerKind::Vector, time_linear_lookup(&containers.vector))?;
        phase.record(ContainerKind::List, time_linear_lookup(&containers.list))?;
        phase.record(ContainerKind::Set, time_native_lookup(&containers.set))?;
        phase.record(
            ContainerKind::UnorderedSet,
            time_native_lookup(&containers.unordered_set),
        )?;
        reporter.flush()?;

        Ok(RunSummary {
            measurements,
            dataset,
            containers,
        })
    }
}

/// Clear `target` and time a full insertion into it.
fn refill<C: InsertTarget>(dataset: &Dataset, target: &mut C, position: Position) -> Millis {
    target.clear();
    time_insertion(dataset, target, position)
}

/// Reports the measurements of one operation against the vector's time.
struct Phase<'a, W> {
    operation: Operation,
    baseline: Millis,
    reporter: &'a mut Reporter<W>,
    measurements: &'a mut Vec<Measurement>,
}

impl<'a, W: Write> Phase<'a, W> {
    fn new(
        operation: Operation,
        reporter: &'a mut Reporter<W>,
        measurements: &'a mut Vec<Measurement>,
    ) -> Self {
        tracing::debug!(?operation, "phase started");
        Self {
            operation,
            baseline: Millis::ZERO,
            reporter,
            measurements,
        }
    }

    fn record(&mut self, kind: ContainerKind, elapsed: Millis) -> Result<()> {
        if kind.is_baseline() {
            self.baseline = elapsed;
        }

        let measurement = Measurement::new(kind, self.operation, elapsed);
        tracing::info!(
            container = kind.label(),
            operation = ?self.operation,
            elapsed_ms = elapsed.as_u64(),
            "measured"
        );

        self.reporter.report(self.baseline, &measurement)?;
        self.measurements.push(measurement);
        Ok(())
    }
}

/// Everything a finished run leaves behind.
#[derive(Debug)]
pub struct RunSummary {
    measurements: Vec<Measurement>,
    dataset: Dataset,
    containers: Containers,
}

impl RunSummary {
    /// All measurements in report order.
    #[must_use]
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Measurements of a single operation, in container order.
    pub fn measurements_for(&self, operation: Operation) -> impl Iterator<Item = &Measurement> {
        self.measurements
            .iter()
            .filter(move |m| m.operation() == operation)
    }

    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The containers as the lookup phase saw them.
    #[must_use]
    pub const fn containers(&self) -> &Containers {
        &self.containers
    }
}
