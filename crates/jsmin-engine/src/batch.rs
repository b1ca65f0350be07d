//! Batch minification over in-memory inputs.
//!
//! One failing input never stops the others unless `fail_fast` is set.

use jsmin_core::{MinifyConfig, MinifyError, MinifyStats};

use crate::minifier::{Minifier, MinifyResult};

#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Minified(MinifyResult),
    Failed(MinifyError),
    /// Not attempted because an earlier input failed under `fail_fast`.
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub name: String,
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = (&str, &MinifyResult)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            BatchOutcome::Minified(r) => Some((e.name.as_str(), r)),
            _ => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = (&str, MinifyError)> {
        self.entries.iter().filter_map(|e| match e.outcome {
            BatchOutcome::Failed(err) => Some((e.name.as_str(), err)),
            _ => None,
        })
    }

    pub fn skipped(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome == BatchOutcome::Skipped).count()
    }

    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|e| matches!(e.outcome, BatchOutcome::Minified(_)))
    }

    /// Combined stats over the inputs that minified successfully.
    pub fn total_stats(&self) -> MinifyStats {
        let mut total = MinifyStats::default();
        for (_, r) in self.succeeded() {
            total.merge(&r.stats);
        }
        total
    }
}

pub struct BatchMinifier {
    minifier: Minifier,
    fail_fast: bool,
}

impl BatchMinifier {
    pub fn new(config: MinifyConfig) -> Self {
        let fail_fast = config.batch.fail_fast;
        Self { minifier: Minifier::new(config), fail_fast }
    }

    pub fn run<'a, I, N>(&mut self, inputs: I) -> BatchReport
    where
        I: IntoIterator<Item = (N, &'a [u8])>,
        N: Into<String>,
    {
        let mut report = BatchReport::default();
        let mut stopped = false;

        for (name, input) in inputs {
            let name = name.into();
            if stopped {
                report.entries.push(BatchEntry { name, outcome: BatchOutcome::Skipped });
                continue;
            }
            let outcome = match self.minifier.minify_with_stats(input) {
                Ok(result) => BatchOutcome::Minified(result),
                Err(err) => {
                    tracing::warn!(input = %name, error = %err, "minification failed");
                    stopped = self.fail_fast;
                    BatchOutcome::Failed(err)
                }
            };
            report.entries.push(BatchEntry { name, outcome });
        }

        let total = report.total_stats();
        tracing::info!(
            inputs = report.entries.len(),
            failed = report.failed().count(),
            skipped = report.skipped(),
            reduction_pct = total.reduction_pct(),
            "batch finished"
        );
        report
    }
}

impl Default for BatchMinifier {
    fn default() -> Self {
        Self::new(MinifyConfig::default())
    }
}
