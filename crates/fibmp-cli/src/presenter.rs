//! Harness reporters for the terminal and for machine consumption.

use std::io::Write;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::warn;

use fibmp_harness::{CalculationResult, EvaluationSummary, Measurement, MeasurementReporter};

use crate::output::{
    format_duration, format_number, format_report_row, format_result, REPORT_HEADER,
};

/// Human-readable table: a header, one row per measurement and the best
/// index as a trailing comment line.
pub struct TableReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TableReporter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn line(&self, text: &str) {
        if let Err(err) = writeln!(self.out.lock(), "{text}") {
            warn!(%err, "failed to write report line");
        }
    }
}

impl<W: Write + Send> MeasurementReporter for TableReporter<W> {
    fn begin(&self, strategy: &str) {
        self.line(&format!("# Strategy: {strategy}"));
        self.line(REPORT_HEADER);
    }

    fn record(&self, measurement: &Measurement) {
        self.line(&format_report_row(measurement));
    }

    fn finish(&self, summary: &EvaluationSummary) {
        self.line(&format!("# Recorded best: {}", summary.best_index));
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Begin {
        strategy: &'a str,
    },
    Sample(&'a Measurement),
    Finish {
        strategy: &'a str,
        best_index: u64,
        samples: usize,
    },
}

/// One JSON object per line, tagged with an `event` field.
pub struct JsonLinesReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLinesReporter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(&self, event: &Event<'_>) {
        let mut out = self.out.lock();
        let written = serde_json::to_writer(&mut *out, event)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(out));
        if let Err(err) = written {
            warn!(%err, "failed to write report event");
        }
    }
}

impl<W: Write + Send> MeasurementReporter for JsonLinesReporter<W> {
    fn begin(&self, strategy: &str) {
        self.emit(&Event::Begin { strategy });
    }

    fn record(&self, measurement: &Measurement) {
        self.emit(&Event::Sample(measurement));
    }

    fn finish(&self, summary: &EvaluationSummary) {
        self.emit(&Event::Finish {
            strategy: &summary.strategy,
            best_index: summary.best_index,
            samples: summary.samples.len(),
        });
    }
}

/// Write a comparison table: one line per strategy, then the value.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_comparison<W: Write>(
    out: &mut W,
    results: &[CalculationResult],
    verbose: bool,
) -> std::io::Result<()> {
    writeln!(out, "{:-<60}", "")?;
    for result in results {
        let status = match &result.outcome {
            Ok(_) => "OK".to_string(),
            Err(err) => format!("ERROR: {err}"),
        };
        writeln!(
            out,
            "  {:<12} {:>12} [{status}]",
            result.strategy,
            format_duration(result.duration),
        )?;
    }
    writeln!(out, "{:-<60}", "")?;

    if let Some((result, number)) = results
        .iter()
        .find_map(|r| r.outcome.as_ref().ok().map(|n| (r, n)))
    {
        writeln!(
            out,
            "F({}) = {}",
            format_number(result.index),
            format_result(number, verbose)
        )?;
    }
    Ok(())
}
