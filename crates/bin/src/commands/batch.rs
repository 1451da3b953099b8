//! CSV batch scoring.

use stayprice::PricePredictor;
use stayprice::encoder::HotelInput;
use stayprice::output::{BatchRecord, ExportError, ExportFormat, Exporter};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::warn;

/// Results of scoring one input file.
#[derive(Debug, Default)]
pub(crate) struct BatchOutcome {
    pub(crate) records: Vec<BatchRecord>,
    /// Rows that could not be parsed into a request at all
    pub(crate) unreadable: usize,
}

impl BatchOutcome {
    pub(crate) fn scored(&self) -> usize {
        self.records.iter().filter(|r| r.is_ok()).count()
    }

    pub(crate) fn failed(&self) -> usize {
        self.records.len() - self.scored()
    }
}

/// Output format: the explicit `--format` wins, then the `--output`
/// extension, then CSV.
pub(crate) fn resolve_format(
    format: Option<&str>,
    output: Option<&Path>,
) -> Result<ExportFormat, ExportError> {
    match format {
        Some(f) => f.parse(),
        None => Ok(output
            .and_then(ExportFormat::from_path)
            .unwrap_or(ExportFormat::Csv)),
    }
}

/// Price every row of `reader`.
///
/// A rejected request becomes a failed record and scoring moves on; a row
/// that does not parse is logged and counted.
pub(crate) fn score<R: Read>(
    predictor: &PricePredictor<'_>,
    mut reader: csv::Reader<R>,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for (i, row) in reader.deserialize::<HotelInput>().enumerate() {
        let input = match row {
            Ok(input) => input,
            Err(e) => {
                warn!(row = i + 1, error = %e, "skipping unreadable row");
                outcome.unreadable += 1;
                continue;
            }
        };

        let record = match predictor.predict(&input) {
            Ok(prediction) => BatchRecord::priced(&input, prediction.price),
            Err(e) => {
                warn!(row = i + 1, error = %e, "request rejected");
                BatchRecord::failed(&input, e)
            }
        };
        outcome.records.push(record);
    }

    outcome
}

/// Write records to `output`, or stdout when no path is given.
pub(crate) fn write(
    records: &[BatchRecord],
    output: Option<&Path>,
    format: ExportFormat,
) -> Result<(), ExportError> {
    match output {
        Some(path) => records.export_to_file(path, format),
        None => {
            let content = records.export_to_string(format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                writeln!(stdout)?;
            }
            Ok(())
        }
    }
}
