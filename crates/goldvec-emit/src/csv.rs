//! Dataset rendering to and from CSV.
//!
//! Files start with a header row naming every column; each following row
//! holds one case with every value text-encoded per its column. Records are
//! terminated by `\n`.

use bytes::Bytes;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use goldvec_core::{Case, Dataset, Schema};

use crate::error::{EmitError, Result};

/// Render a dataset as CSV.
pub fn render_csv(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(dataset.schema().headers())?;
    for case in dataset.cases() {
        writer.write_record(dataset.text_row(case)?)?;
    }
    writer
        .into_inner()
        .map_err(|e| EmitError::Io(e.into_error()))
}

/// Parse CSV back into a dataset, checking the header row against `schema`.
pub fn parse_csv(name: &str, schema: &Schema, bytes: &[u8]) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    let actual: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let expected: Vec<String> = schema.headers().into_iter().map(str::to_string).collect();
    if actual != expected {
        return Err(EmitError::Header { expected, actual });
    }

    let mut dataset = Dataset::new(name, schema.clone());
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let values = schema
            .columns()
            .iter()
            .zip(record.iter())
            .map(|(column, field)| {
                column
                    .encoding
                    .decode(field)
                    .map(Bytes::from)
                    .map_err(|message| EmitError::Field {
                        row: row + 1,
                        column: column.name.clone(),
                        message,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        dataset.push(Case::new(values))?;
    }
    Ok(dataset)
}
