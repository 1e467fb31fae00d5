//! Dataset rendering to and from LV files.

use bytes::Bytes;
use goldvec_core::{Case, Dataset, LvReader, LvWriter, Part, Schema};
use std::io::Cursor;

use crate::error::{EmitError, Result};

fn select<'a>(values: &'a [Bytes], indices: &[usize]) -> Vec<&'a Bytes> {
    indices.iter().map(|&i| &values[i]).collect()
}

/// Render a dataset as a split pair: `(data file, output file)`.
///
/// Both files carry the same count header.
pub fn render_split(dataset: &Dataset) -> Result<(Vec<u8>, Vec<u8>)> {
    let schema = dataset.schema();
    let inputs = schema.part_indices(Part::Input);
    let outputs = schema.part_indices(Part::Output);

    let mut data = LvWriter::new(Vec::new(), dataset.len())?;
    let mut enc = LvWriter::new(Vec::new(), dataset.len())?;
    for case in dataset.cases() {
        data.write_group(&select(case.values(), &inputs))?;
        enc.write_group(&select(case.values(), &outputs))?;
    }
    Ok((data.finish()?, enc.finish()?))
}

/// Render a dataset as one LV file with every column per case.
pub fn render_combined(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut writer = LvWriter::new(Vec::new(), dataset.len())?;
    for case in dataset.cases() {
        writer.write_group(case.values())?;
    }
    Ok(writer.finish()?)
}

/// Parse a split pair back into a dataset with `schema`.
pub fn parse_split(name: &str, schema: &Schema, data: &[u8], enc: &[u8]) -> Result<Dataset> {
    let inputs = schema.part_indices(Part::Input);
    let outputs = schema.part_indices(Part::Output);

    let data_groups = LvReader::new(Cursor::new(data), inputs.len())?.read_all()?;
    let enc_groups = LvReader::new(Cursor::new(enc), outputs.len())?.read_all()?;
    if data_groups.len() != enc_groups.len() {
        return Err(EmitError::SplitMismatch {
            data: data_groups.len(),
            output: enc_groups.len(),
        });
    }

    let mut dataset = Dataset::new(name, schema.clone());
    for (data_group, enc_group) in data_groups.into_iter().zip(enc_groups) {
        let mut values = vec![Bytes::new(); schema.len()];
        for (&index, value) in inputs.iter().zip(data_group) {
            values[index] = value;
        }
        for (&index, value) in outputs.iter().zip(enc_group) {
            values[index] = value;
        }
        dataset.push(Case::new(values))?;
    }
    Ok(dataset)
}

/// Parse a combined LV file back into a dataset with `schema`.
pub fn parse_combined(name: &str, schema: &Schema, bytes: &[u8]) -> Result<Dataset> {
    let groups = LvReader::new(Cursor::new(bytes), schema.len())?.read_all()?;
    let mut dataset = Dataset::new(name, schema.clone());
    for group in groups {
        dataset.push(Case::new(group))?;
    }
    Ok(dataset)
}
