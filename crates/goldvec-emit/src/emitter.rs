//! Writing a complete dataset in one output format.

use goldvec_core::{Dataset, Schema};
use tracing::debug;

use crate::csv::{parse_csv, render_csv};
use crate::error::Result;
use crate::format::OutputFormat;
use crate::lv::{parse_combined, parse_split, render_combined, render_split};
use crate::sink::{Artifact, Sink};

/// Render `dataset` in `format` and store every resulting file in `sink`.
///
/// Rendering finishes before anything is written, so an encoding failure
/// leaves the sink untouched.
pub fn emit_dataset<S: Sink + ?Sized>(
    dataset: &Dataset,
    format: OutputFormat,
    sink: &S,
) -> Result<Vec<Artifact>> {
    let names = format.file_names(dataset.name());
    let rendered: Vec<Vec<u8>> = match format {
        OutputFormat::LvSplit => {
            let (data, enc) = render_split(dataset)?;
            vec![data, enc]
        }
        OutputFormat::LvCombined => vec![render_combined(dataset)?],
        OutputFormat::Csv => vec![render_csv(dataset)?],
    };

    let mut artifacts = Vec::with_capacity(names.len());
    for (name, bytes) in names.iter().zip(&rendered) {
        artifacts.push(sink.put(name, bytes)?);
    }
    debug!(
        dataset = dataset.name(),
        format = %format,
        cases = dataset.len(),
        "emitted dataset"
    );
    Ok(artifacts)
}

/// Read a dataset previously written by [`emit_dataset`].
pub fn read_dataset<S: Sink + ?Sized>(
    name: &str,
    schema: &Schema,
    format: OutputFormat,
    sink: &S,
) -> Result<Dataset> {
    let names = format.file_names(name);
    match format {
        OutputFormat::LvSplit => {
            let data = sink.get(&names[0])?;
            let enc = sink.get(&names[1])?;
            parse_split(name, schema, &data, &enc)
        }
        OutputFormat::LvCombined => parse_combined(name, schema, &sink.get(&names[0])?),
        OutputFormat::Csv => parse_csv(name, schema, &sink.get(&names[0])?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{FileSink, MemorySink};
    use bytes::Bytes;
    use goldvec_core::{Case, TextEncoding};
    use proptest::prelude::*;

    fn dataset_from(rows: &[(Vec<u8>, Vec<u8>)]) -> Dataset {
        let schema = Schema::new()
            .input("Base64", TextEncoding::Base64)
            .output("MD5 hash", TextEncoding::Base64);
        let mut dataset = Dataset::new("md5", schema);
        for (data, digest) in rows {
            dataset
                .push(Case::new(vec![
                    Bytes::from(data.clone()),
                    Bytes::from(digest.clone()),
                ]))
                .unwrap();
        }
        dataset
    }

    #[test]
    fn test_emit_writes_expected_files() {
        let dataset = dataset_from(&[(b"a".to_vec(), vec![1; 16])]);
        let sink = MemorySink::new();
        for format in OutputFormat::ALL {
            let artifacts = emit_dataset(&dataset, format, &sink).unwrap();
            let names: Vec<_> = artifacts.iter().map(|a| a.name.clone()).collect();
            assert_eq!(names, format.file_names("md5"));
        }
        assert_eq!(
            sink.names(),
            vec!["md5.csv", "md5.dat", "md5_data.dat", "md5_enc.dat"]
        );
    }

    #[test]
    fn test_file_sink_roundtrip_every_format() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::create(dir.path()).unwrap();
        let dataset = dataset_from(&[
            (Vec::new(), vec![0xd4; 16]),
            (vec![0u8; 7], vec![0x11; 16]),
        ]);
        for format in OutputFormat::ALL {
            emit_dataset(&dataset, format, &sink).unwrap();
            let read = read_dataset("md5", dataset.schema(), format, &sink).unwrap();
            assert_eq!(read, dataset, "{format}");
        }
    }

    proptest! {
        #[test]
        fn test_count_header_matches_cases(
            rows in prop::collection::vec(
                (prop::collection::vec(any::<u8>(), 0..64), prop::collection::vec(any::<u8>(), 16)),
                0..20,
            )
        ) {
            let dataset = dataset_from(&rows);
            let sink = MemorySink::new();
            emit_dataset(&dataset, OutputFormat::LvSplit, &sink).unwrap();
            for name in OutputFormat::LvSplit.file_names("md5") {
                let bytes = sink.get(&name).unwrap();
                let count = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                prop_assert_eq!(count as usize, rows.len());
            }
        }
    }
}
