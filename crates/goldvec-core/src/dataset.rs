//! Datasets, schemas and cases.
//!
//! A [`Dataset`] is the in-memory form of one golden file (or file pair).
//! Drivers build the whole value first; emitters only ever see complete
//! datasets, so a failed driver never produces a half-written file.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// How a column is rendered in text outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    /// Standard base64 with padding.
    Base64,
    /// Lowercase hex, no separators.
    Hex,
    /// The bytes are already UTF-8 text.
    Utf8,
}

impl TextEncoding {
    /// Render bytes as text.
    pub fn encode(self, bytes: &[u8]) -> Result<String, String> {
        match self {
            Self::Base64 => Ok(STANDARD.encode(bytes)),
            Self::Hex => Ok(hex::encode(bytes)),
            Self::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| e.to_string()),
        }
    }

    /// Parse text back into bytes.
    pub fn decode(self, text: &str) -> Result<Vec<u8>, String> {
        match self {
            Self::Base64 => STANDARD.decode(text).map_err(|e| e.to_string()),
            Self::Hex => hex::decode(text).map_err(|e| e.to_string()),
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
        }
    }
}

/// Which file of a split LV pair a column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// Generated inputs: key material, IVs, plaintext.
    Input,
    /// Values derived from the inputs: ciphertext, digest, padded block.
    Output,
}

/// One column of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// CSV header name.
    pub name: String,
    pub encoding: TextEncoding,
    pub part: Part,
}

/// Ordered column list shared by every case of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an input column.
    pub fn input(self, name: impl Into<String>, encoding: TextEncoding) -> Self {
        self.column(name, encoding, Part::Input)
    }

    /// Append an output column.
    pub fn output(self, name: impl Into<String>, encoding: TextEncoding) -> Self {
        self.column(name, encoding, Part::Output)
    }

    fn column(mut self, name: impl Into<String>, encoding: TextEncoding, part: Part) -> Self {
        self.columns.push(Column {
            name: name.into(),
            encoding,
            part,
        });
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// CSV header row.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Position of a column by header name.
    pub fn index_of(&self, name: &str) -> Result<usize, DatasetError> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| DatasetError::UnknownColumn(name.to_string()))
    }

    /// Indices of the columns in `part`, in schema order.
    pub fn part_indices(&self, part: Part) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.part == part)
            .map(|(i, _)| i)
            .collect()
    }
}

/// One generated scenario. Values are aligned with the dataset schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    values: Vec<Bytes>,
}

impl Case {
    pub fn new(values: Vec<Bytes>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Bytes] {
        &self.values
    }

    /// Value at a column index.
    ///
    /// Panics if `index` is out of range; dataset construction guarantees
    /// every case matches its schema width.
    pub fn value(&self, index: usize) -> &Bytes {
        &self.values[index]
    }
}

/// A complete, named set of cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    schema: Schema,
    cases: Vec<Case>,
}

impl Dataset {
    /// Empty dataset with a fixed schema.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            cases: Vec::new(),
        }
    }

    /// Append a case, rejecting one whose width differs from the schema.
    pub fn push(&mut self, case: Case) -> Result<(), DatasetError> {
        if case.values.len() != self.schema.len() {
            return Err(DatasetError::Arity {
                expected: self.schema.len(),
                actual: case.values.len(),
            });
        }
        self.cases.push(case);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Every value of one column, in case order.
    pub fn column(&self, name: &str) -> Result<Vec<&Bytes>, DatasetError> {
        let index = self.schema.index_of(name)?;
        Ok(self.cases.iter().map(|c| c.value(index)).collect())
    }

    /// Render one case as text fields, in schema order.
    pub fn text_row(&self, case: &Case) -> Result<Vec<String>, DatasetError> {
        self.schema
            .columns()
            .iter()
            .zip(case.values())
            .map(|(column, value)| {
                column
                    .encoding
                    .encode(value)
                    .map_err(|message| DatasetError::Encoding {
                        column: column.name.clone(),
                        message,
                    })
            })
            .collect()
    }
}
