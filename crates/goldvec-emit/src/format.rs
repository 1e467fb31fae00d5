//! Output formats and the file names each one produces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a dataset is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Two LV files: inputs in `<name>_data.dat`, outputs in `<name>_enc.dat`.
    LvSplit,
    /// One LV file `<name>.dat` with every column per case.
    LvCombined,
    /// One CSV file `<name>.csv` with a header row.
    Csv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::LvSplit, Self::LvCombined, Self::Csv];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LvSplit => "lv-split",
            Self::LvCombined => "lv-combined",
            Self::Csv => "csv",
        }
    }

    /// Files written for dataset `name`, in write order.
    pub fn file_names(self, name: &str) -> Vec<String> {
        match self {
            Self::LvSplit => vec![format!("{name}_data.dat"), format!("{name}_enc.dat")],
            Self::LvCombined => vec![format!("{name}.dat")],
            Self::Csv => vec![format!("{name}.csv")],
        }
    }

    /// The file holding the generated inputs, which hash sidecars digest.
    pub fn data_file(self, name: &str) -> String {
        match self {
            Self::LvSplit => format!("{name}_data.dat"),
            Self::LvCombined => format!("{name}.dat"),
            Self::Csv => format!("{name}.csv"),
        }
    }

    pub fn is_lv(self) -> bool {
        !matches!(self, Self::Csv)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lv-split" | "lv" => Ok(Self::LvSplit),
            "lv-combined" => Ok(Self::LvCombined),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "unknown output format '{other}' (expected lv-split, lv-combined or csv)"
            )),
        }
    }
}
