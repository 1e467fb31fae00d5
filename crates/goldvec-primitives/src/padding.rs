//! Block padding at a 16-byte block size.
//!
//! `pad` always adds between 1 and 16 bytes, so an input that is already
//! block-aligned gains a full block.

use cipher::block_padding::{AnsiX923, Iso7816, Pkcs7, RawPadding};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PrimitiveError, Result};

/// Block size every scheme pads to.
pub const BLOCK_SIZE: usize = 16;

/// Supported padding schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingScheme {
    /// Every padding byte equals the padding length.
    Pkcs7,
    /// Random filler, last byte is the padding length.
    Iso10126,
    /// `0x80` followed by zeros.
    Iso7816,
    /// Zeros, last byte is the padding length.
    AnsiX923,
}

impl PaddingScheme {
    pub const ALL: [PaddingScheme; 4] = [
        Self::Pkcs7,
        Self::Iso10126,
        Self::Iso7816,
        Self::AnsiX923,
    ];

    /// Label used in CSV headers, e.g. `Pkcs7 padding`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pkcs7 => "Pkcs7",
            Self::Iso10126 => "Iso10126",
            Self::Iso7816 => "Iso7816",
            Self::AnsiX923 => "AnsiX923",
        }
    }

    /// Pad `data` to the next multiple of [`BLOCK_SIZE`].
    ///
    /// Only ISO 10126 draws from `rng`.
    pub fn pad<R: RngCore + ?Sized>(self, data: &[u8], rng: &mut R) -> Result<Vec<u8>> {
        let full = data.len() - data.len() % BLOCK_SIZE;
        let tail = &data[full..];
        let mut out = Vec::with_capacity(full + BLOCK_SIZE);
        out.extend_from_slice(&data[..full]);

        let mut block = [0u8; BLOCK_SIZE];
        block[..tail.len()].copy_from_slice(tail);
        match self {
            Self::Pkcs7 => Pkcs7::raw_pad(&mut block, tail.len()),
            Self::Iso7816 => Iso7816::raw_pad(&mut block, tail.len()),
            Self::AnsiX923 => AnsiX923::raw_pad(&mut block, tail.len()),
            Self::Iso10126 => {
                let n = BLOCK_SIZE - tail.len();
                rng.try_fill_bytes(&mut block[tail.len()..BLOCK_SIZE - 1])?;
                block[BLOCK_SIZE - 1] = n as u8;
            }
        }
        out.extend_from_slice(&block);
        Ok(out)
    }

    /// Strip padding from a block-aligned buffer.
    pub fn unpad(self, padded: &[u8]) -> Result<Vec<u8>> {
        if padded.is_empty() || padded.len() % BLOCK_SIZE != 0 {
            return Err(self.invalid(format!(
                "length {} is not a positive multiple of {BLOCK_SIZE}",
                padded.len()
            )));
        }
        let split = padded.len() - BLOCK_SIZE;
        let last = &padded[split..];

        let kept = match self {
            Self::Pkcs7 => Pkcs7::raw_unpad(last),
            Self::Iso7816 => Iso7816::raw_unpad(last),
            Self::AnsiX923 => AnsiX923::raw_unpad(last),
            Self::Iso10126 => {
                let n = last[BLOCK_SIZE - 1] as usize;
                if n == 0 || n > BLOCK_SIZE {
                    return Err(self.invalid(format!("length byte {n} out of range")));
                }
                Ok(&last[..BLOCK_SIZE - n])
            }
        }
        .map_err(|_| self.invalid("malformed final block".to_string()))?;

        let mut out = Vec::with_capacity(split + kept.len());
        out.extend_from_slice(&padded[..split]);
        out.extend_from_slice(kept);
        Ok(out)
    }

    fn invalid(self, reason: String) -> PrimitiveError {
        PrimitiveError::Padding {
            scheme: self.label(),
            reason,
        }
    }
}

impl fmt::Display for PaddingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
