//! Length-Value framing.
//!
//! A dataset file is a count header followed by `count` groups of records.
//! Every integer on the wire is an `i32` in little-endian byte order,
//! regardless of the target platform:
//!
//! ```text
//! count:i32le || (len:i32le || bytes[len]) * width * count
//! ```
//!
//! [`LvWriter`] and [`LvReader`] enforce the count invariant: the header
//! always matches the number of groups actually present.

use bytes::{BufMut, Bytes, BytesMut};
use std::io::{Read, Write};

use crate::error::FormatError;

/// Size of every length/count header in bytes.
pub const HEADER_LEN: usize = 4;

/// Result type for LV operations.
pub type Result<T> = std::result::Result<T, FormatError>;

fn to_header(n: usize) -> Result<[u8; HEADER_LEN]> {
    let n = i32::try_from(n).map_err(|_| FormatError::CountOverflow(n))?;
    Ok(n.to_le_bytes())
}

/// Write a count header.
pub fn write_count<W: Write + ?Sized>(w: &mut W, n: usize) -> Result<()> {
    w.write_all(&to_header(n)?)?;
    Ok(())
}

/// Write one record: its length header, then the bytes verbatim.
pub fn write_value<W: Write + ?Sized>(w: &mut W, value: &[u8]) -> Result<()> {
    w.write_all(&to_header(value.len())?)?;
    w.write_all(value)?;
    Ok(())
}

/// Encode one record into a fresh buffer.
pub fn encode_value(value: &[u8]) -> Result<Bytes> {
    let header = to_header(value.len())?;
    let mut buf = BytesMut::with_capacity(HEADER_LEN + value.len());
    buf.put_slice(&header);
    buf.put_slice(value);
    Ok(buf.freeze())
}

/// Read exactly `buf.len()` bytes, reporting how many arrived on a short read.
fn read_full<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(FormatError::Truncated {
                    expected: buf.len(),
                    actual: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Read a raw 4-byte header.
pub fn read_count<R: Read + ?Sized>(r: &mut R) -> Result<i32> {
    let mut header = [0u8; HEADER_LEN];
    read_full(r, &mut header)?;
    Ok(i32::from_le_bytes(header))
}

/// Read one record.
///
/// Fails with [`FormatError::NegativeLength`] if the header is negative and
/// [`FormatError::Truncated`] if fewer bytes remain than it declares.
pub fn read_value<R: Read + ?Sized>(r: &mut R) -> Result<Bytes> {
    let len = read_count(r)?;
    if len < 0 {
        return Err(FormatError::NegativeLength(len));
    }
    // The header is untrusted: grow with the bytes that actually arrive.
    let expected = len as usize;
    let mut value = Vec::new();
    Read::take(&mut *r, len as u64).read_to_end(&mut value)?;
    if value.len() < expected {
        return Err(FormatError::Truncated {
            expected,
            actual: value.len(),
        });
    }
    Ok(Bytes::from(value))
}

/// Writes a declared number of fixed-width record groups.
///
/// The count header is written up front; [`LvWriter::finish`] fails if the
/// number of groups written differs from the declaration. The first group
/// fixes the width every later group must match.
pub struct LvWriter<W: Write> {
    inner: W,
    declared: usize,
    written: usize,
    width: Option<usize>,
}

impl<W: Write> LvWriter<W> {
    /// Write the count header and return a writer for `groups` groups.
    pub fn new(mut inner: W, groups: usize) -> Result<Self> {
        write_count(&mut inner, groups)?;
        Ok(Self {
            inner,
            declared: groups,
            written: 0,
            width: None,
        })
    }

    /// Write one group of records.
    pub fn write_group<V: AsRef<[u8]>>(&mut self, records: &[V]) -> Result<()> {
        if self.written == self.declared {
            return Err(FormatError::CountMismatch {
                declared: self.declared,
                written: self.written + 1,
            });
        }
        let expected = *self.width.get_or_insert(records.len());
        if records.len() != expected {
            return Err(FormatError::GroupWidth {
                expected,
                actual: records.len(),
            });
        }
        for record in records {
            write_value(&mut self.inner, record.as_ref())?;
        }
        self.written += 1;
        Ok(())
    }

    /// Number of groups written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Check the count invariant, flush, and return the inner writer.
    pub fn finish(mut self) -> Result<W> {
        if self.written != self.declared {
            return Err(FormatError::CountMismatch {
                declared: self.declared,
                written: self.written,
            });
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Reads a count header followed by groups of `width` records.
pub struct LvReader<R: Read> {
    inner: R,
    width: usize,
    remaining: usize,
    count: usize,
}

impl<R: Read> LvReader<R> {
    /// Read the count header.
    pub fn new(mut inner: R, width: usize) -> Result<Self> {
        let count = read_count(&mut inner)?;
        if count < 0 {
            return Err(FormatError::NegativeLength(count));
        }
        Ok(Self {
            inner,
            width,
            remaining: count as usize,
            count: count as usize,
        })
    }

    /// The count header as declared in the stream.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Read the next group, or `None` once every declared group was read.
    pub fn next_group(&mut self) -> Result<Option<Vec<Bytes>>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let mut group = Vec::with_capacity(self.width);
        for _ in 0..self.width {
            group.push(read_value(&mut self.inner)?);
        }
        self.remaining -= 1;
        Ok(Some(group))
    }

    /// Read every remaining group and reject trailing data.
    pub fn read_all(mut self) -> Result<Vec<Vec<Bytes>>> {
        let mut groups = Vec::new();
        while let Some(group) = self.next_group()? {
            groups.push(group);
        }
        let mut rest = Vec::new();
        self.inner.read_to_end(&mut rest)?;
        if !rest.is_empty() {
            return Err(FormatError::TrailingBytes(rest.len()));
        }
        Ok(groups)
    }
}
