//! Bounds-checked cursor over a wire buffer

use super::WireError;

/// Longest varint the format allows (a full 64-bit value).
const MAX_VARINT_LEN: usize = 10;

/// Forward-only reader over one tag/value stream.
///
/// Every read is bounds checked; a read that would run past the end returns
/// an error and leaves the position where the failed value started.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read an unsigned LEB128 varint.
    pub fn read_varint(&mut self) -> Result<u64, WireError> {
        let start = self.pos;
        let mut value = 0u64;
        for i in 0..MAX_VARINT_LEN {
            let Some(&byte) = self.data.get(start + i) else {
                return Err(WireError::TruncatedVarint { offset: start });
            };
            value |= u64::from(byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                self.pos = start + i + 1;
                return Ok(value);
            }
        }
        Err(WireError::VarintOverflow { offset: start })
    }

    pub fn read_fixed32(&mut self) -> Result<[u8; 4], WireError> {
        let bytes = self.take(4)?;
        let mut out = [0u8; 4];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_fixed64(&mut self) -> Result<[u8; 8], WireError> {
        let bytes = self.take(8)?;
        let mut out = [0u8; 8];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read a varint length prefix followed by that many bytes.
    pub fn read_length_delimited(&mut self) -> Result<&'a [u8], WireError> {
        let start = self.pos;
        let length = self.read_varint()?;
        let available = self.remaining();
        match usize::try_from(length) {
            Ok(len) if len <= available => self.take(len),
            _ => {
                self.pos = start;
                Err(WireError::Truncated { offset: start, needed: length, available })
            }
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let available = self.remaining();
        if len > available {
            return Err(WireError::Truncated { offset: self.pos, needed: len as u64, available });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}
