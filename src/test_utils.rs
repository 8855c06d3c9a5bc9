//! Test utilities for building wire fixtures and on-disk sessions
//!
//! This module provides an encoder for hand-assembling tag/value streams and a
//! temporary directory laid out the way a synchronised training session is.
//! It is shared by unit tests, integration tests and benchmarks.

#![cfg(any(test, feature = "benchmark"))]

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// Append `value` to `out` as an unsigned LEB128 varint.
pub fn encode_varint(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Builder for tag/value streams.
///
/// Methods take the field number and the value, and return the writer so
/// messages read top-down:
///
/// ```rust,ignore
/// let bytes = WireWriter::new()
///     .varint(2, 120)
///     .message(1, WireWriter::new().varint(3, 5))
///     .finish();
/// ```
#[derive(Debug, Clone, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw tag with an arbitrary wire type (including invalid ones).
    pub fn tag(mut self, field: u32, wire_type: u8) -> Self {
        encode_varint(u64::from(field) << 3 | u64::from(wire_type), &mut self.buf);
        self
    }

    pub fn varint(self, field: u32, value: u64) -> Self {
        let mut this = self.tag(field, 0);
        encode_varint(value, &mut this.buf);
        this
    }

    /// Signed 32-bit value, sign-extended to ten bytes when negative.
    pub fn int32(self, field: u32, value: i32) -> Self {
        self.varint(field, i64::from(value) as u64)
    }

    pub fn sint32(self, field: u32, value: i32) -> Self {
        let zigzag = ((value << 1) ^ (value >> 31)) as u32;
        self.varint(field, u64::from(zigzag))
    }

    pub fn float(self, field: u32, value: f32) -> Self {
        let mut this = self.tag(field, 5);
        this.buf.extend_from_slice(&value.to_le_bytes());
        this
    }

    pub fn double(self, field: u32, value: f64) -> Self {
        let mut this = self.tag(field, 1);
        this.buf.extend_from_slice(&value.to_le_bytes());
        this
    }

    pub fn bytes(self, field: u32, value: &[u8]) -> Self {
        let mut this = self.tag(field, 2);
        encode_varint(value.len() as u64, &mut this.buf);
        this.buf.extend_from_slice(value);
        this
    }

    pub fn string(self, field: u32, value: &str) -> Self {
        self.bytes(field, value.as_bytes())
    }

    pub fn message(self, field: u32, nested: WireWriter) -> Self {
        self.bytes(field, &nested.buf)
    }

    /// Append bytes verbatim.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// `{date{year,month,day}, time{hour,minute,seconds,milliseconds}}` as used by
/// every timestamp in the training files. Pass `offset` to add the UTC offset
/// in minutes.
pub fn timestamp(
    (year, month, day): (u32, u32, u32),
    (hour, minute, second, millis): (u32, u32, u32, u32),
    offset: Option<i32>,
) -> WireWriter {
    let date = WireWriter::new()
        .varint(1, u64::from(year))
        .varint(2, u64::from(month))
        .varint(3, u64::from(day));
    let time = WireWriter::new()
        .varint(1, u64::from(hour))
        .varint(2, u64::from(minute))
        .varint(3, u64::from(second))
        .varint(4, u64::from(millis));
    let writer = WireWriter::new().message(1, date).message(2, time);
    match offset {
        Some(minutes) => writer.int32(4, minutes),
        None => writer,
    }
}

/// `{hours,minutes,seconds,milliseconds}` duration message.
pub fn duration(hours: u32, minutes: u32, seconds: u32, millis: u32) -> WireWriter {
    WireWriter::new()
        .varint(1, u64::from(hours))
        .varint(2, u64::from(minutes))
        .varint(3, u64::from(seconds))
        .varint(4, u64::from(millis))
}

/// Gzip `data` the way devices store their larger files.
pub fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// A training session laid out in a temporary directory.
///
/// Files are named `<base>-create`, `<base>-physical-information` and
/// `<base>-exercises-<id>-<kind>`. The directory is removed on drop.
#[derive(Debug)]
pub struct SessionFixture {
    dir: TempDir,
    base_name: PathBuf,
}

impl SessionFixture {
    pub fn new(base_name: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let base_name = dir.path().join(base_name);
        Ok(Self { dir, base_name })
    }

    /// Full path prefix shared by every file of the session.
    pub fn base_name(&self) -> &Path {
        &self.base_name
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Write `<base>-<suffix>`.
    pub fn write_session_file(&self, suffix: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.path_with_suffix(suffix);
        std::fs::write(&path, data)?;
        Ok(path)
    }

    /// Write `<base>-exercises-<id>-<kind>`.
    pub fn write_exercise_file(
        &self,
        id: &str,
        kind: &str,
        data: &[u8],
    ) -> std::io::Result<PathBuf> {
        self.write_session_file(&format!("exercises-{}-{}", id, kind), data)
    }

    /// Write `<base>-exercises-<id>-<kind>` gzip-compressed.
    pub fn write_gzipped_exercise_file(
        &self,
        id: &str,
        kind: &str,
        data: &[u8],
    ) -> std::io::Result<PathBuf> {
        self.write_exercise_file(id, kind, &gzip(data)?)
    }

    /// Path for an output file next to the inputs.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    fn path_with_suffix(&self, suffix: &str) -> PathBuf {
        let mut name = self.base_name.as_os_str().to_os_string();
        name.push("-");
        name.push(suffix);
        PathBuf::from(name)
    }
}
