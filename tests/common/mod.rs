//! Shared fixtures for integration tests
//!
//! Builds tag/value streams by hand and lays them out as a session on disk.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

fn varint(mut value: u64, out: &mut Vec<u8>) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Minimal message encoder.
#[derive(Default, Clone)]
pub struct Msg(Vec<u8>);

impl Msg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uint(mut self, field: u32, value: u64) -> Self {
        varint(u64::from(field) << 3, &mut self.0);
        varint(value, &mut self.0);
        self
    }

    pub fn float(mut self, field: u32, value: f32) -> Self {
        varint(u64::from(field) << 3 | 5, &mut self.0);
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn double(mut self, field: u32, value: f64) -> Self {
        varint(u64::from(field) << 3 | 1, &mut self.0);
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn bytes(mut self, field: u32, value: &[u8]) -> Self {
        varint(u64::from(field) << 3 | 2, &mut self.0);
        varint(value.len() as u64, &mut self.0);
        self.0.extend_from_slice(value);
        self
    }

    pub fn msg(self, field: u32, nested: Msg) -> Self {
        self.bytes(field, &nested.0)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

pub fn timestamp(year: u64, month: u64, day: u64, hour: u64, minute: u64) -> Msg {
    Msg::new()
        .msg(1, Msg::new().uint(1, year).uint(2, month).uint(3, day))
        .msg(2, Msg::new().uint(1, hour).uint(2, minute))
}

pub fn duration(minutes: u64, seconds: u64) -> Msg {
    Msg::new().uint(2, minutes).uint(3, seconds)
}

pub fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(data)?;
    encoder.finish()
}

/// A session directory removed on drop.
pub struct Session {
    dir: TempDir,
    base: PathBuf,
}

impl Session {
    pub fn new(name: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let base = dir.path().join(name);
        Ok(Self { dir, base })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, suffix: &str, data: &[u8]) -> std::io::Result<()> {
        let mut name = self.base.as_os_str().to_os_string();
        name.push(format!("-{}", suffix));
        std::fs::write(PathBuf::from(name), data)
    }

    pub fn write_exercise(&self, id: &str, kind: &str, data: &[u8]) -> std::io::Result<()> {
        self.write(&format!("exercises-{}-{}", id, kind), data)
    }
}
