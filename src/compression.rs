//! Transparent gzip/zlib inflation of input files

use std::io::Read;

use flate2::read::{MultiGzDecoder, ZlibDecoder};
use tracing::{debug, error};

use crate::{ConvertError, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Whether `data` starts with the gzip magic bytes.
pub fn is_gzipped(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

/// Whether `data` starts with a valid zlib header.
fn is_zlib(data: &[u8]) -> bool {
    match data {
        [cmf, flg, ..] => cmf & 0x0f == 8 && (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0,
        _ => false,
    }
}

/// Inflate a gzip or zlib stream, picking the decoder from its header.
pub fn try_inflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len().saturating_mul(2));
    let read = if is_gzipped(data) {
        MultiGzDecoder::new(data).read_to_end(&mut out)
    } else if is_zlib(data) {
        ZlibDecoder::new(data).read_to_end(&mut out)
    } else {
        return Err(ConvertError::inflate_failed("neither a gzip nor a zlib header"));
    };

    read.map_err(|e| ConvertError::inflate_failed(e.to_string()))?;
    debug!(compressed = data.len(), inflated = out.len(), "Inflated stream");
    Ok(out)
}

/// Inflate `data`, logging any failure and returning an empty buffer instead.
pub fn inflate(data: &[u8]) -> Vec<u8> {
    match try_inflate(data) {
        Ok(out) => out,
        Err(e) => {
            error!(error = %e, "Failed to inflate stream");
            Vec::new()
        }
    }
}

/// Inflate `data` when it is gzipped, otherwise hand it back untouched.
pub fn maybe_inflate(data: Vec<u8>) -> Vec<u8> {
    if is_gzipped(&data) { inflate(&data) } else { data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::{GzEncoder, ZlibEncoder};
    use std::io::Write;

    fn gzip(payload: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(payload).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn detects_gzip_magic() {
        assert!(is_gzipped(&gzip(b"abc")));
        assert!(!is_gzipped(&[0x1f]));
        assert!(!is_gzipped(&[0x08, 0x96, 0x01]));
    }

    #[test]
    fn inflates_gzip_and_zlib() {
        let payload: Vec<u8> = (0..10_000u32).flat_map(|i| i.to_le_bytes()).collect();
        assert_eq!(inflate(&gzip(&payload)), payload);

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&payload).unwrap();
        let zlib = encoder.finish().unwrap();
        assert_eq!(try_inflate(&zlib).unwrap(), payload);
    }

    #[test]
    fn corrupt_streams_inflate_to_nothing() {
        let mut broken = gzip(b"some telemetry payload");
        let len = broken.len();
        broken.truncate(len - 4);
        assert!(try_inflate(&broken).is_err());
        assert!(inflate(&broken).is_empty());
        assert!(matches!(try_inflate(b"plain"), Err(ConvertError::Inflate { .. })));
    }

    #[test]
    fn plain_data_passes_through() {
        let raw = vec![0x08, 0x01, 0x10, 0x02];
        assert_eq!(maybe_inflate(raw.clone()), raw);
        assert_eq!(maybe_inflate(gzip(&raw)), raw);
    }
}
