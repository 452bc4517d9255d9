//! Header-based image dimension probing.
//!
//! Recovers pixel width and height from the leading bytes of a file without
//! decoding any pixel data. The format is detected from the content signature,
//! never from the file extension, so a mislabelled file still probes (or fails)
//! honestly.
//!
//! Supported headers:
//!
//! - **PNG**: fixed 8-byte signature; width/height are big-endian u32 at bytes
//!   16–23 of the IHDR chunk. Bytes 4–7 must be the `0D 0A 1A 0A` tail of the
//!   signature or the probe fails.
//! - **GIF**: `GIF8` signature; width/height are little-endian u16 at bytes
//!   6–9 of the logical screen descriptor.
//! - **JPEG**: `FF D8` start-of-image, then a sequential marker-segment scan
//!   until a Start-Of-Frame marker (`C0`–`CF`); the frame header carries
//!   big-endian u16 height then width after one precision byte.
//! - **BMP**: `BM` signature; the DIB header size at byte 14 selects between
//!   the 12-byte core header (u16 dimensions) and the 40-byte-and-later info
//!   headers (i32 dimensions, negative height means top-down rows).
//!
//! All parsing runs as pure functions over a byte buffer with explicit bounds
//! checks. The only I/O is [`probe`], which reads a bounded prefix of the file
//! and releases the handle on every exit path. A probe failure is a per-file
//! outcome; callers decide how to degrade (the layout engine falls back to
//! landscape sizing).

use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Upper bound on how much of a file the prober will read. PNG, GIF, and BMP
/// need under 32 bytes; JPEG frame headers in real files sit within the first
/// few kilobytes of metadata segments. A stream whose frame header lies past
/// this bound is treated as malformed.
const PROBE_READ_LIMIT: u64 = 1 << 20;

/// Pixel dimensions recovered from a file header.
///
/// Invariant: both values are non-zero on every successfully probed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a recognized raster signature")]
    UnrecognizedSignature,
    #[error("file ends inside the {0} header")]
    Truncated(&'static str),
    #[error("PNG signature tail mismatch at bytes 4-7")]
    BadPngSignature,
    #[error("expected JPEG marker, found 0x{0:02x}")]
    BadJpegMarker(u8),
    #[error("header declares a zero width or height")]
    ZeroDimension,
}

/// Probe a file on disk. Reads at most [`PROBE_READ_LIMIT`] bytes; the file
/// handle is scoped to this call.
pub fn probe(path: &Path) -> Result<Dimensions, ProbeError> {
    let file = File::open(path)?;
    let mut data = Vec::new();
    file.take(PROBE_READ_LIMIT).read_to_end(&mut data)?;
    probe_bytes(&data)
}

/// Probe an in-memory byte buffer. Pure; no I/O.
pub fn probe_bytes(data: &[u8]) -> Result<Dimensions, ProbeError> {
    if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        png_dimensions(data)
    } else if data.starts_with(b"GIF8") {
        gif_dimensions(data)
    } else if data.starts_with(&[0xFF, 0xD8]) {
        jpeg_dimensions(data)
    } else if data.starts_with(b"BM") {
        bmp_dimensions(data)
    } else {
        Err(ProbeError::UnrecognizedSignature)
    }
}

fn dimensions(width: u32, height: u32) -> Result<Dimensions, ProbeError> {
    if width == 0 || height == 0 {
        return Err(ProbeError::ZeroDimension);
    }
    Ok(Dimensions { width, height })
}

fn be_u16(data: &[u8], offset: usize, format: &'static str) -> Result<u16, ProbeError> {
    let bytes = data
        .get(offset..offset + 2)
        .ok_or(ProbeError::Truncated(format))?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn le_u16(data: &[u8], offset: usize, format: &'static str) -> Result<u16, ProbeError> {
    let bytes = data
        .get(offset..offset + 2)
        .ok_or(ProbeError::Truncated(format))?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn be_u32(data: &[u8], offset: usize, format: &'static str) -> Result<u32, ProbeError> {
    let bytes = data
        .get(offset..offset + 4)
        .ok_or(ProbeError::Truncated(format))?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn le_u32(data: &[u8], offset: usize, format: &'static str) -> Result<u32, ProbeError> {
    let bytes = data
        .get(offset..offset + 4)
        .ok_or(ProbeError::Truncated(format))?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Width/height from the IHDR chunk at a fixed offset past the signature.
fn png_dimensions(data: &[u8]) -> Result<Dimensions, ProbeError> {
    const SIGNATURE_TAIL: [u8; 4] = [0x0D, 0x0A, 0x1A, 0x0A];
    let tail = data.get(4..8).ok_or(ProbeError::Truncated("PNG"))?;
    if tail != SIGNATURE_TAIL {
        return Err(ProbeError::BadPngSignature);
    }
    let width = be_u32(data, 16, "PNG")?;
    let height = be_u32(data, 20, "PNG")?;
    dimensions(width, height)
}

/// Width/height from the logical screen descriptor.
fn gif_dimensions(data: &[u8]) -> Result<Dimensions, ProbeError> {
    let width = le_u16(data, 6, "GIF")?;
    let height = le_u16(data, 8, "GIF")?;
    dimensions(width as u32, height as u32)
}

/// Scan marker segments from the start-of-image until a Start-Of-Frame
/// marker (`C0`–`CF`), then read the frame dimensions.
///
/// Each segment is `FF <marker> <u16 length> <payload>` where the length
/// covers itself. A non-`FF` byte where a marker was expected, or running
/// off the end of the buffer, fails the probe for this file.
fn jpeg_dimensions(data: &[u8]) -> Result<Dimensions, ProbeError> {
    let mut pos = 2; // past FF D8
    loop {
        let mut byte = *data.get(pos).ok_or(ProbeError::Truncated("JPEG"))?;
        if byte != 0xFF {
            return Err(ProbeError::BadJpegMarker(byte));
        }
        // FF bytes may pad before the marker type
        while byte == 0xFF {
            pos += 1;
            byte = *data.get(pos).ok_or(ProbeError::Truncated("JPEG"))?;
        }
        let marker = byte;
        pos += 1;

        if (0xC0..=0xCF).contains(&marker) {
            // length (2) + precision (1), then height and width
            let height = be_u16(data, pos + 3, "JPEG")?;
            let width = be_u16(data, pos + 5, "JPEG")?;
            return dimensions(width as u32, height as u32);
        }

        let length = be_u16(data, pos, "JPEG")? as usize;
        if length < 2 {
            return Err(ProbeError::Truncated("JPEG"));
        }
        pos += length;
    }
}

/// Width/height from the DIB header. The header size field selects the
/// layout: the ancient 12-byte core header stores u16 dimensions, everything
/// from BITMAPINFOHEADER up stores i32 (negative height = top-down rows).
fn bmp_dimensions(data: &[u8]) -> Result<Dimensions, ProbeError> {
    const CORE_HEADER_SIZE: u32 = 12;
    let header_size = le_u32(data, 14, "BMP")?;
    if header_size == CORE_HEADER_SIZE {
        let width = le_u16(data, 18, "BMP")?;
        let height = le_u16(data, 20, "BMP")?;
        dimensions(width as u32, height as u32)
    } else {
        let width = le_u32(data, 18, "BMP")? as i32;
        let height = le_u32(data, 22, "BMP")? as i32;
        dimensions(width.unsigned_abs(), height.unsigned_abs())
    }
}
