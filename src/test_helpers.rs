//! Shared test utilities: minimal byte streams for each supported format.
//!
//! Each builder produces the smallest stream the prober accepts for that
//! format: real signatures and correctly-placed dimension fields, junk
//! elsewhere.

/// PNG signature + IHDR chunk. CRC is junk; the prober never checks it.
pub fn minimal_png(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    // bit depth, color type, compression, filter, interlace
    data.extend_from_slice(&[8, 2, 0, 0, 0]);
    data.extend_from_slice(&[0; 4]); // CRC
    data
}

/// GIF89a header + logical screen descriptor.
pub fn minimal_gif(width: u16, height: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"GIF89a");
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    // packed fields, background color index, pixel aspect ratio
    data.extend_from_slice(&[0x00, 0x00, 0x00]);
    data
}

/// SOI, an APP0 segment the scan must skip, then a baseline frame header.
pub fn minimal_jpeg(width: u16, height: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&[0xFF, 0xD8]);

    data.extend_from_slice(&[0xFF, 0xE0]); // APP0
    let app0_payload = [0u8; 14];
    data.extend_from_slice(&((app0_payload.len() + 2) as u16).to_be_bytes());
    data.extend_from_slice(&app0_payload);

    data.extend_from_slice(&[0xFF, 0xC0]); // SOF0
    let components = 3u8;
    data.extend_from_slice(&(8 + 3 * components as u16).to_be_bytes());
    data.push(8); // precision
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.push(components);
    for id in 1..=components {
        data.extend_from_slice(&[id, 0x11, 0x00]);
    }

    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

/// `BM` file header + BITMAPINFOHEADER.
pub fn minimal_bmp(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&54u32.to_le_bytes()); // file size (junk)
    data.extend_from_slice(&[0; 4]); // reserved
    data.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
    data.extend_from_slice(&40u32.to_le_bytes()); // DIB header size
    data.extend_from_slice(&(width as i32).to_le_bytes());
    data.extend_from_slice(&(height as i32).to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // planes
    data.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    data.extend_from_slice(&[0; 24]); // compression through palette fields
    data
}
