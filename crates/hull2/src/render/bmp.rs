//! Uncompressed 24-bit BMP encoding.
//!
//! Layout: 14-byte file header, 40-byte BITMAPINFOHEADER, then pixel rows
//! bottom-up in BGR order, each padded to a multiple of 4 bytes. All integers
//! are little-endian.

use std::fs;
use std::io;
use std::path::Path;

use super::Canvas;

pub const FILE_HEADER_SIZE: usize = 14;
pub const DIB_HEADER_SIZE: usize = 40;
const BITS_PER_PIXEL: u16 = 24;

/// Bytes per stored row including alignment padding.
#[inline]
pub fn row_stride(width: usize) -> usize {
    (3 * width).div_ceil(4) * 4
}

/// Total file size for a `width × height` image.
#[inline]
pub fn file_size(width: usize, height: usize) -> usize {
    FILE_HEADER_SIZE + DIB_HEADER_SIZE + row_stride(width) * height
}

/// Encode the canvas as a complete BMP file.
pub fn encode(canvas: &Canvas) -> Vec<u8> {
    let (w, h) = (canvas.width(), canvas.height());
    let stride = row_stride(w);
    let data_size = stride * h;
    let mut out = Vec::with_capacity(file_size(w, h));

    // file header
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size(w, h) as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&((FILE_HEADER_SIZE + DIB_HEADER_SIZE) as u32).to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&(DIB_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&(w as i32).to_le_bytes());
    out.extend_from_slice(&(h as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&(data_size as u32).to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    let pad = stride - 3 * w;
    for y in 0..h {
        for px in canvas.row(y) {
            let [r, g, b] = px.rgb();
            out.extend_from_slice(&[b, g, r]);
        }
        out.extend(std::iter::repeat_n(0u8, pad));
    }
    out
}

/// Encode and write the canvas to `path`, creating parent directories.
pub fn write_bmp<P: AsRef<Path>>(path: P, canvas: &Canvas) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, encode(canvas))
}
