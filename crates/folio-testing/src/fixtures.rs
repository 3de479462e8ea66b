//! Input files and raw storage values for integration tests.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Smallest valid PNG: 1x1 transparent pixel.
pub const TINY_PNG: [u8; 67] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Write `raw` as the stored value of `key`, bypassing the CLI.
pub fn write_raw_value(storage_dir: &Path, key: &str, raw: &str) -> Result<()> {
    fs::create_dir_all(storage_dir)?;
    fs::write(storage_dir.join(key), raw)?;
    Ok(())
}

pub fn write_png(path: &Path) -> Result<()> {
    fs::write(path, TINY_PNG)?;
    Ok(())
}

/// A JPEG-headed file padded out to `size` bytes.
pub fn write_jpeg_of_size(path: &Path, size: u64) -> Result<()> {
    fs::write(path, [0xFF, 0xD8, 0xFF, 0xE0])?;
    let file = fs::OpenOptions::new().write(true).open(path)?;
    file.set_len(size)?;
    Ok(())
}

pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
