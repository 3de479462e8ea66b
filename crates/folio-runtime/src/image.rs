//! Turning image files into inline data URIs.

use crate::config::DEFAULT_MAX_IMAGE_BYTES;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum ImageError {
    TooLarge { size: u64, max: u64 },
    NotAnImage,
    Io(std::io::Error),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::TooLarge { max, .. } => {
                write!(f, "File size should be less than {}", human_limit(*max))
            }
            ImageError::NotAnImage => write!(f, "Please upload an image file"),
            ImageError::Io(err) => write!(f, "Could not read image: {}", err),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        ImageError::Io(err)
    }
}

fn human_limit(bytes: u64) -> String {
    const MB: u64 = 1024 * 1024;
    const KB: u64 = 1024;
    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{}KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

fn mime_from_magic_bytes(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("image/png"),
        [0x47, 0x49, 0x46, 0x38, ..] => Some("image/gif"),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some("image/webp"),
        [0x42, 0x4D, ..] => Some("image/bmp"),
        _ => None,
    }
}

/// Validates and encodes image uploads.
#[derive(Debug, Clone, Copy)]
pub struct ImageInput {
    max_bytes: u64,
}

impl Default for ImageInput {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGE_BYTES)
    }
}

impl ImageInput {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    /// Read `path` into a `data:<mime>;base64,...` URI.
    ///
    /// Size is checked from metadata before the file is read; the target field
    /// should only be assigned on `Ok`.
    pub fn read_file(&self, path: &Path) -> Result<String, ImageError> {
        let size = std::fs::metadata(path)?.len();
        if size > self.max_bytes {
            return Err(ImageError::TooLarge {
                size,
                max: self.max_bytes,
            });
        }

        let bytes = std::fs::read(path)?;
        let mime = mime_from_extension(path)
            .or_else(|| mime_from_magic_bytes(&bytes))
            .ok_or(ImageError::NotAnImage)?;
        Ok(self.encode(mime, &bytes))
    }

    pub fn encode(&self, mime: &str, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::is_data_image_uri;
    use tempfile::TempDir;

    const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_oversized_file_rejected_with_message() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("photo.jpg");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(3 * 1024 * 1024).unwrap();

        let err = ImageInput::default().read_file(&path).unwrap_err();
        assert!(matches!(err, ImageError::TooLarge { .. }));
        assert_eq!(err.to_string(), "File size should be less than 2MB");
    }

    #[test]
    fn test_exactly_at_limit_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edge.png");
        let mut bytes = PNG_HEADER.to_vec();
        bytes.resize(64, 0);
        std::fs::write(&path, &bytes).unwrap();

        let uri = ImageInput::new(64).read_file(&path).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_non_image_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = ImageInput::default().read_file(&path).unwrap_err();
        assert_eq!(err.to_string(), "Please upload an image file");
    }

    #[test]
    fn test_magic_bytes_used_without_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("avatar");
        std::fs::write(&path, PNG_HEADER).unwrap();

        let uri = ImageInput::default().read_file(&path).unwrap();
        assert!(is_data_image_uri(&uri));
        assert_eq!(uri, format!("data:image/png;base64,{}", STANDARD.encode(PNG_HEADER)));
    }

    #[test]
    fn test_svg_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logo.SVG");
        std::fs::write(&path, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();

        let uri = ImageInput::default().read_file(&path).unwrap();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ImageInput::default()
            .read_file(Path::new("/definitely/not/here.png"))
            .unwrap_err();
        assert!(matches!(err, ImageError::Io(_)));
    }

    #[test]
    fn test_human_limit() {
        assert_eq!(human_limit(2 * 1024 * 1024), "2MB");
        assert_eq!(human_limit(512 * 1024), "512KB");
        assert_eq!(human_limit(1000), "1000 bytes");
    }
}
