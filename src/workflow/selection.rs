// SPDX-License-Identifier: MPL-2.0
//! The staged image and how files become candidates for it.

use crate::error::{Error, Result};
use std::path::Path;

/// Prefix every accepted media type must start with.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Media type used when the extension is unknown.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Extensions offered by the file picker filter.
pub const PICKER_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif", "ico", "svg", "avif", "heic",
];

/// Declared media type for a file on disk, derived from its extension.
#[must_use]
pub fn media_type_for_path(path: &Path) -> &'static str {
    let Some(extension) = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
    else {
        return UNKNOWN_MEDIA_TYPE;
    };

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/x-icon",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "heic" => "image/heic",
        _ => UNKNOWN_MEDIA_TYPE,
    }
}

/// A file handed over by a drop or picker event, not yet accepted.
///
/// Both acquisition sources normalize to this type before reaching
/// [`Controller::acquire`](super::Controller::acquire).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl IncomingFile {
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Whether the declared media type is in the image category.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with(IMAGE_MEDIA_PREFIX)
    }

    /// Reads a file from disk, declaring its media type from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read.
    pub async fn read(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await.map_err(Error::from)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::new(name, media_type_for_path(path), bytes))
    }
}

/// The single image currently staged for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl Selection {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<IncomingFile> for Selection {
    fn from(file: IncomingFile) -> Self {
        Self {
            name: file.name,
            media_type: file.media_type,
            bytes: file.bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn media_type_from_common_extensions() {
        assert_eq!(media_type_for_path(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("photo.JPEG")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("shot.PNG")), "image/png");
        assert_eq!(media_type_for_path(Path::new("vector.svg")), "image/svg+xml");
    }

    #[test]
    fn media_type_unknown_for_other_files() {
        assert_eq!(media_type_for_path(Path::new("notes.txt")), UNKNOWN_MEDIA_TYPE);
        assert_eq!(media_type_for_path(Path::new("Makefile")), UNKNOWN_MEDIA_TYPE);
    }

    #[test]
    fn every_picker_extension_maps_to_an_image_type() {
        for ext in PICKER_EXTENSIONS {
            let path = PathBuf::from(format!("file.{ext}"));
            assert!(
                media_type_for_path(&path).starts_with(IMAGE_MEDIA_PREFIX),
                "{ext} should be an image"
            );
        }
    }

    #[test]
    fn is_image_checks_prefix_only() {
        assert!(IncomingFile::new("a", "image/png", vec![]).is_image());
        assert!(IncomingFile::new("a", "image/anything", vec![]).is_image());
        assert!(!IncomingFile::new("a", "text/plain", vec![]).is_image());
        assert!(!IncomingFile::new("a", "application/image", vec![]).is_image());
    }

    #[tokio::test]
    async fn read_declares_type_and_name() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("photo.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).expect("write");

        let file = IncomingFile::read(&path).await.expect("read");
        assert_eq!(file.name, "photo.png");
        assert_eq!(file.media_type, "image/png");
        assert_eq!(file.bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = IncomingFile::read(&dir.path().join("missing.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
