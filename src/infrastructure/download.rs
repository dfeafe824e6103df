// SPDX-License-Identifier: MPL-2.0
//! Saving generated images to disk.

use crate::domain::card::Caption;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "past-forward";
const FALLBACK_EXTENSION: &str = "png";

/// Proposes a file name such as `past-forward-1950s.jpg`.
///
/// The extension is sniffed from the image bytes.
#[must_use]
pub fn suggested_file_name(caption: &Caption, bytes: &[u8]) -> String {
    let extension = image_rs::guess_format(bytes)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or(FALLBACK_EXTENSION);

    format!("{FILE_PREFIX}-{}.{extension}", slug(caption.as_str()))
}

/// Opens a save dialog and returns the chosen path, if any.
pub async fn choose_target(file_name: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_file_name(file_name)
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Writes the image bytes to `path`, creating parent directories.
pub fn write_image(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).map_err(|e| Error::Download(e.to_string()))?;
    Ok(path.to_path_buf())
}

fn slug(caption: &str) -> String {
    let slug: String = caption
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    if slug.is_empty() {
        "image".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0, 0, 0];

    #[test]
    fn file_name_uses_sniffed_extension() {
        let caption = Caption::new("1950s");
        assert_eq!(suggested_file_name(&caption, PNG_MAGIC), "past-forward-1950s.png");
        assert_eq!(suggested_file_name(&caption, JPEG_MAGIC), "past-forward-1950s.jpg");
    }

    #[test]
    fn unknown_bytes_fall_back_to_png() {
        let caption = Caption::new("1960s");
        assert_eq!(suggested_file_name(&caption, b"nope"), "past-forward-1960s.png");
    }

    #[test]
    fn caption_is_slugged() {
        let caption = Caption::new("Roaring 20s!");
        assert_eq!(suggested_file_name(&caption, b""), "past-forward-roaring-20s-.png");
        assert_eq!(slug("   "), "image");
    }

    #[test]
    fn write_image_creates_parent_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("card.png");

        let written = write_image(&path, PNG_MAGIC).expect("write should succeed");
        assert_eq!(written, path);
        assert_eq!(std::fs::read(&path).expect("file should exist"), PNG_MAGIC);
    }
}
