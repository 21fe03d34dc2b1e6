//! Remote storage abstraction.
//!
//! The core pipeline never talks HTTP directly: it consumes a [`Lister`],
//! which returns the direct children of one folder per call. The real
//! implementation lives in [`crate::yadisk`]; tests substitute an in-memory
//! fake.
//!
//! ## Image classification
//!
//! A file counts as an image if the remote service declared it one
//! (`media_type == "image"`) or its extension is in a fixed allow-list.
//! No content inspection happens anywhere in the pipeline.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failure to list one folder. Recovered at the crawler boundary: the
/// affected subtree is skipped, the crawl continues.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed listing response: {0}")]
    Body(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Dir,
    File,
}

/// One direct child of a remote folder, as reported by the [`Lister`].
/// Immutable once returned.
#[derive(Debug, Clone)]
pub struct RemoteItem {
    /// File or folder name (last path segment).
    pub name: String,
    /// Normalized path from the share root, always starting with `/`.
    pub path: String,
    pub kind: ItemKind,
    /// Modification timestamp, when the service reports one.
    pub modified: Option<DateTime<Utc>>,
    /// Service-declared media kind (e.g. `"image"`), when available.
    pub media_type: Option<String>,
}

impl RemoteItem {
    pub fn is_dir(&self) -> bool {
        self.kind == ItemKind::Dir
    }
}

/// Directory listing capability over a remote folder tree.
///
/// `path` is `/` for the share root, otherwise the normalized folder path.
/// Implementations must report a distinguishable error rather than panic on
/// a failed request.
pub trait Lister {
    fn list(&self, path: &str) -> Result<Vec<RemoteItem>, ListError>;
}

/// Extensions accepted as images when the service gives no media type.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "heic", "bmp", "tif", "tiff",
];

/// Whether a remote item is a direct image file.
///
/// The declared media type wins; the extension check is the fallback for
/// services (or fixtures) that omit it.
pub fn is_image(item: &RemoteItem) -> bool {
    if item.kind != ItemKind::File {
        return false;
    }
    if item.media_type.as_deref() == Some("image") {
        return true;
    }
    let name = item.name.to_lowercase();
    name.rsplit_once('.')
        .map(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{dir, file};

    #[test]
    fn declared_media_type_wins() {
        let item = file("scan.raw", None, Some("image"));
        assert!(is_image(&item));
    }

    #[test]
    fn extension_fallback_is_case_insensitive() {
        assert!(is_image(&file("IMG_0001.JPG", None, None)));
        assert!(is_image(&file("pano.Tiff", None, None)));
    }

    #[test]
    fn non_image_extensions_rejected() {
        assert!(!is_image(&file("notes.txt", None, None)));
        assert!(!is_image(&file("clip.mp4", None, None)));
        assert!(!is_image(&file("noextension", None, None)));
    }

    #[test]
    fn directories_are_never_images() {
        let folder = dir("photos.jpg", "/photos.jpg");
        assert!(!is_image(&folder));
    }
}
