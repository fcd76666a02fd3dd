//! Source folder discovery and normalization into the canonical JPEG format.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::error::PipelineError;

use super::decode::decode_image;

/// Extension of the canonical format, used for both the normalization target
/// and the final output encoding.
pub const CANONICAL_EXTENSION: &str = "jpg";

/// Enumerates a source folder and normalizes its entries into canonical JPEGs.
///
/// Discovery is destructive: entries that fail to decode are deleted from the
/// source folder (best-effort, logged).
pub struct FileCatalog {
    source: PathBuf,
}

impl FileCatalog {
    /// Create a catalog over one source folder.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Produce the ordered, deduplicated set of canonical-format paths.
    ///
    /// Lists immediate entries only (non-recursive). The lexicographic
    /// ordering is load-bearing: it fixes which sequence number each image
    /// receives, so runs over the same input set are deterministic. A listing
    /// failure is fatal; per-file decode failures only remove that file.
    pub fn discover(&self) -> Result<Vec<PathBuf>, PipelineError> {
        let source = std::fs::canonicalize(&self.source).map_err(|e| PipelineError::Discovery {
            path: self.source.clone(),
            source: e,
        })?;
        let entries = std::fs::read_dir(&source).map_err(|e| PipelineError::Discovery {
            path: source.clone(),
            source: e,
        })?;

        let mut catalog = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| PipelineError::Discovery {
                path: source.clone(),
                source: e,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(canonical) = self.normalize(&path) {
                catalog.insert(canonical);
            }
        }
        Ok(catalog.into_iter().collect())
    }

    /// Bring one directory entry into the canonical format, or rule it out.
    fn normalize(&self, path: &Path) -> Option<PathBuf> {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if ext.eq_ignore_ascii_case(CANONICAL_EXTENSION) {
                if ext == CANONICAL_EXTENSION {
                    return Some(path.to_path_buf());
                }
                // Same format, wrong case: rename so the catalog is uniform.
                let renamed = path.with_extension(CANONICAL_EXTENSION);
                return match std::fs::rename(path, &renamed) {
                    Ok(()) => Some(renamed),
                    Err(e) => {
                        tracing::warn!("Could not rename {:?} to {:?}: {}", path, renamed, e);
                        Some(path.to_path_buf())
                    }
                };
            }
        }
        self.convert(path)
    }

    /// Re-encode a non-canonical entry as JPEG, or delete it if it does not
    /// decode.
    fn convert(&self, path: &Path) -> Option<PathBuf> {
        let decoded = match decode_image(path) {
            Ok(image) => image,
            Err(e) => {
                // Non-images are removed from the source folder, not just skipped
                tracing::warn!("Not an image, deleting {:?}: {}", path, e);
                if let Err(e) = std::fs::remove_file(path) {
                    tracing::warn!("Could not delete {:?}: {}", path, e);
                }
                return None;
            }
        };

        let converted = path.with_extension(CANONICAL_EXTENSION);
        // JPEG cannot carry an alpha channel
        let flattened = DynamicImage::ImageRgb8(decoded.to_rgb8());
        if let Err(e) = flattened.save_with_format(&converted, ImageFormat::Jpeg) {
            tracing::warn!("Could not convert {:?}: {}", path, e);
            return None;
        }
        tracing::debug!("Converted {:?} -> {:?}", path, converted);
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!("Could not remove {:?} after conversion: {}", path, e);
        }
        Some(converted)
    }
}
