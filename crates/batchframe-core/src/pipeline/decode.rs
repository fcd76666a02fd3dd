//! Content-based image decoding shared by the catalog and the workers.

use image::{DynamicImage, ImageReader};
use std::path::Path;

use crate::error::PipelineError;

/// Decode an image, guessing the format from file content rather than the
/// extension. Source folders routinely contain misnamed files, and the
/// catalog relies on decode failure to identify non-images.
pub fn decode_image(path: &Path) -> Result<DynamicImage, PipelineError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot open file: {e}"),
        })?;
    reader.decode().map_err(|e| PipelineError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
