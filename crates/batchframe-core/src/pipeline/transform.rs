//! Per-image transform: resize, optional watermark composite, JPEG write.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::error::PipelineError;

use super::decode::decode_image;
use super::orientation::Orientation;
use super::sequence::SequenceGenerator;
use super::watermark::WatermarkLayers;

/// Everything a worker needs, shared across the pool.
///
/// The sequence counter and the processed counter are the only mutable state
/// and both are atomic; the watermark layers and destination are read-only
/// once the pool starts.
pub struct TransformContext {
    pub sequence: SequenceGenerator,
    pub layers: Option<WatermarkLayers>,
    pub destination: PathBuf,
    pub output_width: u32,
    pub output_height: u32,
    processed: AtomicU64,
}

impl TransformContext {
    pub fn new(
        sequence: SequenceGenerator,
        layers: Option<WatermarkLayers>,
        destination: PathBuf,
        output_width: u32,
        output_height: u32,
    ) -> Self {
        Self {
            sequence,
            layers,
            destination,
            output_width,
            output_height,
            processed: AtomicU64::new(0),
        }
    }

    /// Number of output images successfully written so far.
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }
}

/// Transform one catalog entry into its sequenced output file.
///
/// The filename is claimed before decoding, so a failing file still consumes
/// its sequence value — a gap in the outputs, never a renumbering.
pub fn transform_one(path: &Path, ctx: &TransformContext) -> Result<PathBuf, PipelineError> {
    let file_name = ctx.sequence.next_filename();

    let decoded = decode_image(path)?;
    let (source_width, source_height) = decoded.dimensions();
    let orientation = Orientation::of(source_width, source_height);
    let (target_width, target_height) = orientation.target_size(ctx.output_width, ctx.output_height);

    let resized = decoded.resize_exact(target_width, target_height, FilterType::Lanczos3);

    let output = match &ctx.layers {
        Some(layers) => {
            let mut base = resized.to_rgba8();
            imageops::overlay(&mut base, layers.for_orientation(orientation), 0, 0);
            DynamicImage::ImageRgba8(base).to_rgb8()
        }
        None => resized.to_rgb8(),
    };

    let out_path = ctx.destination.join(file_name);
    output
        .save_with_format(&out_path, ImageFormat::Jpeg)
        .map_err(|e| PipelineError::Encode {
            path: out_path.clone(),
            message: e.to_string(),
        })?;

    ctx.processed.fetch_add(1, Ordering::Relaxed);
    Ok(out_path)
}
