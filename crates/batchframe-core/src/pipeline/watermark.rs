//! Pre-rendered watermark overlay layers, one per output orientation.
//!
//! Both layers are built once, before the worker pool starts, and shared
//! read-only by every worker for the rest of the run.

use image::{Rgba, RgbaImage};

use super::font;
use super::orientation::Orientation;

/// The two transparent overlay canvases, sized to the output dimensions of
/// their orientation.
pub struct WatermarkLayers {
    pub horizontal: RgbaImage,
    pub vertical: RgbaImage,
}

impl WatermarkLayers {
    /// Render both layers for the given text and nominal output size.
    ///
    /// Alpha validity ([0, 100)) is guaranteed by config validation.
    pub fn prepare(text: &str, alpha: u8, width: u32, height: u32) -> Self {
        let opacity = text_opacity(alpha);
        tracing::debug!(
            "Rendering watermark layers ({}x{} / {}x{}), text opacity {}",
            width,
            height,
            height,
            width,
            opacity
        );
        Self {
            horizontal: render_layer(text, opacity, width, height),
            vertical: render_layer(text, opacity, height, width),
        }
    }

    /// The layer matching one output orientation.
    pub fn for_orientation(&self, orientation: Orientation) -> &RgbaImage {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }
}

/// Text opacity on an inverse scale: `round(255 * (100 - alpha) / 100)`.
/// Alpha 0 gives near-opaque text, alpha 99 near-transparent.
fn text_opacity(alpha: u8) -> u8 {
    (255.0 * f32::from(100 - alpha) / 100.0).round() as u8
}

/// Draw the text onto a fully transparent canvas of the given size.
///
/// Placement is a fixed-width heuristic, not text-metric centering: top of
/// the text row at half the canvas height, left edge at half the canvas
/// width minus `(5 * char_count) / 2` with integer division. Downstream
/// consumers depend on the exact pixel placement, so the heuristic stays.
fn render_layer(text: &str, opacity: u8, width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    let char_count = text.chars().count() as i64;
    let x = i64::from(width) / 2 - (5 * char_count) / 2;
    let y = i64::from(height) / 2;
    draw_text(&mut canvas, text, x, y, Rgba([255, 255, 255, opacity]));
    canvas
}

/// Rasterize `text` with the built-in bitmap font, clipping at the canvas
/// edges.
fn draw_text(canvas: &mut RgbaImage, text: &str, origin_x: i64, origin_y: i64, color: Rgba<u8>) {
    for (index, c) in text.chars().enumerate() {
        let cell_x = origin_x + index as i64 * i64::from(font::GLYPH_WIDTH);
        let rows = font::glyph(c);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..font::GLYPH_WIDTH {
                if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let x = cell_x + i64::from(col);
                let y = origin_y + row as i64;
                if x >= 0
                    && y >= 0
                    && (x as u32) < canvas.width()
                    && (y as u32) < canvas.height()
                {
                    canvas.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}
