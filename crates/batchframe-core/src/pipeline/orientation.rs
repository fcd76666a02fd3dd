//! Output orientation selection.

/// Orientation of a source image, deciding which resize target it gets.
///
/// Ties count as vertical: a square source receives the portrait target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Classify a source image by its pixel dimensions.
    pub fn of(width: u32, height: u32) -> Self {
        if width <= height {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Resize target for this orientation, given the configured (landscape)
    /// output size. Vertical swaps the axes.
    pub fn target_size(self, out_width: u32, out_height: u32) -> (u32, u32) {
        match self {
            Self::Horizontal => (out_width, out_height),
            Self::Vertical => (out_height, out_width),
        }
    }
}
