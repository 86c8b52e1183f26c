#[cfg(test)]
mod tests;

use std::fmt;

use crate::common::Result;
use crate::image::{Gray32Image, ImageKind, RasterImage};
use crate::ops::Stage;

/// Converts a complex image to a 32-bit gray image of per-pixel magnitudes.
///
/// Each output pixel is [`crate::Complex32::magnitude`] rounded to the nearest
/// integer. Magnitudes beyond `i32::MAX` saturate; NaN becomes 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexMagnitude;

impl ComplexMagnitude {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for ComplexMagnitude {
    fn name(&self) -> &str {
        "ComplexMagnitude"
    }

    fn input_kind(&self) -> ImageKind {
        ImageKind::Complex32
    }

    fn apply(&self, input: &RasterImage) -> Result<RasterImage> {
        let image = input
            .as_complex32()
            .ok_or_else(|| self.input_mismatch(input))?;

        let data = image
            .data()
            .iter()
            .map(|c| c.magnitude().round() as i32)
            .collect();
        let result = Gray32Image::from_vec(image.width(), image.height(), data)?;

        tracing::debug!(input = %input, "computed magnitude image");

        Ok(result.into())
    }
}

impl fmt::Display for ComplexMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
