mod config;
mod cpu;


use std::fmt;

use crate::common::{Axis, Error, Result};
use crate::image::{ImageKind, RasterImage};
use crate::ops::Stage;

pub use config::{PixelMapping, RectStretchConfig};

/// Stretches a gray 8-bit image to a larger rectangle with bilinear
/// interpolation.
///
/// The stretch runs as two separable passes, horizontal then vertical, so the
/// interpolation weights are computed once per output column and once per
/// output row. Weights use 1/256 fixed point and the blend truncates.
///
/// Only magnification is supported: an input wider or taller than the target
/// is rejected rather than subsampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectStretch {
    width: u32,
    height: u32,
    mapping: PixelMapping,
}

impl RectStretch {
    /// Creates a stretch to `width` x `height`.
    ///
    /// # Errors
    /// [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            width: positive(Axis::Width, width)?,
            height: positive(Axis::Height, height)?,
            mapping: PixelMapping::default(),
        })
    }

    pub fn from_config(config: &RectStretchConfig) -> Result<Self> {
        Ok(Self::new(config.width, config.height)?.with_mapping(config.mapping))
    }

    pub fn config(&self) -> RectStretchConfig {
        RectStretchConfig {
            width: self.width,
            height: self.height,
            mapping: self.mapping,
        }
    }

    /// Builder method to set the pixel mapping.
    pub fn with_mapping(mut self, mapping: PixelMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mapping(&self) -> PixelMapping {
        self.mapping
    }

    /// Changes the target width. The current width is kept on error.
    pub fn set_width(&mut self, width: u32) -> Result<()> {
        self.width = positive(Axis::Width, width)?;
        Ok(())
    }

    /// Changes the target height. The current height is kept on error.
    pub fn set_height(&mut self, height: u32) -> Result<()> {
        self.height = positive(Axis::Height, height)?;
        Ok(())
    }

    pub fn set_mapping(&mut self, mapping: PixelMapping) {
        self.mapping = mapping;
    }
}

impl Stage for RectStretch {
    fn name(&self) -> &str {
        "RectStretch"
    }

    fn input_kind(&self) -> ImageKind {
        ImageKind::Gray8
    }

    fn apply(&self, input: &RasterImage) -> Result<RasterImage> {
        let image = input
            .as_gray8()
            .ok_or_else(|| self.input_mismatch(input))?;

        if image.width() > self.width || image.height() > self.height {
            tracing::warn!(
                input = %input,
                target_width = self.width,
                target_height = self.height,
                "rejected downscale"
            );
            return Err(Error::UnsupportedDownscale {
                input: (image.width(), image.height()),
                target: (self.width, self.height),
            });
        }

        let horizontal = cpu::stretch_horizontal(image, self.width, self.mapping)?;
        let result = cpu::stretch_vertical(&horizontal, self.height, self.mapping)?;

        tracing::debug!(
            input = %input,
            width = result.width(),
            height = result.height(),
            mapping = %self.mapping,
            "stretched image"
        );

        Ok(result.into())
    }
}

impl fmt::Display for RectStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({},{})", self.name(), self.width, self.height)
    }
}

fn positive(axis: Axis, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(Error::InvalidDimension { axis, value });
    }
    Ok(value)
}
