// Error handling
pub use crate::common::{Axis, Error, Result};

// Image types
pub use crate::image::{
    Complex32, Complex32Image, Gray8Image, Gray32Image, ImageKind, Raster, RasterImage,
};

// Stages
pub use crate::ops::{
    ComplexMagnitude, PipelineStage, PixelMapping, RectStretch, RectStretchConfig, Stage,
};
