use std::fmt;

use strum_macros::{Display, EnumIter};

use super::{Complex32Image, Gray8Image, Gray32Image};

/// Tag naming the pixel type of a [`RasterImage`].
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Gray8,
    Gray32,
    Complex32,
}

/// An image of any supported pixel type, as exchanged between stages.
#[derive(Clone, Debug, PartialEq)]
pub enum RasterImage {
    Gray8(Gray8Image),
    Gray32(Gray32Image),
    Complex32(Complex32Image),
}

impl RasterImage {
    pub fn kind(&self) -> ImageKind {
        match self {
            RasterImage::Gray8(_) => ImageKind::Gray8,
            RasterImage::Gray32(_) => ImageKind::Gray32,
            RasterImage::Complex32(_) => ImageKind::Complex32,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            RasterImage::Gray8(image) => image.width(),
            RasterImage::Gray32(image) => image.width(),
            RasterImage::Complex32(image) => image.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            RasterImage::Gray8(image) => image.height(),
            RasterImage::Gray32(image) => image.height(),
            RasterImage::Complex32(image) => image.height(),
        }
    }

    pub fn as_gray8(&self) -> Option<&Gray8Image> {
        match self {
            RasterImage::Gray8(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_gray32(&self) -> Option<&Gray32Image> {
        match self {
            RasterImage::Gray32(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_complex32(&self) -> Option<&Complex32Image> {
        match self {
            RasterImage::Complex32(image) => Some(image),
            _ => None,
        }
    }
}

impl From<Gray8Image> for RasterImage {
    fn from(image: Gray8Image) -> Self {
        RasterImage::Gray8(image)
    }
}

impl From<Gray32Image> for RasterImage {
    fn from(image: Gray32Image) -> Self {
        RasterImage::Gray32(image)
    }
}

impl From<Complex32Image> for RasterImage {
    fn from(image: Complex32Image) -> Self {
        RasterImage::Complex32(image)
    }
}

impl fmt::Display for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {}", self.width(), self.height(), self.kind())
    }
}
