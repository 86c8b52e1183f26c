//! Typed raster images and the single-input, single-output stages that
//! transform them.
//!
//! A stage validates the variant of the image it receives, computes a fresh
//! output and hands it back. Sequencing stages is left to the caller.
//!
//! ```
//! use rasterpipe::{Gray8Image, PipelineStage, RasterImage, RectStretch};
//!
//! let input = Gray8Image::from_vec(2, 1, vec![10, 20]).unwrap();
//! let mut stage = PipelineStage::new(RectStretch::new(4, 1).unwrap());
//!
//! let output = stage.transform(&RasterImage::from(input)).unwrap();
//! assert_eq!(output.as_gray8().unwrap().data(), &[10, 15, 20, 20]);
//! ```

mod common;
mod image;
mod ops;

pub mod prelude;

pub use prelude::*;
