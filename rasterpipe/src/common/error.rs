use strum_macros::Display;
use thiserror::Error;

use crate::image::ImageKind;

/// Raster axis a dimension belongs to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

/// Precondition violations raised by image construction and stages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{axis} must be positive, not {value}")]
    InvalidDimension { axis: Axis, value: u32 },

    #[error("{stage} expects a {expected} image, but got {actual}")]
    InvalidInputVariant {
        stage: String,
        expected: ImageKind,
        actual: ImageKind,
    },

    #[error("stretching only enlarges images, but input size is {input:?} and target size is {target:?}")]
    UnsupportedDownscale { input: (u32, u32), target: (u32, u32) },

    #[error("pixel data length {actual} does not match expected size {expected}")]
    DataSizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_message_names_axis_and_value() {
        let err = Error::InvalidDimension {
            axis: Axis::Height,
            value: 0,
        };
        assert_eq!(err.to_string(), "height must be positive, not 0");
    }

    #[test]
    fn invalid_input_variant_message() {
        let err = Error::InvalidInputVariant {
            stage: "RectStretch".to_string(),
            expected: ImageKind::Gray8,
            actual: ImageKind::Complex32,
        };
        assert_eq!(
            err.to_string(),
            "RectStretch expects a Gray8 image, but got Complex32"
        );
    }

    #[test]
    fn downscale_message_contains_both_sizes() {
        let err = Error::UnsupportedDownscale {
            input: (8, 3),
            target: (4, 6),
        };
        let msg = err.to_string();
        assert!(msg.contains("(8, 3)"));
        assert!(msg.contains("(4, 6)"));
    }

    #[test]
    fn errors_are_distinguishable_by_variant() {
        let err = Error::DataSizeMismatch {
            expected: 6,
            actual: 5,
        };
        assert!(matches!(err, Error::DataSizeMismatch { .. }));
        assert_ne!(
            err,
            Error::InvalidDimension {
                axis: Axis::Width,
                value: 0
            }
        );
    }
}
