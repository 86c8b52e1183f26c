use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// How output sample positions map back onto the source grid.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PixelMapping {
    /// Output index `j` samples source position `j * src / dst`.
    /// Output samples past the last source interval copy the edge value.
    #[default]
    Proportional,
    /// Output index `j` samples source position `j * (src - 1) / (dst - 1)`,
    /// so the first and last samples of both grids coincide.
    AlignCorners,
}

/// Serializable snapshot of a [`super::RectStretch`] configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectStretchConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub mapping: PixelMapping,
}
