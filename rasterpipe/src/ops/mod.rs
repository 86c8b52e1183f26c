mod complex_magnitude;
mod rect_stretch;
mod stage;

pub use complex_magnitude::ComplexMagnitude;
pub use rect_stretch::{PixelMapping, RectStretch, RectStretchConfig};
pub use stage::{PipelineStage, Stage};
