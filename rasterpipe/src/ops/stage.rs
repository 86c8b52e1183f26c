use std::fmt;

use crate::common::{Error, Result};
use crate::image::{ImageKind, RasterImage};

/// A single-input, single-output image transformation.
///
/// `apply` validates the input, computes a fresh output and returns it. It
/// never mutates the input and either completes fully or fails before any
/// output exists.
pub trait Stage {
    /// Short name used in errors and logs.
    fn name(&self) -> &str;

    /// The image variant this stage accepts.
    fn input_kind(&self) -> ImageKind;

    fn apply(&self, input: &RasterImage) -> Result<RasterImage>;

    /// Builds the error reported when `input` is not of [`Stage::input_kind`].
    fn input_mismatch(&self, input: &RasterImage) -> Error {
        tracing::warn!(
            stage = self.name(),
            expected = %self.input_kind(),
            actual = %input.kind(),
            "rejected input image"
        );

        Error::InvalidInputVariant {
            stage: self.name().to_string(),
            expected: self.input_kind(),
            actual: input.kind(),
        }
    }
}

/// A stage together with the output of its last successful transform.
#[derive(Debug)]
pub struct PipelineStage<S> {
    stage: S,
    output: Option<RasterImage>,
}

impl<S: Stage> PipelineStage<S> {
    pub fn new(stage: S) -> Self {
        Self {
            stage,
            output: None,
        }
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    /// Configuration changes affect the next transform only.
    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    /// Runs the stage and stores its output.
    ///
    /// On failure the previously stored output is kept.
    pub fn transform(&mut self, input: &RasterImage) -> Result<&RasterImage> {
        let output = self.stage.apply(input)?;

        Ok(&*self.output.insert(output))
    }

    pub fn output(&self) -> Option<&RasterImage> {
        self.output.as_ref()
    }

    pub fn take_output(&mut self) -> Option<RasterImage> {
        self.output.take()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_none()
    }

    pub fn into_inner(self) -> S {
        self.stage
    }
}

impl<S: fmt::Display> fmt::Display for PipelineStage<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stage.fmt(f)
    }
}
