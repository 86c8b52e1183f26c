pub(crate) mod error;

pub use error::{Axis, Error, Result};
