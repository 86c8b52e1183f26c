mod complex;
mod raster_image;

#[cfg(test)]
mod tests;

use crate::common::{Axis, Error, Result};

pub use complex::Complex32;
pub use raster_image::{ImageKind, RasterImage};

/// 8-bit grayscale raster. Stored values are the pixel values in `[0, 255]`.
pub type Gray8Image = Raster<u8>;

/// 32-bit integer grayscale raster.
pub type Gray32Image = Raster<i32>;

/// Single-precision complex raster.
pub type Complex32Image = Raster<Complex32>;

/// Fixed-size pixel grid stored row-major: `data[row * width + col]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Copy + Default> Raster<T> {
    /// Creates a raster filled with `T::default()`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = checked_len(width, height)?;

        Ok(Self {
            width,
            height,
            data: vec![T::default(); len],
        })
    }

    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let len = checked_len(width, height)?;

        if data.len() != len {
            return Err(Error::DataSizeMismatch {
                expected: len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a raster whose pixel at `(col, row)` is `f(col, row)`.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Result<Self> {
        let len = checked_len(width, height)?;

        let mut data = Vec::with_capacity(len);
        for row in 0..height {
            for col in 0..width {
                data.push(f(col, row));
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels, `width * height`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    pub fn get(&self, col: u32, row: u32) -> Option<T> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.data[self.index(col, row)])
    }

    /// Returns the pixel at `(col, row)`.
    ///
    /// # Panics
    /// Panics if the position lies outside the raster.
    pub fn pixel(&self, col: u32, row: u32) -> T {
        self.get(col, row).unwrap_or_else(|| {
            panic!(
                "pixel ({}, {}) outside {}x{} raster",
                col, row, self.width, self.height
            )
        })
    }

    /// # Panics
    /// Panics if the position lies outside the raster.
    pub fn set(&mut self, col: u32, row: u32, value: T) {
        assert!(
            col < self.width && row < self.height,
            "pixel ({}, {}) outside {}x{} raster",
            col,
            row,
            self.width,
            self.height
        );
        let index = self.index(col, row);
        self.data[index] = value;
    }

    pub fn row(&self, row: u32) -> &[T] {
        let start = row as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    fn index(&self, col: u32, row: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }
}

impl Raster<u8> {
    /// Builds a gray image from signed samples where `i8::MIN` is black.
    ///
    /// The mapping `v = s + 128` is a bijection, so [`Raster::to_signed`]
    /// recovers the input exactly.
    pub fn from_signed(width: u32, height: u32, samples: &[i8]) -> Result<Self> {
        let data = samples.iter().map(|&s| (s as u8) ^ 0x80).collect();
        Self::from_vec(width, height, data)
    }

    pub fn to_signed(&self) -> Vec<i8> {
        self.data.iter().map(|&v| (v ^ 0x80) as i8).collect()
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 {
        return Err(Error::InvalidDimension {
            axis: Axis::Width,
            value: width,
        });
    }
    if height == 0 {
        return Err(Error::InvalidDimension {
            axis: Axis::Height,
            value: height,
        });
    }

    Ok(width as usize * height as usize)
}
