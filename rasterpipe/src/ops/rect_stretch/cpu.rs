use super::PixelMapping;
use crate::common::Result;
use crate::image::Gray8Image;

/// Fixed-point scale of interpolation weights.
const WEIGHT_BITS: u32 = 8;
const WEIGHT_ONE: u32 = 1 << WEIGHT_BITS;

/// Source sample feeding one output column (or row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tap {
    /// Blend source `index` and `index + 1`; `frac` in `[0, 256)` weights the latter.
    Blend { index: usize, frac: u32 },
    /// Copy the last source sample.
    Edge,
}

/// Computes one tap per destination sample along an axis of `src_len` samples.
pub(super) fn taps(src_len: u32, dst_len: u32, mapping: PixelMapping) -> Vec<Tap> {
    debug_assert!(src_len > 0 && dst_len >= src_len);

    (0..dst_len)
        .map(|j| {
            let (num, den) = match mapping {
                PixelMapping::Proportional => (j as u64 * src_len as u64, dst_len as u64),
                PixelMapping::AlignCorners if dst_len == 1 => (0, 1),
                PixelMapping::AlignCorners => {
                    (j as u64 * (src_len as u64 - 1), dst_len as u64 - 1)
                }
            };

            let index = num / den;
            if index + 1 < src_len as u64 {
                let frac = ((num % den) << WEIGHT_BITS) / den;
                Tap::Blend {
                    index: index as usize,
                    frac: frac as u32,
                }
            } else {
                Tap::Edge
            }
        })
        .collect()
}

/// `(a * (256 - frac) + b * frac) >> 8`, truncating.
#[inline]
pub(super) fn blend(a: u8, b: u8, frac: u32) -> u8 {
    ((a as u32 * (WEIGHT_ONE - frac) + b as u32 * frac) >> WEIGHT_BITS) as u8
}

/// Stretches `input` to `width` columns, keeping its height.
pub(super) fn stretch_horizontal(
    input: &Gray8Image,
    width: u32,
    mapping: PixelMapping,
) -> Result<Gray8Image> {
    let taps = taps(input.width(), width, mapping);
    let last = input.width() as usize - 1;

    let mut data = Vec::with_capacity(width as usize * input.height() as usize);
    for row in 0..input.height() {
        let src = input.row(row);
        data.extend(taps.iter().map(|tap| match *tap {
            Tap::Blend { index, frac } => blend(src[index], src[index + 1], frac),
            Tap::Edge => src[last],
        }));
    }

    Gray8Image::from_vec(width, input.height(), data)
}

/// Stretches `input` to `height` rows, keeping its width.
pub(super) fn stretch_vertical(
    input: &Gray8Image,
    height: u32,
    mapping: PixelMapping,
) -> Result<Gray8Image> {
    let taps = taps(input.height(), height, mapping);
    let last = input.height() - 1;

    let mut data = Vec::with_capacity(input.width() as usize * height as usize);
    for tap in taps {
        match tap {
            Tap::Blend { index, frac } => {
                let top = input.row(index as u32);
                let bottom = input.row(index as u32 + 1);
                data.extend(
                    top.iter()
                        .zip(bottom)
                        .map(|(&a, &b)| blend(a, b, frac)),
                );
            }
            Tap::Edge => data.extend_from_slice(input.row(last)),
        }
    }

    Gray8Image::from_vec(input.width(), height, data)
}
