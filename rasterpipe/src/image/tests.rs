use strum::IntoEnumIterator;

use crate::prelude::*;

// =============================================================================
// Raster construction
// =============================================================================

#[test]
fn new_creates_zeroed_raster() {
    let img = Gray8Image::new(3, 2).unwrap();

    assert_eq!(img.width(), 3);
    assert_eq!(img.height(), 2);
    assert_eq!(img.len(), 6);
    assert!(img.data().iter().all(|&v| v == 0));
}

#[test]
fn zero_dimensions_are_rejected() {
    assert_eq!(
        Gray8Image::new(0, 2).unwrap_err(),
        Error::InvalidDimension {
            axis: Axis::Width,
            value: 0
        }
    );
    assert_eq!(
        Gray32Image::new(2, 0).unwrap_err(),
        Error::InvalidDimension {
            axis: Axis::Height,
            value: 0
        }
    );
    assert!(Complex32Image::from_vec(0, 0, vec![]).is_err());
}

#[test]
fn from_vec_checks_data_length() {
    let result = Gray8Image::from_vec(2, 2, vec![1, 2, 3]);
    assert_eq!(
        result.unwrap_err(),
        Error::DataSizeMismatch {
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn storage_is_row_major() {
    let img = Gray32Image::from_fn(3, 2, |col, row| (row * 10 + col) as i32).unwrap();

    assert_eq!(img.data(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!(img.row(1), &[10, 11, 12]);
    assert_eq!(img.pixel(2, 1), 12);
    assert_eq!(img.get(3, 0), None);
    assert_eq!(img.get(0, 2), None);
}

#[test]
fn set_writes_single_pixel() {
    let mut img = Gray8Image::new(2, 2).unwrap();
    img.set(1, 0, 200);

    assert_eq!(img.data(), &[0, 200, 0, 0]);
}

#[test]
#[should_panic(expected = "outside 2x2 raster")]
fn pixel_out_of_range_panics() {
    let img = Gray8Image::new(2, 2).unwrap();
    img.pixel(2, 0);
}

// =============================================================================
// Gray8 signed mapping
// =============================================================================

#[test]
fn signed_mapping_offsets_by_128() {
    let img = Gray8Image::from_signed(3, 1, &[i8::MIN, 0, i8::MAX]).unwrap();
    assert_eq!(img.data(), &[0, 128, 255]);
}

#[test]
fn signed_mapping_roundtrips_every_value() {
    let samples: Vec<i8> = (i8::MIN..=i8::MAX).collect();
    let img = Gray8Image::from_signed(16, 16, &samples).unwrap();

    assert_eq!(img.to_signed(), samples);
}

// =============================================================================
// Complex pixels
// =============================================================================

#[test]
fn complex_magnitude_is_exact() {
    assert_eq!(Complex32::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Complex32::new(-3.0, -4.0).magnitude(), 5.0);
    assert_eq!(Complex32::ZERO.magnitude(), 0.0);
    assert_eq!(Complex32::new(3.0, 4.0).magnitude_squared(), 25.0);
}

#[test]
fn complex_display() {
    assert_eq!(Complex32::new(1.5, -2.0).to_string(), "1.5-2i");
    assert_eq!(Complex32::from((0.0, 1.0)).to_string(), "0+1i");
}

// =============================================================================
// Tagged variants
// =============================================================================

#[test]
fn raster_image_reports_kind_and_size() {
    let images: Vec<RasterImage> = vec![
        Gray8Image::new(4, 3).unwrap().into(),
        Gray32Image::new(4, 3).unwrap().into(),
        Complex32Image::new(4, 3).unwrap().into(),
    ];

    let kinds: Vec<ImageKind> = images.iter().map(RasterImage::kind).collect();
    assert_eq!(kinds, ImageKind::iter().collect::<Vec<_>>());

    for image in &images {
        assert_eq!((image.width(), image.height()), (4, 3));
    }
}

#[test]
fn downcasts_only_match_own_variant() {
    let image = RasterImage::from(Gray32Image::new(1, 1).unwrap());

    assert!(image.as_gray32().is_some());
    assert!(image.as_gray8().is_none());
    assert!(image.as_complex32().is_none());
}

#[test]
fn raster_image_display() {
    let image = RasterImage::from(Complex32Image::new(5, 2).unwrap());
    assert_eq!(image.to_string(), "5x2 Complex32");
}
