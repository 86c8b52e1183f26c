use crate::prelude::*;

fn complex(width: u32, height: u32, pixels: &[(f32, f32)]) -> RasterImage {
    let data = pixels.iter().copied().map(Complex32::from).collect();
    Complex32Image::from_vec(width, height, data)
        .unwrap()
        .into()
}

#[test]
fn three_four_gives_five() {
    let output = ComplexMagnitude::new()
        .apply(&complex(1, 1, &[(3.0, 4.0)]))
        .unwrap();

    assert_eq!(output.kind(), ImageKind::Gray32);
    assert_eq!(output.as_gray32().unwrap().data(), &[5]);
}

#[test]
fn keeps_dimensions_and_layout() {
    let input = complex(
        3,
        2,
        &[
            (0.0, 0.0),
            (-6.0, 8.0),
            (1.0, 0.0),
            (0.0, -2.0),
            (5.0, 12.0),
            (8.0, -15.0),
        ],
    );

    let output = ComplexMagnitude::new().apply(&input).unwrap();
    let output = output.as_gray32().unwrap();

    assert_eq!((output.width(), output.height()), (3, 2));
    assert_eq!(output.data(), &[0, 10, 1, 2, 13, 17]);
}

#[test]
fn rounds_to_nearest() {
    // |1 + 1i| = 1.414..., |2 + 2i| = 2.828...
    let output = ComplexMagnitude::new()
        .apply(&complex(2, 1, &[(1.0, 1.0), (2.0, 2.0)]))
        .unwrap();

    assert_eq!(output.as_gray32().unwrap().data(), &[1, 3]);
}

#[test]
fn huge_magnitudes_saturate() {
    let output = ComplexMagnitude::new()
        .apply(&complex(1, 1, &[(f32::MAX, f32::MAX)]))
        .unwrap();

    assert_eq!(output.as_gray32().unwrap().data(), &[i32::MAX]);
}

#[test]
fn non_complex_input_is_rejected() {
    let stage = ComplexMagnitude::new();

    for input in [
        RasterImage::from(Gray8Image::new(2, 2).unwrap()),
        RasterImage::from(Gray32Image::new(2, 2).unwrap()),
    ] {
        let actual = input.kind();
        assert_eq!(
            stage.apply(&input).unwrap_err(),
            Error::InvalidInputVariant {
                stage: "ComplexMagnitude".to_string(),
                expected: ImageKind::Complex32,
                actual,
            }
        );
    }
}

#[test]
fn pipeline_stage_holds_last_output() {
    let mut stage = PipelineStage::new(ComplexMagnitude::new());

    stage.transform(&complex(1, 1, &[(3.0, 4.0)])).unwrap();
    assert!(
        stage
            .transform(&Gray8Image::new(1, 1).unwrap().into())
            .is_err()
    );

    let output = stage.output().and_then(RasterImage::as_gray32).unwrap();
    assert_eq!(output.data(), &[5]);
    assert_eq!(stage.to_string(), "ComplexMagnitude");
}
