use anyhow::Context;
use rasterpipe::prelude::*;

fn default_config_path() -> String {
    format!("{}/resources/stretch.yaml", env!("CARGO_MANIFEST_DIR"))
}

fn print_gray8(label: &str, image: &Gray8Image) {
    println!("{label} ({}x{}):", image.width(), image.height());
    for row in 0..image.height() {
        let line: Vec<String> = image.row(row).iter().map(|v| format!("{v:3}")).collect();
        println!("  {}", line.join(" "));
    }
}

fn main() -> anyhow::Result<()> {
    common::log_setup::setup_logging("info,rasterpipe=debug");

    let config_path = std::env::args().nth(1).unwrap_or_else(default_config_path);
    let config: RectStretchConfig = common::file_format::load_file(&config_path)
        .with_context(|| format!("loading stretch config from {config_path}"))?;
    tracing::info!(?config, "loaded stretch config");

    let input = Gray8Image::from_fn(4, 3, |col, row| (col * 60 + row * 20) as u8)?;
    print_gray8("Input", &input);

    let mut stretch = PipelineStage::new(RectStretch::from_config(&config)?);
    let label = stretch.to_string();
    let stretched = stretch.transform(&input.into())?;
    let stretched = stretched
        .as_gray8()
        .context("stretch produced a non-gray image")?;
    print_gray8(&label, stretched);

    let spectrum = Complex32Image::from_fn(3, 2, |col, row| {
        Complex32::new(col as f32 * 3.0, row as f32 * 4.0)
    })?;
    let mut magnitude = PipelineStage::new(ComplexMagnitude::new());
    let magnitudes = magnitude.transform(&spectrum.into())?;
    tracing::info!(
        magnitudes = ?magnitudes.as_gray32().map(Gray32Image::data),
        "computed magnitudes"
    );

    if let Err(err) = RectStretch::new(2, 2)?.apply(&Gray8Image::new(3, 3)?.into()) {
        tracing::info!(%err, "downscale rejected as expected");
    }

    Ok(())
}
