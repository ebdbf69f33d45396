use ndarray::Array2;
use raster_channels_rs::channel_ops::{
    Bounds, ChannelPipeline, HcsCompositor, HcsConfig, Layer, Raster, RasterData,
};
use raster_channels_rs::logger;

use tracing::{error, info};

const SIZE: usize = 64;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting raster channel demo...");

    let pipeline = ChannelPipeline::new();
    info!("Registered operations: {:?}", pipeline.operations().names());

    let bounds = Bounds::new(-1.0, -1.0, 1.0, 1.0);
    let hue = Raster::from_scalar(Array2::from_shape_fn((SIZE, SIZE), |(_, col)| {
        col as f64 / (SIZE - 1) as f64
    }))
    .with_bounds(bounds)
    .with_label("Orientation")
    .with_value("Orientation");
    let confidence = Raster::from_scalar(Array2::from_shape_fn((SIZE, SIZE), |(row, _)| {
        row as f64 / (SIZE - 1) as f64
    }))
    .with_bounds(bounds)
    .with_label("Selectivity");

    let layers: Vec<Layer> = vec![hue.clone().into(), confidence.clone().into()];
    match pipeline.run("HCS", &layers) {
        Ok(outputs) => {
            for output in &outputs {
                log_summary(output);
            }
        }
        Err(e) => error!("HCS failed: {}", e),
    }

    let boosted = HcsCompositor::new(
        HcsConfig::builder()
            .c_multiplier(2.0)
            .flip_sc(true)
            .label("Boosted HCS")
            .build(),
    )?;
    let output = boosted.composite(&layers)?;
    log_summary(&output);

    let composites = pipeline.run("RGBA", &[hue.clone().into(), confidence.into(), hue.into()])?;
    for composite in &composites {
        log_summary(composite);
    }

    Ok(())
}

fn log_summary(raster: &Raster) {
    let (min, max, sum, count) = match raster.data() {
        RasterData::Scalar(array) => summarize(array.iter()),
        RasterData::Channels(array) => summarize(array.iter()),
    };
    info!(
        label = raster.label(),
        mode = %raster.mode(),
        shape = ?raster.shape(),
        depth = raster.depth(),
        min,
        max,
        mean = if count > 0 { sum / count as f64 } else { 0.0 },
        "Raster summary"
    );
}

fn summarize<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64, f64, usize) {
    values.fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0, 0),
        |(min, max, sum, count), &x| (min.min(x), max.max(x), sum + x, count + 1),
    )
}
