use ndarray::{Array2, Array3, array};
use raster_channels_rs::channel_ops::{
    Bounds, ChannelError, ChannelPipeline, ChannelSplitter, ColormapConverter,
    ColormapRegistry, Layer, OperationRegistry, Raster, RasterMode, StyleOpts, StyleRegistry,
};
use raster_channels_rs::logger;

fn gradient(rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(row, col)| {
        (row * cols + col) as f64 / (rows * cols - 1) as f64
    })
}

#[test]
fn test_default_pipeline_registers_composites() {
    let pipeline = ChannelPipeline::new();
    assert_eq!(
        pipeline.operations().names(),
        vec!["HCS", "RGBA", "alpha_overlay"]
    );
    assert!(pipeline.styles().get("R_Channel").is_some());
    assert!(pipeline.colormaps().contains("gray"));
}

#[test]
fn test_hcs_through_pipeline() {
    let pipeline = ChannelPipeline::new();
    let hue = Raster::from_scalar(gradient(4, 4)).with_label("Orientation");
    let confidence = Raster::from_scalar(Array2::ones((4, 4)));

    let outputs = pipeline
        .run("HCS", &[hue.into(), confidence.into()])
        .unwrap();

    assert_eq!(outputs.len(), 1);
    let rgb = &outputs[0];
    assert_eq!(rgb.shape(), (4, 4));
    assert_eq!(rgb.depth(), 3);
    assert_eq!(rgb.label(), "HCS");

    // Full confidence and strength keep every pixel fully saturated and bright.
    let data = rgb.channel_data().unwrap();
    for row in 0..4 {
        for col in 0..4 {
            let max = (0..3).map(|c| data[(row, col, c)]).fold(0.0, f64::max);
            assert!((max - 1.0).abs() < 1e-12);
        }
    }
}

#[test]
fn test_split_channels_render_with_default_gray_style() {
    let pipeline = ChannelPipeline::new();
    let data = Array3::from_shape_fn((2, 2, 3), |(row, col, channel)| {
        (row + col + channel) as f64 / 4.0
    });
    let rgb = Raster::from_channels(data).unwrap();

    let channels = ChannelSplitter::default().split(&rgb).unwrap();
    assert_eq!(channels[1].label(), "G Channel");

    let rendered = ColormapConverter::default()
        .convert(&channels[1], &pipeline.context())
        .unwrap();
    assert_eq!(rendered.mode(), RasterMode::Rgba);

    let rendered_data = rendered.channel_data().unwrap();
    let green = channels[1].scalar_data().unwrap();
    for ((row, col), &value) in green.indexed_iter() {
        assert_eq!(rendered_data[(row, col, 0)], value);
        assert_eq!(rendered_data[(row, col, 1)], value);
        assert_eq!(rendered_data[(row, col, 2)], value);
        assert_eq!(rendered_data[(row, col, 3)], 1.0);
    }
}

#[test]
fn test_alpha_overlay_with_registered_style() {
    let mut pipeline = ChannelPipeline::new();
    pipeline
        .styles_mut()
        .set("Activity", StyleOpts::new().with_text("cmap", "gray"));

    let source = Raster::from_scalar(array![[0.0, 0.5], [0.75, 1.0]])
        .with_label("Activity")
        .with_bounds(Bounds::new(0.0, 0.0, 2.0, 2.0));
    let alpha = Raster::from_scalar(array![[1.0, 0.5], [0.0, 0.25]]);

    let outputs = pipeline
        .run("alpha_overlay", &[source.into(), alpha.into()])
        .unwrap();
    let overlay = &outputs[0];

    assert_eq!(overlay.label(), "AlphaOverlay");
    assert_eq!(overlay.bounds(), Bounds::new(0.0, 0.0, 2.0, 2.0));
    let data = overlay.channel_data().unwrap();
    assert_eq!(data[(0, 1, 0)], 0.5);
    assert_eq!(data[(0, 1, 3)], 0.5);
    assert_eq!(data[(1, 0, 0)], 0.75);
    assert_eq!(data[(1, 0, 3)], 0.0);
}

#[test]
fn test_alpha_overlay_without_style_fails() {
    let pipeline = ChannelPipeline::new();
    let source = Raster::from_scalar(array![[0.5]]).with_label("Unstyled");
    let alpha = Raster::from_scalar(array![[0.5]]);

    let result = pipeline.run("alpha_overlay", &[source.into(), alpha.into()]);
    assert!(matches!(result.unwrap_err(), ChannelError::MissingColormap));
}

#[test]
fn test_custom_pipeline_without_operations() {
    let pipeline = ChannelPipeline::with_custom(
        StyleRegistry::new(),
        ColormapRegistry::new(),
        OperationRegistry::new(),
    );
    let layer: Layer = Raster::from_scalar(array![[0.5]]).into();

    let result = pipeline.run("RGBA", &[layer.clone(), layer.clone(), layer]);
    assert!(matches!(
        result.unwrap_err(),
        ChannelError::UnknownOperation(name) if name == "RGBA"
    ));
}

#[test]
fn test_logger_initializes_once() {
    let _ = logger::try_init();
    assert!(logger::try_init().is_err());
}
