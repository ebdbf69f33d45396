use std::sync::Arc;

/// Maps a scalar sample to `[r, g, b, a]` channel intensities.
pub type Colormap = Arc<dyn Fn(f64) -> [f64; 4] + Send + Sync>;

pub trait ColormapProvider {
    fn colormap(&self, name: &str) -> Option<Colormap>;
}
