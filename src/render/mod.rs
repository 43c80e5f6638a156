//! Chart output.  The core only talks to `ChartRenderer`; `PngRenderer`
//! is the shipped implementation.

pub mod bar;
pub mod chrome;
pub mod layout;
pub mod preview;
pub mod tile;

use std::path::Path;

pub use layout::{StackSegment, TileCell, VolumeStack, character_tiles, volume_stacks};
pub use preview::Preview;

use crate::core::{
    config::ReportConfig,
    error::{AppearanceError, Result},
    ordering::ChartView,
};

/// "Render categorical chart to file."
pub trait ChartRenderer {
    /// Stacked bar of record counts per volume, coloured by appearance rank,
    /// with the count printed on each segment.
    fn render_volume_counts(&self, view: &ChartView, path: &Path) -> Result<()>;

    /// Volume × character tiles coloured by appearance rank.
    fn render_character_tiles(&self, view: &ChartView, path: &Path) -> Result<()>;
}

/// Bitmap charts via `plotters`; the format follows the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PngRenderer {
    dpi: u32,
    volume_counts_size: (u32, u32),
    character_tiles_size: (u32, u32),
}

impl PngRenderer {
    #[must_use]
    pub fn new(cfg: &ReportConfig) -> Self {
        Self {
            dpi: cfg.dpi,
            volume_counts_size: cfg.volume_counts_size(),
            character_tiles_size: cfg.character_tiles_size(),
        }
    }
}

impl ChartRenderer for PngRenderer {
    fn render_volume_counts(&self, view: &ChartView, path: &Path) -> Result<()> {
        bar::draw(view, path, self.volume_counts_size, self.dpi).map_err(chart_error(path))
    }

    fn render_character_tiles(&self, view: &ChartView, path: &Path) -> Result<()> {
        tile::draw(view, path, self.character_tiles_size, self.dpi).map_err(chart_error(path))
    }
}

/// Backend errors are generic over the backend, keep the message only.
fn chart_error(path: &Path) -> impl FnOnce(Box<dyn std::error::Error>) -> AppearanceError + '_ {
    move |e| AppearanceError::Chart {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::data::{AppearanceRecord, AppearanceTable};

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn view(names: &[&str]) -> ChartView {
        let table: AppearanceTable = names
            .iter()
            .flat_map(|n| {
                [
                    AppearanceRecord::new(*n, "Trailers", "Main"),
                    AppearanceRecord::new(*n, "Volume 1", "Cameo"),
                    AppearanceRecord::new(*n, "Volume 2", "Deceased"),
                    AppearanceRecord::new(*n, "Volume 3", "Typo"),
                ]
            })
            .collect();
        ChartView::derive(&table)
    }

    fn renderer(dpi: u32) -> PngRenderer {
        let cfg = ReportConfig::builder("in.csv").dpi(dpi).build().unwrap();
        PngRenderer::new(&cfg)
    }

    #[test]
    fn both_charts_are_written_as_png() {
        let dir = tempfile::tempdir().unwrap();
        let bars = dir.path().join("bars.png");
        let tiles = dir.path().join("tiles.png");
        let view = view(&["Ruby Rose", "Weiss Schnee", "Blake Belladonna"]);

        let r = renderer(20);
        r.render_volume_counts(&view, &bars).unwrap();
        r.render_character_tiles(&view, &tiles).unwrap();

        for path in [&bars, &tiles] {
            let bytes = fs::read(path).unwrap();
            assert!(bytes.starts_with(PNG_SIGNATURE), "{}", path.display());
        }
    }

    #[test]
    fn single_character_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let tiles = dir.path().join("tiles.png");

        renderer(20)
            .render_character_tiles(&view(&["Ruby Rose"]), &tiles)
            .unwrap();

        assert!(fs::metadata(&tiles).unwrap().len() > 0);
    }

    #[test]
    fn unwritable_target_becomes_a_chart_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("bars.png");

        let err = renderer(20)
            .render_volume_counts(&view(&["Ruby Rose"]), &path)
            .unwrap_err();

        match err {
            AppearanceError::Chart { path: p, .. } => assert!(p.ends_with("bars.png")),
            other => panic!("expected chart error, got {other:?}"),
        }
    }
}
