//! Run-time configuration object + fluent builder.

use std::path::PathBuf;

use crate::core::{
    constants::{
        CHARACTER_TILES_INCHES, DEFAULT_APPEARANCES_CSV, DEFAULT_CHARACTER_TILES_PLOT, DEFAULT_DPI,
        DEFAULT_VOLUME_COUNTS_PLOT, VOLUME_COUNTS_INCHES,
    },
    error::ConfigError,
};

/// Above this the tall tile chart no longer fits a sane bitmap.
pub const MAX_DPI: u32 = 600;

/// Immutable parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub appearances_csv: PathBuf,
    pub volume_counts_plot: PathBuf,
    pub character_tiles_plot: PathBuf,
    pub dpi: u32,
    /// Stop once the long table is written.
    pub pre_process_only: bool,
    /// Print a terminal rendition of the bar chart.
    pub preview: bool,
}

impl ReportConfig {
    #[inline]
    pub fn builder(input: impl Into<PathBuf>) -> ReportConfigBuilder {
        ReportConfigBuilder::new(input.into())
    }

    /// Pixel size of the bar chart.
    #[must_use]
    pub fn volume_counts_size(&self) -> (u32, u32) {
        self.pixels(VOLUME_COUNTS_INCHES)
    }

    /// Pixel size of the tile chart.
    #[must_use]
    pub fn character_tiles_size(&self) -> (u32, u32) {
        self.pixels(CHARACTER_TILES_INCHES)
    }

    fn pixels(&self, (w, h): (u32, u32)) -> (u32, u32) {
        (w * self.dpi, h * self.dpi)
    }
}

/// Fluent builder; unset outputs fall back to the fixed default file names.
#[derive(Debug)]
pub struct ReportConfigBuilder {
    input: PathBuf,
    appearances_csv: Option<PathBuf>,
    volume_counts_plot: Option<PathBuf>,
    character_tiles_plot: Option<PathBuf>,
    dpi: Option<u32>,
    pre_process_only: bool,
    preview: bool,
}

impl ReportConfigBuilder {
    pub(crate) fn new(input: PathBuf) -> Self {
        Self {
            input,
            appearances_csv: None,
            volume_counts_plot: None,
            character_tiles_plot: None,
            dpi: None,
            pre_process_only: false,
            preview: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn appearances_csv(mut self, p: impl Into<PathBuf>) -> Self {
        self.appearances_csv = Some(p.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn volume_counts_plot(mut self, p: impl Into<PathBuf>) -> Self {
        self.volume_counts_plot = Some(p.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn character_tiles_plot(mut self, p: impl Into<PathBuf>) -> Self {
        self.character_tiles_plot = Some(p.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn dpi(mut self, v: u32) -> Self {
        self.dpi = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn pre_process_only(mut self, yes: bool) -> Self {
        self.pre_process_only = yes;
        self
    }
    #[inline]
    #[must_use]
    pub fn preview(mut self, yes: bool) -> Self {
        self.preview = yes;
        self
    }

    pub fn build(self) -> Result<ReportConfig, ConfigError> {
        let dpi = self.dpi.unwrap_or(DEFAULT_DPI);
        if dpi == 0 || dpi > MAX_DPI {
            return Err(ConfigError::InvalidDpi {
                got: dpi,
                max: MAX_DPI,
            });
        }

        let input = non_empty(self.input, "input")?;
        let appearances_csv = non_empty(
            self.appearances_csv
                .unwrap_or_else(|| DEFAULT_APPEARANCES_CSV.into()),
            "output_character_appearances_csv",
        )?;
        let volume_counts_plot = non_empty(
            self.volume_counts_plot
                .unwrap_or_else(|| DEFAULT_VOLUME_COUNTS_PLOT.into()),
            "output_num_characters_by_volume_plot",
        )?;
        let character_tiles_plot = non_empty(
            self.character_tiles_plot
                .unwrap_or_else(|| DEFAULT_CHARACTER_TILES_PLOT.into()),
            "output_characters_appearances",
        )?;

        Ok(ReportConfig {
            input,
            appearances_csv,
            volume_counts_plot,
            character_tiles_plot,
            dpi,
            pre_process_only: self.pre_process_only,
            preview: self.preview,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ReportConfigBuilder> for Result<ReportConfig, ConfigError> {
    fn from(b: ReportConfigBuilder) -> Self {
        b.build()
    }
}

fn non_empty(p: PathBuf, field: &'static str) -> Result<PathBuf, ConfigError> {
    if p.as_os_str().is_empty() {
        Err(ConfigError::EmptyPath(field))
    } else {
        Ok(p)
    }
}
