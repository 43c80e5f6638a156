use std::io::{Write, stdout};

use log::{LevelFilter, debug};

use crate::{
    core::{config::ReportConfig, error::AppearanceError},
    render::PngRenderer,
    run_report,
};

use super::parse::Cli;

/// `RUST_LOG` wins; `--debug` only raises the default.
pub fn init_logging(debug: bool) {
    let default = if debug { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

pub fn report(a: Cli) -> Result<(), AppearanceError> {
    let cfg = ReportConfig::builder(a.characters_by_volume_csv)
        .appearances_csv(a.output_character_appearances_csv)
        .volume_counts_plot(a.output_num_characters_by_volume_plot)
        .character_tiles_plot(a.output_characters_appearances)
        .dpi(a.dpi)
        .pre_process_only(a.pre_process_only)
        .preview(a.preview)
        .build()?;
    debug!("{cfg:?}");

    let renderer = PngRenderer::new(&cfg);
    let mut out = stdout().lock();
    run_report(&cfg, &renderer, &mut out)?;
    out.flush()?;
    Ok(())
}
