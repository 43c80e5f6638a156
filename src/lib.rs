//! Public-facing crate root – re-exports + one-shot pipeline.

pub mod cli;
pub mod core;
pub mod render;

use std::{io::Write, time::Instant};

use log::debug;

pub use crate::core::{
    config::{ReportConfig, ReportConfigBuilder},
    data::{
        AppearanceRecord, AppearanceTable, WideRow, pre_process, read_appearances,
        read_wide_rows, reshape, write_appearances,
    },
    error::{AppearanceError, ConfigError, MissingColumnError},
    ordering::{AppearanceRank, ChartView, DisplayOrder},
};

pub use render::{ChartRenderer, PngRenderer, Preview};

/// Pre-process the wide input, then (unless `pre_process_only`) reload the
/// long table, derive the chart view and render both charts.  A
/// confirmation line goes to `out` after each artifact.
pub fn run_report<R, W>(
    cfg: &ReportConfig,
    renderer: &R,
    out: &mut W,
) -> crate::core::error::Result<()>
where
    R: ChartRenderer + ?Sized,
    W: Write,
{
    let t_reshape = Instant::now();
    let table = pre_process(&cfg.input, &cfg.appearances_csv)?;
    writeln!(
        out,
        "Wrote character appearances to: {}",
        cfg.appearances_csv.display()
    )?;
    debug!(
        "pre-process: {} µs   ({} records)",
        t_reshape.elapsed().as_micros(),
        table.len()
    );

    if cfg.pre_process_only {
        return Ok(());
    }

    let table = crate::core::data::read_appearances_from_path(&cfg.appearances_csv)?;
    let view = ChartView::derive(&table);
    debug!(
        "chart view: {} of {} records kept, {} characters, {} kinds",
        view.records().len(),
        table.len(),
        view.names().len(),
        view.categories().len()
    );

    let t_render = Instant::now();
    renderer.render_volume_counts(&view, &cfg.volume_counts_plot)?;
    writeln!(
        out,
        "Wrote num characters by volume plot to: {}",
        cfg.volume_counts_plot.display()
    )?;

    renderer.render_character_tiles(&view, &cfg.character_tiles_plot)?;
    writeln!(
        out,
        "Wrote character appearances plot: {}",
        cfg.character_tiles_plot.display()
    )?;
    debug!("render: {} µs", t_render.elapsed().as_micros());

    if cfg.preview {
        out.write_all(Preview::for_terminal().render(&view).as_bytes())?;
    }
    Ok(())
}
