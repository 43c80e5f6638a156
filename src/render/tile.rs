//! "Character appearances": one tile per (volume, character).

use std::path::Path;

use plotters::prelude::*;

use crate::{
    core::{color::appearance_color, ordering::ChartView},
    render::{
        chrome::{
            DrawResult, LEGEND_FRACTION, Scale, categorical_axis, draw_legend, segment_edges,
            segment_label,
        },
        layout::character_tiles,
    },
};

#[allow(clippy::cast_possible_truncation)]
pub fn draw(view: &ChartView, path: &Path, size: (u32, u32), dpi: u32) -> DrawResult<()> {
    let scale = Scale::new(dpi);
    let tiles = character_tiles(view);
    let volumes = view.volumes();
    let names: Vec<&str> = view.names().iter().collect();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let plot_width = (f64::from(size.0) * (1.0 - LEGEND_FRACTION)) as i32;
    let (plot_area, legend_area) = root.split_horizontally(plot_width);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption("Character appearances", scale.font(16.0))
        .margin(scale.px_u32(8.0))
        .x_label_area_size(scale.px_u32(28.0))
        .y_label_area_size(scale.px_u32(110.0))
        .build_cartesian_2d(
            categorical_axis(volumes.len()),
            // A lone character still gets a proper band.
            categorical_axis(names.len().max(2)),
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(volumes.len())
        .y_labels(names.len())
        .x_label_formatter(&|v| segment_label(volumes, v))
        .y_label_formatter(&|n| segment_label(&names, n))
        .x_desc("Volume")
        .y_desc("Character")
        .label_style(scale.font(6.0))
        .axis_desc_style(scale.font(11.0))
        .draw()?;

    // Grouped by category so each kind is one series.
    for (index, category) in view.categories().iter().enumerate() {
        let fill = RGBColor::from(appearance_color(category.rank)).filled();
        chart.draw_series(tiles.iter().filter(|t| t.category == index).map(|t| {
            let (left, right) = segment_edges(t.volume);
            let (bottom, top) = segment_edges(t.row);
            Rectangle::new([(left, bottom), (right, top)], fill)
        }))?;
    }

    draw_legend(&legend_area, view.categories(), scale)?;
    root.present()?;
    Ok(())
}
