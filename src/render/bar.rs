//! "Num Characters per Volume": stacked bars with a count on each slice.

use std::path::Path;

use plotters::{
    coord::ranged1d::SegmentValue,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    core::{color::appearance_color, ordering::ChartView},
    render::{
        chrome::{
            DrawResult, LEGEND_FRACTION, Scale, categorical_axis, draw_legend, segment_edges,
            segment_label,
        },
        layout::{VolumeStack, volume_stacks},
    },
};

/// Headroom above the tallest bar.
const Y_HEADROOM: f64 = 1.05;

#[allow(clippy::cast_possible_truncation)]
pub fn draw(view: &ChartView, path: &Path, size: (u32, u32), dpi: u32) -> DrawResult<()> {
    let scale = Scale::new(dpi);
    let stacks = volume_stacks(view);
    let y_max = f64::from(stacks.iter().map(VolumeStack::total).max().unwrap_or(0).max(1));
    let volumes = view.volumes();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let plot_width = (f64::from(size.0) * (1.0 - LEGEND_FRACTION)) as i32;
    let (plot_area, legend_area) = root.split_horizontally(plot_width);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption("Num Characters per Volume", scale.font(16.0))
        .margin(scale.px_u32(8.0))
        .x_label_area_size(scale.px_u32(28.0))
        .y_label_area_size(scale.px_u32(36.0))
        .build_cartesian_2d(categorical_axis(volumes.len()), 0f64..y_max * Y_HEADROOM)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(TRANSPARENT)
        .x_labels(volumes.len())
        .x_label_formatter(&|v| segment_label(volumes, v))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .x_desc("Volume")
        .y_desc("Num characters in volume")
        .label_style(scale.font(8.0))
        .axis_desc_style(scale.font(11.0))
        .draw()?;

    let gap = scale.px_u32(4.0);
    for (index, category) in view.categories().iter().enumerate() {
        let fill = RGBColor::from(appearance_color(category.rank)).filled();
        chart.draw_series(stacks.iter().flat_map(|stack| {
            stack
                .segments
                .iter()
                .filter(move |seg| seg.category == index)
                .map(move |seg| {
                    let (left, right) = segment_edges(stack.volume);
                    let mut bar = Rectangle::new(
                        [
                            (left, f64::from(seg.lower)),
                            (right, f64::from(seg.upper)),
                        ],
                        fill,
                    );
                    bar.set_margin(0, 0, gap, gap);
                    bar
                })
        }))?;
    }

    let count_style = scale
        .font(7.0)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(stacks.iter().flat_map(|stack| {
        let style = count_style.clone();
        stack.segments.iter().map(move |seg| {
            Text::new(
                seg.count().to_string(),
                (
                    SegmentValue::CenterOf(stack.volume as u32),
                    f64::from(seg.lower + seg.upper) / 2.0,
                ),
                style.clone(),
            )
        })
    }))?;

    draw_legend(&legend_area, view.categories(), scale)?;
    root.present()?;
    Ok(())
}
