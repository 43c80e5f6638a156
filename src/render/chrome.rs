//! Pieces shared by both charts: point-to-pixel scaling, categorical axes
//! and the side legend.

use plotters::{
    coord::{
        ranged1d::{IntoSegmentedCoord, SegmentValue, SegmentedCoord},
        types::RangedCoordu32,
    },
    prelude::*,
};

use crate::core::{color::appearance_color, ordering::AppearanceCategory};

pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

pub const FONT: &str = "sans-serif";
/// Share of the canvas width reserved for the legend.
pub const LEGEND_FRACTION: f64 = 0.2;

/// Converts typographic points into pixels at the configured density.
#[derive(Clone, Copy, Debug)]
pub struct Scale {
    dpi: u32,
}

impl Scale {
    #[inline]
    #[must_use]
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    #[inline]
    #[must_use]
    pub fn px(self, pt: f64) -> f64 {
        pt * f64::from(self.dpi) / 72.0
    }

    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn px_u32(self, pt: f64) -> u32 {
        self.px(pt).round().max(0.0) as u32
    }

    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn px_i32(self, pt: f64) -> i32 {
        self.px(pt).round() as i32
    }

    #[must_use]
    pub fn font(self, pt: f64) -> TextStyle<'static> {
        TextStyle::from((FONT, self.px(pt)).into_font())
    }
}

/// Categorical axis with one segment per label.
///
/// Integer ranges are inclusive, so `n` labels need `0..n-1`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn categorical_axis(labels: usize) -> SegmentedCoord<RangedCoordu32> {
    (0u32..labels.saturating_sub(1) as u32).into_segmented()
}

/// Lower and upper edge of segment `index`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn segment_edges(index: usize) -> (SegmentValue<u32>, SegmentValue<u32>) {
    let i = index as u32;
    (SegmentValue::Exact(i), SegmentValue::Exact(i + 1))
}

/// Axis label for a segment centre; ticks at exact edges stay blank.
pub fn segment_label<S: AsRef<str>>(labels: &[S], value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(i) => labels
            .get(*i as usize)
            .map(|s| s.as_ref().to_owned())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Titled swatch list, most present kind on top.
pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    categories: &[AppearanceCategory],
    scale: Scale,
) -> DrawResult<()>
where
    DB::ErrorType: 'static,
{
    let swatch = scale.px_i32(10.0);
    let line = scale.px_i32(14.0);
    let left = scale.px_i32(6.0);
    let mut y = scale.px_i32(60.0);

    area.draw(&Text::new("Appearance", (left, y), scale.font(11.0)))?;
    y += line;

    for category in categories {
        let color = RGBColor::from(appearance_color(category.rank));
        area.draw(&Rectangle::new(
            [(left, y), (left + swatch, y + swatch)],
            color.filled(),
        ))?;
        area.draw(&Text::new(
            category.label.clone(),
            (left + swatch + left, y),
            scale.font(9.0),
        ))?;
        y += line;
    }
    Ok(())
}
