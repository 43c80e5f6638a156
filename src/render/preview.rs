//! Terminal rendition of the per-volume bar chart.
//!
//! One horizontal stacked bar per volume inside a box, scaled to the
//! terminal width, followed by a colour legend.  Colours match the PNG
//! palette; pass `color = false` for plain text (pipes, tests).

use terminal_size::{Width, terminal_size};

use crate::{
    core::{
        color::{AnsiCode, appearance_color, colorize},
        constants::FALLBACK_TERMINAL_WIDTH,
        ordering::ChartView,
    },
    render::layout::{VolumeStack, volume_stacks},
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;
/// The left and right border characters
const BORDER_WIDTH: usize = 2;
/// Narrowest bar area worth drawing.
const MIN_BAR_CELLS: usize = 10;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";
const BLOCK: char = '█';
const SWATCH: &str = "■";

/// Current terminal width (80 column fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    let Width(w) = terminal_size().map_or(Width(FALLBACK_TERMINAL_WIDTH), |(w, _)| w);
    usize::from(w)
}

#[derive(Clone, Copy, Debug)]
pub struct Preview {
    width: usize,
    color: bool,
}

impl Preview {
    #[must_use]
    pub fn new(width: usize, color: bool) -> Self {
        Self { width, color }
    }

    /// Sized to the attached terminal, coloured.
    #[must_use]
    pub fn for_terminal() -> Self {
        Self::new(terminal_width(), true)
    }

    #[must_use]
    pub fn render(&self, view: &ChartView) -> String {
        let stacks = volume_stacks(view);
        let label_width = view.volumes().iter().map(|v| v.chars().count()).max().unwrap_or(0);
        let max_total = stacks.iter().map(VolumeStack::total).max().unwrap_or(0);
        let count_width = max_total.to_string().len();

        // │ label bar count │
        let fixed = BORDER_WIDTH + 1 + label_width + 1 + 1 + count_width + 1;
        let bar_cells = self.width.saturating_sub(fixed).max(MIN_BAR_CELLS);
        let inner = fixed - BORDER_WIDTH + bar_cells;

        let mut out = String::new();
        out.push_str(TL);
        push_centered(&mut out, "Num Characters per Volume", inner);
        out.push_str(TR);
        out.push('\n');

        for stack in &stacks {
            let label = &view.volumes()[stack.volume];
            out.push_str(V);
            out.push(' ');
            out.push_str(&format!("{label:<label_width$} "));
            let drawn = self.push_bar(&mut out, view, stack, max_total, bar_cells);
            out.push_str(&" ".repeat(bar_cells - drawn));
            out.push_str(&format!(" {:>count_width$} ", stack.total()));
            out.push_str(V);
            out.push('\n');
        }

        out.push_str(BL);
        out.push_str(&H.repeat(inner));
        out.push_str(BR);
        out.push('\n');

        self.push_legend(&mut out, view);
        out
    }

    /// Draw one stacked bar, returns the number of cells used.
    fn push_bar(
        &self,
        out: &mut String,
        view: &ChartView,
        stack: &VolumeStack,
        max_total: u32,
        cells: usize,
    ) -> usize {
        // Cumulative rounding keeps the bar length proportional to the total.
        let edge = |count: u32| -> usize {
            if max_total == 0 {
                0
            } else {
                (count as usize * cells + max_total as usize / 2) / max_total as usize
            }
        };

        let mut drawn = 0;
        for seg in &stack.segments {
            let n = edge(seg.upper) - edge(seg.lower);
            if n == 0 {
                continue;
            }
            let run: String = std::iter::repeat_n(BLOCK, n).collect();
            if self.color {
                let rank = view.categories()[seg.category].rank;
                out.push_str(&colorize(AnsiCode::from(appearance_color(rank)), &run));
            } else {
                out.push_str(&run);
            }
            drawn += n;
        }
        drawn
    }

    fn push_legend(&self, out: &mut String, view: &ChartView) {
        if self.color {
            out.push_str(&colorize(AnsiCode::Bold, "Appearance:"));
        } else {
            out.push_str("Appearance:");
        }
        for category in view.categories() {
            out.push_str("  ");
            if self.color {
                let c = AnsiCode::from(appearance_color(category.rank));
                out.push_str(&colorize(c, SWATCH));
            } else {
                out.push_str(SWATCH);
            }
            out.push(' ');
            out.push_str(&category.label);
        }
        out.push('\n');
    }
}

/// Write centred text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  ");
    buf.push_str(text);
    buf.push(' ');
    buf.push_str(&H.repeat(pad_right));
}
