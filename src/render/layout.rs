//! Backend-free chart geometry.
//!
//! Everything a drawing backend needs is computed here from a `ChartView`,
//! in category/axis index space, so the charts can be checked without
//! rasterising anything.

use crate::core::ordering::ChartView;

/// One coloured slice of a stacked bar.  `lower..upper` is in record counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackSegment {
    pub category: usize,
    pub lower: u32,
    pub upper: u32,
}

impl StackSegment {
    #[inline]
    #[must_use]
    pub fn count(&self) -> u32 {
        self.upper - self.lower
    }
}

/// The stacked bar over one volume.  Segments run bottom to top, most
/// present kind first; empty kinds are left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VolumeStack {
    pub volume: usize,
    pub segments: Vec<StackSegment>,
}

impl VolumeStack {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.segments.last().map_or(0, |s| s.upper)
    }
}

/// Per-volume counts stacked by appearance rank, one entry per volume on
/// the axis (including volumes with no records).
#[must_use]
pub fn volume_stacks(view: &ChartView) -> Vec<VolumeStack> {
    let mut counts = vec![vec![0u32; view.categories().len()]; view.volumes().len()];
    for r in view.records() {
        if let (Some(v), Some(c)) = (
            view.volume_index(&r.volume),
            view.category_index(&r.appearance_type),
        ) {
            counts[v][c] += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(volume, per_category)| {
            let mut lower = 0;
            let segments = per_category
                .into_iter()
                .enumerate()
                .filter(|(_, n)| *n > 0)
                .map(|(category, n)| {
                    let seg = StackSegment {
                        category,
                        lower,
                        upper: lower + n,
                    };
                    lower += n;
                    seg
                })
                .collect();
            VolumeStack { volume, segments }
        })
        .collect()
}

/// One tile of the volume × character grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileCell {
    pub volume: usize,
    /// Position in the display order; 0 is the bottom row.
    pub row: usize,
    pub category: usize,
}

/// One tile per filtered record, in record order.
#[must_use]
pub fn character_tiles(view: &ChartView) -> Vec<TileCell> {
    view.records()
        .iter()
        .filter_map(|r| {
            Some(TileCell {
                volume: view.volume_index(&r.volume)?,
                row: view.names().position(&r.name)?,
                category: view.category_index(&r.appearance_type)?,
            })
        })
        .collect()
}
