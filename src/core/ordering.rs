//! Filter-and-order: the pure derivation from an `AppearanceTable` to the
//! view both charts are drawn from.
//!
//! * records whose appearance type is in `EXCLUDED_APPEARANCE_TYPES` are
//!   dropped
//! * appearance types are ranked by `APPEARANCE_TYPES`; anything else lands
//!   in a single trailing `Unranked` bucket
//! * names keep their first-seen order, reversed, so index 0 is the bottom
//!   of the name axis and the first character in the source ends up on top

use indexmap::IndexSet;
use log::warn;

use crate::core::{
    constants::{APPEARANCE_TYPES, EXCLUDED_APPEARANCE_TYPES, VOLUME_COLUMNS},
    data::{AppearanceRecord, AppearanceTable},
};

/// Position of an appearance type in the most-to-least-present ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppearanceRank {
    /// Index into `APPEARANCE_TYPES`; 0 is `Main`.
    Ranked(usize),
    /// Not a known kind (typos, new labels).  Sorts after every ranked kind.
    Unranked,
}

impl AppearanceRank {
    #[must_use]
    pub fn of(appearance_type: &str) -> Self {
        APPEARANCE_TYPES
            .iter()
            .position(|t| *t == appearance_type)
            .map_or(Self::Unranked, Self::Ranked)
    }
}

/// True for values that do not describe an actual appearance.
#[inline]
#[must_use]
pub fn is_excluded(appearance_type: &str) -> bool {
    EXCLUDED_APPEARANCE_TYPES.contains(&appearance_type)
}

/// A distinct appearance type present in the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppearanceCategory {
    pub label: String,
    pub rank: AppearanceRank,
}

/// Name axis order.  Index 0 is drawn at the bottom.
#[derive(Clone, Debug, Default)]
pub struct DisplayOrder {
    names: IndexSet<String>,
}

// `IndexSet` equality ignores order; display order must not.
impl PartialEq for DisplayOrder {
    fn eq(&self, other: &Self) -> bool {
        self.names.iter().eq(other.names.iter())
    }
}
impl Eq for DisplayOrder {}

impl DisplayOrder {
    /// Reverse of the first-occurrence order of names in `records`.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AppearanceRecord>,
    {
        let first_seen: IndexSet<&str> = records.into_iter().map(|r| r.name.as_str()).collect();
        Self {
            names: first_seen.into_iter().rev().map(str::to_owned).collect(),
        }
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }
    #[must_use]
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get_index(index).map(String::as_str)
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Filtered, ordered records ready for charting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartView {
    records: Vec<AppearanceRecord>,
    categories: Vec<AppearanceCategory>,
    volumes: Vec<String>,
    names: DisplayOrder,
}

impl ChartView {
    /// Derive the view.  Pure apart from a warning per unranked category.
    #[must_use]
    pub fn derive(table: &AppearanceTable) -> Self {
        let records: Vec<AppearanceRecord> = table
            .iter()
            .filter(|r| !is_excluded(&r.appearance_type))
            .cloned()
            .collect();

        // Stable sort keeps first-seen order inside the unranked bucket.
        let mut categories: Vec<AppearanceCategory> = records
            .iter()
            .map(|r| r.appearance_type.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .map(|label| AppearanceCategory {
                label: label.to_owned(),
                rank: AppearanceRank::of(label),
            })
            .collect();
        categories.sort_by_key(|c| c.rank);

        for c in categories
            .iter()
            .filter(|c| c.rank == AppearanceRank::Unranked)
        {
            warn!("appearance type `{}` is not a known kind; drawn last", c.label);
        }

        // Canonical volumes first, then anything unexpected in first-seen order.
        let mut volumes: IndexSet<String> = VOLUME_COLUMNS.iter().map(|v| (*v).to_owned()).collect();
        volumes.extend(records.iter().map(|r| r.volume.clone()));

        let names = DisplayOrder::from_records(&records);

        Self {
            records,
            categories,
            volumes: volumes.into_iter().collect(),
            names,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[AppearanceRecord] {
        &self.records
    }
    /// Categories present, most present first.
    #[must_use]
    pub fn categories(&self) -> &[AppearanceCategory] {
        &self.categories
    }
    #[must_use]
    pub fn category_index(&self, appearance_type: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| c.label == appearance_type)
    }
    #[must_use]
    pub fn volumes(&self) -> &[String] {
        &self.volumes
    }
    #[must_use]
    pub fn volume_index(&self, volume: &str) -> Option<usize> {
        self.volumes.iter().position(|v| v == volume)
    }
    #[must_use]
    pub fn names(&self) -> &DisplayOrder {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str, &str)]) -> AppearanceTable {
        rows.iter()
            .map(|(n, v, t)| AppearanceRecord::new(*n, *v, *t))
            .collect()
    }

    #[test]
    fn excluded_types_are_dropped_and_main_is_kept() {
        let t = table(&[
            ("A", "Trailers", "No Appearance"),
            ("A", "Volume 1", "???"),
            ("A", "Volume 2", "Deceased"),
            ("A", "Volume 3", "Main"),
        ]);
        let view = ChartView::derive(&t);

        assert_eq!(view.records(), &[AppearanceRecord::new("A", "Volume 3", "Main")]);
    }

    #[test]
    fn ranks_follow_the_fixed_preference_order() {
        let ranks: Vec<_> = APPEARANCE_TYPES.iter().map(|t| AppearanceRank::of(t)).collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(AppearanceRank::of("Main"), AppearanceRank::Ranked(0));
        assert_eq!(AppearanceRank::of("Mentioned"), AppearanceRank::Ranked(8));
        assert!(AppearanceRank::of("Mentioned") < AppearanceRank::of("Mian"));
    }

    #[test]
    fn categories_sort_by_rank_with_unranked_last() {
        let t = table(&[
            ("A", "Trailers", "Mentioned"),
            ("A", "Volume 1", "Typo"),
            ("A", "Volume 2", "Cameo"),
            ("B", "Trailers", "Main"),
            ("B", "Volume 1", "Other Typo"),
            ("B", "Volume 2", "Secondary"),
        ]);
        let view = ChartView::derive(&t);
        let labels: Vec<_> = view.categories().iter().map(|c| c.label.as_str()).collect();

        assert_eq!(
            labels,
            vec!["Main", "Secondary", "Cameo", "Mentioned", "Typo", "Other Typo"]
        );
        assert_eq!(view.category_index("Typo"), Some(4));
        assert_eq!(view.records().len(), 6);
    }

    #[test]
    fn display_order_is_reversed_first_seen_order_after_filtering() {
        let t = table(&[
            ("Ruby", "Trailers", "Main"),
            ("Weiss", "Trailers", "Main"),
            ("Ruby", "Volume 1", "Main"),
            ("Ghost", "Trailers", "No Appearance"),
            ("Blake", "Volume 1", "Minor"),
        ]);
        let view = ChartView::derive(&t);
        let names: Vec<_> = view.names().iter().collect();

        assert_eq!(names, vec!["Blake", "Weiss", "Ruby"]);
        assert_eq!(view.names().position("Ruby"), Some(2));
        assert_eq!(view.names().name_at(0), Some("Blake"));
        assert_eq!(view.names().position("Ghost"), None);
    }

    #[test]
    fn volumes_are_canonical_then_unknown() {
        let t = table(&[("A", "Volume 9", "Main"), ("A", "Volume 1", "Main")]);
        let view = ChartView::derive(&t);

        assert_eq!(view.volumes().len(), VOLUME_COLUMNS.len() + 1);
        assert_eq!(view.volume_index("Trailers"), Some(0));
        assert_eq!(view.volume_index("Volume 9"), Some(VOLUME_COLUMNS.len()));
    }

    #[test]
    fn derivation_is_repeatable() {
        let t = table(&[
            ("A", "Trailers", "Cameo"),
            ("B", "Volume 1", "Main"),
            ("C", "Volume 2", "???"),
        ]);
        assert_eq!(ChartView::derive(&t), ChartView::derive(&t));
    }
}
