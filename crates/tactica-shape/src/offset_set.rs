//! Deduplicated sets of relative offsets.

use indexmap::IndexSet;
use tactica_core::{Facing, GridPos};

/// A set of relative coordinates with duplicates collapsed.
///
/// Iteration follows first-insertion order, which keeps generated shapes
/// deterministic across runs even though membership is what matters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OffsetSet {
    cells: IndexSet<GridPos>,
}

impl OffsetSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The set containing only `(0, 0)`.
    pub fn origin() -> Self {
        std::iter::once(GridPos::ORIGIN).collect()
    }

    /// Insert an offset. Returns `false` if it was already present.
    pub fn insert(&mut self, p: GridPos) -> bool {
        self.cells.insert(p)
    }

    /// Membership test.
    pub fn contains(&self, p: GridPos) -> bool {
        self.cells.contains(&p)
    }

    /// Number of distinct offsets.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if no offsets are present.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Offsets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.cells.iter().copied()
    }

    /// Absolute coordinates when anchored at `anchor`.
    pub fn translated(&self, anchor: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        self.iter().map(move |p| anchor + p)
    }

    /// Every offset rotated from the +Y frame into `facing`.
    pub fn rotated(&self, facing: Facing) -> Self {
        self.iter().map(|p| facing.rotate(p)).collect()
    }

    /// Offsets sorted by `(x, y)`; handy for comparisons.
    pub fn to_sorted_vec(&self) -> Vec<GridPos> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable();
        v
    }
}

impl FromIterator<GridPos> for OffsetSet {
    fn from_iter<I: IntoIterator<Item = GridPos>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<GridPos> for OffsetSet {
    fn extend<I: IntoIterator<Item = GridPos>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a OffsetSet {
    type Item = &'a GridPos;
    type IntoIter = indexmap::set::Iter<'a, GridPos>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
