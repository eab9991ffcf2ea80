//! Per-timepoint activity values and their global magnitude range.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Entity name -> signed activity, for one timepoint.
pub type Frame = HashMap<String, f64>;

/// Smallest and largest absolute activity seen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MagnitudeRange {
    pub min: f64,
    pub max: f64,
}

impl MagnitudeRange {
    pub fn of(value: f64) -> Self {
        let m = value.abs();
        Self { min: m, max: m }
    }

    /// Widens the range to cover `value`. Never shrinks it.
    pub fn observe(self, value: f64) -> Self {
        let m = value.abs();
        Self { min: self.min.min(m), max: self.max.max(m) }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `|value|` within the range, in `[0, 1]`. Degenerate ranges map to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((value.abs() - self.min) / span).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivityTable {
    frames: BTreeMap<usize, Frame>,
    range: Option<MagnitudeRange>,
}

impl ActivityTable {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, timepoint: usize, entity: impl Into<String>, value: f64) {
        self.frames.entry(timepoint).or_default().insert(entity.into(), value);
        self.range = Some(match self.range {
            Some(r) => r.observe(value),
            None => MagnitudeRange::of(value),
        });
    }

    pub fn range(&self) -> Option<MagnitudeRange> { self.range }

    pub fn frame(&self, timepoint: usize) -> Option<&Frame> { self.frames.get(&timepoint) }

    pub fn get(&self, timepoint: usize, entity: &str) -> Option<f64> {
        self.frames.get(&timepoint)?.get(entity).copied()
    }

    /// Timepoint indices in ascending order.
    pub fn timepoints(&self) -> impl Iterator<Item = usize> + '_ {
        self.frames.keys().copied()
    }

    pub fn timepoint_count(&self) -> usize { self.frames.len() }

    pub fn is_empty(&self) -> bool { self.frames.is_empty() }

    /// Every entity named in any timepoint, sorted.
    pub fn entities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .frames
            .values()
            .flat_map(|f| f.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ragged_rows_split_by_column() {
        let mut table = ActivityTable::new();
        for (t, v) in [1.0, -2.0, 3.0].into_iter().enumerate() {
            table.insert(t, "pgi", v);
        }
        table.insert(0, "pfk", 0.5);

        assert_eq!(table.timepoint_count(), 3);
        assert_eq!(table.frame(0).map(|f| f.len()), Some(2));
        assert_eq!(table.frame(2).map(|f| f.len()), Some(1));
        assert_eq!(table.get(1, "pgi"), Some(-2.0));
        assert_eq!(table.get(1, "pfk"), None);
        assert_eq!(table.range(), Some(MagnitudeRange { min: 0.5, max: 3.0 }));
    }

    #[test]
    fn test_empty_table_has_no_range() {
        let mut table = ActivityTable::new();
        assert!(table.is_empty());
        assert!(table.range().is_none());
        assert_eq!(table.timepoint_count(), 0);
        table.insert(0, "pgi", 0.0);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_degenerate_range_normalizes_to_zero() {
        let r = MagnitudeRange::of(4.0).observe(-4.0);
        assert_eq!(r.span(), 0.0);
        assert_eq!(r.normalize(4.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_range_is_order_independent(
            (values, shuffled) in prop::collection::vec(-1e6f64..1e6, 1..64)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            let fold = |vals: &[f64]| vals[1..].iter().fold(MagnitudeRange::of(vals[0]), |r, &v| r.observe(v));
            prop_assert_eq!(fold(&values), fold(&shuffled));
        }

        #[test]
        fn prop_range_is_monotonic(values in prop::collection::vec(-1e6f64..1e6, 1..64)) {
            let mut r = MagnitudeRange::of(values[0]);
            for &v in &values[1..] {
                let next = r.observe(v);
                prop_assert!(next.min <= r.min);
                prop_assert!(next.max >= r.max);
                r = next;
            }
        }
    }
}
