// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordering rows by value.

use std::cmp::Ordering;

/// Sorting order for [`Ranking`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    #[default]
    Desc,
}

/// A display order over rows, derived from one value per row.
///
/// Rows without a value come last in either order. Ties keep row order. Building a ranking
/// never reorders the rows themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    order: Vec<usize>,
    ranks: Vec<usize>,
}

impl Ranking {
    /// Ranks `values` (indexed by row).
    pub fn new(values: &[Option<f64>], order: SortOrder) -> Self {
        let mut rows: Vec<usize> = (0..values.len()).collect();
        rows.sort_by(|&a, &b| match (values[a], values[b]) {
            (Some(x), Some(y)) => match order {
                SortOrder::Asc => x.total_cmp(&y),
                SortOrder::Desc => y.total_cmp(&x),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        let mut ranks = vec![0; values.len()];
        for (rank, &row) in rows.iter().enumerate() {
            ranks[row] = rank;
        }
        Self {
            order: rows,
            ranks,
        }
    }

    /// Rows in display order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Display position of `row`.
    pub fn rank_of(&self, row: usize) -> Option<usize> {
        self.ranks.get(row).copied()
    }

    /// Number of ranked rows.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_with_missing_last_and_stable_ties() {
        let values = [Some(3.0), None, Some(7.0), Some(3.0), Some(0.0), None];
        let ranking = Ranking::new(&values, SortOrder::Desc);
        assert_eq!(ranking.order(), [2, 0, 3, 4, 1, 5]);
        assert_eq!(ranking.rank_of(2), Some(0));
        assert_eq!(ranking.rank_of(5), Some(5));
        assert_eq!(ranking.rank_of(6), None);
    }

    #[test]
    fn ascending_keeps_missing_last() {
        let values = [None, Some(2.0), Some(-1.0)];
        let ranking = Ranking::new(&values, SortOrder::Asc);
        assert_eq!(ranking.order(), [2, 1, 0]);
    }

    #[test]
    fn ranking_is_descending_for_any_input_order() {
        let base = [4.5, 1.0, 9.25, 6.0, 6.0, 2.5, 8.0];
        for shift in 0..base.len() {
            let values: Vec<Option<f64>> = base
                .iter()
                .cycle()
                .skip(shift)
                .take(base.len())
                .map(|v| Some(*v))
                .collect();
            let ranking = Ranking::new(&values, SortOrder::Desc);
            let sorted: Vec<f64> = ranking.order().iter().map(|&r| values[r].unwrap()).collect();
            assert!(sorted.windows(2).all(|w| w[0] >= w[1]), "{sorted:?}");
        }
    }
}
