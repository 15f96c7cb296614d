//! Row index tracking during tree building.

use std::ops::Range;

/// Tracks which rows belong to which node as a contiguous position list.
///
/// The whole training set starts as one range `0..n_rows`; splitting a
/// node rearranges its range in place so the left child occupies the front
/// and the right child the back. Ranges never overlap, so recursion can
/// hand disjoint sub-ranges to child nodes.
///
/// The partition step is stable: rows keep their relative order on both
/// sides. Downstream RNG state depends on subset order, so an unstable
/// swap-based partition would change fitted models.
#[derive(Debug, Clone)]
pub struct RowPartitioner {
    positions: Vec<u32>,
    scratch: Vec<u32>,
}

impl RowPartitioner {
    /// Create a partitioner with all rows in the root range.
    pub fn new(n_rows: usize) -> Self {
        Self {
            positions: (0..n_rows as u32).collect(),
            scratch: Vec::with_capacity(n_rows),
        }
    }

    /// Row indices of a node's range.
    #[inline]
    pub fn rows(&self, range: Range<usize>) -> &[u32] {
        &self.positions[range]
    }

    /// Total number of tracked rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.positions.len()
    }

    /// Stably partition a range by `column[row] <= threshold`.
    ///
    /// Returns the number of rows routed left; afterwards the range holds
    /// the left rows followed by the right rows, each side in the original
    /// relative order.
    pub fn split_range(&mut self, range: Range<usize>, column: &[f64], threshold: f64) -> usize {
        self.scratch.clear();
        let slice = &mut self.positions[range];

        let mut n_left = 0;
        for read in 0..slice.len() {
            let row = slice[read];
            if column[row as usize] <= threshold {
                slice[n_left] = row;
                n_left += 1;
            } else {
                self.scratch.push(row);
            }
        }
        slice[n_left..].copy_from_slice(&self.scratch);

        n_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_holds_all_rows() {
        let part = RowPartitioner::new(5);
        assert_eq!(part.n_rows(), 5);
        assert_eq!(part.rows(0..5), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn split_preserves_relative_order() {
        let mut part = RowPartitioner::new(6);
        // Rows 1, 3, 4 route left; order within each side must survive.
        let column = [9.0, 1.0, 8.0, 2.0, 0.0, 7.0];

        let n_left = part.split_range(0..6, &column, 5.0);
        assert_eq!(n_left, 3);
        assert_eq!(part.rows(0..3), &[1, 3, 4]);
        assert_eq!(part.rows(3..6), &[0, 2, 5]);
    }

    #[test]
    fn split_sub_range_leaves_rest_untouched() {
        let mut part = RowPartitioner::new(6);
        let column = [0.0, 10.0, 0.0, 10.0, 0.0, 10.0];
        let n_left = part.split_range(0..6, &column, 5.0);
        assert_eq!(n_left, 3);

        // Now split only the right child's range.
        let column2 = [0.0, 0.0, 0.0, 9.0, 0.0, 1.0];
        let n_left2 = part.split_range(3..6, &column2, 5.0);
        assert_eq!(n_left2, 2);
        assert_eq!(part.rows(0..3), &[0, 2, 4]);
        assert_eq!(part.rows(3..5), &[1, 5]);
        assert_eq!(part.rows(5..6), &[3]);
    }

    #[test]
    fn one_sided_split() {
        let mut part = RowPartitioner::new(4);
        let column = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(part.split_range(0..4, &column, 2.0), 4);
        assert_eq!(part.rows(0..4), &[0, 1, 2, 3]);
        assert_eq!(part.split_range(0..4, &column, 0.0), 0);
        assert_eq!(part.rows(0..4), &[0, 1, 2, 3]);
    }
}
