//! Fixed-depth decision tree.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::data::ColumnMatrix;
use crate::error::GroveError;

use super::partition::RowPartitioner;
use super::rule::{DecisionRule, RuleParams};
use super::split::Split;

/// Sentinel child index marking a missing subtree.
const NO_CHILD: i32 = -1;

/// Parameters for fitting a [`DecisionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    /// Maximum number of rule levels; a depth-1 tree is a single rule.
    pub depth: usize,
    /// Split search configuration shared by every node.
    pub rule: RuleParams,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            depth: 1,
            rule: RuleParams::default(),
        }
    }
}

impl TreeParams {
    pub fn validate(&self) -> Result<(), GroveError> {
        if self.depth == 0 {
            return Err(GroveError::InvalidDepth(self.depth));
        }
        self.rule.validate()
    }
}

/// A fitted decision tree in flattened pre-order form.
///
/// `splits[i]` is the rule of node `i`; `routes[i]` holds the node indices
/// of its left and right children, or `-1` where the subtree is absent.
/// Nodes are stored in pre-order, so every child index is strictly greater
/// than its parent's and node 0 is the root. A `-1` route means the side is
/// terminal: the prediction is the corresponding side value of the node's
/// own split. `routes` keeps its full `2^depth` allocation; entries past
/// the used node count stay `(-1, -1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    splits: Vec<Split>,
    routes: Vec<[i32; 2]>,
}

impl DecisionTree {
    /// Grow a tree of at most `params.depth` levels over all rows, then
    /// flatten it.
    ///
    /// Each node is seeded from its parent: the node RNG first yields the
    /// left child seed, then the right one, before the node's own rule is
    /// fitted from the same seed. Recursion descends left, then right,
    /// which makes the whole construction a function of `(data, seed)`.
    pub fn fit(columns: &ColumnMatrix, target: &[f64], params: &TreeParams, seed: u64) -> Self {
        let n_rows = columns.n_samples();
        debug_assert!(n_rows > 0, "tree fit on empty matrix");
        debug_assert_eq!(target.len(), n_rows);
        debug_assert!(params.depth >= 1);

        let mut grower = Grower {
            columns,
            target,
            params,
            partitioner: RowPartitioner::new(n_rows),
            splits: Vec::new(),
            routes: vec![[NO_CHILD; 2]; 1usize << params.depth],
        };

        let root = grower.grow(0..n_rows, params.depth, seed);
        debug_assert_eq!(root, 0, "root must occupy arena index 0");

        Self {
            splits: grower.splits,
            routes: grower.routes,
        }
    }

    /// Number of nodes actually used.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.splits.len()
    }

    /// Split records in pre-order.
    #[inline]
    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    /// Child routes per node, `-1` marking a terminal side.
    #[inline]
    pub fn routes(&self) -> &[[i32; 2]] {
        &self.routes
    }

    /// Predict one row by walking the flattened tree.
    pub fn predict_row(&self, columns: &ColumnMatrix, row: usize) -> f64 {
        let mut cur = 0usize;
        loop {
            let split = &self.splits[cur];
            let side = split.route(columns.column(split.feature)[row]);
            let next = self.routes[cur][side];
            let value = split.values[side];
            // Pre-order layout: no child index is ever 0, so non-positive
            // means this side is a leaf.
            debug_assert_ne!(next, 0, "child route points at the root");
            if next <= 0 {
                return value;
            }
            cur = next as usize;
        }
    }

    /// Predict every row of the matrix.
    pub fn predict(&self, columns: &ColumnMatrix) -> Vec<f64> {
        (0..columns.n_samples())
            .map(|row| self.predict_row(columns, row))
            .collect()
    }
}

/// Recursive arena builder.
///
/// Each call claims the next arena slot, fits a rule, partitions its row
/// range in place, recurses, and writes the children's arena indices into
/// its own routes entry on the way back up. The arena order is therefore
/// exactly the pre-order of the built tree.
struct Grower<'a> {
    columns: &'a ColumnMatrix,
    target: &'a [f64],
    params: &'a TreeParams,
    partitioner: RowPartitioner,
    splits: Vec<Split>,
    routes: Vec<[i32; 2]>,
}

impl Grower<'_> {
    fn grow(&mut self, range: Range<usize>, depth_left: usize, seed: u64) -> i32 {
        if depth_left == 0 || range.is_empty() {
            return NO_CHILD;
        }

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let left_seed: u64 = rng.gen();
        let right_seed: u64 = rng.gen();

        let rows = self.partitioner.rows(range.clone());
        let rule = DecisionRule::fit(self.columns, self.target, rows, &self.params.rule, seed);
        let split = rule.into_split();

        let column = self.columns.column(split.feature);
        let n_left = self
            .partitioner
            .split_range(range.clone(), column, split.threshold);

        let index = self.splits.len() as i32;
        self.splits.push(split);

        let mid = range.start + n_left;
        let left = self.grow(range.start..mid, depth_left - 1, left_seed);
        let right = self.grow(mid..range.end, depth_left - 1, right_seed);

        debug_assert!(left == NO_CHILD || left > index);
        debug_assert!(right == NO_CHILD || right > index);
        self.routes[index as usize] = [left, right];

        index
    }
}
