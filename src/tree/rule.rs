//! Single-split decision rule.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::data::ColumnMatrix;
use crate::error::GroveError;

use super::impurity::partial_impurity;
use super::split::{Split, SplitStrategy};
use super::threshold::draw_threshold;

/// Parameters for fitting a [`DecisionRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleParams {
    /// Threshold sampling strategy.
    pub strategy: SplitStrategy,
    /// Candidate thresholds scored per feature. Ignored by `Best`, which
    /// always sweeps `subset_len - 1` candidates.
    pub split_iterations: usize,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            strategy: SplitStrategy::default(),
            split_iterations: 1,
        }
    }
}

impl RuleParams {
    pub fn validate(&self) -> Result<(), GroveError> {
        if self.split_iterations == 0 {
            return Err(GroveError::InvalidSplitIterations(self.split_iterations));
        }
        Ok(())
    }

    /// Candidate count for a subset of `n` rows.
    fn iterations_for(&self, n: usize) -> usize {
        match self.strategy {
            // Exhaustive sweep; a singleton subset still scores the one
            // collapsed candidate.
            SplitStrategy::Best => n.saturating_sub(1).max(1),
            _ => self.split_iterations,
        }
    }
}

/// A fitted one-level estimator: a single `(feature, threshold)` test with
/// one prediction value per side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRule {
    split: Split,
}

impl DecisionRule {
    /// Find the best split over `rows`.
    ///
    /// For each feature the candidate of minimum impurity wins (ties keep
    /// the earliest candidate); across features the first feature reaching
    /// the minimum wins. One RNG is seeded from `seed` and shared across
    /// the feature loop, so feature order advances the stream
    /// deterministically.
    ///
    /// `rows` must be non-empty; the tree builder never descends into an
    /// empty subset.
    pub fn fit(
        columns: &ColumnMatrix,
        target: &[f64],
        rows: &[u32],
        params: &RuleParams,
        seed: u64,
    ) -> Self {
        debug_assert!(!rows.is_empty(), "rule fit on empty subset");

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let iterations = params.iterations_for(rows.len());
        let mut pairs: Vec<(f64, f64)> = Vec::with_capacity(rows.len());

        let mut best = Split::unscored(0);
        for feature in 0..columns.n_features() {
            let column = columns.column(feature);

            pairs.clear();
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for &row in rows {
                let value = column[row as usize];
                pairs.push((value, target[row as usize]));
                min = min.min(value);
                max = max.max(value);
            }

            let mut feature_best = Split::unscored(feature);
            for iteration in 0..iterations {
                let threshold = draw_threshold(
                    params.strategy,
                    &mut pairs,
                    min,
                    max,
                    iteration,
                    &mut rng,
                );
                let agg = partial_impurity(column, target, rows, threshold);
                let impurity = agg.total();
                if impurity < feature_best.impurity {
                    feature_best = Split {
                        feature,
                        threshold,
                        impurity,
                        values: [agg.left_value, agg.right_value],
                    };
                }
            }

            if feature_best.impurity < best.impurity {
                best = feature_best;
            }
        }

        Self { split: best }
    }

    /// The fitted split record.
    #[inline]
    pub fn split(&self) -> &Split {
        &self.split
    }

    /// Consume the rule, keeping only its split record.
    #[inline]
    pub(crate) fn into_split(self) -> Split {
        self.split
    }

    /// Predict one row.
    #[inline]
    pub fn predict_row(&self, columns: &ColumnMatrix, row: usize) -> f64 {
        let value = columns.get(row, self.split.feature);
        self.split.values[self.split.route(value)]
    }

    /// Predict every row of the matrix.
    pub fn predict(&self, columns: &ColumnMatrix) -> Vec<f64> {
        (0..columns.n_samples())
            .map(|row| self.predict_row(columns, row))
            .collect()
    }
}
