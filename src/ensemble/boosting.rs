//! Gradient boosting over decision trees.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::data::ColumnMatrix;
use crate::error::GroveError;
use crate::logging::{TrainingLogger, Verbosity};
use crate::tree::{DecisionTree, TreeParams};

/// Parameters for the boosting loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostingParams {
    /// Parameters for each boosted tree.
    pub tree: TreeParams,
    /// Shrinkage applied to every tree's contribution.
    pub learning_rate: f64,
    /// Number of boosting rounds. Zero is valid and yields the
    /// base-score-only model.
    pub iterations: u32,
    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for BoostingParams {
    fn default() -> Self {
        Self {
            tree: TreeParams::default(),
            learning_rate: 0.1,
            iterations: 100,
            verbosity: Verbosity::Silent,
        }
    }
}

impl BoostingParams {
    pub fn validate(&self) -> Result<(), GroveError> {
        self.tree.validate()?;
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(GroveError::InvalidLearningRate(self.learning_rate));
        }
        Ok(())
    }
}

/// A fitted gradient-boosted ensemble.
///
/// Squared-error boosting: the negative gradient is the residual, so each
/// round fits a fresh tree to `target - current prediction` and the
/// prediction advances by `learning_rate` times the tree's output.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientBoosting {
    base_score: f64,
    learning_rate: f64,
    trees: Vec<DecisionTree>,
}

impl GradientBoosting {
    /// Run the boosting loop.
    ///
    /// A master RNG seeded from `seed` yields one seed per round, so a
    /// model with more rounds extends a shorter one trained from the same
    /// seed instead of reshuffling it.
    pub fn fit(columns: &ColumnMatrix, target: &[f64], params: &BoostingParams, seed: u64) -> Self {
        let n_rows = target.len();
        debug_assert!(n_rows > 0, "boosting fit on empty target");
        debug_assert_eq!(columns.n_samples(), n_rows);

        let logger = TrainingLogger::new(params.verbosity);

        let base_score = target.iter().sum::<f64>() / n_rows as f64;
        logger.info(&format!(
            "starting training: {} rounds, {} samples, base score {:.6}",
            params.iterations, n_rows, base_score
        ));

        let mut residual: Vec<f64> = target.iter().map(|t| t - base_score).collect();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut trees = Vec::with_capacity(params.iterations as usize);

        for round in 0..params.iterations {
            let tree_seed: u64 = rng.gen();
            let tree = DecisionTree::fit(columns, &residual, &params.tree, tree_seed);

            let fitted = tree.predict(columns);
            for (r, p) in residual.iter_mut().zip(&fitted) {
                *r -= params.learning_rate * p;
            }
            trees.push(tree);

            if params.verbosity >= Verbosity::Info {
                let rmse =
                    (residual.iter().map(|r| r * r).sum::<f64>() / n_rows as f64).sqrt();
                logger.log_round(round as usize, &[("train-rmse", rmse)]);
            }
        }

        logger.info(&format!("training complete: {} trees", trees.len()));

        Self {
            base_score,
            learning_rate: params.learning_rate,
            trees,
        }
    }

    /// Mean of the training target, the model's starting prediction.
    #[inline]
    pub fn base_score(&self) -> f64 {
        self.base_score
    }

    /// Number of trained trees.
    #[inline]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Predict every row: `base_score + learning_rate * Σ tree(row)`.
    pub fn predict(&self, columns: &ColumnMatrix) -> Vec<f64> {
        let mut predictions = vec![self.base_score; columns.n_samples()];
        for tree in &self.trees {
            for (row, prediction) in predictions.iter_mut().enumerate() {
                *prediction += self.learning_rate * tree.predict_row(columns, row);
            }
        }
        predictions
    }
}
