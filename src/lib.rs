//! grove: randomized decision-tree ensembles for regression.
//!
//! Three composable learners over dense `f64` feature matrices:
//!
//! - [`DecisionRuleRegressor`] - a single variance-reducing split found by
//!   randomized threshold sampling
//! - [`DecisionTreeRegressor`] - a fixed-depth tree of such splits,
//!   flattened into parallel arrays for prediction
//! - [`GradientBoostingRegressor`] - squared-error gradient boosting over
//!   those trees
//!
//! All estimators share the [`Estimator`] fit/predict surface and take
//! `ndarray` views at the boundary. Training is sequential and, for a
//! fixed seed, bit-reproducible.
//!
//! # Example
//!
//! ```
//! use grove::{Estimator, GradientBoostingRegressor, BoostingParams};
//! use grove::tree::TreeParams;
//! use ndarray::array;
//!
//! let x = array![[0.0], [1.0], [2.0], [3.0]];
//! let y = array![0.0, 0.0, 10.0, 10.0];
//!
//! let params = BoostingParams {
//!     tree: TreeParams { depth: 2, ..Default::default() },
//!     learning_rate: 0.5,
//!     iterations: 50,
//!     ..Default::default()
//! };
//! let mut model = GradientBoostingRegressor::new(params);
//! model.fit(x.view(), y.view(), 0).unwrap();
//!
//! let predictions = model.predict(x.view()).unwrap();
//! assert_eq!(predictions.len(), 4);
//! ```

pub mod data;
pub mod ensemble;
pub mod error;
pub mod estimator;
pub mod logging;
pub mod testing;
pub mod tree;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::ColumnMatrix;
pub use ensemble::{BoostingParams, GradientBoosting};
pub use error::GroveError;
pub use estimator::{
    DecisionRuleRegressor, DecisionTreeRegressor, Estimator, GradientBoostingRegressor,
};
pub use logging::{TrainingLogger, Verbosity};
pub use tree::{DecisionRule, DecisionTree, RuleParams, Split, SplitStrategy, TreeParams};
