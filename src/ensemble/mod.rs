//! Ensemble learners built on decision trees.

mod boosting;

pub use boosting::{BoostingParams, GradientBoosting};
