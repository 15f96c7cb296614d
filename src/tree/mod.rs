//! Decision rules and trees.
//!
//! A [`DecisionRule`] is a single `(feature, threshold)` test found by
//! randomized threshold sampling and scored by count-weighted variance. A
//! [`DecisionTree`] composes rules recursively to a fixed depth over row
//! subsets, then flattens into parallel arrays for prediction.

mod decision_tree;
mod impurity;
mod partition;
mod rule;
mod split;
mod threshold;

pub use decision_tree::{DecisionTree, TreeParams};
pub use impurity::{partial_impurity, PartialImpurity};
pub use partition::RowPartitioner;
pub use rule::{DecisionRule, RuleParams};
pub use split::{Split, SplitStrategy};
