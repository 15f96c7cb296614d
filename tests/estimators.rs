//! End-to-end estimator scenarios.

use grove::testing::{assert_all_close, DEFAULT_TOLERANCE};
use grove::tree::{RuleParams, SplitStrategy, TreeParams};
use grove::{
    BoostingParams, DecisionRuleRegressor, DecisionTreeRegressor, Estimator,
    GradientBoostingRegressor, GroveError,
};
use ndarray::array;

#[test]
fn rule_mean_strategy_trivial() {
    let x = array![[0.0], [1.0]];
    let y = array![0.0, 10.0];

    let mut rule = DecisionRuleRegressor::default();
    rule.fit(x.view(), y.view(), 0).unwrap();

    assert_eq!(rule.get_split().unwrap(), (0.5, 0));
    let predictions = rule.predict(x.view()).unwrap();
    assert_all_close(predictions.as_slice().unwrap(), &[0.0, 10.0], DEFAULT_TOLERANCE);
}

#[test]
fn rule_uniform_prefers_informative_feature() {
    // Feature 1 is constant: splitting on it leaves all rows on one side
    // with impurity 1.0. Feature 0 always does strictly better, so it must
    // be chosen whatever threshold the draw lands on.
    let x = array![[0.0, 5.0], [1.0, 5.0], [2.0, 5.0], [3.0, 5.0]];
    let y = array![0.0, 0.0, 1.0, 1.0];

    let mut rule = DecisionRuleRegressor::new(RuleParams {
        strategy: SplitStrategy::Uniform,
        split_iterations: 1,
    });
    rule.fit(x.view(), y.view(), 42).unwrap();

    let (_, feature) = rule.get_split().unwrap();
    assert_eq!(feature, 0);
}

#[test]
fn tree_depth_two_fits_step_exactly() {
    let x = array![[0.0], [1.0], [2.0], [3.0]];
    let y = array![0.0, 0.0, 10.0, 10.0];

    let mut tree = DecisionTreeRegressor::new(TreeParams {
        depth: 2,
        ..Default::default()
    });
    tree.fit(x.view(), y.view(), 0).unwrap();

    let predictions = tree.predict(x.view()).unwrap();
    assert_eq!(predictions, array![0.0, 0.0, 10.0, 10.0]);
}

#[test]
fn tree_depth_one_constant_target() {
    let x = array![[0.0], [1.0], [2.0]];
    let y = array![7.0, 7.0, 7.0];

    let mut tree = DecisionTreeRegressor::default();
    tree.fit(x.view(), y.view(), 0).unwrap();

    let predictions = tree.predict(x.view()).unwrap();
    assert_all_close(predictions.as_slice().unwrap(), &[7.0, 7.0, 7.0], DEFAULT_TOLERANCE);
}

#[test]
fn ensemble_zero_iterations_predicts_mean() {
    let x = array![[0.0], [1.0]];
    let y = array![2.0, 8.0];

    let mut gbm = GradientBoostingRegressor::new(BoostingParams {
        learning_rate: 0.1,
        iterations: 0,
        ..Default::default()
    });
    gbm.fit(x.view(), y.view(), 0).unwrap();

    let predictions = gbm.predict(x.view()).unwrap();
    assert_all_close(predictions.as_slice().unwrap(), &[5.0, 5.0], DEFAULT_TOLERANCE);
}

#[test]
fn ensemble_converges_toward_step() {
    let x = array![[0.0], [1.0], [2.0], [3.0]];
    let y = array![0.0, 0.0, 10.0, 10.0];

    let mut gbm = GradientBoostingRegressor::new(BoostingParams {
        tree: TreeParams {
            depth: 1,
            rule: RuleParams {
                strategy: SplitStrategy::Mean,
                split_iterations: 1,
            },
        },
        learning_rate: 0.5,
        iterations: 50,
        ..Default::default()
    });
    gbm.fit(x.view(), y.view(), 0).unwrap();

    let predictions = gbm.predict(x.view()).unwrap();
    let total_error: f64 = predictions
        .iter()
        .zip(y.iter())
        .map(|(p, t)| (p - t).abs())
        .sum();
    assert!(total_error < 0.1, "total error {total_error} too large");
}

#[test]
fn all_strategies_fit_and_predict() {
    let x = array![[0.0], [1.0], [2.0], [3.0], [4.0], [5.0]];
    let y = array![0.0, 1.0, 1.0, 6.0, 8.0, 9.0];

    for strategy in [
        SplitStrategy::Mean,
        SplitStrategy::Uniform,
        SplitStrategy::TruncatedNormal,
        SplitStrategy::Median,
        SplitStrategy::Best,
    ] {
        let mut tree = DecisionTreeRegressor::new(TreeParams {
            depth: 2,
            rule: RuleParams {
                strategy,
                split_iterations: 1,
            },
        });
        tree.fit(x.view(), y.view(), 9).unwrap();
        let predictions = tree.predict(x.view()).unwrap();
        assert_eq!(predictions.len(), 6);
        // A fitted tree can only predict target means of subsets.
        for p in predictions {
            assert!((0.0..=9.0).contains(&p), "{strategy:?} predicted {p}");
        }
    }
}

#[test]
fn errors_surface_through_the_facade() {
    let x = array![[0.0], [1.0]];
    let y = array![0.0, 1.0];

    let unfitted = GradientBoostingRegressor::default();
    assert_eq!(unfitted.predict(x.view()), Err(GroveError::NotFitted));

    let mut bad_depth = DecisionTreeRegressor::new(TreeParams {
        depth: 0,
        ..Default::default()
    });
    assert_eq!(
        bad_depth.fit(x.view(), y.view(), 0),
        Err(GroveError::InvalidDepth(0))
    );

    let mut mismatched = DecisionRuleRegressor::default();
    let short_y = array![0.0];
    assert!(matches!(
        mismatched.fit(x.view(), short_y.view(), 0),
        Err(GroveError::ShapeMismatch { .. })
    ));
}
