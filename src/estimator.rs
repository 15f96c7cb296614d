//! Estimator façade over the core learners.
//!
//! The façade owns the boundary with host arrays: it validates shapes,
//! materializes the column view, and keeps the fitted state. Core modules
//! only ever see [`ColumnMatrix`] and target slices. A failed `fit` leaves
//! the previous state (fresh or fitted) untouched.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::data::ColumnMatrix;
use crate::ensemble::{BoostingParams, GradientBoosting};
use crate::error::GroveError;
use crate::tree::{DecisionRule, DecisionTree, RuleParams, TreeParams};

/// Common fit/predict surface of all estimators.
pub trait Estimator {
    /// Fit on `(x, y)` with a fixed seed, replacing any previous state.
    fn fit(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: ArrayView1<'_, f64>,
        seed: u32,
    ) -> Result<(), GroveError>;

    /// Predict one value per row of `x`.
    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, GroveError>;
}

fn check_fit_inputs(x: &ArrayView2<'_, f64>, y: &ArrayView1<'_, f64>) -> Result<(), GroveError> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(GroveError::EmptyInput);
    }
    if x.nrows() != y.len() {
        return Err(GroveError::ShapeMismatch {
            x_rows: x.nrows(),
            y_len: y.len(),
        });
    }
    Ok(())
}

fn check_predict_input(x: &ArrayView2<'_, f64>, n_features: usize) -> Result<(), GroveError> {
    if x.ncols() != n_features {
        return Err(GroveError::FeatureCountMismatch {
            expected: n_features,
            actual: x.ncols(),
        });
    }
    Ok(())
}

// =============================================================================
// DecisionRuleRegressor
// =============================================================================

/// One-level estimator: a single fitted split.
#[derive(Debug, Clone, Default)]
pub struct DecisionRuleRegressor {
    params: RuleParams,
    fitted: Option<Fitted<DecisionRule>>,
}

#[derive(Debug, Clone)]
struct Fitted<M> {
    model: M,
    n_features: usize,
}

impl DecisionRuleRegressor {
    pub fn new(params: RuleParams) -> Self {
        Self {
            params,
            fitted: None,
        }
    }

    /// The chosen `(threshold, feature)` pair.
    pub fn get_split(&self) -> Result<(f64, usize), GroveError> {
        let fitted = self.fitted.as_ref().ok_or(GroveError::NotFitted)?;
        let split = fitted.model.split();
        Ok((split.threshold, split.feature))
    }
}

impl Estimator for DecisionRuleRegressor {
    fn fit(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: ArrayView1<'_, f64>,
        seed: u32,
    ) -> Result<(), GroveError> {
        check_fit_inputs(&x, &y)?;
        self.params.validate()?;

        let columns = ColumnMatrix::from_array(x);
        let target = y.to_vec();
        let rows: Vec<u32> = (0..columns.n_samples() as u32).collect();
        let model = DecisionRule::fit(&columns, &target, &rows, &self.params, u64::from(seed));

        self.fitted = Some(Fitted {
            model,
            n_features: columns.n_features(),
        });
        Ok(())
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, GroveError> {
        let fitted = self.fitted.as_ref().ok_or(GroveError::NotFitted)?;
        check_predict_input(&x, fitted.n_features)?;

        let columns = ColumnMatrix::from_array(x);
        Ok(Array1::from_vec(fitted.model.predict(&columns)))
    }
}

// =============================================================================
// DecisionTreeRegressor
// =============================================================================

/// Fixed-depth decision tree estimator.
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeRegressor {
    params: TreeParams,
    fitted: Option<Fitted<DecisionTree>>,
}

impl DecisionTreeRegressor {
    pub fn new(params: TreeParams) -> Self {
        Self {
            params,
            fitted: None,
        }
    }

    /// The fitted tree, if any.
    pub fn tree(&self) -> Option<&DecisionTree> {
        self.fitted.as_ref().map(|f| &f.model)
    }
}

impl Estimator for DecisionTreeRegressor {
    fn fit(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: ArrayView1<'_, f64>,
        seed: u32,
    ) -> Result<(), GroveError> {
        check_fit_inputs(&x, &y)?;
        self.params.validate()?;

        let columns = ColumnMatrix::from_array(x);
        let target = y.to_vec();
        let model = DecisionTree::fit(&columns, &target, &self.params, u64::from(seed));

        self.fitted = Some(Fitted {
            model,
            n_features: columns.n_features(),
        });
        Ok(())
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, GroveError> {
        let fitted = self.fitted.as_ref().ok_or(GroveError::NotFitted)?;
        check_predict_input(&x, fitted.n_features)?;

        let columns = ColumnMatrix::from_array(x);
        Ok(Array1::from_vec(fitted.model.predict(&columns)))
    }
}

// =============================================================================
// GradientBoostingRegressor
// =============================================================================

/// Gradient-boosted tree ensemble estimator.
#[derive(Debug, Clone, Default)]
pub struct GradientBoostingRegressor {
    params: BoostingParams,
    fitted: Option<Fitted<GradientBoosting>>,
}

impl GradientBoostingRegressor {
    pub fn new(params: BoostingParams) -> Self {
        Self {
            params,
            fitted: None,
        }
    }

    /// The fitted ensemble, if any.
    pub fn ensemble(&self) -> Option<&GradientBoosting> {
        self.fitted.as_ref().map(|f| &f.model)
    }
}

impl Estimator for GradientBoostingRegressor {
    fn fit(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: ArrayView1<'_, f64>,
        seed: u32,
    ) -> Result<(), GroveError> {
        check_fit_inputs(&x, &y)?;
        self.params.validate()?;

        let columns = ColumnMatrix::from_array(x);
        let target = y.to_vec();
        let model = GradientBoosting::fit(&columns, &target, &self.params, u64::from(seed));

        self.fitted = Some(Fitted {
            model,
            n_features: columns.n_features(),
        });
        Ok(())
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, GroveError> {
        let fitted = self.fitted.as_ref().ok_or(GroveError::NotFitted)?;
        check_predict_input(&x, fitted.n_features)?;

        let columns = ColumnMatrix::from_array(x);
        Ok(Array1::from_vec(fitted.model.predict(&columns)))
    }
}
