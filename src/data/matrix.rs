//! Column-major feature matrix.

use ndarray::ArrayView2;

/// Column-major dense matrix for feature storage.
///
/// Stores each feature as a contiguous column of length `n_samples`, which
/// is the access pattern of split search: every candidate threshold scans a
/// single feature across the sample subset.
///
/// Built from a row-major host array; for row `r` and column `c`,
/// `matrix.column(c)[r] == X[r][c]`.
///
/// # Example
///
/// ```
/// use grove::data::ColumnMatrix;
/// use ndarray::array;
///
/// let x = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
/// let matrix = ColumnMatrix::from_array(x.view());
///
/// assert_eq!(matrix.n_samples(), 2);
/// assert_eq!(matrix.n_features(), 3);
/// assert_eq!(matrix.column(1), &[2.0, 5.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ColumnMatrix {
    data: Box<[f64]>,
    n_samples: usize,
    n_features: usize,
}

impl ColumnMatrix {
    /// Transpose a row-major `(n_samples, n_features)` view into columns.
    pub fn from_array(x: ArrayView2<'_, f64>) -> Self {
        let (n_samples, n_features) = x.dim();
        let mut data = vec![0.0; n_samples * n_features];
        for c in 0..n_features {
            let column = &mut data[c * n_samples..(c + 1) * n_samples];
            for (r, value) in x.column(c).iter().enumerate() {
                column[r] = *value;
            }
        }
        Self {
            data: data.into_boxed_slice(),
            n_samples,
            n_features,
        }
    }

    /// Create a matrix from already column-major data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != n_samples * n_features`.
    pub fn from_columns(data: Vec<f64>, n_samples: usize, n_features: usize) -> Self {
        assert_eq!(
            data.len(),
            n_samples * n_features,
            "Data length {} does not match dimensions {}x{}",
            data.len(),
            n_samples,
            n_features
        );
        Self {
            data: data.into_boxed_slice(),
            n_samples,
            n_features,
        }
    }

    /// Number of samples (rows of the host matrix).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Number of features (columns of the host matrix).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Contiguous values of one feature across all samples.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= n_features`.
    #[inline]
    pub fn column(&self, feature: usize) -> &[f64] {
        assert!(
            feature < self.n_features,
            "Feature index {} out of bounds",
            feature
        );
        &self.data[feature * self.n_samples..(feature + 1) * self.n_samples]
    }

    /// Value at `(sample, feature)`.
    #[inline]
    pub fn get(&self, sample: usize, feature: usize) -> f64 {
        self.column(feature)[sample]
    }
}
