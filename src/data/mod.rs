//! Data layout for training and prediction.
//!
//! The engine works on a column-major copy of the host's row-major matrix:
//! split search scans one feature at a time across a row subset, so each
//! feature is stored as a contiguous column.

mod matrix;

pub use matrix::ColumnMatrix;
