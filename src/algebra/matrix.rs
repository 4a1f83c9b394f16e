//! Dense matrices of f64 for the matrix calculator: add, multiply, determinant.
//!
//! The storage is a nalgebra `DMatrix`, so the shape always travels with the data and rows
//! cannot be jagged. Contract violations (shape mismatch, non-square input) come back as
//! `SolveResult::Error`, never as a panic.
use crate::solve_result::{SolveError, SolveResult};
use log::{info, warn};
use nalgebra::DMatrix;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// above this order the Laplace expansion (n! products) is replaced by LU factorization
pub const COFACTOR_MAX_ORDER: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: DMatrix::zeros(rows, cols),
        }
    }

    /// rows of equal length, an empty slice gives the 0x0 matrix
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, SolveError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.iter().any(|r| r.len() != n_cols) {
            return Err(SolveError::JaggedRows);
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Ok(Matrix {
            data: DMatrix::from_row_slice(n_rows, n_cols, &flat),
        })
    }

    pub fn from_dmatrix(data: DMatrix<f64>) -> Self {
        Matrix { data }
    }

    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data.get((i, j)).copied()
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), String> {
        match self.data.get_mut((i, j)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(format!(
                "cell ({}, {}) is outside of a {}x{} matrix",
                i,
                j,
                self.rows(),
                self.cols()
            )),
        }
    }

    /// changes the shape; previous entries are discarded and the matrix is zero-filled
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.data = DMatrix::zeros(rows, cols);
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    pub fn add(&self, other: &Matrix) -> SolveResult<Matrix> {
        if self.shape() != other.shape() {
            return SolveResult::Error(SolveError::SizeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        SolveResult::Value(Matrix {
            data: &self.data + &other.data,
        })
    }

    pub fn multiply(&self, other: &Matrix) -> SolveResult<Matrix> {
        if self.cols() != other.rows() {
            return SolveResult::Error(SolveError::DimensionMismatch {
                left_cols: self.cols(),
                right_rows: other.rows(),
            });
        }
        let (n, m, p) = (self.rows(), self.cols(), other.cols());
        let mut product = DMatrix::zeros(n, p);
        for i in 0..n {
            for j in 0..p {
                let mut acc = 0.0;
                for k in 0..m {
                    acc += self.data[(i, k)] * other.data[(k, j)];
                }
                product[(i, j)] = acc;
            }
        }
        SolveResult::Value(Matrix { data: product })
    }

    pub fn determinant(&self) -> SolveResult<f64> {
        if self.is_empty() {
            return SolveResult::NotEnoughInput;
        }
        if self.rows() != self.cols() {
            return SolveResult::Error(SolveError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        if self.rows() > COFACTOR_MAX_ORDER {
            info!(
                "order {} > {}, determinant by LU factorization",
                self.rows(),
                COFACTOR_MAX_ORDER
            );
            return SolveResult::Value(self.data.clone().lu().determinant());
        }
        SolveResult::Value(cofactor_determinant(&self.data))
    }

    /// the square check runs first so a wrong shape is still reported as an error
    pub fn inverse(&self) -> SolveResult<Matrix> {
        if self.rows() != self.cols() {
            return SolveResult::Error(SolveError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        SolveResult::Unsupported("matrix inverse")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows: Vec<String> = self
            .to_rows()
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                format!("[{}]", cells.join(", "))
            })
            .collect();
        write!(f, "[{}]", rows.join(", "))
    }
}

/// copy of `m` without the given row and column
pub fn minor(m: &DMatrix<f64>, row: usize, col: usize) -> DMatrix<f64> {
    m.clone().remove_row(row).remove_column(col)
}

/// Laplace expansion along the first row
fn cofactor_determinant(m: &DMatrix<f64>) -> f64 {
    match m.nrows() {
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        n => {
            let mut det = 0.0;
            for i in 0..n {
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                det += sign * m[(0, i)] * cofactor_determinant(&minor(m, 0, i));
            }
            det
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MatrixOperation {
    Add,
    Multiply,
    Determinant,
    Inverse,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MatrixOutcome {
    Matrix(Matrix),
    Determinant(f64),
}

impl MatrixOperation {
    pub fn needs_second_operand(&self) -> bool {
        matches!(self, MatrixOperation::Add | MatrixOperation::Multiply)
    }

    pub fn calculate(&self, a: &Matrix, b: Option<&Matrix>) -> SolveResult<MatrixOutcome> {
        if self.needs_second_operand() && b.is_none() {
            warn!("{} needs two matrices", self);
            return SolveResult::NotEnoughInput;
        }
        match (self, b) {
            (MatrixOperation::Add, Some(b)) => a.add(b).map(MatrixOutcome::Matrix),
            (MatrixOperation::Multiply, Some(b)) => a.multiply(b).map(MatrixOutcome::Matrix),
            (MatrixOperation::Determinant, _) => a.determinant().map(MatrixOutcome::Determinant),
            (MatrixOperation::Inverse, _) => a.inverse().map(MatrixOutcome::Matrix),
            _ => SolveResult::NotEnoughInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use itertools::Itertools;
    use rand::Rng;
    use std::str::FromStr;

    fn m(rows: &[&[f64]]) -> Matrix {
        let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::from_rows(&rows).unwrap()
    }

    /// Leibniz formula: sum over permutations of sign(σ)·Π m[i][σ(i)]
    fn permutation_determinant(a: &DMatrix<f64>) -> f64 {
        let n = a.nrows();
        (0..n)
            .permutations(n)
            .map(|perm| {
                let inversions = perm
                    .iter()
                    .tuple_combinations()
                    .filter(|(x, y)| x > y)
                    .count();
                let sign = if inversions % 2 == 0 { 1.0 } else { -1.0 };
                sign * perm.iter().enumerate().map(|(i, &j)| a[(i, j)]).product::<f64>()
            })
            .sum()
    }

    fn expand_along_row(a: &DMatrix<f64>, r: usize) -> f64 {
        (0..a.ncols())
            .map(|j| {
                let sign = if (r + j) % 2 == 0 { 1.0 } else { -1.0 };
                sign * a[(r, j)] * cofactor_determinant(&minor(a, r, j))
            })
            .sum()
    }

    fn expand_along_col(a: &DMatrix<f64>, c: usize) -> f64 {
        (0..a.nrows())
            .map(|i| {
                let sign = if (i + c) % 2 == 0 { 1.0 } else { -1.0 };
                sign * a[(i, c)] * cofactor_determinant(&minor(a, i, c))
            })
            .sum()
    }

    #[test]
    fn test_small_determinants() {
        assert_eq!(m(&[&[1.0, 0.0], &[0.0, 1.0]]).determinant(), SolveResult::Value(1.0));
        assert_eq!(m(&[&[1.0, 2.0], &[3.0, 4.0]]).determinant(), SolveResult::Value(-2.0));
        assert_eq!(m(&[&[7.0]]).determinant(), SolveResult::Value(7.0));
        let a = m(&[&[2.0, 0.0, 1.0], &[1.0, 3.0, 2.0], &[1.0, 1.0, 1.0]]);
        assert_relative_eq!(a.determinant().into_value().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_random_determinants_agree_with_reference() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let a = DMatrix::from_fn(3, 3, |_, _| rng.random_range(-10.0..10.0));
            let reference = permutation_determinant(&a);
            let det = Matrix::from_dmatrix(a.clone()).determinant().into_value().unwrap();
            assert_relative_eq!(det, reference, epsilon = 1e-9, max_relative = 1e-9);
            for k in 0..3 {
                assert_relative_eq!(expand_along_row(&a, k), reference, epsilon = 1e-9, max_relative = 1e-9);
                assert_relative_eq!(expand_along_col(&a, k), reference, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_large_order_uses_lu() {
        let a = Matrix::from_dmatrix(DMatrix::from_diagonal_element(10, 10, 2.0));
        assert_relative_eq!(a.determinant().into_value().unwrap(), 1024.0, epsilon = 1e-9);
    }

    #[test]
    fn test_determinant_contracts() {
        let rect = Matrix::zeros(2, 3);
        assert_eq!(
            rect.determinant(),
            SolveResult::Error(SolveError::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(Matrix::zeros(0, 0).determinant(), SolveResult::NotEnoughInput);
        assert!(matches!(rect.inverse(), SolveResult::Error(_)));
        assert_eq!(Matrix::zeros(2, 2).inverse(), SolveResult::Unsupported("matrix inverse"));
    }

    #[test]
    fn test_add() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[10.0, 20.0], &[30.0, 40.0]]);
        let sum = a.add(&b).into_value().unwrap();
        assert_eq!(sum.to_rows(), vec![vec![11.0, 22.0], vec![33.0, 44.0]]);
        let c = Matrix::zeros(3, 2);
        assert_eq!(
            a.add(&c),
            SolveResult::Error(SolveError::SizeMismatch {
                left: (2, 2),
                right: (3, 2)
            })
        );
    }

    #[test]
    fn test_random_add_is_elementwise() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let (rows, cols) = (rng.random_range(1..6), rng.random_range(1..6));
            let a = DMatrix::from_fn(rows, cols, |_, _| rng.random_range(-100.0..100.0));
            let b = DMatrix::from_fn(rows, cols, |_, _| rng.random_range(-100.0..100.0));
            let sum = Matrix::from_dmatrix(a.clone())
                .add(&Matrix::from_dmatrix(b.clone()))
                .into_value()
                .unwrap();
            assert_eq!(sum.shape(), (rows, cols));
            for i in 0..rows {
                for j in 0..cols {
                    assert_eq!(sum.get(i, j), Some(a[(i, j)] + b[(i, j)]));
                }
            }
            let wider = Matrix::zeros(rows, cols + 1);
            assert!(matches!(
                Matrix::from_dmatrix(a).add(&wider),
                SolveResult::Error(SolveError::SizeMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_multiply() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
        let p = a.multiply(&b).into_value().unwrap();
        assert_eq!(p.shape(), (2, 2));
        assert_eq!(p.to_rows(), vec![vec![58.0, 64.0], vec![139.0, 154.0]]);
        assert_eq!(
            a.multiply(&a),
            SolveResult::Error(SolveError::DimensionMismatch {
                left_cols: 3,
                right_rows: 2
            })
        );
    }

    #[test]
    fn test_rows_and_resize() {
        let jagged = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(Matrix::from_rows(&jagged), Err(SolveError::JaggedRows));
        let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        a.set(0, 1, 5.0).unwrap();
        assert_eq!(a.get(0, 1), Some(5.0));
        assert!(a.set(2, 0, 1.0).is_err());
        a.resize(3, 1);
        assert_eq!(a.to_rows(), vec![vec![0.0], vec![0.0], vec![0.0]]);
        assert_eq!(a.to_string(), "[[0], [0], [0]]");
    }

    #[test]
    fn test_operation_dispatch() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let op = MatrixOperation::from_str("determinant").unwrap();
        assert_eq!(op.calculate(&a, None), SolveResult::Value(MatrixOutcome::Determinant(-2.0)));
        assert_eq!(MatrixOperation::Add.calculate(&a, None), SolveResult::NotEnoughInput);
        assert!(matches!(
            MatrixOperation::Multiply.calculate(&a, Some(&a)),
            SolveResult::Value(MatrixOutcome::Matrix(_))
        ));
    }
}
