//! # Solve results
//!
//! Every engine of the crate answers with a [`SolveResult`]: either a value or one of the
//! non-success tags. A caller must never confuse one tag with another:
//! - `NotEnoughInput` - some field the solver needs is still absent (expected while a form is being filled)
//! - `NoSolution` / `InfiniteSolutions` - valid mathematical outcomes, not failures
//! - `Unsupported` - the operation exists in the interface but is not implemented
//! - `Error` - a domain violation or a shape contract violation, see [`SolveError`]
use std::fmt;

/// Tagged result of a single computation.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveResult<T> {
    /// a required field is absent (None or NaN)
    NotEnoughInput,
    /// the problem is well posed and has no (real) solution
    NoSolution,
    /// every value of the unknown satisfies the problem
    InfiniteSolutions,
    /// the operation is not implemented, carries the feature name
    Unsupported(&'static str),
    /// domain or contract violation converted into a result
    Error(SolveError),
    Value(T),
}

/// Failures that are converted into `SolveResult::Error` instead of propagating.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// matrices must have the same shape: (rows, cols) of left and right operand
    SizeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// number of columns of the left operand differs from number of rows of the right one
    DimensionMismatch { left_cols: usize, right_rows: usize },
    /// operation needs a square matrix
    NotSquare { rows: usize, cols: usize },
    /// rows of different length were given for one matrix
    JaggedRows,
    /// argument outside of the domain of a formula (asin of 1.2, negative length etc.)
    Domain(String),
    /// lower end of a range is greater than the upper one
    InvalidRange { start: f64, end: f64 },
    /// text could not be turned into an expression
    Parse(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::SizeMismatch { left, right } => write!(
                f,
                "size mismatch: {}x{} and {}x{} matrices must have the same size",
                left.0, left.1, right.0, right.1
            ),
            SolveError::DimensionMismatch {
                left_cols,
                right_rows,
            } => write!(
                f,
                "dimension mismatch: {} columns in the first matrix, {} rows in the second",
                left_cols, right_rows
            ),
            SolveError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {}x{}", rows, cols)
            }
            SolveError::JaggedRows => write!(f, "all matrix rows must have the same length"),
            SolveError::Domain(msg) => write!(f, "domain error: {}", msg),
            SolveError::InvalidRange { start, end } => {
                write!(f, "invalid range: start {} is greater than end {}", start, end)
            }
            SolveError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for SolveError {}

impl<T> SolveResult<T> {
    pub fn is_value(&self) -> bool {
        matches!(self, SolveResult::Value(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            SolveResult::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            SolveResult::Value(v) => Some(v),
            _ => None,
        }
    }

    /// transforms the payload, tags pass through unchanged
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> SolveResult<U> {
        match self {
            SolveResult::Value(v) => SolveResult::Value(f(v)),
            SolveResult::NotEnoughInput => SolveResult::NotEnoughInput,
            SolveResult::NoSolution => SolveResult::NoSolution,
            SolveResult::InfiniteSolutions => SolveResult::InfiniteSolutions,
            SolveResult::Unsupported(feature) => SolveResult::Unsupported(feature),
            SolveResult::Error(e) => SolveResult::Error(e),
        }
    }

    /// chains a computation that itself may end with a tag
    pub fn and_then<U, F: FnOnce(T) -> SolveResult<U>>(self, f: F) -> SolveResult<U> {
        match self {
            SolveResult::Value(v) => f(v),
            SolveResult::NotEnoughInput => SolveResult::NotEnoughInput,
            SolveResult::NoSolution => SolveResult::NoSolution,
            SolveResult::InfiniteSolutions => SolveResult::InfiniteSolutions,
            SolveResult::Unsupported(feature) => SolveResult::Unsupported(feature),
            SolveResult::Error(e) => SolveResult::Error(e),
        }
    }

    /// short name of the variant, used for reports and logs
    pub fn tag(&self) -> &'static str {
        match self {
            SolveResult::NotEnoughInput => "not enough input",
            SolveResult::NoSolution => "no solution",
            SolveResult::InfiniteSolutions => "infinite solutions",
            SolveResult::Unsupported(_) => "not yet implemented",
            SolveResult::Error(_) => "error",
            SolveResult::Value(_) => "value",
        }
    }

    pub fn domain_error(msg: impl Into<String>) -> Self {
        SolveResult::Error(SolveError::Domain(msg.into()))
    }
}

/// Returns all fields when every one of them is present and not NaN.
///
/// ```
/// use RustedSolvers::solve_result::present;
/// assert_eq!(present([Some(1.0), Some(2.0)]), Some([1.0, 2.0]));
/// assert_eq!(present([Some(1.0), None]), None);
/// assert_eq!(present([Some(f64::NAN)]), None);
/// ```
pub fn present<const N: usize>(fields: [Option<f64>; N]) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    for (slot, field) in out.iter_mut().zip(fields.iter()) {
        match field {
            Some(v) if !v.is_nan() => *slot = *v,
            _ => return None,
        }
    }
    Some(out)
}

/// Early return of `NotEnoughInput` when a field is missing
#[macro_export]
macro_rules! require {
    ($($field:expr),+ $(,)?) => {
        match $crate::solve_result::present([$($field),+]) {
            Some(values) => values,
            None => return $crate::solve_result::SolveResult::NotEnoughInput,
        }
    };
}
