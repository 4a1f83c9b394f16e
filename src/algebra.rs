/// Quadratic equations, 2x2 linear systems by Cramer's rule, complex roots
///# Example
/// ```
/// use RustedSolvers::algebra::equations::{solve_quadratic, QuadraticEquation, Roots};
/// use RustedSolvers::solve_result::SolveResult;
/// let res = solve_quadratic(&QuadraticEquation::new(1.0, 0.0, -4.0));
/// assert_eq!(res, SolveResult::Value(Roots::Two(-2.0, 2.0)));
/// ```
pub mod equations;
/// linear, quadratic, absolute-value and rational inequalities, solutions as unions of intervals
///# Example
/// ```
/// use RustedSolvers::algebra::inequalities::{solve_quadratic, InequalitySign};
/// let set = solve_quadratic(1.0, 0.0, -4.0, InequalitySign::Less).into_value().unwrap();
/// assert_eq!(set.to_string(), "(-2, 2)");
/// ```
pub mod inequalities;
/// matrix addition, multiplication and determinant (cofactor expansion)
///# Example
/// ```
/// use RustedSolvers::algebra::matrix::Matrix;
/// use RustedSolvers::solve_result::SolveResult;
/// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.determinant(), SolveResult::Value(-2.0));
/// ```
pub mod matrix;
/// term-list polynomials
pub mod polynomial;
/// arithmetic and geometric sequences: n-th term and partial sums
///# Example
/// ```
/// use RustedSolvers::algebra::sequences::{sum, SequenceInput, SequenceKind};
/// use RustedSolvers::solve_result::SolveResult;
/// let input = SequenceInput::new(SequenceKind::Geometric, 5.0, 1.0, 4);
/// assert_eq!(sum(&input), SolveResult::Value(20.0));
/// ```
pub mod sequences;
