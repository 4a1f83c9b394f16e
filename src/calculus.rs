/// power rule differentiation of term-list polynomials
///# Example
/// ```
/// use RustedSolvers::algebra::polynomial::Polynomial;
/// use RustedSolvers::calculus::derivative::differentiate;
/// let p = Polynomial::from_pairs(&[(3.0, 2), (2.0, 1), (-1.0, 0)]);
/// let d = differentiate(&p).into_value().unwrap();
/// assert_eq!(d.to_string(), "6x + 2");
/// ```
pub mod derivative;
/// indefinite and definite integrals of term-list polynomials
///# Example
/// ```
/// use RustedSolvers::algebra::polynomial::Polynomial;
/// use RustedSolvers::calculus::integral::integrate_definite;
/// use RustedSolvers::solve_result::SolveResult;
/// let p = Polynomial::from_pairs(&[(3.0, 2)]);
/// assert_eq!(integrate_definite(&p, Some(0.0), Some(2.0)), SolveResult::Value(8.0));
/// ```
pub mod integral;
pub mod limits;
/// maxima, minima and inflection points of polynomials of degree ≤ 3
pub mod optimization;
