//! Polynomials in x stored as an ordered list of terms `c·x^p`.
//!
//! The order of terms is only the order of display; like powers are kept apart unless
//! [`Polynomial::combined`] is asked for explicitly.
use crate::solve_result::SolveResult;
use crate::symbolic::symbolic_engine::Expr;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub power: u32,
}

impl Term {
    pub fn new(coefficient: f64, power: u32) -> Self {
        Term { coefficient, power }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match i32::try_from(self.power) {
            Ok(p) => self.coefficient * x.powi(p),
            Err(_) => self.coefficient * x.powf(self.power as f64),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    pub terms: Vec<Term>,
}

impl Polynomial {
    pub fn new(terms: Vec<Term>) -> Self {
        Polynomial { terms }
    }

    /// from (coefficient, power) pairs
    pub fn from_pairs(pairs: &[(f64, u32)]) -> Self {
        Polynomial {
            terms: pairs.iter().map(|&(c, p)| Term::new(c, p)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// every coefficient is a number (no NaN, no infinity)
    pub fn is_well_formed(&self) -> bool {
        self.terms.iter().all(|t| t.coefficient.is_finite())
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.evaluate(x)).sum()
    }

    /// highest power with a nonzero coefficient after combining like powers
    pub fn degree(&self) -> Option<u32> {
        self.combined().terms.first().map(|t| t.power)
    }

    /// like powers merged, zero terms dropped, powers in descending order
    pub fn combined(&self) -> Polynomial {
        let mut terms: Vec<Term> = Vec::new();
        for term in &self.terms {
            match terms.iter_mut().find(|t| t.power == term.power) {
                Some(t) => t.coefficient += term.coefficient,
                None => terms.push(*term),
            }
        }
        terms.retain(|t| t.coefficient != 0.0);
        terms.sort_by(|a, b| b.power.cmp(&a.power));
        Polynomial { terms }
    }

    /// coefficient of x^power in the combined polynomial
    pub fn coefficient(&self, power: u32) -> f64 {
        self.terms
            .iter()
            .filter(|t| t.power == power)
            .map(|t| t.coefficient)
            .sum()
    }

    /// text in the syntax of the expression parser, ready for the sampler
    pub fn to_expression(&self) -> String {
        if self.terms.is_empty() {
            return "0".to_string();
        }
        self.terms
            .iter()
            .map(|t| format!("({})*x^{}", t.coefficient, t.power))
            .collect::<Vec<_>>()
            .join(" + ")
    }

    pub fn to_expr(&self) -> Result<Expr, String> {
        Expr::parse_expression(&self.to_expression())
    }

    pub fn factorize(&self) -> SolveResult<Vec<Polynomial>> {
        SolveResult::Unsupported("polynomial factorization")
    }

    pub fn roots(&self) -> SolveResult<Vec<f64>> {
        SolveResult::Unsupported("polynomial roots")
    }

    pub fn divide(&self, _divisor: &Polynomial) -> SolveResult<(Polynomial, Polynomial)> {
        SolveResult::Unsupported("polynomial division")
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            let c = term.coefficient;
            if i == 0 {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else if c < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let abs = c.abs();
            match term.power {
                0 => write!(f, "{}", abs)?,
                p => {
                    if abs != 1.0 {
                        write!(f, "{}", abs)?;
                    }
                    if p == 1 {
                        write!(f, "x")?;
                    } else {
                        write!(f, "x^{}", p)?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_powers_beyond_i32() {
        let t = Term::new(2.0, i32::MAX as u32 + 1);
        assert_eq!(t.evaluate(0.5), 0.0);
        assert_eq!(t.evaluate(-1.0), 2.0);
        assert_eq!(Term::new(1.0, u32::MAX).evaluate(-1.0), -1.0);
        assert_eq!(Term::new(3.0, 2).evaluate(2.0), 12.0);
    }

    #[test]
    fn test_display() {
        let p = Polynomial::from_pairs(&[(3.0, 2), (2.0, 1), (-1.0, 0)]);
        assert_eq!(p.to_string(), "3x^2 + 2x - 1");
        let p = Polynomial::from_pairs(&[(-1.0, 3), (1.0, 1), (0.5, 0)]);
        assert_eq!(p.to_string(), "-x^3 + x + 0.5");
        assert_eq!(Polynomial::default().to_string(), "0");
    }

    #[test]
    fn test_evaluate_and_expression_agree() {
        let p = Polynomial::from_pairs(&[(3.0, 2), (-2.0, 1), (7.0, 0)]);
        assert_relative_eq!(p.evaluate(2.0), 15.0, epsilon = 1e-12);
        let expr = p.to_expr().unwrap();
        for x in [-3.0, -0.5, 0.0, 1.5, 4.0] {
            assert_relative_eq!(expr.eval1D("x", x).unwrap(), p.evaluate(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_combined() {
        let p = Polynomial::from_pairs(&[(1.0, 1), (2.0, 3), (4.0, 1), (-2.0, 3), (1.0, 0)]);
        let c = p.combined();
        assert_eq!(c, Polynomial::from_pairs(&[(5.0, 1), (1.0, 0)]));
        assert_eq!(p.degree(), Some(1));
        assert_eq!(p.coefficient(1), 5.0);
        assert_eq!(Polynomial::from_pairs(&[(0.0, 2)]).degree(), None);
    }

    #[test]
    fn test_symbolic_operations_are_unsupported() {
        let p = Polynomial::from_pairs(&[(1.0, 2), (-1.0, 0)]);
        assert!(matches!(p.factorize(), SolveResult::Unsupported(_)));
        assert!(matches!(p.roots(), SolveResult::Unsupported(_)));
        assert!(matches!(p.divide(&p), SolveResult::Unsupported(_)));
    }
}
