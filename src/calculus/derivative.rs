use crate::algebra::polynomial::{Polynomial, Term};
use crate::solve_result::SolveResult;
use log::debug;

/// power rule applied term by term: c·x^p → (c·p)·x^(p-1)
///
/// Terms whose new coefficient is zero (the constants) are dropped; like powers are not
/// combined. An empty polynomial or a non-finite coefficient is `NotEnoughInput`.
pub fn differentiate(polynomial: &Polynomial) -> SolveResult<Polynomial> {
    if polynomial.is_empty() || !polynomial.is_well_formed() {
        return SolveResult::NotEnoughInput;
    }
    let terms: Vec<Term> = polynomial
        .terms
        .iter()
        .map(|t| Term::new(t.coefficient * t.power as f64, t.power.saturating_sub(1)))
        .filter(|t| t.coefficient != 0.0)
        .collect();
    debug!("d/dx ({}) = {}", polynomial, Polynomial::new(terms.clone()));
    SolveResult::Value(Polynomial::new(terms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_rule() {
        let p = Polynomial::from_pairs(&[(3.0, 2), (2.0, 1), (-1.0, 0)]);
        let d = differentiate(&p).into_value().unwrap();
        assert_eq!(d, Polynomial::from_pairs(&[(6.0, 1), (2.0, 0)]));
        assert_eq!(d.to_string(), "6x + 2");
    }

    #[test]
    fn test_like_powers_stay_apart() {
        let p = Polynomial::from_pairs(&[(1.0, 2), (1.0, 2)]);
        let d = differentiate(&p).into_value().unwrap();
        assert_eq!(d.terms.len(), 2);
    }

    #[test]
    fn test_constant_vanishes() {
        let p = Polynomial::from_pairs(&[(5.0, 0)]);
        assert_eq!(differentiate(&p), SolveResult::Value(Polynomial::default()));
        assert_eq!(differentiate(&Polynomial::default()), SolveResult::NotEnoughInput);
    }
}
