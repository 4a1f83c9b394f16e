use crate::algebra::polynomial::{Polynomial, Term};
use crate::require;
use crate::solve_result::SolveResult;
use log::info;

/// antiderivative term by term, c·x^p → c/(p+1)·x^(p+1); the constant of integration is omitted
pub fn integrate_indefinite(polynomial: &Polynomial) -> SolveResult<Polynomial> {
    if polynomial.is_empty() || !polynomial.is_well_formed() {
        return SolveResult::NotEnoughInput;
    }
    let mut terms = Vec::with_capacity(polynomial.terms.len());
    for t in &polynomial.terms {
        let Some(power) = t.power.checked_add(1) else {
            return SolveResult::domain_error(format!(
                "x^{} has no antiderivative with a representable power",
                t.power
            ));
        };
        terms.push(Term::new(t.coefficient / (t.power as f64 + 1.0), power));
    }
    SolveResult::Value(Polynomial::new(terms))
}

/// F(upper) - F(lower) with F the antiderivative
pub fn integrate_definite(
    polynomial: &Polynomial,
    lower: Option<f64>,
    upper: Option<f64>,
) -> SolveResult<f64> {
    let [lower, upper] = require!(lower, upper);
    integrate_indefinite(polynomial).map(|antiderivative| {
        let value = antiderivative.evaluate(upper) - antiderivative.evaluate(lower);
        info!("∫[{}, {}] ({}) dx = {}", lower, upper, polynomial, value);
        value
    })
}
