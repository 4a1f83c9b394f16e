//! Local extrema and inflection points of polynomials up to degree 3.
//!
//! Critical points are the roots of p'(x) = 0 found by the quadratic solver, so the first
//! derivative must have degree 2 or less. Each critical point is classified by the sign of
//! p''(x): negative - maximum, positive - minimum, zero - stationary point without extremum.
use crate::algebra::equations::{QuadraticEquation, Roots, solve_quadratic};
use crate::algebra::polynomial::Polynomial;
use crate::calculus::derivative::differentiate;
use crate::numerical::sampler::Point;
use crate::solve_result::{SolveError, SolveResult};
use log::info;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extrema {
    pub maxima: Vec<Point>,
    pub minima: Vec<Point>,
    /// p'(x) = 0 and p''(x) = 0
    pub stationary: Vec<Point>,
    pub inflections: Vec<Point>,
}

/// real roots of a polynomial whose combined degree is at most 2
fn low_degree_roots(p: &Polynomial) -> SolveResult<Vec<f64>> {
    let eq = QuadraticEquation::new(p.coefficient(2), p.coefficient(1), p.coefficient(0));
    match solve_quadratic(&eq) {
        SolveResult::Value(Roots::Single(x)) => SolveResult::Value(vec![x]),
        SolveResult::Value(Roots::Two(x1, x2)) => SolveResult::Value(vec![x1, x2]),
        SolveResult::NoSolution | SolveResult::InfiniteSolutions => SolveResult::Value(Vec::new()),
        SolveResult::NotEnoughInput => SolveResult::NotEnoughInput,
        SolveResult::Unsupported(f) => SolveResult::Unsupported(f),
        SolveResult::Error(e) => SolveResult::Error(e),
    }
}

/// `domain` limits the reported points to [start, end]
pub fn find_extrema(polynomial: &Polynomial, domain: Option<(f64, f64)>) -> SolveResult<Extrema> {
    if let Some((start, end)) = domain {
        if start > end {
            return SolveResult::Error(SolveError::InvalidRange { start, end });
        }
    }
    let p = polynomial.combined();
    if !polynomial.is_well_formed() || polynomial.is_empty() {
        return SolveResult::NotEnoughInput;
    }
    let d1 = match differentiate(&p) {
        SolveResult::Value(d1) => d1.combined(),
        // constant polynomial, every point is stationary
        _ => return SolveResult::InfiniteSolutions,
    };
    if d1.is_empty() {
        return SolveResult::InfiniteSolutions;
    }
    if d1.degree().unwrap_or(0) > 2 {
        return SolveResult::Unsupported("extrema of polynomials above degree 3");
    }
    let d2 = differentiate(&d1).into_value().unwrap_or_default().combined();
    let inside = |x: &f64| domain.is_none_or(|(start, end)| *x >= start && *x <= end);
    let at = |x: f64| Point {
        x,
        y: p.evaluate(x),
    };

    let critical = match low_degree_roots(&d1) {
        SolveResult::Value(roots) => roots,
        other => return other.map(|_| Extrema::default()),
    };
    let mut extrema = Extrema::default();
    for x in critical.into_iter().filter(inside) {
        let curvature = d2.evaluate(x);
        if curvature < 0.0 {
            extrema.maxima.push(at(x));
        } else if curvature > 0.0 {
            extrema.minima.push(at(x));
        } else {
            extrema.stationary.push(at(x));
        }
    }
    // p'' of degree 1 changes sign at its root
    if d2.degree() == Some(1) {
        let x = -d2.coefficient(0) / d2.coefficient(1);
        if inside(&x) {
            extrema.inflections.push(at(x));
        }
    }
    info!(
        "{}: {} maxima, {} minima, {} inflection points",
        p,
        extrema.maxima.len(),
        extrema.minima.len(),
        extrema.inflections.len()
    );
    SolveResult::Value(extrema)
}
