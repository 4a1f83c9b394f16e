//! Quadratic equations, 2x2 linear systems by Cramer's rule, and the (not implemented)
//! rational equations.
use crate::require;
use crate::solve_result::SolveResult;
use log::{info, warn};
use num_complex::Complex;

/// a 2x2 determinant counts as zero when |det| is below this fraction of the magnitude of
/// its two products
pub const DETERMINANT_TOLERANCE: f64 = 1e-12;

/// |p - q| negligible next to |p| + |q|; also true when both products are zero
fn vanishes(p: f64, q: f64) -> bool {
    (p - q).abs() <= DETERMINANT_TOLERANCE * (p.abs() + q.abs())
}

/// ax² + bx + c = 0
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuadraticEquation {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
}

impl QuadraticEquation {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        QuadraticEquation {
            a: Some(a),
            b: Some(b),
            c: Some(c),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Roots {
    /// discriminant is zero (or the equation degenerated to a linear one)
    Single(f64),
    /// two distinct real roots, smaller first
    Two(f64, f64),
}

/// a1·x + b1·y = c1, a2·x + b2·y = c2
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearSystem2 {
    pub a1: Option<f64>,
    pub b1: Option<f64>,
    pub c1: Option<f64>,
    pub a2: Option<f64>,
    pub b2: Option<f64>,
    pub c2: Option<f64>,
}

impl LinearSystem2 {
    pub fn new(a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64) -> Self {
        LinearSystem2 {
            a1: Some(a1),
            b1: Some(b1),
            c1: Some(c1),
            a2: Some(a2),
            b2: Some(b2),
            c2: Some(c2),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearSolution {
    pub x: f64,
    pub y: f64,
}

/// b·x + c = 0
fn solve_linear(b: f64, c: f64) -> SolveResult<Roots> {
    if b == 0.0 {
        if c == 0.0 {
            SolveResult::InfiniteSolutions
        } else {
            SolveResult::NoSolution
        }
    } else {
        SolveResult::Value(Roots::Single(-c / b))
    }
}

/// Real roots of ax² + bx + c = 0 by the discriminant D = b² - 4ac.
///
/// D < 0 gives `NoSolution`, D = 0 a single root -b/2a, D > 0 two roots ordered
/// smaller first. With a = 0 the equation is solved as bx + c = 0.
pub fn solve_quadratic(eq: &QuadraticEquation) -> SolveResult<Roots> {
    let [a, b, c] = require!(eq.a, eq.b, eq.c);
    if a == 0.0 {
        warn!("leading coefficient is zero, solving {}x + {} = 0 instead", b, c);
        return solve_linear(b, c);
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        info!("discriminant {} < 0, no real roots", discriminant);
        return SolveResult::NoSolution;
    }
    if discriminant == 0.0 {
        return SolveResult::Value(Roots::Single(-b / (2.0 * a)));
    }
    let sqrt_d = discriminant.sqrt();
    let x1 = (-b - sqrt_d) / (2.0 * a);
    let x2 = (-b + sqrt_d) / (2.0 * a);
    SolveResult::Value(Roots::Two(x1.min(x2), x1.max(x2)))
}

/// Both roots of the quadratic over the complex numbers, for D < 0 a conjugate pair.
pub fn solve_quadratic_complex(eq: &QuadraticEquation) -> SolveResult<(Complex<f64>, Complex<f64>)> {
    let [a, b, c] = require!(eq.a, eq.b, eq.c);
    if a == 0.0 {
        return solve_linear(b, c).map(|roots| match roots {
            Roots::Single(x) => (Complex::new(x, 0.0), Complex::new(x, 0.0)),
            Roots::Two(x1, x2) => (Complex::new(x1, 0.0), Complex::new(x2, 0.0)),
        });
    }
    let discriminant = Complex::new(b * b - 4.0 * a * c, 0.0);
    let sqrt_d = discriminant.sqrt();
    let two_a = Complex::new(2.0 * a, 0.0);
    let minus_b = Complex::new(-b, 0.0);
    SolveResult::Value(((minus_b - sqrt_d) / two_a, (minus_b + sqrt_d) / two_a))
}

/// Cramer's rule for a 2x2 system.
///
/// With a zero determinant the system is either dependent (`InfiniteSolutions`) or
/// inconsistent (`NoSolution`): it is dependent when both Cramer numerators vanish as well
/// and no equation reads 0 = c with c ≠ 0.
pub fn solve_linear_system(system: &LinearSystem2) -> SolveResult<LinearSolution> {
    let [a1, b1, c1, a2, b2, c2] = require!(
        system.a1, system.b1, system.c1, system.a2, system.b2, system.c2
    );
    let determinant = a1 * b2 - a2 * b1;
    let det_x = c1 * b2 - c2 * b1;
    let det_y = a1 * c2 - a2 * c1;
    if vanishes(a1 * b2, a2 * b1) {
        let contradiction =
            (a1 == 0.0 && b1 == 0.0 && c1 != 0.0) || (a2 == 0.0 && b2 == 0.0 && c2 != 0.0);
        let consistent =
            vanishes(c1 * b2, c2 * b1) && vanishes(a1 * c2, a2 * c1) && !contradiction;
        info!(
            "zero determinant, system is {}",
            if consistent { "dependent" } else { "inconsistent" }
        );
        return if consistent {
            SolveResult::InfiniteSolutions
        } else {
            SolveResult::NoSolution
        };
    }
    SolveResult::Value(LinearSolution {
        x: det_x / determinant,
        y: det_y / determinant,
    })
}

/// numerator(x) / denominator(x) = 0
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RationalEquation {
    pub numerator: String,
    pub denominator: String,
}

/// rational equations need symbolic simplification of rational expressions
pub fn solve_rational(_eq: &RationalEquation) -> SolveResult<Vec<f64>> {
    SolveResult::Unsupported("rational equations")
}
