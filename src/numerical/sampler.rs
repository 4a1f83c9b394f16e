//! Expression-to-curve sampler.
//!
//! A text expression in one variable `x` is parsed once, then evaluated at every point of an
//! evenly spaced grid. A point whose evaluation fails (division by zero, `sqrt` of a negative
//! number ...) or whose value is not finite or leaves the codomain becomes a hole (`None`).
//! The failure of one point never aborts the sampling.
use crate::solve_result::{SolveError, SolveResult};
use crate::symbolic::symbolic_engine::Expr;
use log::{debug, info};

/// number of intervals of the grid, the sampler returns SAMPLE_INTERVALS + 1 points
pub const SAMPLE_INTERVALS: usize = 1000;
/// name of the free variable of sampled expressions
pub const SAMPLE_VARIABLE: &str = "x";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// grid of `intervals + 1` points, x_i = x_min + (x_max - x_min)*i/intervals
pub fn grid(domain: (f64, f64), intervals: usize) -> Vec<f64> {
    let (x_min, x_max) = domain;
    let span = x_max - x_min;
    (0..=intervals)
        .map(|i| {
            if intervals == 0 {
                x_min
            } else {
                x_min + span * (i as f64) / (intervals as f64)
            }
        })
        .collect()
}

/// samples `expression` on [x_min, x_max] with the default number of intervals
pub fn sample(
    expression: &str,
    domain: (f64, f64),
    codomain: (f64, f64),
) -> SolveResult<Vec<Option<Point>>> {
    sample_with(expression, domain, codomain, SAMPLE_INTERVALS)
}

pub fn sample_with(
    expression: &str,
    domain: (f64, f64),
    codomain: (f64, f64),
    intervals: usize,
) -> SolveResult<Vec<Option<Point>>> {
    let bounds = [domain.0, domain.1, codomain.0, codomain.1];
    if bounds.iter().any(|b| !b.is_finite()) {
        return SolveResult::NotEnoughInput;
    }
    if domain.0 > domain.1 {
        return SolveResult::Error(SolveError::InvalidRange {
            start: domain.0,
            end: domain.1,
        });
    }
    if codomain.0 > codomain.1 {
        return SolveResult::Error(SolveError::InvalidRange {
            start: codomain.0,
            end: codomain.1,
        });
    }
    let parsed = match Expr::parse_expression(expression) {
        Ok(parsed) => parsed,
        Err(e) => return SolveResult::Error(SolveError::Parse(e)),
    };
    let f = match parsed.lambdify1D(SAMPLE_VARIABLE) {
        Ok(f) => f,
        Err(e) => return SolveResult::Error(SolveError::Parse(e)),
    };
    let (y_min, y_max) = codomain;
    let mut holes = 0;
    let samples: Vec<Option<Point>> = grid(domain, intervals)
        .into_iter()
        .map(|x| match f(x) {
            Ok(y) if y.is_finite() && y >= y_min && y <= y_max => Some(Point { x, y }),
            Ok(_) => {
                holes += 1;
                None
            }
            Err(e) => {
                debug!("hole at x = {}: {}", x, e);
                holes += 1;
                None
            }
        })
        .collect();
    info!(
        "sampled {} on [{}, {}]: {} points, {} holes",
        parsed,
        domain.0,
        domain.1,
        samples.len(),
        holes
    );
    SolveResult::Value(samples)
}
