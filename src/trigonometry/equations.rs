//! a·f(x) + b = c with f one of sin, cos, tan and x in degrees, solved inside [start, end].
use crate::require;
use crate::solve_result::{SolveError, SolveResult};
use log::info;
use strum_macros::{Display, EnumIter, EnumString};

/// solutions closer than this are the same solution
const DUPLICATE_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TrigFunction {
    Sin,
    Cos,
    #[strum(to_string = "tan", serialize = "tg")]
    Tan,
}

impl TrigFunction {
    /// in degrees
    pub fn period(&self) -> f64 {
        match self {
            TrigFunction::Tan => 180.0,
            _ => 360.0,
        }
    }

    pub fn apply(&self, degrees: f64) -> f64 {
        let x = degrees.to_radians();
        match self {
            TrigFunction::Sin => x.sin(),
            TrigFunction::Cos => x.cos(),
            TrigFunction::Tan => x.tan(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TrigEquationKind {
    /// a·f(x) + b = c
    #[default]
    Basic,
    Quadratic,
    Combined,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrigEquation {
    pub function: TrigFunction,
    pub kind: TrigEquationKind,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl TrigEquation {
    pub fn basic(function: TrigFunction, a: f64, b: f64, c: f64, start: f64, end: f64) -> Self {
        TrigEquation {
            function,
            kind: TrigEquationKind::Basic,
            a: Some(a),
            b: Some(b),
            c: Some(c),
            start: Some(start),
            end: Some(end),
        }
    }
}

/// The principal value of the inverse function and, for sin and cos, the second family
/// (180 - θ for sin, -θ for cos), in degrees.
pub fn principal_solutions(function: TrigFunction, a: f64, b: f64, c: f64) -> SolveResult<Vec<f64>> {
    if a == 0.0 {
        return if b == c {
            SolveResult::InfiniteSolutions
        } else {
            SolveResult::NoSolution
        };
    }
    let y = (c - b) / a;
    match function {
        TrigFunction::Sin | TrigFunction::Cos if y.abs() > 1.0 => {
            info!("{}(x) = {} is outside of [-1, 1]", function, y);
            SolveResult::NoSolution
        }
        TrigFunction::Sin => {
            let theta = y.asin().to_degrees();
            SolveResult::Value(vec![theta, 180.0 - theta])
        }
        TrigFunction::Cos => {
            let theta = y.acos().to_degrees();
            SolveResult::Value(vec![theta, -theta])
        }
        TrigFunction::Tan => SolveResult::Value(vec![y.atan().to_degrees()]),
    }
}

/// upper bound on the number of solutions listed for one equation
pub const MAX_SOLUTIONS: usize = 100_000;

/// Every member of the families θ + k·period inside [start, end], ascending and without
/// duplicates. A range holding more than [`MAX_SOLUTIONS`] members, or so far out that adding
/// one period no longer changes an angle, is an error.
pub fn fold_into_range(solutions: &[f64], period: f64, start: f64, end: f64) -> Result<Vec<f64>, String> {
    let mut in_range = Vec::new();
    for theta in solutions {
        // smallest member of the family not below start
        let first = start + (theta - start).rem_euclid(period);
        if first > end {
            continue;
        }
        if first + period == first {
            return Err(format!(
                "angles near {} are too large to tell periods of {} apart",
                first, period
            ));
        }
        let count = ((end - first) / period).floor() + 1.0;
        if count > MAX_SOLUTIONS as f64 {
            return Err(format!(
                "[{}, {}] holds more than {} solutions",
                start, end, MAX_SOLUTIONS
            ));
        }
        in_range.extend((0..count as usize).map(|k| first + k as f64 * period));
    }
    in_range.sort_by(|a, b| a.total_cmp(b));
    in_range.dedup_by(|a, b| (*a - *b).abs() < DUPLICATE_TOLERANCE);
    Ok(in_range)
}

pub fn solve_in_range(eq: &TrigEquation) -> SolveResult<Vec<f64>> {
    if eq.kind != TrigEquationKind::Basic {
        return SolveResult::Unsupported(match eq.kind {
            TrigEquationKind::Quadratic => "quadratic trigonometric equations",
            _ => "combined trigonometric equations",
        });
    }
    let [a, b, c, start, end] = require!(eq.a, eq.b, eq.c, eq.start, eq.end);
    if start > end {
        return SolveResult::Error(SolveError::InvalidRange { start, end });
    }
    principal_solutions(eq.function, a, b, c).and_then(|principal| {
        let solutions = match fold_into_range(&principal, eq.function.period(), start, end) {
            Ok(solutions) => solutions,
            Err(msg) => return SolveResult::domain_error(msg),
        };
        info!(
            "{}·{}(x) + {} = {} on [{}, {}]: {} solutions",
            a,
            eq.function,
            b,
            c,
            start,
            end,
            solutions.len()
        );
        if solutions.is_empty() {
            SolveResult::NoSolution
        } else {
            SolveResult::Value(solutions)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::str::FromStr;

    fn solve(f: TrigFunction, a: f64, b: f64, c: f64, start: f64, end: f64) -> SolveResult<Vec<f64>> {
        solve_in_range(&TrigEquation::basic(f, a, b, c, start, end))
    }

    fn assert_angles(res: SolveResult<Vec<f64>>, expected: &[f64]) {
        let got = res.into_value().unwrap();
        assert_eq!(got.len(), expected.len(), "{:?}", got);
        for (g, e) in got.iter().zip(expected) {
            assert_relative_eq!(*g, *e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sin_half() {
        assert_angles(solve(TrigFunction::Sin, 1.0, 0.0, 0.5, 0.0, 360.0), &[30.0, 150.0]);
    }

    #[test]
    fn test_wider_range() {
        assert_angles(
            solve(TrigFunction::Sin, 1.0, 0.0, 0.5, -360.0, 360.0),
            &[-330.0, -210.0, 30.0, 150.0],
        );
        // 2cos(x) + 1 = 2 → cos(x) = 1/2
        assert_angles(solve(TrigFunction::Cos, 2.0, 1.0, 2.0, 0.0, 360.0), &[60.0, 300.0]);
    }

    #[test]
    fn test_tan_period() {
        let f = TrigFunction::from_str("tg").unwrap();
        assert_angles(solve(f, 1.0, 0.0, 1.0, 0.0, 360.0), &[45.0, 225.0]);
    }

    #[test]
    fn test_duplicates_removed() {
        // cos(x) = 1 gives θ = 0 and -θ = 0
        assert_angles(solve(TrigFunction::Cos, 1.0, 0.0, 1.0, 0.0, 360.0), &[0.0, 360.0]);
        // sin(x) = 1 gives 90 and 180 - 90
        assert_angles(solve(TrigFunction::Sin, 1.0, 0.0, 1.0, 0.0, 360.0), &[90.0]);
    }

    #[test]
    fn test_degenerate_cases() {
        assert_eq!(solve(TrigFunction::Sin, 1.0, 0.0, 2.0, 0.0, 360.0), SolveResult::NoSolution);
        assert_eq!(solve(TrigFunction::Sin, 0.0, 1.0, 1.0, 0.0, 360.0), SolveResult::InfiniteSolutions);
        assert_eq!(solve(TrigFunction::Sin, 0.0, 1.0, 2.0, 0.0, 360.0), SolveResult::NoSolution);
        assert!(matches!(
            solve(TrigFunction::Sin, 1.0, 0.0, 0.5, 360.0, 0.0),
            SolveResult::Error(SolveError::InvalidRange { .. })
        ));
        // nothing inside a narrow window
        assert_eq!(solve(TrigFunction::Sin, 1.0, 0.0, 0.5, 40.0, 100.0), SolveResult::NoSolution);
    }

    #[test]
    fn test_huge_ranges_are_rejected() {
        // adding 360 to 1e20 gives 1e20 again
        assert!(matches!(
            solve(TrigFunction::Sin, 1.0, 0.0, 0.5, 1e20, 1.0000001e20),
            SolveResult::Error(SolveError::Domain(_))
        ));
        assert!(matches!(
            solve(TrigFunction::Tan, 1.0, 0.0, 1.0, 0.0, 1e9),
            SolveResult::Error(SolveError::Domain(_))
        ));
        // just under the limit still lists every solution
        let end = 360.0 * (MAX_SOLUTIONS as f64 / 2.0 - 1.0);
        let got = solve(TrigFunction::Sin, 1.0, 0.0, 0.5, 0.0, end).into_value().unwrap();
        assert_eq!(got.len(), MAX_SOLUTIONS - 2);
        assert_relative_eq!(got[got.len() - 1], end - 210.0, epsilon = 1e-6);
    }

    #[test]
    fn test_fold_into_range() {
        let folded = fold_into_range(&[30.0, 150.0], 360.0, -360.0, 360.0).unwrap();
        assert_eq!(folded, vec![-330.0, -210.0, 30.0, 150.0]);
        assert!(fold_into_range(&[30.0], 360.0, 40.0, 100.0).unwrap().is_empty());
    }

    #[test]
    fn test_missing_range_and_other_kinds() {
        let mut eq = TrigEquation::basic(TrigFunction::Sin, 1.0, 0.0, 0.5, 0.0, 360.0);
        eq.end = None;
        assert_eq!(solve_in_range(&eq), SolveResult::NotEnoughInput);
        eq.kind = TrigEquationKind::Quadratic;
        assert!(matches!(solve_in_range(&eq), SolveResult::Unsupported(_)));
    }
}
