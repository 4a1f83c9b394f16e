//! Linear, quadratic, absolute-value and rational inequalities in one variable.
//!
//! Solutions are sets of disjoint intervals. Every solver reduces to the comparison of a
//! sign pattern with the requested direction:
//! - linear `ax + b ▷ 0`: the direction flips when `a < 0`
//! - quadratic `ax² + bx + c ▷ 0`: outside the roots when the sign of `a` matches the direction, inside otherwise
//! - absolute `|ax + b| ▷ c`: outside for `>`/`≥`, inside for `<`/`≤`
//! - rational `(ax + b)/(cx + d) ▷ 0`: sign of the product, the root of the denominator excluded
use crate::require;
use crate::solve_result::SolveResult;
use log::info;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display, EnumIter)]
pub enum InequalitySign {
    #[strum(serialize = ">")]
    Greater,
    #[strum(serialize = "<")]
    Less,
    #[strum(to_string = ">=", serialize = "≥")]
    GreaterOrEqual,
    #[strum(to_string = "<=", serialize = "≤")]
    LessOrEqual,
}

impl InequalitySign {
    /// direction after multiplying both sides by a negative number
    pub fn flipped(self) -> Self {
        match self {
            InequalitySign::Greater => InequalitySign::Less,
            InequalitySign::Less => InequalitySign::Greater,
            InequalitySign::GreaterOrEqual => InequalitySign::LessOrEqual,
            InequalitySign::LessOrEqual => InequalitySign::GreaterOrEqual,
        }
    }

    pub fn is_strict(self) -> bool {
        matches!(self, InequalitySign::Greater | InequalitySign::Less)
    }

    /// true for > and ≥
    pub fn wants_positive(self) -> bool {
        matches!(self, InequalitySign::Greater | InequalitySign::GreaterOrEqual)
    }

    /// value ▷ 0
    pub fn holds(self, value: f64) -> bool {
        match self {
            InequalitySign::Greater => value > 0.0,
            InequalitySign::Less => value < 0.0,
            InequalitySign::GreaterOrEqual => value >= 0.0,
            InequalitySign::LessOrEqual => value <= 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    Unbounded,
    Open(f64),
    Closed(f64),
}

impl Bound {
    fn at(x: f64, strict: bool) -> Bound {
        if strict { Bound::Open(x) } else { Bound::Closed(x) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lower: Bound,
    pub upper: Bound,
}

impl Interval {
    pub fn all() -> Self {
        Interval {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        let above = match self.lower {
            Bound::Unbounded => true,
            Bound::Open(v) => x > v,
            Bound::Closed(v) => x >= v,
        };
        let below = match self.upper {
            Bound::Unbounded => true,
            Bound::Open(v) => x < v,
            Bound::Closed(v) => x <= v,
        };
        above && below
    }

    /// strictly between the bounds
    fn has_interior_point(&self, x: f64) -> bool {
        let above = match self.lower {
            Bound::Unbounded => true,
            Bound::Open(v) | Bound::Closed(v) => x > v,
        };
        let below = match self.upper {
            Bound::Unbounded => true,
            Bound::Open(v) | Bound::Closed(v) => x < v,
        };
        above && below
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let (Bound::Closed(lo), Bound::Closed(hi)) = (self.lower, self.upper) {
            if lo == hi {
                return write!(f, "{{{}}}", lo);
            }
        }
        match self.lower {
            Bound::Unbounded => write!(f, "(-∞, ")?,
            Bound::Open(v) => write!(f, "({}, ", v)?,
            Bound::Closed(v) => write!(f, "[{}, ", v)?,
        }
        match self.upper {
            Bound::Unbounded => write!(f, "∞)"),
            Bound::Open(v) => write!(f, "{})", v),
            Bound::Closed(v) => write!(f, "{}]", v),
        }
    }
}

/// union of disjoint intervals ordered left to right, plus points removed from the domain
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionSet {
    pub intervals: Vec<Interval>,
    pub excluded: Vec<f64>,
}

impl SolutionSet {
    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        SolutionSet {
            intervals,
            excluded: Vec::new(),
        }
    }

    pub fn all_reals() -> Self {
        Self::from_intervals(vec![Interval::all()])
    }

    pub fn is_all_reals(&self) -> bool {
        self.intervals == vec![Interval::all()]
    }

    pub fn contains(&self, x: f64) -> bool {
        self.intervals.iter().any(|i| i.contains(x))
    }

    /// removes one point, splitting the interval it lies in
    pub fn exclude(mut self, p: f64) -> Self {
        let mut intervals = Vec::with_capacity(self.intervals.len() + 1);
        for interval in self.intervals {
            if interval.lower == Bound::Closed(p) && interval.upper == Bound::Closed(p) {
                continue;
            }
            if interval.has_interior_point(p) {
                intervals.push(Interval {
                    lower: interval.lower,
                    upper: Bound::Open(p),
                });
                intervals.push(Interval {
                    lower: Bound::Open(p),
                    upper: interval.upper,
                });
                continue;
            }
            let mut interval = interval;
            if interval.lower == Bound::Closed(p) {
                interval.lower = Bound::Open(p);
            }
            if interval.upper == Bound::Closed(p) {
                interval.upper = Bound::Open(p);
            }
            intervals.push(interval);
        }
        self.intervals = intervals;
        self.excluded.push(p);
        self
    }
}

impl fmt::Display for SolutionSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.intervals.is_empty() {
            write!(f, "∅")?;
        } else {
            let parts: Vec<String> = self.intervals.iter().map(|i| i.to_string()).collect();
            write!(f, "{}", parts.join(" ∪ "))?;
        }
        for p in &self.excluded {
            write!(f, ", x ≠ {}", p)?;
        }
        Ok(())
    }
}

/// (-∞, lo) ∪ (hi, ∞), the bounds closed for non-strict signs
fn outside(lo: f64, hi: f64, strict: bool) -> SolveResult<SolutionSet> {
    if lo == hi && !strict {
        return SolveResult::Value(SolutionSet::all_reals());
    }
    SolveResult::Value(SolutionSet::from_intervals(vec![
        Interval {
            lower: Bound::Unbounded,
            upper: Bound::at(lo, strict),
        },
        Interval {
            lower: Bound::at(hi, strict),
            upper: Bound::Unbounded,
        },
    ]))
}

/// (lo, hi), the bounds closed for non-strict signs
fn inside(lo: f64, hi: f64, strict: bool) -> SolveResult<SolutionSet> {
    if lo == hi && strict {
        return SolveResult::NoSolution;
    }
    SolveResult::Value(SolutionSet::from_intervals(vec![Interval {
        lower: Bound::at(lo, strict),
        upper: Bound::at(hi, strict),
    }]))
}

fn constant(value: f64, sign: InequalitySign) -> SolveResult<SolutionSet> {
    if sign.holds(value) {
        SolveResult::Value(SolutionSet::all_reals())
    } else {
        SolveResult::NoSolution
    }
}

/// ax + b ▷ 0
pub fn solve_linear(a: f64, b: f64, sign: InequalitySign) -> SolveResult<SolutionSet> {
    if a == 0.0 {
        return constant(b, sign);
    }
    let boundary = -b / a;
    let sign = if a > 0.0 { sign } else { sign.flipped() };
    let interval = if sign.wants_positive() {
        Interval {
            lower: Bound::at(boundary, sign.is_strict()),
            upper: Bound::Unbounded,
        }
    } else {
        Interval {
            lower: Bound::Unbounded,
            upper: Bound::at(boundary, sign.is_strict()),
        }
    };
    SolveResult::Value(SolutionSet::from_intervals(vec![interval]))
}

/// ax² + bx + c ▷ 0
pub fn solve_quadratic(a: f64, b: f64, c: f64, sign: InequalitySign) -> SolveResult<SolutionSet> {
    if a == 0.0 {
        return solve_linear(b, c, sign);
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        // the parabola never crosses zero and keeps the sign of a
        info!("discriminant {} < 0, sign of the expression is the sign of a", discriminant);
        return constant(a, sign);
    }
    let sqrt_d = discriminant.sqrt();
    let r1 = (-b - sqrt_d) / (2.0 * a);
    let r2 = (-b + sqrt_d) / (2.0 * a);
    let (x1, x2) = (r1.min(r2), r1.max(r2));
    if (a > 0.0) == sign.wants_positive() {
        outside(x1, x2, sign.is_strict())
    } else {
        inside(x1, x2, sign.is_strict())
    }
}

/// |ax + b| ▷ c
pub fn solve_absolute(a: f64, b: f64, c: f64, sign: InequalitySign) -> SolveResult<SolutionSet> {
    if a == 0.0 {
        return constant(b.abs() - c, sign);
    }
    if c < 0.0 {
        // |..| is never below a negative number
        return if sign.wants_positive() {
            SolveResult::Value(SolutionSet::all_reals())
        } else {
            SolveResult::NoSolution
        };
    }
    let center = -b / a;
    let half_width = (c / a).abs();
    let (lo, hi) = (center - half_width, center + half_width);
    if sign.wants_positive() {
        outside(lo, hi, sign.is_strict())
    } else {
        inside(lo, hi, sign.is_strict())
    }
}

/// (ax + b)/(cx + d) ▷ 0
pub fn solve_rational(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    sign: InequalitySign,
) -> SolveResult<SolutionSet> {
    if c == 0.0 {
        if d == 0.0 {
            return SolveResult::domain_error("denominator is identically zero");
        }
        return solve_linear(a / d, b / d, sign);
    }
    let pole = -d / c;
    // the quotient has the sign of the product (ax + b)(cx + d) wherever it is defined
    solve_quadratic(a * c, a * d + b * c, b * d, sign).and_then(|set| {
        let set = set.exclude(pole);
        if set.intervals.is_empty() {
            SolveResult::NoSolution
        } else {
            SolveResult::Value(set)
        }
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InequalityKind {
    Linear,
    Quadratic,
    Rational,
    Absolute,
}

/// Input record of the inequality calculator: the meaning of a..d depends on the kind,
/// see the module documentation.
#[derive(Clone, Debug, PartialEq)]
pub struct InequalityInput {
    pub kind: InequalityKind,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub d: Option<f64>,
    pub sign: InequalitySign,
}

pub fn solve_inequality(input: &InequalityInput) -> SolveResult<SolutionSet> {
    match input.kind {
        InequalityKind::Linear => {
            let [a, b] = require!(input.a, input.b);
            solve_linear(a, b, input.sign)
        }
        InequalityKind::Quadratic => {
            let [a, b, c] = require!(input.a, input.b, input.c);
            solve_quadratic(a, b, c, input.sign)
        }
        InequalityKind::Absolute => {
            let [a, b, c] = require!(input.a, input.b, input.c);
            solve_absolute(a, b, c, input.sign)
        }
        InequalityKind::Rational => {
            let [a, b, c, d] = require!(input.a, input.b, input.c, input.d);
            solve_rational(a, b, c, d, input.sign)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use InequalitySign::*;

    fn set(res: SolveResult<SolutionSet>) -> SolutionSet {
        match res {
            SolveResult::Value(s) => s,
            other => panic!("expected a solution set, got {:?}", other),
        }
    }

    #[test]
    fn test_sign_parsing() {
        assert_eq!(InequalitySign::from_str(">=").unwrap(), GreaterOrEqual);
        assert_eq!(InequalitySign::from_str("≤").unwrap(), LessOrEqual);
        assert_eq!(GreaterOrEqual.to_string(), ">=");
        assert_eq!(Less.flipped(), Greater);
    }

    #[test]
    fn test_linear_keeps_direction_for_positive_a() {
        // 2x - 4 > 0 → x > 2
        let s = set(solve_linear(2.0, -4.0, Greater));
        assert!(s.contains(3.0));
        assert!(!s.contains(2.0));
        assert!(!s.contains(0.0));
        assert_eq!(s.to_string(), "(2, ∞)");
    }

    #[test]
    fn test_linear_flips_for_negative_a() {
        // -2x + 4 >= 0 → x <= 2
        let s = set(solve_linear(-2.0, 4.0, GreaterOrEqual));
        assert!(s.contains(2.0));
        assert!(s.contains(-100.0));
        assert!(!s.contains(2.5));
        assert_eq!(s.to_string(), "(-∞, 2]");
    }

    #[test]
    fn test_linear_without_x() {
        assert!(set(solve_linear(0.0, 1.0, Greater)).is_all_reals());
        assert_eq!(solve_linear(0.0, 1.0, Less), SolveResult::NoSolution);
    }

    #[test]
    fn test_quadratic_inside_and_outside() {
        // x² - 4 < 0 → (-2, 2)
        let s = set(solve_quadratic(1.0, 0.0, -4.0, Less));
        assert_eq!(s.to_string(), "(-2, 2)");
        // x² - 4 >= 0 → (-∞, -2] ∪ [2, ∞)
        let s = set(solve_quadratic(1.0, 0.0, -4.0, GreaterOrEqual));
        assert_eq!(s.to_string(), "(-∞, -2] ∪ [2, ∞)");
        // -x² + 4 > 0 → (-2, 2)
        let s = set(solve_quadratic(-1.0, 0.0, 4.0, Greater));
        assert_eq!(s.to_string(), "(-2, 2)");
    }

    #[test]
    fn test_quadratic_negative_discriminant() {
        assert!(set(solve_quadratic(1.0, 0.0, 1.0, Greater)).is_all_reals());
        assert_eq!(solve_quadratic(1.0, 0.0, 1.0, Less), SolveResult::NoSolution);
        assert!(set(solve_quadratic(-1.0, 0.0, -1.0, LessOrEqual)).is_all_reals());
        assert_eq!(
            solve_quadratic(-1.0, 0.0, -1.0, GreaterOrEqual),
            SolveResult::NoSolution
        );
    }

    #[test]
    fn test_quadratic_double_root() {
        // (x - 1)² ▷ 0
        let s = set(solve_quadratic(1.0, -2.0, 1.0, Greater));
        assert!(!s.contains(1.0));
        assert!(s.contains(0.0) && s.contains(2.0));
        assert!(set(solve_quadratic(1.0, -2.0, 1.0, GreaterOrEqual)).is_all_reals());
        assert_eq!(solve_quadratic(1.0, -2.0, 1.0, Less), SolveResult::NoSolution);
        let s = set(solve_quadratic(1.0, -2.0, 1.0, LessOrEqual));
        assert_eq!(s.to_string(), "{1}");
    }

    #[test]
    fn test_absolute() {
        // |x - 1| < 2 → (-1, 3)
        let s = set(solve_absolute(1.0, -1.0, 2.0, Less));
        assert_eq!(s.to_string(), "(-1, 3)");
        // |-2x| >= 4 → (-∞, -2] ∪ [2, ∞)
        let s = set(solve_absolute(-2.0, 0.0, 4.0, GreaterOrEqual));
        assert_eq!(s.to_string(), "(-∞, -2] ∪ [2, ∞)");
        assert!(set(solve_absolute(1.0, 0.0, -1.0, Greater)).is_all_reals());
        assert_eq!(solve_absolute(1.0, 0.0, -1.0, LessOrEqual), SolveResult::NoSolution);
    }

    #[test]
    fn test_rational_excludes_pole() {
        // (x - 1)/(x + 2) >= 0 → (-∞, -2) ∪ [1, ∞)
        let s = set(solve_rational(1.0, -1.0, 1.0, 2.0, GreaterOrEqual));
        assert!(!s.contains(-2.0));
        assert!(s.contains(-3.0));
        assert!(s.contains(1.0));
        assert!(!s.contains(0.0));
        assert_eq!(s.excluded, vec![-2.0]);
        // (x - 1)/(x + 2) < 0 → (-2, 1)
        let s = set(solve_rational(1.0, -1.0, 1.0, 2.0, Less));
        assert_eq!(s.intervals.len(), 1);
        assert!(s.contains(0.0));
        assert!(!s.contains(1.0));
    }

    #[test]
    fn test_rational_zero_denominator() {
        assert!(matches!(
            solve_rational(1.0, 1.0, 0.0, 0.0, Greater),
            SolveResult::Error(_)
        ));
    }

    #[test]
    fn test_exclude_splits_interval() {
        let s = SolutionSet::all_reals().exclude(3.0);
        assert_eq!(s.intervals.len(), 2);
        assert!(!s.contains(3.0));
        assert_eq!(s.to_string(), "(-∞, 3) ∪ (3, ∞), x ≠ 3");
    }

    #[test]
    fn test_dispatch_needs_all_fields() {
        let input = InequalityInput {
            kind: InequalityKind::Rational,
            a: Some(1.0),
            b: Some(1.0),
            c: Some(1.0),
            d: None,
            sign: Greater,
        };
        assert_eq!(solve_inequality(&input), SolveResult::NotEnoughInput);
        let input = InequalityInput {
            kind: InequalityKind::from_str("linear").unwrap(),
            d: None,
            ..input
        };
        assert!(solve_inequality(&input).is_value());
    }
}
