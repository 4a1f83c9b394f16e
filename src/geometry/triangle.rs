//! Triangle record shared by the geometry and trigonometry engines, and Heron's formula.
use crate::solve_result::SolveResult;
use std::fmt;

/// Sides and angles of a triangle, angle i (degrees) lies opposite side i.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleSpec {
    pub sides: [Option<f64>; 3],
    pub angles: [Option<f64>; 3],
}

impl TriangleSpec {
    pub fn from_sides(a: f64, b: f64, c: f64) -> Self {
        TriangleSpec {
            sides: [Some(a), Some(b), Some(c)],
            angles: [None; 3],
        }
    }

    /// NaN entries are treated as unknown
    pub fn side(&self, i: usize) -> Option<f64> {
        self.sides[i].filter(|v| !v.is_nan())
    }

    pub fn angle(&self, i: usize) -> Option<f64> {
        self.angles[i].filter(|v| !v.is_nan())
    }

    pub fn known_sides(&self) -> usize {
        (0..3).filter(|&i| self.side(i).is_some()).count()
    }

    pub fn known_angles(&self) -> usize {
        (0..3).filter(|&i| self.angle(i).is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.known_sides() == 3 && self.known_angles() == 3
    }
}

impl fmt::Display for TriangleSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let show = |v: Option<f64>| v.map_or("?".to_string(), |v| format!("{:.4}", v));
        write!(
            f,
            "a = {}, b = {}, c = {}, α = {}, β = {}, γ = {}",
            show(self.side(0)),
            show(self.side(1)),
            show(self.side(2)),
            show(self.angle(0)),
            show(self.angle(1)),
            show(self.angle(2))
        )
    }
}

/// positive lengths that satisfy the strict triangle inequality
pub fn check_sides(a: f64, b: f64, c: f64) -> Result<(), String> {
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return Err(format!("side lengths must be positive, got {}, {}, {}", a, b, c));
    }
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(format!("{}, {}, {} violate the triangle inequality", a, b, c));
    }
    Ok(())
}

/// s = (a + b + c)/2, area = √(s(s-a)(s-b)(s-c))
pub fn heron_area(a: f64, b: f64, c: f64) -> SolveResult<f64> {
    if let Err(msg) = check_sides(a, b, c) {
        return SolveResult::domain_error(msg);
    }
    let s = (a + b + c) / 2.0;
    SolveResult::Value((s * (s - a) * (s - b) * (s - c)).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_heron() {
        assert_eq!(heron_area(3.0, 4.0, 5.0), SolveResult::Value(6.0));
        let equilateral = heron_area(2.0, 2.0, 2.0).into_value().unwrap();
        assert_relative_eq!(equilateral, 3f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_sides() {
        assert!(matches!(heron_area(1.0, 2.0, 3.0), SolveResult::Error(_)));
        assert!(matches!(heron_area(-3.0, 4.0, 5.0), SolveResult::Error(_)));
    }

    #[test]
    fn test_nan_is_unknown() {
        let t = TriangleSpec {
            sides: [Some(1.0), Some(f64::NAN), None],
            angles: [Some(60.0), None, None],
        };
        assert_eq!(t.known_sides(), 1);
        assert_eq!(t.known_angles(), 1);
        assert!(!t.is_complete());
    }
}
