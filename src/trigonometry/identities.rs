//! Values of the basic, sum/difference, double- and half-angle identities for angles in degrees.
//!
//! A ratio whose denominator vanishes at the given angle (tan 90°, cot 0° ...) is `None`.
use crate::require;
use crate::solve_result::SolveResult;

/// |denominator| below this makes a ratio undefined
pub const UNDEFINED_TOLERANCE: f64 = 1e-12;

fn ratio(num: f64, den: f64) -> Option<f64> {
    if den.abs() < UNDEFINED_TOLERANCE {
        None
    } else {
        Some(num / den)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicRatios {
    pub sin: f64,
    pub cos: f64,
    pub tan: Option<f64>,
    pub cot: Option<f64>,
    pub sec: Option<f64>,
    pub csc: Option<f64>,
}

pub fn basic_ratios(angle: Option<f64>) -> SolveResult<BasicRatios> {
    let [angle] = require!(angle);
    let (sin, cos) = angle.to_radians().sin_cos();
    SolveResult::Value(BasicRatios {
        sin,
        cos,
        tan: ratio(sin, cos),
        cot: ratio(cos, sin),
        sec: ratio(1.0, cos),
        csc: ratio(1.0, sin),
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SumDifference {
    pub sin_sum: f64,
    pub sin_diff: f64,
    pub cos_sum: f64,
    pub cos_diff: f64,
    pub tan_sum: Option<f64>,
    pub tan_diff: Option<f64>,
}

/// sin(α ± β), cos(α ± β), tan(α ± β) expanded through the values at α and β
pub fn sum_difference(alpha: Option<f64>, beta: Option<f64>) -> SolveResult<SumDifference> {
    let [alpha, beta] = require!(alpha, beta);
    let (s1, c1) = alpha.to_radians().sin_cos();
    let (s2, c2) = beta.to_radians().sin_cos();
    let (t1, t2) = (ratio(s1, c1), ratio(s2, c2));
    let (tan_sum, tan_diff) = match (t1, t2) {
        (Some(t1), Some(t2)) => (ratio(t1 + t2, 1.0 - t1 * t2), ratio(t1 - t2, 1.0 + t1 * t2)),
        _ => (None, None),
    };
    SolveResult::Value(SumDifference {
        sin_sum: s1 * c2 + c1 * s2,
        sin_diff: s1 * c2 - c1 * s2,
        cos_sum: c1 * c2 - s1 * s2,
        cos_diff: c1 * c2 + s1 * s2,
        tan_sum,
        tan_diff,
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoubleAngle {
    pub sin2: f64,
    pub cos2: f64,
    pub tan2: Option<f64>,
}

pub fn double_angle(angle: Option<f64>) -> SolveResult<DoubleAngle> {
    let [angle] = require!(angle);
    let (s, c) = angle.to_radians().sin_cos();
    let tan2 = ratio(s, c).and_then(|t| ratio(2.0 * t, 1.0 - t * t));
    SolveResult::Value(DoubleAngle {
        sin2: 2.0 * s * c,
        cos2: c * c - s * s,
        tan2,
    })
}

/// Half-angle values, always the non-negative root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfAngle {
    pub sin_half: f64,
    pub cos_half: f64,
    pub tan_half: Option<f64>,
}

pub fn half_angle(angle: Option<f64>) -> SolveResult<HalfAngle> {
    let [angle] = require!(angle);
    let c = angle.to_radians().cos();
    // max(0) keeps rounding noise such as 1 - cos(0) = -1e-17 out of sqrt
    SolveResult::Value(HalfAngle {
        sin_half: ((1.0 - c) / 2.0).max(0.0).sqrt(),
        cos_half: ((1.0 + c) / 2.0).max(0.0).sqrt(),
        tan_half: ratio(1.0 - c, 1.0 + c).map(|t| t.max(0.0).sqrt()),
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IdentityInput {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
}

/// every identity the input allows: the single-angle ones need α, the sums need β as well
#[derive(Clone, Debug, PartialEq)]
pub struct IdentityReport {
    pub basic: BasicRatios,
    pub double: DoubleAngle,
    pub half: HalfAngle,
    pub sum_difference: Option<SumDifference>,
}

pub fn evaluate_identities(input: &IdentityInput) -> SolveResult<IdentityReport> {
    basic_ratios(input.alpha).and_then(|basic| {
        double_angle(input.alpha).and_then(|double| {
            half_angle(input.alpha).map(|half| IdentityReport {
                basic,
                double,
                half,
                sum_difference: sum_difference(input.alpha, input.beta).into_value(),
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic() {
        let r = basic_ratios(Some(45.0)).into_value().unwrap();
        assert_relative_eq!(r.tan.unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.sec.unwrap(), 2f64.sqrt(), epsilon = 1e-12);
        let r = basic_ratios(Some(0.0)).into_value().unwrap();
        assert_eq!(r.cot, None);
        assert_eq!(r.csc, None);
        let r = basic_ratios(Some(90.0)).into_value().unwrap();
        assert_eq!(r.tan, None);
        assert_eq!(basic_ratios(None), SolveResult::NotEnoughInput);
    }

    #[test]
    fn test_sum_difference_matches_direct_values() {
        let (a, b) = (50.0f64, 20.0f64);
        let r = sum_difference(Some(a), Some(b)).into_value().unwrap();
        assert_relative_eq!(r.sin_sum, (a + b).to_radians().sin(), epsilon = 1e-12);
        assert_relative_eq!(r.sin_diff, (a - b).to_radians().sin(), epsilon = 1e-12);
        assert_relative_eq!(r.cos_sum, (a + b).to_radians().cos(), epsilon = 1e-12);
        assert_relative_eq!(r.cos_diff, (a - b).to_radians().cos(), epsilon = 1e-12);
        assert_relative_eq!(r.tan_sum.unwrap(), (a + b).to_radians().tan(), epsilon = 1e-9);
        assert_relative_eq!(r.tan_diff.unwrap(), (a - b).to_radians().tan(), epsilon = 1e-9);
    }

    #[test]
    fn test_double_angle() {
        let r = double_angle(Some(30.0)).into_value().unwrap();
        assert_relative_eq!(r.sin2, 60f64.to_radians().sin(), epsilon = 1e-12);
        assert_relative_eq!(r.cos2, 0.5, epsilon = 1e-12);
        assert_relative_eq!(r.tan2.unwrap(), 3f64.sqrt(), epsilon = 1e-9);
        // tan 90° is undefined
        assert_eq!(double_angle(Some(45.0)).into_value().unwrap().tan2, None);
    }

    #[test]
    fn test_half_angle_keeps_positive_root() {
        let r = half_angle(Some(60.0)).into_value().unwrap();
        assert_relative_eq!(r.sin_half, 0.5, epsilon = 1e-12);
        // half of 300° is 150°, sin is positive but cos(150°) < 0 still comes out positive
        let r = half_angle(Some(300.0)).into_value().unwrap();
        assert_relative_eq!(r.cos_half, 150f64.to_radians().cos().abs(), epsilon = 1e-12);
        assert_eq!(half_angle(Some(180.0)).into_value().unwrap().tan_half, None);
    }

    #[test]
    fn test_report_without_beta() {
        let input = IdentityInput {
            alpha: Some(30.0),
            beta: None,
        };
        let report = evaluate_identities(&input).into_value().unwrap();
        assert!(report.sum_difference.is_none());
        assert_relative_eq!(report.basic.sin, 0.5, epsilon = 1e-12);
    }
}
