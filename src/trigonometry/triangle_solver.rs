//! Completes a partially known triangle.
//!
//! Each pass applies every rule that can fill a missing value, the passes repeat until
//! nothing changes:
//! - angle sum: γ = 180 - α - β
//! - law of sines from a known side and its opposite angle
//! - law of cosines for a side from the two other sides and the included angle
//! - law of cosines for the angles once the three sides are known
//!
//! Values given by the caller are never overwritten.
use crate::geometry::triangle::{TriangleSpec, check_sides, heron_area};
use crate::solve_result::SolveResult;
use log::{debug, info};

const MAX_PASSES: usize = 10;
const ANGLE_SUM_TOLERANCE: f64 = 1e-9;

fn others(i: usize) -> (usize, usize) {
    ((i + 1) % 3, (i + 2) % 3)
}

fn validate(t: &TriangleSpec) -> Result<(), String> {
    for i in 0..3 {
        if let Some(s) = t.side(i) {
            if s <= 0.0 {
                return Err(format!("side {} must be positive, got {}", i, s));
            }
        }
        if let Some(a) = t.angle(i) {
            if a <= 0.0 || a >= 180.0 {
                return Err(format!("angle {} must lie in (0, 180), got {}", i, a));
            }
        }
    }
    let known: Vec<f64> = (0..3).filter_map(|i| t.angle(i)).collect();
    let sum: f64 = known.iter().sum();
    match known.len() {
        2 if sum >= 180.0 => Err(format!("two angles sum to {} ≥ 180", sum)),
        3 if (sum - 180.0).abs() > ANGLE_SUM_TOLERANCE => {
            Err(format!("angles sum to {}, not 180", sum))
        }
        _ => Ok(()),
    }
}

/// one pass over all rules, returns true when something was filled
fn pass(t: &mut TriangleSpec) -> Result<bool, String> {
    let mut changed = false;

    if t.known_angles() == 2 {
        let missing = (0..3).find(|&i| t.angle(i).is_none());
        if let Some(i) = missing {
            let (j, k) = others(i);
            let third = 180.0 - t.angle(j).unwrap_or(0.0) - t.angle(k).unwrap_or(0.0);
            debug!("angle {} = 180 - others = {}", i, third);
            t.angles[i] = Some(third);
            changed = true;
        }
    }

    // law of sines
    let pair = (0..3).find_map(|i| match (t.side(i), t.angle(i)) {
        (Some(s), Some(a)) => Some(s / a.to_radians().sin()),
        _ => None,
    });
    if let Some(ratio) = pair {
        for j in 0..3 {
            if let (None, Some(angle)) = (t.side(j), t.angle(j)) {
                let side = ratio * angle.to_radians().sin();
                debug!("side {} = {} by the law of sines", j, side);
                t.sides[j] = Some(side);
                changed = true;
            }
        }
    }

    // law of cosines, side opposite a known included angle
    for i in 0..3 {
        let (j, k) = others(i);
        if let (None, Some(angle), Some(b), Some(c)) = (t.side(i), t.angle(i), t.side(j), t.side(k)) {
            let side = (b * b + c * c - 2.0 * b * c * angle.to_radians().cos()).sqrt();
            debug!("side {} = {} by the law of cosines", i, side);
            t.sides[i] = Some(side);
            changed = true;
        }
    }

    // law of cosines, angles from three sides
    if t.known_sides() == 3 && t.known_angles() < 3 {
        let (a, b, c) = (
            t.side(0).unwrap_or(0.0),
            t.side(1).unwrap_or(0.0),
            t.side(2).unwrap_or(0.0),
        );
        check_sides(a, b, c)?;
        let sides = [a, b, c];
        for i in 0..3 {
            if t.angle(i).is_none() {
                let (j, k) = others(i);
                let (x, y, z) = (sides[i], sides[j], sides[k]);
                let cos = ((y * y + z * z - x * x) / (2.0 * y * z)).clamp(-1.0, 1.0);
                t.angles[i] = Some(cos.acos().to_degrees());
                changed = true;
            }
        }
    }
    Ok(changed)
}

/// Fills every value that follows from the given ones and returns the new record.
///
/// `NotEnoughInput` when nothing can be derived and the triangle is incomplete.
pub fn solve_triangle(triangle: &TriangleSpec) -> SolveResult<TriangleSpec> {
    if let Err(msg) = validate(triangle) {
        return SolveResult::domain_error(msg);
    }
    let mut solved = TriangleSpec {
        sides: [triangle.side(0), triangle.side(1), triangle.side(2)],
        angles: [triangle.angle(0), triangle.angle(1), triangle.angle(2)],
    };
    let mut progress = false;
    for _ in 0..MAX_PASSES {
        match pass(&mut solved) {
            Ok(true) => progress = true,
            Ok(false) => break,
            Err(msg) => return SolveResult::domain_error(msg),
        }
    }
    if !solved.is_complete() && !progress {
        return SolveResult::NotEnoughInput;
    }
    if !solved.is_complete() {
        info!("triangle is only partially determined: {}", solved);
    }
    SolveResult::Value(solved)
}

/// (x·y·sin θ)/2 for two sides and the angle between them, Heron's formula otherwise
pub fn triangle_area(triangle: &TriangleSpec) -> SolveResult<f64> {
    for i in 0..3 {
        let (j, k) = others(i);
        if let (Some(angle), Some(x), Some(y)) = (triangle.angle(i), triangle.side(j), triangle.side(k)) {
            if x <= 0.0 || y <= 0.0 || angle <= 0.0 || angle >= 180.0 {
                return SolveResult::domain_error(format!(
                    "sides {}, {} and angle {} do not form a triangle",
                    x, y, angle
                ));
            }
            return SolveResult::Value(x * y * angle.to_radians().sin() / 2.0);
        }
    }
    match (triangle.side(0), triangle.side(1), triangle.side(2)) {
        (Some(a), Some(b), Some(c)) => heron_area(a, b, c),
        _ => SolveResult::NotEnoughInput,
    }
}
