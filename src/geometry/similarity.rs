//! Similar figures: scale ratio consequences, side-ratio test, homothety.
use crate::require;
use crate::solve_result::SolveResult;

/// the three side ratios may spread by less than this for the triangles to count as similar
pub const SIMILARITY_SPREAD: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRatios {
    pub perimeter_ratio: f64,
    pub area_ratio: f64,
}

/// perimeters scale by k, areas by k²
pub fn scale_ratios(k: Option<f64>) -> SolveResult<ScaleRatios> {
    let [k] = require!(k);
    if k <= 0.0 {
        return SolveResult::domain_error(format!("scale ratio must be positive, got {}", k));
    }
    SolveResult::Value(ScaleRatios {
        perimeter_ratio: k,
        area_ratio: k * k,
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideComparison {
    /// b_i / a_i
    pub ratios: [f64; 3],
    pub mean_ratio: f64,
    pub is_similar: bool,
}

/// compares the sides of the second triangle with the corresponding sides of the first
pub fn compare_sides(first: [Option<f64>; 3], second: [Option<f64>; 3]) -> SolveResult<SideComparison> {
    let [a1, b1, c1] = require!(first[0], first[1], first[2]);
    let [a2, b2, c2] = require!(second[0], second[1], second[2]);
    if [a1, b1, c1, a2, b2, c2].iter().any(|v| *v <= 0.0) {
        return SolveResult::domain_error("side lengths must be positive");
    }
    let ratios = [a2 / a1, b2 / b1, c2 / c1];
    let max = ratios.iter().copied().fold(f64::MIN, f64::max);
    let min = ratios.iter().copied().fold(f64::MAX, f64::min);
    SolveResult::Value(SideComparison {
        ratios,
        mean_ratio: ratios.iter().sum::<f64>() / 3.0,
        is_similar: max - min < SIMILARITY_SPREAD,
    })
}

/// image of `point` under the homothety with the given center and ratio: c + k(p - c)
pub fn homothety(
    center: Option<(f64, f64)>,
    point: Option<(f64, f64)>,
    k: Option<f64>,
) -> SolveResult<(f64, f64)> {
    let (Some((cx, cy)), Some((px, py))) = (center, point) else {
        return SolveResult::NotEnoughInput;
    };
    let [cx, cy, px, py, k] = require!(Some(cx), Some(cy), Some(px), Some(py), k);
    SolveResult::Value((cx + k * (px - cx), cy + k * (py - cy)))
}
