//! Volume and surface area of solids.
use crate::require;
use crate::solve_result::SolveResult;
use std::f64::consts::PI;

#[derive(Clone, Debug, PartialEq)]
pub enum Solid {
    /// rectangular box, a cube when all edges are equal
    Cube {
        width: Option<f64>,
        height: Option<f64>,
        depth: Option<f64>,
    },
    Sphere {
        radius: Option<f64>,
    },
    /// rectangular base width x depth, apex above the center
    Pyramid {
        width: Option<f64>,
        depth: Option<f64>,
        height: Option<f64>,
    },
    Cylinder {
        radius: Option<f64>,
        height: Option<f64>,
    },
}

impl Solid {
    pub fn name(&self) -> &'static str {
        match self {
            Solid::Cube { .. } => "cube",
            Solid::Sphere { .. } => "sphere",
            Solid::Pyramid { .. } => "pyramid",
            Solid::Cylinder { .. } => "cylinder",
        }
    }
}

fn checked<const N: usize>(solid: &Solid, values: [f64; N], f: impl Fn([f64; N]) -> f64) -> SolveResult<f64> {
    if values.iter().any(|v| *v <= 0.0) {
        return SolveResult::domain_error(format!("{} dimensions must be positive", solid.name()));
    }
    SolveResult::Value(f(values))
}

pub fn volume(solid: &Solid) -> SolveResult<f64> {
    match solid {
        Solid::Cube {
            width,
            height,
            depth,
        } => checked(solid, require!(*width, *height, *depth), |[w, h, d]| w * h * d),
        Solid::Sphere { radius } => {
            checked(solid, require!(*radius), |[r]| 4.0 / 3.0 * PI * r.powi(3))
        }
        Solid::Pyramid {
            width,
            depth,
            height,
        } => checked(solid, require!(*width, *depth, *height), |[w, d, h]| w * d * h / 3.0),
        Solid::Cylinder { radius, height } => {
            checked(solid, require!(*radius, *height), |[r, h]| PI * r * r * h)
        }
    }
}

pub fn surface_area(solid: &Solid) -> SolveResult<f64> {
    match solid {
        Solid::Cube {
            width,
            height,
            depth,
        } => checked(solid, require!(*width, *height, *depth), |[w, h, d]| {
            2.0 * (w * d + w * h + d * h)
        }),
        Solid::Sphere { radius } => checked(solid, require!(*radius), |[r]| 4.0 * PI * r * r),
        Solid::Pyramid {
            width,
            depth,
            height,
        } => checked(solid, require!(*width, *depth, *height), |[w, d, h]| {
            let slant = (h * h + (w / 2.0).powi(2)).sqrt();
            w * d + w * slant + d * slant
        }),
        Solid::Cylinder { radius, height } => {
            checked(solid, require!(*radius, *height), |[r, h]| 2.0 * PI * r * (r + h))
        }
    }
}
