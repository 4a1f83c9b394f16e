//! Chord, tangent, arc, sector and segment relations of a circle of radius r.
//!
//! Angles are in degrees. A relation is computed only when its input is given; a given input
//! outside of the domain of its formula (chord longer than the diameter, tangent longer than
//! the radius) drops that relation with a warning instead of failing the others.
use crate::solve_result::SolveResult;
use log::warn;
use std::f64::consts::PI;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircleInput {
    pub radius: Option<f64>,
    pub chord: Option<f64>,
    pub tangent: Option<f64>,
    pub arc_angle: Option<f64>,
    pub central_angle: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircleRelations {
    /// distance from the center to the chord
    pub center_to_chord: Option<f64>,
    /// central angle subtended by the chord
    pub chord_angle: Option<f64>,
    pub tangent_angle: Option<f64>,
    pub arc_length: Option<f64>,
    pub sector_area: Option<f64>,
    /// area of the circular segment cut off by the central angle
    pub segment_area: Option<f64>,
}

impl CircleRelations {
    /// (name, value) of every computed relation
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        [
            ("center to chord", self.center_to_chord),
            ("chord central angle", self.chord_angle),
            ("tangent angle", self.tangent_angle),
            ("arc length", self.arc_length),
            ("sector area", self.sector_area),
            ("segment area", self.segment_area),
        ]
        .into_iter()
        .filter_map(|(name, v)| v.map(|v| (name, v)))
        .collect()
    }
}

fn given(v: Option<f64>) -> Option<f64> {
    v.filter(|v| !v.is_nan())
}

pub fn circle_relations(input: &CircleInput) -> SolveResult<CircleRelations> {
    let Some(r) = given(input.radius) else {
        return SolveResult::NotEnoughInput;
    };
    if r <= 0.0 {
        return SolveResult::domain_error(format!("radius must be positive, got {}", r));
    }
    let mut relations = CircleRelations::default();
    let mut requested = 0;
    let mut failed = Vec::new();

    if let Some(c) = given(input.chord) {
        requested += 1;
        if c >= 0.0 && c <= 2.0 * r {
            relations.center_to_chord = Some((r * r - (c / 2.0) * (c / 2.0)).sqrt());
            relations.chord_angle = Some(2.0 * (c / (2.0 * r)).asin().to_degrees());
        } else {
            warn!("chord {} does not fit into a circle of radius {}", c, r);
            failed.push(format!("chord {} > diameter {}", c, 2.0 * r));
        }
    }
    if let Some(t) = given(input.tangent) {
        requested += 1;
        if t >= 0.0 && t <= r {
            relations.tangent_angle = Some((t / r).acos().to_degrees());
        } else {
            warn!("acos({}/{}) is undefined, tangent angle skipped", t, r);
            failed.push(format!("tangent {} > radius {}", t, r));
        }
    }
    if let Some(alpha) = given(input.arc_angle) {
        requested += 1;
        relations.arc_length = Some(2.0 * PI * r * alpha / 360.0);
        relations.sector_area = Some(PI * r * r * alpha / 360.0);
    }
    if let Some(beta) = given(input.central_angle) {
        requested += 1;
        let theta = beta.to_radians();
        relations.segment_area = Some(r * r / 2.0 * (theta - theta.sin()));
    }

    if requested == 0 {
        return SolveResult::NotEnoughInput;
    }
    if failed.len() == requested {
        return SolveResult::domain_error(failed.join("; "));
    }
    SolveResult::Value(relations)
}
