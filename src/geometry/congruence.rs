//! SAS, ASA and SSS congruence criteria between two triangles.
//!
//! Sides and angles are compared with a relative tolerance, so values that differ only by
//! floating point rounding count as equal.
use crate::geometry::triangle::TriangleSpec;
use crate::solve_result::SolveResult;
use approx::relative_eq;
use log::debug;
use strum_macros::{Display, EnumIter};

pub const CONGRUENCE_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum Criterion {
    /// side 0, side 1 and the angle 0.
    ///
    /// Angle 0 lies opposite side 0 in [`TriangleSpec`], so it is not the angle between the
    /// two sides and the check is an SSA comparison under that convention. The field
    /// positions are the ones task documents and saved solutions have always used.
    #[strum(to_string = "SAS")]
    SideAngleSide,
    /// angle 0, side 0, angle 1
    #[strum(to_string = "ASA")]
    AngleSideAngle,
    #[strum(to_string = "SSS")]
    SideSideSide,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Field {
    Side(usize),
    Angle(usize),
}

impl Criterion {
    fn fields(&self) -> [Field; 3] {
        match self {
            Criterion::SideAngleSide => [Field::Side(0), Field::Side(1), Field::Angle(0)],
            Criterion::AngleSideAngle => [Field::Angle(0), Field::Side(0), Field::Angle(1)],
            Criterion::SideSideSide => [Field::Side(0), Field::Side(1), Field::Side(2)],
        }
    }
}

fn value(t: &TriangleSpec, field: Field) -> Option<f64> {
    match field {
        Field::Side(i) => t.side(i),
        Field::Angle(i) => t.angle(i),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Congruence {
    /// None when some field of the criterion is missing in either triangle
    pub sas: Option<bool>,
    pub asa: Option<bool>,
    pub sss: Option<bool>,
}

impl Congruence {
    pub fn is_congruent(&self) -> bool {
        [self.sas, self.asa, self.sss].contains(&Some(true))
    }

    /// criteria that hold
    pub fn satisfied(&self) -> Vec<Criterion> {
        [
            (Criterion::SideAngleSide, self.sas),
            (Criterion::AngleSideAngle, self.asa),
            (Criterion::SideSideSide, self.sss),
        ]
        .into_iter()
        .filter(|(_, holds)| *holds == Some(true))
        .map(|(c, _)| c)
        .collect()
    }
}

/// Some(true/false) when all three fields of the criterion are known in both triangles
pub fn check_criterion(criterion: Criterion, t1: &TriangleSpec, t2: &TriangleSpec) -> Option<bool> {
    let mut holds = true;
    for field in criterion.fields() {
        let (x, y) = (value(t1, field)?, value(t2, field)?);
        if !relative_eq!(x, y, epsilon = f64::EPSILON, max_relative = CONGRUENCE_TOLERANCE) {
            debug!("{}: {:?} differs ({} vs {})", criterion, field, x, y);
            holds = false;
        }
    }
    Some(holds)
}

pub fn check_congruence(t1: &TriangleSpec, t2: &TriangleSpec) -> SolveResult<Congruence> {
    let result = Congruence {
        sas: check_criterion(Criterion::SideAngleSide, t1, t2),
        asa: check_criterion(Criterion::AngleSideAngle, t1, t2),
        sss: check_criterion(Criterion::SideSideSide, t1, t2),
    };
    if result.sas.is_none() && result.asa.is_none() && result.sss.is_none() {
        return SolveResult::NotEnoughInput;
    }
    SolveResult::Value(result)
}
