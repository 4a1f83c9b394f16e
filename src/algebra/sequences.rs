//! Arithmetic and geometric progressions. Terms are numbered from 1.
use crate::require;
use crate::solve_result::SolveResult;
use strum_macros::{Display, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SequenceKind {
    Arithmetic,
    Geometric,
}

/// `step` is the common difference d (arithmetic) or the common ratio r (geometric)
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceInput {
    pub kind: SequenceKind,
    pub first: Option<f64>,
    pub step: Option<f64>,
    pub n: Option<u64>,
}

impl SequenceInput {
    pub fn new(kind: SequenceKind, first: f64, step: f64, n: u64) -> Self {
        SequenceInput {
            kind,
            first: Some(first),
            step: Some(step),
            n: Some(n),
        }
    }
}

fn fields(input: &SequenceInput) -> SolveResult<(f64, f64, u64)> {
    let [first, step] = require!(input.first, input.step);
    let Some(n) = input.n else {
        return SolveResult::NotEnoughInput;
    };
    if n == 0 {
        return SolveResult::domain_error("terms are numbered from 1, n = 0 is not a term");
    }
    SolveResult::Value((first, step, n))
}

/// a_n = a1 + (n-1)d, or a_n = a1·r^(n-1)
pub fn nth_term(input: &SequenceInput) -> SolveResult<f64> {
    fields(input).map(|(first, step, n)| term(input.kind, first, step, n))
}

fn term(kind: SequenceKind, first: f64, step: f64, n: u64) -> f64 {
    match kind {
        SequenceKind::Arithmetic => first + (n - 1) as f64 * step,
        SequenceKind::Geometric => first * step.powf((n - 1) as f64),
    }
}

/// S_n = n(a1 + a_n)/2, or S_n = a1(1 - rⁿ)/(1 - r) with S_n = a1·n for r = 1
pub fn sum(input: &SequenceInput) -> SolveResult<f64> {
    fields(input).map(|(first, step, n)| {
        let n_f = n as f64;
        match input.kind {
            SequenceKind::Arithmetic => n_f * (first + term(input.kind, first, step, n)) / 2.0,
            SequenceKind::Geometric if step == 1.0 => first * n_f,
            SequenceKind::Geometric => first * (1.0 - step.powf(n_f)) / (1.0 - step),
        }
    })
}
