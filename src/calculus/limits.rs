use crate::solve_result::SolveResult;

/// lim f(x) as x → point
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LimitInput {
    pub expression: String,
    pub point: Option<f64>,
}

/// general limits need L'Hôpital's rule on symbolic quotients, which the crate does not do
pub fn evaluate_limit(_input: &LimitInput) -> SolveResult<f64> {
    SolveResult::Unsupported("limits")
}
