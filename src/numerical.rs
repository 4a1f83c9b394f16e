/// Sampling of a textual function of x on an evenly spaced grid, the data behind every graph.
///  Example#1
/// ```
/// use RustedSolvers::numerical::sampler::{sample, SAMPLE_INTERVALS};
/// use RustedSolvers::solve_result::SolveResult;
/// let samples = sample("1/x", (-10.0, 10.0), (-10.0, 10.0));
/// if let SolveResult::Value(points) = samples {
///     assert_eq!(points.len(), SAMPLE_INTERVALS + 1);
///     // x = 0 is a hole, not a crash
///     assert!(points[SAMPLE_INTERVALS / 2].is_none());
/// }
/// ```
pub mod sampler;
