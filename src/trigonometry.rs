/// completes a triangle by angle sum, law of sines and law of cosines, triangle area
///# Example
/// ```
/// use RustedSolvers::geometry::triangle::TriangleSpec;
/// use RustedSolvers::trigonometry::triangle_solver::solve_triangle;
/// let solved = solve_triangle(&TriangleSpec::from_sides(3.0, 4.0, 5.0)).into_value().unwrap();
/// assert!((solved.angles[2].unwrap() - 90.0).abs() < 1e-9);
/// ```
pub mod triangle_solver;
/// basic ratios, sum/difference, double- and half-angle formulas
pub mod identities;
/// a·f(x) + b = c on a bounded range of degrees
///# Example
/// ```
/// use RustedSolvers::trigonometry::equations::{solve_in_range, TrigEquation, TrigFunction};
/// let eq = TrigEquation::basic(TrigFunction::Sin, 1.0, 0.0, 0.5, 0.0, 360.0);
/// let solutions = solve_in_range(&eq).into_value().unwrap();
/// assert_eq!(solutions.len(), 2);
/// ```
pub mod equations;
pub mod graph;
