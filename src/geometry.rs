/// triangle record with sides/angles, Heron's formula
///# Example
/// ```
/// use RustedSolvers::geometry::triangle::heron_area;
/// use RustedSolvers::solve_result::SolveResult;
/// assert_eq!(heron_area(3.0, 4.0, 5.0), SolveResult::Value(6.0));
/// ```
pub mod triangle;
/// SAS, ASA, SSS criteria
pub mod congruence;
/// area and perimeter of triangles, rectangles, circles, trapezoids and regular polygons
///# Example
/// ```
/// use RustedSolvers::geometry::area::{area, PlaneShape};
/// use RustedSolvers::solve_result::SolveResult;
/// let rect = PlaneShape::Rectangle { width: Some(2.0), length: Some(3.0) };
/// assert_eq!(area(&rect), SolveResult::Value(6.0));
/// ```
pub mod area;
pub mod circle;
/// volume and surface of box, sphere, pyramid and cylinder
pub mod solids;
pub mod similarity;
