//! examples of usage of RustedSolvers
/// equations, inequalities, matrices, polynomials and progressions
pub mod algebra_examples;
/// derivatives, integrals and extrema
pub mod calculus_examples;
/// plane figures, solids, congruence and similarity
pub mod geometry_examples;
/// triangles, identities, equations and graphs
pub mod trigonometry_examples;
/// task documents, sampling and saved solutions
pub mod utils_examples;
