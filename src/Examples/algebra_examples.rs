use crate::algebra::equations::{
    LinearSystem2, QuadraticEquation, solve_linear_system, solve_quadratic, solve_quadratic_complex,
};
use crate::algebra::inequalities::{InequalitySign, solve_absolute, solve_quadratic as solve_quadratic_inequality, solve_rational};
use crate::algebra::matrix::{Matrix, MatrixOperation};
use crate::algebra::polynomial::Polynomial;
use crate::algebra::sequences::{SequenceInput, SequenceKind, nth_term, sum};
use crate::solve_result::SolveResult;
use strum::IntoEnumIterator;

pub fn algebra_examples(example: usize) {
    match example {
        0 => {
            // x² - 5x + 6 = 0
            let eq = QuadraticEquation::new(1.0, -5.0, 6.0);
            println!("real roots: {:?}", solve_quadratic(&eq));
            // x² + 2x + 5 = 0 has no real roots but a conjugate pair
            let eq = QuadraticEquation::new(1.0, 2.0, 5.0);
            println!("real roots: {:?}", solve_quadratic(&eq));
            if let SolveResult::Value((z1, z2)) = solve_quadratic_complex(&eq) {
                println!("complex roots: {}, {}", z1, z2);
            }
            // x + y = 3, x - y = 1
            let system = LinearSystem2::new(1.0, 1.0, 3.0, 1.0, -1.0, 1.0);
            println!("system: {:?}", solve_linear_system(&system));
            // parallel lines
            let system = LinearSystem2::new(1.0, 1.0, 1.0, 2.0, 2.0, 5.0);
            println!("parallel lines: {}", solve_linear_system(&system).tag());
        }
        1 => {
            for (a, b, c) in [(1.0, 0.0, -4.0), (-1.0, 0.0, 4.0), (1.0, 0.0, 1.0)] {
                match solve_quadratic_inequality(a, b, c, InequalitySign::GreaterOrEqual) {
                    SolveResult::Value(set) => println!("{}x² + {}x + {} >= 0: x ∈ {}", a, b, c, set),
                    other => println!("{}x² + {}x + {} >= 0: {}", a, b, c, other.tag()),
                }
            }
            // |2x - 1| < 3
            if let SolveResult::Value(set) = solve_absolute(2.0, -1.0, 3.0, InequalitySign::Less) {
                println!("|2x - 1| < 3: x ∈ {}", set);
            }
            // (x - 1)/(x + 2) >= 0
            if let SolveResult::Value(set) =
                solve_rational(1.0, -1.0, 1.0, 2.0, InequalitySign::GreaterOrEqual)
            {
                println!("(x - 1)/(x + 2) >= 0: x ∈ {}", set);
            }
        }
        2 => {
            let rows_a = vec![vec![2.0, 0.0, 1.0], vec![1.0, 3.0, 2.0], vec![1.0, 1.0, 1.0]];
            let rows_b = vec![vec![1.0, 0.0, 0.0], vec![0.0, 2.0, 0.0], vec![0.0, 0.0, 3.0]];
            let (a, b) = match (Matrix::from_rows(&rows_a), Matrix::from_rows(&rows_b)) {
                (Ok(a), Ok(b)) => (a, b),
                (Err(e), _) | (_, Err(e)) => {
                    println!("bad matrix: {}", e);
                    return;
                }
            };
            println!("A = {}\nB = {}", a, b);
            for op in MatrixOperation::iter() {
                println!("{}: {:?}", op, op.calculate(&a, Some(&b)));
            }
        }
        3 => {
            let p = Polynomial::from_pairs(&[(3.0, 2), (2.0, 1), (-1.0, 0)]);
            println!("p(x) = {}, p(2) = {}", p, p.evaluate(2.0));
            println!("factorize: {}", p.factorize().tag());
            for kind in [SequenceKind::Arithmetic, SequenceKind::Geometric] {
                let input = SequenceInput::new(kind, 2.0, 3.0, 5);
                println!(
                    "{}: a_5 = {:?}, S_5 = {:?}",
                    kind,
                    nth_term(&input),
                    sum(&input)
                );
            }
        }
        _ => {
            println!("no such algebra example: {}", example);
        }
    }
}
