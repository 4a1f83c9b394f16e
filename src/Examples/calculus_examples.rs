use crate::algebra::polynomial::Polynomial;
use crate::calculus::derivative::differentiate;
use crate::calculus::integral::{integrate_definite, integrate_indefinite};
use crate::calculus::optimization::find_extrema;
use crate::solve_result::SolveResult;

pub fn calculus_examples(example: usize) {
    match example {
        0 => {
            let p = Polynomial::from_pairs(&[(4.0, 3), (-3.0, 2), (2.0, 1), (-7.0, 0)]);
            if let SolveResult::Value(d) = differentiate(&p) {
                println!("d/dx ({}) = {}", p, d);
            }
            if let SolveResult::Value(big_f) = integrate_indefinite(&p) {
                println!("∫ ({}) dx = {} + C", p, big_f);
            }
            println!(
                "∫[0, 2] ({}) dx = {:?}",
                p,
                integrate_definite(&p, Some(0.0), Some(2.0))
            );
        }
        1 => {
            // x³ - 3x: maximum at -1, minimum at 1, inflection at 0
            let p = Polynomial::from_pairs(&[(1.0, 3), (-3.0, 1)]);
            match find_extrema(&p, None) {
                SolveResult::Value(e) => {
                    println!("maxima {:?}", e.maxima);
                    println!("minima {:?}", e.minima);
                    println!("inflections {:?}", e.inflections);
                }
                other => println!("extrema: {}", other.tag()),
            }
            // the same curve seen only on [0, 2]
            println!("on [0, 2]: {:?}", find_extrema(&p, Some((0.0, 2.0))));
        }
        _ => {
            println!("no such calculus example: {}", example);
        }
    }
}
