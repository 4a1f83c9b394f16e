use crate::geometry::triangle::TriangleSpec;
use crate::numerical::sampler::SAMPLE_INTERVALS;
use crate::solve_result::SolveResult;
use crate::trigonometry::equations::{TrigEquation, TrigFunction, solve_in_range};
use crate::trigonometry::graph::TrigGraph;
use crate::trigonometry::identities::{IdentityInput, evaluate_identities};
use crate::trigonometry::triangle_solver::{solve_triangle, triangle_area};
use strum::IntoEnumIterator;

pub fn trigonometry_examples(example: usize) {
    match example {
        0 => {
            // two sides and the included angle
            let t = TriangleSpec {
                sides: [None, Some(7.0), Some(5.0)],
                angles: [Some(60.0), None, None],
            };
            match solve_triangle(&t) {
                SolveResult::Value(solved) => {
                    println!("solved: {}", solved);
                    println!("area: {:?}", triangle_area(&solved));
                }
                other => println!("triangle: {}", other.tag()),
            }
        }
        1 => {
            let input = IdentityInput {
                alpha: Some(30.0),
                beta: Some(45.0),
            };
            println!("{:#?}", evaluate_identities(&input));
        }
        2 => {
            for function in TrigFunction::iter() {
                let eq = TrigEquation::basic(function, 2.0, 0.0, 1.0, 0.0, 720.0);
                println!("2{}(x) = 1 on [0, 720]: {:?}", function, solve_in_range(&eq));
            }
        }
        3 => {
            let graph = TrigGraph {
                function: TrigFunction::Sin,
                a: 2.0,
                b: 2.0,
                c: 90.0,
                d: 1.0,
            };
            println!("{}: {:?}", graph.expression(), graph.properties());
            if let SolveResult::Value(points) = graph.sample((0.0, 360.0), (-5.0, 5.0)) {
                let present = points.iter().flatten().count();
                println!("{} of {} points drawn", present, SAMPLE_INTERVALS + 1);
            }
        }
        _ => {
            println!("no such trigonometry example: {}", example);
        }
    }
}
