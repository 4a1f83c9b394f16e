use crate::Utils::logger::{save_samples_to_csv, save_samples_to_file};
use crate::Utils::plots::plot_samples;
use crate::Utils::report::render_reports;
use crate::Utils::saved_solutions::SolutionStore;
use crate::Utils::task_runner::run_document;
use crate::numerical::sampler::{SAMPLE_INTERVALS, grid, sample};
use crate::solve_result::SolveResult;

pub fn utils_examples(example: usize) {
    match example {
        0 => {
            let input = r#"
                // one section per calculator
                quadratic
                 a: 1 b: -3 c: 2
                linear_system
                 a1: 2 b1: 1 c1: 5 a2: 1 b2: -1 c2: 1
                rational_inequality
                 a: 1 b: -1 c: 1 d: 2 sign: >=
                matrix
                 op: determinant rows: 3 cols: 3 a: 2, 0, 1, 1, 3, 2, 1, 1, 1
                integral
                 coefficients: 3, 2 powers: 2, 1 lower: 0 upper: 1
                area
                 shape: polygon n: 6 side: 2
                trig_identity
                 alpha: 60 beta: 30
                trig_graph
                 func: cos a: 3 b: 2 c: 0 d: -1
                limit
                 expression: sin(x)/x point: 0
            "#;
            match run_document(input) {
                Ok(reports) => println!("{}", render_reports(&reports)),
                Err(e) => println!("{}", e),
            }
        }
        1 => {
            let expression = "1/(x-1)";
            let domain = (-4.0, 4.0);
            let codomain = (-10.0, 10.0);
            match sample(expression, domain, codomain) {
                SolveResult::Value(points) => {
                    let xs = grid(domain, SAMPLE_INTERVALS);
                    let saved = save_samples_to_file(&points, &xs, "samples.txt")
                        .and_then(|_| save_samples_to_csv(&points, &xs, "samples.csv"));
                    if let Err(e) = saved {
                        println!("cannot save samples: {}", e);
                    }
                    if let Err(e) = plot_samples(expression, &points, domain, codomain, "samples.png") {
                        println!("cannot plot: {}", e);
                    }
                }
                other => println!("sampling: {}", other.tag()),
            }
        }
        2 => {
            let store = SolutionStore::new("saved_solutions.toml");
            let mut data = toml::Table::new();
            data.insert("a".to_string(), toml::Value::Float(1.0));
            data.insert("b".to_string(), toml::Value::Float(-3.0));
            data.insert("c".to_string(), toml::Value::Float(2.0));
            let saved = store.save("quadratic", data).and_then(|record| {
                println!("saved {:?}", record);
                store.list()
            });
            match saved {
                Ok(all) => println!("{} solutions stored", all.len()),
                Err(e) => println!("store failed: {}", e),
            }
        }
        _ => {
            println!("no such utils example: {}", example);
        }
    }
}
