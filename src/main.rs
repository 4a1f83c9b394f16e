#![allow(non_snake_case)]
use RustedSolvers::Examples::algebra_examples::algebra_examples;
use RustedSolvers::Examples::calculus_examples::calculus_examples;
use RustedSolvers::Examples::geometry_examples::geometry_examples;
use RustedSolvers::Examples::trigonometry_examples::trigonometry_examples;
use RustedSolvers::Examples::utils_examples::utils_examples;
use RustedSolvers::Utils::logger::init_logger;
use RustedSolvers::Utils::report::render_reports;
use RustedSolvers::Utils::saved_solutions::SolutionStore;
use RustedSolvers::Utils::task_runner::run_document;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "RustedSolvers",
    version,
    about = "closed-form solvers for algebra, calculus, geometry and trigonometry"
)]
struct Cli {
    /// debug, info, warn, error or off
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    /// also write the log into log_<date>.txt
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every task of a task document and print the results
    Run {
        file: PathBuf,

        /// Append every solved task to this solution store
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Run one of the built-in examples
    Example {
        #[arg(value_enum)]
        area: ExampleArea,

        #[arg(default_value = "0")]
        number: usize,
    },

    /// List saved solutions
    List {
        #[arg(short, long, default_value = "saved_solutions.toml")]
        store: PathBuf,
    },

    /// Print one saved solution
    Show {
        id: String,

        #[arg(short, long, default_value = "saved_solutions.toml")]
        store: PathBuf,
    },

    /// Delete one saved solution
    Delete {
        id: String,

        #[arg(short, long, default_value = "saved_solutions.toml")]
        store: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExampleArea {
    Algebra,
    Calculus,
    Geometry,
    Trigonometry,
    Utils,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logger(&cli.log, cli.log_file)?;

    match cli.command {
        Commands::Run { file, save } => {
            let input = fs::read_to_string(&file)?;
            let reports = run_document(&input)?;
            println!("{}", render_reports(&reports));
            if let Some(path) = save {
                let store = SolutionStore::new(&path);
                for report in reports.iter().filter(|r| r.outcome == "value") {
                    let record = store.save(&report.title, report.to_toml())?;
                    info!("{} saved as {}", report.title, record.id);
                }
            }
        }
        Commands::Example { area, number } => match area {
            ExampleArea::Algebra => algebra_examples(number),
            ExampleArea::Calculus => calculus_examples(number),
            ExampleArea::Geometry => geometry_examples(number),
            ExampleArea::Trigonometry => trigonometry_examples(number),
            ExampleArea::Utils => utils_examples(number),
        },
        Commands::List { store } => {
            for record in SolutionStore::new(&store).list()? {
                println!("{}  {}  {}", record.id, record.kind, record.timestamp);
            }
        }
        Commands::Show { id, store } => match SolutionStore::new(&store).get(&id)? {
            Some(record) => println!("{}", toml::to_string_pretty(&record)?),
            None => println!("no saved solution {}", id),
        },
        Commands::Delete { id, store } => {
            if SolutionStore::new(&store).delete(&id)? {
                println!("deleted {}", id);
            } else {
                println!("no saved solution {}", id);
            }
        }
    }
    Ok(())
}
