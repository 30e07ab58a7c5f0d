use anyhow::Result;
use clap::{arg, Command};
use std::{fs, path::PathBuf, time::Instant};
use stockpick_cli::report::{render, TimeStyle};
use stockpick_core::load_candidates;
use stockpick_solvers::greedy;

fn cli() -> Command {
    Command::new("stockpick-greedy")
        .about("Selects a purchase quickly with a ratio-ranked greedy pass")
        .arg(
            arg!(--file <FILE> "Path to CSV file with candidate data")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--budget [BUDGET] "Investment budget")
                .default_value("500")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--output [OUTPUT_FILE] "If set, the selection will be saved to this file path as json")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = run(
        matches.get_one::<PathBuf>("file").unwrap().clone(),
        *matches.get_one::<f64>("budget").unwrap(),
        matches.get_one::<PathBuf>("output").cloned(),
    ) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(file: PathBuf, budget: f64, output: Option<PathBuf>) -> Result<()> {
    let candidates = load_candidates::<f64>(&file)?;
    let start = Instant::now();
    let selection = greedy::solve(&candidates, budget)?;
    let elapsed = start.elapsed();
    println!("{}", render(&selection, budget, elapsed, TimeStyle::Labelled));
    if let Some(path) = output {
        fs::write(&path, serde_json::to_string(&selection)?)?;
    }
    Ok(())
}
