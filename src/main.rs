mod adapters;
mod commands;
mod configs;
mod container;
mod core;
mod errors;
mod logging;
mod usecases;
mod utils;
mod verbs;

use commands::Cli;

fn main() {
    if let Err(e) = Cli::execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
