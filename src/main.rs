use clap::Parser;
use measurement_generator::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Something went wrong. Printing error info and exiting...");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
