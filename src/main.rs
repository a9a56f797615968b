use std::process;

use clap::Parser;

use correct::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = correct::run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
