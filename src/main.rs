//! osrsdiff main entrypoint.

use clap::Parser;
use osrsdiff::cli::parser::Cli;
use osrsdiff::run;
use osrsdiff::ui::messages::{colors_enabled, error};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        // the configuration may be what failed, so only flags and env decide
        error(format!("Error: {}", e), !cli.no_color && colors_enabled());
        std::process::exit(1);
    }
}
