#[macro_use]
extern crate clap;
extern crate colored;
extern crate image;

use clap::App;
use colored::*;
use std::process;

mod animations;
mod frame;
mod source;

fn main() {
    // The tool takes no operation arguments; clap still provides --help and
    // --version and rejects anything unexpected.
    App::new("animator")
        .version(crate_version!())
        .about(
            "Generates looping GIF animations from the image assets \
             in the current directory",
        )
        .get_matches();

    if let Err(message) = run() {
        eprintln!("{} {}", "Error:".red().bold(), message);
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    animations::opening_gates_exp()?;
    animations::dragon_gates(20)?;

    Ok(())
}
