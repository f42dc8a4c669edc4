use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::ops;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Greet { name, upper } => _greet(name, *upper),
        Commands::Add { a, b } => _add(*a, *b),
        Commands::Repeat { text, count, sep } => _repeat(text, *count, sep),
        Commands::Completion { shell } => _completion(*shell),
    }
}

#[instrument]
fn _greet(name: &str, upper: bool) -> CliResult<()> {
    debug!("name: {:?}, upper: {:?}", name, upper);
    let result = ops::greet(name, upper);
    output::result(&result.message);
    Ok(())
}

#[instrument]
fn _add(a: i64, b: i64) -> CliResult<()> {
    debug!("a: {:?}, b: {:?}", a, b);
    let result = ops::add(a, b)?;
    output::result(&result.total);
    Ok(())
}

#[instrument]
fn _repeat(text: &str, count: i64, sep: &str) -> CliResult<()> {
    debug!("text: {:?}, count: {:?}, sep: {:?}", text, count, sep);
    let result = ops::repeat(text, count, sep)?;
    output::result(&result.output);
    Ok(())
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
