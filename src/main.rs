mod cli;
mod error;
mod generate;
mod lexer;
mod output;
mod parse;
mod types;

use crate::cli::Cli;
use crate::error::GenerateError;
use clap::Parser as ClapParser;
use std::process::ExitCode;
use tracing::{error, info, info_span};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Logging stays off unless EXCEPTION_GENERATOR_LOG holds a filter, e.g. "debug"
    if let Ok(filter) = EnvFilter::try_from_env("EXCEPTION_GENERATOR_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(options: &Cli) -> Result<(), GenerateError> {
    let declarations = {
        let _span = info_span!("parse", input = %options.input.display()).entered();
        parse::load(&options.input, options.wide)?
    };

    let header = {
        let _span = info_span!("render", declarations = declarations.len()).entered();
        generate::cpp::generate_exceptions(
            &generate::module_name(&options.output),
            &declarations,
            &options.includes,
            options.wide,
        )
    };

    output::write_atomically(&options.output, &header)?;

    info!(
        "{} --> {}",
        options.input.display(),
        options.output.display()
    );

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let options = Cli::parse();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let GenerateError::MalformedInsertion {
                specifier, line, ..
            } = &err
            {
                error!(%specifier, line, "aborting on malformed insertion");
            }
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
