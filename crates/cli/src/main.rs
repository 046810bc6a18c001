use clap::Parser;
use console_params_cli::cli_args::Args;
use console_params_cli::console::{needs_modules, process_console_arguments};
use console_params_core::error::Result;
use console_params_core::module_definitions::ModuleDefinition;
use console_params_core::{config, file_handling};
use log::debug;
use std::process::ExitCode;

/// Load module definitions, but only if some console argument needs them
fn initialize_modules(args: &Args) -> Result<Vec<ModuleDefinition>> {
    if !needs_modules(&args.console_queue()) {
        debug!("No `--run` argument given, skipping module definitions");
        return Ok(Vec::new());
    }

    let modules_path = config::get_modules_path(args.modules_path.as_deref());
    debug!("Modules path: `{}`", modules_path);

    file_handling::get_module_definitions(&modules_path)
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let modules = initialize_modules(&args)?;
    let invocations = process_console_arguments(args.console_queue(), &modules)?;

    for invocation in invocations {
        println!("{invocation}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
