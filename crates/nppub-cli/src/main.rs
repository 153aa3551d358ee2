use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use nppub_core::{GlobalOptions, SystemDefaults};

mod cli;
mod dispatch;
mod output;
mod style;

use cli::NppubCli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = NppubCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let global = GlobalOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        trace: cli.trace,
        json: cli.json,
    };

    let request = dispatch::normalize_request_from_args(&cli);
    let outcome = nppub_core::normalize_package(request, &SystemDefaults)
        .map_err(|err| eyre!("{err:?}"))?;
    let code = output::emit_output(&global, cli.no_color, &outcome)?;

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = format!("nppub={level},nppub_core={level},nppub_domain={level},nppub_cli={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
