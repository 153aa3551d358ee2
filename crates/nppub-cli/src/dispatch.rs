use std::sync::Arc;

use nppub_core::{Logger, NormalizeRequest, Options, RegistryInput, TracingLogger};

use crate::cli::{NppubCli, PublishArgs};

pub fn normalize_request_from_args(cli: &NppubCli) -> NormalizeRequest {
    NormalizeRequest {
        package: cli.package.clone(),
        options: options_from_args(&cli.publish),
    }
}

/// Flags left off the command line stay `None` so manifest defaults apply.
fn options_from_args(args: &PublishArgs) -> Options {
    Options {
        token: args.token.clone(),
        registry: args.registry.clone().map(RegistryInput::from),
        tag: args.tag.clone(),
        access: args.access.clone(),
        provenance: args.provenance,
        ignore_scripts: args.ignore_scripts,
        dry_run: args.dry_run,
        strategy: args.strategy.clone(),
        logger: Some(Arc::new(TracingLogger) as Arc<dyn Logger>),
        temporary_directory: args.temp_dir.clone(),
        force_command_line_options: args.force_command_line_options,
    }
}
