use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};

pub const NPPUB_HELP_TEMPLATE: &str =
    "{before-help}\nUsage:\n    {usage}\n\nArguments:\n{positionals}\n\nOptions:\n{options}\n";

pub const NPPUB_BEFORE_HELP: &str = concat!(
    "nppub ",
    env!("CARGO_PKG_VERSION"),
    " – resolve the options an npm publish will use\n\n",
    "Reads package.json, merges publishConfig with the flags below, validates\n",
    "the result, and prints the resolved configuration.\n",
);

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    before_help = NPPUB_BEFORE_HELP,
    help_template = NPPUB_HELP_TEMPLATE,
    override_usage = "nppub [PACKAGE] [--token TOKEN] [--registry URL] [--tag TAG] [--access public|restricted]"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct NppubCli {
    #[arg(
        value_name = "PACKAGE",
        default_value = ".",
        help = "Package directory or path to its package.json"
    )]
    pub package: PathBuf,
    #[arg(short, long, help = "Suppress human output (errors still set the exit code)")]
    pub quiet: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)")]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q")]
    pub trace: bool,
    #[arg(long, help = "Emit {status,message,details} JSON envelopes")]
    pub json: bool,
    #[arg(long, help = "Disable colored human output")]
    pub no_color: bool,
    #[command(flatten)]
    pub publish: PublishArgs,
}

#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct PublishArgs {
    #[arg(
        long,
        env = "NPM_TOKEN",
        hide_env_values = true,
        help = "npm access token used to publish"
    )]
    pub token: Option<String>,
    #[arg(long, value_name = "URL", help = "Registry to publish to")]
    pub registry: Option<String>,
    #[arg(long, help = "Distribution tag to publish under")]
    pub tag: Option<String>,
    #[arg(long, value_name = "public|restricted", help = "Package access level")]
    pub access: Option<String>,
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Attach provenance attestations to the publish"
    )]
    pub provenance: Option<bool>,
    #[arg(
        long,
        value_name = "BOOL",
        help = "Skip lifecycle scripts while publishing (default: true)"
    )]
    pub ignore_scripts: Option<bool>,
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Resolve everything but do not publish"
    )]
    pub dry_run: Option<bool>,
    #[arg(long, value_name = "all|upgrade", help = "Publish always, or only version upgrades")]
    pub strategy: Option<String>,
    #[arg(long = "temp-dir", value_name = "DIR", help = "Scratch directory for the publish")]
    pub temp_dir: Option<PathBuf>,
    #[arg(long, help = "Ignore publishConfig in package.json")]
    pub force_command_line_options: bool,
}
