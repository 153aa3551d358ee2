#![deny(clippy::all, warnings)]

mod core;

pub(crate) use crate::core::{config, logger, options};

pub use crate::core::command::{normalize_package, NormalizeRequest};
pub use crate::core::config::{AmbientDefaults, EnvSnapshot, GlobalOptions, SystemDefaults};
pub use crate::core::logger::{Logger, TracingLogger};
pub use crate::core::options::{
    normalize_options, normalize_options_with, validate_access, validate_registry,
    validate_strategy, validate_tag, validate_token, Access, ConfigValue, NormalizedOptions,
    Options, OptionsError, RegistryInput, Strategy, ACCESS_PUBLIC, ACCESS_RESTRICTED,
    DEFAULT_REGISTRY, STRATEGY_ALL, STRATEGY_UPGRADE, TAG_LATEST,
};
pub use crate::core::tooling::outcome::{
    format_status_message, to_json_response, CommandStatus, ExecutionOutcome, UserError,
};
