use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use nppub_domain::PackageManifest;
use serde::Serialize;
use serde_json::{json, Value};
use url::Url;

use crate::config::{AmbientDefaults, SystemDefaults};
use crate::logger::Logger;

mod defaults;
mod errors;
mod validate;

pub use errors::OptionsError;
pub use validate::{
    validate_access, validate_registry, validate_strategy, validate_tag, validate_token,
};

pub const TAG_LATEST: &str = "latest";
pub const ACCESS_PUBLIC: &str = "public";
pub const ACCESS_RESTRICTED: &str = "restricted";
pub const STRATEGY_ALL: &str = "all";
pub const STRATEGY_UPGRADE: &str = "upgrade";
pub const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Restricted,
}

impl Access {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => ACCESS_PUBLIC,
            Self::Restricted => ACCESS_RESTRICTED,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether to publish every time or only when the version moved forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    All,
    Upgrade,
}

impl Strategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => STRATEGY_ALL,
            Self::Upgrade => STRATEGY_UPGRADE,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registry given either as an already parsed URL or as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryInput {
    Url(Url),
    Text(String),
}

impl From<Url> for RegistryInput {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<String> for RegistryInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RegistryInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// A validated option paired with whether the caller left it unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigValue<T> {
    value: T,
    is_default: bool,
}

impl<T> ConfigValue<T> {
    /// Validate `raw`, falling back to `default` when it is absent.
    ///
    /// Defaultness follows the absence of `raw`, never the resulting value.
    fn track<R>(
        raw: Option<R>,
        default: R,
        validate: impl FnOnce(R) -> Result<T, OptionsError>,
    ) -> Result<Self, OptionsError> {
        let is_default = raw.is_none();
        let value = validate(raw.unwrap_or(default))?;
        Ok(Self { value, is_default })
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// Raw publish options as supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub token: Option<String>,
    pub registry: Option<RegistryInput>,
    pub tag: Option<String>,
    pub access: Option<String>,
    pub provenance: Option<bool>,
    pub ignore_scripts: Option<bool>,
    pub dry_run: Option<bool>,
    pub strategy: Option<String>,
    pub logger: Option<Arc<dyn Logger>>,
    pub temporary_directory: Option<PathBuf>,
    pub force_command_line_options: bool,
}

/// Publish options after validation and defaulting.
#[derive(Debug, Clone)]
pub struct NormalizedOptions {
    pub registry: Url,
    pub token: String,
    pub tag: ConfigValue<String>,
    pub access: ConfigValue<Option<Access>>,
    pub provenance: ConfigValue<bool>,
    pub ignore_scripts: ConfigValue<bool>,
    pub dry_run: ConfigValue<bool>,
    pub strategy: ConfigValue<Strategy>,
    pub logger: Option<Arc<dyn Logger>>,
    pub temporary_directory: PathBuf,
}

impl NormalizedOptions {
    /// JSON view of the options with the token redacted.
    #[must_use]
    pub fn summary(&self) -> Value {
        json!({
            "registry": self.registry.as_str(),
            "token": redact_token(&self.token),
            "tag": self.tag,
            "access": self.access,
            "provenance": self.provenance,
            "ignore_scripts": self.ignore_scripts,
            "dry_run": self.dry_run,
            "strategy": self.strategy,
            "temporary_directory": self.temporary_directory.display().to_string(),
        })
    }
}

pub(crate) fn redact_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= 8 {
        return "***".to_string();
    }
    let visible: String = token.chars().skip(count - 4).collect();
    format!("***{visible}")
}

/// Validate and default publish options against the package manifest.
///
/// The temporary directory falls back to the system temp directory.
///
/// # Errors
///
/// Returns the first [`OptionsError`] encountered in field order.
pub fn normalize_options(
    manifest: &PackageManifest,
    options: Options,
) -> Result<NormalizedOptions, OptionsError> {
    normalize_options_with(manifest, options, &SystemDefaults)
}

/// Like [`normalize_options`], reading ambient fallbacks from `ambient`.
///
/// # Errors
///
/// Returns the first [`OptionsError`] encountered in field order.
pub fn normalize_options_with(
    manifest: &PackageManifest,
    options: Options,
    ambient: &dyn AmbientDefaults,
) -> Result<NormalizedOptions, OptionsError> {
    let defaults = defaults::resolve_defaults(manifest, options.force_command_line_options);

    let token = validate_token(options.token.as_deref())?.to_string();
    let registry = validate_registry(
        &options
            .registry
            .unwrap_or_else(|| RegistryInput::Text(defaults.registry.clone())),
    )?;
    let tag = ConfigValue::track(options.tag.as_deref(), defaults.tag.as_str(), |tag| {
        validate_tag(tag).map(ToOwned::to_owned)
    })?;
    let access = ConfigValue::track(
        options.access.as_deref().map(Some),
        defaults.access.as_deref(),
        validate_access,
    )?;
    let provenance = ConfigValue::track(options.provenance, defaults.provenance, Ok)?;
    let ignore_scripts = ConfigValue::track(options.ignore_scripts, true, Ok)?;
    let dry_run = ConfigValue::track(options.dry_run, false, Ok)?;
    let strategy =
        ConfigValue::track(options.strategy.as_deref(), STRATEGY_ALL, validate_strategy)?;

    let temporary_directory = options
        .temporary_directory
        .unwrap_or_else(|| ambient.temporary_directory());

    Ok(NormalizedOptions {
        registry,
        token,
        tag,
        access,
        provenance,
        ignore_scripts,
        dry_run,
        strategy,
        logger: options.logger,
        temporary_directory,
    })
}
