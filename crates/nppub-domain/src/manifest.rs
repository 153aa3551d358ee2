use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MANIFEST_FILE: &str = "package.json";

/// Package metadata that influences how a publish is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub scope: Option<String>,
    pub publish_config: Option<PublishConfig>,
}

/// The `publishConfig` block of a manifest.
///
/// String fields are kept raw; they are validated together with command-line
/// values once both sources are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishConfig {
    pub tag: Option<String>,
    pub registry: Option<String>,
    pub access: Option<String>,
    pub provenance: Option<bool>,
}

impl PackageManifest {
    /// Build a manifest for `name`, deriving the scope from an `@scope/` prefix.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        let scope = scope_from_name(&name).map(ToOwned::to_owned);
        Self {
            name,
            version: version.into(),
            scope,
            publish_config: None,
        }
    }

    #[must_use]
    pub fn with_publish_config(mut self, publish_config: PublishConfig) -> Self {
        self.publish_config = Some(publish_config);
        self
    }

    /// Parse the contents of a `package.json` document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not valid JSON or lacks a
    /// non-empty `name` or a `version`.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let raw: RawManifest = serde_json::from_str(contents)?;
        let name = match raw.name {
            Some(Value::String(name)) if !name.trim().is_empty() => name,
            _ => return Err(anyhow!("package.json missing a non-empty \"name\"")),
        };
        let version = match raw.version {
            Some(Value::String(version)) if !version.trim().is_empty() => version,
            _ => return Err(anyhow!("package.json missing a non-empty \"version\"")),
        };
        let publish_config = raw.publish_config.map(PublishConfig::from_raw);
        Ok(Self {
            publish_config,
            ..Self::new(name, version)
        })
    }
}

impl PublishConfig {
    fn from_raw(raw: RawPublishConfig) -> Self {
        Self {
            tag: raw.tag.and_then(raw_string),
            registry: raw.registry.and_then(raw_string),
            access: raw.access.and_then(raw_string),
            provenance: raw.provenance.and_then(raw_flag),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    name: Option<Value>,
    version: Option<Value>,
    #[serde(rename = "publishConfig")]
    publish_config: Option<RawPublishConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPublishConfig {
    tag: Option<Value>,
    registry: Option<Value>,
    access: Option<Value>,
    provenance: Option<Value>,
}

fn raw_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn raw_flag(value: Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(flag),
        Value::Number(number) => Some(number.as_f64().is_some_and(|n| n != 0.0)),
        Value::String(text) => Some(!text.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    }
}

/// Returns the `@scope` part of a scoped package name.
#[must_use]
pub fn scope_from_name(name: &str) -> Option<&str> {
    if !name.starts_with('@') {
        return None;
    }
    let (scope, rest) = name.split_once('/')?;
    if scope.len() < 2 || rest.is_empty() {
        return None;
    }
    Some(scope)
}

/// Locate the manifest for `path`, which may name a package directory or the
/// `package.json` file itself.
#[must_use]
pub fn manifest_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(MANIFEST_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Read and parse the manifest at `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not a valid manifest.
pub fn read_manifest(path: impl AsRef<Path>) -> Result<PackageManifest> {
    let path = manifest_path(path.as_ref());
    let contents =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let manifest = PackageManifest::from_json_str(&contents)
        .with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        name = %manifest.name,
        scope = ?manifest.scope,
        publish_config = manifest.publish_config.is_some(),
        "manifest_loaded"
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scope_is_derived_from_scoped_names_only() {
        assert_eq!(scope_from_name("@acme/widgets"), Some("@acme"));
        assert_eq!(scope_from_name("widgets"), None);
        assert_eq!(scope_from_name("@acme"), None);
        assert_eq!(scope_from_name("@/widgets"), None);
        assert_eq!(scope_from_name("@acme/"), None);
    }

    #[test]
    fn parses_publish_config_fields() -> Result<()> {
        let manifest = PackageManifest::from_json_str(
            r#"{
                "name": "@acme/widgets",
                "version": "1.2.3",
                "publishConfig": {
                    "tag": "next",
                    "registry": "https://npm.pkg.github.com/",
                    "access": "restricted",
                    "provenance": true
                }
            }"#,
        )?;
        assert_eq!(manifest.scope.as_deref(), Some("@acme"));
        assert_eq!(
            manifest.publish_config,
            Some(PublishConfig {
                tag: Some("next".to_string()),
                registry: Some("https://npm.pkg.github.com/".to_string()),
                access: Some("restricted".to_string()),
                provenance: Some(true),
            })
        );
        Ok(())
    }

    #[test]
    fn keeps_non_string_publish_config_values_raw() -> Result<()> {
        let manifest = PackageManifest::from_json_str(
            r#"{
                "name": "widgets",
                "version": "1.0.0",
                "publishConfig": { "tag": 42, "access": null, "provenance": 0 }
            }"#,
        )?;
        let config = manifest.publish_config.expect("publish config");
        assert_eq!(config.tag.as_deref(), Some("42"));
        assert_eq!(config.access, None);
        assert_eq!(config.provenance, Some(false));
        Ok(())
    }

    #[test]
    fn rejects_manifests_without_a_name() {
        let err = PackageManifest::from_json_str(r#"{ "version": "1.0.0" }"#)
            .expect_err("name is required");
        assert!(err.to_string().contains("name"), "unexpected error: {err}");

        let err = PackageManifest::from_json_str(r#"{ "name": "  ", "version": "1.0.0" }"#)
            .expect_err("blank name is rejected");
        assert!(err.to_string().contains("name"), "unexpected error: {err}");
    }

    #[test]
    fn read_manifest_accepts_directory_or_file() -> Result<()> {
        let root = tempdir()?;
        fs::write(
            root.path().join(MANIFEST_FILE),
            r#"{ "name": "widgets", "version": "0.1.0" }"#,
        )?;

        let from_dir = read_manifest(root.path())?;
        let from_file = read_manifest(root.path().join(MANIFEST_FILE))?;
        assert_eq!(from_dir, from_file);
        assert_eq!(from_dir.name, "widgets");
        assert_eq!(from_dir.scope, None);
        assert_eq!(from_dir.publish_config, None);
        Ok(())
    }

    #[test]
    fn read_manifest_reports_missing_file() -> Result<()> {
        let root = tempdir()?;
        let err = read_manifest(root.path()).expect_err("manifest is missing");
        assert!(
            format!("{err:#}").contains("package.json"),
            "error should name the manifest: {err:#}"
        );
        Ok(())
    }
}
