use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use nppub_domain::{manifest_path, read_manifest};
use serde_json::json;

use crate::config::AmbientDefaults;
use crate::logger::{Logger, TracingLogger};
use crate::options::{normalize_options_with, Options};
use crate::{ExecutionOutcome, UserError};

#[derive(Debug, Clone)]
pub struct NormalizeRequest {
    /// Package directory or path to its `package.json`.
    pub package: PathBuf,
    pub options: Options,
}

/// Read the package manifest and resolve the options a publish would use.
///
/// Invalid options and unreadable manifests are reported as user errors in
/// the returned outcome.
pub fn normalize_package(
    request: NormalizeRequest,
    ambient: &dyn AmbientDefaults,
) -> Result<ExecutionOutcome> {
    let path = manifest_path(&request.package);
    let manifest = match read_manifest(&path) {
        Ok(manifest) => manifest,
        Err(err) => {
            let error = UserError::new(
                format!("could not read {}", path.display()),
                json!({
                    "reason": "manifest_unreadable",
                    "path": path.display().to_string(),
                    "error": format!("{err:#}"),
                    "hint": "Run from a package directory or pass the path to its package.json.",
                }),
            );
            return Ok(error.into());
        }
    };

    let mut options = request.options;
    let logger = Arc::clone(
        options
            .logger
            .get_or_insert_with(|| Arc::new(TracingLogger) as Arc<dyn Logger>),
    );
    let normalized = match normalize_options_with(&manifest, options, ambient) {
        Ok(normalized) => normalized,
        Err(issue) => {
            logger.error(&issue.to_string());
            return Ok(issue.into_user_error().into());
        }
    };

    let spec = format!("{}@{}", manifest.name, manifest.version);
    logger.debug(&format!(
        "resolved publish options for {spec} (registry {})",
        normalized.registry
    ));
    let mode = if *normalized.dry_run.value() {
        "dry-run"
    } else {
        "publish"
    };
    let message = format!(
        "{mode} {spec} to {} with tag '{}' ({} strategy)",
        normalized.registry,
        normalized.tag.value(),
        normalized.strategy.value(),
    );
    let details = json!({
        "name": manifest.name,
        "version": manifest.version,
        "scope": manifest.scope,
        "manifest": path.display().to_string(),
        "options": normalized.summary(),
    });
    Ok(ExecutionOutcome::success(message, details))
}
