use nppub_domain::PackageManifest;

use super::{ACCESS_PUBLIC, DEFAULT_REGISTRY, TAG_LATEST};

/// Fallbacks applied to options the caller left unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PublishDefaults {
    pub(crate) tag: String,
    pub(crate) registry: String,
    pub(crate) access: Option<String>,
    pub(crate) provenance: bool,
}

impl PublishDefaults {
    fn fallback(manifest: &PackageManifest) -> Self {
        Self {
            tag: TAG_LATEST.to_string(),
            registry: DEFAULT_REGISTRY.to_string(),
            access: manifest
                .scope
                .is_none()
                .then(|| ACCESS_PUBLIC.to_string()),
            provenance: false,
        }
    }
}

/// Merge the manifest's `publishConfig` over the built-in fallbacks.
///
/// With `force_command_line_options` set, `publishConfig` is skipped and only
/// the fallbacks apply. Unscoped packages always fall back to public access.
pub(crate) fn resolve_defaults(
    manifest: &PackageManifest,
    force_command_line_options: bool,
) -> PublishDefaults {
    let mut defaults = PublishDefaults::fallback(manifest);
    let Some(config) = manifest.publish_config.as_ref() else {
        return defaults;
    };
    if force_command_line_options {
        tracing::debug!(name = %manifest.name, "ignoring publishConfig from manifest");
        return defaults;
    }

    if let Some(tag) = &config.tag {
        defaults.tag.clone_from(tag);
    }
    if let Some(registry) = &config.registry {
        defaults.registry.clone_from(registry);
    }
    if let Some(access) = &config.access {
        defaults.access = Some(access.clone());
    }
    if let Some(provenance) = config.provenance {
        defaults.provenance = provenance;
    }
    tracing::debug!(
        name = %manifest.name,
        tag = %defaults.tag,
        registry = %defaults.registry,
        access = ?defaults.access,
        provenance = defaults.provenance,
        "publish defaults from manifest"
    );
    defaults
}

#[cfg(test)]
mod tests {
    use super::*;
    use nppub_domain::PublishConfig;

    fn full_config() -> PublishConfig {
        PublishConfig {
            tag: Some("next".to_string()),
            registry: Some("https://npm.pkg.github.com/".to_string()),
            access: Some("restricted".to_string()),
            provenance: Some(true),
        }
    }

    #[test]
    fn unscoped_manifest_defaults_to_public() {
        let manifest = PackageManifest::new("widgets", "1.0.0");
        let defaults = resolve_defaults(&manifest, false);
        assert_eq!(
            defaults,
            PublishDefaults {
                tag: "latest".to_string(),
                registry: "https://registry.npmjs.org/".to_string(),
                access: Some("public".to_string()),
                provenance: false,
            }
        );
    }

    #[test]
    fn scoped_manifest_leaves_access_unset() {
        let manifest = PackageManifest::new("@acme/widgets", "1.0.0");
        assert_eq!(resolve_defaults(&manifest, false).access, None);
    }

    #[test]
    fn publish_config_overrides_fallbacks() {
        let manifest = PackageManifest::new("@acme/widgets", "1.0.0").with_publish_config(full_config());
        let defaults = resolve_defaults(&manifest, false);
        assert_eq!(defaults.tag, "next");
        assert_eq!(defaults.registry, "https://npm.pkg.github.com/");
        assert_eq!(defaults.access.as_deref(), Some("restricted"));
        assert!(defaults.provenance);
    }

    #[test]
    fn partial_publish_config_keeps_remaining_fallbacks() {
        let manifest = PackageManifest::new("widgets", "1.0.0").with_publish_config(PublishConfig {
            provenance: Some(true),
            ..PublishConfig::default()
        });
        let defaults = resolve_defaults(&manifest, false);
        assert_eq!(defaults.tag, "latest");
        assert_eq!(defaults.registry, "https://registry.npmjs.org/");
        assert_eq!(defaults.access.as_deref(), Some("public"));
        assert!(defaults.provenance);
    }

    #[test]
    fn forcing_command_line_options_ignores_publish_config() {
        let manifest = PackageManifest::new("widgets", "1.0.0").with_publish_config(full_config());
        let defaults = resolve_defaults(&manifest, true);
        assert_eq!(defaults, PublishDefaults::fallback(&manifest));
        assert_eq!(defaults.tag, "latest");
        assert_eq!(defaults.access.as_deref(), Some("public"));
    }
}
