// crates/infra/src/settings.rs
//! Loads [`FileKitConfig`] from JSON, or YAML with the `yaml` feature.

use std::path::Path;

use filekit_domain::FileKitConfig;
use filekit_shared_kernel::{DomainError, ErrorContext, InfrastructureError, Result, path::logical_absolute};

/// Reads settings from `path`, choosing the format by extension.
///
/// A relative `project_root` is anchored at the settings file's directory.
pub fn load_settings(path: &Path) -> Result<FileKitConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase()).unwrap_or_default();
    let mut config = parse_settings(&text, &ext).with_context(|| format!("loading settings from {}", path.display()))?;

    if config.project_root.is_relative() {
        let base = logical_absolute(path).parent().map(Path::to_path_buf).unwrap_or_default();
        config.project_root = base.join(&config.project_root);
    }
    config.validate()?;
    log::debug!("loaded settings from {} (project root {})", path.display(), config.project_root.display());
    Ok(config)
}

fn parse_settings(text: &str, ext: &str) -> Result<FileKitConfig> {
    match ext {
        "json" => Ok(serde_json::from_str(text)?),
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => Ok(serde_yaml::from_str(text)?),
        other => Err(DomainError::InvalidConfiguration { reason: format!("unsupported settings format '{other}'") }.into()),
    }
}
