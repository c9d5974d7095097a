use crate::error::{AdScoreError, Result};
use crate::types::config::AdScoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "adscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".adscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/adscore/config.toml";

/// Load and merge the global, project and local layers found for `root`.
///
/// Returns `None` when none of the layers exist.
pub fn load_config(root: &Path) -> Result<Option<AdScoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<AdScoreConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    if !found {
        return Ok(None);
    }

    let cfg: AdScoreConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AdScoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    debug!(path = %path.display(), "merged config layer");
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AdScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::MissingPicturePolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
timezone = "UTC"
on_missing_picture = "skip"

[cache]
dir = "global-cache"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scoring]
timezone = "Europe/Madrid"

[cache]
enabled = false
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".adscore")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[scoring]
on_missing_picture = "abort"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.timezone_name(), "Europe/Madrid");
        assert_eq!(cfg.missing_picture_policy(), MissingPicturePolicy::Abort);
        assert!(!cfg.cache_enabled());
        assert_eq!(cfg.cache_dir(), "global-cache");
    }

    #[test]
    fn load_config_rejects_invalid_layer() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[scoring]\ntimezone = \"Nowhere/Special\"\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, AdScoreError::ConfigParse(_)));
    }

    #[test]
    fn load_config_reports_malformed_toml_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[scoring\n")
            .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
