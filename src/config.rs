use crate::error::{NavigatorError, Result};
use crate::types::config::NavigatorConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const CONFIG_FILE: &str = "archnav.toml";
pub const GLOBAL_CONFIG_FILE: &str = ".config/archnav/config.toml";

/// Loads layered configuration: the global file under `$HOME` first, then the
/// working-directory file on top. Returns `Ok(None)` when neither exists.
pub fn load_config(cwd: &Path) -> Result<Option<NavigatorConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(GLOBAL_CONFIG_FILE));
    load_config_with_global(cwd, global.as_deref())
}

pub(crate) fn load_config_with_global(
    cwd: &Path,
    global_path: Option<&Path>,
) -> Result<Option<NavigatorConfig>> {
    let local_path = cwd.join(CONFIG_FILE);
    let global_exists = global_path.is_some_and(|path| path.exists());
    if !local_path.exists() && !global_exists {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &local_path)?;

    let cfg: NavigatorConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| NavigatorError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    tracing::debug!(path = %path.display(), "merged config layer");
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| NavigatorError::ConfigParse(format!("{}: {}", path.display(), e)))
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
