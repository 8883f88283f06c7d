//! Key file location.

use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::BaseDirs;

/// `~/.sawtooth/keys`
pub fn default_key_dir() -> anyhow::Result<PathBuf> {
    let dirs = BaseDirs::new().context("could not determine home directory")?;
    Ok(dirs.home_dir().join(".sawtooth").join("keys"))
}

/// `{key_dir}/{username}.priv`
pub fn key_path(key_dir: &Path, username: &str) -> PathBuf {
    key_dir.join(format!("{}.priv", username))
}

/// Explicit key file, else `{key_dir or default}/{username}.priv`.
pub fn resolve_keyfile(
    keyfile: Option<&Path>,
    key_dir: Option<&Path>,
    username: &str,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = keyfile {
        return Ok(path.to_path_buf());
    }
    let key_dir = match key_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_key_dir()?,
    };
    Ok(key_path(&key_dir, username))
}
