//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/project/assets/     ← cwd
/// /home/user/project/toolforge.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}
