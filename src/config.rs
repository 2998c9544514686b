use std::path::PathBuf;

use anyhow::Result;

use crate::paths;

/// Per-invocation context, owned by the caller and passed into each command.
///
/// There is deliberately no process-wide session state: everything a command
/// needs to find the store travels through this value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the saved-analyses document.
    pub store_path: PathBuf,
}

impl Config {
    /// Resolve configuration, honoring an explicit `--store` override and
    /// falling back to the well-known location under the user's home.
    pub fn load(store_override: Option<PathBuf>) -> Result<Self> {
        let store_path = store_override.unwrap_or_else(paths::saved_analyses_path);
        Ok(Self { store_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_default() {
        let config = Config::load(Some(PathBuf::from("/tmp/alt.json"))).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/alt.json"));
    }

    #[test]
    fn defaults_to_well_known_path() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.store_path, paths::saved_analyses_path());
    }
}
