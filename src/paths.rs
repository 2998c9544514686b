//! Filesystem layout.
//!
//! This module defines WHERE data lives. It has no I/O, no validation, no
//! business logic.
//!
//! ```text
//! ~/.petronorm/
//! └── saved_analyses.json    # The one saved-analyses document
//! ```

use std::path::PathBuf;

/// User's petronorm home directory: `~/.petronorm/`
pub fn petronorm_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".petronorm")
}

/// The saved-analyses document: `~/.petronorm/saved_analyses.json`
pub fn saved_analyses_path() -> PathBuf {
    petronorm_home().join("saved_analyses.json")
}
