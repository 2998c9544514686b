//! Durable store for named analysis runs.
//!
//! The whole store is one JSON document mapping record name to
//! [`AnalysisRecord`]. Every operation reads the full document into memory;
//! `save` and `delete` write the full document back through an atomic
//! replace (write to `<path>.tmp`, then rename over the target), so a
//! concurrent reader never observes a half-written file.
//!
//! A single logical writer is assumed. Two processes racing to `save` get
//! last-writer-wins on the whole document, not a per-record merge. That is a
//! documented limitation of the format, not something this module papers
//! over.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::minerals::MineralResult;
use crate::norm;
use crate::oxides::OxideComposition;

/// One saved calculation: the input snapshot, its normative result, and user
/// metadata. Immutable once created except for `note`, which may be edited
/// and re-saved under the same name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub note: String,
    pub oxides: OxideComposition,
    pub result: MineralResult,
}

impl AnalysisRecord {
    /// Create a record for a validated composition, computing its normative
    /// result and stamping it with the current time.
    pub fn new(name: impl Into<String>, note: impl Into<String>, oxides: OxideComposition) -> Self {
        Self {
            name: name.into(),
            timestamp: Utc::now(),
            note: note.into(),
            oxides,
            result: norm::compute(&oxides),
        }
    }
}

/// Keyed repository of saved analyses backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct AnalysisStore {
    path: PathBuf,
}

impl AnalysisStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every saved record.
    ///
    /// Fail-soft by contract: an absent, unreadable, or malformed document
    /// yields an empty map rather than an error. This trades strict
    /// corruption detection for availability: a caller cannot tell "no
    /// saved analyses" apart from "corrupt document".
    pub fn load_all(&self) -> BTreeMap<String, AnalysisRecord> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Upsert a record by name and persist the whole document.
    pub fn save(&self, record: &AnalysisRecord) -> Result<()> {
        let mut all = self.load_all();
        all.insert(record.name.clone(), record.clone());
        self.write_document(&all)
    }

    /// Saved names in deterministic (lexicographic) order.
    pub fn list_names(&self) -> Vec<String> {
        self.load_all().into_keys().collect()
    }

    /// Remove a record if present. Deleting a name that does not exist is a
    /// no-op, not an error, and leaves the document untouched.
    pub fn delete(&self, name: &str) -> Result<()> {
        let mut all = self.load_all();
        if all.remove(name).is_some() {
            self.write_document(&all)?;
        }
        Ok(())
    }

    fn write_document(&self, all: &BTreeMap<String, AnalysisRecord>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        let content = serde_json::to_string_pretty(all)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}
