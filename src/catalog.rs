//! Filename-parameter index for SOAX export trees.
//!
//! SOAX writes one log per parameter combination, with the parameters
//! encoded in the filename, e.g. `AB (11) g--ridge0.03000--stretch0.7000.txt`
//! inside a per-replicate directory. This module recovers
//! `(sample type, replicate id, ridge, stretch)` from such names and indexes
//! a directory tree so batch callers can select inputs by parameter tuple.

use log::debug;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Parameters recovered from a SOAX export filename.
///
/// `ridge_text` and `stretch_text` keep the exact spelling used in the
/// filename so keys stay ordered, hashable and loss-free; use [`Self::ridge`]
/// and [`Self::stretch`] for numeric values.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourceKey {
    pub sample_type: String,
    pub replicate_id: u32,
    pub ridge_text: String,
    pub stretch_text: String,
}

impl SourceKey {
    /// Ridge threshold as a number, if the filename token parses.
    pub fn ridge(&self) -> Option<f64> {
        self.ridge_text.parse().ok()
    }

    /// Stretch factor as a number, if the filename token parses.
    pub fn stretch(&self) -> Option<f64> {
        self.stretch_text.parse().ok()
    }
}

/// Index of SOAX export files found under one directory tree.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    index: BTreeMap<SourceKey, PathBuf>,
}

impl Catalog {
    /// Recursively scan `root` and index every `.txt` file whose name
    /// matches the SOAX export pattern. Non-matching names are skipped
    /// (logged at debug level); unreadable directories fail the scan.
    pub fn scan(root: &Path) -> Result<Self, String> {
        let pattern = filename_pattern();
        let mut index = BTreeMap::new();
        visit(root, &pattern, &mut index)?;
        Ok(Self { index })
    }

    /// Parse one filename (without directory components).
    pub fn parse_name(name: &str) -> Option<SourceKey> {
        parse_with(&filename_pattern(), name)
    }

    pub fn get(&self, key: &SourceKey) -> Option<&Path> {
        self.index.get(key).map(PathBuf::as_path)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SourceKey> {
        self.index.keys()
    }

    /// All indexed file paths, ordered by key.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.index.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn filename_pattern() -> Regex {
    // e.g. "AB (11) g--ridge0.03000--stretch0.7000.txt"; the token between
    // the replicate and the ridge parameter varies between export runs.
    Regex::new(
        r"^(?P<ty>[A-Za-z]+)\s*\((?P<rep>\d+)\).*?ridge(?P<ridge>\d+(?:\.\d+)?)--stretch(?P<stretch>\d+(?:\.\d+)?)\.txt$",
    )
    .expect("filename pattern is valid")
}

fn parse_with(pattern: &Regex, name: &str) -> Option<SourceKey> {
    let caps = pattern.captures(name)?;
    let replicate_id = caps["rep"].parse().ok()?;
    Some(SourceKey {
        sample_type: caps["ty"].to_string(),
        replicate_id,
        ridge_text: caps["ridge"].to_string(),
        stretch_text: caps["stretch"].to_string(),
    })
}

fn visit(
    dir: &Path,
    pattern: &Regex,
    index: &mut BTreeMap<SourceKey, PathBuf>,
) -> Result<(), String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
        let path = entry.path();
        // file_type() does not follow symlinks; a symlinked directory could
        // form a cycle under the scan root.
        let file_type = entry
            .file_type()
            .map_err(|e| format!("Failed to stat {}: {e}", path.display()))?;
        if file_type.is_dir() {
            visit(&path, pattern, index)?;
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match parse_with(pattern, name) {
            Some(key) => {
                index.insert(key, path);
            }
            None => debug!("catalog: skipping unrecognized name {name:?}"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_export_name() {
        let key = Catalog::parse_name("AB (11) g--ridge0.03000--stretch0.7000.txt").unwrap();
        assert_eq!(key.sample_type, "AB");
        assert_eq!(key.replicate_id, 11);
        assert_eq!(key.ridge_text, "0.03000");
        assert_eq!(key.stretch_text, "0.7000");
        assert_eq!(key.ridge(), Some(0.03));
        assert_eq!(key.stretch(), Some(0.7));
    }

    #[test]
    fn parses_name_without_space_before_replicate() {
        let key = Catalog::parse_name("BB(3) g--ridge0.01000--stretch1.0000.txt").unwrap();
        assert_eq!(key.sample_type, "BB");
        assert_eq!(key.replicate_id, 3);
    }

    #[test]
    fn rejects_names_without_parameters() {
        assert!(Catalog::parse_name("notes.txt").is_none());
        assert!(Catalog::parse_name("AB (11).txt").is_none());
        assert!(Catalog::parse_name("AB (11) g--ridge0.03--stretch0.7.png").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn scan_ignores_symlinked_directory_cycles() {
        let root = std::env::temp_dir().join(format!("soax-catalog-scan-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).expect("create scan root");
        std::fs::write(
            root.join("AB (1) g--ridge0.03000--stretch0.7000.txt"),
            "#\n",
        )
        .expect("write export");
        std::os::unix::fs::symlink(&root, root.join("loop")).expect("create cycle");

        let catalog = Catalog::scan(&root).expect("scan terminates");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn keys_order_by_type_then_replicate() {
        let a = Catalog::parse_name("AB (2) g--ridge0.03000--stretch0.7000.txt").unwrap();
        let b = Catalog::parse_name("AB (11) g--ridge0.03000--stretch0.7000.txt").unwrap();
        assert!(a < b);
    }
}
