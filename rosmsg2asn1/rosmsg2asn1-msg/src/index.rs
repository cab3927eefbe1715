//! Package index: locating .msg definitions on the filesystem.
//!
//! A package is any directory whose `msg/` subdirectory contains `.msg`
//! files; the package name is the directory's own name, matching the layout
//! ROS package crawlers expect. Lookup follows the resolver contract: a
//! qualified `pkg/Name` must match exactly, an unqualified `Name` is
//! searched across all packages and rejected when ambiguous.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use rosmsg2asn1_core::{RecordSchema, ResolveError, SchemaResolver};
use tracing::debug;
use walkdir::WalkDir;

use crate::parser::parse_msg;

/// Index of every `<package>/msg/<Name>.msg` found under the search roots.
#[derive(Debug, Default)]
pub struct PackageIndex {
    /// `"pkg/Name"` → definition file path.
    messages: HashMap<String, PathBuf>,
    /// Unqualified name → qualified candidates, sorted.
    by_name: HashMap<String, Vec<String>>,
}

impl PackageIndex {
    /// Scan `roots` recursively for message definitions.
    ///
    /// Roots that do not exist are skipped with a debug message, so a stale
    /// entry in `ROS_PACKAGE_PATH` does not fail the whole run. When the
    /// same qualified message appears under several roots, the first root
    /// wins.
    pub fn scan<P: AsRef<Path>>(roots: impl IntoIterator<Item = P>) -> Self {
        let mut index = Self::default();
        for root in roots {
            let root = root.as_ref();
            if !root.is_dir() {
                debug!(root = %root.display(), "skipping missing search root");
                continue;
            }
            index.scan_root(root);
        }
        for candidates in index.by_name.values_mut() {
            candidates.sort();
        }
        index
    }

    fn scan_root(&mut self, root: &Path) {
        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "msg") {
                continue;
            }
            let Some(package) = package_of(path) else {
                continue;
            };
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let qualified = format!("{package}/{name}");
            if self.messages.contains_key(&qualified) {
                continue;
            }
            debug!(message = %qualified, path = %path.display(), "indexed message");
            self.by_name
                .entry(name.to_string())
                .or_default()
                .push(qualified.clone());
            self.messages.insert(qualified, path.to_path_buf());
        }
    }

    /// Number of indexed message definitions.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn load(&self, qualified: &str) -> Result<RecordSchema, ResolveError> {
        let Some((path, (package, name))) =
            self.messages.get(qualified).zip(qualified.split_once('/'))
        else {
            return Err(ResolveError::NotFound {
                name: qualified.to_string(),
            });
        };
        let text = fs::read_to_string(path).map_err(|source| ResolveError::Metadata {
            name: qualified.to_string(),
            source: Box::new(source),
        })?;
        parse_msg(package, name, &text).map_err(|source| ResolveError::Metadata {
            name: qualified.to_string(),
            source: Box::new(source),
        })
    }
}

impl SchemaResolver for PackageIndex {
    fn resolve(&self, name: &str) -> Result<RecordSchema, ResolveError> {
        if name.contains('/') {
            return self.load(name);
        }
        match self.by_name.get(name).map(Vec::as_slice) {
            None | Some([]) => Err(ResolveError::NotFound {
                name: name.to_string(),
            }),
            Some([qualified]) => {
                debug!(requested = name, resolved = %qualified, "resolved unqualified message");
                self.load(qualified)
            }
            Some(candidates) => Err(ResolveError::Ambiguous {
                name: name.to_string(),
                candidates: candidates.to_vec(),
            }),
        }
    }
}

/// Package name for a definition at `<package>/msg/<Name>.msg`, if the path
/// has that shape.
fn package_of(path: &Path) -> Option<&str> {
    let msg_dir = path.parent()?;
    if msg_dir.file_name()? != "msg" {
        return None;
    }
    msg_dir.parent()?.file_name()?.to_str()
}
