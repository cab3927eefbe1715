//! Persistence boundary for generated ASN.1 modules.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Receives generated modules keyed by the record name they were generated
/// for.
pub trait OutputSink {
    fn persist(&mut self, name: &str, module_text: &str) -> io::Result<()>;
}

/// Writes each module to `<out_dir>/<Name>.asn`, creating the directory on
/// first use and overwriting existing artifacts.
#[derive(Debug)]
pub struct FsSink {
    out_dir: PathBuf,
}

impl FsSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Artifact file name for a record: the unqualified name plus the
    /// `.asn` extension.
    fn artifact_name(name: &str) -> String {
        let unqualified = name.rsplit('/').next().unwrap_or(name);
        format!("{unqualified}.asn")
    }
}

impl OutputSink for FsSink {
    fn persist(&mut self, name: &str, module_text: &str) -> io::Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        fs::write(self.out_dir.join(Self::artifact_name(name)), module_text)
    }
}
