//! Per-unit artifact naming.
//!
//! Names are `<tempDir>/<sessionId>_<kind>_<unitId>.<ext>`. They stay unique
//! within a session as long as unit ids do.
use crate::config::SessionId;
use std::path::{Path, PathBuf};

/// Locates the temp artifacts owned by one execution unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    temp_dir: PathBuf,
    prefix: String,
    unit_id: String,
}

impl ArtifactPaths {
    pub fn new(temp_dir: &Path, session: &SessionId, unit_id: &str) -> Self {
        Self {
            temp_dir: temp_dir.to_path_buf(),
            prefix: session.as_str().to_string(),
            unit_id: unit_id.to_string(),
        }
    }

    /// Return the `<session>_rerun_<unit>.txt` path.
    pub fn rerun_file(&self) -> String {
        self.artifact(&format!("{}_rerun_{}.txt", self.prefix, self.unit_id))
    }

    /// Return the `<session>_thread_report_<unit>.<ext>` path.
    pub fn report_file(&self, ext: &str) -> String {
        self.artifact(&format!(
            "{}_thread_report_{}.{ext}",
            self.prefix, self.unit_id
        ))
    }

    fn artifact(&self, file_name: &str) -> String {
        self.temp_dir.join(file_name).to_string_lossy().to_string()
    }
}
