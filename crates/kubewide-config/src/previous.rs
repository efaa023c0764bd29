use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::paths;

/// The context and namespace that were current right before the last
/// successful switch. Empty strings mean nothing was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PreviousValues {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct StoreDocument {
    #[serde(default)]
    previous: PreviousValues,
}

#[derive(Debug, Clone)]
pub struct PreviousStore {
    path: PathBuf,
}

impl PreviousStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        Self::new(paths::previous_store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file yields empty values; an unreadable or malformed one is an error.
    pub fn load(&self) -> io::Result<PreviousValues> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no previous-value store at {}", self.path.display());
                return Ok(PreviousValues::default());
            }
            Err(e) => return Err(e),
        };

        if raw.trim().is_empty() {
            return Ok(PreviousValues::default());
        }

        let doc: StoreDocument = serde_yaml::from_str(&raw)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{}: {e}", self.path.display())))?;
        Ok(doc.previous)
    }

    pub fn persist(&self, values: &PreviousValues) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let doc = StoreDocument { previous: values.clone() };
        let data = serde_yaml::to_string(&doc).map_err(io::Error::other)?;
        std::fs::write(&self.path, data)?;
        debug!(context = %values.context, namespace = %values.namespace, "persisted previous values");
        Ok(())
    }
}
