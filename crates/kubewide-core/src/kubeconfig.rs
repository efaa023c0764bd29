use std::io::Write;
use std::path::{Path, PathBuf};

use kube::config::{Kubeconfig, NamedContext};
use tracing::debug;

use crate::error::{KwError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterContext {
    pub name: String,
    pub cluster: String,
    pub namespace: String,
}

impl From<&NamedContext> for ClusterContext {
    fn from(named: &NamedContext) -> Self {
        let ctx = named.context.as_ref();
        Self {
            name: named.name.clone(),
            cluster: ctx.map(|c| c.cluster.clone()).unwrap_or_default(),
            namespace: ctx.and_then(|c| c.namespace.clone()).unwrap_or_default(),
        }
    }
}

/// All contexts in file order.
pub fn contexts(config: &Kubeconfig) -> Vec<ClusterContext> {
    config.contexts.iter().map(ClusterContext::from).collect()
}

pub fn find_context<'a>(config: &'a Kubeconfig, name: &str) -> Option<&'a NamedContext> {
    config.contexts.iter().find(|c| c.name == name)
}

pub fn current_context_name(config: &Kubeconfig) -> Option<&str> {
    config.current_context.as_deref().filter(|name| !name.is_empty())
}

/// The current context, if the pointer resolves to a known entry.
pub fn current_context(config: &Kubeconfig) -> Option<ClusterContext> {
    current_context_name(config).and_then(|name| find_context(config, name)).map(ClusterContext::from)
}

pub fn context_namespace(config: &Kubeconfig, name: &str) -> Option<String> {
    find_context(config, name).map(|c| ClusterContext::from(c).namespace)
}

/// Sets a context's namespace; an empty value removes the field.
/// Returns false when the context is unknown or carries no body.
pub fn set_context_namespace(config: &mut Kubeconfig, name: &str, namespace: &str) -> bool {
    let Some(ctx) = config.contexts.iter_mut().find(|c| c.name == name).and_then(|c| c.context.as_mut()) else {
        return false;
    };
    ctx.namespace = (!namespace.is_empty()).then(|| namespace.to_string());
    true
}

/// A single kubeconfig file on disk.
#[derive(Debug, Clone)]
pub struct KubeconfigFile {
    path: PathBuf,
}

impl KubeconfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        Self::new(kubewide_config::paths::kubeconfig_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Kubeconfig> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| KwError::preflight("error reading the kubeconfig file", e))?;
        Kubeconfig::from_yaml(&raw).map_err(|e| KwError::preflight("error parsing the kubeconfig file", e))
    }

    /// Replaces the file atomically: the document is written to a sibling
    /// temp file which is then renamed over the existing file.
    pub fn save(&self, config: &Kubeconfig) -> Result<()> {
        let data = serde_yaml::to_string(config)
            .map_err(|e| KwError::persist(&self.path, std::io::Error::other(e)))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| KwError::persist(&self.path, e))?;
        tmp.write_all(data.as_bytes()).map_err(|e| KwError::persist(&self.path, e))?;
        tmp.as_file().sync_all().map_err(|e| KwError::persist(&self.path, e))?;
        tmp.persist(&self.path).map_err(|e| KwError::persist(&self.path, e.error))?;

        debug!(path = %self.path.display(), "kubeconfig written");
        Ok(())
    }
}
