//! Locations of the files `kw` reads and writes.
//!
//! Each path has an environment override; otherwise it lives under the
//! user's home directory next to the kubeconfig.

use std::ffi::OsString;
use std::path::PathBuf;

/// Overrides the previous-value store location.
pub const PREVIOUS_STORE_ENV: &str = "KW_CONFIG";
/// Overrides the kubeconfig location.
pub const KUBECONFIG_OVERRIDE_ENV: &str = "K8S_CONFIG";
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

pub fn previous_store_path() -> PathBuf {
    previous_store_path_from(std::env::var_os(PREVIOUS_STORE_ENV))
}

pub fn kubeconfig_path() -> PathBuf {
    kubeconfig_path_from(std::env::var_os(KUBECONFIG_OVERRIDE_ENV), std::env::var_os(KUBECONFIG_ENV))
}

fn kube_dir() -> PathBuf {
    kube_dir_under(dirs::home_dir())
}

// Without a home directory the files resolve relative to the working directory.
fn kube_dir_under(home: Option<PathBuf>) -> PathBuf {
    home.unwrap_or_else(|| PathBuf::from(".")).join(".kube")
}

fn previous_store_path_from(env: Option<OsString>) -> PathBuf {
    match env {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => kube_dir().join(".kw.yml"),
    }
}

// `K8S_CONFIG` wins, then the first existing `KUBECONFIG` entry.
fn kubeconfig_path_from(override_env: Option<OsString>, kubeconfig_env: Option<OsString>) -> PathBuf {
    if let Some(path) = override_env.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    if let Some(paths) = kubeconfig_env {
        if let Some(path) = std::env::split_paths(&paths).filter(|p| !p.as_os_str().is_empty()).find(|p| p.exists()) {
            return path;
        }
    }

    kube_dir().join("config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_store_env_override_wins() {
        let path = previous_store_path_from(Some("/tmp/kw.yml".into()));
        assert_eq!(path, PathBuf::from("/tmp/kw.yml"));
    }

    #[test]
    fn previous_store_defaults_under_home() {
        let path = previous_store_path_from(None);
        assert!(path.ends_with(".kube/.kw.yml"));
    }

    #[test]
    fn missing_home_falls_back_to_working_directory() {
        assert_eq!(kube_dir_under(None), PathBuf::from(".").join(".kube"));
        assert_eq!(kube_dir_under(Some("/home/dev".into())), PathBuf::from("/home/dev/.kube"));
    }

    #[test]
    fn previous_store_ignores_empty_override() {
        let path = previous_store_path_from(Some("".into()));
        assert!(path.ends_with(".kube/.kw.yml"));
    }

    #[test]
    fn kubeconfig_override_beats_kubeconfig_env() {
        let path = kubeconfig_path_from(Some("/etc/kw/config".into()), Some("/nope/config".into()));
        assert_eq!(path, PathBuf::from("/etc/kw/config"));
    }

    #[test]
    fn kubeconfig_env_picks_first_existing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present");
        std::fs::write(&present, "").unwrap();
        let missing = dir.path().join("missing");

        let joined = std::env::join_paths([missing, present.clone()]).unwrap();
        let path = kubeconfig_path_from(None, Some(joined));
        assert_eq!(path, present);
    }

    #[test]
    fn kubeconfig_defaults_under_home() {
        let path = kubeconfig_path_from(None, None);
        assert!(path.ends_with(".kube/config"));
    }
}
