pub mod ctl;
pub mod ctx;
pub mod logs;
pub mod ns;

use kube::config::Kubeconfig;
use kubewide_config::{AppConfig, PreviousStore, PreviousValues};
use kubewide_core::{KubeconfigFile, KwError};

/// Where a command reads and writes its state.
#[derive(Debug, Clone)]
pub struct Environment {
    pub kubeconfig: KubeconfigFile,
    pub previous: PreviousStore,
    pub config: AppConfig,
}

impl Environment {
    pub fn from_env() -> Self {
        Self {
            kubeconfig: KubeconfigFile::from_env(),
            previous: PreviousStore::from_env(),
            config: AppConfig::load(),
        }
    }

    pub fn load_kubeconfig(&self) -> Result<Kubeconfig, KwError> {
        self.kubeconfig.load()
    }

    pub fn load_previous(&self) -> Result<PreviousValues, KwError> {
        self.previous.load().map_err(|e| KwError::preflight("error reading the kw config file", e))
    }
}
