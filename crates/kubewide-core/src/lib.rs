pub mod client;
pub mod error;
pub mod kubeconfig;
pub mod logs;
pub mod resources;
pub mod switch;

pub use client::{KubeClient, StreamReport};
pub use error::{KwError, Result};
pub use kubeconfig::{ClusterContext, KubeconfigFile};
pub use logs::{LogLine, LogOrigin, LogQuery};
pub use resources::{NamespaceSummary, PodSummary};
pub use switch::{ContextTarget, Switched};
