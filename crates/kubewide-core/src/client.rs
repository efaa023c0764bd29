use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::api::{ListParams, LogParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{KwError, Result};
use crate::kubeconfig::KubeconfigFile;
use crate::logs::{lossy_lines, spawn_reader, LogOrigin, LogQuery, LogSender};
use crate::resources::{NamespaceSummary, PodSummary};

#[derive(Clone)]
pub struct KubeClient {
    client: Client,
    current_context: String,
}

/// How many per-container streams opened, and which ones did not.
#[derive(Debug, Default)]
pub struct StreamReport {
    pub opened: usize,
    pub failures: Vec<KwError>,
}

impl KubeClient {
    pub async fn from_kubeconfig(kubeconfig: Kubeconfig) -> Result<Self> {
        let current_context = kubeconfig.current_context.clone().unwrap_or_else(|| "unknown".into());
        let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(|e| KwError::preflight("error building config from the kubeconfig", e))?;
        let client =
            Client::try_from(config).map_err(|e| KwError::preflight("error creating the kubernetes client", e))?;

        Ok(Self { client, current_context })
    }

    pub async fn from_file(file: &KubeconfigFile) -> Result<Self> {
        Self::from_kubeconfig(file.load()?).await
    }

    pub fn context(&self) -> &str {
        &self.current_context
    }

    /// Namespaces in the order the API server returns them.
    pub async fn list_namespaces(&self) -> Result<Vec<NamespaceSummary>> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items.iter().map(NamespaceSummary::from).collect())
    }

    /// Every pod in `namespace`, or only the named one.
    pub async fn list_pods(&self, namespace: &str, pod: Option<&str>) -> Result<Vec<PodSummary>> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);

        if let Some(name) = pod {
            let found = api
                .get_opt(name)
                .await?
                .ok_or_else(|| KwError::PodNotFound { namespace: namespace.to_string(), pod: name.to_string() })?;
            return Ok(vec![PodSummary::from(&found)]);
        }

        let list = api.list(&ListParams::default()).await?;
        Ok(list.items.iter().map(PodSummary::from).collect())
    }

    /// Opens a follow stream per matched container and hands each one to its
    /// own reader task feeding `tx`. Returns once all readers are spawned.
    /// Streams that fail to open are reported; the others keep running.
    pub async fn stream_logs(
        &self,
        query: &LogQuery,
        tx: LogSender,
        cancel: CancellationToken,
    ) -> Result<StreamReport> {
        let pods = self.list_pods(&query.namespace, query.pod.as_deref()).await?;
        let api: Api<Pod> = Api::namespaced(self.client.clone(), &query.namespace);
        let mut report = StreamReport::default();

        for pod in pods {
            for container in containers_to_stream(&pod, query.container.as_deref()) {
                let params = LogParams {
                    follow: true,
                    container: Some(container.clone()),
                    tail_lines: query.tail_lines,
                    timestamps: query.timestamps,
                    ..LogParams::default()
                };

                match api.log_stream(&pod.name, &params).await {
                    Ok(reader) => {
                        debug!(pod = %pod.name, %container, "log stream opened");
                        let origin = LogOrigin {
                            namespace: query.namespace.clone(),
                            pod: pod.name.clone(),
                            container,
                        };
                        spawn_reader(origin, lossy_lines(reader), tx.clone(), cancel.clone());
                        report.opened += 1;
                    }
                    Err(source) => {
                        warn!(pod = %pod.name, %container, "failed to open log stream: {source}");
                        report.failures.push(KwError::StreamOpen { pod: pod.name.clone(), container, source });
                    }
                }
            }
        }

        if report.opened == 0 && !report.failures.is_empty() {
            return Err(report.failures.remove(0));
        }
        if report.opened == 0 {
            return Err(KwError::NoStreams(query.namespace.clone()));
        }

        Ok(report)
    }
}

/// The container filter replaces the pod's own container list.
pub fn containers_to_stream(pod: &PodSummary, filter: Option<&str>) -> Vec<String> {
    match filter {
        Some(container) => vec![container.to_string()],
        None => pod.containers.clone(),
    }
}
