use k8s_openapi::api::core::v1::Pod;

#[derive(Debug, Clone, PartialEq)]
pub struct PodSummary {
    pub name: String,
    pub namespace: String,
    pub containers: Vec<String>,
}

impl From<&Pod> for PodSummary {
    fn from(pod: &Pod) -> Self {
        let meta = &pod.metadata;
        let containers =
            pod.spec.as_ref().map(|spec| spec.containers.iter().map(|c| c.name.clone()).collect()).unwrap_or_default();

        Self {
            name: meta.name.clone().unwrap_or_default(),
            namespace: meta.namespace.clone().unwrap_or_default(),
            containers,
        }
    }
}
