use std::time::Duration;

use jiff::Timestamp;
use k8s_openapi::api::core::v1::Namespace;

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceSummary {
    pub name: String,
    pub status: String,
    pub created: Option<Timestamp>,
}

impl NamespaceSummary {
    /// Time since creation, `None` when the cluster did not report it.
    pub fn age_at(&self, now: Timestamp) -> Option<Duration> {
        let diff = now.since(self.created?).ok()?;
        Some(Duration::from_secs(diff.get_seconds().unsigned_abs()))
    }

    pub fn age(&self) -> Option<Duration> {
        self.age_at(Timestamp::now())
    }
}

impl From<&Namespace> for NamespaceSummary {
    fn from(ns: &Namespace) -> Self {
        let meta = &ns.metadata;
        let name = meta.name.clone().unwrap_or_default();
        let status = ns.status.as_ref().and_then(|s| s.phase.as_deref()).unwrap_or("Active").to_string();
        let created = meta.creation_timestamp.as_ref().map(|t| t.0);

        Self { name, status, created }
    }
}

impl From<Namespace> for NamespaceSummary {
    fn from(n: Namespace) -> Self {
        Self::from(&n)
    }
}
