//! Cluster control-plane port (ECS).

use async_trait::async_trait;

use crate::domain::ServiceSnapshot;
use crate::error::Result;

/// One page of a service listing, with the continuation token for the next.
#[derive(Debug, Clone, Default)]
pub struct ServicePage {
    pub service_arns: Vec<String>,
    pub next_token: Option<String>,
}

/// A key/value resource tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTag {
    pub key: String,
    pub value: String,
}

impl ResourceTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Operations consumed from the cluster orchestrator.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    /// Fetch a fresh snapshot of a service, identified by name or ARN.
    async fn describe_service(&self, cluster: &str, service: &str) -> Result<ServiceSnapshot>;

    /// Fetch one page (up to 100 entries) of service ARNs in a cluster.
    /// Callers follow `next_token` until it comes back `None`.
    async fn list_services_page(
        &self,
        cluster: &str,
        next_token: Option<&str>,
    ) -> Result<ServicePage>;

    /// Fetch the resource tags attached to a service ARN.
    async fn list_tags(&self, resource_arn: &str) -> Result<Vec<ResourceTag>>;

    /// Delete a service, forcing removal regardless of in-flight tasks.
    async fn delete_service(&self, cluster: &str, service: &str) -> Result<()>;
}
