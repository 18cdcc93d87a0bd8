//! Identity of the deployment a run operates on.

use serde::Deserialize;

/// The active deployment's identity, resolved once per run from the
/// deployment tool's status output and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTarget {
    /// Application name within the project.
    pub app: String,
    /// Waypoint project (namespace) the application belongs to.
    pub project: String,
    /// ECS cluster the service runs in.
    pub cluster: String,
    /// Name of the currently active ECS service.
    pub service_name: String,
}

/// One entry of the status report's `DeploymentResourcesSummary` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeploymentResource {
    /// Resource kind, e.g. `service` or `cluster`.
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Name")]
    pub name: String,
    /// Deployment platform, e.g. `aws-ecs`.
    #[serde(rename = "Platform")]
    pub platform: String,
}
