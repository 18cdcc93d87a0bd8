//! Deployment-status collaborator port.

use async_trait::async_trait;

use crate::domain::DeploymentResource;
use crate::error::Result;

/// Reports the resources belonging to an application's current deployment.
///
/// The production implementation shells out to the Waypoint CLI; tests script
/// the resource list directly.
#[async_trait]
pub trait DeploymentReporter: Send + Sync {
    /// Resolve the deployment resource summary for a project + application.
    async fn deployment_resources(
        &self,
        app: &str,
        project: &str,
    ) -> Result<Vec<DeploymentResource>>;
}
