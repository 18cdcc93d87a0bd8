//! Application orchestration: target resolution and command dispatch.

pub mod poll;
pub mod pruner;
pub mod waiter;

use std::time::Duration;

use crate::adapter::{AwsControlPlanes, WaypointCli};
use crate::cli::{Cli, Commands, PruneArgs, WaitArgs};
use crate::domain::{DeploymentResource, DeploymentTarget, RetryBudget};
use crate::error::{Error, Result};
use crate::port::DeploymentReporter;

pub use poll::poll_until;
pub use pruner::StalePruner;
pub use waiter::StabilizationWaiter;

/// Platform tag identifying ECS resources in the status report.
const ECS_PLATFORM: &str = "aws-ecs";

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Wait(args) => wait(args).await,
        Commands::Prune(args) => prune(args).await,
    }
}

async fn wait(args: WaitArgs) -> Result<()> {
    let reporter = WaypointCli::from_env();
    let target = resolve_target(
        &reporter,
        &args.app,
        &args.project,
        args.cluster.as_deref(),
    )
    .await?;

    let aws = AwsControlPlanes::connect().await;
    let budget = RetryBudget::new(args.attempts, Duration::from_secs(args.delay_secs));
    StabilizationWaiter::new(aws.cluster, aws.load_balancing, budget)
        .wait(&target)
        .await
}

async fn prune(args: PruneArgs) -> Result<()> {
    let reporter = WaypointCli::from_env();
    let target = resolve_target(&reporter, &args.app, &args.project, None).await?;

    let aws = AwsControlPlanes::connect().await;
    StalePruner::new(aws.cluster, aws.load_balancing)
        .prune(&target, &args.environment)
        .await
}

/// Resolve the active deployment's identity from the status collaborator.
///
/// The service name always comes from the report; the cluster can be
/// overridden on the command line, otherwise it is taken from the report's
/// cluster resource.
pub async fn resolve_target(
    reporter: &dyn DeploymentReporter,
    app: &str,
    project: &str,
    cluster_override: Option<&str>,
) -> Result<DeploymentTarget> {
    let resources = reporter.deployment_resources(app, project).await?;

    let service_name = find_ecs_resource(&resources, "service")?;
    let cluster = match cluster_override {
        Some(cluster) => cluster.to_string(),
        None => find_ecs_resource(&resources, "cluster")?,
    };

    Ok(DeploymentTarget {
        app: app.to_string(),
        project: project.to_string(),
        cluster,
        service_name,
    })
}

fn find_ecs_resource(resources: &[DeploymentResource], kind: &str) -> Result<String> {
    resources
        .iter()
        .find(|r| r.platform == ECS_PLATFORM && r.kind == kind)
        .map(|r| r.name.clone())
        .ok_or_else(|| Error::NotFound(format!("{ECS_PLATFORM} {kind} in deployment status")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::status::FakeReporter;

    fn resource(kind: &str, name: &str, platform: &str) -> DeploymentResource {
        DeploymentResource {
            kind: kind.into(),
            name: name.into(),
            platform: platform.into(),
        }
    }

    #[tokio::test]
    async fn resolves_service_and_cluster_from_the_report() {
        let reporter = FakeReporter::with_resources(vec![
            resource("service", "web-green", "aws-ecs"),
            resource("cluster", "apps", "aws-ecs"),
        ]);

        let target = resolve_target(&reporter, "web", "shop", None).await.unwrap();
        assert_eq!(target.service_name, "web-green");
        assert_eq!(target.cluster, "apps");
        assert_eq!(reporter.calls(), vec![("web".to_string(), "shop".to_string())]);
    }

    #[tokio::test]
    async fn cluster_override_wins_over_the_report() {
        let reporter = FakeReporter::with_resources(vec![
            resource("service", "web-green", "aws-ecs"),
            resource("cluster", "apps", "aws-ecs"),
        ]);

        let target = resolve_target(&reporter, "web", "shop", Some("staging"))
            .await
            .unwrap();
        assert_eq!(target.cluster, "staging");
    }

    #[tokio::test]
    async fn non_ecs_resources_are_ignored() {
        let reporter = FakeReporter::with_resources(vec![
            resource("service", "web-lambda", "aws-lambda"),
            resource("service", "web-green", "aws-ecs"),
            resource("cluster", "apps", "aws-ecs"),
        ]);

        let target = resolve_target(&reporter, "web", "shop", None).await.unwrap();
        assert_eq!(target.service_name, "web-green");
    }

    #[tokio::test]
    async fn missing_service_entry_is_not_found() {
        let reporter =
            FakeReporter::with_resources(vec![resource("cluster", "apps", "aws-ecs")]);

        let err = resolve_target(&reporter, "web", "shop", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_cluster_entry_without_override_is_not_found() {
        let reporter =
            FakeReporter::with_resources(vec![resource("service", "web-green", "aws-ecs")]);

        let err = resolve_target(&reporter, "web", "shop", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
