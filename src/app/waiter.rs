//! Stabilization waiting: block until a fresh deployment has live capacity.

use std::sync::Arc;

use tracing::info;

use crate::app::poll::poll_until;
use crate::domain::{DeploymentTarget, HealthState, RetryBudget, ServiceSnapshot};
use crate::error::{Result, WaitCondition};
use crate::port::{ClusterApi, LoadBalancingApi};

/// Blocks the pipeline until the target service's primary deployment has at
/// least one running task and, when the service is bound to a load balancer,
/// until at least one registered target reports healthy.
///
/// Read-only: the caller observes success or failure, nothing else.
pub struct StabilizationWaiter {
    cluster: Arc<dyn ClusterApi>,
    load_balancing: Arc<dyn LoadBalancingApi>,
    budget: RetryBudget,
}

impl StabilizationWaiter {
    pub fn new(
        cluster: Arc<dyn ClusterApi>,
        load_balancing: Arc<dyn LoadBalancingApi>,
        budget: RetryBudget,
    ) -> Self {
        Self {
            cluster,
            load_balancing,
            budget,
        }
    }

    /// Run both phases in order. Target-health polling only starts once the
    /// service phase has succeeded — an unstable service cannot be
    /// meaningfully health-checked. Each phase gets its own attempt counter.
    pub async fn wait(&self, target: &DeploymentTarget) -> Result<()> {
        let snapshot = self.wait_service_running(target).await?;

        match snapshot.load_balancers.first() {
            Some(binding) => {
                self.wait_target_healthy(&binding.target_group_arn).await?;
            }
            None => {
                info!(
                    service = %snapshot.service_name,
                    "service has no load balancer binding, skipping target health"
                );
            }
        }

        Ok(())
    }

    async fn wait_service_running(&self, target: &DeploymentTarget) -> Result<ServiceSnapshot> {
        info!(
            service = %target.service_name,
            cluster = %target.cluster,
            "waiting until a task in the service is running"
        );

        let cluster = &*self.cluster;
        let snapshot = poll_until(
            &self.budget,
            WaitCondition::ServiceNotStable,
            move || cluster.describe_service(&target.cluster, &target.service_name),
            ServiceSnapshot::has_running_primary,
        )
        .await?;

        info!(service = %snapshot.service_name, "some tasks in the service are running");
        Ok(snapshot)
    }

    async fn wait_target_healthy(&self, target_group_arn: &str) -> Result<()> {
        info!(
            target_group = %target_group_arn,
            "waiting until a target in the target group is healthy"
        );

        let load_balancing = &*self.load_balancing;
        poll_until(
            &self.budget,
            WaitCondition::TargetGroupNotHealthy,
            move || load_balancing.describe_target_health(target_group_arn),
            |targets| targets.iter().any(|t| *t == HealthState::Healthy),
        )
        .await?;

        info!(target_group = %target_group_arn, "some targets in the target group are healthy");
        Ok(())
    }
}
