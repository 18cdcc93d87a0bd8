//! Stale deployment pruning: remove superseded services and their target
//! groups without touching anything still carrying traffic.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{DeploymentTarget, TargetGroup, WeightedTarget};
use crate::error::{Error, Result};
use crate::port::{ClusterApi, LoadBalancingApi};

/// Tag key carrying the application identity.
const APP_TAG: &str = "Waypoint";
/// Tag key carrying the environment label.
const ENVIRONMENT_TAG: &str = "Environment";

/// Removes services and target groups left behind by previous deployments of
/// the same application + environment.
///
/// Candidates are processed strictly one at a time: deleting a service or
/// rewriting a listener invalidates whatever a sibling sharing the load
/// balancer might have observed. The first failure aborts the whole run;
/// mutations already applied are not rolled back.
pub struct StalePruner {
    cluster: Arc<dyn ClusterApi>,
    load_balancing: Arc<dyn LoadBalancingApi>,
}

impl StalePruner {
    pub fn new(cluster: Arc<dyn ClusterApi>, load_balancing: Arc<dyn LoadBalancingApi>) -> Self {
        Self {
            cluster,
            load_balancing,
        }
    }

    pub async fn prune(&self, target: &DeploymentTarget, environment: &str) -> Result<()> {
        let current = self
            .cluster
            .describe_service(&target.cluster, &target.service_name)
            .await?;

        let stale = self
            .stale_service_arns(&target.cluster, &target.app, environment, &current.service_arn)
            .await?;

        info!(
            app = %target.app,
            environment,
            candidates = stale.len(),
            "pruning stale deployments"
        );

        for service_arn in stale {
            self.prune_service(&target.cluster, &service_arn).await?;
        }

        Ok(())
    }

    /// Walk the cluster's full service list (every continuation token is
    /// followed before any filtering), then keep services whose tags match
    /// both the application identity and the environment. The active service
    /// is excluded by ARN, never by tag.
    async fn stale_service_arns(
        &self,
        cluster: &str,
        app: &str,
        environment: &str,
        current_service_arn: &str,
    ) -> Result<Vec<String>> {
        let mut all_arns = Vec::new();
        let mut token: Option<String> = None;
        loop {
            let page = self
                .cluster
                .list_services_page(cluster, token.as_deref())
                .await?;
            all_arns.extend(page.service_arns);
            match page.next_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }
        debug!(services = all_arns.len(), "collected cluster service list");

        let mut stale = Vec::new();
        for arn in all_arns {
            if arn == current_service_arn {
                continue;
            }
            let tags = self.cluster.list_tags(&arn).await?;
            let matches_app = tags.iter().any(|t| t.key == APP_TAG && t.value == app);
            let matches_env = tags
                .iter()
                .any(|t| t.key == ENVIRONMENT_TAG && t.value == environment);
            if matches_app && matches_env {
                stale.push(arn);
            }
        }
        Ok(stale)
    }

    /// Delete one stale service, then detach and delete its target groups.
    ///
    /// The service goes first: the orchestrator does not need an intact
    /// target-group binding to delete it. Each target group is deleted only
    /// after every listener referencing it has been rewritten — the control
    /// plane rejects deleting a target group a listener still forwards to.
    async fn prune_service(&self, cluster: &str, service_arn: &str) -> Result<()> {
        let snapshot = self.cluster.describe_service(cluster, service_arn).await?;
        let target_group_arns = snapshot.target_group_arns();

        info!(service = %snapshot.service_name, "deleting service");
        self.cluster
            .delete_service(cluster, &snapshot.service_name)
            .await?;

        for arn in target_group_arns {
            let target_group = self.load_balancing.describe_target_group(&arn).await?;
            self.detach_from_listeners(&target_group).await?;

            info!(target_group = %arn, "deleting target group");
            self.load_balancing.delete_target_group(&arn).await?;
        }

        Ok(())
    }

    /// Remove a target group from the listeners of its first owning load
    /// balancer. Only pure single-forward listeners are considered;
    /// multi-action and non-forward listeners stay untouched even if they
    /// reference the group. Multi-load-balancer target groups are an
    /// explicit limitation: only the first owner is inspected.
    async fn detach_from_listeners(&self, target_group: &TargetGroup) -> Result<()> {
        let Some(load_balancer_arn) = target_group.load_balancer_arns.first() else {
            debug!(target_group = %target_group.arn, "target group has no load balancer");
            return Ok(());
        };

        info!(
            load_balancer = %load_balancer_arn,
            target_group = %target_group.arn,
            "removing target group from load balancer"
        );

        let listeners = self.load_balancing.describe_listeners(load_balancer_arn).await?;
        for listener in listeners {
            let Some(targets) = listener.single_forward_targets() else {
                continue;
            };
            let Some(entry) = targets
                .iter()
                .find(|t| t.target_group_arn == target_group.arn)
            else {
                continue;
            };

            // Nonzero weight means the listener still routes live traffic
            // here; detaching would drop requests.
            if entry.weight > 0 {
                return Err(Error::TargetGroupStillActive {
                    arn: target_group.arn.clone(),
                    weight: entry.weight,
                });
            }

            let remaining: Vec<WeightedTarget> = targets
                .iter()
                .filter(|t| t.target_group_arn != target_group.arn)
                .cloned()
                .collect();

            info!(listener = %listener.arn, "modifying listener to remove target group");
            self.load_balancing
                .modify_listener_forward(&listener.arn, &remaining)
                .await?;
        }

        Ok(())
    }
}
