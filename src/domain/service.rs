//! Point-in-time view of an ECS service.

/// Rollout state tag of a single deployment within a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloutStatus {
    /// The current rollout, the one whose task count decides readiness.
    Primary,
    /// A prior rollout still draining.
    Active,
    /// Anything else the control plane reports.
    Inactive,
}

impl RolloutStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "PRIMARY" => Self::Primary,
            "ACTIVE" => Self::Active,
            _ => Self::Inactive,
        }
    }
}

/// One deployment (rollout) within a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentState {
    pub status: RolloutStatus,
    pub running_count: i32,
}

/// A service's binding to a load-balancer target group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancerBinding {
    pub target_group_arn: String,
}

/// A fresh, independent snapshot of a service. Produced by every poll
/// iteration and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSnapshot {
    pub service_name: String,
    pub service_arn: String,
    pub cluster_arn: String,
    pub deployments: Vec<DeploymentState>,
    pub load_balancers: Vec<LoadBalancerBinding>,
}

impl ServiceSnapshot {
    /// Running-task count of the deployment flagged PRIMARY, 0 if absent.
    pub fn primary_running_count(&self) -> i32 {
        self.deployments
            .iter()
            .find(|d| d.status == RolloutStatus::Primary)
            .map_or(0, |d| d.running_count)
    }

    /// Readiness condition for the service phase of stabilization.
    pub fn has_running_primary(&self) -> bool {
        self.primary_running_count() > 0
    }

    /// ARNs of all bound target groups, in binding order.
    pub fn target_group_arns(&self) -> Vec<String> {
        self.load_balancers
            .iter()
            .map(|lb| lb.target_group_arn.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(deployments: Vec<DeploymentState>) -> ServiceSnapshot {
        ServiceSnapshot {
            service_name: "web-green".into(),
            service_arn: "arn:aws:ecs:us-east-1:1:service/web-green".into(),
            cluster_arn: "arn:aws:ecs:us-east-1:1:cluster/apps".into(),
            deployments,
            load_balancers: Vec::new(),
        }
    }

    #[test]
    fn primary_running_count_picks_the_primary_deployment() {
        let snap = snapshot(vec![
            DeploymentState {
                status: RolloutStatus::Active,
                running_count: 7,
            },
            DeploymentState {
                status: RolloutStatus::Primary,
                running_count: 2,
            },
        ]);
        assert_eq!(snap.primary_running_count(), 2);
        assert!(snap.has_running_primary());
    }

    #[test]
    fn no_primary_deployment_counts_as_zero() {
        let snap = snapshot(vec![DeploymentState {
            status: RolloutStatus::Active,
            running_count: 3,
        }]);
        assert_eq!(snap.primary_running_count(), 0);
        assert!(!snap.has_running_primary());
    }

    #[test]
    fn rollout_status_parses_known_tags() {
        assert_eq!(RolloutStatus::parse("PRIMARY"), RolloutStatus::Primary);
        assert_eq!(RolloutStatus::parse("ACTIVE"), RolloutStatus::Active);
        assert_eq!(RolloutStatus::parse("INACTIVE"), RolloutStatus::Inactive);
        assert_eq!(RolloutStatus::parse("whatever"), RolloutStatus::Inactive);
    }
}
