//! Builders for domain values used across tests.

use crate::domain::{
    DeploymentState, DeploymentTarget, Listener, ListenerAction, LoadBalancerBinding,
    RolloutStatus, ServiceSnapshot, TargetGroup, WeightedTarget,
};
use crate::port::ResourceTag;

/// A deployment target for cluster `apps`, service `web-green`.
pub fn target() -> DeploymentTarget {
    DeploymentTarget {
        app: "web".into(),
        project: "shop".into(),
        cluster: "apps".into(),
        service_name: "web-green".into(),
    }
}

/// A snapshot whose primary deployment has `running` tasks.
pub fn snapshot(name: &str, running: i32) -> ServiceSnapshot {
    ServiceSnapshot {
        service_name: name.into(),
        service_arn: format!("arn:aws:ecs:us-east-1:1:service/apps/{name}"),
        cluster_arn: "arn:aws:ecs:us-east-1:1:cluster/apps".into(),
        deployments: vec![DeploymentState {
            status: RolloutStatus::Primary,
            running_count: running,
        }],
        load_balancers: Vec::new(),
    }
}

/// Same as [`snapshot`] but bound to one target group.
pub fn snapshot_with_target_group(name: &str, running: i32, target_group_arn: &str) -> ServiceSnapshot {
    let mut snap = snapshot(name, running);
    snap.load_balancers = vec![LoadBalancerBinding {
        target_group_arn: target_group_arn.into(),
    }];
    snap
}

/// A target group owned by the given load balancers.
pub fn target_group(arn: &str, load_balancer_arns: &[&str]) -> TargetGroup {
    TargetGroup {
        arn: arn.into(),
        load_balancer_arns: load_balancer_arns.iter().map(|s| s.to_string()).collect(),
    }
}

/// A pure single-forward listener over `(target group, weight)` pairs.
pub fn forward_listener(arn: &str, targets: &[(&str, u64)]) -> Listener {
    Listener {
        arn: arn.into(),
        actions: vec![ListenerAction::Forward {
            targets: targets
                .iter()
                .map(|(tg, weight)| WeightedTarget {
                    target_group_arn: tg.to_string(),
                    weight: *weight,
                })
                .collect(),
        }],
    }
}

/// Tags matching the pruner's candidate filter.
pub fn matching_tags(app: &str, environment: &str) -> Vec<ResourceTag> {
    vec![
        ResourceTag::new("Waypoint", app),
        ResourceTag::new("Environment", environment),
    ]
}
