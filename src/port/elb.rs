//! Load-balancing control-plane port (ELBv2).

use async_trait::async_trait;

use crate::domain::{HealthState, Listener, TargetGroup, WeightedTarget};
use crate::error::Result;

/// Operations consumed from the load-balancing control plane.
#[async_trait]
pub trait LoadBalancingApi: Send + Sync {
    /// Fetch a target group and its owning load balancers.
    async fn describe_target_group(&self, target_group_arn: &str) -> Result<TargetGroup>;

    /// Fetch all listeners of a load balancer.
    async fn describe_listeners(&self, load_balancer_arn: &str) -> Result<Vec<Listener>>;

    /// Fetch the health state of every target registered with a target group.
    async fn describe_target_health(&self, target_group_arn: &str) -> Result<Vec<HealthState>>;

    /// Rewrite a listener's default action to a single forward with the given
    /// weighted target list.
    async fn modify_listener_forward(
        &self,
        listener_arn: &str,
        targets: &[WeightedTarget],
    ) -> Result<()>;

    /// Delete a target group. Expected to be rejected upstream while a
    /// listener still references it.
    async fn delete_target_group(&self, target_group_arn: &str) -> Result<()>;
}
