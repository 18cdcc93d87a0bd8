//! AWS SDK adapters for the cluster and load-balancing ports.

pub mod cluster;
pub mod elb;

use std::sync::Arc;

use crate::port::{ClusterApi, LoadBalancingApi};

pub use cluster::EcsControlPlane;
pub use elb::ElbControlPlane;

/// Shared client handles for both AWS control planes.
///
/// Built once per run from the standard credential/region chain and passed
/// into components explicitly.
pub struct AwsControlPlanes {
    pub cluster: Arc<dyn ClusterApi>,
    pub load_balancing: Arc<dyn LoadBalancingApi>,
}

impl AwsControlPlanes {
    pub async fn connect() -> Self {
        let config = aws_config::load_from_env().await;
        Self {
            cluster: Arc::new(EcsControlPlane::new(aws_sdk_ecs::Client::new(&config))),
            load_balancing: Arc::new(ElbControlPlane::new(
                aws_sdk_elasticloadbalancingv2::Client::new(&config),
            )),
        }
    }
}
