//! Control-plane-agnostic types: deployment targets, service snapshots,
//! listener routing, retry budgets.
//!
//! Nothing here talks to the network. Every value is a point-in-time view of
//! external cluster or load-balancer state, re-fetched rather than cached.

pub mod retry;
pub mod routing;
pub mod service;
pub mod target;

pub use retry::RetryBudget;
pub use routing::{HealthState, Listener, ListenerAction, TargetGroup, WeightedTarget};
pub use service::{DeploymentState, LoadBalancerBinding, RolloutStatus, ServiceSnapshot};
pub use target::{DeploymentResource, DeploymentTarget};
