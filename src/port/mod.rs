//! Ports onto the external control planes.
//!
//! Components take these traits as `Arc<dyn …>` handles rather than reaching
//! for module-level singletons, so tests substitute the scripted fakes from
//! [`crate::testkit`] without touching the network.

pub mod cluster;
pub mod elb;
pub mod status;

pub use cluster::{ClusterApi, ResourceTag, ServicePage};
pub use elb::LoadBalancingApi;
pub use status::DeploymentReporter;
