//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`cluster`] — Scripted [`ClusterApi`](crate::port::ClusterApi) fake with
//!   per-call records.
//! - [`elb`] — Scripted [`LoadBalancingApi`](crate::port::LoadBalancingApi)
//!   fake with an ordered operation log.
//! - [`status`] — Scripted [`DeploymentReporter`](crate::port::DeploymentReporter)
//!   fake.
//! - [`domain`] — Builders for snapshots, listeners and tags.

pub mod cluster;
pub mod domain;
pub mod elb;
pub mod status;

pub use cluster::FakeClusterApi;
pub use elb::FakeLoadBalancingApi;
pub use status::FakeReporter;
