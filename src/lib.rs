//! Shipshape - post-deployment reconciliation for ECS services.
//!
//! Runs after a Waypoint deployment and brings the cluster back to a clean
//! state. Two operations carry the real logic:
//!
//! - **`wait`** ([`app::StabilizationWaiter`]) - block until the freshly
//!   deployed service has a running task under its primary deployment and,
//!   when bound to a load balancer, at least one healthy target.
//! - **`prune`** ([`app::StalePruner`]) - find sibling services of the same
//!   application + environment by tag, detach their target groups from
//!   listeners (zero-weight entries only) and delete both.
//!
//! # Modules
//!
//! - [`cli`] - clap definitions for the two subcommands
//! - [`domain`] - snapshots, routing state, retry budgets
//! - [`port`] - traits onto the ECS / ELBv2 control planes and the
//!   deployment-status collaborator
//! - [`adapter`] - AWS SDK and Waypoint CLI implementations of the ports
//! - [`app`] - target resolution, the generic poller, waiter and pruner
//! - [`error`] - error taxonomy for the crate

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
