//! Production implementations of the control-plane and status ports.

pub mod aws;
pub mod waypoint;

pub use aws::AwsControlPlanes;
pub use waypoint::WaypointCli;
