//! Waypoint CLI implementation of [`DeploymentReporter`].
//!
//! Shells out to `waypoint status -local -json` and parses the
//! `DeploymentResourcesSummary` list from its output. Waypoint prints a
//! human-readable preamble before the JSON document, so everything up to the
//! first `{` is stripped before parsing.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::domain::DeploymentResource;
use crate::error::{Error, Result};
use crate::port::DeploymentReporter;

/// Environment variable overriding the waypoint binary, mainly for tests.
const WAYPOINT_BIN_ENV: &str = "SHIPSHAPE_WAYPOINT_BIN";

pub struct WaypointCli {
    binary: String,
}

impl WaypointCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Use `waypoint` from PATH unless `SHIPSHAPE_WAYPOINT_BIN` says otherwise.
    pub fn from_env() -> Self {
        Self::new(std::env::var(WAYPOINT_BIN_ENV).unwrap_or_else(|_| "waypoint".into()))
    }
}

impl Default for WaypointCli {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait]
impl DeploymentReporter for WaypointCli {
    async fn deployment_resources(
        &self,
        app: &str,
        project: &str,
    ) -> Result<Vec<DeploymentResource>> {
        debug!(app, project, binary = %self.binary, "running waypoint status");
        let output = Command::new(&self.binary)
            .args([
                "status",
                "-local",
                "-json",
                &format!("-project={project}"),
                &format!("-app={app}"),
            ])
            .output()
            .await?;

        if !output.status.success() {
            return Err(Error::Status(format!(
                "waypoint status exited with {}",
                output.status
            )));
        }

        parse_status_output(&String::from_utf8_lossy(&output.stdout))
    }
}

#[derive(Debug, Deserialize)]
struct StatusReport {
    #[serde(rename = "DeploymentResourcesSummary", default)]
    resources: Vec<DeploymentResource>,
}

/// Parse the status document out of raw waypoint output, dropping any leading
/// non-JSON text.
pub fn parse_status_output(raw: &str) -> Result<Vec<DeploymentResource>> {
    let json = raw
        .find('{')
        .map(|start| &raw[start..])
        .ok_or_else(|| Error::Status("no JSON object in waypoint status output".into()))?;

    let report: StatusReport = serde_json::from_str(json)?;
    Ok(report.resources)
}
