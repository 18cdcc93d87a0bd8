//! Scripted [`DeploymentReporter`] fake.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::DeploymentResource;
use crate::error::Result;
use crate::port::DeploymentReporter;

/// A [`DeploymentReporter`] serving scripted resource lists and recording the
/// `(app, project)` pairs it was asked about.
#[derive(Default)]
pub struct FakeReporter {
    results: Mutex<VecDeque<Result<Vec<DeploymentResource>>>>,
    fallback: Mutex<Option<Vec<DeploymentResource>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the same resource list on every call.
    pub fn with_resources(resources: Vec<DeploymentResource>) -> Self {
        let reporter = Self::default();
        *reporter.fallback.lock().unwrap() = Some(resources);
        reporter
    }

    /// Queue one result ahead of the fallback list.
    pub fn push_result(&self, result: Result<Vec<DeploymentResource>>) {
        self.results.lock().unwrap().push_back(result);
    }

    /// `(app, project)` pairs, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeploymentReporter for FakeReporter {
    async fn deployment_resources(
        &self,
        app: &str,
        project: &str,
    ) -> Result<Vec<DeploymentResource>> {
        self.calls
            .lock()
            .unwrap()
            .push((app.to_string(), project.to_string()));
        if let Some(result) = self.results.lock().unwrap().pop_front() {
            return result;
        }
        Ok(self
            .fallback
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_default())
    }
}
