//! Scripted [`ClusterApi`] fake.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ServiceSnapshot;
use crate::error::{Error, Result};
use crate::port::{ClusterApi, ResourceTag, ServicePage};

/// A [`ClusterApi`] with scripted responses and call records.
///
/// `describe_service` pops from a scripted queue first and falls back to a
/// by-key map (keyed by whatever identifier the caller passed, name or ARN).
/// The queue suits polling tests; the map suits pruning tests that describe
/// several distinct services.
#[derive(Default)]
pub struct FakeClusterApi {
    describe_queue: Mutex<VecDeque<Result<ServiceSnapshot>>>,
    services: Mutex<HashMap<String, ServiceSnapshot>>,
    pages: Mutex<VecDeque<ServicePage>>,
    tags: Mutex<HashMap<String, Vec<ResourceTag>>>,
    describe_count: AtomicU32,
    page_requests: Mutex<Vec<Option<String>>>,
    deleted: Mutex<Vec<String>>,
}

impl FakeClusterApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one `describe_service` result.
    pub fn push_describe(&self, result: Result<ServiceSnapshot>) {
        self.describe_queue.lock().unwrap().push_back(result);
    }

    /// Queue the same snapshot `n` times.
    pub fn push_describe_repeated(&self, n: u32, snapshot: ServiceSnapshot) {
        let mut queue = self.describe_queue.lock().unwrap();
        for _ in 0..n {
            queue.push_back(Ok(snapshot.clone()));
        }
    }

    /// Register a snapshot served whenever the queue is empty.
    pub fn insert_service(&self, key: impl Into<String>, snapshot: ServiceSnapshot) {
        self.services.lock().unwrap().insert(key.into(), snapshot);
    }

    /// Queue one `list_services_page` page.
    pub fn push_page(&self, service_arns: Vec<String>, next_token: Option<&str>) {
        self.pages.lock().unwrap().push_back(ServicePage {
            service_arns,
            next_token: next_token.map(str::to_string),
        });
    }

    /// Register the tags returned for a resource ARN.
    pub fn insert_tags(&self, resource_arn: impl Into<String>, tags: Vec<ResourceTag>) {
        self.tags.lock().unwrap().insert(resource_arn.into(), tags);
    }

    /// How many times `describe_service` was called.
    pub fn describe_count(&self) -> u32 {
        self.describe_count.load(Ordering::SeqCst)
    }

    /// Continuation tokens seen by `list_services_page`, in call order.
    pub fn page_requests(&self) -> Vec<Option<String>> {
        self.page_requests.lock().unwrap().clone()
    }

    /// Services deleted, in call order.
    pub fn deleted_services(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClusterApi for FakeClusterApi {
    async fn describe_service(&self, _cluster: &str, service: &str) -> Result<ServiceSnapshot> {
        self.describe_count.fetch_add(1, Ordering::SeqCst);
        if let Some(result) = self.describe_queue.lock().unwrap().pop_front() {
            return result;
        }
        self.services
            .lock()
            .unwrap()
            .get(service)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("service {service}")))
    }

    async fn list_services_page(
        &self,
        _cluster: &str,
        next_token: Option<&str>,
    ) -> Result<ServicePage> {
        self.page_requests
            .lock()
            .unwrap()
            .push(next_token.map(str::to_string));
        Ok(self
            .pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    async fn list_tags(&self, resource_arn: &str) -> Result<Vec<ResourceTag>> {
        Ok(self
            .tags
            .lock()
            .unwrap()
            .get(resource_arn)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_service(&self, _cluster: &str, service: &str) -> Result<()> {
        self.deleted.lock().unwrap().push(service.to_string());
        Ok(())
    }
}
