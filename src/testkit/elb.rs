//! Scripted [`LoadBalancingApi`] fake.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{HealthState, Listener, ListenerAction, TargetGroup, WeightedTarget};
use crate::error::{Error, Result};
use crate::port::LoadBalancingApi;

/// A [`LoadBalancingApi`] backed by in-memory maps plus an ordered operation
/// log, so tests can assert both outcomes and sequencing (e.g. a listener is
/// rewritten before its target group is deleted).
#[derive(Default)]
pub struct FakeLoadBalancingApi {
    target_groups: Mutex<HashMap<String, TargetGroup>>,
    listeners: Mutex<HashMap<String, Vec<Listener>>>,
    health_queue: Mutex<VecDeque<Vec<HealthState>>>,
    health_by_arn: Mutex<HashMap<String, Vec<HealthState>>>,
    health_count: AtomicU32,
    modified: Mutex<Vec<(String, Vec<WeightedTarget>)>>,
    deleted: Mutex<Vec<String>>,
    ops: Mutex<Vec<String>>,
}

impl FakeLoadBalancingApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self, op: String) {
        self.ops.lock().unwrap().push(op);
    }

    /// Register a target group.
    pub fn insert_target_group(&self, target_group: TargetGroup) {
        self.target_groups
            .lock()
            .unwrap()
            .insert(target_group.arn.clone(), target_group);
    }

    /// Register the listeners of a load balancer.
    pub fn insert_listeners(&self, load_balancer_arn: impl Into<String>, listeners: Vec<Listener>) {
        self.listeners
            .lock()
            .unwrap()
            .insert(load_balancer_arn.into(), listeners);
    }

    /// Queue one `describe_target_health` response.
    pub fn push_health(&self, states: Vec<HealthState>) {
        self.health_queue.lock().unwrap().push_back(states);
    }

    /// Queue the same health response `n` times.
    pub fn push_health_repeated(&self, n: u32, states: Vec<HealthState>) {
        let mut queue = self.health_queue.lock().unwrap();
        for _ in 0..n {
            queue.push_back(states.clone());
        }
    }

    /// Register the health states served whenever the queue is empty.
    pub fn insert_health(&self, target_group_arn: impl Into<String>, states: Vec<HealthState>) {
        self.health_by_arn
            .lock()
            .unwrap()
            .insert(target_group_arn.into(), states);
    }

    /// How many times `describe_target_health` was called.
    pub fn health_count(&self) -> u32 {
        self.health_count.load(Ordering::SeqCst)
    }

    /// Listener rewrites, in call order.
    pub fn modified_listeners(&self) -> Vec<(String, Vec<WeightedTarget>)> {
        self.modified.lock().unwrap().clone()
    }

    /// Target groups deleted, in call order.
    pub fn deleted_target_groups(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    /// Ordered log of every mutating and describing call.
    pub fn ops(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }
}

#[async_trait]
impl LoadBalancingApi for FakeLoadBalancingApi {
    async fn describe_target_group(&self, target_group_arn: &str) -> Result<TargetGroup> {
        self.log(format!("describe_target_group {target_group_arn}"));
        self.target_groups
            .lock()
            .unwrap()
            .get(target_group_arn)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("target group {target_group_arn}")))
    }

    async fn describe_listeners(&self, load_balancer_arn: &str) -> Result<Vec<Listener>> {
        self.log(format!("describe_listeners {load_balancer_arn}"));
        Ok(self
            .listeners
            .lock()
            .unwrap()
            .get(load_balancer_arn)
            .cloned()
            .unwrap_or_default())
    }

    async fn describe_target_health(&self, target_group_arn: &str) -> Result<Vec<HealthState>> {
        self.health_count.fetch_add(1, Ordering::SeqCst);
        if let Some(states) = self.health_queue.lock().unwrap().pop_front() {
            return Ok(states);
        }
        Ok(self
            .health_by_arn
            .lock()
            .unwrap()
            .get(target_group_arn)
            .cloned()
            .unwrap_or_default())
    }

    async fn modify_listener_forward(
        &self,
        listener_arn: &str,
        targets: &[WeightedTarget],
    ) -> Result<()> {
        self.log(format!("modify_listener {listener_arn}"));
        self.modified
            .lock()
            .unwrap()
            .push((listener_arn.to_string(), targets.to_vec()));

        // Keep the stored routing state consistent with the rewrite.
        let mut listeners = self.listeners.lock().unwrap();
        for entries in listeners.values_mut() {
            for listener in entries.iter_mut() {
                if listener.arn == listener_arn {
                    listener.actions = vec![ListenerAction::Forward {
                        targets: targets.to_vec(),
                    }];
                }
            }
        }
        Ok(())
    }

    async fn delete_target_group(&self, target_group_arn: &str) -> Result<()> {
        self.log(format!("delete_target_group {target_group_arn}"));
        self.deleted.lock().unwrap().push(target_group_arn.to_string());
        self.target_groups.lock().unwrap().remove(target_group_arn);
        Ok(())
    }
}
