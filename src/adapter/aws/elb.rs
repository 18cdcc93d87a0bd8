//! ELBv2-backed implementation of [`LoadBalancingApi`].

use async_trait::async_trait;
use aws_sdk_elasticloadbalancingv2::error::DisplayErrorContext;
use aws_sdk_elasticloadbalancingv2::types::{
    Action, ActionTypeEnum, ForwardActionConfig, TargetGroupTuple, TargetHealthStateEnum,
};
use aws_sdk_elasticloadbalancingv2::Client;

use crate::domain::{HealthState, Listener, ListenerAction, TargetGroup, WeightedTarget};
use crate::error::{Error, Result};
use crate::port::LoadBalancingApi;

pub struct ElbControlPlane {
    client: Client,
}

impl ElbControlPlane {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn listener_from(listener: &aws_sdk_elasticloadbalancingv2::types::Listener) -> Listener {
    let actions = listener
        .default_actions()
        .iter()
        .map(|action| {
            if action.r#type() != Some(&ActionTypeEnum::Forward) {
                return ListenerAction::Other;
            }
            let targets = action
                .forward_config()
                .map(|config| {
                    config
                        .target_groups()
                        .iter()
                        .filter_map(|t| {
                            t.target_group_arn().map(|arn| WeightedTarget {
                                target_group_arn: arn.to_string(),
                                weight: t.weight().unwrap_or(0).max(0) as u64,
                            })
                        })
                        .collect()
                })
                .unwrap_or_default();
            ListenerAction::Forward { targets }
        })
        .collect();

    Listener {
        arn: listener.listener_arn().unwrap_or_default().to_string(),
        actions,
    }
}

fn health_from(state: Option<&TargetHealthStateEnum>) -> HealthState {
    match state {
        Some(TargetHealthStateEnum::Healthy) => HealthState::Healthy,
        Some(TargetHealthStateEnum::Initial) => HealthState::Initial,
        Some(TargetHealthStateEnum::Unhealthy) => HealthState::Unhealthy,
        Some(TargetHealthStateEnum::Draining) => HealthState::Draining,
        Some(TargetHealthStateEnum::Unused) => HealthState::Unused,
        _ => HealthState::Unavailable,
    }
}

#[async_trait]
impl LoadBalancingApi for ElbControlPlane {
    async fn describe_target_group(&self, target_group_arn: &str) -> Result<TargetGroup> {
        let out = self
            .client
            .describe_target_groups()
            .target_group_arns(target_group_arn)
            .send()
            .await
            .map_err(|e| Error::upstream("DescribeTargetGroups", DisplayErrorContext(e)))?;

        let found = out
            .target_groups()
            .first()
            .ok_or_else(|| Error::NotFound(format!("target group {target_group_arn}")))?;

        Ok(TargetGroup {
            arn: found
                .target_group_arn()
                .unwrap_or(target_group_arn)
                .to_string(),
            load_balancer_arns: found.load_balancer_arns().to_vec(),
        })
    }

    async fn describe_listeners(&self, load_balancer_arn: &str) -> Result<Vec<Listener>> {
        let out = self
            .client
            .describe_listeners()
            .load_balancer_arn(load_balancer_arn)
            .send()
            .await
            .map_err(|e| Error::upstream("DescribeListeners", DisplayErrorContext(e)))?;

        Ok(out.listeners().iter().map(listener_from).collect())
    }

    async fn describe_target_health(&self, target_group_arn: &str) -> Result<Vec<HealthState>> {
        let out = self
            .client
            .describe_target_health()
            .target_group_arn(target_group_arn)
            .send()
            .await
            .map_err(|e| Error::upstream("DescribeTargetHealth", DisplayErrorContext(e)))?;

        Ok(out
            .target_health_descriptions()
            .iter()
            .map(|d| health_from(d.target_health().and_then(|h| h.state())))
            .collect())
    }

    async fn modify_listener_forward(
        &self,
        listener_arn: &str,
        targets: &[WeightedTarget],
    ) -> Result<()> {
        let tuples: Vec<TargetGroupTuple> = targets
            .iter()
            .map(|t| {
                TargetGroupTuple::builder()
                    .target_group_arn(&t.target_group_arn)
                    .weight(t.weight as i32)
                    .build()
            })
            .collect();

        let action = Action::builder()
            .r#type(ActionTypeEnum::Forward)
            .forward_config(
                ForwardActionConfig::builder()
                    .set_target_groups(Some(tuples))
                    .build(),
            )
            .build();

        self.client
            .modify_listener()
            .listener_arn(listener_arn)
            .default_actions(action)
            .send()
            .await
            .map_err(|e| Error::upstream("ModifyListener", DisplayErrorContext(e)))?;
        Ok(())
    }

    async fn delete_target_group(&self, target_group_arn: &str) -> Result<()> {
        self.client
            .delete_target_group()
            .target_group_arn(target_group_arn)
            .send()
            .await
            .map_err(|e| Error::upstream("DeleteTargetGroup", DisplayErrorContext(e)))?;
        Ok(())
    }
}
