//! ECS-backed implementation of [`ClusterApi`].

use async_trait::async_trait;
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::types::Service;
use aws_sdk_ecs::Client;

use crate::domain::{DeploymentState, LoadBalancerBinding, RolloutStatus, ServiceSnapshot};
use crate::error::{Error, Result};
use crate::port::{ClusterApi, ResourceTag, ServicePage};

/// Page size used when walking a cluster's service list.
const LIST_SERVICES_PAGE_SIZE: i32 = 100;

pub struct EcsControlPlane {
    client: Client,
}

impl EcsControlPlane {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn snapshot_from(service: &Service) -> ServiceSnapshot {
    let deployments = service
        .deployments()
        .iter()
        .map(|d| DeploymentState {
            status: RolloutStatus::parse(d.status().unwrap_or_default()),
            running_count: d.running_count(),
        })
        .collect();

    let load_balancers = service
        .load_balancers()
        .iter()
        .filter_map(|lb| {
            lb.target_group_arn().map(|arn| LoadBalancerBinding {
                target_group_arn: arn.to_string(),
            })
        })
        .collect();

    ServiceSnapshot {
        service_name: service.service_name().unwrap_or_default().to_string(),
        service_arn: service.service_arn().unwrap_or_default().to_string(),
        cluster_arn: service.cluster_arn().unwrap_or_default().to_string(),
        deployments,
        load_balancers,
    }
}

#[async_trait]
impl ClusterApi for EcsControlPlane {
    async fn describe_service(&self, cluster: &str, service: &str) -> Result<ServiceSnapshot> {
        let out = self
            .client
            .describe_services()
            .cluster(cluster)
            .services(service)
            .send()
            .await
            .map_err(|e| Error::upstream("DescribeServices", DisplayErrorContext(e)))?;

        let found = out
            .services()
            .first()
            .ok_or_else(|| Error::NotFound(format!("service {service}")))?;
        Ok(snapshot_from(found))
    }

    async fn list_services_page(
        &self,
        cluster: &str,
        next_token: Option<&str>,
    ) -> Result<ServicePage> {
        let mut req = self
            .client
            .list_services()
            .cluster(cluster)
            .max_results(LIST_SERVICES_PAGE_SIZE);
        if let Some(token) = next_token {
            req = req.next_token(token);
        }

        let out = req
            .send()
            .await
            .map_err(|e| Error::upstream("ListServices", DisplayErrorContext(e)))?;

        Ok(ServicePage {
            service_arns: out.service_arns().to_vec(),
            next_token: out.next_token().map(str::to_string),
        })
    }

    async fn list_tags(&self, resource_arn: &str) -> Result<Vec<ResourceTag>> {
        let out = self
            .client
            .list_tags_for_resource()
            .resource_arn(resource_arn)
            .send()
            .await
            .map_err(|e| Error::upstream("ListTagsForResource", DisplayErrorContext(e)))?;

        Ok(out
            .tags()
            .iter()
            .filter_map(|t| match (t.key(), t.value()) {
                (Some(key), Some(value)) => Some(ResourceTag::new(key, value)),
                _ => None,
            })
            .collect())
    }

    async fn delete_service(&self, cluster: &str, service: &str) -> Result<()> {
        self.client
            .delete_service()
            .cluster(cluster)
            .service(service)
            .force(true)
            .send()
            .await
            .map_err(|e| Error::upstream("DeleteService", DisplayErrorContext(e)))?;
        Ok(())
    }
}
