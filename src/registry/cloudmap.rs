/*
 * Copyright 2024 Google LLC
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use super::{InstanceDescriptor, InstancePage, PageToken, RegistryError, ServiceCatalog};

/// Service catalog backed by the Cloud Map `ListInstances` API.
pub struct CloudMapCatalog {
    client: aws_sdk_servicediscovery::Client,
}

impl CloudMapCatalog {
    pub fn new(client: aws_sdk_servicediscovery::Client) -> Self {
        Self { client }
    }

    pub fn from_conf(config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_servicediscovery::Client::new(config))
    }
}

#[tonic::async_trait]
impl ServiceCatalog for CloudMapCatalog {
    async fn list_instances(
        &self,
        service: &str,
        page: Option<PageToken>,
    ) -> Result<InstancePage, RegistryError> {
        let listing = self
            .client
            .list_instances()
            .service_id(service)
            .set_next_token(page)
            .send()
            .await
            .map_err(|error| {
                RegistryError::new(format!("failed to list instances for `{service}`"), error)
            })?;

        let next = listing.next_token().map(str::to_owned);
        let instances = listing
            .instances()
            .iter()
            .map(|instance| InstanceDescriptor {
                attributes: instance.attributes().cloned().unwrap_or_default(),
            })
            .collect();

        Ok(InstancePage { instances, next })
    }
}
