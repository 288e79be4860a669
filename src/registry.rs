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

//! Contracts for the registries that hold cluster membership, plus the AWS
//! backed implementations.

mod cloudmap;
mod ecs;

use std::collections::HashMap;

pub use cloudmap::CloudMapCatalog;
pub use ecs::EcsTaskRegistry;

/// Attachment detail name carrying a task's reachable address.
pub const PRIVATE_ADDRESS_DETAIL: &str = "privateIPv4Address";
/// Instance attribute carrying the registered address.
pub const INSTANCE_ADDRESS_ATTRIBUTE: &str = "AWS_INSTANCE_IPV4";
/// Instance attribute advertising the serving port.
pub const INSTANCE_PORT_ATTRIBUTE: &str = "AWS_INSTANCE_PORT";

/// Opaque continuation token for paginated listings.
pub type PageToken = String;

/// Error raised by a registry backend while producing a page.
#[derive(Debug, thiserror::Error)]
#[error("{context}: {source}")]
pub struct RegistryError {
    context: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl RegistryError {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// One page of task descriptors from the task registry.
#[derive(Clone, Debug, Default)]
pub struct TaskPage {
    pub tasks: Vec<TaskDescriptor>,
    pub next: Option<PageToken>,
}

/// A running task with zero or more network attachments.
#[derive(Clone, Debug, Default)]
pub struct TaskDescriptor {
    pub attachments: Vec<Attachment>,
}

/// A network attachment on a task, exposed as name/value detail pairs.
#[derive(Clone, Debug, Default)]
pub struct Attachment {
    pub details: Vec<(String, String)>,
}

impl Attachment {
    /// The detail entry tagged with [`PRIVATE_ADDRESS_DETAIL`], if any.
    pub fn private_address(&self) -> Option<&str> {
        self.details
            .iter()
            .find(|(name, _)| name == PRIVATE_ADDRESS_DETAIL)
            .map(|(_, value)| value.as_str())
    }
}

/// One page of instance descriptors from the service catalog.
#[derive(Clone, Debug, Default)]
pub struct InstancePage {
    pub instances: Vec<InstanceDescriptor>,
    pub next: Option<PageToken>,
}

/// A registered service instance, exposed as an attribute map.
#[derive(Clone, Debug, Default)]
pub struct InstanceDescriptor {
    pub attributes: HashMap<String, String>,
}

impl InstanceDescriptor {
    pub fn address(&self) -> Option<&str> {
        self.attributes
            .get(INSTANCE_ADDRESS_ATTRIBUTE)
            .map(String::as_str)
    }

    /// The advertised serving port; `None` when absent or unparsable.
    pub fn port(&self) -> Option<u16> {
        self.attributes
            .get(INSTANCE_PORT_ATTRIBUTE)
            .and_then(|port| port.parse().ok())
    }
}

/// A registry of running tasks, listed cluster by cluster.
#[tonic::async_trait]
pub trait TaskRegistry: Send + Sync {
    /// Returns one page of task descriptors for `cluster`, continuing from
    /// `page` when given.
    async fn list_tasks(
        &self,
        cluster: &str,
        page: Option<PageToken>,
    ) -> Result<TaskPage, RegistryError>;
}

/// A catalog of registered service instances.
#[tonic::async_trait]
pub trait ServiceCatalog: Send + Sync {
    /// Returns one page of instance descriptors for `service`, continuing
    /// from `page` when given.
    async fn list_instances(
        &self,
        service: &str,
        page: Option<PageToken>,
    ) -> Result<InstancePage, RegistryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_private_address() {
        let attachment = Attachment {
            details: vec![
                ("subnetId".into(), "subnet-1234".into()),
                (PRIVATE_ADDRESS_DETAIL.into(), "10.0.0.5".into()),
            ],
        };
        assert_eq!(attachment.private_address(), Some("10.0.0.5"));
        assert_eq!(Attachment::default().private_address(), None);
    }

    #[test]
    fn instance_attributes() {
        let instance = InstanceDescriptor {
            attributes: HashMap::from([
                (INSTANCE_ADDRESS_ATTRIBUTE.to_owned(), "10.0.1.9".to_owned()),
                (INSTANCE_PORT_ATTRIBUTE.to_owned(), "9090".to_owned()),
            ]),
        };
        assert_eq!(instance.address(), Some("10.0.1.9"));
        assert_eq!(instance.port(), Some(9090));
    }

    #[test]
    fn unparsable_port_reads_as_absent() {
        let instance = InstanceDescriptor {
            attributes: HashMap::from([(
                INSTANCE_PORT_ATTRIBUTE.to_owned(),
                "not-a-port".to_owned(),
            )]),
        };
        assert_eq!(instance.port(), None);
    }
}
