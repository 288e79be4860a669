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

use super::{Attachment, PageToken, RegistryError, TaskDescriptor, TaskPage, TaskRegistry};

/// Task registry backed by the ECS API. Each page is one `ListTasks` call
/// expanded through `DescribeTasks` into full task descriptors.
pub struct EcsTaskRegistry {
    client: aws_sdk_ecs::Client,
}

impl EcsTaskRegistry {
    pub fn new(client: aws_sdk_ecs::Client) -> Self {
        Self { client }
    }

    pub fn from_conf(config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_ecs::Client::new(config))
    }
}

#[tonic::async_trait]
impl TaskRegistry for EcsTaskRegistry {
    async fn list_tasks(
        &self,
        cluster: &str,
        page: Option<PageToken>,
    ) -> Result<TaskPage, RegistryError> {
        let listing = self
            .client
            .list_tasks()
            .cluster(cluster)
            .set_next_token(page)
            .send()
            .await
            .map_err(|error| {
                RegistryError::new(format!("failed to list tasks for `{cluster}`"), error)
            })?;

        let next = listing.next_token().map(str::to_owned);
        let arns = listing.task_arns().to_vec();
        if arns.is_empty() {
            return Ok(TaskPage {
                tasks: Vec::new(),
                next,
            });
        }

        let described = self
            .client
            .describe_tasks()
            .cluster(cluster)
            .set_tasks(Some(arns))
            .send()
            .await
            .map_err(|error| {
                RegistryError::new(format!("failed to describe tasks for `{cluster}`"), error)
            })?;

        let tasks = described
            .tasks()
            .iter()
            .map(|task| TaskDescriptor {
                attachments: task
                    .attachments()
                    .iter()
                    .map(|attachment| Attachment {
                        details: attachment
                            .details()
                            .iter()
                            .filter_map(|detail| {
                                detail
                                    .name()
                                    .zip(detail.value())
                                    .map(|(name, value)| (name.to_owned(), value.to_owned()))
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Ok(TaskPage { tasks, next })
    }
}
