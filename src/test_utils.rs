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

//! Fake registry backends shared by the resolver and server tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::registry::{
    Attachment, InstanceDescriptor, InstancePage, PageToken, RegistryError, ServiceCatalog,
    TaskDescriptor, TaskPage, TaskRegistry, INSTANCE_ADDRESS_ATTRIBUTE, INSTANCE_PORT_ATTRIBUTE,
    PRIVATE_ADDRESS_DETAIL,
};

/// A task descriptor with one attachment carrying `address`.
pub(crate) fn task(address: &str) -> TaskDescriptor {
    TaskDescriptor {
        attachments: vec![Attachment {
            details: vec![(PRIVATE_ADDRESS_DETAIL.into(), address.into())],
        }],
    }
}

/// An instance descriptor with the given address and optional port attribute.
pub(crate) fn instance(address: &str, port: Option<&str>) -> InstanceDescriptor {
    let mut attributes =
        HashMap::from([(INSTANCE_ADDRESS_ATTRIBUTE.to_owned(), address.to_owned())]);
    if let Some(port) = port {
        attributes.insert(INSTANCE_PORT_ATTRIBUTE.to_owned(), port.to_owned());
    }
    InstanceDescriptor { attributes }
}

fn page_index(page: Option<PageToken>) -> usize {
    page.as_deref()
        .map_or(0, |token| token.parse().expect("numeric page token"))
}

fn next_token(index: usize, pages: usize) -> Option<PageToken> {
    (index + 1 < pages).then(|| (index + 1).to_string())
}

/// Task registry serving fixed pages, optionally failing or stalling at a
/// given page index.
pub(crate) struct StaticTasks {
    pages: Vec<Vec<TaskDescriptor>>,
    fail_at: Option<usize>,
    stall_at: Option<usize>,
    pub(crate) calls: Arc<AtomicUsize>,
}

impl StaticTasks {
    pub(crate) fn new(pages: Vec<Vec<TaskDescriptor>>) -> Self {
        Self {
            pages,
            fail_at: None,
            stall_at: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn single(addresses: &[&str]) -> Self {
        Self::new(vec![addresses.iter().map(|address| task(address)).collect()])
    }

    pub(crate) fn failing_at(mut self, page: usize) -> Self {
        self.fail_at = Some(page);
        self
    }

    pub(crate) fn stalling_at(mut self, page: usize) -> Self {
        self.stall_at = Some(page);
        self
    }
}

#[tonic::async_trait]
impl TaskRegistry for StaticTasks {
    async fn list_tasks(
        &self,
        _cluster: &str,
        page: Option<PageToken>,
    ) -> Result<TaskPage, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let index = page_index(page);
        if self.stall_at == Some(index) {
            std::future::pending::<()>().await;
        }
        if self.fail_at == Some(index) {
            return Err(RegistryError::new("list-tasks", "synthetic page failure"));
        }
        Ok(TaskPage {
            tasks: self.pages[index].clone(),
            next: next_token(index, self.pages.len()),
        })
    }
}

/// Service catalog serving fixed instance pages.
pub(crate) struct StaticCatalog {
    pages: Vec<Vec<InstanceDescriptor>>,
    pub(crate) calls: Arc<AtomicUsize>,
}

impl StaticCatalog {
    pub(crate) fn new(pages: Vec<Vec<InstanceDescriptor>>) -> Self {
        Self {
            pages,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[tonic::async_trait]
impl ServiceCatalog for StaticCatalog {
    async fn list_instances(
        &self,
        _service: &str,
        page: Option<PageToken>,
    ) -> Result<InstancePage, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let index = page_index(page);
        Ok(InstancePage {
            instances: self.pages[index].clone(),
            next: next_token(index, self.pages.len()),
        })
    }
}

/// Task registry that must never be reached.
pub(crate) struct UnreachableTasks;

#[tonic::async_trait]
impl TaskRegistry for UnreachableTasks {
    async fn list_tasks(
        &self,
        cluster: &str,
        _page: Option<PageToken>,
    ) -> Result<TaskPage, RegistryError> {
        panic!("the task registry must not be used for `{cluster}`");
    }
}

/// Service catalog that must never be reached.
pub(crate) struct UnreachableCatalog;

#[tonic::async_trait]
impl ServiceCatalog for UnreachableCatalog {
    async fn list_instances(
        &self,
        service: &str,
        _page: Option<PageToken>,
    ) -> Result<InstancePage, RegistryError> {
        panic!("the service catalog must not be used for `{service}`");
    }
}
