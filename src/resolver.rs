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

//! Resolution of classified cluster identifiers against the backend
//! registries.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    cluster::ClusterId,
    config::Config,
    endpoint::{Endpoint, EndpointSet},
    metrics,
    registry::{ServiceCatalog, TaskRegistry},
};

/// Serving port when neither an override nor the backend advertises one.
const DEFAULT_PORT: u16 = 80;

/// Endpoints buffered between a backend producer and the drain loop.
const ENDPOINT_BUFFER: usize = 16;

/// Resolves cluster identifiers into endpoint sets.
///
/// Stateless across calls. Every resolution drives the selected backend
/// through all of its pages before completing; a backend failure degrades
/// to the endpoints collected so far and is never surfaced to the caller.
pub struct Resolver {
    tasks: Arc<dyn TaskRegistry>,
    catalog: Arc<dyn ServiceCatalog>,
    config: Arc<Config>,
}

impl Resolver {
    pub fn new(
        tasks: Arc<dyn TaskRegistry>,
        catalog: Arc<dyn ServiceCatalog>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            tasks,
            catalog,
            config,
        }
    }

    /// Produces the current endpoint set for `target`. The selected backend
    /// feeds a bounded channel from its own task; completion is signalled by
    /// the channel closing, since the number of pages is not known upfront.
    pub async fn resolve(&self, target: &ClusterId) -> EndpointSet {
        let (tx, mut rx) = mpsc::channel(ENDPOINT_BUFFER);
        let override_port = self.config.port_override(target.name());

        let producer = match target {
            ClusterId::TaskCluster(name) => {
                tracing::info!(cluster = %name, "resolving endpoints from the task registry");
                tokio::spawn(task_producer(
                    self.tasks.clone(),
                    name.clone(),
                    override_port,
                    tx,
                ))
            }
            ClusterId::CatalogService(id) => {
                tracing::info!(service = %id, "resolving endpoints from the service catalog");
                tokio::spawn(catalog_producer(
                    self.catalog.clone(),
                    id.clone(),
                    override_port,
                    tx,
                ))
            }
        };

        let mut set = EndpointSet::new(target.name());
        let deadline = tokio::time::sleep(self.config.resolve_timeout);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                received = rx.recv() => match received {
                    Some(endpoint) => set.endpoints.push(endpoint),
                    // the producer finished (or gave up) and closed the channel
                    None => break,
                },
                _ = &mut deadline => {
                    tracing::warn!(
                        cluster = %target,
                        timeout = ?self.config.resolve_timeout,
                        "resolution deadline exceeded, returning partial endpoint set"
                    );
                    producer.abort();
                    break;
                }
            }
        }

        set
    }
}

/// Walks every task page for `cluster`, emitting one endpoint per tagged
/// private address. A page failure ends the walk; endpoints already sent
/// remain valid.
async fn task_producer(
    registry: Arc<dyn TaskRegistry>,
    cluster: String,
    override_port: Option<u16>,
    tx: mpsc::Sender<Endpoint>,
) {
    let port = override_port.unwrap_or(DEFAULT_PORT);
    let mut page = None;

    loop {
        let listing = match registry.list_tasks(&cluster, page.take()).await {
            Ok(listing) => listing,
            Err(error) => {
                metrics::resolution_errors("task-registry").inc();
                tracing::warn!(%cluster, %error, "task registry listing failed");
                return;
            }
        };

        for task in listing.tasks {
            for attachment in task.attachments {
                if let Some(address) = attachment.private_address() {
                    if tx.send(Endpoint::new(address, port)).await.is_err() {
                        return;
                    }
                }
            }
        }

        match listing.next {
            Some(next) => page = Some(next),
            None => return,
        }
    }
}

/// Walks every instance page for `service`. The port tiers per instance:
/// override, then the instance's advertised port, then the default.
async fn catalog_producer(
    catalog: Arc<dyn ServiceCatalog>,
    service: String,
    override_port: Option<u16>,
    tx: mpsc::Sender<Endpoint>,
) {
    let mut page = None;

    loop {
        let listing = match catalog.list_instances(&service, page.take()).await {
            Ok(listing) => listing,
            Err(error) => {
                metrics::resolution_errors("service-catalog").inc();
                tracing::warn!(%service, %error, "service catalog listing failed");
                return;
            }
        };

        for instance in listing.instances {
            let Some(address) = instance.address() else {
                continue;
            };
            let port = override_port
                .or_else(|| instance.port())
                .unwrap_or(DEFAULT_PORT);
            if tx.send(Endpoint::new(address, port)).await.is_err() {
                return;
            }
        }

        match listing.next {
            Some(next) => page = Some(next),
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{
        instance, task, StaticCatalog, StaticTasks, UnreachableCatalog, UnreachableTasks,
    };

    fn resolver(
        tasks: impl TaskRegistry + 'static,
        catalog: impl ServiceCatalog + 'static,
        config: Config,
    ) -> Resolver {
        Resolver::new(Arc::new(tasks), Arc::new(catalog), Arc::new(config))
    }

    fn ports(set: &EndpointSet) -> Vec<u16> {
        set.endpoints.iter().map(|endpoint| endpoint.port).collect()
    }

    #[tokio::test]
    async fn drains_all_pages() {
        let tasks = StaticTasks::new(vec![
            vec![task("10.0.0.1"), task("10.0.0.2")],
            vec![task("10.0.0.3"), task("10.0.0.4")],
            vec![task("10.0.0.5"), task("10.0.0.6")],
        ]);
        let resolver = resolver(tasks, UnreachableCatalog, Config::default());

        let set = resolver
            .resolve(&ClusterId::classify("task-cluster-A"))
            .await;

        assert_eq!(set.len(), 6);
        assert_eq!(set.name, "task-cluster-A");
    }

    #[tokio::test]
    async fn page_failure_keeps_earlier_pages() {
        let tasks = StaticTasks::new(vec![
            vec![task("10.0.0.1"), task("10.0.0.2")],
            vec![task("10.0.0.3")],
        ])
        .failing_at(1);
        let resolver = resolver(tasks, UnreachableCatalog, Config::default());

        let set = resolver
            .resolve(&ClusterId::classify("task-cluster-A"))
            .await;

        let addresses: Vec<_> = set
            .endpoints
            .iter()
            .map(|endpoint| endpoint.address.as_str())
            .collect();
        assert_eq!(addresses, ["10.0.0.1", "10.0.0.2"]);
    }

    #[tokio::test]
    async fn no_members_is_an_empty_set() {
        let resolver = resolver(
            StaticTasks::new(vec![Vec::new()]),
            UnreachableCatalog,
            Config::default(),
        );

        let set = resolver.resolve(&ClusterId::classify("empty")).await;
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn failed_first_page_is_an_empty_set() {
        let tasks = StaticTasks::new(vec![vec![task("10.0.0.1")]]).failing_at(0);
        let resolver = resolver(tasks, UnreachableCatalog, Config::default());

        let set = resolver
            .resolve(&ClusterId::classify("task-cluster-A"))
            .await;
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn task_endpoints_default_to_port_80() {
        let resolver = resolver(
            StaticTasks::single(&["10.0.0.5"]),
            UnreachableCatalog,
            Config::default(),
        );

        let set = resolver
            .resolve(&ClusterId::classify("task-cluster-A"))
            .await;
        assert_eq!(set.endpoints, [Endpoint::new("10.0.0.5", 80)]);
    }

    #[tokio::test]
    async fn override_beats_advertised_port() {
        std::env::set_var("resolver-srv-override_port", "9100");
        let catalog = StaticCatalog::new(vec![vec![
            instance("10.0.1.9", Some("9090")),
            instance("10.0.1.10", None),
        ]]);
        let resolver = resolver(UnreachableTasks, catalog, Config::default());

        let set = resolver
            .resolve(&ClusterId::classify("resolver-srv-override"))
            .await;
        assert_eq!(ports(&set), [9100, 9100]);
    }

    #[tokio::test]
    async fn advertised_port_beats_default() {
        let catalog = StaticCatalog::new(vec![vec![
            instance("10.0.1.9", Some("9090")),
            instance("10.0.1.10", None),
        ]]);
        let resolver = resolver(UnreachableTasks, catalog, Config::default());

        let set = resolver
            .resolve(&ClusterId::classify("resolver-srv-ports"))
            .await;
        assert_eq!(ports(&set), [9090, 80]);
    }

    #[tokio::test]
    async fn task_clusters_never_reach_the_catalog() {
        let tasks = StaticTasks::single(&["10.0.0.5"]);
        let resolver = resolver(tasks, UnreachableCatalog, Config::default());
        resolver
            .resolve(&ClusterId::classify("task-cluster-A"))
            .await;
    }

    #[tokio::test]
    async fn catalog_services_never_reach_the_task_registry() {
        let catalog = StaticCatalog::new(vec![vec![instance("10.0.1.9", None)]]);
        let resolver = resolver(UnreachableTasks, catalog, Config::default());
        resolver
            .resolve(&ClusterId::classify("resolver-srv-routing"))
            .await;
    }

    #[tokio::test]
    async fn deadline_returns_partial_set() {
        let tasks = StaticTasks::new(vec![vec![task("10.0.0.1")], vec![task("10.0.0.2")]])
            .stalling_at(1);
        let resolver = resolver(
            tasks,
            UnreachableCatalog,
            Config {
                resolve_timeout: Duration::from_millis(50),
                ..Config::default()
            },
        );

        let set = resolver
            .resolve(&ClusterId::classify("task-cluster-A"))
            .await;
        assert_eq!(set.endpoints, [Endpoint::new("10.0.0.1", 80)]);
    }

    #[tokio::test]
    async fn pagination_requests_every_page_once() {
        let tasks = StaticTasks::new(vec![
            vec![task("10.0.0.1")],
            vec![task("10.0.0.2")],
            vec![task("10.0.0.3")],
        ]);
        let calls = tasks.calls.clone();
        let resolver = resolver(tasks, UnreachableCatalog, Config::default());

        resolver
            .resolve(&ClusterId::classify("task-cluster-A"))
            .await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
