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

//! The EDS session handler: serves cached or freshly resolved endpoint
//! snapshots over the streaming and unary discovery calls.

use std::pin::Pin;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use futures::Stream;
use prost::Message;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing_futures::Instrument;

use crate::{
    cache::ResolutionCache,
    cluster::ClusterId,
    config::Config,
    discovery::{
        DeltaDiscoveryRequest, DeltaDiscoveryResponse, DiscoveryRequest, DiscoveryResponse,
    },
    endpoint_service::endpoint_discovery_service_server::{
        EndpointDiscoveryService, EndpointDiscoveryServiceServer,
    },
    metrics,
    net::TcpListener,
    resolver::Resolver,
    ENDPOINT_TYPE,
};

/// The control plane half of an EDS session: looks answers up in the
/// resolution cache and falls back to the resolver on a miss.
#[derive(Clone)]
pub struct EdsServer {
    resolver: Arc<Resolver>,
    cache: Arc<ResolutionCache>,
}

impl EdsServer {
    pub fn new(resolver: Resolver, config: &Config) -> Self {
        Self {
            resolver: Arc::new(resolver),
            cache: Arc::new(ResolutionCache::new(config.cache_ttl)),
        }
    }

    /// Runs the gRPC management server on `listener` until it fails.
    pub fn server(
        self,
        listener: TcpListener,
    ) -> crate::Result<impl std::future::Future<Output = crate::Result<()>>> {
        let service = EndpointDiscoveryServiceServer::new(self);
        tracing::info!(address = %listener.local_addr(), "management server listening");
        let incoming = listener.into_stream()?;

        Ok(async move {
            tonic::transport::Server::builder()
                .http2_keepalive_interval(Some(crate::HTTP2_KEEPALIVE_INTERVAL))
                .http2_keepalive_timeout(Some(crate::HTTP2_KEEPALIVE_TIMEOUT))
                .add_service(service)
                .serve_with_incoming(incoming)
                .await
                .map_err(From::from)
        })
    }

    /// Drives one streaming session: a spawned receive task forwards
    /// requests onto a single-slot queue, and the serving loop answers them
    /// in arrival order, one at a time.
    pub async fn stream_endpoints<S>(
        &self,
        mut streaming: S,
    ) -> Result<
        Pin<Box<dyn Stream<Item = Result<DiscoveryResponse, tonic::Status>> + Send>>,
        tonic::Status,
    >
    where
        S: Stream<Item = Result<DiscoveryRequest, tonic::Status>> + Send + Unpin + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<DiscoveryRequest>(1);

        tokio::spawn(async move {
            loop {
                match streaming.next().await {
                    Some(Ok(request)) => {
                        // the serving loop hung up, nothing left to forward to
                        if tx.send(request).await.is_err() {
                            return;
                        }
                    }
                    Some(Err(error)) => {
                        tracing::debug!(%error, "error receiving discovery request");
                        return;
                    }
                    None => {
                        tracing::debug!("request stream closed by client");
                        return;
                    }
                }
            }
        });

        let this = self.clone();
        let stream = async_stream::try_stream! {
            let _session = metrics::StreamLifetime::new();

            while let Some(request) = rx.recv().await {
                metrics::discovery_requests("stream").inc();
                let response = this.discovery_response(&request).await?;
                yield response;
            }

            // the receive task ended and closed the queue
            Err(tonic::Status::unavailable("request stream ended"))?;
        };

        Ok(Box::pin(stream.instrument(tracing::info_span!("eds_stream"))))
    }

    /// Cache-then-resolve for one request, shared by the streaming loop and
    /// the unary fetch. Only the first requested resource name is resolved.
    async fn discovery_response(
        &self,
        request: &DiscoveryRequest,
    ) -> Result<DiscoveryResponse, tonic::Status> {
        let Some(name) = request.resource_names.first() else {
            return Err(tonic::Status::invalid_argument(
                "at least one resource name is required",
            ));
        };

        let target = ClusterId::classify(name.as_str());
        let key = target.name().to_owned();
        let resolver = self.resolver.clone();

        Ok(Arc::clone(&self.cache)
            .get_or_resolve(&key, move || async move {
                let assignment = resolver.resolve(&target).await.into_load_assignment();
                discovery_response_for(assignment)
            })
            .await)
    }
}

/// Wraps a finished load assignment into the protocol envelope. The version
/// token reflects when the response was built, not when the underlying
/// membership changed.
fn discovery_response_for(
    assignment: crate::endpoint_config::ClusterLoadAssignment,
) -> DiscoveryResponse {
    DiscoveryResponse {
        version_info: version_token(),
        resources: vec![prost_types::Any {
            type_url: ENDPOINT_TYPE.into(),
            value: assignment.encode_to_vec(),
        }],
        type_url: ENDPOINT_TYPE.into(),
        nonce: uuid::Uuid::new_v4().to_string(),
        ..<_>::default()
    }
}

fn version_token() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        .to_string()
}

/// Incremental updates are out of scope: delta sessions are accepted and
/// closed right away, with no resource updates ever sent.
fn delta_stream() -> Pin<Box<dyn Stream<Item = Result<DeltaDiscoveryResponse, tonic::Status>> + Send>>
{
    Box::pin(futures::stream::empty())
}

#[tonic::async_trait]
impl EndpointDiscoveryService for EdsServer {
    type StreamEndpointsStream =
        Pin<Box<dyn Stream<Item = Result<DiscoveryResponse, tonic::Status>> + Send>>;
    type DeltaEndpointsStream =
        Pin<Box<dyn Stream<Item = Result<DeltaDiscoveryResponse, tonic::Status>> + Send>>;

    #[tracing::instrument(skip_all)]
    async fn stream_endpoints(
        &self,
        request: tonic::Request<tonic::Streaming<DiscoveryRequest>>,
    ) -> Result<tonic::Response<Self::StreamEndpointsStream>, tonic::Status> {
        Ok(tonic::Response::new(
            self.stream_endpoints(request.into_inner()).await?,
        ))
    }

    async fn delta_endpoints(
        &self,
        _request: tonic::Request<tonic::Streaming<DeltaDiscoveryRequest>>,
    ) -> Result<tonic::Response<Self::DeltaEndpointsStream>, tonic::Status> {
        tracing::info!("delta endpoint discovery is not implemented, closing stream");
        Ok(tonic::Response::new(delta_stream()))
    }

    #[tracing::instrument(skip_all)]
    async fn fetch_endpoints(
        &self,
        request: tonic::Request<DiscoveryRequest>,
    ) -> Result<tonic::Response<DiscoveryResponse>, tonic::Status> {
        metrics::discovery_requests("fetch").inc();
        self.discovery_response(request.get_ref())
            .await
            .map(tonic::Response::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tokio::time::timeout;
    use tokio_stream::wrappers::ReceiverStream;

    use super::*;
    use crate::{
        core,
        endpoint_config::{lb_endpoint::HostIdentifier, ClusterLoadAssignment},
        test_utils::{instance, StaticCatalog, StaticTasks, UnreachableCatalog, UnreachableTasks},
    };

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn server(
        tasks: impl crate::registry::TaskRegistry + 'static,
        catalog: impl crate::registry::ServiceCatalog + 'static,
    ) -> EdsServer {
        let config = Arc::new(Config::default());
        EdsServer::new(
            Resolver::new(Arc::new(tasks), Arc::new(catalog), config.clone()),
            &config,
        )
    }

    fn request(name: &str) -> DiscoveryRequest {
        DiscoveryRequest {
            resource_names: vec![name.into()],
            type_url: ENDPOINT_TYPE.into(),
            ..<_>::default()
        }
    }

    /// Decodes the single load assignment out of a response and flattens it
    /// to (address, port) pairs.
    fn socket_addresses(response: &DiscoveryResponse) -> Vec<(String, u32)> {
        assert_eq!(response.type_url, ENDPOINT_TYPE);
        let assignment =
            ClusterLoadAssignment::decode(&*response.resources[0].value).unwrap();
        assignment
            .endpoints
            .into_iter()
            .flat_map(|locality| locality.lb_endpoints)
            .map(|lb_endpoint| {
                let Some(HostIdentifier::Endpoint(endpoint)) = lb_endpoint.host_identifier
                else {
                    panic!("expected an endpoint host identifier");
                };
                let Some(core::address::Address::SocketAddress(socket)) =
                    endpoint.address.and_then(|address| address.address)
                else {
                    panic!("expected a socket address");
                };
                let Some(core::socket_address::PortSpecifier::PortValue(port)) =
                    socket.port_specifier
                else {
                    panic!("expected a port value");
                };
                (socket.address, port)
            })
            .collect()
    }

    #[tokio::test]
    async fn streaming_serves_task_cluster() {
        let server = server(StaticTasks::single(&["10.0.0.5"]), UnreachableCatalog);
        let (tx, rx) = mpsc::channel(4);

        let mut stream = timeout(
            TIMEOUT,
            server.stream_endpoints(ReceiverStream::new(rx)),
        )
        .await
        .unwrap()
        .unwrap();

        timeout(TIMEOUT, tx.send(Ok(request("task-cluster-A"))))
            .await
            .unwrap()
            .unwrap();

        let response = timeout(TIMEOUT, stream.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();

        assert_eq!(
            socket_addresses(&response),
            [("10.0.0.5".to_owned(), 80)]
        );
        assert!(!response.version_info.is_empty());
        assert!(!response.nonce.is_empty());
    }

    #[tokio::test]
    async fn repeated_requests_are_served_from_cache() {
        let tasks = StaticTasks::single(&["10.0.0.5"]);
        let calls = tasks.calls.clone();
        let server = server(tasks, UnreachableCatalog);
        let (tx, rx) = mpsc::channel(4);

        let mut stream = server
            .stream_endpoints(ReceiverStream::new(rx))
            .await
            .unwrap();

        let mut responses = Vec::new();
        for _ in 0..2 {
            timeout(TIMEOUT, tx.send(Ok(request("task-cluster-A"))))
                .await
                .unwrap()
                .unwrap();
            responses.push(
                timeout(TIMEOUT, stream.next())
                    .await
                    .unwrap()
                    .unwrap()
                    .unwrap(),
            );
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(responses[0], responses[1]);
    }

    #[tokio::test]
    async fn responses_follow_request_order() {
        let tasks = StaticTasks::single(&["10.0.0.5"]);
        let server = server(tasks, StaticCatalog::new(vec![vec![instance("10.0.1.9", None)]]));
        let (tx, rx) = mpsc::channel(4);

        let mut stream = server
            .stream_endpoints(ReceiverStream::new(rx))
            .await
            .unwrap();

        for name in ["task-cluster-A", "srv-xyz"] {
            timeout(TIMEOUT, tx.send(Ok(request(name))))
                .await
                .unwrap()
                .unwrap();
        }

        let first = timeout(TIMEOUT, stream.next()).await.unwrap().unwrap().unwrap();
        let second = timeout(TIMEOUT, stream.next()).await.unwrap().unwrap().unwrap();

        assert_eq!(socket_addresses(&first), [("10.0.0.5".to_owned(), 80)]);
        assert_eq!(socket_addresses(&second), [("10.0.1.9".to_owned(), 80)]);
    }

    #[tokio::test]
    async fn closed_request_stream_ends_the_session() {
        let server = server(StaticTasks::single(&["10.0.0.5"]), UnreachableCatalog);
        let (tx, rx) = mpsc::channel::<Result<DiscoveryRequest, tonic::Status>>(4);

        let mut stream = server
            .stream_endpoints(ReceiverStream::new(rx))
            .await
            .unwrap();
        drop(tx);

        let ended = timeout(TIMEOUT, stream.next()).await.unwrap().unwrap();
        let status = ended.unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unavailable);
        assert!(timeout(TIMEOUT, stream.next()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_resource_name_is_rejected() {
        let server = server(UnreachableTasks, UnreachableCatalog);

        let status = server
            .fetch_endpoints(tonic::Request::new(DiscoveryRequest::default()))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn unary_fetch_serves_catalog_service() {
        let catalog = StaticCatalog::new(vec![vec![instance("10.0.1.9", Some("9090"))]]);
        let server = server(UnreachableTasks, catalog);

        let response = server
            .fetch_endpoints(tonic::Request::new(request("srv-xyz")))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(
            socket_addresses(&response),
            [("10.0.1.9".to_owned(), 9090)]
        );
    }

    #[tokio::test]
    async fn unary_fetch_reuses_the_cache() {
        let catalog = StaticCatalog::new(vec![vec![instance("10.0.1.9", None)]]);
        let calls = catalog.calls.clone();
        let server = server(UnreachableTasks, catalog);

        for _ in 0..3 {
            server
                .fetch_endpoints(tonic::Request::new(request("srv-xyz")))
                .await
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn delta_sessions_close_without_updates() {
        let mut stream = delta_stream();
        assert!(timeout(TIMEOUT, stream.next()).await.unwrap().is_none());
    }
}
