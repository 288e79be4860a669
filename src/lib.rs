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

//! muster answers Envoy endpoint discovery (EDS) queries by translating the
//! live membership of an AWS ECS cluster or Cloud Map service into
//! `ClusterLoadAssignment` resources, with a short TTL cache absorbing
//! bursts of identical requests.

pub mod admin;
pub mod cache;
pub mod cli;
pub mod cluster;
pub mod config;
pub mod endpoint;
pub mod generated;
pub mod metrics;
pub mod net;
pub mod registry;
pub mod resolver;
pub mod server;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::generated::envoy::{
    config::core::v3 as core, config::endpoint::v3 as endpoint_config,
    service::discovery::v3 as discovery, service::endpoint::v3 as endpoint_service,
};
pub use cli::Cli;
pub use config::Config;

/// Type URL of the load assignment resources this server produces.
pub const ENDPOINT_TYPE: &str =
    "type.googleapis.com/envoy.config.endpoint.v3.ClusterLoadAssignment";

pub(crate) const HTTP2_KEEPALIVE_INTERVAL: std::time::Duration =
    std::time::Duration::from_secs(25);
pub(crate) const HTTP2_KEEPALIVE_TIMEOUT: std::time::Duration =
    std::time::Duration::from_secs(20);

pub type Result<T, E = eyre::Error> = std::result::Result<T, E>;
