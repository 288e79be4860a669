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

//! Types representing the resolved membership of a cluster.

use crate::{
    core,
    endpoint_config::{
        lb_endpoint::HostIdentifier, ClusterLoadAssignment, Endpoint as EnvoyEndpoint,
        LbEndpoint, LocalityLbEndpoints,
    },
};

/// One reachable instance of a cluster. Carries no identity beyond
/// address and port.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoint {
    pub address: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }
}

/// The endpoints resolved for one cluster identifier. Order carries no
/// meaning and duplicates are preserved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EndpointSet {
    pub name: String,
    pub endpoints: Vec<Endpoint>,
}

impl EndpointSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoints: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Collapses the set into the protocol's load assignment shape. All
    /// endpoints land in a single locality group since locality is not
    /// tracked by either registry.
    pub fn into_load_assignment(self) -> ClusterLoadAssignment {
        ClusterLoadAssignment {
            cluster_name: self.name,
            endpoints: vec![LocalityLbEndpoints {
                lb_endpoints: self.endpoints.into_iter().map(From::from).collect(),
                ..<_>::default()
            }],
            ..<_>::default()
        }
    }
}

impl From<Endpoint> for LbEndpoint {
    fn from(endpoint: Endpoint) -> Self {
        Self {
            host_identifier: Some(HostIdentifier::Endpoint(EnvoyEndpoint {
                address: Some(core::Address {
                    address: Some(core::address::Address::SocketAddress(
                        core::SocketAddress {
                            protocol: core::socket_address::Protocol::Tcp as i32,
                            address: endpoint.address,
                            port_specifier: Some(
                                core::socket_address::PortSpecifier::PortValue(
                                    endpoint.port.into(),
                                ),
                            ),
                            ..<_>::default()
                        },
                    )),
                }),
                ..<_>::default()
            })),
            ..<_>::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_assignment_shape() {
        let mut set = EndpointSet::new("task-cluster-A");
        set.endpoints.push(Endpoint::new("10.0.0.5", 80));
        set.endpoints.push(Endpoint::new("10.0.0.6", 8080));

        let assignment = set.into_load_assignment();
        assert_eq!(assignment.cluster_name, "task-cluster-A");
        assert_eq!(assignment.endpoints.len(), 1);
        assert_eq!(assignment.endpoints[0].lb_endpoints.len(), 2);
    }

    #[test]
    fn lb_endpoint_socket_address() {
        let lb_endpoint = LbEndpoint::from(Endpoint::new("10.0.1.9", 9090));

        let Some(HostIdentifier::Endpoint(endpoint)) = lb_endpoint.host_identifier else {
            panic!("expected a host identifier with an endpoint");
        };
        let Some(core::address::Address::SocketAddress(socket)) =
            endpoint.address.and_then(|address| address.address)
        else {
            panic!("expected a socket address");
        };

        assert_eq!(socket.address, "10.0.1.9");
        assert_eq!(socket.protocol, core::socket_address::Protocol::Tcp as i32);
        assert_eq!(
            socket.port_specifier,
            Some(core::socket_address::PortSpecifier::PortValue(9090))
        );
    }

    #[test]
    fn duplicates_are_preserved() {
        let mut set = EndpointSet::new("payments");
        set.endpoints.push(Endpoint::new("10.0.0.5", 80));
        set.endpoints.push(Endpoint::new("10.0.0.5", 80));

        assert_eq!(set.into_load_assignment().endpoints[0].lb_endpoints.len(), 2);
    }
}
