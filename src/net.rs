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

use std::{io, net::SocketAddr};

/// TCP listener for the gRPC service.
pub struct TcpListener {
    inner: std::net::TcpListener,
}

impl TcpListener {
    /// Binds a TCP listener on `address`.
    #[inline]
    pub fn bind(address: SocketAddr) -> io::Result<Self> {
        std::net::TcpListener::bind(address).map(|inner| Self { inner })
    }

    /// Retrieves the local address the listener is bound to.
    #[inline]
    pub fn local_addr(&self) -> SocketAddr {
        self.inner.local_addr().expect("failed to bind")
    }

    #[inline]
    pub fn into_stream(self) -> io::Result<tokio_stream::wrappers::TcpListenerStream> {
        self.inner.set_nonblocking(true)?;
        let tl = tokio::net::TcpListener::from_std(self.inner)?;
        Ok(tokio_stream::wrappers::TcpListenerStream::new(tl))
    }
}

impl From<TcpListener> for std::net::TcpListener {
    #[inline]
    fn from(value: TcpListener) -> Self {
        value.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_ephemeral_port() {
        let listener =
            TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0).into()).unwrap();
        assert_ne!(listener.local_addr().port(), 0);
    }

    #[test]
    fn occupied_address_is_an_error() {
        let listener =
            TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0).into()).unwrap();
        assert!(TcpListener::bind(listener.local_addr()).is_err());
    }
}
