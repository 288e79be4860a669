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

//! Runtime configuration, built from command line flags and environment
//! variables by the CLI.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Port the management server binds when no listen address is configured.
pub const DEFAULT_PORT: u16 = 5678;

#[derive(Clone, Debug)]
pub struct Config {
    /// Address the management server listens on.
    pub listen: SocketAddr,
    /// How long a resolved response may be served from the cache.
    pub cache_ttl: Duration,
    /// Upper bound on a single backend resolution.
    pub resolve_timeout: Duration,
    /// Address of the admin endpoint; disabled when unset.
    pub admin: Option<SocketAddr>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: (Ipv4Addr::UNSPECIFIED, DEFAULT_PORT).into(),
            cache_ttl: Duration::from_secs(30),
            resolve_timeout: Duration::from_secs(5),
            admin: None,
        }
    }
}

impl Config {
    /// Explicit per-identifier port override, read from the `<identifier>_port`
    /// environment variable. Missing or unparsable values fall through to the
    /// next tier of the port policy.
    pub fn port_override(&self, name: &str) -> Option<u16> {
        let value = std::env::var(format!("{name}_port")).ok()?;
        match value.parse() {
            Ok(port) => Some(port),
            Err(error) => {
                tracing::debug!(
                    cluster = name,
                    value,
                    %error,
                    "ignoring unparsable port override"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_override_present() {
        std::env::set_var("config-override-a_port", "9100");
        assert_eq!(
            Config::default().port_override("config-override-a"),
            Some(9100)
        );
    }

    #[test]
    fn port_override_absent() {
        assert_eq!(Config::default().port_override("config-override-b"), None);
    }

    #[test]
    fn port_override_unparsable() {
        std::env::set_var("config-override-c_port", "eighty");
        assert_eq!(Config::default().port_override("config-override-c"), None);
    }
}
