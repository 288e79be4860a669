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

use std::sync::Arc;
use std::time::Duration;

use tokio::{signal, sync::watch};

use crate::{
    admin,
    config::Config,
    net::TcpListener,
    registry::{CloudMapCatalog, EcsTaskRegistry},
    resolver::Resolver,
    server::EdsServer,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status when the listen address cannot be bound.
pub const EXIT_BIND_FAILURE: i32 = 2;

/// The command line interface for muster.
#[derive(clap::Parser)]
#[non_exhaustive]
pub struct Cli {
    /// The socket address the EDS management server listens on.
    #[clap(long, env = "EDS_LISTEN", default_value = "0.0.0.0:5678")]
    pub listen: std::net::SocketAddr,
    /// How long, in seconds, resolved responses may be served from the cache.
    #[clap(long, env = "EDS_CACHE_TTL", default_value_t = 30)]
    pub cache_ttl: u64,
    /// Upper bound, in seconds, on a single registry resolution.
    #[clap(long, env = "EDS_RESOLVE_TIMEOUT", default_value_t = 5)]
    pub resolve_timeout: u64,
    /// The address of the admin endpoint; disabled when unset.
    #[clap(long, env = "EDS_ADMIN_ADDRESS")]
    pub admin_address: Option<std::net::SocketAddr>,
    /// Whether muster will report any results to stdout/stderr.
    #[clap(short, long, env)]
    pub quiet: bool,
}

impl Cli {
    /// Drives the application lifecycle using the command line arguments.
    #[tracing::instrument(skip_all)]
    pub async fn drive(self) -> crate::Result<()> {
        let version: std::borrow::Cow<'static, str> = if cfg!(debug_assertions) {
            format!("{VERSION}+debug").into()
        } else {
            VERSION.into()
        };

        if !self.quiet {
            let env_filter = tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy();
            tracing_subscriber::fmt()
                .json()
                .with_file(true)
                .with_env_filter(env_filter)
                .init();
        }

        tracing::info!(version = &*version, "starting muster");

        let config = Arc::new(Config {
            listen: self.listen,
            cache_ttl: Duration::from_secs(self.cache_ttl),
            resolve_timeout: Duration::from_secs(self.resolve_timeout),
            admin: self.admin_address,
        });

        let listener = match TcpListener::bind(config.listen) {
            Ok(listener) => listener,
            Err(error) => {
                tracing::error!(address = %config.listen, %error, "failed to bind listen address");
                std::process::exit(EXIT_BIND_FAILURE);
            }
        };

        let _admin_task = config.admin.map(admin::server);

        let aws = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;
        let resolver = Resolver::new(
            Arc::new(EcsTaskRegistry::from_conf(&aws)),
            Arc::new(CloudMapCatalog::from_conf(&aws)),
            config.clone(),
        );
        let server = EdsServer::new(resolver, &config).server(listener)?;

        let (shutdown_tx, mut shutdown_rx) = watch::channel::<()>(());

        #[cfg(target_os = "linux")]
        let mut sig_term_fut = signal::unix::signal(signal::unix::SignalKind::terminate())?;

        tokio::spawn(async move {
            #[cfg(target_os = "linux")]
            let sig_term = sig_term_fut.recv();
            #[cfg(not(target_os = "linux"))]
            let sig_term = std::future::pending::<()>();

            let signal = tokio::select! {
                _ = signal::ctrl_c() => "SIGINT",
                _ = sig_term => "SIGTERM",
            };

            tracing::info!(%signal, "shutting down from signal");
            // Don't unwrap in order to ensure that we execute
            // any subsequent shutdown tasks.
            shutdown_tx.send(()).ok();
        });

        tokio::select! {
            result = server => result,
            _ = shutdown_rx.changed() => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["muster"]);
        assert_eq!(cli.listen, "0.0.0.0:5678".parse().unwrap());
        assert_eq!(cli.cache_ttl, 30);
        assert_eq!(cli.resolve_timeout, 5);
        assert_eq!(cli.admin_address, None);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "muster",
            "--listen",
            "127.0.0.1:9000",
            "--cache-ttl",
            "60",
            "--admin-address",
            "127.0.0.1:8000",
        ]);
        assert_eq!(cli.listen, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(cli.cache_ttl, 60);
        assert_eq!(cli.admin_address, Some("127.0.0.1:8000".parse().unwrap()));
    }
}
