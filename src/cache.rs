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

//! TTL cache for finished discovery responses.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use cached::{Cached, TimedCache};
use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::{discovery::DiscoveryResponse, metrics};

/// Memoizes protocol-ready responses per cluster identifier.
///
/// Entries live for the TTL fixed at construction; an expired entry reads
/// as a miss and is replaced by the next resolution. Requests for the same
/// identifier arrive in bursts (many proxies asking about one service), so
/// concurrent misses for a key are coalesced: one resolution runs, every
/// waiter reuses its response.
pub struct ResolutionCache {
    entries: Mutex<TimedCache<String, DiscoveryResponse>>,
    inflight: Mutex<HashMap<String, broadcast::Sender<DiscoveryResponse>>>,
}

impl ResolutionCache {
    /// `ttl` is truncated to whole seconds by the underlying store.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(TimedCache::with_lifespan(ttl.as_secs())),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the response cached under `key` if it has not expired.
    pub fn get(&self, key: &str) -> Option<DiscoveryResponse> {
        let found = self.entries.lock().cache_get(key).cloned();
        match &found {
            Some(_) => metrics::cache_events("hit").inc(),
            None => metrics::cache_events("miss").inc(),
        }
        found
    }

    /// Stores `response` under `key`, replacing any previous entry.
    pub fn put(&self, key: impl Into<String>, response: DiscoveryResponse) {
        self.entries.lock().cache_set(key.into(), response);
    }

    /// Cache lookup falling back to `fill` on a miss, with at most one
    /// in-flight `fill` per key. Followers wait on the leader's broadcast;
    /// a follower whose leader vanished without publishing resolves on its
    /// own.
    ///
    /// The fill runs on its own task: a caller that disappears mid-miss (a
    /// disconnecting client) does not abort a resolution other sessions may
    /// be waiting on, and the finished response still lands in the cache.
    pub async fn get_or_resolve<F, Fut>(self: Arc<Self>, key: &str, fill: F) -> DiscoveryResponse
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = DiscoveryResponse> + Send + 'static,
    {
        if let Some(found) = self.get(key) {
            return found;
        }

        let claim = {
            let mut inflight = self.inflight.lock();
            match inflight.get(key) {
                Some(tx) => Err(tx.subscribe()),
                None => {
                    let (tx, _) = broadcast::channel(1);
                    inflight.insert(key.to_owned(), tx.clone());
                    Ok(tx)
                }
            }
        };

        let tx = match claim {
            Ok(tx) => tx,
            Err(mut rx) => {
                metrics::cache_events("coalesced").inc();
                match rx.recv().await {
                    Ok(response) => return response,
                    Err(_) => {
                        let response = fill().await;
                        self.put(key, response.clone());
                        return response;
                    }
                }
            }
        };

        // Leader. The flight entry must go away however the fill ends.
        let flight = Flight {
            cache: self.clone(),
            key: key.to_owned(),
        };

        // A store may have slipped in between the cache check and the claim.
        let raced = self.entries.lock().cache_get(key).cloned();
        if let Some(found) = raced {
            drop(flight);
            let _ = tx.send(found.clone());
            return found;
        }

        let worker = tokio::spawn({
            let cache = self.clone();
            let future = fill();
            async move {
                let response = future.await;
                cache.put(flight.key.clone(), response.clone());
                // Retire the flight before publishing: late arrivals then
                // either hit the fresh entry or start a new flight, never
                // subscribe after the value went out.
                drop(flight);
                let _ = tx.send(response.clone());
                response
            }
        });

        match worker.await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(%error, key, "resolution task failed");
                self.get(key).unwrap_or_default()
            }
        }
    }
}

struct Flight {
    cache: Arc<ResolutionCache>,
    key: String,
}

impl Drop for Flight {
    fn drop(&mut self) {
        self.cache.inflight.lock().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    fn response(version: &str) -> DiscoveryResponse {
        DiscoveryResponse {
            version_info: version.into(),
            ..<_>::default()
        }
    }

    #[tokio::test]
    async fn get_after_put_honors_ttl() {
        let cache = ResolutionCache::new(Duration::from_secs(1));
        cache.put("payments", response("1"));

        assert_eq!(cache.get("payments"), Some(response("1")));

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(cache.get("payments"), None);
    }

    #[test]
    fn last_put_wins() {
        let cache = ResolutionCache::new(Duration::from_secs(30));
        cache.put("payments", response("1"));
        cache.put("payments", response("2"));

        assert_eq!(cache.get("payments"), Some(response("2")));
    }

    #[test]
    fn keys_are_independent() {
        let cache = ResolutionCache::new(Duration::from_secs(30));
        cache.put("payments", response("1"));

        assert_eq!(cache.get("ledger"), None);
        assert_eq!(cache.get("payments"), Some(response("1")));
    }

    #[tokio::test]
    async fn concurrent_misses_resolve_once() {
        let cache = Arc::new(ResolutionCache::new(Duration::from_secs(30)));
        let resolutions = Arc::new(AtomicUsize::new(0));

        let lookup = |cache: Arc<ResolutionCache>, resolutions: Arc<AtomicUsize>| async move {
            cache
                .get_or_resolve("payments", || async move {
                    resolutions.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    response("fresh")
                })
                .await
        };

        let (first, second, third) = tokio::join!(
            lookup(cache.clone(), resolutions.clone()),
            lookup(cache.clone(), resolutions.clone()),
            lookup(cache.clone(), resolutions.clone()),
        );

        assert_eq!(first, response("fresh"));
        assert_eq!(second, response("fresh"));
        assert_eq!(third, response("fresh"));
        assert_eq!(resolutions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resolved_value_is_cached() {
        let cache = Arc::new(ResolutionCache::new(Duration::from_secs(30)));

        let resolved = cache
            .clone()
            .get_or_resolve("payments", || async { response("fresh") })
            .await;
        assert_eq!(resolved, response("fresh"));
        assert_eq!(cache.get("payments"), Some(response("fresh")));

        // A second lookup must be served from the cache, not `fill`.
        let cached = cache
            .clone()
            .get_or_resolve("payments", || async {
                panic!("resolution must not run on a cache hit")
            })
            .await;
        assert_eq!(cached, response("fresh"));
    }

    #[tokio::test]
    async fn abandoned_lookup_still_fills_the_cache() {
        let cache = Arc::new(ResolutionCache::new(Duration::from_secs(30)));

        let lookup = tokio::spawn({
            let cache = cache.clone();
            async move {
                cache
                    .get_or_resolve("payments", || async {
                        tokio::time::sleep(Duration::from_millis(100)).await;
                        response("fresh")
                    })
                    .await
            }
        });

        // Let the lookup claim the flight, then abandon it mid-resolution.
        tokio::time::sleep(Duration::from_millis(20)).await;
        lookup.abort();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(cache.get("payments"), Some(response("fresh")));
    }
}
