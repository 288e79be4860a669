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

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, IntGauge};

pub(crate) const MODE_LABEL: &str = "mode";
pub(crate) const EVENT_LABEL: &str = "event";
pub(crate) const BACKEND_LABEL: &str = "backend";

pub(crate) fn discovery_requests(mode: &str) -> IntCounter {
    static DISCOVERY_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
        prometheus::register_int_counter_vec! {
            prometheus::opts! {
                "eds_discovery_requests_total",
                "Total number of EDS discovery requests, by serving mode",
            },
            &[MODE_LABEL],
        }
        .unwrap()
    });

    DISCOVERY_REQUESTS.with_label_values(&[mode])
}

pub(crate) fn cache_events(event: &str) -> IntCounter {
    static CACHE_EVENTS: Lazy<IntCounterVec> = Lazy::new(|| {
        prometheus::register_int_counter_vec! {
            prometheus::opts! {
                "eds_cache_events_total",
                "Total number of resolution cache lookups, by outcome",
            },
            &[EVENT_LABEL],
        }
        .unwrap()
    });

    CACHE_EVENTS.with_label_values(&[event])
}

pub(crate) fn resolution_errors(backend: &str) -> IntCounter {
    static RESOLUTION_ERRORS: Lazy<IntCounterVec> = Lazy::new(|| {
        prometheus::register_int_counter_vec! {
            prometheus::opts! {
                "eds_resolution_errors_total",
                "Total number of registry backend failures during resolution",
            },
            &[BACKEND_LABEL],
        }
        .unwrap()
    });

    RESOLUTION_ERRORS.with_label_values(&[backend])
}

fn active_streams() -> &'static IntGauge {
    static ACTIVE_STREAMS: Lazy<IntGauge> = Lazy::new(|| {
        prometheus::register_int_gauge! {
            prometheus::opts! {
                "eds_active_streams",
                "Number of currently connected discovery streams",
            }
        }
        .unwrap()
    });

    &ACTIVE_STREAMS
}

/// Tracks one streaming session's lifetime in the active stream gauge.
pub(crate) struct StreamLifetime;

impl StreamLifetime {
    pub(crate) fn new() -> Self {
        active_streams().inc();
        Self
    }
}

impl Drop for StreamLifetime {
    fn drop(&mut self) {
        active_streams().dec();
    }
}
