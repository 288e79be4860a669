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

//! Optional admin endpoint exposing metrics and liveness.

use std::convert::Infallible;

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server as HyperServer, StatusCode};

pub fn server(
    address: std::net::SocketAddr,
) -> tokio::task::JoinHandle<Result<(), hyper::Error>> {
    tracing::info!(%address, "starting admin endpoint");

    let make_svc = make_service_fn(move |_conn| async move {
        Ok::<_, Infallible>(service_fn(move |request| async move {
            Ok::<_, Infallible>(handle_request(request))
        }))
    });

    tokio::spawn(HyperServer::bind(&address).serve(make_svc))
}

fn handle_request(request: Request<Body>) -> Response<Body> {
    match (request.method(), request.uri().path()) {
        (&Method::GET, "/metrics") => collect_metrics(),
        (&Method::GET, "/live" | "/livez") => Response::new("ok".into()),
        (_, path) => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from(format!("{path} not found")))
            .unwrap(),
    }
}

fn collect_metrics() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    let mut buffer = vec![];
    let encoder = prometheus::TextEncoder::new();
    let body = prometheus::Encoder::encode(&encoder, &prometheus::gather(), &mut buffer)
        .map_err(|error| tracing::warn!(%error, "failed to encode metrics"))
        .and_then(|_| {
            String::from_utf8(buffer)
                .map(Body::from)
                .map_err(|error| tracing::warn!(%error, "failed to convert metrics to utf8"))
        });

    match body {
        Ok(body) => {
            *response.body_mut() = body;
        }
        Err(_) => {
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_metrics() {
        let response = super::collect_metrics();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn liveness() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/live")
            .body(Body::empty())
            .unwrap();
        assert_eq!(handle_request(request).status(), StatusCode::OK);
    }

    #[test]
    fn unknown_path() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/nope")
            .body(Body::empty())
            .unwrap();
        assert_eq!(handle_request(request).status(), StatusCode::NOT_FOUND);
    }
}
