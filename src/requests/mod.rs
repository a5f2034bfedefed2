/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub mod hooks;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_LENGTH};
use reqwest::{Client, Method, Request};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ClientError;

pub use hooks::{BearerAuth, StaticHeaders};

/// Everything needed to send a request: the transport, the base address,
/// and the hooks every request passes through before it is sent.
#[derive(Clone)]
pub struct Context {
    client: Client,
    base_url: String,
    hooks: Vec<Arc<dyn RequestHook>>,
}

impl Context {
    pub fn new<S: AsRef<str>>(client: Client, base_url: S) -> Self {
        Context {
            client,
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            hooks: Vec::new(),
        }
    }

    /// Appends a hook. Hooks run in the order they were added.
    pub fn with_hook<H: RequestHook + 'static>(mut self, hook: H) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Builds the outgoing request and runs it through every hook.
    /// Nothing has been sent when this returns an error.
    ///
    /// Bodiless POST, PUT and PATCH requests carry `Content-Length: 0`.
    pub fn prepare<R: ApiRequest + ?Sized>(&self, request: &R) -> Result<Request, ClientError> {
        let method = request.method();
        let url = format!("{}{}", self.base_url, request.path());
        let mut builder = self.client.request(method.clone(), url);

        let query = request.query();
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        let body = request.body();
        let has_body = body.is_some();
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let mut prepared = builder.build()?;
        if !has_body && [Method::POST, Method::PUT, Method::PATCH].contains(&method) {
            prepared
                .headers_mut()
                .insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
        }
        self.hooks
            .iter()
            .try_fold(prepared, |prepared, hook| hook.apply(prepared))
    }

    pub async fn send<R: ApiRequest + ?Sized>(&self, request: &R) -> Result<Value, ClientError> {
        let prepared = self.prepare(request)?;
        debug!(method = %prepared.method(), url = %prepared.url(), "sending request");

        let response = self.client.execute(prepared).await?;
        let status = response.status();
        debug!(%status, url = %response.url(), "received response");
        if !status.is_success() {
            warn!(%status, url = %response.url(), "request was rejected");
        }

        let body = response.error_for_status()?.text().await?;
        Ok(parse_body(body))
    }
}

/// Empty bodies become `null` and bodies that are not JSON are kept as a string.
fn parse_body(body: String) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => Value::String(body),
    }
}

/// A single REST call.
#[async_trait]
pub trait ApiRequest: Sync {
    type Body: Serialize;

    fn method(&self) -> Method;

    /// Path below the base address, with identifiers already substituted.
    fn path(&self) -> String;

    /// Query parameters. Optional parameters without a value are left out.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn body(&self) -> Option<Self::Body>;

    async fn request(&self, context: &Context) -> Result<Value, ClientError> {
        context.send(self).await
    }
}

/// A step applied to every request right before it is sent.
pub trait RequestHook: Send + Sync {
    fn apply(&self, request: Request) -> Result<Request, ClientError>;
}

impl<F> RequestHook for F
where
    F: Fn(Request) -> Result<Request, ClientError> + Send + Sync,
{
    fn apply(&self, request: Request) -> Result<Request, ClientError> {
        self(request)
    }
}

/// Merges `payload` over `{ "student_id": student_id }`.
/// Payloads that are not JSON objects add nothing.
pub(crate) fn with_student_id(student_id: &str, payload: &Value) -> Value {
    let mut merged = serde_json::Map::new();
    merged.insert("student_id".to_string(), Value::from(student_id));
    if let Value::Object(fields) = payload {
        merged.extend(fields.clone());
    }
    Value::Object(merged)
}
