/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! HTTP transport layer for data calls

use crate::endpoints::{HttpMethod, PreparedRequest};
use bb_core::{Config, Error, Result, APP_KEY_PARAM};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Blocking HTTP transport bound to one API base URL and application key
#[derive(Debug, Clone)]
pub struct Transport {
  client: Client,
  base_url: String,
  app_key: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport with the given configuration
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("bb-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.api_base_url.clone(),
      app_key: config.credentials.app_key.clone(),
      timeout,
    })
  }

  /// The underlying HTTP client, shared with the token manager
  pub fn http(&self) -> &Client {
    &self.client
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get the configured timeout
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Send `request` with `token` as bearer and parse the JSON answer.
  ///
  /// A status outside the endpoint's accepted set becomes an
  /// [`Error::Request`] carrying the endpoint's failure message; the body of
  /// such a response is not read.
  #[instrument(skip(self, request, token), fields(operation = %request.operation, method = %request.method))]
  pub fn execute(&self, request: &PreparedRequest, token: &str) -> Result<Value> {
    let url = self.build_url(&request.path, &request.query)?;
    debug!("Making request to: {}", request.path);

    let builder = match request.method {
      HttpMethod::Get => self.client.get(url),
      HttpMethod::Post => self.client.post(url),
      HttpMethod::Delete => self.client.delete(url),
    };

    let builder = builder.bearer_auth(token);
    let builder = match &request.body {
      Some(body) => builder.json(body),
      None => builder,
    };

    let response = builder.send().map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status().as_u16();
    if !request.accepted.contains(&status) {
      error!("Request failed with status: {}", status);
      return Err(Error::Request { message: request.failure.to_string(), status });
    }
    debug!("Request successful with status: {}", status);

    let text =
      response.text().map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;
    debug!("Response body length: {} bytes", text.len());

    serde_json::from_str(&text).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      Error::InvalidResponse(format!("Response is not valid JSON: {}", e))
    })
  }

  /// Build the full URL: base URL, rendered path, the application key and
  /// then the declared query parameters in order
  pub(crate) fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, path))
      .map_err(|e| Error::InvalidRequest(format!("Invalid URL for '{}': {}", path, e)))?;

    {
      let mut pairs = url.query_pairs_mut();
      pairs.append_pair(APP_KEY_PARAM, &self.app_key);
      for (name, value) in query {
        pairs.append_pair(name, value);
      }
    }

    Ok(url)
  }
}
