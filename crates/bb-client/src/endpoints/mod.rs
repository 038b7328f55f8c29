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

//! Endpoint catalogue for the Accountability v3 API
//!
//! Every (perspective, operation) pair maps to a static [`EndpointConfig`]
//! describing the HTTP method, path template, declared parameters, accepted
//! statuses and how the response is shaped into tables. The invoker only reads
//! these tables; adding an endpoint means adding a row.

mod common;
pub mod labels;
mod oversight;
mod transfer;

use bb_core::{Error, Operation, Perspective, Result};
use bb_models::ShapeConfig;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
  Get,
  Post,
  Delete,
}

impl fmt::Display for HttpMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      HttpMethod::Get => write!(f, "GET"),
      HttpMethod::Post => write!(f, "POST"),
      HttpMethod::Delete => write!(f, "DELETE"),
    }
  }
}

/// A query parameter an endpoint understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
  pub name: &'static str,
  pub required: bool,
}

impl QueryParam {
  pub const fn required(name: &'static str) -> Self {
    QueryParam { name, required: true }
  }

  pub const fn optional(name: &'static str) -> Self {
    QueryParam { name, required: false }
  }
}

/// Statuses accepted by read endpoints
pub const OK: &[u16] = &[200];

/// Statuses accepted by write endpoints
pub const OK_OR_CREATED: &[u16] = &[200, 201];

/// Static description of one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointConfig {
  pub operation: Operation,
  pub method: HttpMethod,
  /// Path with `{name}` placeholders
  pub path: &'static str,
  /// Declared query parameters, in the order they are sent
  pub query: &'static [QueryParam],
  /// Declared JSON body fields; only meaningful for POST and DELETE
  pub body: &'static [&'static str],
  pub accepted: &'static [u16],
  /// Message carried by [`Error::Request`] when the status is not accepted
  pub failure: &'static str,
  /// One table is produced per shape, in order
  pub shapes: &'static [ShapeConfig],
}

impl EndpointConfig {
  pub const fn new(
    operation: Operation,
    method: HttpMethod,
    path: &'static str,
    failure: &'static str,
  ) -> Self {
    EndpointConfig {
      operation,
      method,
      path,
      query: &[],
      body: &[],
      accepted: OK,
      failure,
      shapes: &[],
    }
  }

  pub const fn get(operation: Operation, path: &'static str, failure: &'static str) -> Self {
    Self::new(operation, HttpMethod::Get, path, failure)
  }

  pub const fn post(operation: Operation, path: &'static str, failure: &'static str) -> Self {
    Self::new(operation, HttpMethod::Post, path, failure).accept(OK_OR_CREATED)
  }

  pub const fn delete(operation: Operation, path: &'static str, failure: &'static str) -> Self {
    Self::new(operation, HttpMethod::Delete, path, failure).accept(OK_OR_CREATED)
  }

  pub const fn query(mut self, query: &'static [QueryParam]) -> Self {
    self.query = query;
    self
  }

  pub const fn body(mut self, fields: &'static [&'static str]) -> Self {
    self.body = fields;
    self
  }

  pub const fn accept(mut self, statuses: &'static [u16]) -> Self {
    self.accepted = statuses;
    self
  }

  pub const fn shapes(mut self, shapes: &'static [ShapeConfig]) -> Self {
    self.shapes = shapes;
    self
  }

  /// Resolve the path, query and body of a call from caller supplied `params`.
  ///
  /// Query parameters the endpoint does not declare are dropped. A missing
  /// required query parameter, body field or path placeholder is an
  /// [`Error::InvalidRequest`].
  pub fn prepare(&self, params: &Params) -> Result<PreparedRequest> {
    let path = render_path(self.path, &params.path)?;

    let mut query = Vec::with_capacity(self.query.len());
    for declared in self.query {
      match params.query.iter().find(|(name, _)| *name == declared.name) {
        Some((name, value)) => query.push((*name, value.clone())),
        None if declared.required => {
          return Err(Error::InvalidRequest(format!(
            "{} requires the '{}' query parameter",
            self.operation, declared.name
          )));
        }
        None => {}
      }
    }

    for (name, _) in &params.query {
      if !self.query.iter().any(|declared| declared.name == *name) {
        debug!(operation = %self.operation, parameter = *name, "dropping undeclared query parameter");
      }
    }

    let body = match self.method {
      HttpMethod::Get => None,
      HttpMethod::Post | HttpMethod::Delete => {
        let mut body = Map::new();
        for field in self.body {
          let value = params.body.get(*field).ok_or_else(|| {
            Error::InvalidRequest(format!("{} requires the '{}' body field", self.operation, field))
          })?;
          body.insert(field.to_string(), value.clone());
        }
        Some(Value::Object(body))
      }
    };

    Ok(PreparedRequest {
      operation: self.operation,
      method: self.method,
      path,
      query,
      body,
      accepted: self.accepted,
      failure: self.failure,
    })
  }
}

/// Caller supplied values for one call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
  path: Vec<(&'static str, String)>,
  query: Vec<(&'static str, String)>,
  body: Map<String, Value>,
}

impl Params {
  pub fn new() -> Self {
    Self::default()
  }

  /// Value for the `{name}` placeholder of the path
  pub fn path(mut self, name: &'static str, value: impl fmt::Display) -> Self {
    self.path.push((name, value.to_string()));
    self
  }

  pub fn query(mut self, name: &'static str, value: impl fmt::Display) -> Self {
    self.query.push((name, value.to_string()));
    self
  }

  /// Add a query parameter only when `value` is present
  pub fn query_opt<T: fmt::Display>(self, name: &'static str, value: Option<T>) -> Self {
    match value {
      Some(value) => self.query(name, value),
      None => self,
    }
  }

  pub fn body(mut self, name: &'static str, value: impl Into<Value>) -> Self {
    self.body.insert(name.to_string(), value.into());
    self
  }
}

/// A fully resolved call, ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
  pub operation: Operation,
  pub method: HttpMethod,
  /// Rendered path, relative to the API base URL
  pub path: String,
  pub query: Vec<(&'static str, String)>,
  pub body: Option<Value>,
  pub accepted: &'static [u16],
  pub failure: &'static str,
}

/// All endpoints offered to `perspective`
pub fn catalogue(perspective: Perspective) -> &'static [EndpointConfig] {
  match perspective {
    Perspective::TransferAgency => transfer::ENDPOINTS,
    Perspective::OversightAgency => oversight::ENDPOINTS,
  }
}

/// Look up the endpoint serving `operation` for `perspective`
pub fn endpoint(perspective: Perspective, operation: Operation) -> Result<&'static EndpointConfig> {
  catalogue(perspective).iter().find(|endpoint| endpoint.operation == operation).ok_or_else(|| {
    Error::UnsupportedOperation {
      operation: operation.to_string(),
      perspective: perspective.to_string(),
    }
  })
}

fn render_path(template: &str, values: &[(&'static str, String)]) -> Result<String> {
  let mut path = String::with_capacity(template.len());
  let mut rest = template;

  while let Some(start) = rest.find('{') {
    let end = rest[start..]
      .find('}')
      .map(|offset| start + offset)
      .ok_or_else(|| Error::InvalidRequest(format!("Unterminated placeholder in '{}'", template)))?;
    let name = &rest[start + 1..end];
    let value = values
      .iter()
      .find(|(candidate, _)| *candidate == name)
      .map(|(_, value)| value)
      .ok_or_else(|| Error::InvalidRequest(format!("Missing path parameter '{}'", name)))?;

    path.push_str(&rest[..start]);
    path.push_str(value);
    rest = &rest[end + 1..];
  }

  path.push_str(rest);
  Ok(path)
}
