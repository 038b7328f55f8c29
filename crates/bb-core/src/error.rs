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

use thiserror::Error;

/// The main error type for bb-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// A required construction parameter was neither passed nor found in the environment
  #[error("Missing {name}: pass it explicitly or set the {env_var} environment variable")]
  MissingParameter {
    /// Human readable parameter name
    name: &'static str,
    /// Environment variable consulted as fallback
    env_var: &'static str,
  },

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// The identity provider rejected the client credentials grant
  #[error("Authentication failed: {0}")]
  Authentication(String),

  /// A data call answered with a status outside the accepted set
  #[error("{message} (HTTP {status})")]
  Request {
    /// Operation specific description of what failed
    message: String,
    /// Status code returned by the gateway
    status: u16,
  },

  /// The request could not be built from the supplied parameters
  #[error("Invalid request: {0}")]
  InvalidRequest(String),

  /// The operation is not offered by the selected perspective
  #[error("Operation {operation} is not available for the {perspective} perspective")]
  UnsupportedOperation {
    /// Operation name
    operation: String,
    /// Perspective name
    perspective: String,
  },

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// Date/Time parsing error
  #[error("Date parsing error")]
  ParseDate(#[from] chrono::ParseError),

  /// Missing required field in response
  #[error("Missing required field: {0}")]
  MissingField(String),

  /// Invalid response from API
  #[error("Invalid API response: {0}")]
  InvalidResponse(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),
}

/// Result type alias for bb-* crates
pub type Result<T> = std::result::Result<T, Error>;
