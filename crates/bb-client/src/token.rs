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

//! OAuth2 client-credentials token cache

use bb_core::{Config, Error, Result, TOKEN_PATH, TOKEN_SCOPE};
use chrono::{DateTime, TimeDelta, Utc};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, error, info, instrument};

/// A bearer token and the moment it was obtained
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
  value: String,
  acquired_at: DateTime<Utc>,
}

impl AccessToken {
  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn acquired_at(&self) -> DateTime<Utc> {
    self.acquired_at
  }
}

impl fmt::Debug for AccessToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AccessToken").field("value", &"***").field("acquired_at", &self.acquired_at).finish()
  }
}

#[derive(Deserialize)]
struct TokenResponse {
  access_token: String,
}

/// Keeps one bearer token and renews it once it is older than the refresh
/// interval.
///
/// The token is the only mutable state of a client; renewal happens lazily in
/// [`TokenManager::ensure_fresh_token`] and never retries.
pub struct TokenManager {
  client: Client,
  token_url: String,
  basic_auth: String,
  refresh_after: TimeDelta,
  token: Option<AccessToken>,
}

impl TokenManager {
  /// Create a manager for the OAuth endpoint and credentials in `config`.
  ///
  /// No request is made until a token is first needed.
  pub fn new(config: &Config, client: Client) -> Self {
    let refresh_after = i64::try_from(config.token_refresh_secs)
      .ok()
      .and_then(TimeDelta::try_seconds)
      .unwrap_or(TimeDelta::MAX);

    Self {
      client,
      token_url: format!("{}{}", config.oauth_base_url, TOKEN_PATH),
      basic_auth: config.credentials.basic_auth(),
      refresh_after,
      token: None,
    }
  }

  /// The cached token, if one was obtained
  pub fn token(&self) -> Option<&AccessToken> {
    self.token.as_ref()
  }

  /// Whether a call made at `now` has to renew the token first
  pub fn needs_refresh_at(&self, now: DateTime<Utc>) -> bool {
    match &self.token {
      None => true,
      Some(token) => now - token.acquired_at > self.refresh_after,
    }
  }

  /// Return a usable bearer token, renewing it when missing or stale
  #[instrument(skip(self))]
  pub fn ensure_fresh_token(&mut self) -> Result<&str> {
    if self.needs_refresh_at(Utc::now()) {
      debug!("Bearer token missing or older than {}s", self.refresh_after.num_seconds());
      self.refresh()?;
    }

    self
      .token
      .as_ref()
      .map(AccessToken::value)
      .ok_or_else(|| Error::Authentication("No bearer token available".to_string()))
  }

  /// Request a new token with the client credentials grant.
  ///
  /// On any failure the cached token and its timestamp are left as they were.
  pub fn refresh(&mut self) -> Result<()> {
    let response = self
      .client
      .post(&self.token_url)
      .header(AUTHORIZATION, format!("Basic {}", self.basic_auth))
      .form(&[("grant_type", "client_credentials"), ("scope", TOKEN_SCOPE)])
      .send()
      .map_err(|e| Error::Http(format!("Token request failed: {}", e)))?;

    let status = response.status();
    if status != StatusCode::OK {
      error!("Token request rejected with status: {}", status);
      return Err(Error::Authentication(format!(
        "Could not acquire new access credentials (HTTP {})",
        status.as_u16()
      )));
    }

    let body: TokenResponse = response
      .json()
      .map_err(|e| Error::Authentication(format!("Malformed token response: {}", e)))?;

    self.token = Some(AccessToken { value: body.access_token, acquired_at: Utc::now() });
    info!("Acquired new bearer token");

    Ok(())
  }
}

impl fmt::Debug for TokenManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TokenManager")
      .field("token_url", &self.token_url)
      .field("refresh_after", &self.refresh_after)
      .field("token", &self.token)
      .finish()
  }
}
