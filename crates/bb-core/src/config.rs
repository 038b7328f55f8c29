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

//! Configuration management for the Accountability client
//!
//! Every construction parameter is resolved with the same precedence:
//!
//! 1. a value passed explicitly to [`ConfigBuilder`],
//! 2. the matching `BB_*` environment variable (a `.env` file is loaded first),
//! 3. the built-in default, or [`Error::MissingParameter`] for credentials.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
  /// Development deployment
  Development,
  /// Staging (homologation) deployment
  #[default]
  Staging,
  /// Alternate staging deployment (sandbox)
  StagingAlternate,
  /// Production deployment
  Production,
}

impl Environment {
  /// Base URL of the data API
  pub fn api_base_url(&self) -> &'static str {
    match self {
      Environment::Development => "https://api.desenv.bb.com.br",
      Environment::Staging => "https://api.hm.bb.com.br",
      Environment::StagingAlternate => "https://api.sandbox.bb.com.br",
      Environment::Production => "https://api.bb.com.br",
    }
  }

  /// Base URL of the OAuth identity provider
  pub fn oauth_base_url(&self) -> &'static str {
    match self {
      Environment::Development => "https://oauth.desenv.bb.com.br",
      Environment::Staging => "https://oauth.hm.bb.com.br",
      Environment::StagingAlternate => "https://oauth.sandbox.bb.com.br",
      Environment::Production => "https://oauth.bb.com.br",
    }
  }
}

impl fmt::Display for Environment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Environment::Development => write!(f, "development"),
      Environment::Staging => write!(f, "staging"),
      Environment::StagingAlternate => write!(f, "staging-alternate"),
      Environment::Production => write!(f, "production"),
    }
  }
}

impl FromStr for Environment {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "development" | "dev" | "desenvolvimento" => Ok(Environment::Development),
      "staging" | "hm" | "homologacao" => Ok(Environment::Staging),
      "staging-alternate" | "sandbox" | "homologacao-alternativo" => {
        Ok(Environment::StagingAlternate)
      }
      "production" | "prod" | "producao" => Ok(Environment::Production),
      other => Err(Error::Config(format!("Unknown environment '{}'", other))),
    }
  }
}

/// Application key and OAuth client credentials.
///
/// Only the client id is serialised; the key and secret come back blank from
/// a deserialised value and must be supplied again.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
  /// Gateway application key sent as `gw-dev-app-key`
  #[serde(skip)]
  pub app_key: String,
  /// OAuth client id
  pub client_id: String,
  /// OAuth client secret
  #[serde(skip)]
  pub client_secret: String,
}

impl Credentials {
  /// Bundle the three credential values
  pub fn new(
    app_key: impl Into<String>,
    client_id: impl Into<String>,
    client_secret: impl Into<String>,
  ) -> Self {
    Self { app_key: app_key.into(), client_id: client_id.into(), client_secret: client_secret.into() }
  }

  /// `base64(client_id:client_secret)`, the payload of the `Basic` authorization header
  pub fn basic_auth(&self) -> String {
    STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret))
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("app_key", &"***")
      .field("client_id", &self.client_id)
      .field("client_secret", &"***")
      .finish()
  }
}

/// Main configuration struct for the Accountability client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Selected deployment
  pub environment: Environment,

  /// Application key and client credentials
  pub credentials: Credentials,

  /// Base URL for data calls (defaults to the environment's)
  pub api_base_url: String,

  /// Base URL for the token endpoint (defaults to the environment's)
  pub oauth_base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Seconds a bearer token is reused before a new one is requested
  pub token_refresh_secs: u64,
}

impl Config {
  /// Resolve every parameter from the environment
  pub fn from_env() -> Result<Self> {
    ConfigBuilder::default().build()
  }

  /// Start a builder for explicit values
  pub fn builder() -> ConfigBuilder {
    ConfigBuilder::default()
  }

  /// Create a config with default values and no environment lookup
  pub fn new(environment: Environment, credentials: Credentials) -> Self {
    Config {
      environment,
      credentials,
      api_base_url: environment.api_base_url().to_string(),
      oauth_base_url: environment.oauth_base_url().to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      token_refresh_secs: crate::DEFAULT_TOKEN_REFRESH_SECS,
    }
  }
}

/// Builder applying explicit > environment > default precedence
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
  environment: Option<Environment>,
  app_key: Option<String>,
  client_id: Option<String>,
  client_secret: Option<String>,
  api_base_url: Option<String>,
  oauth_base_url: Option<String>,
  timeout_secs: Option<u64>,
  token_refresh_secs: Option<u64>,
}

impl ConfigBuilder {
  /// Select the deployment
  pub fn environment(mut self, environment: Environment) -> Self {
    self.environment = Some(environment);
    self
  }

  /// Set the application key
  pub fn app_key(mut self, app_key: impl Into<String>) -> Self {
    self.app_key = Some(app_key.into());
    self
  }

  /// Set the OAuth client id
  pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
    self.client_id = Some(client_id.into());
    self
  }

  /// Set the OAuth client secret
  pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
    self.client_secret = Some(client_secret.into());
    self
  }

  /// Override the data API base URL
  pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
    self.api_base_url = Some(url.into());
    self
  }

  /// Override the OAuth base URL
  pub fn oauth_base_url(mut self, url: impl Into<String>) -> Self {
    self.oauth_base_url = Some(url.into());
    self
  }

  /// Set the request timeout
  pub fn timeout_secs(mut self, secs: u64) -> Self {
    self.timeout_secs = Some(secs);
    self
  }

  /// Set how long a bearer token is reused
  pub fn token_refresh_secs(mut self, secs: u64) -> Self {
    self.token_refresh_secs = Some(secs);
    self
  }

  /// Resolve the configuration against the process environment
  pub fn build(self) -> Result<Config> {
    dotenv().ok();

    self.build_with(|name| env::var(name).ok())
  }

  /// Resolve the configuration against an arbitrary variable lookup
  pub fn build_with<F>(self, lookup: F) -> Result<Config>
  where
    F: Fn(&str) -> Option<String>,
  {
    let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let environment = match self.environment {
      Some(environment) => environment,
      None => match lookup(crate::ENV_ENVIRONMENT) {
        Some(value) => value.parse()?,
        None => Environment::default(),
      },
    };

    let app_key = required(self.app_key, &lookup, "application key", crate::ENV_APP_KEY)?;
    let client_id = required(self.client_id, &lookup, "client id", crate::ENV_CLIENT_ID)?;
    let client_secret =
      required(self.client_secret, &lookup, "client secret", crate::ENV_CLIENT_SECRET)?;

    let api_base_url = base_url(
      self.api_base_url.or_else(|| lookup(crate::ENV_API_BASE_URL)),
      environment.api_base_url(),
    )?;
    let oauth_base_url = base_url(
      self.oauth_base_url.or_else(|| lookup(crate::ENV_OAUTH_BASE_URL)),
      environment.oauth_base_url(),
    )?;

    let timeout_secs = match self.timeout_secs {
      Some(secs) => secs,
      None => number(&lookup, crate::ENV_TIMEOUT_SECS, crate::DEFAULT_TIMEOUT_SECS)?,
    };
    let token_refresh_secs = match self.token_refresh_secs {
      Some(secs) => secs,
      None => {
        number(&lookup, crate::ENV_TOKEN_REFRESH_SECS, crate::DEFAULT_TOKEN_REFRESH_SECS)?
      }
    };

    Ok(Config {
      environment,
      credentials: Credentials { app_key, client_id, client_secret },
      api_base_url,
      oauth_base_url,
      timeout_secs,
      token_refresh_secs,
    })
  }
}

fn required<F>(
  explicit: Option<String>,
  lookup: &F,
  name: &'static str,
  env_var: &'static str,
) -> Result<String>
where
  F: Fn(&str) -> Option<String>,
{
  explicit
    .filter(|v| !v.trim().is_empty())
    .or_else(|| lookup(env_var))
    .ok_or(Error::MissingParameter { name, env_var })
}

fn base_url(candidate: Option<String>, default: &str) -> Result<String> {
  let value = candidate.unwrap_or_else(|| default.to_string());

  Url::parse(&value).map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", value, e)))?;

  Ok(value.trim_end_matches('/').to_string())
}

fn number<F>(lookup: &F, env_var: &str, default: u64) -> Result<u64>
where
  F: Fn(&str) -> Option<String>,
{
  match lookup(env_var) {
    Some(value) => {
      value.trim().parse().map_err(|_| Error::Config(format!("Invalid {}", env_var)))
    }
    None => Ok(default),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
  }

  #[test]
  fn test_config_from_lookup() {
    let env = vars(&[
      ("BB_API_APP_KEY", "env_key"),
      ("BB_API_CLIENT_ID", "env_id"),
      ("BB_API_CLIENT_SECRET", "env_secret"),
    ]);

    let config = ConfigBuilder::default().build_with(|k| env.get(k).cloned()).unwrap();

    assert_eq!(config.environment, Environment::Staging);
    assert_eq!(config.credentials.app_key, "env_key");
    assert_eq!(config.api_base_url, "https://api.hm.bb.com.br");
    assert_eq!(config.oauth_base_url, "https://oauth.hm.bb.com.br");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.token_refresh_secs, 600);
  }

  #[test]
  fn test_explicit_value_overrides_environment() {
    let env = vars(&[
      ("BB_API_APP_KEY", "env_key"),
      ("BB_API_CLIENT_ID", "env_id"),
      ("BB_API_CLIENT_SECRET", "env_secret"),
      ("BB_API_ENVIRONMENT", "production"),
    ]);

    let config = Config::builder()
      .app_key("explicit_key")
      .environment(Environment::Development)
      .build_with(|k| env.get(k).cloned())
      .unwrap();

    assert_eq!(config.credentials.app_key, "explicit_key");
    assert_eq!(config.credentials.client_id, "env_id");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.api_base_url, "https://api.desenv.bb.com.br");
  }

  #[test]
  fn test_missing_secret_names_env_var() {
    let env = vars(&[("BB_API_APP_KEY", "k"), ("BB_API_CLIENT_ID", "id")]);

    let err = Config::builder().build_with(|k| env.get(k).cloned()).unwrap_err();

    match err {
      Error::MissingParameter { env_var, .. } => assert_eq!(env_var, "BB_API_CLIENT_SECRET"),
      other => panic!("Expected MissingParameter, got {:?}", other),
    }
    assert!(
      Config::builder()
        .client_secret("s")
        .build_with(|_| None)
        .unwrap_err()
        .to_string()
        .contains("BB_API_APP_KEY")
    );
  }

  #[test]
  fn test_blank_values_count_as_missing() {
    let env = vars(&[("BB_API_APP_KEY", "  ")]);

    let err = Config::builder()
      .client_id("id")
      .client_secret("secret")
      .build_with(|k| env.get(k).cloned())
      .unwrap_err();

    assert!(matches!(err, Error::MissingParameter { name: "application key", .. }));
  }

  #[test]
  fn test_base_url_override_and_numbers() {
    let env = vars(&[("BB_API_TIMEOUT_SECS", "5"), ("BB_TOKEN_REFRESH_SECS", "abc")]);

    let err = Config::builder()
      .app_key("k")
      .client_id("id")
      .client_secret("s")
      .build_with(|k| env.get(k).cloned())
      .unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let config = Config::builder()
      .app_key("k")
      .client_id("id")
      .client_secret("s")
      .api_base_url("http://127.0.0.1:8080/")
      .token_refresh_secs(60)
      .build_with(|k| env.get(k).cloned())
      .unwrap();
    assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.token_refresh_secs, 60);
  }

  #[test]
  fn test_environment_parsing() {
    assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::StagingAlternate);
    assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
    assert!("mars".parse::<Environment>().is_err());
    assert_eq!(Environment::StagingAlternate.to_string(), "staging-alternate");
  }

  #[test]
  fn test_serialized_config_reads_back_without_secrets() {
    let config = Config::new(Environment::Staging, Credentials::new("app", "client", "secret"));

    let text = serde_json::to_string(&config).unwrap();
    assert!(!text.contains("\"app\""));
    assert!(!text.contains("secret"));

    let restored: Config = serde_json::from_str(&text).unwrap();
    assert_eq!(restored.environment, Environment::Staging);
    assert_eq!(restored.api_base_url, config.api_base_url);
    assert_eq!(restored.credentials.client_id, "client");
    assert!(restored.credentials.app_key.is_empty());
    assert!(restored.credentials.client_secret.is_empty());
  }

  #[test]
  fn test_basic_auth_and_debug_redaction() {
    let credentials = Credentials::new("app", "client", "secret");

    assert_eq!(credentials.basic_auth(), "Y2xpZW50OnNlY3JldA==");
    let debug = format!("{:?}", credentials);
    assert!(!debug.contains("secret\""));
    assert!(!debug.contains("app\""));
  }
}
