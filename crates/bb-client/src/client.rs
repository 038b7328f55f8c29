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

//! Main client for the Accountability v3 API

use crate::endpoints::{self, Params};
use crate::token::TokenManager;
use crate::transport::Transport;
use bb_core::{Config, Operation, Perspective, Result};
use bb_models::{shape, Table};
use tracing::{debug, info, instrument};

/// Blocking client for one perspective of the Accountability v3 API.
///
/// The client owns a single [`TokenManager`]; every call first makes sure the
/// bearer token is fresh, then sends the request described by the endpoint
/// catalogue and shapes the JSON answer into tables.
///
/// # Examples
///
/// ```no_run
/// use bb_client::AccountabilityClient;
/// use bb_core::{Config, Perspective};
///
/// # fn main() -> bb_core::Result<()> {
/// let config = Config::from_env()?;
/// let mut client = AccountabilityClient::new(config, Perspective::TransferAgency)?;
///
/// let statement = client.program_statement("1234", "56789", "2024-01-01", "2024-01-31")?;
/// println!("{} transactions", statement.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AccountabilityClient {
  perspective: Perspective,
  config: Config,
  tokens: TokenManager,
  transport: Transport,
}

impl AccountabilityClient {
  /// Create a new client for `perspective`
  ///
  /// # Arguments
  ///
  /// * `config` - Resolved configuration (credentials, base URLs, timeouts)
  /// * `perspective` - Which agency side the client acts for
  pub fn new(config: Config, perspective: Perspective) -> Result<Self> {
    let transport = Transport::new(&config)?;
    let tokens = TokenManager::new(&config, transport.http().clone());

    info!(
      environment = %config.environment,
      %perspective,
      base_url = transport.base_url(),
      timeout = ?transport.timeout(),
      "Created accountability client"
    );

    Ok(Self { perspective, config, tokens, transport })
  }

  /// Create a client with configuration resolved from the environment
  pub fn from_env(perspective: Perspective) -> Result<Self> {
    Self::new(Config::from_env()?, perspective)
  }

  pub fn perspective(&self) -> Perspective {
    self.perspective
  }

  /// Get the configuration
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// The token cache, mostly useful to inspect when the token was obtained
  pub fn tokens(&self) -> &TokenManager {
    &self.tokens
  }

  /// Whether the selected perspective offers `operation`
  pub fn supports(&self, operation: Operation) -> bool {
    endpoints::endpoint(self.perspective, operation).is_ok()
  }

  /// Operations available to the selected perspective
  pub fn operations(&self) -> impl Iterator<Item = Operation> {
    endpoints::catalogue(self.perspective).iter().map(|endpoint| endpoint.operation)
  }

  /// Call `operation` with `params` and shape the answer.
  ///
  /// Returns one table per shape declared for the endpoint, in order. Fails
  /// with `UnsupportedOperation` before any network traffic when the
  /// perspective does not offer the operation.
  #[instrument(skip(self, params), fields(perspective = %self.perspective))]
  pub fn invoke(&mut self, operation: Operation, params: Params) -> Result<Vec<Table>> {
    let endpoint = endpoints::endpoint(self.perspective, operation)?;
    let request = endpoint.prepare(&params)?;

    let token = self.tokens.ensure_fresh_token()?;
    let json = self.transport.execute(&request, token)?;

    let tables = endpoint.shapes.iter().map(|config| shape(&json, config)).collect::<Result<Vec<_>>>()?;
    debug!(tables = tables.len(), "Shaped {} response", operation);

    Ok(tables)
  }
}
