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

//! # bb-client
//!
//! Blocking client for the Banco do Brasil Accountability v3 API.
//!
//! The client authenticates with the OAuth2 client credentials grant, keeps the
//! bearer token for ten minutes and turns every JSON answer into one or more
//! [`Table`]s with Portuguese column names.
//!
//! ## Features
//!
//! - Transfer agency and oversight agency perspectives behind one type
//! - Static endpoint catalogue; unsupported operations fail before any request
//! - Lazy token renewal without retries
//! - Typed operations accepting `chrono` dates or `YYYY-MM-DD` strings
//!
//! ## Example
//!
//! ```no_run
//! use bb_client::AccountabilityClient;
//! use bb_core::{Config, Environment, Perspective};
//!
//! # fn main() -> bb_core::Result<()> {
//! let config = Config::builder()
//!   .environment(Environment::Production)
//!   .app_key("app-key")
//!   .client_id("client-id")
//!   .client_secret("client-secret")
//!   .build()?;
//!
//! let mut client = AccountabilityClient::new(config, Perspective::OversightAgency)?;
//! let accounts = client.checking_accounts("00000000000191")?;
//!
//! println!("{}", serde_json::to_string_pretty(&accounts)?);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod operations;
pub mod token;
pub mod transport;

pub use client::AccountabilityClient;
pub use endpoints::{EndpointConfig, HttpMethod, Params, QueryParam};
pub use operations::{
  CreditEntryIdentification, ExpenseCategoryAssignment, ExpenseDocument, SavingsFilter,
};
pub use token::{AccessToken, TokenManager};
pub use transport::Transport;

pub use bb_core::{Config, Environment, Error, Operation, Perspective, Result};
pub use bb_models::Table;
