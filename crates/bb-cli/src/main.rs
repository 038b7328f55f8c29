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

use anyhow::Result;
use bb_client::AccountabilityClient;
use bb_core::{Config, Environment, Perspective};
use clap::Parser;
use dotenvy::dotenv;
use tracing::debug;

mod commands;
mod output;

use commands::Command;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "bb")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Command,

  /// Deployment to talk to (development, staging, sandbox, production)
  #[arg(short, long, global = true)]
  environment: Option<Environment>,

  /// Agency side to act for (transfer or oversight)
  #[arg(short, long, global = true, default_value = "transfer")]
  perspective: Perspective,

  /// How tables are printed
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
  format: OutputFormat,

  /// Application key, overrides BB_API_APP_KEY
  #[arg(long, global = true)]
  app_key: Option<String>,

  /// OAuth client id, overrides BB_API_CLIENT_ID
  #[arg(long, global = true)]
  client_id: Option<String>,

  /// OAuth client secret, overrides BB_API_CLIENT_SECRET
  #[arg(long, global = true)]
  client_secret: Option<String>,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

impl Cli {
  fn config(&self) -> bb_core::Result<Config> {
    let mut builder = Config::builder();

    if let Some(environment) = self.environment {
      builder = builder.environment(environment);
    }
    if let Some(app_key) = &self.app_key {
      builder = builder.app_key(app_key);
    }
    if let Some(client_id) = &self.client_id {
      builder = builder.client_id(client_id);
    }
    if let Some(client_secret) = &self.client_secret {
      builder = builder.client_secret(client_secret);
    }

    builder.build()
  }
}

fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = cli.config()?;
  debug!(environment = %config.environment, perspective = %cli.perspective, "Resolved configuration");

  let mut client = AccountabilityClient::new(config, cli.perspective)?;
  let tables = cli.command.execute(&mut client)?;

  output::print(&tables, cli.format)?;

  Ok(())
}
