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

//! # bb-core
//!
//! Core types shared by the Accountability v3 client crates: configuration,
//! the error type, the operation and perspective catalogues and input helpers.

pub mod config;
pub mod error;
pub mod input;

pub use config::{Config, ConfigBuilder, Credentials, Environment};
pub use error::{Error, Result};
pub use input::{digits_only, ApiDate};

use std::str::FromStr;

/// Side of the public-fund transfer an API client acts for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Perspective {
  /// Agencies that transfer government program funds ("órgãos de repasse")
  #[default]
  TransferAgency,
  /// Agencies that oversee the use of the funds ("órgãos de controle")
  OversightAgency,
}

impl std::fmt::Display for Perspective {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Perspective::TransferAgency => write!(f, "transfer-agency"),
      Perspective::OversightAgency => write!(f, "oversight-agency"),
    }
  }
}

impl FromStr for Perspective {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "transfer" | "transfer-agency" | "repasse" => Ok(Perspective::TransferAgency),
      "oversight" | "oversight-agency" | "controle" => Ok(Perspective::OversightAgency),
      other => Err(Error::Config(format!("Unknown perspective '{}'", other))),
    }
  }
}

/// The Accountability v3 operations known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  NearbyBranches,
  ProgramStatement,
  ExpenseDocument,
  AccountabilityExpenseDocument,
  Subtransactions,
  InvestmentFundStatement,
  SavingsStatement,

  // Transfer agency only
  UpdatedEntries,
  UpdatedSubEntries,
  ProgramCategories,
  FinancialInvestmentBalance,
  CheckingBalance,
  AssignCreditExpenseCategory,
  IdentifyCreditEntry,
  DeleteCreditEntryIdentification,
  DebitEntryIdentifications,

  // Oversight agency only
  CheckingAccounts,
}

impl std::fmt::Display for Operation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Operation::NearbyBranches => write!(f, "nearby_branches"),
      Operation::ProgramStatement => write!(f, "program_statement"),
      Operation::ExpenseDocument => write!(f, "expense_document"),
      Operation::AccountabilityExpenseDocument => write!(f, "accountability_expense_document"),
      Operation::Subtransactions => write!(f, "subtransactions"),
      Operation::InvestmentFundStatement => write!(f, "investment_fund_statement"),
      Operation::SavingsStatement => write!(f, "savings_statement"),
      Operation::UpdatedEntries => write!(f, "updated_entries"),
      Operation::UpdatedSubEntries => write!(f, "updated_sub_entries"),
      Operation::ProgramCategories => write!(f, "program_categories"),
      Operation::FinancialInvestmentBalance => write!(f, "financial_investment_balance"),
      Operation::CheckingBalance => write!(f, "checking_balance"),
      Operation::AssignCreditExpenseCategory => write!(f, "assign_credit_expense_category"),
      Operation::IdentifyCreditEntry => write!(f, "identify_credit_entry"),
      Operation::DeleteCreditEntryIdentification => {
        write!(f, "delete_credit_entry_identification")
      }
      Operation::DebitEntryIdentifications => write!(f, "debit_entry_identifications"),
      Operation::CheckingAccounts => write!(f, "checking_accounts"),
    }
  }
}

/// Query parameter carrying the gateway application key on every data call
pub const APP_KEY_PARAM: &str = "gw-dev-app-key";

/// Path of the OAuth token endpoint, relative to the OAuth base URL
pub const TOKEN_PATH: &str = "/oauth/token";

/// Scope requested in the client credentials grant
pub const TOKEN_SCOPE: &str = "accountability.statements";

/// Seconds a bearer token is reused before a new one is requested
pub const DEFAULT_TOKEN_REFRESH_SECS: u64 = 600;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variables consulted by [`Config`]
pub const ENV_ENVIRONMENT: &str = "BB_API_ENVIRONMENT";
pub const ENV_APP_KEY: &str = "BB_API_APP_KEY";
pub const ENV_CLIENT_ID: &str = "BB_API_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "BB_API_CLIENT_SECRET";
pub const ENV_API_BASE_URL: &str = "BB_API_BASE_URL";
pub const ENV_OAUTH_BASE_URL: &str = "BB_OAUTH_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "BB_API_TIMEOUT_SECS";
pub const ENV_TOKEN_REFRESH_SECS: &str = "BB_TOKEN_REFRESH_SECS";

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_perspective_parsing() {
    assert_eq!("repasse".parse::<Perspective>().unwrap(), Perspective::TransferAgency);
    assert_eq!("Oversight".parse::<Perspective>().unwrap(), Perspective::OversightAgency);
    assert!("audit".parse::<Perspective>().is_err());
    assert_eq!(Perspective::default().to_string(), "transfer-agency");
  }

  #[test]
  fn test_operation_display() {
    assert_eq!(Operation::ProgramStatement.to_string(), "program_statement");
    assert_eq!(Operation::CheckingAccounts.to_string(), "checking_accounts");
  }
}
