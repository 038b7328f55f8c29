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

//! One subcommand per API operation

pub mod entries;

use crate::output::Titled;
use anyhow::{bail, Result};
use bb_client::{AccountabilityClient, ExpenseDocument, SavingsFilter};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use entries::{AssignCategoryArgs, IdentifyCreditArgs};

/// Branch and checking account of a program account
#[derive(Args, Debug)]
pub struct AccountArgs {
  /// Branch number, without check digit
  #[arg(long)]
  pub branch: String,

  /// Checking account number, without check digit
  #[arg(long)]
  pub account: String,
}

#[derive(Args, Debug)]
pub struct UpdatedArgs {
  /// Government program number
  #[arg(long)]
  pub program: u64,

  #[arg(long)]
  pub start: NaiveDate,

  #[arg(long)]
  pub end: NaiveDate,

  /// Result page, starting at 1
  #[arg(long)]
  pub page: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Branches near an address
  NearbyBranches {
    /// CNPJ of the agency, punctuation allowed
    #[arg(long)]
    cnpj: String,

    /// CEP of the address, punctuation allowed
    #[arg(long)]
    cep: String,
  },

  /// Statement of a government program account
  Statement {
    #[command(flatten)]
    account: AccountArgs,

    #[arg(long)]
    start: NaiveDate,

    #[arg(long)]
    end: NaiveDate,
  },

  /// Expense document attached to a transaction
  ExpenseDocument {
    #[command(flatten)]
    account: AccountArgs,

    #[arg(long)]
    transaction: String,

    #[arg(long)]
    document: String,

    #[arg(long)]
    booking_date: NaiveDate,
  },

  /// Expense document attached to a subtransaction
  SubtransactionDocument {
    #[command(flatten)]
    account: AccountArgs,

    #[arg(long)]
    transaction: String,

    #[arg(long)]
    subtransaction: String,

    #[arg(long)]
    document: String,

    #[arg(long)]
    booking_date: NaiveDate,
  },

  /// Subtransactions of a debit
  Subtransactions {
    #[command(flatten)]
    account: AccountArgs,

    #[arg(long)]
    debit: String,

    /// Only this subtransaction (transfer agencies)
    #[arg(long)]
    subtransaction: Option<String>,
  },

  /// Monthly investment fund statement
  FundStatement {
    #[command(flatten)]
    account: AccountArgs,

    #[arg(long)]
    fund: String,

    #[arg(long)]
    month: u32,

    #[arg(long)]
    year: i32,
  },

  /// Savings account statement
  Savings {
    #[command(flatten)]
    account: AccountArgs,

    /// Savings variation in the path
    #[arg(long)]
    variation: String,

    /// Month of the statement (transfer agencies)
    #[arg(long, requires = "year", conflicts_with = "variation_code")]
    month: Option<u32>,

    #[arg(long, requires = "month")]
    year: Option<i32>,

    /// Variation code filter (oversight agencies)
    #[arg(long)]
    variation_code: Option<u32>,
  },

  /// Entries of a program updated in a period
  UpdatedEntries(UpdatedArgs),

  /// Sub-entries of a program updated in a period
  UpdatedSubEntries(UpdatedArgs),

  /// Expense categories of a government program
  Categories {
    #[arg(long)]
    program: u64,
  },

  /// Balance of financial investments
  InvestmentBalance(AccountArgs),

  /// Checking account balance
  CheckingBalance(AccountArgs),

  /// Assign an expense category to a credit entry
  AssignCategory(AssignCategoryArgs),

  /// Identify a credit entry
  IdentifyCredit(IdentifyCreditArgs),

  /// Remove a credit entry identification
  DeleteIdentification {
    #[command(flatten)]
    account: AccountArgs,

    /// Sequential number of the entry
    #[arg(long)]
    entry: String,

    /// Sequential number of the identification
    #[arg(long)]
    identification: String,
  },

  /// Identified debit entries of an account
  DebitIdentifications {
    #[command(flatten)]
    account: AccountArgs,

    #[arg(long)]
    page: Option<u32>,
  },

  /// Checking accounts under oversight (oversight agencies)
  CheckingAccounts {
    /// CNPJ or registry number of the agency
    #[arg(long)]
    registry: String,
  },
}

impl Command {
  /// Run the operation and collect the tables to print
  pub fn execute(self, client: &mut AccountabilityClient) -> Result<Vec<Titled>> {
    let table = match self {
      Command::NearbyBranches { cnpj, cep } => client.nearby_branches(&cnpj, &cep)?,
      Command::Statement { account, start, end } => {
        client.program_statement(&account.branch, &account.account, start, end)?
      }
      Command::ExpenseDocument { account, transaction, document, booking_date } => {
        return Ok(document_tables(client.expense_document(
          &account.branch,
          &account.account,
          &transaction,
          &document,
          booking_date,
        )?));
      }
      Command::SubtransactionDocument {
        account,
        transaction,
        subtransaction,
        document,
        booking_date,
      } => {
        return Ok(document_tables(client.accountability_expense_document(
          &account.branch,
          &account.account,
          &transaction,
          &subtransaction,
          &document,
          booking_date,
        )?));
      }
      Command::Subtransactions { account, debit, subtransaction } => client.subtransactions(
        &account.branch,
        &account.account,
        &debit,
        subtransaction.as_deref(),
      )?,
      Command::FundStatement { account, fund, month, year } => {
        client.investment_fund_statement(&account.branch, &account.account, &fund, month, year)?
      }
      Command::Savings { account, variation, month, year, variation_code } => {
        let filter = match (month, year, variation_code) {
          (_, _, Some(code)) => SavingsFilter::VariationCode(code),
          (Some(month), Some(year), None) => SavingsFilter::Period { month, year },
          _ => bail!("Pass --month and --year, or --variation-code"),
        };
        client.savings_statement(&account.branch, &account.account, &variation, filter)?
      }
      Command::UpdatedEntries(args) => {
        client.updated_entries(args.program, args.start, args.end, args.page)?
      }
      Command::UpdatedSubEntries(args) => {
        client.updated_sub_entries(args.program, args.start, args.end, args.page)?
      }
      Command::Categories { program } => client.program_categories(program)?,
      Command::InvestmentBalance(account) => {
        client.financial_investment_balance(&account.branch, &account.account)?
      }
      Command::CheckingBalance(account) => {
        client.checking_balance(&account.branch, &account.account)?
      }
      Command::AssignCategory(args) => client.assign_credit_expense_category(&args.into())?,
      Command::IdentifyCredit(args) => client.identify_credit_entry(&args.into())?,
      Command::DeleteIdentification { account, entry, identification } => client
        .delete_credit_entry_identification(
          &account.branch,
          &account.account,
          &entry,
          &identification,
        )?,
      Command::DebitIdentifications { account, page } => {
        client.debit_entry_identifications(&account.branch, &account.account, page)?
      }
      Command::CheckingAccounts { registry } => client.checking_accounts(&registry)?,
    };

    Ok(vec![Titled::new("result", table)])
  }
}

fn document_tables(document: ExpenseDocument) -> Vec<Titled> {
  vec![
    Titled::new("issuer", document.issuer),
    Titled::new("recipient", document.recipient),
    Titled::new("document", document.document),
  ]
}
