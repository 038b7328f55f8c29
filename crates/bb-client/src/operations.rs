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

//! Typed wrappers over [`AccountabilityClient::invoke`]
//!
//! Each method fills the [`Params`] of one operation: dates are formatted as
//! `YYYY-MM-DD`, CNPJ and CEP are reduced to their digits, and the shaped
//! tables are unpacked into the operation's natural result type.

use crate::client::AccountabilityClient;
use crate::endpoints::Params;
use bb_core::{digits_only, ApiDate, Error, Operation, Result};
use bb_models::Table;
use chrono::NaiveDate;
use serde::Serialize;

/// The three parts of an expense document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseDocument {
  /// Who issued the document
  pub issuer: Table,
  /// Who received it
  pub recipient: Table,
  /// Header fields repeated on one row per item
  pub document: Table,
}

impl TryFrom<Vec<Table>> for ExpenseDocument {
  type Error = Error;

  fn try_from(tables: Vec<Table>) -> Result<Self> {
    let mut tables = tables.into_iter();
    match (tables.next(), tables.next(), tables.next()) {
      (Some(issuer), Some(recipient), Some(document)) => {
        Ok(ExpenseDocument { issuer, recipient, document })
      }
      _ => Err(Error::InvalidResponse("Expense documents shape into three tables".to_string())),
    }
  }
}

/// How a savings statement is selected.
///
/// Transfer agencies ask for a month, oversight agencies for a variation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsFilter {
  Period { month: u32, year: i32 },
  VariationCode(u32),
}

/// Assignment of an expense category to a credit entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseCategoryAssignment {
  /// Bank order number of the credit
  pub bank_order: u64,
  /// Item within the bank order
  pub item: u64,
  pub branch: u64,
  pub account: u64,
  pub contract_code: u64,
  pub management_unit_code: String,
  pub expense_category_code: u64,
  pub client_listing_code: String,
}

/// Identification of a credit entry of an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditEntryIdentification {
  pub branch: String,
  pub account: String,
  pub bank_number: u64,
  pub bank_order_sequence: u64,
  pub booking_date: NaiveDate,
  pub company_number: u64,
  pub fractional_value: i64,
  pub identification_type: u32,
  pub identification_code: String,
}

impl AccountabilityClient {
  /// Branches near an address, looked up by the agency's CNPJ and a CEP
  pub fn nearby_branches(&mut self, cnpj: &str, cep: &str) -> Result<Table> {
    let params = Params::new().query("cnpj", digits_only(cnpj)).query("cep", digits_only(cep));

    single(self.invoke(Operation::NearbyBranches, params)?)
  }

  /// Statement of a government program account between two dates
  pub fn program_statement(
    &mut self,
    branch: &str,
    account: &str,
    start: impl ApiDate,
    end: impl ApiDate,
  ) -> Result<Table> {
    let params = account_params(branch, account)
      .query("startDate", start.to_api_date()?)
      .query("endDate", end.to_api_date()?);

    single(self.invoke(Operation::ProgramStatement, params)?)
  }

  /// Expense document attached to a transaction
  pub fn expense_document(
    &mut self,
    branch: &str,
    account: &str,
    transaction: &str,
    document: &str,
    booking_date: impl ApiDate,
  ) -> Result<ExpenseDocument> {
    let params = account_params(branch, account)
      .path("transaction", transaction)
      .path("document", document)
      .query("bookingDate", booking_date.to_api_date()?);

    ExpenseDocument::try_from(self.invoke(Operation::ExpenseDocument, params)?)
  }

  /// Expense document attached to a subtransaction of a transaction
  pub fn accountability_expense_document(
    &mut self,
    branch: &str,
    account: &str,
    transaction: &str,
    subtransaction: &str,
    document: &str,
    booking_date: impl ApiDate,
  ) -> Result<ExpenseDocument> {
    let params = account_params(branch, account)
      .path("transaction", transaction)
      .path("subtransaction", subtransaction)
      .path("document", document)
      .query("bookingDate", booking_date.to_api_date()?);

    ExpenseDocument::try_from(self.invoke(Operation::AccountabilityExpenseDocument, params)?)
  }

  /// Subtransactions of a debit.
  ///
  /// `subtransaction` narrows the result for transfer agencies and is ignored
  /// for oversight agencies.
  pub fn subtransactions(
    &mut self,
    branch: &str,
    account: &str,
    debit: &str,
    subtransaction: Option<&str>,
  ) -> Result<Table> {
    let params = account_params(branch, account)
      .path("debit", debit)
      .query_opt("idSubtransaction", subtransaction);

    single(self.invoke(Operation::Subtransactions, params)?)
  }

  /// Monthly statement of an investment fund
  pub fn investment_fund_statement(
    &mut self,
    branch: &str,
    account: &str,
    fund: &str,
    month: u32,
    year: i32,
  ) -> Result<Table> {
    let params =
      account_params(branch, account).path("fund", fund).query("mes", month).query("ano", year);

    single(self.invoke(Operation::InvestmentFundStatement, params)?)
  }

  /// Statement of a savings account variation
  pub fn savings_statement(
    &mut self,
    branch: &str,
    account: &str,
    variation: &str,
    filter: SavingsFilter,
  ) -> Result<Table> {
    let params = account_params(branch, account).path("variation", variation);
    let params = match filter {
      SavingsFilter::Period { month, year } => params.query("mes", month).query("ano", year),
      SavingsFilter::VariationCode(code) => params.query("codigoVariacao", code),
    };

    single(self.invoke(Operation::SavingsStatement, params)?)
  }

  /// Entries of a program updated between two dates; `page` defaults to 1
  pub fn updated_entries(
    &mut self,
    program: u64,
    start: impl ApiDate,
    end: impl ApiDate,
    page: Option<u32>,
  ) -> Result<Table> {
    let params = updated_params(program, start, end, page)?;

    single(self.invoke(Operation::UpdatedEntries, params)?)
  }

  /// Sub-entries of a program updated between two dates; `page` defaults to 1
  pub fn updated_sub_entries(
    &mut self,
    program: u64,
    start: impl ApiDate,
    end: impl ApiDate,
    page: Option<u32>,
  ) -> Result<Table> {
    let params = updated_params(program, start, end, page)?;

    single(self.invoke(Operation::UpdatedSubEntries, params)?)
  }

  /// Expense categories of a government program
  pub fn program_categories(&mut self, program: u64) -> Result<Table> {
    single(self.invoke(Operation::ProgramCategories, Params::new().path("program", program))?)
  }

  pub fn financial_investment_balance(&mut self, branch: &str, account: &str) -> Result<Table> {
    single(self.invoke(Operation::FinancialInvestmentBalance, account_params(branch, account))?)
  }

  pub fn checking_balance(&mut self, branch: &str, account: &str) -> Result<Table> {
    single(self.invoke(Operation::CheckingBalance, account_params(branch, account))?)
  }

  /// Assign an expense category to a credit entry
  pub fn assign_credit_expense_category(
    &mut self,
    request: &ExpenseCategoryAssignment,
  ) -> Result<Table> {
    let params = Params::new()
      .path("bank_order", request.bank_order)
      .path("item", request.item)
      .body("agencia", request.branch)
      .body("contaCorrente", request.account)
      .body("codigoContrato", request.contract_code)
      .body("codigoUnidadeGestora", request.management_unit_code.as_str())
      .body("codigoCategoriaDespesa", request.expense_category_code)
      .body("codigoListagemCliente", request.client_listing_code.as_str());

    single(self.invoke(Operation::AssignCreditExpenseCategory, params)?)
  }

  /// Identify a credit entry of an account
  pub fn identify_credit_entry(&mut self, request: &CreditEntryIdentification) -> Result<Table> {
    let params = account_params(&request.branch, &request.account)
      .body("numeroBancario", request.bank_number)
      .body("numeroSequencialOrdemBancaria", request.bank_order_sequence)
      .body("dataLancamento", request.booking_date.to_api_date()?)
      .body("numeroCompanhia", request.company_number)
      .body("valorFracionado", request.fractional_value)
      .body("tipoIdentificacao", request.identification_type)
      .body("codigoIdentificacao", request.identification_code.as_str());

    single(self.invoke(Operation::IdentifyCreditEntry, params)?)
  }

  /// Remove a credit entry identification
  pub fn delete_credit_entry_identification(
    &mut self,
    branch: &str,
    account: &str,
    entry: &str,
    identification: &str,
  ) -> Result<Table> {
    let params =
      account_params(branch, account).path("entry", entry).path("identification", identification);

    single(self.invoke(Operation::DeleteCreditEntryIdentification, params)?)
  }

  /// Identified debit entries of an account; `page` defaults to 1
  pub fn debit_entry_identifications(
    &mut self,
    branch: &str,
    account: &str,
    page: Option<u32>,
  ) -> Result<Table> {
    let params = account_params(branch, account).query("numeroPagina", page.unwrap_or(1));

    single(self.invoke(Operation::DebitEntryIdentifications, params)?)
  }

  /// Checking accounts under oversight of the agency with the given registry
  pub fn checking_accounts(&mut self, registry: &str) -> Result<Table> {
    let params = Params::new().query("numeroRegistro", registry);

    single(self.invoke(Operation::CheckingAccounts, params)?)
  }
}

fn account_params(branch: &str, account: &str) -> Params {
  Params::new().path("branch", branch).path("account", account)
}

fn updated_params(
  program: u64,
  start: impl ApiDate,
  end: impl ApiDate,
  page: Option<u32>,
) -> Result<Params> {
  Ok(
    Params::new()
      .path("program", program)
      .query("dataInicio", start.to_api_date()?)
      .query("dataFim", end.to_api_date()?)
      .query("pagina", page.unwrap_or(1)),
  )
}

fn single(tables: Vec<Table>) -> Result<Table> {
  tables.into_iter().next().ok_or_else(|| Error::InvalidResponse("No table was shaped".to_string()))
}
