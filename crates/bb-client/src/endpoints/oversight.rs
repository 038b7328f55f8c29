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

//! Endpoints offered to oversight agencies ("órgãos de controle")

use super::common::*;
use super::labels::*;
use super::{EndpointConfig, QueryParam};
use bb_core::Operation;
use bb_models::ShapeConfig;

const SAVINGS_QUERY: &[QueryParam] = &[QueryParam::required("codigoVariacao")];

const CHECKING_ACCOUNT_QUERY: &[QueryParam] = &[QueryParam::required("numeroRegistro")];

const CHECKING_ACCOUNT_SHAPES: &[ShapeConfig] = &[ShapeConfig::new()
  .main_list("listaContaCorrente")
  .insert(CHECKING_ACCOUNT_FIELDS)
  .rename(CHECKING_ACCOUNT_LABELS)];

pub static ENDPOINTS: &[EndpointConfig] = &[
  NEARBY_BRANCHES,
  EndpointConfig::get(
    Operation::ProgramStatement,
    "/accountability/v3/statements/{branch}-{account}/control-agencies",
    "Could not retrieve the oversight agency statement",
  )
  .query(PERIOD_QUERY)
  .shapes(STATEMENT_SHAPES),
  EXPENSE_DOCUMENT,
  ACCOUNTABILITY_EXPENSE_DOCUMENT,
  EndpointConfig::get(
    Operation::Subtransactions,
    "/accountability/v3/statements/{branch}-{account}/debits/{debit}/control-agencies/subtransactions",
    "Could not list the subtransactions of the debit",
  )
  .shapes(SUBTRANSACTION_SHAPES),
  EndpointConfig::get(
    Operation::InvestmentFundStatement,
    "/accountability/v3/extratos/{branch}-{account}/fundos-investimentos/{fund}/control-agencies",
    "Could not retrieve the investment fund statement",
  )
  .query(MONTH_QUERY)
  .shapes(FUND_SHAPES),
  EndpointConfig::get(
    Operation::SavingsStatement,
    "/accountability/v3/extratos/{branch}-{account}/poupanca/{variation}/orgao-controle",
    "Could not retrieve the savings statement",
  )
  .query(SAVINGS_QUERY)
  .shapes(SAVINGS_SHAPES),
  EndpointConfig::get(
    Operation::CheckingAccounts,
    "/accountability/v3/conta-corrente/orgaos-controle",
    "Could not list the checking accounts under oversight",
  )
  .query(CHECKING_ACCOUNT_QUERY)
  .shapes(CHECKING_ACCOUNT_SHAPES),
];

#[cfg(test)]
mod tests {
  use super::*;
  use bb_models::shape;
  use serde_json::json;

  #[test]
  fn test_checking_accounts_shape() {
    let response = json!({
      "numeroRegistroConsultar": "00000000000191",
      "quantidadeContaCorrente": 2,
      "listaContaCorrente": [
        {"codigoProgramaGoverno": 1, "agencia": 1234, "contaCorrente": 5678},
        {"codigoProgramaGoverno": 2, "agencia": 1234, "contaCorrente": 9012}
      ]
    });

    let table = shape(&response, &CHECKING_ACCOUNT_SHAPES[0]).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1, "Conta Corrente"), Some(&json!(9012)));
    assert_eq!(table.get(0, "Quantidade Conta Corrente"), Some(&json!(2)));
  }
}
