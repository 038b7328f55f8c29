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

//! Endpoints offered to transfer agencies ("órgãos de repasse")

use super::common::*;
use super::labels::*;
use super::{EndpointConfig, QueryParam};
use bb_core::Operation;
use bb_models::ShapeConfig;

const SUBTRANSACTION_QUERY: &[QueryParam] = &[QueryParam::optional("idSubtransaction")];

const UPDATED_ENTRY_QUERY: &[QueryParam] = &[
  QueryParam::required("dataInicio"),
  QueryParam::required("dataFim"),
  QueryParam::required("pagina"),
];

const DEBIT_IDENTIFICATION_QUERY: &[QueryParam] = &[QueryParam::required("numeroPagina")];

const EXPENSE_CATEGORY_BODY: &[&str] = &[
  "agencia",
  "contaCorrente",
  "codigoContrato",
  "codigoUnidadeGestora",
  "codigoCategoriaDespesa",
  "codigoListagemCliente",
];

const CREDIT_IDENTIFICATION_BODY: &[&str] = &[
  "numeroBancario",
  "numeroSequencialOrdemBancaria",
  "dataLancamento",
  "numeroCompanhia",
  "valorFracionado",
  "tipoIdentificacao",
  "codigoIdentificacao",
];

const UPDATED_ENTRY_SHAPES: &[ShapeConfig] = &[ShapeConfig::new()
  .main_list("listaLancamentos")
  .insert(PAGE_FIELDS)
  .rename(UPDATED_ENTRY_LABELS)];

const UPDATED_SUB_ENTRY_SHAPES: &[ShapeConfig] = &[ShapeConfig::new()
  .main_list("listaSublancamentos")
  .insert(PAGE_FIELDS)
  .rename(UPDATED_SUB_ENTRY_LABELS)];

const CATEGORY_SHAPES: &[ShapeConfig] =
  &[ShapeConfig::new().main_list("categorias").rename(CATEGORY_LABELS)];

const INVESTMENT_BALANCE_SHAPES: &[ShapeConfig] = &[ShapeConfig::new()
  .main_list("operacoes")
  .insert(BALANCE_FIELDS)
  .rename(INVESTMENT_BALANCE_LABELS)];

const CHECKING_BALANCE_SHAPES: &[ShapeConfig] =
  &[ShapeConfig::new().rename(CHECKING_BALANCE_LABELS)];

const EXPENSE_CATEGORY_SHAPES: &[ShapeConfig] =
  &[ShapeConfig::new().rename(EXPENSE_CATEGORY_RECEIPT_LABELS)];

const CREDIT_IDENTIFICATION_SHAPES: &[ShapeConfig] =
  &[ShapeConfig::new().rename(CREDIT_IDENTIFICATION_RECEIPT_LABELS)];

const CREDIT_IDENTIFICATION_DELETION_SHAPES: &[ShapeConfig] =
  &[ShapeConfig::new().rename(CREDIT_IDENTIFICATION_DELETION_LABELS)];

const DEBIT_IDENTIFICATION_SHAPES: &[ShapeConfig] = &[ShapeConfig::new()
  .main_list("listaLancamento")
  .insert(DEBIT_IDENTIFICATION_FIELDS)
  .rename(DEBIT_IDENTIFICATION_LABELS)];

pub static ENDPOINTS: &[EndpointConfig] = &[
  NEARBY_BRANCHES,
  EndpointConfig::get(
    Operation::ProgramStatement,
    "/accountability/v3/statements/{branch}-{account}",
    "Could not retrieve the transfer agency statement",
  )
  .query(PERIOD_QUERY)
  .shapes(STATEMENT_SHAPES),
  EXPENSE_DOCUMENT,
  ACCOUNTABILITY_EXPENSE_DOCUMENT,
  EndpointConfig::get(
    Operation::Subtransactions,
    "/accountability/v3/statements/{branch}-{account}/debits/{debit}/subtransactions",
    "Could not list the subtransactions of the debit",
  )
  .query(SUBTRANSACTION_QUERY)
  .shapes(SUBTRANSACTION_SHAPES),
  EndpointConfig::get(
    Operation::InvestmentFundStatement,
    "/accountability/v3/extratos/{branch}-{account}/fundos-investimentos/{fund}",
    "Could not retrieve the investment fund statement",
  )
  .query(MONTH_QUERY)
  .shapes(FUND_SHAPES),
  EndpointConfig::get(
    Operation::SavingsStatement,
    "/accountability/v3/extratos/{branch}-{account}/poupanca/{variation}",
    "Could not retrieve the savings statement",
  )
  .query(MONTH_QUERY)
  .shapes(SAVINGS_SHAPES),
  EndpointConfig::get(
    Operation::UpdatedEntries,
    "/accountability/v3/programas-governo/{program}/orgaos-repasse/lancamentos-atualizados",
    "Could not list the updated entries of the program",
  )
  .query(UPDATED_ENTRY_QUERY)
  .shapes(UPDATED_ENTRY_SHAPES),
  EndpointConfig::get(
    Operation::UpdatedSubEntries,
    "/accountability/v3/programas-governo/{program}/orgaos-repasse/sublancamentos-atualizados",
    "Could not list the updated sub-entries of the program",
  )
  .query(UPDATED_ENTRY_QUERY)
  .shapes(UPDATED_SUB_ENTRY_SHAPES),
  EndpointConfig::get(
    Operation::ProgramCategories,
    "/accountability/v3/programas-governo/{program}/categorias",
    "Could not list the expense categories of the program",
  )
  .shapes(CATEGORY_SHAPES),
  EndpointConfig::get(
    Operation::FinancialInvestmentBalance,
    "/accountability/v3/saldos/{branch}-{account}/aplicacoes-financeiras",
    "Could not retrieve the financial investment balance",
  )
  .shapes(INVESTMENT_BALANCE_SHAPES),
  EndpointConfig::get(
    Operation::CheckingBalance,
    "/accountability/v3/saldos/{branch}-{account}/conta-corrente",
    "Could not retrieve the checking account balance",
  )
  .shapes(CHECKING_BALANCE_SHAPES),
  EndpointConfig::post(
    Operation::AssignCreditExpenseCategory,
    "/accountability/v3/orgaos-repasse/lancamentos-credito/{bank_order}-{item}/categorias-despesa",
    "Could not assign the expense category to the credit entry",
  )
  .body(EXPENSE_CATEGORY_BODY)
  .shapes(EXPENSE_CATEGORY_SHAPES),
  EndpointConfig::post(
    Operation::IdentifyCreditEntry,
    "/accountability/v3/orgaos-repasse/{branch}-{account}/lancamentos-credito",
    "Could not identify the credit entry",
  )
  .body(CREDIT_IDENTIFICATION_BODY)
  .shapes(CREDIT_IDENTIFICATION_SHAPES),
  EndpointConfig::delete(
    Operation::DeleteCreditEntryIdentification,
    "/accountability/v3/orgaos-repasse/{branch}-{account}/lancamentos-credito/{entry}-{identification}",
    "Could not delete the credit entry identification",
  )
  .shapes(CREDIT_IDENTIFICATION_DELETION_SHAPES),
  EndpointConfig::get(
    Operation::DebitEntryIdentifications,
    "/accountability/v3/orgaos-repasse/{branch}-{account}/lancamentos-debito",
    "Could not list the debit entry identifications",
  )
  .query(DEBIT_IDENTIFICATION_QUERY)
  .shapes(DEBIT_IDENTIFICATION_SHAPES),
];

#[cfg(test)]
mod tests {
  use super::*;
  use bb_models::shape;
  use serde_json::json;

  fn shapes_of(operation: Operation) -> &'static [ShapeConfig] {
    ENDPOINTS.iter().find(|endpoint| endpoint.operation == operation).unwrap().shapes
  }

  #[test]
  fn test_debit_identification_shape() {
    let response = json!({
      "numeroPaginaTotal": 3,
      "quantidadeIdentificacaoLancamento": 1,
      "listaLancamento": [{
        "numeroSequencialLancamentoContaCorrente": 15,
        "tipoIdentificacao": 1,
        "valorFracionado": 12.5
      }]
    });

    let table = shape(&response, &shapes_of(Operation::DebitEntryIdentifications)[0]).unwrap();

    assert_eq!(
      table.columns(),
      [
        "Número Sequencial Lançamento Conta Corrente",
        "Tipo Identificação",
        "Valor Fracionado",
        "Número Página Total",
        "Quantidade Identificação Lançamento"
      ]
    );
  }

  #[test]
  fn test_checking_balance_is_a_single_row() {
    let response = json!({"dataSaldo": "31.01.2024", "valorDisponibilidade": 1500.75});

    let table = shape(&response, &shapes_of(Operation::CheckingBalance)[0]).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0, "Valor Disponibilidade"), Some(&json!(1500.75)));
  }

  #[test]
  fn test_updated_entries_without_entries() {
    let response = json!({"totalPaginas": 0, "listaLancamentos": []});

    let table = shape(&response, &shapes_of(Operation::UpdatedEntries)[0]).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.columns(), ["Total Páginas"]);
  }

  #[test]
  fn test_write_endpoints_accept_created() {
    for operation in [
      Operation::AssignCreditExpenseCategory,
      Operation::IdentifyCreditEntry,
      Operation::DeleteCreditEntryIdentification,
    ] {
      let endpoint = ENDPOINTS.iter().find(|endpoint| endpoint.operation == operation).unwrap();
      assert_eq!(endpoint.accepted, &[200u16, 201]);
    }
  }
}
