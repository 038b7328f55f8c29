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

//! Shapes and endpoints shared by both perspectives

use super::labels::*;
use super::{EndpointConfig, QueryParam};
use bb_core::Operation;
use bb_models::ShapeConfig;

pub const NEARBY_BRANCH_SHAPES: &[ShapeConfig] = &[ShapeConfig::new()
  .main_list("listaAgencia")
  .insert(NEARBY_BRANCH_FIELDS)
  .rename(NEARBY_BRANCH_LABELS)];

pub const STATEMENT_SHAPES: &[ShapeConfig] = &[ShapeConfig::new()
  .main_list("transactions")
  .insert(PROGRAM_FIELDS)
  .explode(&["expensesDocuments"])
  .rename(STATEMENT_LABELS)];

/// Issuer, recipient and document tables, in that order
pub const EXPENSE_DOCUMENT_SHAPES: &[ShapeConfig] = &[
  ShapeConfig::new().root("issuer").rename(ISSUER_LABELS),
  ShapeConfig::new().root("recipient").rename(RECIPIENT_LABELS),
  ShapeConfig::new()
    .root("expenseDocument")
    .main_list("items")
    .insert(DOCUMENT_FIELDS)
    .rename(DOCUMENT_LABELS),
];

pub const SUBTRANSACTION_SHAPES: &[ShapeConfig] = &[ShapeConfig::new()
  .main_list("subtransactions")
  .insert(PROGRAM_FIELDS)
  .explode(SUBTRANSACTION_EXPLODED)
  .rename(SUBTRANSACTION_LABELS)];

pub const FUND_SHAPES: &[ShapeConfig] = &[ShapeConfig::new()
  .root("extrato")
  .alias(FUND_ALIASES)
  .main_list("listaLancamentosExtrato")
  .insert(FUND_FIELDS)
  .rename(FUND_LABELS)
  .insert_from_parent(FUND_PROGRAM_LABELS)];

pub const SAVINGS_SHAPES: &[ShapeConfig] = &[ShapeConfig::new()
  .main_list("listaLancamentos")
  .insert(SAVINGS_FIELDS)
  .rename(SAVINGS_LABELS)];

pub const PERIOD_QUERY: &[QueryParam] =
  &[QueryParam::required("startDate"), QueryParam::required("endDate")];

pub const MONTH_QUERY: &[QueryParam] = &[QueryParam::required("mes"), QueryParam::required("ano")];

const BOOKING_DATE_QUERY: &[QueryParam] = &[QueryParam::required("bookingDate")];

const NEARBY_BRANCH_QUERY: &[QueryParam] =
  &[QueryParam::required("cnpj"), QueryParam::required("cep")];

pub const NEARBY_BRANCHES: EndpointConfig = EndpointConfig::get(
  Operation::NearbyBranches,
  "/accountability/v3/agencias-proximas",
  "Could not list the branches near the given address",
)
.query(NEARBY_BRANCH_QUERY)
.shapes(NEARBY_BRANCH_SHAPES);

pub const EXPENSE_DOCUMENT: EndpointConfig = EndpointConfig::get(
  Operation::ExpenseDocument,
  "/accountability/v3/expenses/{branch}-{account}/transactions/{transaction}/documents/{document}",
  "Could not retrieve the expense document",
)
.query(BOOKING_DATE_QUERY)
.shapes(EXPENSE_DOCUMENT_SHAPES);

pub const ACCOUNTABILITY_EXPENSE_DOCUMENT: EndpointConfig = EndpointConfig::get(
  Operation::AccountabilityExpenseDocument,
  "/accountability/v3/expenses/{branch}-{account}/transactions/{transaction}/subTransactions/{subtransaction}/documents/{document}",
  "Could not retrieve the subtransaction expense document",
)
.query(BOOKING_DATE_QUERY)
.shapes(EXPENSE_DOCUMENT_SHAPES);
