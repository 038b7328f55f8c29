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

//! Arguments of the write operations on credit entries

use bb_client::{CreditEntryIdentification, ExpenseCategoryAssignment};
use chrono::NaiveDate;
use clap::Args;

#[derive(Args, Debug)]
pub struct AssignCategoryArgs {
  /// Bank order number of the credit
  #[arg(long)]
  pub bank_order: u64,

  /// Item within the bank order
  #[arg(long)]
  pub item: u64,

  #[arg(long)]
  pub branch: u64,

  #[arg(long)]
  pub account: u64,

  #[arg(long)]
  pub contract_code: u64,

  #[arg(long)]
  pub management_unit_code: String,

  #[arg(long)]
  pub expense_category_code: u64,

  #[arg(long)]
  pub client_listing_code: String,
}

impl From<AssignCategoryArgs> for ExpenseCategoryAssignment {
  fn from(args: AssignCategoryArgs) -> Self {
    ExpenseCategoryAssignment {
      bank_order: args.bank_order,
      item: args.item,
      branch: args.branch,
      account: args.account,
      contract_code: args.contract_code,
      management_unit_code: args.management_unit_code,
      expense_category_code: args.expense_category_code,
      client_listing_code: args.client_listing_code,
    }
  }
}

#[derive(Args, Debug)]
pub struct IdentifyCreditArgs {
  #[arg(long)]
  pub branch: String,

  #[arg(long)]
  pub account: String,

  #[arg(long)]
  pub bank_number: u64,

  #[arg(long)]
  pub bank_order_sequence: u64,

  /// Booking date of the credit (YYYY-MM-DD)
  #[arg(long)]
  pub booking_date: NaiveDate,

  #[arg(long)]
  pub company_number: u64,

  /// Identified amount
  #[arg(long)]
  pub fractional_value: i64,

  #[arg(long)]
  pub identification_type: u32,

  /// CPF or CNPJ the credit is attributed to
  #[arg(long)]
  pub identification_code: String,
}

impl From<IdentifyCreditArgs> for CreditEntryIdentification {
  fn from(args: IdentifyCreditArgs) -> Self {
    CreditEntryIdentification {
      branch: args.branch,
      account: args.account,
      bank_number: args.bank_number,
      bank_order_sequence: args.bank_order_sequence,
      booking_date: args.booking_date,
      company_number: args.company_number,
      fractional_value: args.fractional_value,
      identification_type: args.identification_type,
      identification_code: args.identification_code,
    }
  }
}
