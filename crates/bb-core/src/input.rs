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

//! Normalisation of caller supplied values before they reach a request

use crate::error::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Wire format of every date parameter
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Anything that can be sent as a `YYYY-MM-DD` date
pub trait ApiDate {
  /// Format the value for the wire
  fn to_api_date(&self) -> Result<String>;
}

impl ApiDate for NaiveDate {
  fn to_api_date(&self) -> Result<String> {
    Ok(self.format(API_DATE_FORMAT).to_string())
  }
}

impl ApiDate for NaiveDateTime {
  fn to_api_date(&self) -> Result<String> {
    self.date().to_api_date()
  }
}

impl<Tz: TimeZone> ApiDate for DateTime<Tz> {
  fn to_api_date(&self) -> Result<String> {
    self.date_naive().to_api_date()
  }
}

impl ApiDate for str {
  fn to_api_date(&self) -> Result<String> {
    NaiveDate::parse_from_str(self.trim(), API_DATE_FORMAT)?.to_api_date()
  }
}

impl ApiDate for String {
  fn to_api_date(&self) -> Result<String> {
    self.as_str().to_api_date()
  }
}

impl<T: ApiDate + ?Sized> ApiDate for &T {
  fn to_api_date(&self) -> Result<String> {
    (**self).to_api_date()
  }
}

/// Strip everything but ASCII digits, e.g. for CNPJ and CEP values
pub fn digits_only(value: &str) -> String {
  value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  #[test]
  fn test_digits_only() {
    assert_eq!(digits_only("123.456-78"), "12345678");
    assert_eq!(digits_only("CEP 01310-100"), "01310100");
    assert_eq!(digits_only("12.345.678/0001-95"), "12345678000195");
    assert_eq!(digits_only("abc"), "");
  }

  #[test]
  fn test_dates_format_as_iso_day() {
    let day = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    assert_eq!(day.to_api_date().unwrap(), "2024-01-31");

    let moment = Utc.with_ymd_and_hms(2024, 2, 1, 23, 59, 0).unwrap();
    assert_eq!(moment.to_api_date().unwrap(), "2024-02-01");
    assert_eq!(moment.naive_utc().to_api_date().unwrap(), "2024-02-01");

    assert_eq!("2024-01-01".to_api_date().unwrap(), "2024-01-01");
    assert_eq!(" 2024-03-05 ".to_string().to_api_date().unwrap(), "2024-03-05");
  }

  #[test]
  fn test_invalid_date_string_is_rejected() {
    assert!("01/02/2024".to_api_date().is_err());
    assert!("2024-13-01".to_api_date().is_err());
  }
}
