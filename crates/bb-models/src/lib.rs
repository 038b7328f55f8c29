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

//! # bb-models
//!
//! Tabular results for the Accountability v3 API.
//!
//! Every endpoint answers with JSON whose interesting part is a list of
//! records plus a handful of header fields. [`shape`] flattens such a response
//! into a [`Table`] following a per-endpoint [`ShapeConfig`]: the list becomes
//! the rows, header fields are broadcast onto every row, list-valued columns
//! are exploded and columns get their Portuguese display names.
//!
//! ## Usage
//!
//! ```
//! use bb_models::{shape, ShapeConfig};
//! use serde_json::json;
//!
//! let config = ShapeConfig::new().main_list("items").insert(&["total"]);
//! let table = shape(&json!({"items": [{"a": 1}, {"a": 2}], "total": 5}), &config).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.columns(), ["a", "total"]);
//! ```

#![warn(clippy::all)]

pub mod shape;
pub mod table;

pub use shape::{shape, ShapeConfig};
pub use table::Table;
