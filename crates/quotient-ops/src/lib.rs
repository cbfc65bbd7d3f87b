// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Quotient Ops
//!
//! **Overflow-safe element-wise true division over typed arrays.**
//!
//! This crate is the arithmetic half of the engine: it classifies every
//! operand pair for faults, divides with the rule of the element type, and
//! drives both over the active range of a call.
//!
//! * **`dispatch`**: `truediv` over dynamically typed `OperationCall`s, and the
//!   typed entry points (`div_array_scalar`, `div_scalar_array`,
//!   `div_array_array` and their `_out` forms) over plain slices.
//! * **`fault`**: `ClassifyDivision`, the per-pair fault check.
//! * **`kernel`**: `DivisionKernel`, truncating integer and IEEE-754 float
//!   division.
//! * **`policy`**: which faults abort a call; integer faults always do, float
//!   faults unless `matherrors` is set.
//! * **`options`**: `DivideOptions` (`matherrors`, `maxlen`) and keyword
//!   parsing.
//! * **`error`**: `DivideError` and its mapping onto native exception kinds.
//! * **`stats`**: `DivideStats`, the summary of a completed call.
//!
//! ## Example
//!
//! ```rust
//! use quotient_array::{array::TypedArray, call::OperationCall};
//! use quotient_ops::{dispatch::truediv, error::ExceptionKind, options::DivideOptions};
//!
//! let mut a = TypedArray::from(vec![7i8, -7]);
//! truediv(OperationCall::array_scalar(&mut a, 2i8), &DivideOptions::default()).unwrap();
//! assert_eq!(a, TypedArray::from(vec![3i8, -3]));
//!
//! let mut b = TypedArray::from(vec![-128i8]);
//! let e = truediv(OperationCall::array_scalar(&mut b, -1i8), &DivideOptions::default())
//!     .unwrap_err();
//! assert_eq!(e.exception_kind(), ExceptionKind::OverflowError);
//! ```

pub mod dispatch;
pub mod error;
pub mod fault;
pub mod kernel;
pub mod options;
pub mod policy;
pub mod stats;
