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

//! # Quotient Core
//!
//! Numeric foundations for the Quotient element-wise arithmetic engine. This
//! crate holds everything that is independent of how arrays are stored or how
//! a call is shaped: the per-type constant and arithmetic traits, the type
//! registry, and the range limiter that bounds how many elements a call may
//! touch.
//!
//! ## Modules
//!
//! - `num`: The associated constant trait `Zero`,
//!   by-value checked and truncating arithmetic traits, the type registry
//!   (`TypeCode`, `Limits`), the dynamic `Scalar`, and the `Element`
//!   numeric-kind trait implemented for all twelve supported element types.
//! - `math`: The half-open `ActiveRange` `[0, end)` that honours `maxlen`.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`).
//!
//! ## Purpose
//!
//! The engine dispatches one generic loop over twelve element types. Keeping
//! the per-type facts (limits, signedness, the exact integer division rule)
//! behind traits lets that loop be written once while every width still gets
//! its own monomorphized, overflow-checked code path.

pub mod math;
pub mod num;
pub mod utils;
