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

//! # Quotient Array
//!
//! **The data model of the Quotient element-wise arithmetic engine.**
//!
//! This crate defines what a call operates on, independent of how the
//! arithmetic is carried out (`quotient_ops`).
//!
//! * **`array`**: `TypedArray`, an owned, homogeneously typed buffer for one of
//!   the twelve element types, and the `ArrayElement` trait that maps a
//!   primitive type to its variant.
//! * **`call`**: `OperationCall`, the six call shapes (array-op-scalar,
//!   scalar-op-array, array-op-array, each in place or into an output array)
//!   with the borrows each shape needs.
//! * **`index`**: `ElementIndex`, a typed position inside an array.
//!
//! ## Design Philosophy
//!
//! 1.  **Exactly one type per array**: the variant is the type tag; there is no
//!     way to hold mixed elements or to reinterpret an array as another width.
//! 2.  **Borrows encode mutation**: an in-place call borrows its acting array
//!     mutably and the others shared; an output call borrows only `out`
//!     mutably. Which array a call may change is visible in its type.

pub mod array;
pub mod call;
pub mod index;
