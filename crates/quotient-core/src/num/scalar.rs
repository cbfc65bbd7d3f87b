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

//! Dynamically typed scalar operands.
//!
//! A scalar arrives at the call boundary without an element type of its own.
//! It only carries its kind (integer or float) and its value in a type wide
//! enough for every supported width. Converting it into a concrete element
//! type is where a mismatched kind or an out-of-range integer is detected.

use crate::num::limits::{TypeCode, limits};

/// A scalar operand prior to conversion into an element type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    Int(i128),
    Float(f64),
}

impl Scalar {
    /// Human readable kind, used in error messages.
    #[inline]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! impl_scalar_from {
    ($variant:ident, $wide:ty, $($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Scalar {
                #[inline]
                fn from(v: $t) -> Self {
                    Scalar::$variant(v as $wide)
                }
            }
        )+
    };
}

impl_scalar_from!(Int, i128, i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);
impl_scalar_from!(Float, f64, f32, f64);

/// Reasons a `Scalar` cannot become an element of a given type.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarError {
    /// A float scalar was given for an integer array, or vice versa.
    KindMismatch { code: TypeCode, scalar: Scalar },
    /// An integer scalar lies outside the integer type's range.
    OutOfRange { code: TypeCode, value: i128 },
}

impl std::fmt::Display for ScalarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KindMismatch { code, scalar } => write!(
                f,
                "{} scalar {} cannot operate on {} array",
                scalar.kind_name(),
                scalar,
                code
            ),
            Self::OutOfRange { code, value } => {
                let l = limits(*code);
                write!(
                    f,
                    "scalar {} is out of range for {} (expected {}..={})",
                    value, code, l.min, l.max
                )
            }
        }
    }
}

impl std::error::Error for ScalarError {}
