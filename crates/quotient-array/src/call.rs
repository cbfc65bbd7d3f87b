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

//! Operation-call shapes.
//!
//! A binary element-wise call pairs two operands, at least one of which is an
//! array, and optionally names a separate output array. Each of the six
//! combinations is a variant of `OperationCall` holding exactly the borrows
//! that shape needs: the mutation target is the only `&mut`.

use crate::array::TypedArray;
use quotient_core::num::{limits::TypeCode, scalar::Scalar};

/// Which operands of a call are arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// `array op scalar`
    ArrayScalar,
    /// `scalar op array`
    ScalarArray,
    /// `array op array`
    ArrayArray,
}

impl std::fmt::Display for CallShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallShape::ArrayScalar => write!(f, "array-scalar"),
            CallShape::ScalarArray => write!(f, "scalar-array"),
            CallShape::ArrayArray => write!(f, "array-array"),
        }
    }
}

/// One binary element-wise call with its operands.
///
/// Variants without `out` write their result into the left (or sole) array;
/// variants with `out` leave their inputs untouched.
#[derive(Debug)]
pub enum OperationCall<'a> {
    ArrayScalar {
        array: &'a mut TypedArray,
        scalar: Scalar,
    },
    ArrayScalarOut {
        array: &'a TypedArray,
        scalar: Scalar,
        out: &'a mut TypedArray,
    },
    ScalarArray {
        scalar: Scalar,
        array: &'a mut TypedArray,
    },
    ScalarArrayOut {
        scalar: Scalar,
        array: &'a TypedArray,
        out: &'a mut TypedArray,
    },
    ArrayArray {
        left: &'a mut TypedArray,
        right: &'a TypedArray,
    },
    ArrayArrayOut {
        left: &'a TypedArray,
        right: &'a TypedArray,
        out: &'a mut TypedArray,
    },
}

impl<'a> OperationCall<'a> {
    /// `array op scalar`, in place.
    #[inline]
    pub fn array_scalar(array: &'a mut TypedArray, scalar: impl Into<Scalar>) -> Self {
        Self::ArrayScalar {
            array,
            scalar: scalar.into(),
        }
    }

    /// `array op scalar` into `out`.
    #[inline]
    pub fn array_scalar_out(
        array: &'a TypedArray,
        scalar: impl Into<Scalar>,
        out: &'a mut TypedArray,
    ) -> Self {
        Self::ArrayScalarOut {
            array,
            scalar: scalar.into(),
            out,
        }
    }

    /// `scalar op array`, in place.
    #[inline]
    pub fn scalar_array(scalar: impl Into<Scalar>, array: &'a mut TypedArray) -> Self {
        Self::ScalarArray {
            scalar: scalar.into(),
            array,
        }
    }

    /// `scalar op array` into `out`.
    #[inline]
    pub fn scalar_array_out(
        scalar: impl Into<Scalar>,
        array: &'a TypedArray,
        out: &'a mut TypedArray,
    ) -> Self {
        Self::ScalarArrayOut {
            scalar: scalar.into(),
            array,
            out,
        }
    }

    /// `left op right`, in place in `left`.
    #[inline]
    pub fn array_array(left: &'a mut TypedArray, right: &'a TypedArray) -> Self {
        Self::ArrayArray { left, right }
    }

    /// `left op right` into `out`.
    #[inline]
    pub fn array_array_out(
        left: &'a TypedArray,
        right: &'a TypedArray,
        out: &'a mut TypedArray,
    ) -> Self {
        Self::ArrayArrayOut { left, right, out }
    }

    /// The call's shape, ignoring where results go.
    #[inline]
    pub fn shape(&self) -> CallShape {
        match self {
            Self::ArrayScalar { .. } | Self::ArrayScalarOut { .. } => CallShape::ArrayScalar,
            Self::ScalarArray { .. } | Self::ScalarArrayOut { .. } => CallShape::ScalarArray,
            Self::ArrayArray { .. } | Self::ArrayArrayOut { .. } => CallShape::ArrayArray,
        }
    }

    /// Returns `true` if results go to a separate output array.
    #[inline]
    pub fn has_out(&self) -> bool {
        matches!(
            self,
            Self::ArrayScalarOut { .. } | Self::ScalarArrayOut { .. } | Self::ArrayArrayOut { .. }
        )
    }

    /// Element type of the acting array: the left array, or the sole one.
    #[inline]
    pub fn acting_code(&self) -> TypeCode {
        match self {
            Self::ArrayScalar { array, .. } | Self::ScalarArray { array, .. } => array.code(),
            Self::ArrayScalarOut { array, .. } | Self::ScalarArrayOut { array, .. } => array.code(),
            Self::ArrayArray { left, .. } => left.code(),
            Self::ArrayArrayOut { left, .. } => left.code(),
        }
    }

    /// Element types of every array taking part, acting array first, `out` last.
    pub fn array_codes(&self) -> Vec<TypeCode> {
        match self {
            Self::ArrayScalar { array, .. } | Self::ScalarArray { array, .. } => vec![array.code()],
            Self::ArrayScalarOut { array, out, .. } | Self::ScalarArrayOut { array, out, .. } => {
                vec![array.code(), out.code()]
            }
            Self::ArrayArray { left, right } => vec![left.code(), right.code()],
            Self::ArrayArrayOut { left, right, out } => {
                vec![left.code(), right.code(), out.code()]
            }
        }
    }

    /// The scalar operand, if the call has one.
    #[inline]
    pub fn scalar(&self) -> Option<Scalar> {
        match self {
            Self::ArrayScalar { scalar, .. }
            | Self::ArrayScalarOut { scalar, .. }
            | Self::ScalarArray { scalar, .. }
            | Self::ScalarArrayOut { scalar, .. } => Some(*scalar),
            Self::ArrayArray { .. } | Self::ArrayArrayOut { .. } => None,
        }
    }
}
