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

//! Owned, homogeneously typed arrays.
//!
//! A `TypedArray` holds a `Vec` of exactly one of the twelve supported element
//! types; the enum variant doubles as the array's `TypeCode`. Generic code
//! reaches the underlying slice through `ArrayElement`, which maps each
//! primitive type to its variant, and the `with_element_type!` macro turns a
//! runtime `TypeCode` back into a compile-time type.

use quotient_core::num::{constants::Zero, element::Element, limits::TypeCode, scalar::Scalar};

/// A contiguous buffer of one element type.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedArray {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    I64(Vec<i64>),
    U64(Vec<u64>),
    Isize(Vec<isize>),
    Usize(Vec<usize>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

/// Applies `$body` to the vector inside any `TypedArray` variant.
macro_rules! each_variant {
    ($array:expr, $v:ident => $body:expr) => {
        match $array {
            TypedArray::I8($v) => $body,
            TypedArray::U8($v) => $body,
            TypedArray::I16($v) => $body,
            TypedArray::U16($v) => $body,
            TypedArray::I32($v) => $body,
            TypedArray::U32($v) => $body,
            TypedArray::I64($v) => $body,
            TypedArray::U64($v) => $body,
            TypedArray::Isize($v) => $body,
            TypedArray::Usize($v) => $body,
            TypedArray::F32($v) => $body,
            TypedArray::F64($v) => $body,
        }
    };
}

/// Binds the type alias `$t` to the element type of a runtime `TypeCode` and
/// evaluates `$body` with it.
///
/// ```rust
/// use quotient_array::with_element_type;
/// use quotient_core::num::{element::Element, limits::TypeCode};
///
/// let width = with_element_type!(TypeCode::U16, T => std::mem::size_of::<T>());
/// assert_eq!(width, 2);
/// let code = with_element_type!(TypeCode::F64, T => <T as Element>::CODE);
/// assert_eq!(code, TypeCode::F64);
/// ```
#[macro_export]
macro_rules! with_element_type {
    ($code:expr, $t:ident => $body:expr) => {
        match $code {
            ::quotient_core::num::limits::TypeCode::I8 => {
                type $t = i8;
                $body
            }
            ::quotient_core::num::limits::TypeCode::U8 => {
                type $t = u8;
                $body
            }
            ::quotient_core::num::limits::TypeCode::I16 => {
                type $t = i16;
                $body
            }
            ::quotient_core::num::limits::TypeCode::U16 => {
                type $t = u16;
                $body
            }
            ::quotient_core::num::limits::TypeCode::I32 => {
                type $t = i32;
                $body
            }
            ::quotient_core::num::limits::TypeCode::U32 => {
                type $t = u32;
                $body
            }
            ::quotient_core::num::limits::TypeCode::I64 => {
                type $t = i64;
                $body
            }
            ::quotient_core::num::limits::TypeCode::U64 => {
                type $t = u64;
                $body
            }
            ::quotient_core::num::limits::TypeCode::Isize => {
                type $t = isize;
                $body
            }
            ::quotient_core::num::limits::TypeCode::Usize => {
                type $t = usize;
                $body
            }
            ::quotient_core::num::limits::TypeCode::F32 => {
                type $t = f32;
                $body
            }
            ::quotient_core::num::limits::TypeCode::F64 => {
                type $t = f64;
                $body
            }
        }
    };
}

impl TypedArray {
    /// Creates an array of `len` zeros of the given type.
    pub fn zeros(code: TypeCode, len: usize) -> Self {
        with_element_type!(code, T => <T as ArrayElement>::wrap(vec![<T as Zero>::ZERO; len]))
    }

    /// The element type of this array.
    #[inline]
    pub fn code(&self) -> TypeCode {
        match self {
            TypedArray::I8(_) => TypeCode::I8,
            TypedArray::U8(_) => TypeCode::U8,
            TypedArray::I16(_) => TypeCode::I16,
            TypedArray::U16(_) => TypeCode::U16,
            TypedArray::I32(_) => TypeCode::I32,
            TypedArray::U32(_) => TypeCode::U32,
            TypedArray::I64(_) => TypeCode::I64,
            TypedArray::U64(_) => TypeCode::U64,
            TypedArray::Isize(_) => TypeCode::Isize,
            TypedArray::Usize(_) => TypeCode::Usize,
            TypedArray::F32(_) => TypeCode::F32,
            TypedArray::F64(_) => TypeCode::F64,
        }
    }

    /// Number of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient_array::array::TypedArray;
    /// # use quotient_core::num::limits::TypeCode;
    ///
    /// let array = TypedArray::zeros(TypeCode::I16, 3);
    /// assert_eq!(array.len(), 3);
    /// assert!(!array.is_empty());
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        each_variant!(self, v => v.len())
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the element data in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.len() * self.code().width()
    }

    /// Reads element `index` as a dynamic scalar.
    pub fn get(&self, index: usize) -> Option<Scalar> {
        each_variant!(self, v => v.get(index).map(|&x| x.into()))
    }

    /// Typed view of the elements, `None` if `T` is not this array's type.
    #[inline]
    pub fn as_slice<T: ArrayElement>(&self) -> Option<&[T]> {
        T::slice(self)
    }

    /// Mutable typed view of the elements, `None` if `T` is not this array's type.
    #[inline]
    pub fn as_mut_slice<T: ArrayElement>(&mut self) -> Option<&mut [T]> {
        T::slice_mut(self)
    }
}

impl std::fmt::Display for TypedArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "array('{}', [", self.code().as_char())?;
        each_variant!(self, v => {
            for (i, x) in v.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{x}")?;
            }
        });
        write!(f, "])")
    }
}

/// An element type with a `TypedArray` variant.
pub trait ArrayElement: Element {
    fn slice(array: &TypedArray) -> Option<&[Self]>;
    fn slice_mut(array: &mut TypedArray) -> Option<&mut [Self]>;
    fn wrap(values: Vec<Self>) -> TypedArray;
}

macro_rules! impl_array_element {
    ($($t:ty => $variant:ident),+ $(,)?) => {
        $(
            impl ArrayElement for $t {
                #[inline]
                fn slice(array: &TypedArray) -> Option<&[Self]> {
                    match array {
                        TypedArray::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                #[inline]
                fn slice_mut(array: &mut TypedArray) -> Option<&mut [Self]> {
                    match array {
                        TypedArray::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                #[inline]
                fn wrap(values: Vec<Self>) -> TypedArray {
                    TypedArray::$variant(values)
                }
            }

            impl From<Vec<$t>> for TypedArray {
                #[inline]
                fn from(values: Vec<$t>) -> Self {
                    TypedArray::$variant(values)
                }
            }
        )+
    };
}

impl_array_element!(
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    isize => Isize,
    usize => Usize,
    f32 => F32,
    f64 => F64,
);
