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

//! The numeric-kind trait implemented by every array element type.
//!
//! `Element` is the single bound the dispatcher is written against. It exposes
//! the registry facts of a primitive type as associated items (`CODE`, `MIN`,
//! `MAX`) so that generic code can branch on kind and range at compile time,
//! and it owns the conversion from a dynamic `Scalar` into the concrete type.

use crate::num::{
    constants::Zero,
    limits::{Limits, TypeCode, limits},
    scalar::{Scalar, ScalarError},
};
use num_traits::NumCast;

/// A primitive type that can be stored in a typed array.
///
/// # Examples
///
/// ```rust
/// # use quotient_core::num::element::Element;
/// # use quotient_core::num::limits::TypeCode;
/// # use quotient_core::num::scalar::{Scalar, ScalarError};
///
/// assert_eq!(<i8 as Element>::CODE, TypeCode::I8);
/// assert_eq!(i8::from_scalar(Scalar::Int(-7)), Ok(-7i8));
/// assert!(matches!(
///     i8::from_scalar(Scalar::Int(128)),
///     Err(ScalarError::OutOfRange { .. })
/// ));
/// assert!(matches!(
///     f32::from_scalar(Scalar::Int(1)),
///     Err(ScalarError::KindMismatch { .. })
/// ));
/// ```
pub trait Element:
    Copy
    + PartialEq
    + PartialOrd
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + NumCast
    + Into<Scalar>
    + Send
    + Sync
    + 'static
{
    /// Registry tag of the type.
    const CODE: TypeCode;
    /// Smallest value; `-MAX` for floats.
    const MIN: Self;
    /// Largest finite value.
    const MAX: Self;

    #[inline]
    fn is_signed() -> bool {
        Self::CODE.is_signed()
    }

    #[inline]
    fn is_float() -> bool {
        Self::CODE.is_float()
    }

    #[inline]
    fn limits() -> Limits {
        limits(Self::CODE)
    }

    /// Converts a dynamic scalar into this type.
    ///
    /// Fails on a kind mismatch (integer scalar for a float type or the other
    /// way around) and on integer scalars outside `[MIN, MAX]`.
    fn from_scalar(scalar: Scalar) -> Result<Self, ScalarError>;
}

macro_rules! impl_element_int {
    ($($t:ty => $code:expr),+ $(,)?) => {
        $(
            impl Element for $t {
                const CODE: TypeCode = $code;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn from_scalar(scalar: Scalar) -> Result<Self, ScalarError> {
                    match scalar {
                        Scalar::Int(value) if limits($code).contains_int(value) => {
                            Ok(value as $t)
                        }
                        Scalar::Int(value) => Err(ScalarError::OutOfRange { code: $code, value }),
                        Scalar::Float(_) => Err(ScalarError::KindMismatch { code: $code, scalar }),
                    }
                }
            }
        )+
    };
}

macro_rules! impl_element_float {
    ($($t:ty => $code:expr),+ $(,)?) => {
        $(
            impl Element for $t {
                const CODE: TypeCode = $code;
                const MIN: Self = -<$t>::MAX;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn from_scalar(scalar: Scalar) -> Result<Self, ScalarError> {
                    match scalar {
                        Scalar::Float(value) => Ok(value as $t),
                        Scalar::Int(_) => Err(ScalarError::KindMismatch { code: $code, scalar }),
                    }
                }
            }
        )+
    };
}

impl_element_int!(
    i8 => TypeCode::I8,
    u8 => TypeCode::U8,
    i16 => TypeCode::I16,
    u16 => TypeCode::U16,
    i32 => TypeCode::I32,
    u32 => TypeCode::U32,
    i64 => TypeCode::I64,
    u64 => TypeCode::U64,
    isize => TypeCode::Isize,
    usize => TypeCode::Usize,
);

impl_element_float!(
    f32 => TypeCode::F32,
    f64 => TypeCode::F64,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::limits::{ElementKind, LimitValue};
    use num_traits::ToPrimitive;

    fn check_registry_agrees<T: Element>() {
        let l = T::limits();
        assert_eq!(l.code, T::CODE);
        assert_eq!(l.width, std::mem::size_of::<T>());
        assert_eq!(T::is_float(), l.kind == ElementKind::Float);
        match (l.min, l.max) {
            (LimitValue::Int(min), LimitValue::Int(max)) => {
                assert_eq!(T::MIN.to_i128(), Some(min));
                assert_eq!(T::MAX.to_i128(), Some(max));
            }
            (LimitValue::Float(min), LimitValue::Float(max)) => {
                assert_eq!(T::MIN.to_f64(), Some(min));
                assert_eq!(T::MAX.to_f64(), Some(max));
            }
            _ => panic!("mixed limit kinds for {:?}", T::CODE),
        }
    }

    #[test]
    fn test_registry_agrees_with_primitives() {
        check_registry_agrees::<i8>();
        check_registry_agrees::<u8>();
        check_registry_agrees::<i16>();
        check_registry_agrees::<u16>();
        check_registry_agrees::<i32>();
        check_registry_agrees::<u32>();
        check_registry_agrees::<i64>();
        check_registry_agrees::<u64>();
        check_registry_agrees::<isize>();
        check_registry_agrees::<usize>();
        check_registry_agrees::<f32>();
        check_registry_agrees::<f64>();
    }

    #[test]
    fn test_signedness() {
        assert!(i32::is_signed());
        assert!(!u32::is_signed());
        assert!(f64::is_signed());
        assert!(!usize::is_float());
    }

    #[test]
    fn test_integer_from_scalar_bounds() {
        assert_eq!(u8::from_scalar(Scalar::Int(255)), Ok(255u8));
        assert_eq!(
            u8::from_scalar(Scalar::Int(-1)),
            Err(ScalarError::OutOfRange {
                code: TypeCode::U8,
                value: -1
            })
        );
        assert_eq!(i16::from_scalar(Scalar::Int(-32768)), Ok(i16::MIN));
        assert_eq!(
            u64::from_scalar(Scalar::Int(u64::MAX as i128)),
            Ok(u64::MAX)
        );
        assert!(u64::from_scalar(Scalar::Int(u64::MAX as i128 + 1)).is_err());
    }

    fn check_from_scalar_follows_limits<T: Element>() {
        let l = T::limits();
        if let (LimitValue::Int(min), LimitValue::Int(max)) = (l.min, l.max) {
            for value in [min - 1, min, 0, max, max + 1] {
                assert_eq!(
                    T::from_scalar(Scalar::Int(value)).is_ok(),
                    l.contains_int(value),
                    "{} with {value}",
                    T::CODE
                );
            }
        }
    }

    #[test]
    fn test_from_scalar_follows_registry_limits() {
        check_from_scalar_follows_limits::<i8>();
        check_from_scalar_follows_limits::<u8>();
        check_from_scalar_follows_limits::<i16>();
        check_from_scalar_follows_limits::<u16>();
        check_from_scalar_follows_limits::<i32>();
        check_from_scalar_follows_limits::<u32>();
        check_from_scalar_follows_limits::<i64>();
        check_from_scalar_follows_limits::<u64>();
        check_from_scalar_follows_limits::<isize>();
        check_from_scalar_follows_limits::<usize>();
    }

    #[test]
    fn test_kind_mismatch() {
        assert_eq!(
            i32::from_scalar(Scalar::Float(2.0)),
            Err(ScalarError::KindMismatch {
                code: TypeCode::I32,
                scalar: Scalar::Float(2.0)
            })
        );
        assert_eq!(
            f64::from_scalar(Scalar::Int(2)),
            Err(ScalarError::KindMismatch {
                code: TypeCode::F64,
                scalar: Scalar::Int(2)
            })
        );
    }

    #[test]
    fn test_float_from_scalar_keeps_non_finite() {
        assert!(f32::from_scalar(Scalar::Float(f64::NAN)).unwrap().is_nan());
        assert_eq!(
            f64::from_scalar(Scalar::Float(f64::NEG_INFINITY)),
            Ok(f64::NEG_INFINITY)
        );
        assert_eq!(f32::from_scalar(Scalar::Float(0.5)), Ok(0.5f32));
    }
}
