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

//! The per-type division kernel.
//!
//! Integers divide with truncation toward zero, floats with native IEEE-754
//! division. The kernel assumes its operand pair has been classified first and
//! does no fault checking of its own.

use quotient_core::num::ops::truncating_arithmetic::TruncatingDivVal;

/// True division of one operand pair, producing a value of the same type.
pub trait DivisionKernel: Copy {
    /// Divides `self` by `divisor`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient_ops::kernel::DivisionKernel;
    ///
    /// assert_eq!((-7i32).divide(2), -3);
    /// assert_eq!(7.0f64.divide(2.0), 3.5);
    /// ```
    fn divide(self, divisor: Self) -> Self;
}

macro_rules! kernel_impl_integer {
    ($($t:ty),+ $(,)?) => {
        $(
            impl DivisionKernel for $t {
                #[inline(always)]
                fn divide(self, divisor: $t) -> $t {
                    self.truncating_div_val(divisor)
                }
            }
        )+
    };
}

macro_rules! kernel_impl_float {
    ($($t:ty),+ $(,)?) => {
        $(
            impl DivisionKernel for $t {
                #[inline(always)]
                fn divide(self, divisor: $t) -> $t {
                    self / divisor
                }
            }
        )+
    };
}

kernel_impl_integer!(u8, u16, u32, u64, usize);
kernel_impl_integer!(i8, i16, i32, i64, isize);
kernel_impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_truncate_toward_zero() {
        assert_eq!(7i32.divide(2), 3);
        assert_eq!((-7i32).divide(2), -3);
        assert_eq!(7i32.divide(-2), -3);
        assert_eq!((-7i32).divide(-2), 3);
        assert_eq!(i64::MIN.divide(2), i64::MIN / 2);
        assert_eq!(255u8.divide(2), 127);
        assert_eq!(usize::MAX.divide(usize::MAX), 1);
    }

    #[test]
    fn test_floats_follow_ieee() {
        assert_eq!(7.0f64.divide(2.0), 3.5);
        assert_eq!(1.0f32.divide(0.0), f32::INFINITY);
        assert_eq!((-1.0f64).divide(0.0), f64::NEG_INFINITY);
        assert!(0.0f64.divide(0.0).is_nan());
        assert!(f32::NAN.divide(2.0).is_nan());
        assert_eq!(f64::INFINITY.divide(2.0), f64::INFINITY);
    }
}
