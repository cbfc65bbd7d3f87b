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

//! Truncating integer division.
//!
//! True division on an integer array must still produce an integer of the
//! same width, so the quotient is rounded toward zero. For signed types the
//! quotient is computed on the unsigned magnitudes and the sign is applied
//! afterwards; the magnitude of `MIN` is representable in the unsigned twin,
//! so no intermediate step can overflow.
//!
//! Truncation differs from floor division whenever the operands have opposite
//! signs and the remainder is non-zero: `7 / -2` truncates to `-3`, while
//! floor division gives `-4`.

use core::ops::Div;

/// Integer division rounding toward zero, by value.
///
/// # Preconditions
///
/// The divisor is non-zero and, for signed types, the pair is not
/// `(MIN, -1)`. Callers establish this with a fault check first; the
/// implementation only `debug_assert!`s it.
///
/// # Examples
///
/// ```rust
/// # use quotient_core::num::ops::truncating_arithmetic::TruncatingDivVal;
///
/// assert_eq!(7i8.truncating_div_val(-2), -3);
/// assert_eq!((-7i8).truncating_div_val(2), -3);
/// assert_eq!((-7i8).truncating_div_val(-2), 3);
/// assert_eq!(i8::MIN.truncating_div_val(1), i8::MIN);
/// assert_eq!(200u8.truncating_div_val(3), 66);
/// ```
pub trait TruncatingDivVal: Sized + Div<Self, Output = Self> {
    /// Divides `self` by `v`, rounding the quotient toward zero.
    fn truncating_div_val(self, v: Self) -> Self;
}

macro_rules! truncating_div_impl_signed {
    ($($t:ty),+ $(,)?) => {
        $(
            impl TruncatingDivVal for $t {
                #[inline(always)]
                fn truncating_div_val(self, v: $t) -> $t {
                    debug_assert!(v != 0, "truncating division by zero");
                    debug_assert!(
                        !(self == <$t>::MIN && v == -1),
                        "truncating division overflows for MIN / -1"
                    );
                    let magnitude = self.unsigned_abs() / v.unsigned_abs();
                    // `MIN / 1` yields a magnitude of `MAX + 1`, which casts back to `MIN`
                    // and is left unchanged by `wrapping_neg`.
                    if (self < 0) != (v < 0) {
                        (magnitude as $t).wrapping_neg()
                    } else {
                        magnitude as $t
                    }
                }
            }
        )+
    };
}

macro_rules! truncating_div_impl_unsigned {
    ($($t:ty),+ $(,)?) => {
        $(
            impl TruncatingDivVal for $t {
                #[inline(always)]
                fn truncating_div_val(self, v: $t) -> $t {
                    debug_assert!(v != 0, "truncating division by zero");
                    self / v
                }
            }
        )+
    };
}

truncating_div_impl_signed!(i8, i16, i32, i64, isize);
truncating_div_impl_unsigned!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{AsPrimitive, PrimInt};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    /// Reference quotient computed in `i128` and rounded toward zero explicitly.
    fn reference(a: i128, b: i128) -> i128 {
        let q = a.abs() / b.abs();
        if (a < 0) != (b < 0) {
            -q
        } else {
            q
        }
    }

    fn check_random<T>(seed: u64, samples: usize)
    where
        T: PrimInt + TruncatingDivVal + AsPrimitive<i128> + std::fmt::Debug,
        i128: AsPrimitive<T>,
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let min: i128 = T::min_value().as_();
        let max: i128 = T::max_value().as_();
        let mut checked = 0;
        while checked < samples {
            let a = rng.random_range(min..=max);
            let b = rng.random_range(min..=max);
            if b == 0 || (a == min && b == -1) {
                continue;
            }
            let got: i128 = a.as_().truncating_div_val(b.as_()).as_();
            assert_eq!(got, reference(a, b), "{a} / {b}");
            checked += 1;
        }
    }

    #[test]
    fn test_truncates_toward_zero_not_floor() {
        assert_eq!(7i8.truncating_div_val(-2), -3);
        assert_eq!((-7i16).truncating_div_val(2), -3);
        assert_eq!((-7i32).truncating_div_val(-2), 3);
        assert_eq!(7i64.truncating_div_val(2), 3);
        assert_eq!((-1isize).truncating_div_val(2), 0);
    }

    #[test]
    fn test_extreme_signed_operands() {
        assert_eq!(i8::MIN.truncating_div_val(1), i8::MIN);
        assert_eq!(i8::MIN.truncating_div_val(2), -64);
        assert_eq!(i8::MIN.truncating_div_val(-2), 64);
        assert_eq!(i8::MIN.truncating_div_val(i8::MIN), 1);
        assert_eq!(i8::MAX.truncating_div_val(-1), -127);
        assert_eq!(i8::MAX.truncating_div_val(i8::MIN), 0);
        assert_eq!(i64::MIN.truncating_div_val(i64::MAX), -1);
    }

    #[test]
    fn test_unsigned_matches_native_division() {
        assert_eq!(u8::MAX.truncating_div_val(1), u8::MAX);
        assert_eq!(200u8.truncating_div_val(7), 28);
        assert_eq!(u64::MAX.truncating_div_val(u64::MAX), 1);
        assert_eq!(0usize.truncating_div_val(5), 0);
    }

    #[test]
    fn test_random_against_arbitrary_precision() {
        check_random::<i8>(1, 4_000);
        check_random::<i16>(2, 4_000);
        check_random::<i32>(3, 4_000);
        check_random::<i64>(4, 4_000);
        check_random::<isize>(5, 4_000);
        check_random::<u8>(6, 4_000);
        check_random::<u16>(7, 4_000);
        check_random::<u32>(8, 4_000);
        check_random::<u64>(9, 4_000);
        check_random::<usize>(10, 4_000);
    }

    #[test]
    fn test_exhaustive_i8() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                if b == 0 || (a == i8::MIN && b == -1) {
                    continue;
                }
                assert_eq!(
                    a.truncating_div_val(b) as i128,
                    reference(a as i128, b as i128),
                    "{a} / {b}"
                );
            }
        }
    }
}
