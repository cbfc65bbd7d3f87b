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

//! Checked integer division by value.
//!
//! `CheckedDivVal` mirrors the inherent `checked_div` of the primitive
//! integers behind a trait so generic code can ask "is this quotient
//! representable?" without naming the concrete width. It returns `None` in
//! exactly two situations: a zero divisor, and the signed `MIN / -1` pair whose
//! true quotient is one larger than `MAX`.

use core::ops::Div;

/// Checked division by value (no references).
///
/// # Examples
///
/// ```rust
/// # use quotient_core::num::ops::checked_arithmetic::CheckedDivVal;
///
/// assert_eq!(7i8.checked_div_val(-2), Some(-3));
/// assert_eq!(7u8.checked_div_val(0), None);
/// assert_eq!(i8::MIN.checked_div_val(-1), None); // 128 does not fit in i8
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` on a zero divisor
    /// or when the quotient overflows the type.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_div_impl_val {
    ($($t:ty),+ $(,)?) => {
        $(
            impl CheckedDivVal for $t {
                #[inline(always)]
                fn checked_div_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_div(self, v)
                }
            }
        )+
    };
}

checked_div_impl_val!(u8, u16, u32, u64, usize);
checked_div_impl_val!(i8, i16, i32, i64, isize);
