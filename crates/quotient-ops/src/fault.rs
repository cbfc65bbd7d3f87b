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

//! Per-element fault classification.
//!
//! Before an element is written, its operand pair is classified. Integer
//! pairs are checked for a zero divisor first and for the signed `MIN / -1`
//! overflow second; floating pairs are checked for NaN or infinite operands.
//! A finite floating divisor of `0.0` is not a fault.

use crate::{
    error::FaultKind,
    policy::{FaultPolicy, FloatFaultPolicy, IntegerFaultPolicy},
};
use num_traits::{Float, PrimInt};
use quotient_core::num::ops::checked_arithmetic::CheckedDivVal;

/// Outcome of classifying one operand pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// No fault; divide normally.
    Clear,
    /// A suppressed non-finite operand; divide with IEEE-754 semantics.
    Propagate,
    /// Abort the call without writing this element.
    Fatal(FaultKind),
}

/// Classifies `self / divisor` under a fault policy.
///
/// # Examples
///
/// ```rust
/// # use quotient_ops::fault::{ClassifyDivision, Verdict};
/// # use quotient_ops::error::FaultKind;
/// # use quotient_ops::policy::FaultPolicy;
///
/// let policy = FaultPolicy::default();
/// assert_eq!(7i8.classify_division(0, &policy), Verdict::Fatal(FaultKind::DivideByZero));
/// assert_eq!(i8::MIN.classify_division(-1, &policy), Verdict::Fatal(FaultKind::SignedOverflow));
/// assert_eq!(1.0f64.classify_division(0.0, &policy), Verdict::Clear);
/// ```
pub trait ClassifyDivision: Copy {
    /// Returns the verdict for dividing `self` by `divisor`.
    fn classify_division(self, divisor: Self, policy: &FaultPolicy) -> Verdict;
}

#[inline(always)]
fn classify_integer<T>(dividend: T, divisor: T, policy: IntegerFaultPolicy) -> Verdict
where
    T: PrimInt + CheckedDivVal,
{
    let kind = if divisor == T::zero() {
        FaultKind::DivideByZero
    } else if dividend.checked_div_val(divisor).is_none() {
        FaultKind::SignedOverflow
    } else {
        return Verdict::Clear;
    };

    if policy.is_fatal(kind) {
        Verdict::Fatal(kind)
    } else {
        Verdict::Clear
    }
}

#[inline(always)]
fn classify_float<T>(dividend: T, divisor: T, policy: FloatFaultPolicy) -> Verdict
where
    T: Float,
{
    if dividend.is_finite() && divisor.is_finite() {
        return Verdict::Clear;
    }

    if policy.is_fatal(FaultKind::NonFinite) {
        Verdict::Fatal(FaultKind::NonFinite)
    } else {
        Verdict::Propagate
    }
}

macro_rules! classify_impl_integer {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ClassifyDivision for $t {
                #[inline(always)]
                fn classify_division(self, divisor: $t, policy: &FaultPolicy) -> Verdict {
                    classify_integer(self, divisor, policy.integer)
                }
            }
        )+
    };
}

macro_rules! classify_impl_float {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ClassifyDivision for $t {
                #[inline(always)]
                fn classify_division(self, divisor: $t, policy: &FaultPolicy) -> Verdict {
                    classify_float(self, divisor, policy.float)
                }
            }
        )+
    };
}

classify_impl_integer!(u8, u16, u32, u64, usize);
classify_impl_integer!(i8, i16, i32, i64, isize);
classify_impl_float!(f32, f64);
