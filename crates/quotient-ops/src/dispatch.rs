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

//! The operation dispatcher.
//!
//! Two layers share one scan loop. The typed layer (`div_array_scalar` and
//! friends) takes plain slices of a concrete element type and is what Rust
//! callers use directly. The dynamic layer, `truediv`, accepts an
//! `OperationCall` over `TypedArray`s, checks that every array has the same
//! element type, converts the scalar operand, and hands off to the typed layer
//! through `with_element_type!`.
//!
//! All whole-call validation happens before the first write: a rejected call
//! leaves every array untouched. A per-element fault stops the scan at the
//! faulting index; indices before it keep their new values and the faulting
//! index and everything after it keep their old ones.

use crate::{
    error::{DivideError, FaultRecord, ValidationError},
    fault::{ClassifyDivision, Verdict},
    kernel::DivisionKernel,
    options::DivideOptions,
    policy::FaultPolicy,
    stats::{DivideStats, DivideStatsBuilder},
};
use quotient_array::{
    array::{ArrayElement, TypedArray},
    call::{CallShape, OperationCall},
    index::ElementIndex,
    with_element_type,
};
use quotient_core::{
    math::range::ActiveRange,
    num::{element::Element, limits::TypeCode, scalar::Scalar},
};
use tracing::{debug, debug_span, trace};

/// An element type the dispatcher can divide.
pub trait Divisible: ArrayElement + ClassifyDivision + DivisionKernel {}

impl<T> Divisible for T where T: ArrayElement + ClassifyDivision + DivisionKernel {}

/// Where the scan loop reads one side of the division from.
enum Operand<'a, T> {
    /// The destination slice itself (in-place calls).
    Destination,
    Slice(&'a [T]),
    Scalar(T),
}

impl<T: Copy> Operand<'_, T> {
    #[inline(always)]
    fn at(&self, dst: &[T], index: usize) -> T {
        match self {
            Operand::Destination => dst[index],
            Operand::Slice(values) => values[index],
            Operand::Scalar(value) => *value,
        }
    }
}

/// Shape and extent of one scan.
#[derive(Clone, Copy, Debug)]
struct Plan {
    shape: CallShape,
    has_out: bool,
    natural_len: usize,
    range: ActiveRange,
}

impl Plan {
    #[inline]
    fn single(shape: CallShape, has_out: bool, len: usize, options: &DivideOptions) -> Self {
        Self {
            shape,
            has_out,
            natural_len: len,
            range: ActiveRange::limit(len, options.maxlen()),
        }
    }

    #[inline]
    fn pair(has_out: bool, left_len: usize, right_len: usize, options: &DivideOptions) -> Self {
        Self {
            shape: CallShape::ArrayArray,
            has_out,
            natural_len: left_len.min(right_len),
            range: ActiveRange::limit_pair(left_len, right_len, options.maxlen()),
        }
    }

    fn check_out_len(&self, out_len: usize) -> Result<(), DivideError> {
        if out_len < self.range.len() {
            let e = ValidationError::OutputTooShort {
                len: out_len,
                required: self.range.len(),
            };
            debug!(error = %e, "rejected division call");
            return Err(e.into());
        }
        Ok(())
    }
}

fn scan<T: Divisible>(
    plan: Plan,
    left: Operand<'_, T>,
    right: Operand<'_, T>,
    dst: &mut [T],
    options: &DivideOptions,
) -> Result<DivideStats, DivideError> {
    debug!(
        code = %T::CODE,
        shape = %plan.shape,
        has_out = plan.has_out,
        len = plan.natural_len,
        active = %plan.range,
        matherrors = options.matherrors(),
        "true division"
    );

    let policy = FaultPolicy::from(options);
    let mut propagated = 0usize;
    for index in plan.range {
        let dividend = left.at(dst, index);
        let divisor = right.at(dst, index);
        match dividend.classify_division(divisor, &policy) {
            Verdict::Clear => {}
            Verdict::Propagate => {
                propagated += 1;
                trace!(index, %dividend, %divisor, "propagating non-finite operand");
            }
            Verdict::Fatal(kind) => {
                let record = FaultRecord::new(kind, ElementIndex::new(index));
                debug!(code = %T::CODE, fault = %record, written = index, "division aborted");
                return Err(record.into());
            }
        }
        dst[index] = dividend.divide(divisor);
    }

    Ok(DivideStatsBuilder::new(T::CODE, plan.shape)
        .has_out(plan.has_out)
        .elements_processed(plan.range.len())
        .non_finite_propagated(propagated)
        .build())
}

/// Divides every element of `array` by `scalar`, in place.
///
/// # Examples
///
/// ```rust
/// # use quotient_ops::dispatch::div_array_scalar;
/// # use quotient_ops::options::DivideOptions;
///
/// let mut values = [7i8, -7, 127];
/// div_array_scalar(&mut values, -2, &DivideOptions::default()).unwrap();
/// assert_eq!(values, [-3, 3, -63]);
/// ```
pub fn div_array_scalar<T: Divisible>(
    array: &mut [T],
    scalar: T,
    options: &DivideOptions,
) -> Result<DivideStats, DivideError> {
    let plan = Plan::single(CallShape::ArrayScalar, false, array.len(), options);
    scan(plan, Operand::Destination, Operand::Scalar(scalar), array, options)
}

/// Divides every element of `array` by `scalar`, writing into `out`.
pub fn div_array_scalar_out<T: Divisible>(
    array: &[T],
    scalar: T,
    out: &mut [T],
    options: &DivideOptions,
) -> Result<DivideStats, DivideError> {
    let plan = Plan::single(CallShape::ArrayScalar, true, array.len(), options);
    plan.check_out_len(out.len())?;
    scan(plan, Operand::Slice(array), Operand::Scalar(scalar), out, options)
}

/// Divides `scalar` by every element of `array`, in place.
pub fn div_scalar_array<T: Divisible>(
    scalar: T,
    array: &mut [T],
    options: &DivideOptions,
) -> Result<DivideStats, DivideError> {
    let plan = Plan::single(CallShape::ScalarArray, false, array.len(), options);
    scan(plan, Operand::Scalar(scalar), Operand::Destination, array, options)
}

/// Divides `scalar` by every element of `array`, writing into `out`.
pub fn div_scalar_array_out<T: Divisible>(
    scalar: T,
    array: &[T],
    out: &mut [T],
    options: &DivideOptions,
) -> Result<DivideStats, DivideError> {
    let plan = Plan::single(CallShape::ScalarArray, true, array.len(), options);
    plan.check_out_len(out.len())?;
    scan(plan, Operand::Scalar(scalar), Operand::Slice(array), out, options)
}

/// Divides `left` by `right` element-wise, in place in `left`.
///
/// Only the first `min(left.len(), right.len())` elements take part.
pub fn div_array_array<T: Divisible>(
    left: &mut [T],
    right: &[T],
    options: &DivideOptions,
) -> Result<DivideStats, DivideError> {
    let plan = Plan::pair(false, left.len(), right.len(), options);
    scan(plan, Operand::Destination, Operand::Slice(right), left, options)
}

/// Divides `left` by `right` element-wise, writing into `out`.
pub fn div_array_array_out<T: Divisible>(
    left: &[T],
    right: &[T],
    out: &mut [T],
    options: &DivideOptions,
) -> Result<DivideStats, DivideError> {
    let plan = Plan::pair(true, left.len(), right.len(), options);
    plan.check_out_len(out.len())?;
    scan(plan, Operand::Slice(left), Operand::Slice(right), out, options)
}

/// Checks that every array of `call` shares the acting array's element type.
fn check_codes(call: &OperationCall<'_>) -> Result<TypeCode, DivideError> {
    let expected = call.acting_code();
    match call.array_codes().into_iter().find(|&code| code != expected) {
        Some(found) => Err(ValidationError::CodeMismatch { expected, found }.into()),
        None => Ok(expected),
    }
}

fn scalar_operand<T: Element>(scalar: Scalar) -> Result<T, DivideError> {
    T::from_scalar(scalar)
        .map_err(DivideError::from)
        .inspect_err(|e| debug!(error = %e, "rejected division call"))
}

fn view<T: ArrayElement>(array: &TypedArray) -> Result<&[T], DivideError> {
    T::slice(array).ok_or_else(|| {
        ValidationError::CodeMismatch {
            expected: T::CODE,
            found: array.code(),
        }
        .into()
    })
}

fn view_mut<T: ArrayElement>(array: &mut TypedArray) -> Result<&mut [T], DivideError> {
    let found = array.code();
    T::slice_mut(array).ok_or_else(|| {
        ValidationError::CodeMismatch {
            expected: T::CODE,
            found,
        }
        .into()
    })
}

fn dispatch_typed<T: Divisible>(
    call: OperationCall<'_>,
    options: &DivideOptions,
) -> Result<DivideStats, DivideError> {
    match call {
        OperationCall::ArrayScalar { array, scalar } => {
            let scalar = scalar_operand::<T>(scalar)?;
            div_array_scalar(view_mut::<T>(array)?, scalar, options)
        }
        OperationCall::ArrayScalarOut { array, scalar, out } => {
            let scalar = scalar_operand::<T>(scalar)?;
            div_array_scalar_out(view::<T>(array)?, scalar, view_mut::<T>(out)?, options)
        }
        OperationCall::ScalarArray { scalar, array } => {
            let scalar = scalar_operand::<T>(scalar)?;
            div_scalar_array(scalar, view_mut::<T>(array)?, options)
        }
        OperationCall::ScalarArrayOut { scalar, array, out } => {
            let scalar = scalar_operand::<T>(scalar)?;
            div_scalar_array_out(scalar, view::<T>(array)?, view_mut::<T>(out)?, options)
        }
        OperationCall::ArrayArray { left, right } => {
            div_array_array(view_mut::<T>(left)?, view::<T>(right)?, options)
        }
        OperationCall::ArrayArrayOut { left, right, out } => div_array_array_out(
            view::<T>(left)?,
            view::<T>(right)?,
            view_mut::<T>(out)?,
            options,
        ),
    }
}

/// True division over dynamically typed arrays.
///
/// Validation runs in a fixed order before anything is written: element
/// types of all arrays, then the scalar operand, then the output length.
///
/// # Examples
///
/// ```rust
/// # use quotient_array::{array::TypedArray, call::OperationCall};
/// # use quotient_ops::{dispatch::truediv, options::DivideOptions};
///
/// let left = TypedArray::from(vec![0i8, 1, 2, 3]);
/// let right = TypedArray::from(vec![1i8, 1, 1, 1]);
/// let mut out = TypedArray::from(vec![0i8; 4]);
///
/// let options = DivideOptions::builder().maxlen(2).build();
/// truediv(OperationCall::array_array_out(&left, &right, &mut out), &options).unwrap();
/// assert_eq!(out, TypedArray::from(vec![0i8, 1, 0, 0]));
/// ```
pub fn truediv(
    call: OperationCall<'_>,
    options: &DivideOptions,
) -> Result<DivideStats, DivideError> {
    let _span = debug_span!(
        "truediv",
        shape = %call.shape(),
        has_out = call.has_out(),
        scalar = ?call.scalar()
    )
    .entered();

    let code = check_codes(&call).inspect_err(|e| debug!(error = %e, "rejected division call"))?;
    with_element_type!(code, T => dispatch_typed::<T>(call, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExceptionKind, FaultKind};
    use crate::options::OptionValue;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn raise() -> DivideOptions {
        DivideOptions::default()
    }

    fn propagate() -> DivideOptions {
        DivideOptions::builder().matherrors(true).build()
    }

    fn fault_of(result: Result<DivideStats, DivideError>) -> FaultRecord {
        match result {
            Err(DivideError::Fault(record)) => record,
            other => panic!("expected a fault, got {other:?}"),
        }
    }

    fn check_stats_follow_call(call: OperationCall<'_>) {
        let (shape, has_out) = (call.shape(), call.has_out());
        let stats = truediv(call, &raise()).unwrap();
        assert_eq!(stats.shape, shape);
        assert_eq!(stats.has_out, has_out);
    }

    #[test]
    fn test_stats_follow_every_call_shape() {
        let mut a = TypedArray::from(vec![6u32, 9]);
        let b = TypedArray::from(vec![3u32, 3]);
        let mut out = TypedArray::zeros(TypeCode::U32, 2);

        check_stats_follow_call(OperationCall::array_scalar(&mut a, 1u32));
        check_stats_follow_call(OperationCall::array_scalar_out(&b, 1u32, &mut out));
        check_stats_follow_call(OperationCall::scalar_array(18u32, &mut a));
        check_stats_follow_call(OperationCall::scalar_array_out(18u32, &b, &mut out));
        check_stats_follow_call(OperationCall::array_array(&mut a, &b));
        check_stats_follow_call(OperationCall::array_array_out(&a, &b, &mut out));
    }

    #[test]
    fn test_no_fault_at_max() {
        let mut a = TypedArray::from(vec![127i8, 127, 127]);
        let stats = truediv(OperationCall::array_scalar(&mut a, 1i8), &raise()).unwrap();
        assert_eq!(a, TypedArray::from(vec![127i8, 127, 127]));
        assert_eq!(stats.elements_processed, 3);
        assert_eq!(stats.code, TypeCode::I8);
        assert_eq!(stats.shape, CallShape::ArrayScalar);
        assert!(!stats.has_out);
    }

    #[test]
    fn test_zero_divisor_ignores_matherrors() {
        for options in [raise(), propagate()] {
            let mut a = TypedArray::from(vec![127i8, 127, 127]);
            let e = truediv(OperationCall::array_scalar(&mut a, 0i8), &options).unwrap_err();
            assert_eq!(e.exception_kind(), ExceptionKind::ZeroDivisionError);
            assert_eq!(e.fault().map(|r| r.index.get()), Some(0));
            assert_eq!(a, TypedArray::from(vec![127i8, 127, 127]));
        }
    }

    #[test]
    fn test_min_by_minus_one_ignores_matherrors() {
        for options in [raise(), propagate()] {
            let mut a = TypedArray::from(vec![-128i8, -128]);
            let e = truediv(OperationCall::array_scalar(&mut a, -1i8), &options).unwrap_err();
            assert_eq!(e.exception_kind(), ExceptionKind::OverflowError);
            assert_eq!(a, TypedArray::from(vec![-128i8, -128]));
        }
    }

    #[test]
    fn test_signed_division_truncates() {
        let mut a = TypedArray::from(vec![7i8]);
        truediv(OperationCall::array_scalar(&mut a, -2i8), &raise()).unwrap();
        assert_eq!(a, TypedArray::from(vec![-3i8]));
    }

    #[test]
    fn test_nan_scalar_gated_by_matherrors() {
        let mut a = TypedArray::from(vec![1.0f32, 2.0]);
        let e = truediv(OperationCall::array_scalar(&mut a, f32::NAN), &raise()).unwrap_err();
        assert_eq!(e.exception_kind(), ExceptionKind::ArithmeticError);
        assert_eq!(a, TypedArray::from(vec![1.0f32, 2.0]));

        let stats = truediv(OperationCall::array_scalar(&mut a, f32::NAN), &propagate()).unwrap();
        assert_eq!(stats.non_finite_propagated, 2);
        let values = a.as_slice::<f32>().unwrap();
        assert!(values.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_maxlen_leaves_tail_untouched() {
        let left = TypedArray::from(vec![0i8, 1, 2, 3]);
        let right = TypedArray::from(vec![1i8, 1, 1, 1]);
        let mut out = TypedArray::zeros(TypeCode::I8, 4);
        let options = DivideOptions::builder().maxlen(2).build();
        let stats = truediv(
            OperationCall::array_array_out(&left, &right, &mut out),
            &options,
        )
        .unwrap();
        assert_eq!(out, TypedArray::from(vec![0i8, 1, 0, 0]));
        assert_eq!(stats.elements_processed, 2);
        assert!(stats.has_out);
    }

    #[test]
    fn test_maxlen_at_or_beyond_length_is_full() {
        for maxlen in [0, 4, 100] {
            let mut a = TypedArray::from(vec![10u16, 20, 30, 40]);
            let options = DivideOptions::builder().maxlen(maxlen).build();
            truediv(OperationCall::array_scalar(&mut a, 10u16), &options).unwrap();
            assert_eq!(a, TypedArray::from(vec![1u16, 2, 3, 4]));
        }
    }

    #[test]
    fn test_maxlen_skips_faults_in_tail() {
        let mut a = TypedArray::from(vec![4i32, 8, 5]);
        let b = TypedArray::from(vec![2i32, 4, 0]);
        let options = DivideOptions::builder().maxlen(2).build();
        truediv(OperationCall::array_array(&mut a, &b), &options).unwrap();
        assert_eq!(a, TypedArray::from(vec![2i32, 2, 5]));
    }

    #[test]
    fn test_type_mismatch_mutates_nothing() {
        let mut a = TypedArray::from(vec![10i16, 20]);
        let b = TypedArray::from(vec![2u16, 2]);
        let e = truediv(OperationCall::array_array(&mut a, &b), &raise()).unwrap_err();
        assert_eq!(e.exception_kind(), ExceptionKind::TypeError);
        assert_eq!(
            e,
            DivideError::Validation(ValidationError::CodeMismatch {
                expected: TypeCode::I16,
                found: TypeCode::U16,
            })
        );
        assert_eq!(a, TypedArray::from(vec![10i16, 20]));
        assert_eq!(b, TypedArray::from(vec![2u16, 2]));
    }

    #[test]
    fn test_out_type_mismatch_mutates_nothing() {
        let a = TypedArray::from(vec![1.0f64, 2.0]);
        let mut out = TypedArray::zeros(TypeCode::F32, 2);
        let e = truediv(OperationCall::array_scalar_out(&a, 2.0f64, &mut out), &raise())
            .unwrap_err();
        assert_eq!(e.exception_kind(), ExceptionKind::TypeError);
        assert_eq!(out, TypedArray::zeros(TypeCode::F32, 2));
    }

    #[test]
    fn test_every_pair_of_distinct_codes_is_rejected() {
        for left_code in TypeCode::ALL {
            for right_code in TypeCode::ALL {
                if left_code == right_code {
                    continue;
                }
                let mut left = TypedArray::zeros(left_code, 3);
                let right = TypedArray::zeros(right_code, 3);
                let e = truediv(OperationCall::array_array(&mut left, &right), &raise())
                    .unwrap_err();
                assert_eq!(e.exception_kind(), ExceptionKind::TypeError);
                assert_eq!(left, TypedArray::zeros(left_code, 3));
            }
        }
    }

    #[test]
    fn test_invalid_option_value_is_type_error_before_any_write() {
        let mut a = TypedArray::from(vec![8i32, 6]);
        let b = TypedArray::from(vec![2i32, 3]);

        let result = DivideOptions::from_kwargs(&[("maxlen", "a".into())])
            .map_err(DivideError::from)
            .and_then(|options| truediv(OperationCall::array_array(&mut a, &b), &options));
        let e = result.unwrap_err();
        assert_eq!(e.exception_kind(), ExceptionKind::TypeError);
        assert!(matches!(
            e,
            DivideError::Validation(ValidationError::InvalidOption { name: "maxlen", .. })
        ));
        assert_eq!(a, TypedArray::from(vec![8i32, 6]));

        let e = DivideOptions::from_kwargs(&[("matherrors", 1.5f64.into())])
            .map_err(DivideError::from)
            .and_then(|options| truediv(OperationCall::array_scalar(&mut a, 2i32), &options))
            .unwrap_err();
        assert_eq!(e.exception_kind(), ExceptionKind::TypeError);
        assert_eq!(a, TypedArray::from(vec![8i32, 6]));
    }

    #[test]
    fn test_unknown_option_is_type_error() {
        let mut a = TypedArray::from(vec![1.0f64]);
        let e = DivideOptions::from_kwargs(&[("maxsize", OptionValue::Int(1))])
            .map_err(DivideError::from)
            .and_then(|options| truediv(OperationCall::array_scalar(&mut a, 2.0f64), &options))
            .unwrap_err();
        assert_eq!(e.exception_kind(), ExceptionKind::TypeError);
        assert_eq!(a, TypedArray::from(vec![1.0f64]));
    }

    #[test]
    fn test_scalar_kind_mismatch_is_type_error() {
        let mut a = TypedArray::from(vec![4i8]);
        let e = truediv(OperationCall::array_scalar(&mut a, 2.0f64), &raise()).unwrap_err();
        assert_eq!(e.exception_kind(), ExceptionKind::TypeError);

        let mut a = TypedArray::from(vec![4.0f64]);
        let e = truediv(OperationCall::scalar_array(2i64, &mut a), &raise()).unwrap_err();
        assert_eq!(e.exception_kind(), ExceptionKind::TypeError);
        assert_eq!(a, TypedArray::from(vec![4.0f64]));
    }

    #[test]
    fn test_scalar_out_of_range_is_overflow() {
        let mut a = TypedArray::from(vec![200u8]);
        let e = truediv(OperationCall::array_scalar(&mut a, 256i64), &raise()).unwrap_err();
        assert_eq!(e.exception_kind(), ExceptionKind::OverflowError);
        assert!(matches!(e, DivideError::ScalarOutOfRange(_)));
        assert_eq!(a, TypedArray::from(vec![200u8]));

        let e = truediv(OperationCall::scalar_array(-1i64, &mut a), &raise()).unwrap_err();
        assert_eq!(e.exception_kind(), ExceptionKind::OverflowError);
    }

    #[test]
    fn test_out_too_short_mutates_nothing() {
        let a = TypedArray::from(vec![2u32, 4, 6]);
        let mut out = TypedArray::from(vec![9u32]);
        let e = truediv(OperationCall::array_scalar_out(&a, 2u32, &mut out), &raise())
            .unwrap_err();
        assert_eq!(
            e,
            DivideError::Validation(ValidationError::OutputTooShort {
                len: 1,
                required: 3,
            })
        );
        assert_eq!(out, TypedArray::from(vec![9u32]));

        let options = DivideOptions::builder().maxlen(1).build();
        truediv(OperationCall::array_scalar_out(&a, 2u32, &mut out), &options).unwrap();
        assert_eq!(out, TypedArray::from(vec![1u32]));
    }

    #[test]
    fn test_out_leaves_inputs_untouched() {
        let left = TypedArray::from(vec![9i64, -9]);
        let right = TypedArray::from(vec![2i64, 2]);
        let mut out = TypedArray::zeros(TypeCode::I64, 3);
        truediv(
            OperationCall::array_array_out(&left, &right, &mut out),
            &raise(),
        )
        .unwrap();
        assert_eq!(out, TypedArray::from(vec![4i64, -4, 0]));
        assert_eq!(left, TypedArray::from(vec![9i64, -9]));
        assert_eq!(right, TypedArray::from(vec![2i64, 2]));
    }

    #[test]
    fn test_scalar_array_shapes() {
        let mut a = TypedArray::from(vec![1isize, 2, 3, -4]);
        truediv(OperationCall::scalar_array(12isize, &mut a), &raise()).unwrap();
        assert_eq!(a, TypedArray::from(vec![12isize, 6, 4, -3]));

        let b = TypedArray::from(vec![3usize, 5]);
        let mut out = TypedArray::zeros(TypeCode::Usize, 2);
        let stats = truediv(OperationCall::scalar_array_out(10usize, &b, &mut out), &raise())
            .unwrap();
        assert_eq!(out, TypedArray::from(vec![3usize, 2]));
        assert_eq!(stats.shape, CallShape::ScalarArray);
    }

    #[test]
    fn test_scalar_array_zero_element_faults_at_index() {
        let mut a = TypedArray::from(vec![2u64, 5, 0, 1]);
        let record = fault_of(truediv(OperationCall::scalar_array(10u64, &mut a), &raise()));
        assert_eq!(record.kind, FaultKind::DivideByZero);
        assert_eq!(record.index, ElementIndex::new(2));
    }

    #[test]
    fn test_fault_keeps_earlier_writes() {
        let mut left = [10i32, 20, 30];
        let right = [2i32, 0, 5];
        let record = fault_of(div_array_array(&mut left, &right, &raise()));
        assert_eq!(record.index.get(), 1);
        assert_eq!(left, [5, 20, 30]);
    }

    #[test]
    fn test_array_array_uses_shorter_length() {
        let mut left = [8u8, 9, 10, 11];
        let right = [2u8, 3];
        let stats = div_array_array(&mut left, &right, &raise()).unwrap();
        assert_eq!(left, [4, 3, 10, 11]);
        assert_eq!(stats.elements_processed, 2);
    }

    #[test]
    fn test_zero_divisor_for_every_integer_code() {
        for code in TypeCode::ALL.into_iter().filter(|c| !c.is_float()) {
            for options in [raise(), propagate()] {
                let mut a = TypedArray::zeros(code, 3);
                let e = truediv(OperationCall::array_scalar(&mut a, 0i64), &options).unwrap_err();
                assert_eq!(
                    e.exception_kind(),
                    ExceptionKind::ZeroDivisionError,
                    "code {code}"
                );
            }
        }
    }

    #[test]
    fn test_min_by_minus_one_for_every_signed_code() {
        let signed = TypeCode::ALL
            .into_iter()
            .filter(|c| c.is_signed() && !c.is_float());
        for code in signed {
            for options in [raise(), propagate()] {
                let mut a =
                    with_element_type!(code, T => TypedArray::from(vec![<T as Element>::MIN; 2]));
                let before = a.clone();
                let e = truediv(OperationCall::array_scalar(&mut a, -1i64), &options).unwrap_err();
                assert_eq!(e.exception_kind(), ExceptionKind::OverflowError, "code {code}");
                assert_eq!(a, before);
            }
        }
    }

    #[test]
    fn test_non_finite_for_every_float_code() {
        for code in [TypeCode::F32, TypeCode::F64] {
            for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                let mut a = TypedArray::zeros(code, 2);
                let e = truediv(OperationCall::scalar_array(bad, &mut a), &raise()).unwrap_err();
                assert_eq!(e.exception_kind(), ExceptionKind::ArithmeticError);
                assert_eq!(a, TypedArray::zeros(code, 2));

                truediv(OperationCall::scalar_array(bad, &mut a), &propagate()).unwrap();
            }
        }
    }

    #[test]
    fn test_infinite_operand_propagates_ieee_result() {
        let mut a = [f64::INFINITY, 1.0, f64::NEG_INFINITY];
        let stats = div_array_scalar(&mut a, 2.0, &propagate()).unwrap();
        assert_eq!(a, [f64::INFINITY, 0.5, f64::NEG_INFINITY]);
        assert_eq!(stats.non_finite_propagated, 2);
    }

    #[test]
    fn test_float_zero_divisor_is_not_a_fault() {
        let mut a = [1.0f32, -1.0, 0.0];
        div_array_scalar(&mut a, 0.0, &raise()).unwrap();
        assert_eq!(a[0], f32::INFINITY);
        assert_eq!(a[1], f32::NEG_INFINITY);
        assert!(a[2].is_nan());
    }

    #[test]
    fn test_empty_arrays() {
        let mut a = TypedArray::zeros(TypeCode::I8, 0);
        let stats = truediv(OperationCall::array_scalar(&mut a, 0i8), &raise()).unwrap();
        assert_eq!(stats.elements_processed, 0);

        let mut out: [i8; 0] = [];
        div_array_array_out::<i8>(&[], &[], &mut out, &raise()).unwrap();
    }

    #[test]
    fn test_random_signed_division_matches_reference() {
        let mut rng = StdRng::seed_from_u64(0xD1_71DE);
        let len = 512;
        let left: Vec<i64> = (0..len)
            .map(|_| rng.random_range(i64::MIN..=i64::MAX))
            .collect();
        let right: Vec<i64> = (0..len)
            .map(|_| match rng.random_range(-1000i64..=1000) {
                0 => 1,
                -1 => 3,
                v => v,
            })
            .collect();
        let mut out = vec![0i64; len];

        div_array_array_out(&left, &right, &mut out, &raise()).unwrap();

        for i in 0..len {
            let expected = (left[i] as i128) / (right[i] as i128);
            assert_eq!(out[i] as i128, expected, "{} / {}", left[i], right[i]);
        }
    }

    #[test]
    fn test_typed_and_dynamic_layers_agree() {
        let mut rng = StdRng::seed_from_u64(7);
        let values: Vec<i16> = (0..64)
            .map(|_| rng.random_range(i16::MIN..=i16::MAX))
            .collect();
        let divisor: i16 = rng.random_range(2..=500);

        let mut typed = values.clone();
        div_array_scalar(&mut typed, divisor, &raise()).unwrap();

        let mut dynamic = TypedArray::from(values);
        truediv(OperationCall::array_scalar(&mut dynamic, divisor), &raise()).unwrap();

        assert_eq!(dynamic.as_slice::<i16>(), Some(&typed[..]));
    }
}
