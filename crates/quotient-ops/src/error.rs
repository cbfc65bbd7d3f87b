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

//! Error taxonomy of a division call.
//!
//! Every failure is reported through `DivideError`. Whole-call validation
//! problems (`Validation`, `ScalarOutOfRange`) are raised before any element
//! is touched; per-element faults (`Fault`) carry the index at which the scan
//! stopped. `exception_kind` maps each error onto the native exception a
//! dynamic-language binding would raise.

use quotient_array::index::ElementIndex;
use quotient_core::num::{limits::TypeCode, scalar::ScalarError};

/// The native exception class corresponding to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    /// Invalid call: mismatched codes, wrong scalar kind, short `out`, bad options.
    TypeError,
    /// Integer division by zero.
    ZeroDivisionError,
    /// Signed `MIN / -1`, or a scalar outside the element type's range.
    OverflowError,
    /// NaN or infinite floating operand while `matherrors` is off.
    ArithmeticError,
}

impl ExceptionKind {
    /// The exception's class name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient_ops::error::ExceptionKind;
    ///
    /// assert_eq!(ExceptionKind::ZeroDivisionError.name(), "ZeroDivisionError");
    /// ```
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ExceptionKind::TypeError => "TypeError",
            ExceptionKind::ZeroDivisionError => "ZeroDivisionError",
            ExceptionKind::OverflowError => "OverflowError",
            ExceptionKind::ArithmeticError => "ArithmeticError",
        }
    }
}

impl std::fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Kinds of per-element faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Integer divisor of zero. Never suppressible.
    DivideByZero,
    /// Signed `MIN / -1`. Never suppressible.
    SignedOverflow,
    /// NaN or infinite floating operand. Suppressed by `matherrors`.
    NonFinite,
}

impl FaultKind {
    /// The exception a fault of this kind raises.
    #[inline]
    pub const fn exception_kind(self) -> ExceptionKind {
        match self {
            FaultKind::DivideByZero => ExceptionKind::ZeroDivisionError,
            FaultKind::SignedOverflow => ExceptionKind::OverflowError,
            FaultKind::NonFinite => ExceptionKind::ArithmeticError,
        }
    }

    /// Returns `true` only for the fault `matherrors` may turn off.
    #[inline]
    pub const fn is_suppressible(self) -> bool {
        matches!(self, FaultKind::NonFinite)
    }
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaultKind::DivideByZero => write!(f, "integer division by zero"),
            FaultKind::SignedOverflow => write!(f, "integer overflow in MIN / -1"),
            FaultKind::NonFinite => write!(f, "non-finite operand"),
        }
    }
}

/// A per-element fault and where it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaultRecord {
    pub kind: FaultKind,
    /// Position of the faulting element. Elements before it were written.
    pub index: ElementIndex,
}

impl FaultRecord {
    /// Creates a new `FaultRecord`.
    #[inline]
    pub const fn new(kind: FaultKind, index: ElementIndex) -> Self {
        Self { kind, index }
    }
}

impl std::fmt::Display for FaultRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at index {}", self.kind, self.index.get())
    }
}

/// Whole-call validation failures. All map to `TypeError`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("array type mismatch: expected {expected}, found {found}")]
    CodeMismatch { expected: TypeCode, found: TypeCode },

    #[error("{0}")]
    ScalarKind(ScalarError),

    #[error("output array holds {len} elements but {required} are required")]
    OutputTooShort { len: usize, required: usize },

    #[error("option '{name}' expects {expected}, got {found}")]
    InvalidOption {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// The error type of every division entry point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DivideError {
    #[error("invalid call: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    ScalarOutOfRange(ScalarError),

    #[error("{0}")]
    Fault(FaultRecord),
}

impl DivideError {
    /// The native exception this error corresponds to.
    pub fn exception_kind(&self) -> ExceptionKind {
        match self {
            DivideError::Validation(_) => ExceptionKind::TypeError,
            DivideError::ScalarOutOfRange(_) => ExceptionKind::OverflowError,
            DivideError::Fault(record) => record.kind.exception_kind(),
        }
    }

    /// The fault record, for per-element faults.
    pub fn fault(&self) -> Option<&FaultRecord> {
        match self {
            DivideError::Fault(record) => Some(record),
            _ => None,
        }
    }
}

impl From<FaultRecord> for DivideError {
    fn from(record: FaultRecord) -> Self {
        DivideError::Fault(record)
    }
}

impl From<ScalarError> for DivideError {
    fn from(e: ScalarError) -> Self {
        match e {
            ScalarError::KindMismatch { .. } => {
                DivideError::Validation(ValidationError::ScalarKind(e))
            }
            ScalarError::OutOfRange { .. } => DivideError::ScalarOutOfRange(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotient_core::num::scalar::Scalar;

    #[test]
    fn test_fault_kinds_map_to_exceptions() {
        assert_eq!(
            FaultKind::DivideByZero.exception_kind(),
            ExceptionKind::ZeroDivisionError
        );
        assert_eq!(
            FaultKind::SignedOverflow.exception_kind(),
            ExceptionKind::OverflowError
        );
        assert_eq!(
            FaultKind::NonFinite.exception_kind(),
            ExceptionKind::ArithmeticError
        );
    }

    #[test]
    fn test_only_non_finite_is_suppressible() {
        assert!(!FaultKind::DivideByZero.is_suppressible());
        assert!(!FaultKind::SignedOverflow.is_suppressible());
        assert!(FaultKind::NonFinite.is_suppressible());
    }

    #[test]
    fn test_scalar_error_conversion() {
        let kind: DivideError = ScalarError::KindMismatch {
            code: TypeCode::I8,
            scalar: Scalar::Float(1.0),
        }
        .into();
        assert_eq!(kind.exception_kind(), ExceptionKind::TypeError);

        let range: DivideError = ScalarError::OutOfRange {
            code: TypeCode::I8,
            value: 300,
        }
        .into();
        assert_eq!(range.exception_kind(), ExceptionKind::OverflowError);
        assert!(range.fault().is_none());
    }

    #[test]
    fn test_display() {
        let e = DivideError::from(FaultRecord::new(
            FaultKind::DivideByZero,
            ElementIndex::new(3),
        ));
        assert_eq!(e.to_string(), "integer division by zero at index 3");
        assert_eq!(e.exception_kind().name(), "ZeroDivisionError");

        let e = DivideError::from(ValidationError::CodeMismatch {
            expected: TypeCode::I8,
            found: TypeCode::U8,
        });
        assert_eq!(
            e.to_string(),
            "invalid call: array type mismatch: expected i8('b'), found u8('B')"
        );

        let e = DivideError::from(ValidationError::OutputTooShort {
            len: 1,
            required: 3,
        });
        assert_eq!(
            e.to_string(),
            "invalid call: output array holds 1 elements but 3 are required"
        );
    }
}
