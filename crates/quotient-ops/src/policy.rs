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

//! Fault policies.
//!
//! Policies are split by element kind. Integer faults have no representable
//! result and always abort, while floating faults may fall back to IEEE-754
//! semantics.
//! `FaultPolicy` bundles both and is derived from the call's `DivideOptions`.

use crate::{error::FaultKind, options::DivideOptions};

/// Policy for integer element types. Every integer fault aborts the call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntegerFaultPolicy;

impl IntegerFaultPolicy {
    /// Always `true`.
    #[inline(always)]
    pub const fn is_fatal(self, _kind: FaultKind) -> bool {
        true
    }
}

/// Policy for floating element types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FloatFaultPolicy {
    /// NaN or infinite operands abort the call.
    #[default]
    Raise,
    /// NaN or infinite operands are divided with IEEE-754 semantics.
    Propagate,
}

impl FloatFaultPolicy {
    /// Returns `true` if a fault of `kind` aborts the call under this policy.
    #[inline(always)]
    pub const fn is_fatal(self, kind: FaultKind) -> bool {
        match self {
            FloatFaultPolicy::Raise => true,
            FloatFaultPolicy::Propagate => !kind.is_suppressible(),
        }
    }
}

impl From<bool> for FloatFaultPolicy {
    #[inline]
    fn from(matherrors: bool) -> Self {
        if matherrors {
            FloatFaultPolicy::Propagate
        } else {
            FloatFaultPolicy::Raise
        }
    }
}

impl std::fmt::Display for FloatFaultPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FloatFaultPolicy::Raise => write!(f, "raise"),
            FloatFaultPolicy::Propagate => write!(f, "propagate"),
        }
    }
}

/// The fault policy of one call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaultPolicy {
    pub integer: IntegerFaultPolicy,
    pub float: FloatFaultPolicy,
}

impl From<&DivideOptions> for FaultPolicy {
    #[inline]
    fn from(options: &DivideOptions) -> Self {
        Self {
            integer: IntegerFaultPolicy,
            float: FloatFaultPolicy::from(options.matherrors()),
        }
    }
}
