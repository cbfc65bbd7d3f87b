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

use quotient_array::call::CallShape;
use quotient_core::num::limits::TypeCode;

/// Summary of a completed division call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivideStats {
    /// Element type the call operated on.
    pub code: TypeCode,
    /// Operand shape of the call.
    pub shape: CallShape,
    /// Whether results went to a separate output array.
    pub has_out: bool,
    /// Number of elements written.
    pub elements_processed: usize,
    /// Number of elements divided with a suppressed non-finite operand.
    pub non_finite_propagated: usize,
}

impl std::fmt::Display for DivideStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Divide Statistics:")?;
        writeln!(f, "  Type: {}", self.code)?;
        writeln!(f, "  Shape: {}", self.shape)?;
        writeln!(f, "  Output Array: {}", self.has_out)?;
        writeln!(f, "  Elements Processed: {}", self.elements_processed)?;
        writeln!(f, "  Non-Finite Propagated: {}", self.non_finite_propagated)
    }
}

/// Builder for `DivideStats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivideStatsBuilder {
    code: TypeCode,
    shape: CallShape,
    has_out: bool,
    elements_processed: usize,
    non_finite_propagated: usize,
}

impl DivideStatsBuilder {
    /// Creates a builder for a call on `code` arrays with the given shape.
    #[inline]
    pub fn new(code: TypeCode, shape: CallShape) -> Self {
        Self {
            code,
            shape,
            has_out: false,
            elements_processed: 0,
            non_finite_propagated: 0,
        }
    }

    /// Records whether results went to a separate output array.
    #[inline]
    pub fn has_out(mut self, has_out: bool) -> Self {
        self.has_out = has_out;
        self
    }

    #[inline]
    pub fn elements_processed(mut self, elements_processed: usize) -> Self {
        self.elements_processed = elements_processed;
        self
    }

    #[inline]
    pub fn non_finite_propagated(mut self, non_finite_propagated: usize) -> Self {
        self.non_finite_propagated = non_finite_propagated;
        self
    }

    /// Finishes the builder.
    #[inline]
    pub fn build(self) -> DivideStats {
        DivideStats {
            code: self.code,
            shape: self.shape,
            has_out: self.has_out,
            elements_processed: self.elements_processed,
            non_finite_propagated: self.non_finite_propagated,
        }
    }
}
