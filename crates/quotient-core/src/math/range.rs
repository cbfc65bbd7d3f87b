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

//! The active index range of an element-wise call.
//!
//! An element-wise operation walks the half-open range `[0, end)`. `end` is
//! the natural length of the operands, optionally shortened by the caller's
//! `maxlen`. Indices at or beyond `end` are never read or written, so the
//! tail of a destination keeps its contents bit-for-bit.

use std::{iter::FusedIterator, ops::Range};

/// The half-open range `[0, end)` of indices an operation may touch.
///
/// # Examples
///
/// ```rust
/// # use quotient_core::math::range::ActiveRange;
///
/// assert_eq!(ActiveRange::limit(10, 0).len(), 10);  // 0 means "no limit"
/// assert_eq!(ActiveRange::limit(10, 4).len(), 4);
/// assert_eq!(ActiveRange::limit(10, 25).len(), 10); // never grows past the data
///
/// let indices: Vec<_> = ActiveRange::limit(5, 3).iter().collect();
/// assert_eq!(indices, vec![0, 1, 2]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActiveRange {
    end_exclusive: usize,
}

impl ActiveRange {
    /// Creates the range `[0, end_exclusive)`.
    #[inline]
    pub const fn new(end_exclusive: usize) -> Self {
        Self { end_exclusive }
    }

    /// Bounds `natural_len` by `maxlen`.
    ///
    /// A `maxlen` of zero, or one not smaller than `natural_len`, leaves the
    /// natural length unchanged.
    #[inline]
    pub const fn limit(natural_len: usize, maxlen: usize) -> Self {
        if maxlen > 0 && maxlen < natural_len {
            Self::new(maxlen)
        } else {
            Self::new(natural_len)
        }
    }

    /// Like `limit`, for two operands whose natural length is the shorter one.
    #[inline]
    pub const fn limit_pair(left_len: usize, right_len: usize, maxlen: usize) -> Self {
        let natural = if left_len < right_len {
            left_len
        } else {
            right_len
        };
        Self::limit(natural, maxlen)
    }

    /// One past the last index touched.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end_exclusive
    }

    /// Number of indices in the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient_core::math::range::ActiveRange;
    ///
    /// assert_eq!(ActiveRange::limit(10, 4).len(), 4);
    /// assert_eq!(ActiveRange::limit(10, 0).len(), 10);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.end_exclusive
    }

    /// Returns `true` if no index is touched.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end_exclusive == 0
    }

    /// Returns `true` if `index` lies in `[0, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient_core::math::range::ActiveRange;
    ///
    /// let range = ActiveRange::limit_pair(5, 3, 0);
    /// assert!(range.contains(2));
    /// assert!(!range.contains(3));
    /// ```
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        index < self.end_exclusive
    }

    /// Iterates the indices in ascending order.
    #[inline]
    pub fn iter(&self) -> ActiveRangeIter {
        ActiveRangeIter {
            inner: 0..self.end_exclusive,
        }
    }
}

impl std::fmt::Display for ActiveRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[0, {})", self.end_exclusive)
    }
}

impl From<ActiveRange> for Range<usize> {
    #[inline]
    fn from(range: ActiveRange) -> Self {
        0..range.end_exclusive
    }
}

impl IntoIterator for ActiveRange {
    type Item = usize;
    type IntoIter = ActiveRangeIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the indices of an `ActiveRange`.
#[derive(Clone, Debug)]
pub struct ActiveRangeIter {
    inner: Range<usize>,
}

impl Iterator for ActiveRangeIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for ActiveRangeIter {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for ActiveRangeIter {}

impl FusedIterator for ActiveRangeIter {}
