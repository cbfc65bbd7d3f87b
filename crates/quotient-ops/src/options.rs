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

//! Per-call configuration.
//!
//! `DivideOptions` carries the two knobs of a call: `matherrors`, which lets
//! NaN and infinite floating operands follow IEEE-754 instead of aborting, and
//! `maxlen`, which bounds how many leading elements are processed (`0` means
//! all of them). Options are built either through `DivideOptionsBuilder` or,
//! at a dynamic boundary, parsed from keyword arguments with `from_kwargs`,
//! which rejects values that cannot be converted before any array is looked at.

use crate::error::ValidationError;

/// Options of a division call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DivideOptions {
    matherrors: bool,
    maxlen: usize,
}

impl DivideOptions {
    /// Default options: faults raise, no length limit.
    #[inline]
    pub const fn new() -> Self {
        Self {
            matherrors: false,
            maxlen: 0,
        }
    }

    /// Starts a `DivideOptionsBuilder` with the default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient_ops::options::DivideOptions;
    ///
    /// let options = DivideOptions::builder().matherrors(true).maxlen(8).build();
    /// assert!(options.matherrors());
    /// assert_eq!(options.maxlen(), 8);
    /// ```
    #[inline]
    pub fn builder() -> DivideOptionsBuilder {
        DivideOptionsBuilder::new()
    }

    /// Whether non-finite floating operands propagate instead of raising.
    /// Has no effect on integer faults.
    #[inline]
    pub const fn matherrors(&self) -> bool {
        self.matherrors
    }

    /// Maximum number of elements to process; `0` means no limit.
    #[inline]
    pub const fn maxlen(&self) -> usize {
        self.maxlen
    }

    /// Parses keyword arguments as a dynamic binding receives them.
    ///
    /// Accepted keys are `matherrors` (boolean or integer) and `maxlen`
    /// (integer or boolean; negative values mean no limit). Anything else is a
    /// `ValidationError`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quotient_ops::options::{DivideOptions, OptionValue};
    ///
    /// let opts = DivideOptions::from_kwargs(&[
    ///     ("matherrors", OptionValue::Bool(true)),
    ///     ("maxlen", OptionValue::Int(2)),
    /// ])
    /// .unwrap();
    /// assert!(opts.matherrors());
    /// assert_eq!(opts.maxlen(), 2);
    ///
    /// assert!(DivideOptions::from_kwargs(&[("maxlen", OptionValue::Str("a".into()))]).is_err());
    /// ```
    pub fn from_kwargs(kwargs: &[(&str, OptionValue)]) -> Result<Self, ValidationError> {
        let mut builder = DivideOptionsBuilder::new();
        for (name, value) in kwargs {
            builder = match *name {
                "matherrors" => builder.matherrors(value.to_flag("matherrors")?),
                "maxlen" => builder.maxlen(value.to_len("maxlen")?),
                other => return Err(ValidationError::UnknownOption(other.to_string())),
            };
        }
        Ok(builder.build())
    }
}

impl std::fmt::Display for DivideOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DivideOptions(matherrors: {}, maxlen: {})",
            self.matherrors, self.maxlen
        )
    }
}

/// Builder for `DivideOptions`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DivideOptionsBuilder {
    matherrors: bool,
    maxlen: usize,
}

impl DivideOptionsBuilder {
    /// Creates a builder with faults raising and no length limit.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets NaN and infinite floating operands follow IEEE-754.
    #[inline]
    pub fn matherrors(mut self, matherrors: bool) -> Self {
        self.matherrors = matherrors;
        self
    }

    /// Limits processing to the first `maxlen` elements; `0` disables the limit.
    #[inline]
    pub fn maxlen(mut self, maxlen: usize) -> Self {
        self.maxlen = maxlen;
        self
    }

    /// Finishes the builder.
    #[inline]
    pub fn build(self) -> DivideOptions {
        DivideOptions {
            matherrors: self.matherrors,
            maxlen: self.maxlen,
        }
    }
}

/// A dynamically typed keyword-argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
}

impl OptionValue {
    /// Name of the value's type, as reported in option errors.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Int(_) => "int",
            OptionValue::Float(_) => "float",
            OptionValue::Str(_) => "str",
        }
    }

    fn to_flag(&self, name: &'static str) -> Result<bool, ValidationError> {
        match self {
            OptionValue::Bool(b) => Ok(*b),
            OptionValue::Int(v) => Ok(*v != 0),
            other => Err(ValidationError::InvalidOption {
                name,
                expected: "bool or int",
                found: other.type_name(),
            }),
        }
    }

    fn to_len(&self, name: &'static str) -> Result<usize, ValidationError> {
        match self {
            OptionValue::Int(v) if *v <= 0 => Ok(0),
            OptionValue::Int(v) => Ok(usize::try_from(*v).unwrap_or(usize::MAX)),
            OptionValue::Bool(b) => Ok(usize::from(*b)),
            other => Err(ValidationError::InvalidOption {
                name,
                expected: "int",
                found: other.type_name(),
            }),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v as i128)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Str(v.to_string())
    }
}
