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

//! # Type Registry
//!
//! A compile-time table describing every element type the engine supports.
//! Each entry records the byte width, the numeric kind and the representable
//! range of one `TypeCode`. The table is a `const` array indexed by the
//! code's discriminant, so `limits` is a pure, total lookup with no global
//! state and no failure mode.
//!
//! Codes follow the single-character conventions of the `array` module:
//! `b B h H i I q Q` for fixed-width integers, `l L` for the pointer-width
//! aliases, and `f d` for the two floating widths.
//!
//! ```rust
//! use quotient_core::num::limits::{limits, ElementKind, LimitValue, TypeCode};
//!
//! let l = limits(TypeCode::I8);
//! assert_eq!(l.width, 1);
//! assert_eq!(l.kind, ElementKind::SignedInt);
//! assert_eq!(l.min, LimitValue::Int(-128));
//! assert_eq!(l.max, LimitValue::Int(127));
//! assert_eq!(TypeCode::from_char('d'), Some(TypeCode::F64));
//! ```

/// The numeric kind of an element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Two's-complement signed integer.
    SignedInt,
    /// Unsigned integer.
    UnsignedInt,
    /// IEEE-754 binary floating point.
    Float,
}

impl ElementKind {
    /// Returns `true` for both integer kinds.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, ElementKind::SignedInt | ElementKind::UnsignedInt)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::SignedInt => write!(f, "signed integer"),
            ElementKind::UnsignedInt => write!(f, "unsigned integer"),
            ElementKind::Float => write!(f, "float"),
        }
    }
}

/// Tag identifying the element type of a typed array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeCode {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    Isize,
    Usize,
    F32,
    F64,
}

impl TypeCode {
    /// Every supported code, in table order.
    pub const ALL: [TypeCode; 12] = [
        TypeCode::I8,
        TypeCode::U8,
        TypeCode::I16,
        TypeCode::U16,
        TypeCode::I32,
        TypeCode::U32,
        TypeCode::I64,
        TypeCode::U64,
        TypeCode::Isize,
        TypeCode::Usize,
        TypeCode::F32,
        TypeCode::F64,
    ];

    /// Parses an `array`-module type character.
    pub const fn from_char(c: char) -> Option<TypeCode> {
        match c {
            'b' => Some(TypeCode::I8),
            'B' => Some(TypeCode::U8),
            'h' => Some(TypeCode::I16),
            'H' => Some(TypeCode::U16),
            'i' => Some(TypeCode::I32),
            'I' => Some(TypeCode::U32),
            'q' => Some(TypeCode::I64),
            'Q' => Some(TypeCode::U64),
            'l' => Some(TypeCode::Isize),
            'L' => Some(TypeCode::Usize),
            'f' => Some(TypeCode::F32),
            'd' => Some(TypeCode::F64),
            _ => None,
        }
    }

    /// The `array`-module type character of this code.
    pub const fn as_char(self) -> char {
        match self {
            TypeCode::I8 => 'b',
            TypeCode::U8 => 'B',
            TypeCode::I16 => 'h',
            TypeCode::U16 => 'H',
            TypeCode::I32 => 'i',
            TypeCode::U32 => 'I',
            TypeCode::I64 => 'q',
            TypeCode::U64 => 'Q',
            TypeCode::Isize => 'l',
            TypeCode::Usize => 'L',
            TypeCode::F32 => 'f',
            TypeCode::F64 => 'd',
        }
    }

    /// The Rust name of the element type.
    pub const fn name(self) -> &'static str {
        match self {
            TypeCode::I8 => "i8",
            TypeCode::U8 => "u8",
            TypeCode::I16 => "i16",
            TypeCode::U16 => "u16",
            TypeCode::I32 => "i32",
            TypeCode::U32 => "u32",
            TypeCode::I64 => "i64",
            TypeCode::U64 => "u64",
            TypeCode::Isize => "isize",
            TypeCode::Usize => "usize",
            TypeCode::F32 => "f32",
            TypeCode::F64 => "f64",
        }
    }

    /// Kind of the type: signed, unsigned, or floating.
    #[inline]
    pub const fn kind(self) -> ElementKind {
        limits(self).kind
    }

    /// Size of one element in bytes.
    #[inline]
    pub const fn width(self) -> usize {
        limits(self).width
    }

    /// Returns `true` for `f32` and `f64`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self.kind(), ElementKind::Float)
    }

    /// Returns `true` for signed integers and floats.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self.kind(), ElementKind::SignedInt | ElementKind::Float)
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", self.name(), self.as_char())
    }
}

/// A type bound, exact for integers and as `f64` for floats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LimitValue {
    Int(i128),
    Float(f64),
}

impl std::fmt::Display for LimitValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitValue::Int(v) => write!(f, "{v}"),
            LimitValue::Float(v) => write!(f, "{v:e}"),
        }
    }
}

/// Registry entry for one element type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    pub code: TypeCode,
    /// Size of one element in bytes.
    pub width: usize,
    pub kind: ElementKind,
    /// Smallest representable value. For floats this is `-MAX`, not the
    /// smallest positive value.
    pub min: LimitValue,
    pub max: LimitValue,
}

impl Limits {
    /// Returns `true` if `value` lies within `[min, max]` of an integer type.
    /// Always `false` for floating codes.
    #[inline]
    pub const fn contains_int(&self, value: i128) -> bool {
        match (self.min, self.max) {
            (LimitValue::Int(min), LimitValue::Int(max)) => value >= min && value <= max,
            _ => false,
        }
    }
}

macro_rules! int_limits {
    ($code:expr, $t:ty, $kind:expr) => {
        Limits {
            code: $code,
            width: std::mem::size_of::<$t>(),
            kind: $kind,
            min: LimitValue::Int(<$t>::MIN as i128),
            max: LimitValue::Int(<$t>::MAX as i128),
        }
    };
}

macro_rules! float_limits {
    ($code:expr, $t:ty) => {
        Limits {
            code: $code,
            width: std::mem::size_of::<$t>(),
            kind: ElementKind::Float,
            min: LimitValue::Float(-(<$t>::MAX as f64)),
            max: LimitValue::Float(<$t>::MAX as f64),
        }
    };
}

/// The registry, ordered like `TypeCode::ALL`.
const LIMITS: [Limits; 12] = [
    int_limits!(TypeCode::I8, i8, ElementKind::SignedInt),
    int_limits!(TypeCode::U8, u8, ElementKind::UnsignedInt),
    int_limits!(TypeCode::I16, i16, ElementKind::SignedInt),
    int_limits!(TypeCode::U16, u16, ElementKind::UnsignedInt),
    int_limits!(TypeCode::I32, i32, ElementKind::SignedInt),
    int_limits!(TypeCode::U32, u32, ElementKind::UnsignedInt),
    int_limits!(TypeCode::I64, i64, ElementKind::SignedInt),
    int_limits!(TypeCode::U64, u64, ElementKind::UnsignedInt),
    int_limits!(TypeCode::Isize, isize, ElementKind::SignedInt),
    int_limits!(TypeCode::Usize, usize, ElementKind::UnsignedInt),
    float_limits!(TypeCode::F32, f32),
    float_limits!(TypeCode::F64, f64),
];

/// Looks up the registry entry for `code`.
#[inline]
pub const fn limits(code: TypeCode) -> Limits {
    LIMITS[code as usize]
}
