//! Core `Variant` type: a tag, a length and a payload packed into three words.
//!
//! ## Tag Allocation
//!
//! | Tag | Type         | `ptr`           | `len` bits    | `cap_or_val`            |
//! |-----|--------------|-----------------|---------------|-------------------------|
//! | 0   | Empty        | null            | 0             | 0                       |
//! | 1   | Int          | null            | 0             | `i64` bits              |
//! | 2   | Float64      | null            | 0             | IEEE-754 bits           |
//! | 3   | String       | first byte      | byte length   | byte length at creation |
//! | 4   | Bytes        | first byte      | byte length   | capacity                |
//! | 5   | ValueList    | first `Variant` | element count | capacity                |
//! | 6   | KeyValueList | first `KeyValue`| element count | capacity                |
//! | 7   | (invalid)    |                 |               |                         |
//!
//! An all-zero `Variant` decodes as Empty.

use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ptr;

use crate::error::VariantError;
use crate::layout::{self, MAX_LEN, TYPE_FIELD_MASK, VARIANT_SIZE};
use crate::list::KeyValue;

/// The type of the value stored in a [`Variant`].
///
/// The discriminants are the tag values stored in the low bits of the length word.
#[repr(usize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariantType {
    /// No value. The type of a zero-initialised `Variant`.
    Empty = 0,
    /// An `i64`.
    Int = 1,
    /// An `f64`.
    Float64 = 2,
    /// A UTF-8 string view.
    String = 3,
    /// A byte slice view.
    Bytes = 4,
    /// A view over a slice of `Variant`.
    ValueList = 5,
    /// A view over a slice of [`KeyValue`].
    KeyValueList = 6,
}

impl VariantType {
    /// Decodes the tag bits of a length word.
    #[inline]
    pub(crate) const fn from_bits(bits: usize) -> Self {
        match bits & TYPE_FIELD_MASK {
            0 => VariantType::Empty,
            1 => VariantType::Int,
            2 => VariantType::Float64,
            3 => VariantType::String,
            4 => VariantType::Bytes,
            5 => VariantType::ValueList,
            6 => VariantType::KeyValueList,
            _ => unreachable!(),
        }
    }

    /// Returns `true` for the types that view caller storage and carry a length.
    #[must_use]
    pub const fn is_slice(self) -> bool {
        matches!(
            self,
            VariantType::String
                | VariantType::Bytes
                | VariantType::ValueList
                | VariantType::KeyValueList
        )
    }

    /// Returns `true` for Empty, Int and Float64.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !self.is_slice()
    }

    /// The name of the type, as used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            VariantType::Empty => "Empty",
            VariantType::Int => "Int",
            VariantType::Float64 => "Float64",
            VariantType::String => "String",
            VariantType::Bytes => "Bytes",
            VariantType::ValueList => "ValueList",
            VariantType::KeyValueList => "KeyValueList",
        }
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tagged union of an int, a float, a string, bytes, a list, a key/value list, or nothing.
///
/// `Variant` is three words and never allocates. String, Bytes, ValueList and KeyValueList are
/// views: they point into the slice they were built from, which the caller owns and which must
/// outlive the view (the lifetime `'a` enforces this). Copies of a `Variant` share that storage.
///
/// Check [`variant_type`](Self::variant_type) before calling a typed accessor. For slice types a
/// mismatched accessor returns [`VariantError::TypeMismatch`]; [`int_val`](Self::int_val) and
/// [`float64_val`](Self::float64_val) instead return an unspecified value.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Variant<'a> {
    ptr: *const (),
    len_and_type: usize,
    cap_or_val: u64,
    _storage: PhantomData<&'a ()>,
}

// Safety: a Variant only ever hands out shared references to its storage, and every element
// type it can view (u8, str, Variant, KeyValue) is Sync.
unsafe impl Send for Variant<'_> {}
unsafe impl Sync for Variant<'_> {}

static_assertions::assert_eq_size!(Variant<'static>, [u8; VARIANT_SIZE]);
static_assertions::const_assert_eq!(core::mem::offset_of!(Variant<'static>, ptr), 0);
static_assertions::const_assert_eq!(
    core::mem::offset_of!(Variant<'static>, len_and_type),
    core::mem::size_of::<*const ()>()
);

impl<'a> Variant<'a> {
    /// The Empty variant.
    pub const EMPTY: Self = Self::new_scalar(VariantType::Empty, 0);

    // === Internal constructors ===

    const fn new_scalar(variant_type: VariantType, bits: u64) -> Self {
        Self {
            ptr: ptr::null(),
            len_and_type: variant_type as usize,
            cap_or_val: bits,
            _storage: PhantomData,
        }
    }

    /// Creates a view over `items` tagged with `variant_type`.
    ///
    /// Safety: `T` must be the element type the accessors for `variant_type` read back
    /// (`u8` for String and Bytes, `Variant` for ValueList, `KeyValue` for KeyValueList), and
    /// for String `items` must be valid UTF-8.
    pub(crate) unsafe fn new_slice<T>(
        items: &'a [T],
        variant_type: VariantType,
    ) -> Result<Self, VariantError> {
        debug_assert!(variant_type.is_slice());
        let len_and_type = layout::pack(items.len(), variant_type)?;
        Ok(Self {
            ptr: items.as_ptr().cast(),
            len_and_type,
            cap_or_val: items.len() as u64,
            _storage: PhantomData,
        })
    }

    // === Internal accessors ===

    /// Returns `TypeMismatch` unless this variant holds `expected`.
    #[inline]
    pub(crate) fn expect_type(&self, expected: VariantType) -> Result<(), VariantError> {
        let actual = self.variant_type();
        if actual == expected {
            Ok(())
        } else {
            Err(VariantError::TypeMismatch { expected, actual })
        }
    }

    /// Reinterprets `ptr` and the length bits as a slice.
    ///
    /// Safety: this variant must hold a slice type whose element type is `T`.
    #[inline]
    pub(crate) unsafe fn slice<T>(&self) -> &'a [T] {
        debug_assert!(self.is_slice());
        // Safety: ptr came from a `&'a [T]` at least `len` long, see `new_slice`.
        unsafe { core::slice::from_raw_parts(self.ptr.cast::<T>(), self.len()) }
    }

    /// Like [`slice`](Self::slice) but covering the whole capacity, hidden elements included.
    ///
    /// Safety: same as `slice`.
    #[inline]
    pub(crate) unsafe fn capacity_slice<T>(&self) -> &'a [T] {
        debug_assert!(self.is_slice());
        // Safety: capacity is the length of the slice the view was built from.
        unsafe { core::slice::from_raw_parts(self.ptr.cast::<T>(), self.cap_or_val as usize) }
    }

    // === Scalar constructors ===

    /// Creates an Empty variant.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Creates an Int variant.
    #[must_use]
    pub const fn from_int(v: i64) -> Self {
        Self::new_scalar(VariantType::Int, v as u64)
    }

    /// Creates a Float64 variant holding the exact bit pattern of `v`, NaN payloads included.
    #[must_use]
    pub const fn from_float64(v: f64) -> Self {
        Self::new_scalar(VariantType::Float64, v.to_bits())
    }

    // === Type checking ===

    /// Returns the type of the stored value. Never fails.
    #[inline]
    #[must_use]
    pub const fn variant_type(&self) -> VariantType {
        VariantType::from_bits(self.len_and_type)
    }

    /// Returns `true` for String, Bytes, ValueList and KeyValueList.
    #[inline]
    #[must_use]
    pub const fn is_slice(&self) -> bool {
        self.variant_type().is_slice()
    }

    /// Returns `true` for Empty, Int and Float64.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        self.variant_type().is_scalar()
    }

    // === Scalar accessors ===

    /// Returns the stored int.
    ///
    /// The result is unspecified if the type is not [`VariantType::Int`]; use
    /// [`as_int`](Self::as_int) for a checked read.
    #[inline]
    #[must_use]
    pub const fn int_val(&self) -> i64 {
        self.cap_or_val as i64
    }

    /// Returns the stored int, or `None` if this is not an Int.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self.variant_type() {
            VariantType::Int => Some(self.int_val()),
            _ => None,
        }
    }

    /// Returns the stored float.
    ///
    /// The result is unspecified if the type is not [`VariantType::Float64`]; use
    /// [`as_float64`](Self::as_float64) for a checked read.
    #[inline]
    #[must_use]
    pub const fn float64_val(&self) -> f64 {
        f64::from_bits(self.cap_or_val)
    }

    /// Returns the stored float, or `None` if this is not a Float64.
    #[must_use]
    pub const fn as_float64(&self) -> Option<f64> {
        match self.variant_type() {
            VariantType::Float64 => Some(self.float64_val()),
            _ => None,
        }
    }

    // === Length and capacity ===

    /// Returns the length of a String (in bytes), Bytes, ValueList or KeyValueList.
    ///
    /// Returns 0 for the scalar types.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        layout::unpack_len(self.len_and_type)
    }

    /// Returns the capacity of the viewed storage, or 0 for the scalar types.
    ///
    /// Elements between `len()` and `capacity()` are hidden by a previous
    /// [`resize`](Self::resize) and can be shown again by growing.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        if self.is_slice() {
            self.cap_or_val as usize
        } else {
            0
        }
    }

    /// Moves the end of the visible window to `new_len`, within the existing capacity.
    ///
    /// Nothing is reallocated or copied; growing shows elements that were hidden by an earlier
    /// shrink. Fails with [`VariantError::UnsupportedOperation`] on Empty, Int and Float64, and with
    /// [`VariantError::InvalidResize`] if `new_len` is larger than the capacity or than
    /// [`MAX_LEN`], or, for a String, does not fall on a char boundary.
    pub fn resize(&mut self, new_len: usize) -> Result<(), VariantError> {
        let variant_type = self.variant_type();
        if variant_type.is_scalar() {
            crate::debug!(%variant_type, new_len, "resize on a scalar variant");
            return Err(VariantError::UnsupportedOperation { variant_type });
        }

        let capacity = self.capacity();
        let fits = new_len <= capacity && new_len <= MAX_LEN;
        if !fits || (variant_type == VariantType::String && !self.is_str_boundary(new_len)) {
            crate::debug!(%variant_type, new_len, capacity, "resize rejected");
            return Err(VariantError::InvalidResize {
                requested: new_len,
                capacity,
            });
        }

        crate::trace!(%variant_type, from = self.len(), to = new_len, "resize");
        self.len_and_type = layout::repack(self.len_and_type, new_len);
        Ok(())
    }

    // === Destructuring ===

    /// Returns the stored value as an enum for pattern matching.
    #[must_use]
    pub fn destructure(&self) -> Destructured<'a> {
        // Safety: each arm reads the element type its tag is constructed with.
        unsafe {
            match self.variant_type() {
                VariantType::Empty => Destructured::Empty,
                VariantType::Int => Destructured::Int(self.int_val()),
                VariantType::Float64 => Destructured::Float64(self.float64_val()),
                VariantType::String => Destructured::String(self.str_unchecked()),
                VariantType::Bytes => Destructured::Bytes(self.slice::<u8>()),
                VariantType::ValueList => Destructured::ValueList(self.slice::<Variant<'a>>()),
                VariantType::KeyValueList => {
                    Destructured::KeyValueList(self.slice::<KeyValue<'a>>())
                }
            }
        }
    }
}

/// Enum for destructuring a [`Variant`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Destructured<'a> {
    /// No value
    Empty,
    /// Int value
    Int(i64),
    /// Float64 value
    Float64(f64),
    /// String view
    String(&'a str),
    /// Bytes view
    Bytes(&'a [u8]),
    /// List of values
    ValueList(&'a [Variant<'a>]),
    /// List of key/value pairs
    KeyValueList(&'a [KeyValue<'a>]),
}

impl Destructured<'_> {
    /// Returns the type of the destructured value.
    #[must_use]
    pub const fn variant_type(&self) -> VariantType {
        match self {
            Destructured::Empty => VariantType::Empty,
            Destructured::Int(_) => VariantType::Int,
            Destructured::Float64(_) => VariantType::Float64,
            Destructured::String(_) => VariantType::String,
            Destructured::Bytes(_) => VariantType::Bytes,
            Destructured::ValueList(_) => VariantType::ValueList,
            Destructured::KeyValueList(_) => VariantType::KeyValueList,
        }
    }
}

impl<'a> TryFrom<Destructured<'a>> for Variant<'a> {
    type Error = VariantError;

    fn try_from(value: Destructured<'a>) -> Result<Self, Self::Error> {
        match value {
            Destructured::Empty => Ok(Variant::EMPTY),
            Destructured::Int(v) => Ok(Variant::from_int(v)),
            Destructured::Float64(v) => Ok(Variant::from_float64(v)),
            Destructured::String(s) => Variant::from_string(s),
            Destructured::Bytes(b) => Variant::from_bytes(b),
            Destructured::ValueList(items) => Variant::from_value_list(items),
            Destructured::KeyValueList(items) => Variant::from_key_value_list(items),
        }
    }
}

// === PartialEq, Eq ===

impl PartialEq for Variant<'_> {
    /// Compares by type and content. Floats compare by bit pattern, and only the visible part of
    /// a list takes part.
    fn eq(&self, other: &Self) -> bool {
        match (self.destructure(), other.destructure()) {
            (Destructured::Empty, Destructured::Empty) => true,
            (Destructured::Int(a), Destructured::Int(b)) => a == b,
            (Destructured::Float64(a), Destructured::Float64(b)) => a.to_bits() == b.to_bits(),
            (Destructured::String(a), Destructured::String(b)) => a == b,
            (Destructured::Bytes(a), Destructured::Bytes(b)) => a == b,
            (Destructured::ValueList(a), Destructured::ValueList(b)) => a == b,
            (Destructured::KeyValueList(a), Destructured::KeyValueList(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Variant<'_> {}

// === Hash ===

impl Hash for Variant<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variant_type().hash(state);

        match self.destructure() {
            Destructured::Empty => {}
            Destructured::Int(v) => v.hash(state),
            Destructured::Float64(v) => v.to_bits().hash(state),
            Destructured::String(s) => s.hash(state),
            Destructured::Bytes(b) => b.hash(state),
            Destructured::ValueList(items) => items.hash(state),
            Destructured::KeyValueList(items) => items.hash(state),
        }
    }
}

// === Debug ===

impl Debug for Variant<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.destructure(), f)
    }
}

// === Default ===

impl Default for Variant<'_> {
    fn default() -> Self {
        Self::EMPTY
    }
}

// === From implementations ===

impl From<i64> for Variant<'_> {
    fn from(v: i64) -> Self {
        Self::from_int(v)
    }
}

impl From<f64> for Variant<'_> {
    fn from(v: f64) -> Self {
        Self::from_float64(v)
    }
}
