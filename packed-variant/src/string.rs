//! String views.

use crate::error::VariantError;
use crate::variant::{Variant, VariantType};

impl<'a> Variant<'a> {
    /// Creates a String variant viewing `s`. The bytes are not copied.
    ///
    /// Fails with [`VariantError::LengthExceeded`] if `s` is longer than [`MAX_LEN`](crate::MAX_LEN)
    /// bytes.
    pub fn from_string(s: &'a str) -> Result<Self, VariantError> {
        // Safety: u8 is the element type of String, and a str is valid UTF-8.
        unsafe { Self::new_slice(s.as_bytes(), VariantType::String) }
    }

    /// Creates a String variant that aliases the storage of `bytes`.
    ///
    /// This is the zero-copy form of building a `String` from bytes and then calling
    /// [`from_string`](Self::from_string) on it: the bytes are validated but not copied, and the
    /// variant reads them in place for as long as it lives.
    ///
    /// Fails with [`VariantError::InvalidUtf8`] if `bytes` is not UTF-8, and with
    /// [`VariantError::LengthExceeded`] if it is longer than [`MAX_LEN`](crate::MAX_LEN).
    pub fn from_string_aliasing_bytes(bytes: &'a [u8]) -> Result<Self, VariantError> {
        let s = core::str::from_utf8(bytes)?;
        Self::from_string(s)
    }

    /// Creates a String variant that aliases `bytes` without checking that they are UTF-8.
    ///
    /// # Safety
    ///
    /// `bytes` must be valid UTF-8.
    pub unsafe fn from_utf8_unchecked(bytes: &'a [u8]) -> Result<Self, VariantError> {
        // Safety: the caller guarantees the bytes are UTF-8.
        unsafe { Self::new_slice(bytes, VariantType::String) }
    }

    /// Returns the string view.
    ///
    /// Fails with [`VariantError::TypeMismatch`] if this is not a String.
    pub fn as_str(&self) -> Result<&'a str, VariantError> {
        self.expect_type(VariantType::String)?;
        // Safety: we checked the type.
        Ok(unsafe { self.str_unchecked() })
    }

    /// Reinterprets the view as a `str`.
    ///
    /// Safety: this variant must be a String.
    pub(crate) unsafe fn str_unchecked(&self) -> &'a str {
        // Safety: String views are built from UTF-8 and `resize` only stops on char boundaries.
        unsafe { core::str::from_utf8_unchecked(self.slice::<u8>()) }
    }

    /// Returns `true` if `len` is a char boundary of the full string this view was built from.
    pub(crate) fn is_str_boundary(&self, len: usize) -> bool {
        debug_assert_eq!(self.variant_type(), VariantType::String);
        // Safety: only called on String variants; the whole capacity is the original str.
        let full = unsafe { core::str::from_utf8_unchecked(self.capacity_slice::<u8>()) };
        full.is_char_boundary(len)
    }
}

impl<'a> TryFrom<&'a str> for Variant<'a> {
    type Error = VariantError;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::from_string(s)
    }
}
