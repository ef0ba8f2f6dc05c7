//! Byte slice views.

use crate::error::VariantError;
use crate::variant::{Variant, VariantType};

impl<'a> Variant<'a> {
    /// Creates a Bytes variant viewing `bytes`. Nothing is copied.
    ///
    /// Fails with [`VariantError::LengthExceeded`] if `bytes` is longer than
    /// [`MAX_LEN`](crate::MAX_LEN).
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, VariantError> {
        // Safety: u8 is the element type of Bytes.
        unsafe { Self::new_slice(bytes, VariantType::Bytes) }
    }

    /// Returns the visible bytes.
    ///
    /// Fails with [`VariantError::TypeMismatch`] if this is not Bytes.
    pub fn as_bytes(&self) -> Result<&'a [u8], VariantError> {
        self.expect_type(VariantType::Bytes)?;
        // Safety: we checked the type.
        Ok(unsafe { self.slice::<u8>() })
    }
}

impl<'a> TryFrom<&'a [u8]> for Variant<'a> {
    type Error = VariantError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}
