use core::fmt;

use crate::variant::VariantType;

/// Errors returned by `Variant` constructors and accessors.
///
/// Each of these is a broken calling contract rather than a transient condition: callers are
/// expected to check [`Variant::variant_type`](crate::Variant::variant_type) before calling a
/// type-specific accessor, the same way they would check a slice length before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantError {
    /// The input is longer than the packed length field can hold.
    LengthExceeded {
        /// Length of the rejected input.
        len: usize,
    },

    /// A typed accessor was called on a variant of another type.
    TypeMismatch {
        /// The type the accessor reads.
        expected: VariantType,
        /// The type stored in the variant.
        actual: VariantType,
    },

    /// An indexed accessor was called with an index at or past the current length.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The current length of the list.
        len: usize,
    },

    /// `resize` asked for a length the storage cannot show.
    InvalidResize {
        /// The requested length.
        requested: usize,
        /// Capacity of the viewed storage.
        capacity: usize,
    },

    /// The operation does not apply to this type (e.g. resizing an Int).
    UnsupportedOperation {
        /// The type stored in the variant.
        variant_type: VariantType,
    },

    /// The bytes handed to a string constructor are not UTF-8.
    InvalidUtf8(core::str::Utf8Error),
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantError::LengthExceeded { len } => {
                write!(
                    f,
                    "length {len} exceeds the maximum variant length {}",
                    crate::MAX_LEN
                )
            }
            VariantError::TypeMismatch { expected, actual } => {
                write!(f, "variant is not a {expected} (it holds {actual})")
            }
            VariantError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            VariantError::InvalidResize {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "cannot resize to {requested}: capacity is {capacity} or the length is not a valid boundary"
                )
            }
            VariantError::UnsupportedOperation { variant_type } => {
                write!(f, "operation not supported on a {variant_type} variant")
            }
            VariantError::InvalidUtf8(err) => write!(f, "string bytes are not UTF-8: {err}"),
        }
    }
}

impl core::error::Error for VariantError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            VariantError::InvalidUtf8(err) => Some(err),
            _ => None,
        }
    }
}

impl From<core::str::Utf8Error> for VariantError {
    fn from(err: core::str::Utf8Error) -> Self {
        VariantError::InvalidUtf8(err)
    }
}
