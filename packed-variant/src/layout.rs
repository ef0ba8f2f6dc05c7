//! Bit layout of a `Variant`.
//!
//! # Memory Layout
//!
//! ```text
//! ┌──────────────────────┬──────────────────────────────┬──────┬──────────────────────┐
//! │         ptr          │        len_and_type          │      │      cap_or_val      │
//! │  (pointer width)     ├──────────────────────────────┼──────┤       (64 bits)      │
//! │                      │ len (pointer width - 3 bits) │ type │                      │
//! │                      │                              │(3bit)│                      │
//! └──────────────────────┴──────────────────────────────┴──────┴──────────────────────┘
//! ```
//!
//! `ptr` and `len_and_type` sit where a slice keeps its data pointer and length. The length is
//! shifted up by [`TYPE_FIELD_BITS`], so the largest encodable length is [`MAX_LEN`], which is
//! the largest slice length (`isize::MAX`) shifted down by the same amount.
//!
//! | Target  | ptr | len_and_type | cap_or_val | size | `MAX_LEN`     |
//! |---------|-----|--------------|------------|------|---------------|
//! | 64-bit  | 8   | 8            | 8          | 24   | 2^60 - 1      |
//! | 32-bit  | 4   | 4            | 8          | 16   | 2^28 - 1      |
//!
//! `cap_or_val` is 64 bits wide on both, so Int and Float64 carry a full 64-bit payload on
//! 32-bit targets too.

use crate::error::VariantError;
use crate::variant::VariantType;

/// Number of low-order bits of the length word that hold the [`VariantType`].
pub const TYPE_FIELD_BITS: u32 = 3;

/// Mask selecting the [`VariantType`] bits of the length word.
pub const TYPE_FIELD_MASK: usize = (1 << TYPE_FIELD_BITS) - 1;

#[cfg(target_pointer_width = "64")]
mod arch {
    /// Size of a `Variant` in bytes.
    pub const VARIANT_SIZE: usize = 24;

    /// Largest length or capacity a `Variant` can hold.
    pub const MAX_LEN: usize = (1 << 60) - 1;
}

#[cfg(target_pointer_width = "32")]
mod arch {
    /// Size of a `Variant` in bytes.
    pub const VARIANT_SIZE: usize = 16;

    /// Largest length or capacity a `Variant` can hold.
    pub const MAX_LEN: usize = (1 << 28) - 1;
}

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("packed-variant supports 32-bit and 64-bit targets only");

pub use arch::{MAX_LEN, VARIANT_SIZE};

static_assertions::const_assert_eq!(MAX_LEN, (isize::MAX as usize) >> TYPE_FIELD_BITS);
static_assertions::const_assert!(VariantType::KeyValueList as usize <= TYPE_FIELD_MASK);

/// Packs a length and a type tag into one word.
///
/// Fails with [`VariantError::LengthExceeded`] when the length would spill into the sign bit.
#[inline]
pub(crate) fn pack(len: usize, variant_type: VariantType) -> Result<usize, VariantError> {
    if len > MAX_LEN {
        crate::debug!(len, max = MAX_LEN, "length does not fit the packed length field");
        return Err(VariantError::LengthExceeded { len });
    }
    Ok((len << TYPE_FIELD_BITS) | variant_type as usize)
}

/// Replaces the length bits of a packed word, keeping the type tag.
#[inline]
pub(crate) const fn repack(word: usize, len: usize) -> usize {
    (word & TYPE_FIELD_MASK) | (len << TYPE_FIELD_BITS)
}

/// Extracts the length bits of a packed word.
#[inline]
pub(crate) const fn unpack_len(word: usize) -> usize {
    word >> TYPE_FIELD_BITS
}
