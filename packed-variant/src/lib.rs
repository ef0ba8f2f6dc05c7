//! `packed-variant` provides `Variant`, a three-word tagged union that holds an int, a float,
//! a string, a byte slice, an ordered list of `Variant`, an ordered key/value list, or nothing.
//!
//! # Features
//!
//! - **Fixed size**: 24 bytes on 64-bit targets, 16 bytes on 32-bit targets
//! - **Seven value types**: Empty, Int, Float64, String, Bytes, ValueList, KeyValueList
//! - **Zero-copy**: variable-length types are views over storage the caller owns
//! - **`no_std` compatible**: the value type itself needs neither `std` nor `alloc`
//!
//! # Design
//!
//! The discriminant lives in the low [`TYPE_FIELD_BITS`] bits of the word that also holds the
//! length, the same position a slice or `str` keeps its length. Reading the type or the length is
//! a single mask or shift. The third word holds the capacity of the viewed storage, or the bits
//! of the scalar for Int and Float64.
//!
//! ```
//! use packed_variant::{KeyValue, Variant, VariantType};
//!
//! let items = [Variant::from_int(10), Variant::from_string("abc")?];
//! let list = Variant::from_value_list(&items)?;
//! assert_eq!(list.variant_type(), VariantType::ValueList);
//! assert_eq!(list.to_string(), r#"[10,"abc"]"#);
//!
//! let fields = [KeyValue::new("list", list)];
//! let object = Variant::from_key_value_list(&fields)?;
//! assert_eq!(object.key_value_at(0)?.value.value_at(1)?.as_str()?, "abc");
//! # Ok::<(), packed_variant::VariantError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}

mod layout;
pub use layout::{MAX_LEN, TYPE_FIELD_BITS, TYPE_FIELD_MASK, VARIANT_SIZE};

mod error;
pub use error::VariantError;

mod variant;
pub use variant::*;

mod string;

mod bytes;

mod list;
pub use list::KeyValue;

mod display;
