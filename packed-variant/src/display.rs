//! Human-readable rendering of a `Variant`.
//!
//! The output is meant for logs and debugging:
//!
//! | Type         | Rendering                         |
//! |--------------|-----------------------------------|
//! | Empty        | (nothing)                         |
//! | Int          | `123`                             |
//! | Float64      | `1.23` (shortest round-trip form) |
//! | String       | `"abc"` with Rust escaping        |
//! | Bytes        | `0xAFCD34`                        |
//! | ValueList    | `[10,"abc"]`                      |
//! | KeyValueList | `{"intval":10}`                   |
//!
//! The alternate flag (`{:#}`) separates elements with `", "` and keys with `": "`.

use core::fmt::{self, Display, Formatter};

use crate::list::KeyValue;
use crate::variant::{Destructured, Variant};

impl Display for Variant<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let separator = if f.alternate() { ", " } else { "," };

        match self.destructure() {
            Destructured::Empty => Ok(()),
            Destructured::Int(v) => write!(f, "{v}"),
            Destructured::Float64(v) => write!(f, "{v}"),
            Destructured::String(s) => write!(f, "{s:?}"),
            Destructured::Bytes(bytes) => {
                f.write_str("0x")?;
                for byte in bytes {
                    write!(f, "{byte:02X}")?;
                }
                Ok(())
            }
            Destructured::ValueList(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(separator)?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Destructured::KeyValueList(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(separator)?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Display for KeyValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:?}: ", self.key)?;
        } else {
            write!(f, "{:?}:", self.key)?;
        }
        Display::fmt(&self.value, f)
    }
}

#[cfg(feature = "alloc")]
impl Variant<'_> {
    /// Renders the value with its [`Display`] format.
    #[must_use]
    pub fn to_display_string(&self) -> alloc::string::String {
        use alloc::string::ToString;
        self.to_string()
    }
}
