//! ValueList and KeyValueList views.

use crate::error::VariantError;
use crate::variant::{Variant, VariantType};

/// An element of a KeyValueList.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyValue<'a> {
    /// The key.
    pub key: &'a str,
    /// The value stored under `key`.
    pub value: Variant<'a>,
}

impl<'a> KeyValue<'a> {
    /// Creates a key/value pair.
    #[must_use]
    pub const fn new(key: &'a str, value: Variant<'a>) -> Self {
        Self { key, value }
    }
}

impl<'a> From<(&'a str, Variant<'a>)> for KeyValue<'a> {
    fn from((key, value): (&'a str, Variant<'a>)) -> Self {
        Self { key, value }
    }
}

impl<'a> Variant<'a> {
    /// Creates a ValueList variant viewing `items`.
    ///
    /// Neither the slice nor the variants in it are copied; nested variants keep viewing their
    /// own storage. Fails with [`VariantError::LengthExceeded`] if `items` is longer than
    /// [`MAX_LEN`](crate::MAX_LEN).
    pub fn from_value_list(items: &'a [Variant<'a>]) -> Result<Self, VariantError> {
        // Safety: Variant is the element type of ValueList.
        unsafe { Self::new_slice(items, VariantType::ValueList) }
    }

    /// Creates a KeyValueList variant viewing `items`, with the same sharing rules as
    /// [`from_value_list`](Self::from_value_list).
    pub fn from_key_value_list(items: &'a [KeyValue<'a>]) -> Result<Self, VariantError> {
        // Safety: KeyValue is the element type of KeyValueList.
        unsafe { Self::new_slice(items, VariantType::KeyValueList) }
    }

    /// Returns the visible list of values.
    ///
    /// Fails with [`VariantError::TypeMismatch`] if this is not a ValueList.
    pub fn as_value_list(&self) -> Result<&'a [Variant<'a>], VariantError> {
        self.expect_type(VariantType::ValueList)?;
        // Safety: we checked the type.
        Ok(unsafe { self.slice::<Variant<'a>>() })
    }

    /// Returns the value at `index`.
    ///
    /// Fails with [`VariantError::TypeMismatch`] if this is not a ValueList and with
    /// [`VariantError::IndexOutOfRange`] if `index >= len()`.
    pub fn value_at(&self, index: usize) -> Result<Variant<'a>, VariantError> {
        let items = self.as_value_list()?;
        items
            .get(index)
            .copied()
            .ok_or(VariantError::IndexOutOfRange {
                index,
                len: items.len(),
            })
    }

    /// Returns the visible list of key/value pairs.
    ///
    /// Fails with [`VariantError::TypeMismatch`] if this is not a KeyValueList.
    pub fn as_key_value_list(&self) -> Result<&'a [KeyValue<'a>], VariantError> {
        self.expect_type(VariantType::KeyValueList)?;
        // Safety: we checked the type.
        Ok(unsafe { self.slice::<KeyValue<'a>>() })
    }

    /// Returns the key/value pair at `index`.
    ///
    /// Fails with [`VariantError::TypeMismatch`] if this is not a KeyValueList and with
    /// [`VariantError::IndexOutOfRange`] if `index >= len()`.
    pub fn key_value_at(&self, index: usize) -> Result<&'a KeyValue<'a>, VariantError> {
        let items = self.as_key_value_list()?;
        items.get(index).ok_or(VariantError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }

    /// Looks up the first pair whose key is `key` by linear scan.
    ///
    /// Returns `Ok(None)` if no visible pair has that key.
    pub fn get(&self, key: &str) -> Result<Option<Variant<'a>>, VariantError> {
        Ok(self
            .as_key_value_list()?
            .iter()
            .find(|kv| kv.key == key)
            .map(|kv| kv.value))
    }
}

impl<'a> TryFrom<&'a [Variant<'a>]> for Variant<'a> {
    type Error = VariantError;

    fn try_from(items: &'a [Variant<'a>]) -> Result<Self, Self::Error> {
        Self::from_value_list(items)
    }
}

impl<'a> TryFrom<&'a [KeyValue<'a>]> for Variant<'a> {
    type Error = VariantError;

    fn try_from(items: &'a [KeyValue<'a>]) -> Result<Self, Self::Error> {
        Self::from_key_value_list(items)
    }
}
