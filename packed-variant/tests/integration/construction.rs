//! Every constructor, read back through its own accessor.

use packed_variant::{KeyValue, MAX_LEN, Variant, VariantError, VariantType};
use packed_variant_testhelpers::{IPanic, test};

#[test]
fn empty_variants_agree() {
    assert_eq!(Variant::empty(), Variant::EMPTY);
    assert_eq!(Variant::default(), Variant::EMPTY);
    assert_eq!(Variant::empty().variant_type(), VariantType::Empty);
}

#[test]
fn int_round_trip() {
    let v = Variant::from_int(123);
    assert_eq!(v.variant_type(), VariantType::Int);
    assert_eq!(v.int_val(), 123);
    assert_eq!(v.to_string(), "123");
}

#[test]
fn float_round_trip_is_bit_exact() {
    let signalling_nan = f64::from_bits(0x7FF0_0000_0000_0001);
    for f in [1234.567, -0.0, f64::MAX, signalling_nan] {
        let v = Variant::from(f);
        assert_eq!(v.variant_type(), VariantType::Float64);
        assert_eq!(v.float64_val().to_bits(), f.to_bits());
    }
}

#[test]
fn string_round_trip() -> Result<(), IPanic> {
    let s = String::from("abcdef");
    let v = Variant::from_string(&s)?;
    assert_eq!(v.variant_type(), VariantType::String);
    assert_eq!(v.as_str()?, s);
    assert_eq!(v.len(), 6);
    Ok(())
}

#[test]
fn string_from_aliased_bytes() -> Result<(), IPanic> {
    let buf = b"zero-copy".to_vec();
    let v = Variant::from_string_aliasing_bytes(&buf)?;
    assert_eq!(v, Variant::from_string("zero-copy")?);
    Ok(())
}

#[test]
fn bytes_round_trip() -> Result<(), IPanic> {
    let data = vec![0xAF, 0xCD, 0x34];
    let v = Variant::try_from(data.as_slice())?;
    assert_eq!(v.variant_type(), VariantType::Bytes);
    assert_eq!(v.as_bytes()?, data.as_slice());
    Ok(())
}

#[test]
fn value_list_round_trip() -> Result<(), IPanic> {
    let items = [Variant::from_int(10), Variant::from_string("abc")?];
    let v = Variant::from_value_list(&items)?;
    assert_eq!(v.variant_type(), VariantType::ValueList);
    assert_eq!(v.len(), 2);
    assert_eq!(v.as_value_list()?, &items);
    assert_eq!(v.value_at(1)?, Variant::from_string("abc")?);
    Ok(())
}

#[test]
fn key_value_list_round_trip() -> Result<(), IPanic> {
    let items = [
        KeyValue::new("intval", Variant::from_int(10)),
        KeyValue::from(("name", Variant::from_string("abc")?)),
    ];
    let v = Variant::from_key_value_list(&items)?;
    assert_eq!(v.variant_type(), VariantType::KeyValueList);
    assert_eq!(v.as_key_value_list()?, &items);
    assert_eq!(v.key_value_at(0)?.key, "intval");
    assert_eq!(v.get("name")?, Some(Variant::from_string("abc")?));
    Ok(())
}

#[test]
fn nested_lists_keep_their_own_storage() -> Result<(), IPanic> {
    let inner = [Variant::from_int(10), Variant::from_string("abc")?];
    let list = Variant::from_value_list(&inner)?;
    let fields = [
        KeyValue::new("intval", Variant::from_int(10)),
        KeyValue::new("a string", Variant::from_string("abc")?),
        KeyValue::new("list", list),
    ];
    let object = Variant::from_key_value_list(&fields)?;

    let nested = object.key_value_at(2)?.value;
    assert_eq!(nested.variant_type(), VariantType::ValueList);
    assert_eq!(nested.as_value_list()?.as_ptr(), inner.as_ptr());
    assert_eq!(nested.value_at(0)?.int_val(), 10);
    Ok(())
}

#[test]
fn every_type_is_exactly_one_type() -> Result<(), IPanic> {
    let bytes = [1u8];
    let values = [Variant::EMPTY];
    let pairs = [KeyValue::default()];
    let all = [
        Variant::EMPTY,
        Variant::from_int(1),
        Variant::from_float64(1.0),
        Variant::from_string("s")?,
        Variant::from_bytes(&bytes)?,
        Variant::from_value_list(&values)?,
        Variant::from_key_value_list(&pairs)?,
    ];

    for v in all {
        let t = v.variant_type();
        let mismatch = |expected| VariantError::TypeMismatch {
            expected,
            actual: t,
        };
        if t != VariantType::String {
            assert_eq!(v.as_str(), Err(mismatch(VariantType::String)));
        }
        if t != VariantType::Bytes {
            assert_eq!(v.as_bytes(), Err(mismatch(VariantType::Bytes)));
        }
        if t != VariantType::ValueList {
            assert_eq!(v.as_value_list(), Err(mismatch(VariantType::ValueList)));
            assert_eq!(v.value_at(0), Err(mismatch(VariantType::ValueList)));
        }
        if t != VariantType::KeyValueList {
            assert_eq!(
                v.as_key_value_list(),
                Err(mismatch(VariantType::KeyValueList))
            );
            assert_eq!(v.key_value_at(0), Err(mismatch(VariantType::KeyValueList)));
        }
        assert_eq!(v.as_int().is_some(), t == VariantType::Int);
        assert_eq!(v.as_float64().is_some(), t == VariantType::Float64);
        assert_eq!(v.is_slice(), t.is_slice());
    }
    Ok(())
}

#[test]
fn max_len_is_exposed_per_target() {
    assert_eq!(MAX_LEN, (isize::MAX as usize) >> packed_variant::TYPE_FIELD_BITS);
    assert_eq!(
        core::mem::size_of::<Variant<'_>>(),
        packed_variant::VARIANT_SIZE
    );
}

// Allocating MAX_LEN bytes is only feasible where MAX_LEN is 2^28 - 1.
#[cfg(target_pointer_width = "32")]
mod length_boundary {
    use super::*;

    #[test]
    fn bytes_at_max_len_are_accepted() {
        let data = vec![0u8; MAX_LEN];
        assert_eq!(Variant::from_bytes(&data).map(|v| v.len()), Ok(MAX_LEN));
    }

    #[test]
    fn bytes_past_max_len_are_rejected() {
        let data = vec![0u8; MAX_LEN + 1];
        assert_eq!(
            Variant::from_bytes(&data),
            Err(VariantError::LengthExceeded { len: MAX_LEN + 1 })
        );
    }

    #[test]
    fn strings_past_max_len_are_rejected() {
        let data = vec![b'a'; MAX_LEN + 1];
        assert_eq!(
            Variant::from_string_aliasing_bytes(&data),
            Err(VariantError::LengthExceeded { len: MAX_LEN + 1 })
        );
    }
}
