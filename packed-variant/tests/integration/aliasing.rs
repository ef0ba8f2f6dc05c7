//! Views share the caller's storage instead of copying it.

use packed_variant::{KeyValue, Variant};
use packed_variant_testhelpers::{IPanic, test};

#[test]
fn bytes_view_points_into_storage() -> Result<(), IPanic> {
    let storage = vec![1u8, 2, 3, 4];
    let v = Variant::from_bytes(&storage)?;
    assert_eq!(v.as_bytes()?.as_ptr(), storage.as_ptr());
    Ok(())
}

#[test]
fn value_list_view_points_into_storage() -> Result<(), IPanic> {
    let storage = vec![Variant::from_int(1); 16];
    let v = Variant::from_value_list(&storage)?;
    assert_eq!(v.as_value_list()?.as_ptr(), storage.as_ptr());
    assert!(core::ptr::eq(v.as_value_list()?, storage.as_slice()));
    Ok(())
}

#[test]
fn key_value_list_view_points_into_storage() -> Result<(), IPanic> {
    let storage = [
        KeyValue::new("a", Variant::from_int(1)),
        KeyValue::new("b", Variant::from_int(2)),
    ];
    let v = Variant::from_key_value_list(&storage)?;
    assert!(core::ptr::eq(v.key_value_at(1)?, &storage[1]));
    Ok(())
}

#[test]
fn storage_changes_show_through_new_views() -> Result<(), IPanic> {
    let mut storage = [KeyValue::default(); 2];
    storage[0] = KeyValue::new("key1", Variant::from_string("value1")?);
    let before = Variant::from_key_value_list(&storage)?.to_string();
    assert_eq!(before, r#"{"key1":"value1","":}"#);

    storage[1] = KeyValue::new("key2\"", Variant::from_float64(1.23));
    let after = Variant::from_key_value_list(&storage)?;
    assert_eq!(after.to_string(), r#"{"key1":"value1","key2\"":1.23}"#);
    Ok(())
}

#[test]
fn copies_share_storage_and_window_state_is_per_copy() -> Result<(), IPanic> {
    let storage = *b"abcdef";
    let original = Variant::from_bytes(&storage)?;
    let mut narrowed = original;
    narrowed.resize(2)?;

    assert_eq!(original.as_bytes()?, b"abcdef");
    assert_eq!(narrowed.as_bytes()?, b"ab");
    assert_eq!(original.as_bytes()?.as_ptr(), narrowed.as_bytes()?.as_ptr());
    Ok(())
}

#[test]
fn copies_can_be_read_from_many_threads() -> Result<(), IPanic> {
    let text = String::from("shared");
    let items = [Variant::from_string(&text)?, Variant::from_int(7)];
    let list = Variant::from_value_list(&items)?;

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let copy = list;
            scope.spawn(move || {
                assert_eq!(copy.value_at(0).and_then(|v| v.as_str()), Ok("shared"));
                assert_eq!(copy.value_at(1).map(|v| v.int_val()), Ok(7));
            });
        }
    });
    Ok(())
}
