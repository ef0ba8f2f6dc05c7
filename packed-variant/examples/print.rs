//! Builds one variant of each type and prints it.
//!
//! ```text
//! cargo run --example print
//! ```

use packed_variant::{KeyValue, Variant, VariantError};

fn main() -> Result<(), VariantError> {
    println!("{:#}", Variant::from_int(123));
    println!("{:#}", Variant::from_float64(1.23));
    println!("{:#}", Variant::from_string("Hello, World!")?);

    let bytes = [0xAF, 0xCD, 0x34];
    println!("{:#}", Variant::from_bytes(&bytes)?);

    let items = [Variant::from_int(10), Variant::from_string("abc")?];
    let list = Variant::from_value_list(&items)?;
    println!("{list:#}");

    let fields = [
        KeyValue::new("intval", Variant::from_int(10)),
        KeyValue::new("a string", Variant::from_string("abc")?),
        KeyValue::new("list", list),
    ];
    let object = Variant::from_key_value_list(&fields)?;
    println!("{object:#}");

    if let Some(value) = object.get("intval")? {
        println!("intval is an {}: {}", value.variant_type(), value);
    }
    Ok(())
}
