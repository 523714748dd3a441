//! JSON codec: the collection is a single array of product objects.

use stockroom_products::Product;

use super::StorageError;

pub fn decode(bytes: &[u8]) -> Result<Vec<Product>, StorageError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode(products: &[Product]) -> Result<Vec<u8>, StorageError> {
    let mut bytes = serde_json::to_vec_pretty(products)?;
    bytes.push(b'\n');
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_an_empty_collection() {
        assert!(decode(b"").unwrap().is_empty());
        assert!(decode(b"  \n").unwrap().is_empty());
        assert!(decode(b"[]").unwrap().is_empty());
    }

    #[test]
    fn reads_products_with_short_dates() {
        let raw = br#"[{"id":3,"name":"Tea","quantity":7,"code_value":"TEA3",
            "is_published":false,"expiration":"1/2/2099","price":4.5}]"#;
        let products = decode(raw).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.get(), 3);
        assert_eq!(products[0].expiration.to_canonical(), "01/02/2099");
        assert!(!products[0].is_published);
    }

    #[test]
    fn rejects_zero_ids() {
        let raw = br#"[{"id":0,"name":"Tea","quantity":7,"code_value":"TEA3",
            "is_published":false,"expiration":"01/02/2099","price":4.5}]"#;
        assert!(matches!(decode(raw), Err(StorageError::Json(_))));
    }

    #[test]
    fn encodes_a_json_array() {
        let bytes = encode(&[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap().trim(), "[]");
    }
}
