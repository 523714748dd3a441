//! CSV codec: one row per product, no header.
//!
//! Column order is fixed: `id,name,quantity,code_value,is_published,expiration,price`.

use stockroom_products::Product;

use super::StorageError;

pub fn decode(bytes: &[u8]) -> Result<Vec<Product>, StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut products = Vec::new();
    for record in reader.deserialize::<Product>() {
        products.push(record?);
    }
    Ok(products)
}

pub fn encode(products: &[Product]) -> Result<Vec<u8>, StorageError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for product in products {
        writer.serialize(product)?;
    }

    writer
        .into_inner()
        .map_err(|e| StorageError::Unavailable(format!("csv buffer flush failed: {}", e.error())))
}
