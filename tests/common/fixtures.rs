use packslip::source::load_shipments_from_str;
use packslip::types::Shipment;
use serde_json::{Value, json};

pub fn address(first: &str, last: &str, city: &str) -> Value {
    json!({
        "firstname": first,
        "lastname": last,
        "street": ["Kerkstraat", "1"],
        "postcode": "3511 AB",
        "city": city,
        "country_id": "NL",
        "telephone": "030-1234567"
    })
}

/// A shipment for order `increment_id` with the given item lines.
pub fn shipment_json(entity_id: u64, order_id: u64, store_id: u32, items: Value) -> Value {
    json!({
        "entity_id": entity_id,
        "increment_id": format!("{:09}", entity_id),
        "store_id": store_id,
        "order": {
            "entity_id": order_id,
            "increment_id": format!("1000{:05}", order_id),
            "created_at": "2024-03-15 09:30:00",
            "shipping_description": "PostNL - Pakket",
            "payment": { "method_title": "iDEAL (Mollie)" },
            "customer_email": "klant@example.nl",
            "billing_address": address("anna", "de boer", "Utrecht"),
            "shipping_address": address("bram", "bakker", "Amersfoort"),
            "items": items
        }
    })
}

pub fn simple_item(item_id: u64, order_id: u64, sku: &str, name: &str, qty: f64) -> Value {
    json!({
        "item_id": item_id,
        "order_id": order_id,
        "product_type": "simple",
        "sku": sku,
        "name": name,
        "qty_ordered": qty,
        "product": { "attributes": { "bs_weight": "500 g" } }
    })
}

pub fn shipments(values: Vec<Value>) -> Vec<Shipment> {
    load_shipments_from_str(&Value::Array(values).to_string()).expect("valid shipment fixture")
}

/// Two ordinary shipments from different stores.
pub fn two_shipments() -> Vec<Shipment> {
    shipments(vec![
        shipment_json(
            1,
            10,
            0,
            json!([
                simple_item(1, 10, "THEE-GRN", "Groene thee", 2.0),
                simple_item(2, 10, "KOF-ESP", "Espressobonen", 1.0),
            ]),
        ),
        shipment_json(
            2,
            11,
            1,
            json!([simple_item(3, 11, "MOK-WIT", "Witte mok", 4.0)]),
        ),
    ])
}

/// Encoded RGB PNG of the given size.
pub fn png_logo(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbImage::from_pixel(width, height, image::Rgb([200, 30, 30]));
    let mut bytes = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("encode png");
    bytes.into_inner()
}
