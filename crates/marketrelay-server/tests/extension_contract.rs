//! Contract tests — response shapes the extension scripts rely on.
//!
//! The sender content script destructures
//! `{ message, searchKeyword, maxPrice, minPrice }` from the latest payload
//! and compares prices with `!= null`, so every key must always be present.

use marketrelay_core::Payload;
use serde_json::Number;

/// Keys appear even when the payload is all defaults.
#[test]
fn test_default_payload_has_every_key() {
    let value = serde_json::to_value(Payload::default()).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert!(obj["message"].is_string());
    assert!(obj["searchKeyword"].is_string());
    assert!(obj["maxPrice"].is_null());
    assert!(obj["minPrice"].is_null());
}

/// Prices come back as JSON numbers, not strings.
#[test]
fn test_prices_are_numbers() {
    let payload = Payload {
        message: "Is this still available?".into(),
        search_keyword: "road bike".into(),
        max_price: Some(Number::from(200)),
        min_price: Number::from_f64(49.5),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value["maxPrice"].is_u64());
    assert!(value["minPrice"].is_f64());
    assert_eq!(value["searchKeyword"], "road bike");
}

/// The popup sends `null` for an empty price input.
#[test]
fn test_popup_body_with_null_prices() {
    let body = br#"{"message":"Hi","searchKeyword":"desk","minPrice":null,"maxPrice":null}"#;
    let payload = Payload::from_body(body);
    assert_eq!(payload.search_keyword, "desk");
    assert!(payload.min_price.is_none());
    assert!(payload.max_price.is_none());
}
