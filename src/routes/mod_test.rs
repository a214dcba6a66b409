use super::*;
use crate::store::StoreError;

#[test]
fn listing_envelope_mirrors_the_item_count() {
    let envelope = Envelope::listing(vec![1, 2, 3]);
    let value = serde_json::to_value(&envelope).expect("envelope should serialize");

    assert_eq!(value["success"], true);
    assert_eq!(value["total"], 3);
    assert_eq!(value["data"].as_array().map(Vec::len), Some(3));
    assert!(value.get("message").is_none());
}

#[test]
fn data_envelope_omits_message_and_total() {
    let envelope = Envelope::data(serde_json::json!({"id": "1"}));
    let value = serde_json::to_value(&envelope).expect("envelope should serialize");

    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["id"], "1");
    assert!(value.get("message").is_none());
    assert!(value.get("total").is_none());
}

#[test]
fn message_envelope_carries_no_data() {
    let envelope = Envelope::message("Lead removido com sucesso");
    let value = serde_json::to_value(&envelope).expect("envelope should serialize");

    assert_eq!(value["success"], true);
    assert_eq!(value["message"], "Lead removido com sucesso");
    assert!(value.get("data").is_none());
}

#[test]
fn reject_maps_not_found_to_404_with_the_id_in_the_message() {
    let err = DataError::NotFound { entity: "lead", id: "999".to_string() };
    let (status, body) = reject(&err);

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.0.success);
    assert!(body.0.message.as_deref().unwrap_or_default().contains("999"));
}

#[test]
fn reject_maps_store_failures_to_500() {
    let err = DataError::Store(StoreError::Request("connection refused".to_string()));
    let (status, body) = reject(&err);

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.0.success);
}

#[test]
fn reject_maps_missing_configuration_to_500() {
    let (status, _) = reject(&DataError::StoreNotConfigured);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
