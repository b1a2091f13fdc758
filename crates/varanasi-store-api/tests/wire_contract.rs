use serde_json::json;
use varanasi_store_api::{
    ApiError, ApiErrorCode, CheckoutRequest, CheckoutResponse, CustomerEchoDto, OrderLineDto,
    TotalsDto,
};

#[test]
fn api_error_serializes_flat_with_camel_case_request_id() {
    let err = ApiError::product_not_found("heritage-tee", "req-42");
    let value = serde_json::to_value(&err).expect("serialize");
    assert_eq!(value["error"], "ProductNotFound");
    assert_eq!(value["message"], "No product found for id heritage-tee");
    assert_eq!(value["requestId"], "req-42");
    assert_eq!(value["details"]["productId"], "heritage-tee");
}

#[test]
fn api_error_omits_null_details() {
    let err = ApiError::route_not_found("req-7");
    let value = serde_json::to_value(&err).expect("serialize");
    assert!(value.get("details").is_none());
    assert_eq!(value["error"], "NotFound");
}

#[test]
fn error_codes_carry_their_http_status() {
    assert_eq!(ApiErrorCode::InvalidCart.http_status(), 400);
    assert_eq!(ApiErrorCode::InvalidCartItem.http_status(), 400);
    assert_eq!(ApiErrorCode::InvalidCustomer.http_status(), 400);
    assert_eq!(ApiErrorCode::ProductNotFound.http_status(), 404);
    assert_eq!(ApiErrorCode::NotFound.http_status(), 404);
    assert_eq!(ApiErrorCode::Internal.http_status(), 500);
}

#[test]
fn checkout_request_tolerates_missing_fields() {
    let req: CheckoutRequest = serde_json::from_value(json!({})).expect("empty body");
    assert!(req.items.is_empty());
    assert!(req.customer.name.is_null());

    let req: CheckoutRequest = serde_json::from_value(json!({
        "items": [{"id": "heritage-tee"}, {"quantity": 2}],
        "customer": {"name": "A"}
    }))
    .expect("partial body");
    assert_eq!(req.items.len(), 2);
    assert!(req.items[0].get("quantity").is_none());
    assert!(req.items[1].get("id").is_none());
    assert!(req.customer.email.is_null());
}

#[test]
fn checkout_request_preserves_raw_quantities_for_validation() {
    let req: CheckoutRequest = serde_json::from_value(json!({
        "items": [
            {"id": "heritage-tee", "quantity": 2.5},
            {"id": "brass-bell", "quantity": "2"},
            {"id": 7, "quantity": 1}
        ],
        "customer": {"name": "A", "email": "a@x.com"}
    }))
    .expect("wrong-typed item fields parse");
    assert_eq!(req.items[0]["quantity"], json!(2.5));
    assert_eq!(req.items[1]["quantity"], json!("2"));
    assert_eq!(req.items[2]["id"], json!(7));
}

#[test]
fn checkout_request_tolerates_non_string_customer_fields() {
    let req: CheckoutRequest = serde_json::from_value(json!({
        "items": [{"id": "heritage-tee", "quantity": 1}],
        "customer": {"name": 42, "email": ["a@x.com"]}
    }))
    .expect("wrong-typed customer fields parse");
    assert!(req.customer.name.is_number());
    assert!(req.customer.email.is_array());
}

#[test]
fn checkout_response_matches_the_wire_shape() {
    let response = CheckoutResponse {
        order_id: "IV-2026-A1B2C3".to_string(),
        request_id: "req-1".to_string(),
        summary: vec![OrderLineDto {
            product_id: "heritage-tee".to_string(),
            name: "Banaras Heritage Tee".to_string(),
            quantity: 2,
            unit_price: 2499,
            currency: "INR".to_string(),
            line_total: 4998,
        }],
        totals: TotalsDto {
            currency: "INR".to_string(),
            items: 1,
            grand_total: 4998,
        },
        customer: CustomerEchoDto {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: None,
            address: None,
        },
        message: "Thank you".to_string(),
    };
    let value = serde_json::to_value(&response).expect("serialize");
    assert_eq!(value["orderId"], "IV-2026-A1B2C3");
    assert_eq!(value["summary"][0]["unitPrice"], 2499);
    assert_eq!(value["summary"][0]["lineTotal"], 4998);
    assert_eq!(value["summary"][0]["productId"], "heritage-tee");
    assert_eq!(value["totals"]["grandTotal"], 4998);
    assert!(value["customer"]["phone"].is_null(), "absent phone echoes as null");
    assert!(value["customer"]["address"].is_null());
}
