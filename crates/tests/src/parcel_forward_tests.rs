use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::{DraftField, ParcelDraft};

use crate::common::{sample_request, sample_request_json, upstream_client};

#[tokio::test]
async fn create_forwards_payload_and_decodes_tracking_number() {
    let upstream = MockServer::start_async().await;
    let create = upstream
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/parcels")
                .json_body(sample_request_json());
            then.status(201).json_body(serde_json::json!({
                "message": "Parcel created successfully",
                "tracking_number": "AB12CD34"
            }));
        })
        .await;

    let created = upstream_client(&upstream)
        .create_parcel(&sample_request())
        .await
        .unwrap();

    assert_eq!(created.message, "Parcel created successfully");
    assert_eq!(created.tracking_number, "AB12CD34");
    create.assert_hits_async(1).await;
}

#[tokio::test]
async fn nan_weight_is_forwarded_as_null() {
    let upstream = MockServer::start_async().await;
    let mut expected = sample_request_json();
    expected["weight"] = serde_json::Value::Null;
    let create = upstream
        .mock_async(|when, then| {
            when.method(POST).path("/api/parcels").json_body(expected);
            then.status(201).json_body(serde_json::json!({
                "message": "Parcel created successfully",
                "tracking_number": "NAN00001"
            }));
        })
        .await;

    let mut request = sample_request();
    request.weight = f64::NAN;
    let created = upstream_client(&upstream)
        .create_parcel(&request)
        .await
        .unwrap();

    assert_eq!(created.tracking_number, "NAN00001");
    create.assert_async().await;
}

#[tokio::test]
async fn draft_fields_reach_the_service_in_nested_shape() {
    let upstream = MockServer::start_async().await;
    let create = upstream
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/parcels")
                .json_body(sample_request_json());
            then.status(201).json_body(serde_json::json!({
                "message": "Parcel created successfully",
                "tracking_number": "DRAFT001"
            }));
        })
        .await;

    let mut draft = ParcelDraft::default();
    for (field, value) in [
        (DraftField::SenderName, "Ada Lovelace"),
        (DraftField::SenderEmail, "ada@example.com"),
        (DraftField::SenderPhone, "555-0100"),
        (DraftField::SenderAddress, "1 Analytical Way"),
        (DraftField::RecipientName, "Charles Babbage"),
        (DraftField::RecipientEmail, "charles@example.com"),
        (DraftField::RecipientPhone, "555-0199"),
        (DraftField::RecipientAddress, "2 Difference St"),
        (DraftField::Weight, "2.5"),
        (DraftField::Description, "Punched cards"),
    ] {
        draft.set(field, value);
    }

    let created = upstream_client(&upstream)
        .create_parcel(&draft.to_request())
        .await
        .unwrap();

    assert_eq!(created.tracking_number, "DRAFT001");
    create.assert_async().await;
}

#[tokio::test]
async fn each_submission_is_a_separate_create() {
    let upstream = MockServer::start_async().await;
    let create = upstream
        .mock_async(|when, then| {
            when.method(POST).path("/api/parcels");
            then.status(201).json_body(serde_json::json!({
                "message": "Parcel created successfully",
                "tracking_number": "SAME0000"
            }));
        })
        .await;

    let client = upstream_client(&upstream);
    client.create_parcel(&sample_request()).await.unwrap();
    client.create_parcel(&sample_request()).await.unwrap();

    create.assert_hits_async(2).await;
}
