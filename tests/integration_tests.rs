//! Integration tests using wiremock to simulate the Instabox API.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use instabox::{
    Address, CancellationToken, Cart, Client, Consumer, CountryCode, CreateDropOff, CreateOrder,
    CreatePickup, DeliveryInfo, Error, IntervalQuery, NewParcel, Request,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::builder()
        .key("key")
        .secret("secret")
        .base_url(server.uri())
        .unwrap()
        .build()
        .unwrap()
}

fn consumer_json() -> serde_json::Value {
    json!({
        "name": "Alva Berg",
        "phone": "+46701234567",
        "email": "alva@example.com",
        "address": {
            "street": "Sveavägen 10",
            "postalCode": "11157",
            "city": "Stockholm",
            "country": "SE"
        }
    })
}

fn order_json() -> serde_json::Value {
    json!({
        "id": "ord_1",
        "status": "created",
        "consumer": consumer_json(),
        "cart": {"cartId": "cart_1", "itemCount": 2},
        "collectionPointId": "wh_1",
        "parcels": [
            {"id": "pcl_1", "barcode": "733100001", "reference": "R1"}
        ]
    })
}

fn create_order_payload() -> CreateOrder {
    CreateOrder {
        cart: Cart {
            cart_id: "cart_1".to_string(),
            item_count: 2,
        },
        consumer: Consumer {
            name: "Alva Berg".to_string(),
            phone: "+46701234567".to_string(),
            email: "alva@example.com".to_string(),
            address: Address {
                street: "Sveavägen 10".to_string(),
                street2: None,
                postal_code: "11157".to_string(),
                city: "Stockholm".to_string(),
                country: CountryCode::Se,
            },
        },
        collection_point_id: "wh_1".to_string(),
        interval_id: "int_1".to_string(),
        product_codes: None,
        box_delivery: None,
    }
}

#[tokio::test]
async fn every_request_carries_the_basic_auth_header() {
    let server = MockServer::start().await;
    let expected = format!("Basic {}", BASE64.encode("key:secret"));

    Mock::given(method("GET"))
        .and(path("/users/collection-points"))
        .and(header("authorization", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    // The token is derived once and identical across calls.
    client.warehouses().await.unwrap();
    client.warehouses().await.unwrap();
}

#[tokio::test]
async fn caller_headers_win_on_collision() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("authorization", "Basic overridden"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let request = Request::get("ping")
        .header("authorization", "Basic overridden")
        .unwrap();
    let response = client(&server).send(request).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn statuses_up_to_399_are_successful() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-modified"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/edge"))
        .respond_with(ResponseTemplate::new(399))
        .mount(&server)
        .await;

    let client = client(&server);
    let response = client.get("not-modified").await.unwrap();
    assert_eq!(response.status().as_u16(), 304);
    let response = client.get("edge").await.unwrap();
    assert_eq!(response.status().as_u16(), 399);
}

#[tokio::test]
async fn failure_carries_exact_status_and_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/multiple/orders/ord_404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such order"))
        .mount(&server)
        .await;

    let err = client(&server).order("ord_404").await.unwrap_err();
    match err {
        Error::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "no such order");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_on_success_propagates_as_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/collection-points"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).warehouses().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let client = Client::builder()
        .key("key")
        .secret("secret")
        .base_url("http://127.0.0.1:1")
        .unwrap()
        .build()
        .unwrap();

    let err = client.warehouses().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn delivery_windows_render_day_count_into_the_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/intervals/SE/11157/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "int_1",
            "collection": {"startAt": 1704103200000u64, "endAt": 1704110400000u64},
            "delivery": {"startAt": 1704189600000u64, "endAt": 1704196800000u64}
        }])))
        .mount(&server)
        .await;

    let windows = client(&server)
        .delivery_windows("11157", 7, None)
        .await
        .unwrap();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].id, "int_1");
    assert_eq!(
        windows[0].collection.start_at.timestamp_millis(),
        1_704_103_200_000
    );
}

#[tokio::test]
async fn delivery_windows_render_date_range_into_the_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/intervals/SE/11157/2024-01-01/2024-01-07"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let from = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let to = chrono::NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
    let windows = client(&server)
        .delivery_windows("11157", IntervalQuery::range(from, to), None)
        .await
        .unwrap();
    assert!(windows.is_empty());
}

#[tokio::test]
async fn default_country_is_sweden() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/boxes/all/SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lockers": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/postalcodes/SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["11157", "11359"])))
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(client.lockers(None).await.unwrap().is_empty());
    assert_eq!(
        client.postal_codes(None).await.unwrap(),
        vec!["11157", "11359"]
    );
}

#[tokio::test]
async fn explicit_country_overrides_the_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/postalcodes/validate/NO/0150"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wh_oslo",
            "name": "Oslo Hub",
            "street": "Karl Johans gate 1",
            "postalCode": "0154",
            "city": "Oslo",
            "country": "NO"
        })))
        .mount(&server)
        .await;

    let warehouse = client(&server)
        .closest_warehouse("0150", Some(CountryCode::No))
        .await
        .unwrap();
    assert_eq!(warehouse.id, "wh_oslo");
    assert_eq!(warehouse.country, CountryCode::No);
}

#[tokio::test]
async fn locker_list_envelope_is_unwrapped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/boxes/all/SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lockers": [{
                "id": "L1",
                "name": "ICA Maxi Lindhagen",
                "street": "Lindhagensgatan 118",
                "postalCode": "11251",
                "city": "Stockholm",
                "country": "SE",
                "visible": true
            }]
        })))
        .mount(&server)
        .await;

    let lockers = client(&server).lockers(None).await.unwrap();
    assert_eq!(lockers.len(), 1);
    assert_eq!(lockers[0].id, "L1");
    assert!(lockers[0].visible);
}

#[tokio::test]
async fn lockers_in_region_unwrap_the_same_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/boxes/postalcodes/validate/SE/11251"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lockers": [{
                "id": "L1",
                "name": "ICA Maxi Lindhagen",
                "street": "Lindhagensgatan 118",
                "postalCode": "11251",
                "city": "Stockholm"
            }]
        })))
        .mount(&server)
        .await;

    let lockers = client(&server).lockers_in_region("11251", None).await.unwrap();
    assert_eq!(lockers.len(), 1);
    // Absent country falls back to the default market.
    assert_eq!(lockers[0].country, CountryCode::Se);
}

#[tokio::test]
async fn tracking_url_envelopes_are_unwrapped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/multiple/orders/ord_1/tracking-url"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"url": "https://track.instabox.io/ord_1"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/parcels/pcl_1/tracking-url"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"url": "https://track.instabox.io/pcl_1"})),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    assert_eq!(
        client.order_tracking_url("ord_1").await.unwrap(),
        "https://track.instabox.io/ord_1"
    );
    assert_eq!(
        client.parcel_tracking_url("pcl_1").await.unwrap(),
        "https://track.instabox.io/pcl_1"
    );
}

#[tokio::test]
async fn create_order_sends_the_payload_and_media_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/multiple/orders"))
        .and(header(
            "content-type",
            "application/vnd.instabox.orders-v2+json",
        ))
        .and(body_json(json!({
            "cart": {"cartId": "cart_1", "itemCount": 2},
            "consumer": consumer_json(),
            "collectionPointId": "wh_1",
            "intervalId": "int_1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json()))
        .mount(&server)
        .await;

    let order = client(&server)
        .create_order(&create_order_payload())
        .await
        .unwrap();
    assert_eq!(order.id, "ord_1");
    assert_eq!(order.parcels.len(), 1);
}

#[tokio::test]
async fn create_box_order_injects_product_code_and_locker() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/multiple/orders"))
        .and(body_json(json!({
            "cart": {"cartId": "cart_1", "itemCount": 2},
            "consumer": consumer_json(),
            "collectionPointId": "wh_1",
            "intervalId": "int_1",
            "productCodes": ["DLVBOX"],
            "boxDelivery": {"selectedBox": "L1"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json()))
        .mount(&server)
        .await;

    let order = client(&server)
        .create_box_order("L1", &create_order_payload())
        .await
        .unwrap();
    assert_eq!(order.id, "ord_1");
}

#[tokio::test]
async fn update_delivery_info_sends_only_the_given_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/multiple/orders/ord_1"))
        .and(body_json(json!({"phone": "+46709999999"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json()))
        .mount(&server)
        .await;

    let info = DeliveryInfo {
        phone: Some("+46709999999".to_string()),
        ..DeliveryInfo::default()
    };
    let order = client(&server)
        .update_delivery_info("ord_1", &info)
        .await
        .unwrap();
    assert_eq!(order.id, "ord_1");
}

#[tokio::test]
async fn cancel_order_tolerates_an_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/multiple/orders/ord_1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client(&server).cancel_order("ord_1").await.unwrap();
}

#[tokio::test]
async fn remove_parcel_tolerates_a_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/multiple/orders/ord_1/parcels/pcl_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    client(&server).remove_parcel("ord_1", "pcl_1").await.unwrap();
}

#[tokio::test]
async fn add_parcels_posts_an_array_and_parses_the_created_parcels() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/multiple/orders/ord_1/parcels"))
        .and(header(
            "content-type",
            "application/vnd.instabox.parcels-v1+json",
        ))
        .and(body_json(json!([{"reference": "R2"}])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "pcl_2", "barcode": "733100002", "reference": "R2"}
        ])))
        .mount(&server)
        .await;

    let parcels = client(&server)
        .add_parcels(
            "ord_1",
            &[NewParcel {
                reference: "R2".to_string(),
                weight_grams: None,
            }],
        )
        .await
        .unwrap();
    assert_eq!(parcels.len(), 1);
    assert_eq!(parcels[0].barcode, "733100002");
}

#[tokio::test]
async fn return_bookings_hit_their_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/returns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ret_1",
            "status": "booked",
            "consumer": consumer_json(),
            "parcelCount": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/box/return"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "drop_1",
            "lockerId": "L1",
            "doorCode": "4711"
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let consumer: Consumer = serde_json::from_value(consumer_json()).unwrap();

    let pickup = client
        .create_pickup(&CreatePickup {
            consumer: consumer.clone(),
            parcel_count: 1,
            comment: None,
        })
        .await
        .unwrap();
    assert_eq!(pickup.status, "booked");

    let drop_off = client
        .create_drop_off(&CreateDropOff {
            locker_id: "L1".to_string(),
            consumer,
            parcel_count: 1,
        })
        .await
        .unwrap();
    assert_eq!(drop_off.door_code.as_deref(), Some("4711"));
}

#[tokio::test]
async fn firing_the_token_cancels_only_the_scoped_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/collection-points"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/boxes/all/SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lockers": []})))
        .mount(&server)
        .await;

    let client = client(&server);
    let token = CancellationToken::new();
    let scoped = client.with_cancellation(token.clone());

    let cancelled = tokio::spawn(async move { scoped.warehouses().await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    token.cancel();

    let err = cancelled.await.unwrap().unwrap_err();
    assert!(err.is_cancelled(), "got {err:?}");

    // The unscoped client is unaffected by the fired token.
    assert!(client.lockers(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn raw_verb_helpers_wrap_send() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client(&server);
    assert_eq!(
        client
            .post("raw", Some("{}".to_string()))
            .await
            .unwrap()
            .status()
            .as_u16(),
        201
    );
    assert_eq!(
        client.put("raw", None).await.unwrap().status().as_u16(),
        200
    );
    assert_eq!(client.delete("raw").await.unwrap().status().as_u16(), 204);
}
