//! Create an order and walk it through its parcel lifecycle.
//!
//! This example shows how to:
//! - Create an order from a cart and consumer details
//! - Add a parcel and fetch its tracking URL
//! - Handle an API rejection without parsing the error body
//!
//! Run with: `INSTABOX_KEY=... INSTABOX_SECRET=... cargo run --example create_order`

use instabox::{
    Address, Cart, Client, Consumer, CountryCode, CreateOrder, Error, NewParcel,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("instabox=debug,create_order=info")
        .init();

    let client = Client::builder()
        .key(std::env::var("INSTABOX_KEY").expect("INSTABOX_KEY not set"))
        .secret(std::env::var("INSTABOX_SECRET").expect("INSTABOX_SECRET not set"))
        .test(true)
        .build()?;

    // Pick the first warehouse and a delivery window for the consumer.
    let warehouses = client.warehouses().await?;
    let warehouse = warehouses.first().expect("no collection points registered");
    let windows = client.delivery_windows("11157", 7, None).await?;
    let window = windows.first().expect("no delivery windows offered");

    let payload = CreateOrder {
        cart: Cart {
            cart_id: "demo-cart-1".to_string(),
            item_count: 1,
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
        collection_point_id: warehouse.id.clone(),
        interval_id: window.id.clone(),
        product_codes: None,
        box_delivery: None,
    };

    println!("=== Creating order ===");
    let order = match client.create_order(&payload).await {
        Ok(order) => order,
        Err(Error::Status { status, body, .. }) => {
            eprintln!("API rejected the order ({status}): {body}");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    println!("Created order {} ({})", order.id, order.status);

    println!("=== Adding a parcel ===");
    let parcels = client
        .add_parcels(
            &order.id,
            &[NewParcel {
                reference: "demo-parcel-1".to_string(),
                weight_grams: Some(1200),
            }],
        )
        .await?;
    println!("Parcel {} barcode {}", parcels[0].id, parcels[0].barcode);

    let tracking = client.order_tracking_url(&order.id).await?;
    println!("Track at: {tracking}");

    Ok(())
}
