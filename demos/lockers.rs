//! Browse the locker network for a postal code.
//!
//! This example shows how to:
//! - Create a client against the staging environment
//! - Query delivery windows for the coming week
//! - List the lockers serving a postal code
//!
//! Run with: `INSTABOX_KEY=... INSTABOX_SECRET=... cargo run --example lockers`

use instabox::{Client, Error, IntervalQuery};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("instabox=debug,lockers=info")
        .init();

    let client = Client::builder()
        .key(std::env::var("INSTABOX_KEY").expect("INSTABOX_KEY not set"))
        .secret(std::env::var("INSTABOX_SECRET").expect("INSTABOX_SECRET not set"))
        .test(true)
        .build()?;

    let postal_code = "11157";

    println!("=== Delivery windows (next 7 days) ===");
    let windows = client
        .delivery_windows(postal_code, IntervalQuery::days(7), None)
        .await?;
    for window in &windows {
        println!(
            "{}: delivery {} - {}",
            window.id, window.delivery.start_at, window.delivery.end_at
        );
    }
    println!();

    println!("=== Lockers serving {postal_code} ===");
    let lockers = client.lockers_in_region(postal_code, None).await?;
    for locker in &lockers {
        println!("{}: {}, {} {}", locker.id, locker.name, locker.street, locker.city);
    }

    Ok(())
}
