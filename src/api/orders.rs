//! Order and parcel endpoints.

use crate::types::{BoxDelivery, CreateOrder, DeliveryInfo, NewParcel, Order, Parcel};
use crate::{Client, Request, Result};
use serde::Deserialize;

/// Product code the API expects on locker delivery orders.
const BOX_PRODUCT_CODE: &str = "DLVBOX";

/// Envelope around a tracking URL response.
#[derive(Debug, Deserialize)]
struct TrackingUrl {
    url: String,
}

impl Client {
    /// Fetches an order by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn order(&self, id: &str) -> Result<Order> {
        let request =
            Request::get(format!("multiple/orders/{id}")).content_type(super::MEDIA_ORDERS_V2);
        self.send_json(request).await
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn create_order(&self, order: &CreateOrder) -> Result<Order> {
        let request = Request::post("multiple/orders")
            .content_type(super::MEDIA_ORDERS_V2)
            .json(order)?;
        self.send_json(request).await
    }

    /// Creates a locker delivery order.
    ///
    /// Same endpoint as [`create_order`], but the payload is sent with
    /// `productCodes` forced to `["DLVBOX"]` and `boxDelivery.selectedBox`
    /// set to `locker_id`; whatever those fields held on `order` is
    /// replaced.
    ///
    /// [`create_order`]: Client::create_order
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn create_box_order(
        &self,
        locker_id: impl Into<String>,
        order: &CreateOrder,
    ) -> Result<Order> {
        let request = Request::post("multiple/orders")
            .content_type(super::MEDIA_ORDERS_V2)
            .json(&box_order_payload(order, locker_id.into()))?;
        self.send_json(request).await
    }

    /// Updates the delivery contact details of an order.
    ///
    /// Only the fields set on `info` are sent; the delivery address cannot
    /// be changed through this operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn update_delivery_info(&self, id: &str, info: &DeliveryInfo) -> Result<Order> {
        let request = Request::put(format!("multiple/orders/{id}"))
            .content_type(super::MEDIA_ORDERS_V2)
            .json(info)?;
        self.send_json(request).await
    }

    /// Cancels an order.
    ///
    /// The response body is not read; the server may answer with an empty
    /// or non-JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn cancel_order(&self, id: &str) -> Result<()> {
        let request =
            Request::delete(format!("multiple/orders/{id}")).content_type(super::MEDIA_ORDERS_V2);
        self.send(request).await?;
        Ok(())
    }

    /// Adds parcels to an existing order.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn add_parcels(&self, id: &str, parcels: &[NewParcel]) -> Result<Vec<Parcel>> {
        let request = Request::post(format!("multiple/orders/{id}/parcels"))
            .content_type(super::MEDIA_PARCELS_V1)
            .json(parcels)?;
        self.send_json(request).await
    }

    /// Removes a parcel from an order.
    ///
    /// The response body is not read.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn remove_parcel(&self, id: &str, parcel_id: &str) -> Result<()> {
        let request = Request::delete(format!("multiple/orders/{id}/parcels/{parcel_id}"))
            .content_type(super::MEDIA_PARCELS_V1);
        self.send(request).await?;
        Ok(())
    }

    /// Returns the consumer-facing tracking URL for an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn order_tracking_url(&self, id: &str) -> Result<String> {
        let request = Request::get(format!("multiple/orders/{id}/tracking-url"))
            .content_type(super::MEDIA_TRACKING_V1);
        let envelope: TrackingUrl = self.send_json(request).await?;
        Ok(envelope.url)
    }

    /// Returns the consumer-facing tracking URL for a single parcel.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn parcel_tracking_url(&self, parcel_id: &str) -> Result<String> {
        let request = Request::get(format!("parcels/{parcel_id}/tracking-url"))
            .content_type(super::MEDIA_TRACKING_V1);
        let envelope: TrackingUrl = self.send_json(request).await?;
        Ok(envelope.url)
    }
}

fn box_order_payload(order: &CreateOrder, locker_id: String) -> CreateOrder {
    let mut payload = order.clone();
    payload.product_codes = Some(vec![BOX_PRODUCT_CODE.to_string()]);
    payload.box_delivery = Some(BoxDelivery {
        selected_box: locker_id,
    });
    payload
}
