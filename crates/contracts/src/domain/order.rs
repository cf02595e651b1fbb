use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle as owned by the backend. The UI only ever requests a
/// transition; it never computes the next status itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Approved,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: &'static [OrderStatus] = &[
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    B2B,
    B2C,
}

impl Default for OrderType {
    fn default() -> Self {
        OrderType::B2C
    }
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::B2B => "B2B",
            OrderType::B2C => "B2C",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Buyer reference; the backend populates name/email when listing orders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyerRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// AWB assignment recorded once an order has been dispatched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingData {
    pub courier_name: String,
    pub awb_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub user: BuyerRef,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub payment_status: String,
    pub tracking_data: Option<TrackingData>,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_tags_are_screaming_snake() {
        let s: OrderStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(s, OrderStatus::Pending);
        assert_eq!(serde_json::to_string(&OrderStatus::Shipped).unwrap(), "\"SHIPPED\"");
    }

    #[test]
    fn order_tolerates_missing_fields() {
        let o: Order = serde_json::from_str(r#"{ "_id": "o1" }"#).unwrap();
        assert_eq!(o.id, "o1");
        assert_eq!(o.status, OrderStatus::Pending);
        assert!(o.tracking_data.is_none());
    }
}
