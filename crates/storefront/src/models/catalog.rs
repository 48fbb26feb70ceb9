//! Catalog records shown on dashboards.
//!
//! These are flat display records. Orders copy product name and price into
//! their lines at placement time and never look the product up again.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use prisona_core::{
    CouponId, CouponStatus, OrderId, OrderStatus, Price, ProductId, ProductStatus, UserId,
};

/// A product listed by a shop owner or farmer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Shop owner or farmer who lists the product.
    pub seller_id: UserId,
    pub price: Price,
    pub stock: u32,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
}

/// One product line inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub seller_id: UserId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
}

impl OrderLine {
    /// Unit price times quantity, or `None` if the amount overflows.
    #[must_use]
    pub fn line_total(&self) -> Option<Price> {
        self.unit_price.checked_times(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub lines: Vec<OrderLine>,
    pub subtotal: Price,
    pub discount: Price,
    pub total: Price,
    pub coupon_code: Option<String>,
    pub status: OrderStatus,
    pub delivery_agent_id: Option<UserId>,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Whether any line was sold by `seller_id`.
    #[must_use]
    pub fn has_seller(&self, seller_id: UserId) -> bool {
        self.lines.iter().any(|line| line.seller_id == seller_id)
    }
}

/// How a coupon reduces the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage of the subtotal (e.g. `10` for 10%).
    Percentage(Decimal),
    /// Fixed amount off.
    Flat(Price),
}

/// A redeemable coupon code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: CouponId,
    pub code: String,
    pub description: String,
    pub discount: Discount,
    /// Smallest subtotal the coupon applies to.
    pub min_order: Price,
    /// Upper bound on a percentage discount.
    pub max_discount: Option<Price>,
    pub status: CouponStatus,
    /// Last day the coupon can be used.
    pub expires_on: Option<NaiveDate>,
}

impl Coupon {
    /// Whether the coupon can be used on `today`.
    #[must_use]
    pub fn is_redeemable(&self, today: NaiveDate) -> bool {
        self.status == CouponStatus::Active && self.expires_on.is_none_or(|last| today <= last)
    }

    /// Discount granted on `subtotal`, ignoring the minimum order amount.
    ///
    /// Never exceeds the subtotal. `None` if the percentage overflows.
    #[must_use]
    pub fn discount_on(&self, subtotal: Price) -> Option<Price> {
        let raw = match self.discount {
            Discount::Percentage(percent) => {
                let amount = subtotal.checked_percent(percent)?;
                match self.max_discount {
                    Some(cap) if cap.amount < amount.amount => cap,
                    _ => amount,
                }
            }
            Discount::Flat(amount) => amount,
        };
        Some(if raw.amount > subtotal.amount {
            subtotal
        } else {
            raw
        })
    }
}
