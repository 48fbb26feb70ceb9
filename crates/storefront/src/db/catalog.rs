//! Catalog repository.
//!
//! Holds the products, orders and coupons dashboards display. Orders are the
//! only collection that grows at runtime.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use prisona_core::{CurrencyCode, OrderId, OrderStatus, Price, ProductId, UserId};

use super::fixtures;
use crate::models::catalog::{Coupon, Order, OrderLine, Product};

/// An order ready to be stored; the repository assigns the ID.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer_id: UserId,
    pub lines: Vec<OrderLine>,
    pub subtotal: Price,
    pub discount: Price,
    pub total: Price,
    pub coupon_code: Option<String>,
    pub placed_at: DateTime<Utc>,
}

/// Repository for catalog data.
#[derive(Debug, Default)]
pub struct CatalogRepository {
    products: RwLock<Vec<Product>>,
    orders: RwLock<Vec<Order>>,
    coupons: RwLock<Vec<Coupon>>,
}

impl CatalogRepository {
    /// Create a repository from explicit collections.
    #[must_use]
    pub fn new(products: Vec<Product>, orders: Vec<Order>, coupons: Vec<Coupon>) -> Self {
        Self {
            products: RwLock::new(products),
            orders: RwLock::new(orders),
            coupons: RwLock::new(coupons),
        }
    }

    /// Create a repository holding the demo catalog priced in `currency`.
    #[must_use]
    pub fn seeded(currency: CurrencyCode) -> Self {
        Self::new(
            fixtures::products(currency),
            fixtures::orders(currency),
            fixtures::coupons(currency),
        )
    }

    /// All products.
    pub async fn products(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Get a product by ID.
    pub async fn get_product(&self, id: ProductId) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    /// All orders, oldest first.
    pub async fn orders(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    /// All coupons.
    pub async fn coupons(&self) -> Vec<Coupon> {
        self.coupons.read().await.clone()
    }

    /// Find a coupon by code, ignoring ASCII case.
    pub async fn find_coupon(&self, code: &str) -> Option<Coupon> {
        let code = code.trim();
        self.coupons
            .read()
            .await
            .iter()
            .find(|coupon| coupon.code.eq_ignore_ascii_case(code))
            .cloned()
    }

    /// Append an order in `Pending` state.
    pub async fn create_order(&self, draft: OrderDraft) -> Order {
        let mut orders = self.orders.write().await;

        let id = orders
            .iter()
            .map(|order| order.id)
            .max()
            .map_or(OrderId::new(1), |max| max.next());

        let order = Order {
            id,
            customer_id: draft.customer_id,
            lines: draft.lines,
            subtotal: draft.subtotal,
            discount: draft.discount,
            total: draft.total,
            coupon_code: draft.coupon_code,
            status: OrderStatus::Pending,
            delivery_agent_id: None,
            placed_at: draft.placed_at,
        };
        orders.push(order.clone());
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_coupon_ignores_case() {
        let catalog = CatalogRepository::seeded(CurrencyCode::INR);
        let coupon = catalog.find_coupon(" fresh10 ").await;
        assert_eq!(coupon.map(|c| c.code), Some("FRESH10".to_owned()));
        assert!(catalog.find_coupon("NOPE").await.is_none());
    }

    #[tokio::test]
    async fn test_create_order_appends_pending() {
        let catalog = CatalogRepository::seeded(CurrencyCode::INR);
        let before = catalog.orders().await.len();
        let zero = Price::zero(CurrencyCode::INR);

        let order = catalog
            .create_order(OrderDraft {
                customer_id: UserId::new(1),
                lines: Vec::new(),
                subtotal: zero,
                discount: zero,
                total: zero,
                coupon_code: None,
                placed_at: Utc::now(),
            })
            .await;

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.id, OrderId::new(4));
        assert_eq!(catalog.orders().await.len(), before + 1);
    }
}
