//! Catalog service.
//!
//! Listings, coupon application and order placement over the in-memory
//! [`CatalogRepository`]. Coupon application and order placement wait for the
//! simulated latency before touching any state.

mod error;
pub mod query;

pub use error::CatalogError;
pub use query::{ListQuery, Listable, SortKey};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Utc};

use prisona_core::{OrderStatus, Price, ProductId, ProductStatus, Role};

use crate::db::CatalogRepository;
use crate::db::catalog::OrderDraft;
use crate::models::catalog::{Coupon, Order, OrderLine, Product};
use crate::models::session::CurrentUser;

/// A coupon accepted against a subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedCoupon {
    /// Canonical code as stored.
    pub code: String,
    pub subtotal: Price,
    pub discount: Price,
    pub total: Price,
}

/// One requested line of a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Catalog service.
#[derive(Debug, Clone)]
pub struct CatalogService {
    repository: Arc<CatalogRepository>,
    latency: Duration,
}

impl CatalogService {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(repository: Arc<CatalogRepository>, latency: Duration) -> Self {
        Self {
            repository,
            latency,
        }
    }

    /// Products matching `query`.
    pub async fn list_products(&self, query: &ListQuery<ProductStatus>) -> Vec<Product> {
        query.apply(self.repository.products().await)
    }

    /// Orders `user` may see, filtered by `query`.
    ///
    /// Customers see their own orders, shop owners and farmers see orders
    /// containing their products, and delivery staff and admins see all.
    pub async fn orders_for(
        &self,
        user: &CurrentUser,
        query: &ListQuery<OrderStatus>,
    ) -> Vec<Order> {
        let visible = self
            .repository
            .orders()
            .await
            .into_iter()
            .filter(|order| is_visible_to(order, user))
            .collect();
        query.apply(visible)
    }

    /// Check `code` against `subtotal` and compute the discount.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CouponNotFound` if no coupon has this code.
    /// Returns `CatalogError::CouponNotRedeemable` if it is inactive or expired.
    /// Returns `CatalogError::MinimumNotMet` if `subtotal` is too small.
    /// Returns `CatalogError::AmountOutOfRange` if the discount overflows.
    pub async fn apply_coupon(
        &self,
        code: &str,
        subtotal: Price,
    ) -> Result<AppliedCoupon, CatalogError> {
        self.simulate_latency().await;

        let applied = self.redeem(code, subtotal).await?;
        tracing::info!(
            code = %applied.code,
            subtotal = %applied.subtotal,
            discount = %applied.discount,
            "coupon applied"
        );
        Ok(applied)
    }

    /// Place an order for the signed-in customer.
    ///
    /// Prices are read from the catalog at placement time. Stock is checked
    /// but not decremented.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotACustomer` for any other role.
    /// Returns `CatalogError::EmptyOrder` or `CatalogError::InvalidQuantity`
    /// for malformed requests.
    /// Returns `CatalogError::UnknownProduct` or `CatalogError::Unavailable`
    /// if a product cannot be bought. Quantities for the same product are
    /// summed before the stock check.
    /// Returns `CatalogError::AmountOutOfRange` if the subtotal overflows.
    /// Returns any coupon error from [`Self::apply_coupon`].
    pub async fn place_order(
        &self,
        user: &CurrentUser,
        requests: &[LineRequest],
        coupon: Option<&str>,
    ) -> Result<Order, CatalogError> {
        if user.role() != Role::Customer {
            return Err(CatalogError::NotACustomer);
        }
        if requests.is_empty() {
            return Err(CatalogError::EmptyOrder);
        }
        if let Some(request) = requests.iter().find(|r| r.quantity == 0) {
            return Err(CatalogError::InvalidQuantity(request.product_id));
        }

        self.simulate_latency().await;

        let mut requested: HashMap<ProductId, u32> = HashMap::new();
        for request in requests {
            let total = requested.entry(request.product_id).or_default();
            *total = total.saturating_add(request.quantity);
        }

        let mut lines = Vec::with_capacity(requests.len());
        for request in requests {
            let product = self
                .repository
                .get_product(request.product_id)
                .await
                .ok_or(CatalogError::UnknownProduct(request.product_id))?;
            let wanted = requested.get(&product.id).copied().unwrap_or(request.quantity);
            if product.status != ProductStatus::Active || product.stock < wanted {
                return Err(CatalogError::Unavailable(product.id));
            }
            lines.push(OrderLine {
                product_id: product.id,
                seller_id: product.seller_id,
                name: product.name,
                quantity: request.quantity,
                unit_price: product.price,
            });
        }

        let subtotal = lines
            .iter()
            .map(OrderLine::line_total)
            .reduce(|acc, total| acc?.checked_add(total?))
            .flatten()
            .ok_or(CatalogError::AmountOutOfRange)?;

        let (discount, coupon_code) = match coupon.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => {
                let applied = self.redeem(code, subtotal).await?;
                (applied.discount, Some(applied.code))
            }
            None => (Price::zero(subtotal.currency_code), None),
        };

        let order = self
            .repository
            .create_order(OrderDraft {
                customer_id: user.id,
                lines,
                subtotal,
                discount,
                total: subtotal.saturating_minus(discount),
                coupon_code,
                placed_at: Utc::now(),
            })
            .await;

        tracing::info!(
            order_id = %order.id,
            user_id = %user.id,
            total = %order.total,
            "order placed"
        );
        Ok(order)
    }

    async fn redeem(&self, code: &str, subtotal: Price) -> Result<AppliedCoupon, CatalogError> {
        let Some(coupon) = self.repository.find_coupon(code).await else {
            tracing::debug!(code, "unknown coupon");
            return Err(CatalogError::CouponNotFound(code.trim().to_owned()));
        };
        redeem_on(&coupon, subtotal, Utc::now().date_naive())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn redeem_on(
    coupon: &Coupon,
    subtotal: Price,
    today: NaiveDate,
) -> Result<AppliedCoupon, CatalogError> {
    if !coupon.is_redeemable(today) {
        return Err(CatalogError::CouponNotRedeemable(coupon.code.clone()));
    }
    if subtotal.amount < coupon.min_order.amount {
        return Err(CatalogError::MinimumNotMet {
            minimum: coupon.min_order,
        });
    }

    let discount = coupon
        .discount_on(subtotal)
        .ok_or(CatalogError::AmountOutOfRange)?;
    Ok(AppliedCoupon {
        code: coupon.code.clone(),
        subtotal,
        discount,
        total: subtotal.saturating_minus(discount),
    })
}

fn is_visible_to(order: &Order, user: &CurrentUser) -> bool {
    match user.role() {
        Role::Customer => order.customer_id == user.id,
        Role::ShopOwner | Role::Farmer => order.has_seller(user.id),
        Role::DeliveryAgent | Role::DeliveryAdmin | Role::Admin => true,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use prisona_core::{CurrencyCode, OrderId, UserId};

    use super::*;

    fn service() -> CatalogService {
        CatalogService::new(
            Arc::new(CatalogRepository::seeded(CurrencyCode::INR)),
            Duration::ZERO,
        )
    }

    fn inr(minor: i64) -> Price {
        Price::from_minor(minor, CurrencyCode::INR)
    }

    fn user(id: i32) -> CurrentUser {
        let user = crate::db::fixtures::users()
            .into_iter()
            .find(|user| user.id() == UserId::new(id))
            .unwrap();
        CurrentUser::from(&user)
    }

    fn line(product_id: i32, quantity: u32) -> LineRequest {
        LineRequest {
            product_id: ProductId::new(product_id),
            quantity,
        }
    }

    fn ids(orders: &[Order]) -> Vec<i32> {
        let mut ids: Vec<i32> = orders.iter().map(|o| o.id.as_i32()).collect();
        ids.sort_unstable();
        ids
    }

    #[tokio::test]
    async fn test_order_visibility_by_role() {
        let catalog = service();
        let all = ListQuery::default();

        assert_eq!(ids(&catalog.orders_for(&user(1), &all).await), [1, 2]);
        assert_eq!(ids(&catalog.orders_for(&user(7), &all).await), [3]);
        // Shop owner sells product 1 only among ordered products.
        assert_eq!(ids(&catalog.orders_for(&user(2), &all).await), [1]);
        assert_eq!(ids(&catalog.orders_for(&user(3), &all).await), [1, 2, 3]);
        assert_eq!(ids(&catalog.orders_for(&user(4), &all).await), [1, 2, 3]);
        assert_eq!(ids(&catalog.orders_for(&user(6), &all).await), [1, 2, 3]);
    }

    #[tokio::test]
    async fn test_apply_percentage_coupon_is_capped() {
        let applied = service().apply_coupon("fresh10", inr(200_000)).await.unwrap();
        assert_eq!(applied.code, "FRESH10");
        assert_eq!(applied.discount, inr(15_000));
        assert_eq!(applied.total, inr(185_000));
    }

    #[tokio::test]
    async fn test_apply_coupon_below_minimum() {
        let err = service().apply_coupon("WELCOME50", inr(10_000)).await.unwrap_err();
        assert!(matches!(err, CatalogError::MinimumNotMet { minimum } if minimum == inr(29_900)));
    }

    #[tokio::test]
    async fn test_apply_expired_or_unknown_coupon() {
        let catalog = service();
        assert!(matches!(
            catalog.apply_coupon("MONSOON25", inr(100_000)).await,
            Err(CatalogError::CouponNotRedeemable(_))
        ));
        assert!(matches!(
            catalog.apply_coupon("FREEBIE", inr(100_000)).await,
            Err(CatalogError::CouponNotFound(_))
        ));
    }

    #[test]
    fn test_coupon_past_expiry_date() {
        let coupon = crate::db::fixtures::coupons(CurrencyCode::INR)
            .into_iter()
            .find(|c| c.code == "FRESH10")
            .unwrap();
        let after = NaiveDate::from_ymd_opt(2031, 1, 1).unwrap();
        assert!(matches!(
            redeem_on(&coupon, inr(100_000), after),
            Err(CatalogError::CouponNotRedeemable(_))
        ));
    }

    #[tokio::test]
    async fn test_place_order_with_coupon() {
        let catalog = service();
        let customer = user(1);

        let order = catalog
            .place_order(&customer, &[line(1, 1), line(4, 2)], Some("welcome50"))
            .await
            .unwrap();

        assert_eq!(order.id, OrderId::new(4));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.subtotal, inr(71_900));
        assert_eq!(order.discount, inr(5_000));
        assert_eq!(order.total, inr(66_900));
        assert_eq!(order.coupon_code.as_deref(), Some("WELCOME50"));
        assert_eq!(ids(&catalog.orders_for(&customer, &ListQuery::default()).await), [1, 2, 4]);
    }

    #[tokio::test]
    async fn test_apply_coupon_to_huge_subtotal() {
        let subtotal = Price::new(rust_decimal::Decimal::MAX, CurrencyCode::INR);
        let err = service().apply_coupon("FRESH10", subtotal).await.unwrap_err();
        assert!(matches!(err, CatalogError::AmountOutOfRange));
    }

    #[tokio::test]
    async fn test_stock_check_sums_repeated_lines() {
        let catalog = service();
        let customer = user(1);

        // Mangoes have 25 in stock.
        assert!(matches!(
            catalog.place_order(&customer, &[line(3, 13), line(3, 13)], None).await,
            Err(CatalogError::Unavailable(id)) if id == ProductId::new(3)
        ));
        let order = catalog
            .place_order(&customer, &[line(3, 12), line(3, 13)], None)
            .await
            .unwrap();
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.subtotal, inr(1_125_000));
    }

    #[tokio::test]
    async fn test_place_order_rejects_non_customers() {
        let err = service()
            .place_order(&user(3), &[line(3, 1)], None)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotACustomer));
    }

    #[tokio::test]
    async fn test_place_order_rejects_bad_lines() {
        let catalog = service();
        let customer = user(1);

        assert!(matches!(
            catalog.place_order(&customer, &[], None).await,
            Err(CatalogError::EmptyOrder)
        ));
        assert!(matches!(
            catalog.place_order(&customer, &[line(1, 0)], None).await,
            Err(CatalogError::InvalidQuantity(_))
        ));
        assert!(matches!(
            catalog.place_order(&customer, &[line(99, 1)], None).await,
            Err(CatalogError::UnknownProduct(_))
        ));
        assert!(matches!(
            catalog.place_order(&customer, &[line(2, 1)], None).await,
            Err(CatalogError::Unavailable(_))
        ));
        assert_eq!(catalog.orders_for(&customer, &ListQuery::default()).await.len(), 2);
    }
}
