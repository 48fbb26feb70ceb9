//! Seed data.
//!
//! One demo account per role (all pre-approved so every dashboard can be
//! reached), plus a small catalog sold by the shop owner and the farmer.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use rust_decimal::Decimal;

use prisona_core::{
    CouponId, CouponStatus, CurrencyCode, Email, OrderId, OrderStatus, Price, ProductId,
    ProductStatus, UserId,
};

use crate::models::catalog::{Coupon, Discount, Order, OrderLine, Product};
use crate::models::user::{NewUser, User};

/// Days from the Unix epoch to 2024-01-01.
const EPOCH_2024: i64 = 19_723;

const SHOP_OWNER: UserId = UserId::new(2);
const FARMER: UserId = UserId::new(3);
const DELIVERY_AGENT: UserId = UserId::new(4);

fn day(offset: i64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::days(EPOCH_2024 + offset)
}

/// Builds a fixture email; fixture addresses are static and well-formed.
fn email(address: &'static str) -> Option<Email> {
    Email::parse(address).ok()
}

/// Demo directory.
#[must_use]
pub fn users() -> Vec<User> {
    let accounts: [(i32, &'static str, fn(Email) -> NewUser); 7] = [
        (1, "customer@example.com", |e| {
            NewUser::customer("Priya Sharma", e).with_phone("98200 11111")
        }),
        (2, "shopowner@example.com", |e| {
            NewUser::shop_owner("Vikram Mehta", e, "Green Basket Stores")
        }),
        (3, "farmer@example.com", |e| {
            NewUser::farmer("Ravi Patil", e, "Nashik, Maharashtra")
        }),
        (4, "delivery@example.com", |e| {
            NewUser::delivery_agent("Kiran Rao", e)
        }),
        (5, "deliveryadmin@example.com", |e| {
            NewUser::delivery_admin("Sunita Nair", e)
        }),
        (6, "admin@example.com", |e| NewUser::admin("Arjun Iyer", e)),
        (7, "rahul@example.com", |e| {
            NewUser::customer("Rahul Verma", e)
        }),
    ];

    accounts
        .into_iter()
        .filter_map(|(id, address, build)| {
            let user = User::seeded(UserId::new(id), build(email(address)?), day(i64::from(id)));
            Some(user)
        })
        .collect()
}

/// Demo products priced in `currency`.
#[must_use]
pub fn products(currency: CurrencyCode) -> Vec<Product> {
    let rows: [(i32, &str, &str, UserId, i64, u32, ProductStatus); 6] = [
        (1, "Organic Basmati Rice (5 kg)", "Grains", SHOP_OWNER, 64_900, 40, ProductStatus::Active),
        (2, "Cold-Pressed Groundnut Oil (1 L)", "Oils", SHOP_OWNER, 28_900, 0, ProductStatus::OutOfStock),
        (3, "Alphonso Mangoes (1 kg)", "Fruits", FARMER, 45_000, 25, ProductStatus::Active),
        (4, "Fresh Spinach Bunch", "Vegetables", FARMER, 3_500, 120, ProductStatus::Active),
        (5, "A2 Cow Ghee (500 ml)", "Dairy", SHOP_OWNER, 79_900, 15, ProductStatus::Draft),
        (6, "Farm Eggs (12 pcs)", "Dairy", FARMER, 9_600, 60, ProductStatus::Active),
    ];

    rows.into_iter()
        .map(|(id, name, category, seller_id, minor, stock, status)| Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            category: category.to_owned(),
            seller_id,
            price: Price::from_minor(minor, currency),
            stock,
            status,
            created_at: day(10 + i64::from(id)),
        })
        .collect()
}

/// Demo order history, consistent with [`products`].
#[must_use]
pub fn orders(currency: CurrencyCode) -> Vec<Order> {
    let catalog = products(currency);
    let line = |product_id: i32, quantity: u32| {
        catalog
            .iter()
            .find(|p| p.id == ProductId::new(product_id))
            .map(|p| OrderLine {
                product_id: p.id,
                seller_id: p.seller_id,
                name: p.name.clone(),
                quantity,
                unit_price: p.price,
            })
    };

    let drafts = [
        (1, UserId::new(1), vec![line(1, 1), line(4, 2)], None, OrderStatus::Delivered, Some(DELIVERY_AGENT), 30),
        (2, UserId::new(1), vec![line(3, 2)], Some(("FRESH10", 9_000)), OrderStatus::OutForDelivery, Some(DELIVERY_AGENT), 42),
        (3, UserId::new(7), vec![line(6, 1)], None, OrderStatus::Pending, None, 45),
    ];

    drafts
        .into_iter()
        .map(|(id, customer_id, lines, coupon, status, agent, placed)| {
            let lines: Vec<OrderLine> = lines.into_iter().flatten().collect();
            let subtotal = lines
                .iter()
                .try_fold(Price::zero(currency), |acc, l| acc.checked_add(l.line_total()?))
                .unwrap_or_else(|| Price::zero(currency));
            let discount = coupon.map_or(Price::zero(currency), |(_, minor)| {
                Price::from_minor(minor, currency)
            });
            Order {
                id: OrderId::new(id),
                customer_id,
                lines,
                subtotal,
                discount,
                total: subtotal.saturating_minus(discount),
                coupon_code: coupon.map(|(code, _)| code.to_owned()),
                status,
                delivery_agent_id: agent,
                placed_at: day(placed),
            }
        })
        .collect()
}

/// Demo coupons.
#[must_use]
pub fn coupons(currency: CurrencyCode) -> Vec<Coupon> {
    vec![
        Coupon {
            id: CouponId::new(1),
            code: "WELCOME50".to_owned(),
            description: "Flat 50 off your first order".to_owned(),
            discount: Discount::Flat(Price::from_minor(5_000, currency)),
            min_order: Price::from_minor(29_900, currency),
            max_discount: None,
            status: CouponStatus::Active,
            expires_on: None,
        },
        Coupon {
            id: CouponId::new(2),
            code: "FRESH10".to_owned(),
            description: "10% off farm-fresh produce".to_owned(),
            discount: Discount::Percentage(Decimal::TEN),
            min_order: Price::from_minor(50_000, currency),
            max_discount: Some(Price::from_minor(15_000, currency)),
            status: CouponStatus::Active,
            expires_on: NaiveDate::from_ymd_opt(2030, 12, 31),
        },
        Coupon {
            id: CouponId::new(3),
            code: "MONSOON25".to_owned(),
            description: "Monsoon sale".to_owned(),
            discount: Discount::Percentage(Decimal::new(25, 0)),
            min_order: Price::zero(currency),
            max_discount: None,
            status: CouponStatus::Expired,
            expires_on: NaiveDate::from_ymd_opt(2024, 9, 30),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_emails_are_unique() {
        let users = users();
        assert_eq!(users.len(), 7);
        for (i, a) in users.iter().enumerate() {
            for b in users.iter().skip(i + 1) {
                assert_ne!(a.email(), b.email());
            }
        }
    }

    #[test]
    fn test_fixture_orders_are_consistent() {
        for order in orders(CurrencyCode::INR) {
            assert!(!order.lines.is_empty());
            assert_eq!(order.total, order.subtotal.saturating_minus(order.discount));
        }
    }

    #[test]
    fn test_sellers_are_fixture_users() {
        let users = users();
        for product in products(CurrencyCode::INR) {
            assert!(users.iter().any(|u| u.id() == product.seller_id));
        }
    }
}
