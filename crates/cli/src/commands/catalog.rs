//! Catalog commands.

use rust_decimal::Decimal;

use prisona_core::{OrderStatus, Price, ProductId, ProductStatus};
use prisona_storefront::models::Order;
use prisona_storefront::services::catalog::{LineRequest, ListQuery, SortKey};
use prisona_storefront::{AppError, AppState};

/// Parse a checkout line written as `product_id:quantity`.
///
/// # Errors
///
/// Returns a message if either half is missing or not a number.
pub fn parse_line(s: &str) -> Result<LineRequest, String> {
    let (id, quantity) = s
        .split_once(':')
        .ok_or_else(|| format!("expected product_id:quantity, got {s}"))?;
    let product_id = id
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid product id {id}: {e}"))?;
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity {quantity}: {e}"))?;
    Ok(LineRequest {
        product_id: ProductId::new(product_id),
        quantity,
    })
}

/// List products.
#[allow(clippy::print_stdout)]
pub async fn products(
    state: &AppState,
    search: Option<String>,
    status: Option<ProductStatus>,
    sort: SortKey,
) {
    let query = ListQuery {
        search,
        status,
        sort,
    };
    let products = state.catalog().list_products(&query).await;
    if products.is_empty() {
        println!("No products found.");
    }
    for product in products {
        println!(
            "#{:<3} {:<36} {:>10}  stock {:<4} {}",
            product.id.to_string(),
            product.name,
            product.price.to_string(),
            product.stock,
            product.status
        );
    }
}

/// List the orders the signed-in user can see.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` without a session.
#[allow(clippy::print_stdout)]
pub async fn orders(
    state: &AppState,
    search: Option<String>,
    status: Option<OrderStatus>,
    sort: SortKey,
) -> Result<(), AppError> {
    let user = state
        .session()
        .current()
        .await
        .ok_or_else(|| AppError::Unauthorized("Please sign in to view orders".to_string()))?;

    let query = ListQuery {
        search,
        status,
        sort,
    };
    let orders = state.catalog().orders_for(&user, &query).await;
    if orders.is_empty() {
        println!("No orders found.");
    }
    for order in &orders {
        print_order(order);
    }
    Ok(())
}

/// Check a coupon against a subtotal.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a negative subtotal, or
/// `AppError::Catalog` if the coupon cannot be applied.
#[allow(clippy::print_stdout)]
pub async fn coupon(state: &AppState, code: &str, subtotal: Decimal) -> Result<(), AppError> {
    if subtotal.is_sign_negative() {
        return Err(AppError::BadRequest("Subtotal cannot be negative".to_string()));
    }
    let subtotal = Price::new(subtotal, state.config().currency);
    let applied = state.catalog().apply_coupon(code, subtotal).await?;

    println!("Coupon {} applied", applied.code);
    println!("  Subtotal  {:>12}", applied.subtotal.to_string());
    println!("  Discount -{:>12}", applied.discount.to_string());
    println!("  Total     {:>12}", applied.total.to_string());
    Ok(())
}

/// Place an order as the signed-in customer.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` without a session, or `AppError::Catalog`
/// if the order is rejected.
#[allow(clippy::print_stdout)]
pub async fn checkout(
    state: &AppState,
    lines: &[LineRequest],
    coupon: Option<&str>,
) -> Result<(), AppError> {
    let user = state
        .session()
        .current()
        .await
        .ok_or_else(|| AppError::Unauthorized("Please sign in to check out".to_string()))?;

    let order = state.catalog().place_order(&user, lines, coupon).await?;

    println!("Order placed!");
    print_order(&order);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_order(order: &Order) {
    println!(
        "Order #{} {} {} ({} items){}",
        order.id,
        order.placed_at.format("%Y-%m-%d"),
        order.total,
        order.lines.iter().map(|line| line.quantity).sum::<u32>(),
        order
            .coupon_code
            .as_deref()
            .map(|code| format!(" coupon {code}"))
            .unwrap_or_default(),
    );
    println!("  status: {}", order.status);
    for line in &order.lines {
        println!("  {} x {} @ {}", line.quantity, line.name, line.unit_price);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let line = parse_line("3:2").unwrap();
        assert_eq!(line.product_id, ProductId::new(3));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_parse_line_rejects_garbage() {
        assert!(parse_line("3").is_err());
        assert!(parse_line("x:1").is_err());
        assert!(parse_line("1:-2").is_err());
    }
}
