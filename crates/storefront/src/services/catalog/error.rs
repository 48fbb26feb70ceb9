//! Catalog service errors.

use thiserror::Error;

use prisona_core::{Price, ProductId};

/// Errors from coupon and order operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No coupon has this code.
    #[error("coupon not found: {0}")]
    CouponNotFound(String),

    /// The coupon exists but is disabled or past its expiry date.
    #[error("coupon {0} is not redeemable")]
    CouponNotRedeemable(String),

    /// The subtotal is below the coupon's minimum order amount.
    #[error("order subtotal below coupon minimum of {minimum}")]
    MinimumNotMet { minimum: Price },

    /// Only customers can place orders.
    #[error("only customers can place orders")]
    NotACustomer,

    /// An order with no lines.
    #[error("order has no lines")]
    EmptyOrder,

    /// A line with quantity zero.
    #[error("invalid quantity for product {0}")]
    InvalidQuantity(ProductId),

    /// A line for a product not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// An amount too large to compute with.
    #[error("amount out of range")]
    AmountOutOfRange,

    /// The product is not active or has too little stock.
    #[error("product {0} is unavailable")]
    Unavailable(ProductId),
}
