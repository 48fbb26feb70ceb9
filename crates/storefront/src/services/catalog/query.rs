//! Search, filter and sort for dashboard listings.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use prisona_core::{OrderStatus, Price, ProductStatus};

use crate::models::catalog::{Order, Product};

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Name,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "newest" => Ok(Self::Newest),
            "price-asc" | "price" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "name" => Ok(Self::Name),
            other => Err(format!("invalid sort key: {other}")),
        }
    }
}

/// A record that can appear in a dashboard listing.
pub trait Listable {
    type Status: Copy + PartialEq;

    /// Text used for name sorting.
    fn label(&self) -> &str;
    /// Whether the record matches a lowercase search term.
    fn matches(&self, needle: &str) -> bool;
    fn status(&self) -> Self::Status;
    /// Price used for price sorting.
    fn sort_price(&self) -> Price;
    fn listed_at(&self) -> DateTime<Utc>;
}

impl Listable for Product {
    type Status = ProductStatus;

    fn label(&self) -> &str {
        &self.name
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }

    fn status(&self) -> ProductStatus {
        self.status
    }

    fn sort_price(&self) -> Price {
        self.price
    }

    fn listed_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Listable for Order {
    type Status = OrderStatus;

    fn label(&self) -> &str {
        self.lines.first().map_or("", |line| line.name.as_str())
    }

    fn matches(&self, needle: &str) -> bool {
        self.id.to_string() == needle
            || self
                .coupon_code
                .as_deref()
                .is_some_and(|code| code.to_lowercase().contains(needle))
            || self
                .lines
                .iter()
                .any(|line| line.name.to_lowercase().contains(needle))
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn sort_price(&self) -> Price {
        self.total
    }

    fn listed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

/// Search, status filter and sort applied to a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<S> {
    /// Case-insensitive substring; blank matches everything.
    pub search: Option<String>,
    pub status: Option<S>,
    pub sort: SortKey,
}

impl<S> Default for ListQuery<S> {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            sort: SortKey::default(),
        }
    }
}

impl<S: Copy + PartialEq> ListQuery<S> {
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Filter and sort `items`.
    #[must_use]
    pub fn apply<T: Listable<Status = S>>(&self, items: Vec<T>) -> Vec<T> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let mut items: Vec<T> = items
            .into_iter()
            .filter(|item| self.status.is_none_or(|status| item.status() == status))
            .filter(|item| needle.as_deref().is_none_or(|needle| item.matches(needle)))
            .collect();

        match self.sort {
            SortKey::Newest => items.sort_by_key(|item| std::cmp::Reverse(item.listed_at())),
            SortKey::PriceAsc => items.sort_by_key(|item| item.sort_price().amount),
            SortKey::PriceDesc => {
                items.sort_by_key(|item| std::cmp::Reverse(item.sort_price().amount));
            }
            SortKey::Name => items.sort_by_cached_key(|item| item.label().to_lowercase()),
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use prisona_core::CurrencyCode;

    use super::*;
    use crate::db::fixtures;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_default_query_sorts_newest_first() {
        let products = ListQuery::default().apply(fixtures::products(CurrencyCode::INR));
        assert_eq!(products.len(), 6);
        assert!(products.is_sorted_by(|a, b| a.created_at >= b.created_at));
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_category() {
        let products = ListQuery::default()
            .search("  DAIRY ")
            .sort(SortKey::Name)
            .apply(fixtures::products(CurrencyCode::INR));
        assert_eq!(
            names(&products),
            ["A2 Cow Ghee (500 ml)", "Farm Eggs (12 pcs)"]
        );
    }

    #[test]
    fn test_status_filter_and_price_sort() {
        let products = ListQuery::default()
            .status(ProductStatus::Active)
            .sort(SortKey::PriceDesc)
            .apply(fixtures::products(CurrencyCode::INR));
        assert_eq!(products.len(), 4);
        assert_eq!(products.first().map(|p| p.name.as_str()), Some("Organic Basmati Rice (5 kg)"));
        assert_eq!(products.last().map(|p| p.name.as_str()), Some("Fresh Spinach Bunch"));
    }

    #[test]
    fn test_order_search_by_coupon() {
        let orders = ListQuery::default()
            .search("fresh10")
            .apply(fixtures::orders(CurrencyCode::INR));
        assert_eq!(orders.len(), 1);
        assert_eq!(orders.first().map(|o| o.status), Some(OrderStatus::OutForDelivery));
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("price_desc".parse::<SortKey>(), Ok(SortKey::PriceDesc));
        assert_eq!("Price-Asc".parse::<SortKey>(), Ok(SortKey::PriceAsc));
        assert!("cheapest".parse::<SortKey>().is_err());
    }
}
