//! Client-side listing filter builder.
//!
//! Produces the query pairs sent to `GET /api/listings/count` (and any other
//! listing search). Unset criteria are omitted so the backend applies its
//! own defaults.

use crate::error::{ImmoError, Result};
use crate::types::{PropertyCategory, TransactionType};

/// Validated listing filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub category: Option<PropertyCategory>,
    pub transaction: Option<TransactionType>,
    pub city: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_bedrooms: Option<u32>,
    pub min_area: Option<u32>,
    pub premium_only: bool,
}

impl ListingFilter {
    pub fn builder() -> ListingFilterBuilder {
        ListingFilterBuilder::default()
    }

    /// Query pairs in a stable order
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(c) = self.category {
            query.push(("category", c.to_string()));
        }
        if let Some(t) = self.transaction {
            query.push(("transaction", t.to_string()));
        }
        if let Some(city) = &self.city {
            query.push(("city", city.clone()));
        }
        if let Some(p) = self.min_price {
            query.push(("minPrice", p.to_string()));
        }
        if let Some(p) = self.max_price {
            query.push(("maxPrice", p.to_string()));
        }
        if let Some(b) = self.min_bedrooms {
            query.push(("minBedrooms", b.to_string()));
        }
        if let Some(a) = self.min_area {
            query.push(("minArea", a.to_string()));
        }
        if self.premium_only {
            query.push(("premium", "true".to_string()));
        }
        query
    }

    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

/// Builder for [`ListingFilter`]; `build` checks the price range
#[derive(Debug, Clone, Default)]
pub struct ListingFilterBuilder {
    filter: ListingFilter,
}

impl ListingFilterBuilder {
    pub fn category(mut self, category: PropertyCategory) -> Self {
        self.filter.category = Some(category);
        self
    }

    pub fn transaction(mut self, transaction: TransactionType) -> Self {
        self.filter.transaction = Some(transaction);
        self
    }

    /// Blank city names are ignored
    pub fn city(mut self, city: impl Into<String>) -> Self {
        let city = city.into();
        let city = city.trim();
        self.filter.city = (!city.is_empty()).then(|| city.to_string());
        self
    }

    pub fn min_price(mut self, price: u64) -> Self {
        self.filter.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: u64) -> Self {
        self.filter.max_price = Some(price);
        self
    }

    pub fn min_bedrooms(mut self, bedrooms: u32) -> Self {
        self.filter.min_bedrooms = Some(bedrooms);
        self
    }

    pub fn min_area(mut self, area: u32) -> Self {
        self.filter.min_area = Some(area);
        self
    }

    pub fn premium_only(mut self, premium: bool) -> Self {
        self.filter.premium_only = premium;
        self
    }

    pub fn build(self) -> Result<ListingFilter> {
        if let (Some(min), Some(max)) = (self.filter.min_price, self.filter.max_price) {
            if min > max {
                return Err(ImmoError::validation(format!(
                    "minimum price {} is above maximum price {}",
                    min, max
                )));
            }
        }
        Ok(self.filter)
    }
}
