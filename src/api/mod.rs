//! Marketplace backend interface
//!
//! The backend is an opaque REST-like JSON service. This module defines the
//! records the client reads, the request bodies it sends, and the
//! [`MarketplaceBackend`] trait the admin console is written against.
//! [`HttpBackend`] is the real implementation; tests use in-memory ones.

mod http;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ImmoError, Result};
use crate::filter::ListingFilter;
use crate::types::{ListingStatus, PropertyCategory, ResourceKind, UserRole, UserStatus};

pub use http::HttpBackend;

/// A published listing as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub category: PropertyCategory,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A user account as shown in the admin console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
}

/// Body of `PATCH /api/users/:id`; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.status.is_none()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusBody {
    pub status: ListingStatus,
}

#[derive(Debug, Serialize)]
pub(crate) struct PremiumBody {
    pub premium: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CountBody {
    pub count: u64,
}

/// Operations the front-end performs against the marketplace backend
#[async_trait]
pub trait MarketplaceBackend: Send + Sync {
    /// `GET /api/listings/featured?category=...`
    async fn featured_listings(&self, category: Option<PropertyCategory>) -> Result<Vec<Listing>>;

    /// `GET /api/listings/count?...filters`
    async fn count_listings(&self, filter: &ListingFilter) -> Result<u64>;

    /// `PATCH /api/listings/:id/status`
    async fn set_listing_status(&self, id: &str, status: ListingStatus) -> Result<()>;

    /// `PATCH /api/listings/:id/premium`
    async fn set_listing_premium(&self, id: &str, premium: bool) -> Result<()>;

    /// `DELETE /api/{listings,users,reviews,blog}/:id`
    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<()>;

    /// `PATCH /api/users/:id`
    async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<()>;
}

/// Reject ids that cannot be used as a single path segment
pub fn validate_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ImmoError::validation("id must not be empty"));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ImmoError::validation(format!(
            "id {:?} may only contain letters, digits, '-' and '_'",
            id
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_accepts_mongo_id() {
        let json = r#"{
            "_id": "65f0a1",
            "title": "Riad in the medina",
            "category": "riad",
            "premium": true
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, "65f0a1");
        assert_eq!(listing.category, PropertyCategory::Riad);
        assert_eq!(listing.status, ListingStatus::Pending);
        assert!(listing.premium);
    }

    #[test]
    fn test_user_update_omits_unset_fields() {
        let update = UserUpdate {
            role: Some(UserRole::Agent),
            status: None,
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"role":"agent"}"#);
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id(" abc-123 ").unwrap(), "abc-123");
        assert!(validate_id("").is_err());
        assert!(validate_id("../users").is_err());
    }
}
