//! reqwest implementation of [`MarketplaceBackend`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use super::{
    CountBody, Listing, MarketplaceBackend, PremiumBody, StatusBody, UserUpdate, validate_id,
};
use crate::config::AppConfig;
use crate::error::{ImmoError, Result};
use crate::filter::ListingFilter;
use crate::types::{ListingStatus, PropertyCategory, ResourceKind};

/// HTTP client for the marketplace REST API
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("immo-tui/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL of an `/api` path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Turn non-2xx answers into [`ImmoError::Api`] with the body text
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "Backend request failed");
        Err(ImmoError::api(status.as_u16(), body))
    }
}

#[async_trait]
impl MarketplaceBackend for HttpBackend {
    async fn featured_listings(&self, category: Option<PropertyCategory>) -> Result<Vec<Listing>> {
        let url = self.endpoint("listings/featured");
        debug!(url = %url, ?category, "Fetching featured listings");

        let mut request = self.client.get(&url);
        if let Some(category) = category {
            request = request.query(&[("category", category.to_string())]);
        }
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn count_listings(&self, filter: &ListingFilter) -> Result<u64> {
        let url = self.endpoint("listings/count");
        let query = filter.to_query();
        debug!(url = %url, ?query, "Counting listings");

        let response = Self::check(self.client.get(&url).query(&query).send().await?).await?;
        let body: CountBody = response.json().await?;
        Ok(body.count)
    }

    async fn set_listing_status(&self, id: &str, status: ListingStatus) -> Result<()> {
        let url = self.endpoint(&format!("listings/{}/status", validate_id(id)?));
        debug!(url = %url, %status, "Updating listing status");

        let request = self.client.patch(&url).json(&StatusBody { status });
        Self::check(request.send().await?).await?;
        Ok(())
    }

    async fn set_listing_premium(&self, id: &str, premium: bool) -> Result<()> {
        let url = self.endpoint(&format!("listings/{}/premium", validate_id(id)?));
        debug!(url = %url, premium, "Updating listing premium flag");

        let request = self.client.patch(&url).json(&PremiumBody { premium });
        Self::check(request.send().await?).await?;
        Ok(())
    }

    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<()> {
        let url = self.endpoint(&format!("{}/{}", kind.collection(), validate_id(id)?));
        debug!(url = %url, %kind, "Deleting resource");

        Self::check(self.client.delete(&url).send().await?).await?;
        Ok(())
    }

    async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(ImmoError::validation("user update needs a role or a status"));
        }
        let url = self.endpoint(&format!("users/{}", validate_id(id)?));
        debug!(url = %url, ?update, "Updating user");

        Self::check(self.client.patch(&url).json(update).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> HttpBackend {
        let config = AppConfig {
            api_base_url: base.to_string(),
            ..Default::default()
        };
        HttpBackend::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let b = backend("https://immo.example.ma/");
        assert_eq!(
            b.endpoint("listings/featured"),
            "https://immo.example.ma/api/listings/featured"
        );
        assert_eq!(b.endpoint("/blog/42"), "https://immo.example.ma/api/blog/42");
    }

    #[tokio::test]
    async fn test_bad_id_fails_before_any_request() {
        // Nothing listens on this port; validation must fail first
        let b = backend("http://127.0.0.1:9");
        let err = b.delete(ResourceKind::Review, "a/b").await.unwrap_err();
        assert!(matches!(err, ImmoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_user_update_rejected() {
        let b = backend("http://127.0.0.1:9");
        let err = b.update_user("u1", &UserUpdate::default()).await.unwrap_err();
        assert!(matches!(err, ImmoError::Validation(_)));
    }
}
