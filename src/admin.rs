//! Administrator console
//!
//! Holds the rows the admin is looking at and performs moderation actions
//! against a [`MarketplaceBackend`]. Mutations are optimistic: the local
//! row changes first, then the request is sent. A failed request is logged
//! and reported as an error toast; the local change is not rolled back.

use tracing::{error, info};

use crate::api::{Listing, MarketplaceBackend, User, UserUpdate};
use crate::error::Result;
use crate::filter::ListingFilter;
use crate::pagination::Paginator;
use crate::toast::ToastQueue;
use crate::types::{ListingStatus, PropertyCategory, ResourceKind};

pub struct AdminConsole<B> {
    backend: B,
    pub listings: Vec<Listing>,
    pub users: Vec<User>,
    pub toasts: ToastQueue,
    pub paginator: Paginator,
}

impl<B: MarketplaceBackend> AdminConsole<B> {
    pub fn new(backend: B, toasts: ToastQueue, page_size: usize) -> Self {
        Self {
            backend,
            listings: Vec::new(),
            users: Vec::new(),
            toasts,
            paginator: Paginator::new(0, page_size),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Listings on the current page
    pub fn visible_listings(&self) -> &[Listing] {
        self.paginator.slice(&self.listings)
    }

    /// Replace the local listing rows with the featured listings
    pub async fn load_featured(&mut self, category: Option<PropertyCategory>) -> Result<()> {
        match self.backend.featured_listings(category).await {
            Ok(listings) => {
                info!(count = listings.len(), "Featured listings loaded");
                self.paginator = Paginator::new(listings.len(), self.paginator.page_size());
                self.listings = listings;
                Ok(())
            }
            Err(e) => {
                error!("Failed to load featured listings: {}", e);
                self.toasts.error("Could not load listings");
                Err(e)
            }
        }
    }

    pub async fn count_listings(&mut self, filter: &ListingFilter) -> Result<u64> {
        self.backend.count_listings(filter).await.inspect_err(|e| {
            error!("Failed to count listings: {}", e);
            self.toasts.error("Could not count listings");
        })
    }

    pub async fn set_listing_status(&mut self, id: &str, status: ListingStatus) -> Result<()> {
        if let Some(row) = self.listings.iter_mut().find(|l| l.id == id) {
            row.status = status;
        }
        let result = self.backend.set_listing_status(id, status).await;
        self.report(result, format!("Listing marked {}", status), "Could not update status")
    }

    pub async fn set_listing_premium(&mut self, id: &str, premium: bool) -> Result<()> {
        if let Some(row) = self.listings.iter_mut().find(|l| l.id == id) {
            row.premium = premium;
        }
        let result = self.backend.set_listing_premium(id, premium).await;
        let done = if premium {
            "Listing promoted to premium"
        } else {
            "Premium removed from listing"
        };
        self.report(result, done, "Could not update premium flag")
    }

    /// Delete a listing, user, review or blog post
    pub async fn delete(&mut self, kind: ResourceKind, id: &str) -> Result<()> {
        match kind {
            ResourceKind::Listing => {
                self.listings.retain(|l| l.id != id);
                self.paginator.set_total(self.listings.len());
            }
            ResourceKind::User => self.users.retain(|u| u.id != id),
            // Reviews and blog posts are not held locally
            ResourceKind::Review | ResourceKind::Blog => {}
        }
        let result = self.backend.delete(kind, id).await;
        self.report(
            result,
            format!("Deleted {} {}", kind, id),
            format!("Could not delete {}", kind),
        )
    }

    pub async fn update_user(&mut self, id: &str, update: &UserUpdate) -> Result<()> {
        if let Some(row) = self.users.iter_mut().find(|u| u.id == id) {
            if let Some(role) = update.role {
                row.role = role;
            }
            if let Some(status) = update.status {
                row.status = status;
            }
        }
        let result = self.backend.update_user(id, update).await;
        self.report(result, "User updated", "Could not update user")
    }

    fn report(
        &mut self,
        result: Result<()>,
        success: impl Into<String>,
        failure: impl Into<String>,
    ) -> Result<()> {
        match result {
            Ok(()) => {
                let message = success.into();
                info!("{}", message);
                self.toasts.success(message);
                Ok(())
            }
            Err(e) => {
                let message = failure.into();
                error!("{}: {}", message, e);
                self.toasts.error(message);
                Err(e)
            }
        }
    }
}
