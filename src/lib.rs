//! immo-tui library
//!
//! Listing creation wizard, admin console and the client-side helpers
//! (filters, pagination, toasts) of a real-estate marketplace front-end.

pub mod admin;
pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod draft;
pub mod error;
pub mod filter;
pub mod gazetteer;
pub mod input;
pub mod pagination;
pub mod theme;
pub mod toast;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use admin::AdminConsole;
pub use api::{HttpBackend, Listing, MarketplaceBackend, User, UserUpdate};
pub use config::AppConfig;
pub use draft::{CharField, DraftField, LatLng, ListingDraft};
pub use error::{ImmoError, Result};
pub use filter::{ListingFilter, ListingFilterBuilder};
pub use pagination::Paginator;
pub use toast::{Toast, ToastLevel, ToastQueue};
pub use types::{
    CharacteristicsBranch, CommercialType, ListingStatus, PropertyCategory, ResourceKind,
    TransactionType, UserRole, UserStatus, VillaType,
};
pub use wizard::{MultiStepListingForm, WizardStep, WizardTransitionError};
