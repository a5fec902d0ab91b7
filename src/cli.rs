use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::filter::ListingFilter;
use crate::types::{
    ListingStatus, PropertyCategory, ResourceKind, TransactionType, UserRole, UserStatus,
};

/// immo-tui - create property listings and moderate the marketplace
#[derive(Parser, Debug)]
#[command(name = "immo-tui")]
#[command(about = "Terminal front-end for a real-estate marketplace")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file (API URL, timeouts, page size)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Where the TUI writes its log; defaults to immo-tui.log
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the listing creation wizard (default)
    Wizard {
        /// Enable Ctrl+S, which writes the draft to this file
        #[arg(long)]
        save_draft: Option<PathBuf>,
    },
    /// Check a saved draft and report the first incomplete step
    ValidateDraft {
        /// Path to a draft written by `wizard --save-draft`
        path: PathBuf,
    },
    /// Administrator actions against the marketplace API
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Listing moderation
    Listings {
        #[command(subcommand)]
        command: ListingCommands,
    },
    /// Delete a listing, user, review or blog post
    Delete {
        /// What to delete
        kind: ResourceKind,
        id: String,
        /// Required: deletion cannot be undone
        #[arg(long)]
        confirm: bool,
    },
    /// User account management
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ListingCommands {
    /// Show featured listings
    Featured {
        #[arg(long)]
        category: Option<PropertyCategory>,
        /// Page to print, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Count listings matching filters
    Count(FilterArgs),
    /// Set a listing's moderation status
    Status { id: String, status: ListingStatus },
    /// Turn the premium flag on or off
    Premium {
        id: String,
        #[arg(long, conflicts_with = "disable", required_unless_present = "disable")]
        enable: bool,
        #[arg(long)]
        disable: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Change a user's role and/or status
    Update {
        id: String,
        #[arg(long)]
        role: Option<UserRole>,
        #[arg(long)]
        status: Option<UserStatus>,
    },
}

/// Search filters shared by listing queries
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub category: Option<PropertyCategory>,
    #[arg(long)]
    pub transaction: Option<TransactionType>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub min_price: Option<u64>,
    #[arg(long)]
    pub max_price: Option<u64>,
    #[arg(long)]
    pub min_bedrooms: Option<u32>,
    #[arg(long)]
    pub min_area: Option<u32>,
    /// Only premium listings
    #[arg(long)]
    pub premium: bool,
}

impl FilterArgs {
    pub fn to_filter(&self) -> crate::error::Result<ListingFilter> {
        let mut builder = ListingFilter::builder().premium_only(self.premium);
        if let Some(category) = self.category {
            builder = builder.category(category);
        }
        if let Some(transaction) = self.transaction {
            builder = builder.transaction(transaction);
        }
        if let Some(city) = &self.city {
            builder = builder.city(city.clone());
        }
        if let Some(price) = self.min_price {
            builder = builder.min_price(price);
        }
        if let Some(price) = self.max_price {
            builder = builder.max_price(price);
        }
        if let Some(bedrooms) = self.min_bedrooms {
            builder = builder.min_bedrooms(bedrooms);
        }
        if let Some(area) = self.min_area {
            builder = builder.min_area(area);
        }
        builder.build()
    }
}
