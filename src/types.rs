//! Type-safe marketplace types
//!
//! Categories, listing statuses and user roles are plain Rust enums rather
//! than strings. `strum` gives them stable text forms for the CLI and the
//! wire; `serde` uses the same lowercase spellings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Property category chosen in step 1.2 of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PropertyCategory {
    Apartment,
    Villa,
    Land,
    Commercial,
    Riad,
    House,
}

impl PropertyCategory {
    /// Human label shown in the picker
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Land => "Land",
            Self::Commercial => "Commercial",
            Self::Riad => "Riad",
            Self::House => "House",
        }
    }

    /// Which general-characteristics form applies to this category
    pub const fn branch(self) -> CharacteristicsBranch {
        match self {
            Self::Villa | Self::Riad => CharacteristicsBranch::Villa,
            Self::Land => CharacteristicsBranch::Land,
            Self::Commercial => CharacteristicsBranch::Commercial,
            Self::Apartment | Self::House => CharacteristicsBranch::Residential,
        }
    }
}

/// The four disjoint field sets of the general-characteristics step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacteristicsBranch {
    /// Villa and riad
    Villa,
    Land,
    Commercial,
    /// Apartment and house (the default form)
    Residential,
}

/// Villa sub-type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum VillaType {
    Detached,
    SemiDetached,
    Townhouse,
}

/// Commercial premises sub-type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommercialType {
    Office,
    Shop,
    Warehouse,
    Restaurant,
}

/// Sale or rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TransactionType {
    Sale,
    Rent,
}

/// Moderation status of a published listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ListingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Archived,
}

/// Account role as managed from the admin console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserRole {
    #[default]
    User,
    Agent,
    Admin,
}

/// Account status as managed from the admin console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
}

/// Resource kinds the admin console can delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ResourceKind {
    Listing,
    User,
    Review,
    Blog,
}

impl ResourceKind {
    /// Collection path segment under `/api`
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Listing => "listings",
            Self::User => "users",
            Self::Review => "reviews",
            Self::Blog => "blog",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("Riad".parse::<PropertyCategory>().unwrap(), PropertyCategory::Riad);
        assert_eq!("villa".parse::<PropertyCategory>().unwrap(), PropertyCategory::Villa);
        assert!("castle".parse::<PropertyCategory>().is_err());
    }

    #[test]
    fn test_every_category_has_a_branch() {
        assert_eq!(PropertyCategory::Riad.branch(), CharacteristicsBranch::Villa);
        assert_eq!(PropertyCategory::Villa.branch(), CharacteristicsBranch::Villa);
        assert_eq!(PropertyCategory::Land.branch(), CharacteristicsBranch::Land);
        assert_eq!(PropertyCategory::Commercial.branch(), CharacteristicsBranch::Commercial);
        assert_eq!(PropertyCategory::House.branch(), CharacteristicsBranch::Residential);
        assert_eq!(PropertyCategory::iter().count(), 6);
    }

    #[test]
    fn test_serde_matches_strum_spelling() {
        let json = serde_json::to_string(&VillaType::SemiDetached).unwrap();
        assert_eq!(json, "\"semi-detached\"");
        assert_eq!(VillaType::SemiDetached.to_string(), "semi-detached");
    }

    #[test]
    fn test_resource_collections() {
        assert_eq!(ResourceKind::Listing.collection(), "listings");
        assert_eq!(ResourceKind::Blog.collection(), "blog");
    }
}
