//! Listing draft held by the creation wizard.
//!
//! The draft lives only in memory while the wizard runs. Steps never write
//! to it directly; they hand a list of [`DraftField`] values to
//! [`ListingDraft::update_form_data`], which overwrites exactly those
//! fields and leaves the rest alone.
//!
//! # Invariants
//!
//! - Category-specific characteristics are only meaningful for the current
//!   `category`. Changing the category clears them.
//! - Nothing here is checked against a backend schema. Required fields are
//!   reported by [`ListingDraft::missing_characteristics`] and only gate the
//!   wizard's Next action.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::types::{CharacteristicsBranch, CommercialType, PropertyCategory, VillaType};

/// A map coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Squared planar distance in degrees.
    ///
    /// Good enough to rank nearby places; not a geodesic distance.
    pub fn distance_sq(&self, other: &LatLng) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        dlat * dlat + dlng * dlng
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Wizard form state for a listing that has not been submitted yet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingDraft {
    // Location
    pub address: String,
    pub location: Option<LatLng>,

    // Property type
    pub category: Option<PropertyCategory>,

    // General characteristics (meaning depends on category)
    pub area: Option<u32>,
    pub floors: Option<u32>,
    pub property_floor: Option<i32>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub land_area: Option<u32>,
    pub levels_above_ground: Option<u32>,
    pub villa_type: Option<VillaType>,
    pub commercial_type: Option<CommercialType>,

    // Amenities
    pub gated_community: bool,
    pub elevator: bool,
    pub security_system: bool,
    pub heating: bool,
    pub air_conditioning: bool,
    pub equipped_kitchen: bool,
}

/// One field assignment applied by [`ListingDraft::update_form_data`]
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Address(String),
    Location(Option<LatLng>),
    Category(Option<PropertyCategory>),
    Area(Option<u32>),
    Floors(Option<u32>),
    PropertyFloor(Option<i32>),
    Bedrooms(Option<u32>),
    Bathrooms(Option<u32>),
    LandArea(Option<u32>),
    LevelsAboveGround(Option<u32>),
    VillaType(Option<VillaType>),
    CommercialType(Option<CommercialType>),
    GatedCommunity(bool),
    Elevator(bool),
    SecuritySystem(bool),
    Heating(bool),
    AirConditioning(bool),
    EquippedKitchen(bool),
}

/// Fields of the general-characteristics step, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharField {
    Area,
    Floors,
    PropertyFloor,
    Bedrooms,
    Bathrooms,
    LandArea,
    LevelsAboveGround,
    VillaType,
    CommercialType,
    GatedCommunity,
    Elevator,
    SecuritySystem,
}

/// How a characteristics field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-negative whole number typed as text
    Count,
    /// Whole number that may be negative (basement floors)
    SignedCount,
    /// One of a fixed list of options
    Select,
    /// Checkbox
    Toggle,
}

impl CharField {
    /// Field set of a branch, in display order
    pub fn for_branch(branch: CharacteristicsBranch) -> &'static [CharField] {
        match branch {
            CharacteristicsBranch::Villa => &[
                Self::VillaType,
                Self::Area,
                Self::LandArea,
                Self::LevelsAboveGround,
                Self::Bedrooms,
                Self::Bathrooms,
                Self::GatedCommunity,
                Self::SecuritySystem,
            ],
            CharacteristicsBranch::Land => &[Self::LandArea, Self::GatedCommunity],
            CharacteristicsBranch::Commercial => &[
                Self::CommercialType,
                Self::Area,
                Self::Floors,
                Self::PropertyFloor,
                Self::SecuritySystem,
            ],
            CharacteristicsBranch::Residential => &[
                Self::Area,
                Self::Bedrooms,
                Self::Bathrooms,
                Self::Floors,
                Self::PropertyFloor,
                Self::Elevator,
                Self::GatedCommunity,
                Self::SecuritySystem,
            ],
        }
    }

    /// Whether Next is disabled while this field is empty in `branch`
    pub fn is_required_in(self, branch: CharacteristicsBranch) -> bool {
        use CharacteristicsBranch as B;
        match (branch, self) {
            (
                B::Villa,
                Self::Area
                | Self::Bedrooms
                | Self::Bathrooms
                | Self::LevelsAboveGround
                | Self::VillaType,
            ) => true,
            (B::Land, Self::LandArea) => true,
            (B::Commercial, Self::Area | Self::CommercialType) => true,
            (B::Residential, Self::Area | Self::Bedrooms | Self::Bathrooms) => true,
            _ => false,
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::PropertyFloor => FieldKind::SignedCount,
            Self::VillaType | Self::CommercialType => FieldKind::Select,
            Self::GatedCommunity | Self::Elevator | Self::SecuritySystem => FieldKind::Toggle,
            _ => FieldKind::Count,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Area => "Living area (m²)",
            Self::Floors => "Number of floors",
            Self::PropertyFloor => "Floor of the property",
            Self::Bedrooms => "Bedrooms",
            Self::Bathrooms => "Bathrooms",
            Self::LandArea => "Land area (m²)",
            Self::LevelsAboveGround => "Levels above ground",
            Self::VillaType => "Villa type",
            Self::CommercialType => "Commercial type",
            Self::GatedCommunity => "Gated community",
            Self::Elevator => "Elevator",
            Self::SecuritySystem => "Security system",
        }
    }
}

impl ListingDraft {
    /// Create an empty draft, as when the wizard starts
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow-merge `fields` into the draft.
    ///
    /// Each field present overwrites the stored value; absent fields are
    /// untouched. A category change clears the category-specific
    /// characteristics before any later field in the same batch is applied.
    pub fn update_form_data<I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = DraftField>,
    {
        for field in fields {
            self.apply(field);
        }
    }

    fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Address(v) => self.address = v,
            DraftField::Location(v) => self.location = v,
            DraftField::Category(v) => {
                if self.category != v {
                    self.clear_characteristics();
                }
                self.category = v;
            }
            DraftField::Area(v) => self.area = v,
            DraftField::Floors(v) => self.floors = v,
            DraftField::PropertyFloor(v) => self.property_floor = v,
            DraftField::Bedrooms(v) => self.bedrooms = v,
            DraftField::Bathrooms(v) => self.bathrooms = v,
            DraftField::LandArea(v) => self.land_area = v,
            DraftField::LevelsAboveGround(v) => self.levels_above_ground = v,
            DraftField::VillaType(v) => self.villa_type = v,
            DraftField::CommercialType(v) => self.commercial_type = v,
            DraftField::GatedCommunity(v) => self.gated_community = v,
            DraftField::Elevator(v) => self.elevator = v,
            DraftField::SecuritySystem(v) => self.security_system = v,
            DraftField::Heating(v) => self.heating = v,
            DraftField::AirConditioning(v) => self.air_conditioning = v,
            DraftField::EquippedKitchen(v) => self.equipped_kitchen = v,
        }
    }

    /// Reset every category-specific characteristic.
    ///
    /// Interior equipment (heating, air conditioning, kitchen) is kept: it
    /// does not depend on the category.
    fn clear_characteristics(&mut self) {
        self.area = None;
        self.floors = None;
        self.property_floor = None;
        self.bedrooms = None;
        self.bathrooms = None;
        self.land_area = None;
        self.levels_above_ground = None;
        self.villa_type = None;
        self.commercial_type = None;
        self.gated_community = false;
        self.elevator = false;
        self.security_system = false;
    }

    /// Whether the location step has everything it needs
    pub fn has_location(&self) -> bool {
        !self.address.trim().is_empty() && self.location.is_some()
    }

    /// Whether `field` holds a value (toggles always do)
    pub fn has_value(&self, field: CharField) -> bool {
        match field {
            CharField::Area => self.area.is_some(),
            CharField::Floors => self.floors.is_some(),
            CharField::PropertyFloor => self.property_floor.is_some(),
            CharField::Bedrooms => self.bedrooms.is_some(),
            CharField::Bathrooms => self.bathrooms.is_some(),
            CharField::LandArea => self.land_area.is_some(),
            CharField::LevelsAboveGround => self.levels_above_ground.is_some(),
            CharField::VillaType => self.villa_type.is_some(),
            CharField::CommercialType => self.commercial_type.is_some(),
            CharField::GatedCommunity | CharField::Elevator | CharField::SecuritySystem => true,
        }
    }

    /// Required characteristics still empty for the current category.
    ///
    /// Without a category nothing is interpretable and `None` is returned.
    pub fn missing_characteristics(&self) -> Option<Vec<CharField>> {
        let branch = self.category?.branch();
        Some(
            CharField::for_branch(branch)
                .iter()
                .copied()
                .filter(|f| f.is_required_in(branch) && !self.has_value(*f))
                .collect(),
        )
    }

    /// Save the draft as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize draft to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write draft to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a draft previously written by [`ListingDraft::save_to_file`]
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read draft from {:?}", path.as_ref()))?;

        let draft: Self = serde_json::from_str(&content).context("Failed to parse draft JSON")?;

        Ok(draft)
    }
}
