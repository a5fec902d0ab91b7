//! Wizard position state machine
//!
//! The listing wizard linearizes its first step into four sub-steps, then
//! continues into two placeholder steps:
//!
//! ```text
//! 1.1 Location
//!     ↓
//! 1.2 PropertyType
//!     ↓
//! 1.3 GeneralCharacteristics
//!     ↓
//! 1.4 InteriorEquipment ──(skip)──┐
//!     ↓                           │
//! 2   Price  (coming soon)  ◄─────┘
//!     ↓
//! 3   Photos (coming soon)
//! ```
//!
//! Every forward edge has the matching backward edge. There are no cycles
//! and Skip exists only at 1.4.

use std::fmt;
use thiserror::Error;

/// Wizard positions in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WizardStep {
    /// 1.1: address and map pin
    #[default]
    Location = 0,
    /// 1.2: category picker
    PropertyType = 1,
    /// 1.3: category-dependent characteristics
    GeneralCharacteristics = 2,
    /// 1.4: interior equipment checkboxes
    InteriorEquipment = 3,
    /// 2: price (placeholder)
    Price = 4,
    /// 3: photos (placeholder)
    Photos = 5,
}

impl WizardStep {
    /// Total number of positions
    pub const COUNT: usize = 6;

    #[inline]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// `(step, sub_step)` pair; placeholders report sub-step 1
    pub const fn position(self) -> (u8, u8) {
        match self {
            Self::Location => (1, 1),
            Self::PropertyType => (1, 2),
            Self::GeneralCharacteristics => (1, 3),
            Self::InteriorEquipment => (1, 4),
            Self::Price => (2, 1),
            Self::Photos => (3, 1),
        }
    }

    /// Inverse of [`WizardStep::position`]
    pub const fn from_position(step: u8, sub_step: u8) -> Option<Self> {
        match (step, sub_step) {
            (1, 1) => Some(Self::Location),
            (1, 2) => Some(Self::PropertyType),
            (1, 3) => Some(Self::GeneralCharacteristics),
            (1, 4) => Some(Self::InteriorEquipment),
            (2, 1) => Some(Self::Price),
            (3, 1) => Some(Self::Photos),
            _ => None,
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Location => Some(Self::PropertyType),
            Self::PropertyType => Some(Self::GeneralCharacteristics),
            Self::GeneralCharacteristics => Some(Self::InteriorEquipment),
            Self::InteriorEquipment => Some(Self::Price),
            Self::Price => Some(Self::Photos),
            Self::Photos => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Location => None,
            Self::PropertyType => Some(Self::Location),
            Self::GeneralCharacteristics => Some(Self::PropertyType),
            Self::InteriorEquipment => Some(Self::GeneralCharacteristics),
            Self::Price => Some(Self::InteriorEquipment),
            Self::Photos => Some(Self::Price),
        }
    }

    /// Target of the Skip edge, which only exists at 1.4
    pub const fn skip_target(self) -> Option<Self> {
        match self {
            Self::InteriorEquipment => Some(Self::Price),
            _ => None,
        }
    }

    /// Steps that only show a "Coming soon" screen
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::Price | Self::Photos)
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Location => "Where is the property?",
            Self::PropertyType => "What type of property?",
            Self::GeneralCharacteristics => "General characteristics",
            Self::InteriorEquipment => "Interior equipment",
            Self::Price => "Price",
            Self::Photos => "Photos",
        }
    }

    /// Progress through the wizard (0-100)
    pub const fn progress_percent(self) -> u8 {
        match self {
            Self::Location => 0,
            Self::PropertyType => 10,
            Self::GeneralCharacteristics => 20,
            Self::InteriorEquipment => 30,
            Self::Price => 60,
            Self::Photos => 80,
        }
    }

    pub const fn all() -> &'static [Self] {
        &[
            Self::Location,
            Self::PropertyType,
            Self::GeneralCharacteristics,
            Self::InteriorEquipment,
            Self::Price,
            Self::Photos,
        ]
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (step, sub) = self.position();
        if self.is_placeholder() {
            write!(f, "Step {}", step)
        } else {
            write!(f, "Step {}.{}", step, sub)
        }
    }
}

/// Refused wizard transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardTransitionError {
    #[error("{from} is the last step")]
    AtLastStep { from: WizardStep },

    #[error("{from} is the first step")]
    AtFirstStep { from: WizardStep },

    #[error("Skip is not available at {from}")]
    SkipNotAllowed { from: WizardStep },

    #[error("{step} has required fields left empty")]
    StepIncomplete { step: WizardStep },
}

impl From<WizardTransitionError> for crate::error::ImmoError {
    fn from(err: WizardTransitionError) -> Self {
        crate::error::ImmoError::WizardTransition(err.to_string())
    }
}
