//! Step 1.4: interior equipment checkboxes.
//!
//! Next is always enabled and persists the three toggles. Skip leaves the
//! draft untouched.

use crate::draft::{DraftField, ListingDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteriorItem {
    Heating,
    AirConditioning,
    EquippedKitchen,
}

impl InteriorItem {
    pub const ALL: [InteriorItem; 3] = [
        Self::Heating,
        Self::AirConditioning,
        Self::EquippedKitchen,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Heating => "Heating",
            Self::AirConditioning => "Air conditioning",
            Self::EquippedKitchen => "Equipped kitchen",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteriorEquipmentStep {
    pub heating: bool,
    pub air_conditioning: bool,
    pub equipped_kitchen: bool,
    pub focus: usize,
}

impl InteriorEquipmentStep {
    pub fn from_draft(draft: &ListingDraft) -> Self {
        Self {
            heating: draft.heating,
            air_conditioning: draft.air_conditioning,
            equipped_kitchen: draft.equipped_kitchen,
            focus: 0,
        }
    }

    pub fn is_checked(&self, item: InteriorItem) -> bool {
        match item {
            InteriorItem::Heating => self.heating,
            InteriorItem::AirConditioning => self.air_conditioning,
            InteriorItem::EquippedKitchen => self.equipped_kitchen,
        }
    }

    pub fn toggle(&mut self, item: InteriorItem) {
        let flag = match item {
            InteriorItem::Heating => &mut self.heating,
            InteriorItem::AirConditioning => &mut self.air_conditioning,
            InteriorItem::EquippedKitchen => &mut self.equipped_kitchen,
        };
        *flag = !*flag;
    }

    pub fn toggle_focused(&mut self) {
        self.toggle(InteriorItem::ALL[self.focus]);
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % InteriorItem::ALL.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus = (self.focus + InteriorItem::ALL.len() - 1) % InteriorItem::ALL.len();
    }

    pub fn can_proceed(&self) -> bool {
        true
    }

    pub fn commit(&self) -> Vec<DraftField> {
        vec![
            DraftField::Heating(self.heating),
            DraftField::AirConditioning(self.air_conditioning),
            DraftField::EquippedKitchen(self.equipped_kitchen),
        ]
    }
}
