//! Multi-step listing creation wizard
//!
//! [`MultiStepListingForm`] owns the [`ListingDraft`] and the current
//! [`WizardStep`]. Each step keeps its own editing state and only writes
//! into the draft when the user moves forward, through
//! [`ListingDraft::update_form_data`].
//!
//! # Transitions
//!
//! - `handle_next` commits the current step and moves forward. It is
//!   refused while the step cannot proceed.
//! - `handle_back` moves backward without committing; the step's local
//!   edits are kept for when the user returns.
//! - `handle_skip` exists only at 1.4. It drops the step's local values
//!   and goes to step 2.

pub mod characteristics;
pub mod interior;
pub mod location;
pub mod property_type;
pub mod state;

use tracing::{debug, info};

use crate::draft::ListingDraft;

pub use characteristics::CharacteristicsForm;
pub use interior::{InteriorEquipmentStep, InteriorItem};
pub use location::LocationStep;
pub use property_type::PropertyTypeStep;
pub use state::{WizardStep, WizardTransitionError};

/// Orchestrator of the listing creation wizard
#[derive(Debug, Clone, Default)]
pub struct MultiStepListingForm {
    step: WizardStep,
    draft: ListingDraft,
    pub location: LocationStep,
    pub property_type: PropertyTypeStep,
    pub characteristics: CharacteristicsForm,
    pub interior: InteriorEquipmentStep,
}

impl MultiStepListingForm {
    /// Start a wizard with an empty draft at 1.1
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Current `(step, sub_step)` pair
    #[inline]
    pub fn position(&self) -> (u8, u8) {
        self.step.position()
    }

    #[inline]
    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    /// Give up the draft, as when the wizard is left
    pub fn into_draft(self) -> ListingDraft {
        self.draft
    }

    /// Whether Next is enabled on the current step
    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStep::Location => self.location.can_proceed(),
            WizardStep::PropertyType => self.property_type.can_proceed(),
            WizardStep::GeneralCharacteristics => self.characteristics.can_proceed(),
            WizardStep::InteriorEquipment => self.interior.can_proceed(),
            WizardStep::Price => true,
            WizardStep::Photos => false,
        }
    }

    /// Commit the current step and move to the next one
    pub fn handle_next(&mut self) -> Result<WizardStep, WizardTransitionError> {
        let Some(next) = self.step.next() else {
            return Err(WizardTransitionError::AtLastStep { from: self.step });
        };
        if !self.can_proceed() {
            return Err(WizardTransitionError::StepIncomplete { step: self.step });
        }

        let fields = match self.step {
            WizardStep::Location => self.location.commit(),
            WizardStep::PropertyType => self.property_type.commit(),
            WizardStep::GeneralCharacteristics => self.characteristics.commit(),
            WizardStep::InteriorEquipment => self.interior.commit(),
            WizardStep::Price | WizardStep::Photos => Vec::new(),
        };
        self.draft.update_form_data(fields);

        self.enter(next);
        Ok(next)
    }

    /// Move to the previous step without committing
    pub fn handle_back(&mut self) -> Result<WizardStep, WizardTransitionError> {
        let Some(previous) = self.step.previous() else {
            return Err(WizardTransitionError::AtFirstStep { from: self.step });
        };
        self.enter(previous);
        Ok(previous)
    }

    /// Skip interior equipment without persisting its values
    pub fn handle_skip(&mut self) -> Result<WizardStep, WizardTransitionError> {
        let Some(target) = self.step.skip_target() else {
            return Err(WizardTransitionError::SkipNotAllowed { from: self.step });
        };
        self.interior = InteriorEquipmentStep::from_draft(&self.draft);
        info!("Interior equipment skipped");
        self.enter(target);
        Ok(target)
    }

    fn enter(&mut self, step: WizardStep) {
        debug!(from = %self.step, to = %step, "Wizard transition");

        // The characteristics form is only valid for the category it was
        // built for; rebuild it when the committed category changed, even
        // within the same branch, since the draft was cleared.
        if step == WizardStep::GeneralCharacteristics
            && self.characteristics.category() != self.draft.category
        {
            self.characteristics = CharacteristicsForm::from_draft(&self.draft);
        }

        self.step = step;
    }

    /// First step whose data is missing from `draft`, if any.
    ///
    /// Placeholder steps carry no data and are never reported.
    pub fn first_incomplete_step(draft: &ListingDraft) -> Option<WizardStep> {
        if !draft.has_location() {
            return Some(WizardStep::Location);
        }
        match draft.missing_characteristics() {
            None => Some(WizardStep::PropertyType),
            Some(missing) if !missing.is_empty() => Some(WizardStep::GeneralCharacteristics),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{CharField, LatLng};
    use crate::types::PropertyCategory;

    fn at_interior() -> MultiStepListingForm {
        let mut form = MultiStepListingForm::new();
        form.location.move_marker(LatLng::new(31.6363, -8.0104));
        form.handle_next().unwrap();
        form.property_type.select(PropertyCategory::Land);
        form.handle_next().unwrap();
        form.characteristics.set_text(CharField::LandArea, "800");
        form.handle_next().unwrap();
        form
    }

    #[test]
    fn test_starts_empty_at_first_step() {
        let form = MultiStepListingForm::new();
        assert_eq!(form.position(), (1, 1));
        assert_eq!(form.draft(), &ListingDraft::default());
    }

    #[test]
    fn test_next_refused_while_incomplete() {
        let mut form = MultiStepListingForm::new();
        let err = form.handle_next().unwrap_err();
        assert_eq!(
            err,
            WizardTransitionError::StepIncomplete {
                step: WizardStep::Location
            }
        );
        assert_eq!(form.position(), (1, 1));
    }

    #[test]
    fn test_next_commits_into_draft() {
        let form = at_interior();
        assert_eq!(form.position(), (1, 4));
        assert_eq!(form.draft().address, "Gueliz, Marrakech");
        assert_eq!(form.draft().category, Some(PropertyCategory::Land));
        assert_eq!(form.draft().land_area, Some(800));
    }

    #[test]
    fn test_skip_discards_interior_values() {
        let mut form = at_interior();
        form.interior.toggle(InteriorItem::Heating);
        assert_eq!(form.handle_skip().unwrap(), WizardStep::Price);
        assert_eq!(form.position(), (2, 1));
        assert!(!form.draft().heating);

        // Coming back shows the draft's values, not the skipped ones
        form.handle_back().unwrap();
        assert!(!form.interior.heating);
    }

    #[test]
    fn test_next_from_interior_persists_values() {
        let mut form = at_interior();
        form.interior.toggle(InteriorItem::EquippedKitchen);
        form.handle_next().unwrap();
        assert!(form.draft().equipped_kitchen);
    }

    #[test]
    fn test_skip_refused_elsewhere() {
        let mut form = MultiStepListingForm::new();
        assert!(matches!(
            form.handle_skip(),
            Err(WizardTransitionError::SkipNotAllowed { .. })
        ));
    }

    #[test]
    fn test_back_at_first_step() {
        let mut form = MultiStepListingForm::new();
        assert!(matches!(
            form.handle_back(),
            Err(WizardTransitionError::AtFirstStep { .. })
        ));
    }

    #[test]
    fn test_photos_is_last() {
        let mut form = at_interior();
        form.handle_next().unwrap();
        form.handle_next().unwrap();
        assert_eq!(form.step(), WizardStep::Photos);
        assert!(matches!(
            form.handle_next(),
            Err(WizardTransitionError::AtLastStep { .. })
        ));
    }

    #[test]
    fn test_category_change_rebuilds_characteristics() {
        let mut form = at_interior();
        form.handle_back().unwrap();
        form.handle_back().unwrap();
        form.property_type.select(PropertyCategory::Apartment);
        form.handle_next().unwrap();

        assert!(form.characteristics.input(CharField::LandArea).is_none());
        assert!(form.characteristics.input(CharField::Bedrooms).is_some());
        assert_eq!(form.draft().land_area, None);
    }

    #[test]
    fn test_back_keeps_local_edits() {
        let mut form = MultiStepListingForm::new();
        form.location.move_marker(LatLng::new(34.0209, -6.8416));
        form.handle_next().unwrap();
        form.property_type.select(PropertyCategory::House);
        form.handle_back().unwrap();
        form.handle_next().unwrap();
        assert_eq!(form.property_type.selected, Some(PropertyCategory::House));
    }

    #[test]
    fn test_first_incomplete_step() {
        let form = at_interior();
        assert_eq!(MultiStepListingForm::first_incomplete_step(form.draft()), None);
        assert_eq!(
            MultiStepListingForm::first_incomplete_step(&ListingDraft::new()),
            Some(WizardStep::Location)
        );
    }
}
