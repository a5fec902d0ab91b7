//! Wizard flow tests
//!
//! Drive the listing wizard end to end through its public API, covering
//! each characteristics branch and the transition rules.

use immotui::draft::{CharField, LatLng, ListingDraft};
use immotui::types::{CommercialType, PropertyCategory, VillaType};
use immotui::wizard::{InteriorItem, MultiStepListingForm, WizardStep, WizardTransitionError};

fn located_form() -> MultiStepListingForm {
    let mut form = MultiStepListingForm::new();
    form.location.set_address("Agdal");
    assert!(form.location.select_suggestion(0));
    form.handle_next().expect("location is complete");
    form
}

// =============================================================================
// Location
// =============================================================================

#[test]
fn test_location_requires_address_and_pin() {
    let mut form = MultiStepListingForm::new();
    form.location.set_address("Somewhere");
    assert!(!form.can_proceed(), "address alone is not enough");

    form.location.move_marker(LatLng::new(31.6295, -7.9811));
    assert!(form.can_proceed());
}

#[test]
fn test_suggestion_commits_label_and_coordinates() {
    let form = located_form();
    assert_eq!(form.draft().address, "Agdal, Rabat");
    assert_eq!(form.draft().location, Some(LatLng::new(33.9985, -6.8516)));
}

#[test]
fn test_far_pin_falls_back_to_coordinates() {
    let mut form = MultiStepListingForm::new();
    form.location.move_marker(LatLng::new(10.0, 10.0));
    assert_eq!(form.location.address, "10.00000, 10.00000");
    assert!(form.can_proceed());
}

// =============================================================================
// Characteristics branches
// =============================================================================

#[test]
fn test_villa_branch_full_flow() {
    let mut form = located_form();
    form.property_type.select(PropertyCategory::Riad);
    form.handle_next().unwrap();

    for (field, value) in [
        (CharField::Area, "320"),
        (CharField::Bedrooms, "5"),
        (CharField::Bathrooms, "3"),
        (CharField::LevelsAboveGround, "2"),
    ] {
        assert!(!form.can_proceed());
        form.characteristics.set_text(field, value);
    }
    assert!(!form.can_proceed(), "villa type still missing");
    form.characteristics.set_choice(CharField::VillaType, Some(2));
    assert!(form.can_proceed());

    form.characteristics.set_toggle(CharField::GatedCommunity, true);
    form.handle_next().unwrap();

    let draft = form.draft();
    assert_eq!(draft.area, Some(320));
    assert_eq!(draft.levels_above_ground, Some(2));
    assert_eq!(draft.villa_type, Some(VillaType::Townhouse));
    assert!(draft.gated_community);
    assert_eq!(draft.missing_characteristics(), Some(vec![]));
}

#[test]
fn test_commercial_branch_fields() {
    let mut form = located_form();
    form.property_type.select(PropertyCategory::Commercial);
    form.handle_next().unwrap();

    assert!(form.characteristics.input(CharField::Bedrooms).is_none());
    assert!(form.characteristics.input(CharField::PropertyFloor).is_some());

    form.characteristics.set_text(CharField::Area, "90");
    form.characteristics.set_choice(CharField::CommercialType, Some(1));
    form.characteristics.set_text(CharField::PropertyFloor, "-1");
    assert!(form.can_proceed());
    form.handle_next().unwrap();

    assert_eq!(form.draft().commercial_type, Some(CommercialType::Shop));
    assert_eq!(form.draft().property_floor, Some(-1));
}

#[test]
fn test_residential_branch_optional_fields_stay_optional() {
    let mut form = located_form();
    form.property_type.select(PropertyCategory::Apartment);
    form.handle_next().unwrap();

    form.characteristics.set_text(CharField::Area, "75");
    form.characteristics.set_text(CharField::Bedrooms, "2");
    form.characteristics.set_text(CharField::Bathrooms, "1");
    assert!(form.can_proceed());
    form.handle_next().unwrap();

    assert_eq!(form.draft().floors, None);
    assert!(!form.draft().elevator);
}

#[test]
fn test_no_category_cannot_proceed() {
    let mut form = located_form();
    assert!(!form.can_proceed());
    assert_eq!(
        form.handle_next(),
        Err(WizardTransitionError::StepIncomplete {
            step: WizardStep::PropertyType
        })
    );
}

#[test]
fn test_changing_category_clears_characteristics() {
    let mut form = located_form();
    form.property_type.select(PropertyCategory::House);
    form.handle_next().unwrap();
    form.characteristics.set_text(CharField::Area, "150");
    form.characteristics.set_text(CharField::Bedrooms, "4");
    form.characteristics.set_text(CharField::Bathrooms, "2");
    form.handle_next().unwrap();
    form.interior.toggle(InteriorItem::Heating);
    form.handle_next().unwrap();
    assert_eq!(form.draft().bedrooms, Some(4));

    // Back to 1.2 and switch to land
    for _ in 0..3 {
        form.handle_back().unwrap();
    }
    assert_eq!(form.step(), WizardStep::PropertyType);
    form.property_type.select(PropertyCategory::Land);
    form.handle_next().unwrap();

    assert_eq!(form.draft().bedrooms, None);
    assert_eq!(form.draft().area, None);
    assert!(form.draft().heating, "interior equipment does not depend on category");
    assert!(!form.can_proceed());
}

fn filled_apartment() -> MultiStepListingForm {
    let mut form = located_form();
    form.property_type.select(PropertyCategory::Apartment);
    form.handle_next().unwrap();
    form.characteristics.set_text(CharField::Area, "90");
    form.characteristics.set_text(CharField::Bedrooms, "3");
    form.characteristics.set_text(CharField::Bathrooms, "2");
    form.handle_next().unwrap();
    form.handle_back().unwrap();
    form.handle_back().unwrap();
    assert_eq!(form.step(), WizardStep::PropertyType);
    form
}

#[test]
fn test_same_branch_category_change_resets_form() {
    let mut form = filled_apartment();
    form.property_type.select(PropertyCategory::House);
    form.handle_next().unwrap();

    assert_eq!(form.draft().area, None);
    assert_eq!(
        form.characteristics.input(CharField::Area).unwrap().display_value(),
        ""
    );
    assert!(!form.can_proceed());
    assert_eq!(
        MultiStepListingForm::first_incomplete_step(form.draft()),
        Some(WizardStep::GeneralCharacteristics)
    );
}

#[test]
fn test_same_category_keeps_form_values() {
    let mut form = filled_apartment();
    form.property_type.select(PropertyCategory::Apartment);
    form.handle_next().unwrap();

    assert_eq!(form.draft().area, Some(90));
    assert_eq!(
        form.characteristics.input(CharField::Area).unwrap().display_value(),
        "90"
    );
    assert!(form.can_proceed());
}

// =============================================================================
// Interior equipment, skip and placeholders
// =============================================================================

fn at_interior() -> MultiStepListingForm {
    let mut form = located_form();
    form.property_type.select(PropertyCategory::Land);
    form.handle_next().unwrap();
    form.characteristics.set_text(CharField::LandArea, "1200");
    form.handle_next().unwrap();
    assert_eq!(form.position(), (1, 4));
    form
}

#[test]
fn test_interior_next_persists_and_skip_does_not() {
    let mut kept = at_interior();
    kept.interior.toggle(InteriorItem::AirConditioning);
    kept.handle_next().unwrap();
    assert!(kept.draft().air_conditioning);

    let mut skipped = at_interior();
    skipped.interior.toggle(InteriorItem::AirConditioning);
    skipped.handle_skip().unwrap();
    assert!(!skipped.draft().air_conditioning);
    assert_eq!(skipped.position(), (2, 1));
}

#[test]
fn test_placeholders_back_and_terminal() {
    let mut form = at_interior();
    form.handle_next().unwrap();
    assert_eq!(form.step(), WizardStep::Price);
    assert!(form.can_proceed());

    form.handle_next().unwrap();
    assert_eq!(form.position(), (3, 1));
    assert!(!form.can_proceed());
    assert!(matches!(
        form.handle_next(),
        Err(WizardTransitionError::AtLastStep { .. })
    ));

    form.handle_back().unwrap();
    form.handle_back().unwrap();
    assert_eq!(form.position(), (1, 4));
}

#[test]
fn test_transition_error_converts_to_library_error() {
    let mut form = MultiStepListingForm::new();
    let err: immotui::ImmoError = form.handle_back().unwrap_err().into();
    assert!(err.to_string().contains("first step"));
}

#[test]
fn test_first_incomplete_step_for_partial_drafts() {
    let mut draft = ListingDraft::new();
    assert_eq!(
        MultiStepListingForm::first_incomplete_step(&draft),
        Some(WizardStep::Location)
    );

    draft.address = "Hay Riad, Rabat".to_string();
    draft.location = Some(LatLng::new(33.9602, -6.8703));
    assert_eq!(
        MultiStepListingForm::first_incomplete_step(&draft),
        Some(WizardStep::PropertyType)
    );

    draft.category = Some(PropertyCategory::Villa);
    draft.area = Some(400);
    assert_eq!(
        MultiStepListingForm::first_incomplete_step(&draft),
        Some(WizardStep::GeneralCharacteristics)
    );
}
