//! Step 1.3: general characteristics.
//!
//! The form is a tagged union over [`CharacteristicsBranch`]: the active
//! category decides which fields exist and which of them are required.
//! Numeric fields are typed as text and only accept digits (plus a leading
//! minus for the property floor), so a non-empty numeric field always
//! parses.

use strum::IntoEnumIterator;

use crate::draft::{CharField, DraftField, FieldKind, ListingDraft};
use crate::types::{CharacteristicsBranch, CommercialType, PropertyCategory, VillaType};

/// Longest numeric input accepted, keeps values inside `u32`/`i32`
const MAX_DIGITS: usize = 9;

/// Current value of one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index into [`select_options`] of the field
    Choice(Option<usize>),
    Toggle(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    field: CharField,
    value: FieldValue,
}

impl FieldInput {
    pub fn field(&self) -> CharField {
        self.field
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    fn empty(field: CharField) -> Self {
        let value = match field.kind() {
            FieldKind::Count | FieldKind::SignedCount => FieldValue::Text(String::new()),
            FieldKind::Select => FieldValue::Choice(None),
            FieldKind::Toggle => FieldValue::Toggle(false),
        };
        Self { field, value }
    }

    /// Whether the field counts as filled in
    pub fn is_filled(&self) -> bool {
        match &self.value {
            FieldValue::Text(t) => !t.trim().is_empty(),
            FieldValue::Choice(c) => c.is_some(),
            FieldValue::Toggle(_) => true,
        }
    }

    /// Text shown in the form
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(t) => t.clone(),
            FieldValue::Choice(Some(i)) => select_options(self.field)
                .get(*i)
                .cloned()
                .unwrap_or_default(),
            FieldValue::Choice(None) => String::new(),
            FieldValue::Toggle(true) => "[x]".to_string(),
            FieldValue::Toggle(false) => "[ ]".to_string(),
        }
    }
}

/// Options of a select field, as displayed
pub fn select_options(field: CharField) -> Vec<String> {
    match field {
        CharField::VillaType => VillaType::iter().map(|v| v.to_string()).collect(),
        CharField::CommercialType => CommercialType::iter().map(|v| v.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Local state of the characteristics step.
///
/// Inputs are only created by [`CharacteristicsForm::from_draft`], so every
/// value has the shape its field kind calls for.
#[derive(Debug, Clone, Default)]
pub struct CharacteristicsForm {
    /// Category the form was built for
    category: Option<PropertyCategory>,
    /// `None` until a category has been chosen
    pub branch: Option<CharacteristicsBranch>,
    inputs: Vec<FieldInput>,
    pub focus: usize,
}

impl CharacteristicsForm {
    /// Build the form for the draft's category, prefilled from the draft
    pub fn from_draft(draft: &ListingDraft) -> Self {
        let Some(branch) = draft.category.map(|c| c.branch()) else {
            return Self::default();
        };

        let inputs = CharField::for_branch(branch)
            .iter()
            .map(|&field| {
                let mut input = FieldInput::empty(field);
                input.value = match field {
                    CharField::Area => text_of(draft.area),
                    CharField::Floors => text_of(draft.floors),
                    CharField::PropertyFloor => text_of(draft.property_floor),
                    CharField::Bedrooms => text_of(draft.bedrooms),
                    CharField::Bathrooms => text_of(draft.bathrooms),
                    CharField::LandArea => text_of(draft.land_area),
                    CharField::LevelsAboveGround => text_of(draft.levels_above_ground),
                    CharField::VillaType => FieldValue::Choice(
                        draft
                            .villa_type
                            .and_then(|v| VillaType::iter().position(|o| o == v)),
                    ),
                    CharField::CommercialType => FieldValue::Choice(
                        draft
                            .commercial_type
                            .and_then(|v| CommercialType::iter().position(|o| o == v)),
                    ),
                    CharField::GatedCommunity => FieldValue::Toggle(draft.gated_community),
                    CharField::Elevator => FieldValue::Toggle(draft.elevator),
                    CharField::SecuritySystem => FieldValue::Toggle(draft.security_system),
                };
                input
            })
            .collect();

        Self {
            category: draft.category,
            branch: Some(branch),
            inputs,
            focus: 0,
        }
    }

    pub fn category(&self) -> Option<PropertyCategory> {
        self.category
    }

    pub fn inputs(&self) -> &[FieldInput] {
        &self.inputs
    }

    pub fn focused(&self) -> Option<&FieldInput> {
        self.inputs.get(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + 1) % self.inputs.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.inputs.is_empty() {
            self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
        }
    }

    fn input_mut(&mut self, field: CharField) -> Option<&mut FieldInput> {
        self.inputs.iter_mut().find(|i| i.field == field)
    }

    pub fn input(&self, field: CharField) -> Option<&FieldInput> {
        self.inputs.iter().find(|i| i.field == field)
    }

    /// Type a character into the focused numeric field
    pub fn push_char(&mut self, c: char) {
        let Some(input) = self.inputs.get_mut(self.focus) else {
            return;
        };
        let signed = input.field.kind() == FieldKind::SignedCount;
        if let FieldValue::Text(text) = &mut input.value {
            let digits = text.chars().filter(char::is_ascii_digit).count();
            let accepts = (c.is_ascii_digit() && digits < MAX_DIGITS)
                || (signed && c == '-' && text.is_empty());
            if accepts {
                text.push(c);
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(FieldInput {
            value: FieldValue::Text(text),
            ..
        }) = self.inputs.get_mut(self.focus)
        {
            text.pop();
        }
    }

    /// Space on the focused field: flip a toggle or cycle a select
    pub fn activate_focused(&mut self) {
        let Some(input) = self.inputs.get_mut(self.focus) else {
            return;
        };
        let count = select_options(input.field).len();
        match &mut input.value {
            FieldValue::Toggle(on) => *on = !*on,
            FieldValue::Choice(choice) if count > 0 => {
                *choice = Some(match *choice {
                    Some(i) => (i + 1) % count,
                    None => 0,
                });
            }
            _ => {}
        }
    }

    /// Set a numeric field's text directly; non-digit input is filtered
    pub fn set_text(&mut self, field: CharField, text: &str) {
        let Some(pos) = self.inputs.iter().position(|i| i.field == field) else {
            return;
        };
        if let FieldValue::Text(t) = &mut self.inputs[pos].value {
            t.clear();
        } else {
            return;
        }
        let focus = std::mem::replace(&mut self.focus, pos);
        for c in text.chars() {
            self.push_char(c);
        }
        self.focus = focus;
    }

    pub fn set_choice(&mut self, field: CharField, index: Option<usize>) {
        let count = select_options(field).len();
        if let Some(FieldInput {
            value: FieldValue::Choice(choice),
            ..
        }) = self.input_mut(field)
        {
            *choice = index.filter(|i| *i < count);
        }
    }

    pub fn set_toggle(&mut self, field: CharField, on: bool) {
        if let Some(FieldInput {
            value: FieldValue::Toggle(v),
            ..
        }) = self.input_mut(field)
        {
            *v = on;
        }
    }

    /// Required fields of the active branch that are still empty
    pub fn missing_required(&self) -> Vec<CharField> {
        let Some(branch) = self.branch else {
            return Vec::new();
        };
        self.inputs
            .iter()
            .filter(|i| i.field.is_required_in(branch) && !i.is_filled())
            .map(|i| i.field)
            .collect()
    }

    /// False without a category, or while any required field is empty
    pub fn can_proceed(&self) -> bool {
        self.branch.is_some() && self.missing_required().is_empty()
    }

    /// Draft fields for every input of the active branch
    pub fn commit(&self) -> Vec<DraftField> {
        self.inputs.iter().filter_map(FieldInput::to_draft_field).collect()
    }
}

impl FieldInput {
    /// The draft field this input writes; `None` if the value does not
    /// fit the field
    fn to_draft_field(&self) -> Option<DraftField> {
        let field = match (self.field, &self.value) {
            (CharField::Area, FieldValue::Text(t)) => DraftField::Area(parse_count(t)),
            (CharField::Floors, FieldValue::Text(t)) => DraftField::Floors(parse_count(t)),
            (CharField::PropertyFloor, FieldValue::Text(t)) => {
                DraftField::PropertyFloor(t.trim().parse().ok())
            }
            (CharField::Bedrooms, FieldValue::Text(t)) => DraftField::Bedrooms(parse_count(t)),
            (CharField::Bathrooms, FieldValue::Text(t)) => {
                DraftField::Bathrooms(parse_count(t))
            }
            (CharField::LandArea, FieldValue::Text(t)) => DraftField::LandArea(parse_count(t)),
            (CharField::LevelsAboveGround, FieldValue::Text(t)) => {
                DraftField::LevelsAboveGround(parse_count(t))
            }
            (CharField::VillaType, FieldValue::Choice(c)) => {
                DraftField::VillaType(c.and_then(|i| VillaType::iter().nth(i)))
            }
            (CharField::CommercialType, FieldValue::Choice(c)) => {
                DraftField::CommercialType(c.and_then(|i| CommercialType::iter().nth(i)))
            }
            (CharField::GatedCommunity, FieldValue::Toggle(on)) => {
                DraftField::GatedCommunity(*on)
            }
            (CharField::Elevator, FieldValue::Toggle(on)) => DraftField::Elevator(*on),
            (CharField::SecuritySystem, FieldValue::Toggle(on)) => {
                DraftField::SecuritySystem(*on)
            }
            (field, value) => {
                tracing::warn!(?field, ?value, "Skipping characteristics input of wrong shape");
                return None;
            }
        };
        Some(field)
    }
}

fn text_of<T: ToString>(value: Option<T>) -> FieldValue {
    FieldValue::Text(value.map(|v| v.to_string()).unwrap_or_default())
}

fn parse_count(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyCategory;

    fn form_for(category: PropertyCategory) -> CharacteristicsForm {
        let mut draft = ListingDraft::new();
        draft.update_form_data([DraftField::Category(Some(category))]);
        CharacteristicsForm::from_draft(&draft)
    }

    #[test]
    fn test_no_category_cannot_proceed() {
        let form = CharacteristicsForm::from_draft(&ListingDraft::new());
        assert!(form.branch.is_none());
        assert!(!form.can_proceed());
    }

    #[test]
    fn test_land_needs_only_land_area() {
        let mut form = form_for(PropertyCategory::Land);
        assert_eq!(form.missing_required(), vec![CharField::LandArea]);
        form.set_text(CharField::LandArea, "2500");
        assert!(form.can_proceed());
    }

    #[test]
    fn test_commercial_needs_type_and_area() {
        let mut form = form_for(PropertyCategory::Commercial);
        form.set_text(CharField::Area, "120");
        assert!(!form.can_proceed());
        form.set_choice(CharField::CommercialType, Some(1));
        assert!(form.can_proceed());

        let fields = form.commit();
        assert!(fields.contains(&DraftField::CommercialType(Some(CommercialType::Shop))));
        assert!(fields.contains(&DraftField::Area(Some(120))));
    }

    #[test]
    fn test_riad_uses_villa_form() {
        let form = form_for(PropertyCategory::Riad);
        assert_eq!(form.branch, Some(CharacteristicsBranch::Villa));
        assert!(form.input(CharField::VillaType).is_some());
        assert!(form.input(CharField::Elevator).is_none());
    }

    #[test]
    fn test_numeric_input_rejects_letters() {
        let mut form = form_for(PropertyCategory::Apartment);
        form.push_char('4');
        form.push_char('x');
        form.push_char('2');
        assert_eq!(form.input(CharField::Area).unwrap().display_value(), "42");
    }

    #[test]
    fn test_property_floor_accepts_leading_minus() {
        let mut form = form_for(PropertyCategory::Apartment);
        form.set_text(CharField::PropertyFloor, "-1");
        form.set_text(CharField::Floors, "-1");
        assert_eq!(form.input(CharField::PropertyFloor).unwrap().display_value(), "-1");
        assert_eq!(form.input(CharField::Floors).unwrap().display_value(), "1");
    }

    #[test]
    fn test_digits_are_capped() {
        let mut form = form_for(PropertyCategory::Apartment);
        form.set_text(CharField::Area, "12345678901234");
        let text = form.input(CharField::Area).unwrap().display_value();
        assert_eq!(text.len(), MAX_DIGITS);
        assert!(form.commit().contains(&DraftField::Area(Some(123_456_789))));
    }

    #[test]
    fn test_activate_cycles_select_and_flips_toggle() {
        let mut form = form_for(PropertyCategory::Villa);
        // VillaType is first in the villa form
        form.activate_focused();
        assert_eq!(form.focused().unwrap().value, FieldValue::Choice(Some(0)));
        form.activate_focused();
        form.activate_focused();
        form.activate_focused();
        assert_eq!(form.focused().unwrap().value, FieldValue::Choice(Some(0)));

        form.set_toggle(CharField::GatedCommunity, true);
        assert_eq!(
            form.input(CharField::GatedCommunity).unwrap().value,
            FieldValue::Toggle(true)
        );
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = form_for(PropertyCategory::Land);
        form.focus_previous();
        assert_eq!(form.focus, form.inputs.len() - 1);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_mismatched_value_is_skipped_on_commit() {
        let mut form = form_for(PropertyCategory::Land);
        form.inputs[0].value = FieldValue::Toggle(true);
        let fields = form.commit();
        assert_eq!(fields, vec![DraftField::GatedCommunity(false)]);
    }

    #[test]
    fn test_form_remembers_category() {
        let form = form_for(PropertyCategory::House);
        assert_eq!(form.category(), Some(PropertyCategory::House));
        assert_eq!(form.inputs().len(), 8);
    }

    #[test]
    fn test_prefill_round_trip() {
        let mut draft = ListingDraft::new();
        draft.update_form_data([
            DraftField::Category(Some(PropertyCategory::Villa)),
            DraftField::VillaType(Some(VillaType::Townhouse)),
            DraftField::Area(Some(250)),
        ]);
        let form = CharacteristicsForm::from_draft(&draft);
        let mut copy = draft.clone();
        copy.update_form_data(form.commit());
        assert_eq!(copy, draft);
    }
}
