//! Step 1.2: single-select category picker.

use strum::IntoEnumIterator;

use crate::draft::{DraftField, ListingDraft};
use crate::types::PropertyCategory;

#[derive(Debug, Clone)]
pub struct PropertyTypeStep {
    pub options: Vec<PropertyCategory>,
    pub highlighted: usize,
    pub selected: Option<PropertyCategory>,
}

impl Default for PropertyTypeStep {
    fn default() -> Self {
        Self {
            options: PropertyCategory::iter().collect(),
            highlighted: 0,
            selected: None,
        }
    }
}

impl PropertyTypeStep {
    pub fn from_draft(draft: &ListingDraft) -> Self {
        let mut step = Self {
            selected: draft.category,
            ..Default::default()
        };
        if let Some(pos) = draft
            .category
            .and_then(|c| step.options.iter().position(|o| *o == c))
        {
            step.highlighted = pos;
        }
        step
    }

    pub fn highlight_next(&mut self) {
        if self.highlighted + 1 < self.options.len() {
            self.highlighted += 1;
        }
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn select(&mut self, category: PropertyCategory) {
        self.selected = Some(category);
        if let Some(pos) = self.options.iter().position(|o| *o == category) {
            self.highlighted = pos;
        }
    }

    pub fn select_highlighted(&mut self) {
        if let Some(category) = self.options.get(self.highlighted).copied() {
            self.selected = Some(category);
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.selected.is_some()
    }

    pub fn commit(&self) -> Vec<DraftField> {
        vec![DraftField::Category(self.selected)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_selected_blocks_next() {
        let step = PropertyTypeStep::default();
        assert_eq!(step.options.len(), 6);
        assert!(!step.can_proceed());
    }

    #[test]
    fn test_select_highlighted() {
        let mut step = PropertyTypeStep::default();
        step.highlight_next();
        step.select_highlighted();
        assert_eq!(step.selected, Some(PropertyCategory::Villa));
        assert!(step.can_proceed());
    }

    #[test]
    fn test_from_draft_highlights_current_category() {
        let mut draft = ListingDraft::new();
        draft.update_form_data([DraftField::Category(Some(PropertyCategory::Riad))]);
        let step = PropertyTypeStep::from_draft(&draft);
        assert_eq!(step.options[step.highlighted], PropertyCategory::Riad);
        assert_eq!(step.selected, Some(PropertyCategory::Riad));
    }
}
