//! Step 1.1: address with autocomplete and a movable map pin.

use tracing::debug;

use crate::draft::{DraftField, LatLng};
use crate::gazetteer::{self, Place};

/// Where a fresh pin is dropped when the draft has no location yet
pub const DEFAULT_MAP_CENTER: LatLng = LatLng::new(33.5731, -7.5898);

/// Degrees moved per arrow-key press on the map
pub const PIN_STEP_DEGREES: f64 = 0.005;

/// Local state of the location step
#[derive(Debug, Clone, Default)]
pub struct LocationStep {
    pub address: String,
    pub marker_position: Option<LatLng>,
    pub suggestions: Vec<&'static Place>,
    /// Highlighted row in `suggestions`
    pub highlighted: usize,
}

impl LocationStep {
    /// Replace the address text and recompute suggestions
    pub fn set_address(&mut self, text: impl Into<String>) {
        self.address = text.into();
        self.refresh_suggestions();
    }

    pub fn push_char(&mut self, c: char) {
        self.address.push(c);
        self.refresh_suggestions();
    }

    pub fn pop_char(&mut self) {
        self.address.pop();
        self.refresh_suggestions();
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = gazetteer::suggest(&self.address);
        self.highlighted = 0;
    }

    pub fn highlight_next(&mut self) {
        if !self.suggestions.is_empty() && self.highlighted < self.suggestions.len() - 1 {
            self.highlighted += 1;
        }
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Accept suggestion `index`: address and pin take the place's stored
    /// values. Returns false when there is no such suggestion.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(place) = self.suggestions.get(index).copied() else {
            return false;
        };
        debug!(place = place.name, city = place.city, "Location suggestion selected");
        self.address = place.label();
        self.marker_position = Some(place.latlng);
        self.suggestions.clear();
        self.highlighted = 0;
        true
    }

    pub fn select_highlighted(&mut self) -> bool {
        self.select_suggestion(self.highlighted)
    }

    /// Drop the pin at `point` and reverse-geocode the address from it
    pub fn move_marker(&mut self, point: LatLng) {
        self.marker_position = Some(point);
        self.address = gazetteer::reverse_geocode(&point);
        self.suggestions.clear();
        self.highlighted = 0;
    }

    /// Move the pin by whole arrow-key steps
    pub fn nudge_marker(&mut self, dlat_steps: i32, dlng_steps: i32) {
        let from = self.marker_position.unwrap_or(DEFAULT_MAP_CENTER);
        let to = LatLng::new(
            (from.lat + f64::from(dlat_steps) * PIN_STEP_DEGREES).clamp(-90.0, 90.0),
            (from.lng + f64::from(dlng_steps) * PIN_STEP_DEGREES).clamp(-180.0, 180.0),
        );
        self.move_marker(to);
    }

    pub fn can_proceed(&self) -> bool {
        !self.address.trim().is_empty() && self.marker_position.is_some()
    }

    pub fn commit(&self) -> Vec<DraftField> {
        vec![
            DraftField::Address(self.address.trim().to_string()),
            DraftField::Location(self.marker_position),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_produces_suggestions() {
        let mut step = LocationStep::default();
        step.set_address("Ra");
        assert!(step.suggestions.iter().any(|p| p.name == "Rabat"));
        step.set_address("");
        assert!(step.suggestions.is_empty());
    }

    #[test]
    fn test_selecting_city_uses_stored_latlng() {
        let mut step = LocationStep::default();
        step.set_address("fes");
        let fes = step.suggestions.iter().position(|p| p.name == "Fes").unwrap();
        let stored = step.suggestions[fes].latlng;

        assert!(step.select_suggestion(fes));
        assert_eq!(step.marker_position, Some(stored));
        assert_eq!(step.address, "Fes");
        assert!(step.suggestions.is_empty());
    }

    #[test]
    fn test_select_out_of_range() {
        let mut step = LocationStep::default();
        assert!(!step.select_suggestion(3));
        assert!(step.marker_position.is_none());
    }

    #[test]
    fn test_nudge_from_empty_starts_at_default_center() {
        let mut step = LocationStep::default();
        step.nudge_marker(0, 0);
        assert_eq!(step.marker_position, Some(DEFAULT_MAP_CENTER));
        assert_eq!(step.address, "Casablanca");
    }

    #[test]
    fn test_can_proceed_needs_address_and_pin() {
        let mut step = LocationStep::default();
        assert!(!step.can_proceed());
        step.set_address("somewhere");
        assert!(!step.can_proceed());
        step.move_marker(LatLng::new(31.63, -7.98));
        assert!(step.can_proceed());
    }

    #[test]
    fn test_highlight_is_clamped() {
        let mut step = LocationStep::default();
        step.highlight_next();
        assert_eq!(step.highlighted, 0);
        step.set_address("a");
        for _ in 0..50 {
            step.highlight_next();
        }
        assert_eq!(step.highlighted, step.suggestions.len() - 1);
    }
}
