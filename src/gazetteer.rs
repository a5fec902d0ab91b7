//! Static place list used by the location step.
//!
//! Autocomplete is a linear, case-insensitive prefix scan. Reverse
//! geocoding picks the nearest entry by squared planar distance; when
//! nothing is close enough the caller gets the formatted coordinates.

use crate::draft::LatLng;

/// Most suggestions shown under the address field
pub const MAX_SUGGESTIONS: usize = 8;

/// Beyond this distance (degrees) a pin is not attributed to a place
pub const REVERSE_GEOCODE_MAX_DEGREES: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKind {
    City,
    Neighborhood,
}

/// A named place with its stored coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    pub name: &'static str,
    /// City the place belongs to (equal to `name` for cities)
    pub city: &'static str,
    pub kind: PlaceKind,
    pub latlng: LatLng,
}

impl Place {
    const fn city(name: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            city: name,
            kind: PlaceKind::City,
            latlng: LatLng::new(lat, lng),
        }
    }

    const fn hood(name: &'static str, city: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            city,
            kind: PlaceKind::Neighborhood,
            latlng: LatLng::new(lat, lng),
        }
    }

    /// Address text written into the draft when this place is picked
    pub fn label(&self) -> String {
        match self.kind {
            PlaceKind::City => self.name.to_string(),
            PlaceKind::Neighborhood => format!("{}, {}", self.name, self.city),
        }
    }
}

/// Cities first, then neighbourhoods grouped by city
pub static PLACES: &[Place] = &[
    Place::city("Casablanca", 33.5731, -7.5898),
    Place::city("Rabat", 34.0209, -6.8416),
    Place::city("Marrakech", 31.6295, -7.9811),
    Place::city("Fes", 34.0181, -5.0078),
    Place::city("Tangier", 35.7595, -5.8340),
    Place::city("Agadir", 30.4278, -9.5981),
    Place::city("Meknes", 33.8935, -5.5473),
    Place::city("Oujda", 34.6814, -1.9086),
    Place::city("Kenitra", 34.2610, -6.5802),
    Place::city("Tetouan", 35.5889, -5.3626),
    Place::city("Essaouira", 31.5085, -9.7595),
    Place::city("El Jadida", 33.2316, -8.5007),
    Place::city("Mohammedia", 33.6861, -7.3829),
    Place::city("Ifrane", 33.5228, -5.1106),
    Place::hood("Maarif", "Casablanca", 33.5862, -7.6328),
    Place::hood("Anfa", "Casablanca", 33.5903, -7.6645),
    Place::hood("Ain Diab", "Casablanca", 33.5897, -7.6936),
    Place::hood("Bourgogne", "Casablanca", 33.5993, -7.6379),
    Place::hood("Californie", "Casablanca", 33.5398, -7.6296),
    Place::hood("Agdal", "Rabat", 33.9985, -6.8516),
    Place::hood("Hay Riad", "Rabat", 33.9602, -6.8703),
    Place::hood("Souissi", "Rabat", 33.9811, -6.8239),
    Place::hood("Hassan", "Rabat", 34.0224, -6.8226),
    Place::hood("Gueliz", "Marrakech", 31.6363, -8.0104),
    Place::hood("Hivernage", "Marrakech", 31.6235, -8.0160),
    Place::hood("Medina", "Marrakech", 31.6311, -7.9891),
    Place::hood("Palmeraie", "Marrakech", 31.6747, -7.9710),
    Place::hood("Agdal", "Marrakech", 31.6006, -7.9773),
    Place::hood("Fes el Bali", "Fes", 34.0647, -4.9733),
    Place::hood("Ville Nouvelle", "Fes", 34.0332, -5.0001),
    Place::hood("Malabata", "Tangier", 35.7746, -5.7805),
    Place::hood("Marshan", "Tangier", 35.7878, -5.8238),
    Place::hood("Founty", "Agadir", 30.4039, -9.5958),
    Place::hood("Talborjt", "Agadir", 30.4252, -9.5990),
];

/// Places whose name or label starts with `query`, ignoring case.
///
/// An empty (or whitespace) query yields no suggestions.
pub fn suggest(query: &str) -> Vec<&'static Place> {
    suggest_in(PLACES, query, MAX_SUGGESTIONS)
}

/// [`suggest`] over an arbitrary place list
pub fn suggest_in<'a>(places: &'a [Place], query: &str, limit: usize) -> Vec<&'a Place> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    places
        .iter()
        .filter(|p| {
            p.name.to_lowercase().starts_with(&query)
                || p.label().to_lowercase().starts_with(&query)
        })
        .take(limit)
        .collect()
}

/// Nearest place to `point` and its squared distance
pub fn nearest(point: &LatLng) -> Option<(&'static Place, f64)> {
    nearest_in(PLACES, point)
}

/// [`nearest`] over an arbitrary place list; first entry wins ties
pub fn nearest_in<'a>(places: &'a [Place], point: &LatLng) -> Option<(&'a Place, f64)> {
    let mut best: Option<(&Place, f64)> = None;
    for place in places {
        let d = place.latlng.distance_sq(point);
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((place, d)),
        }
    }
    best
}

/// Address text for a dropped pin.
///
/// Falls back to the coordinates themselves when no place is within
/// [`REVERSE_GEOCODE_MAX_DEGREES`].
pub fn reverse_geocode(point: &LatLng) -> String {
    match nearest(point) {
        Some((place, d)) if d <= REVERSE_GEOCODE_MAX_DEGREES * REVERSE_GEOCODE_MAX_DEGREES => {
            place.label()
        }
        _ => point.to_string(),
    }
}
