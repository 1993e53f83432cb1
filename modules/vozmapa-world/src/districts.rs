//! The Portuguese districts the map knows about: the label roster rendered
//! over the country view, and the per-place scatter profiles that control
//! how generated pins spread around each anchor point.

use crate::text::title_case;

// --- District roster ---

/// A district label on the national map. `name` is the roster form (uppercase,
/// as rendered on the label layer); [`District::display_name`] gives the
/// human-facing form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct District {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl District {
    pub fn display_name(&self) -> String {
        title_case(self.name)
    }
}

/// The 18 mainland districts plus Funchal and Ponta Delgada.
pub static DISTRICTS: [District; 20] = [
    District { name: "VIANA DO CASTELO", lat: 41.7932, lng: -8.6525 },
    District { name: "BRAGA", lat: 41.5454, lng: -8.4265 },
    District { name: "VILA REAL", lat: 41.3006, lng: -7.7441 },
    District { name: "BRAGANÇA", lat: 41.8061, lng: -6.7567 },
    District { name: "PORTO", lat: 41.1579, lng: -8.5091 },
    District { name: "AVEIRO", lat: 40.6405, lng: -8.5538 },
    District { name: "VISEU", lat: 40.6566, lng: -7.9124 },
    District { name: "GUARDA", lat: 40.5373, lng: -7.2658 },
    District { name: "COIMBRA", lat: 40.2033, lng: -8.3003 },
    District { name: "CASTELO BRANCO", lat: 39.8197, lng: -7.4965 },
    District { name: "LEIRIA", lat: 39.7438, lng: -8.7078 },
    District { name: "SANTARÉM", lat: 39.2333, lng: -8.6833 },
    District { name: "LISBOA", lat: 38.7869, lng: -9.1026 },
    District { name: "PORTALEGRE", lat: 39.2908, lng: -7.4335 },
    District { name: "SETÚBAL", lat: 38.5344, lng: -8.7882 },
    District { name: "ÉVORA", lat: 38.5667, lng: -7.9000 },
    District { name: "BEJA", lat: 38.0151, lng: -7.8632 },
    District { name: "FARO", lat: 37.1079, lng: -7.9308 },
    District { name: "FUNCHAL", lat: 32.6669, lng: -16.9241 },
    District { name: "PONTA DELGADA", lat: 37.7412, lng: -25.6756 },
];

/// Title-cased roster names for selection UIs, sorted.
pub fn district_display_names() -> Vec<String> {
    let mut names: Vec<String> = DISTRICTS.iter().map(|d| d.display_name()).collect();
    names.sort();
    names
}

// --- Scatter profiles ---

/// Compass bias applied to scatter offsets. [`SpreadDirection::All`] leaves
/// both axes unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    All,
}

/// Scatter profile for one place: the anchor coordinate plus how generated
/// pins spread around it. Coastal districts bias inland (east) or away from
/// the sea so pins never land in the Atlantic; island cities keep a tight
/// spread so pins stay on the island.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceProfile {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub dir: Option<SpreadDirection>,
    pub spread: Option<f64>,
}

pub static PLACES: [PlaceProfile; 20] = [
    PlaceProfile { name: "Viana do Castelo", lat: 41.7932, lng: -8.6525, dir: Some(SpreadDirection::East), spread: Some(0.25) },
    PlaceProfile { name: "Porto", lat: 41.1579, lng: -8.5091, dir: Some(SpreadDirection::NorthEast), spread: Some(0.3) },
    PlaceProfile { name: "Aveiro", lat: 40.6405, lng: -8.5538, dir: Some(SpreadDirection::East), spread: Some(0.25) },
    PlaceProfile { name: "Leiria", lat: 39.7438, lng: -8.7078, dir: Some(SpreadDirection::East), spread: Some(0.25) },
    PlaceProfile { name: "Lisboa", lat: 38.7869, lng: -9.1026, dir: Some(SpreadDirection::North), spread: Some(0.3) },
    PlaceProfile { name: "Setúbal", lat: 38.5344, lng: -8.7882, dir: Some(SpreadDirection::North), spread: Some(0.25) },
    PlaceProfile { name: "Faro", lat: 37.1079, lng: -7.9308, dir: Some(SpreadDirection::North), spread: Some(0.35) },
    PlaceProfile { name: "Braga", lat: 41.5454, lng: -8.4265, dir: None, spread: Some(0.25) },
    PlaceProfile { name: "Vila Real", lat: 41.3006, lng: -7.7441, dir: None, spread: Some(0.3) },
    PlaceProfile { name: "Bragança", lat: 41.8061, lng: -6.7567, dir: None, spread: Some(0.3) },
    PlaceProfile { name: "Viseu", lat: 40.6566, lng: -7.9124, dir: None, spread: Some(0.3) },
    PlaceProfile { name: "Guarda", lat: 40.5373, lng: -7.2658, dir: None, spread: Some(0.3) },
    PlaceProfile { name: "Coimbra", lat: 40.2033, lng: -8.3003, dir: None, spread: Some(0.3) },
    PlaceProfile { name: "Castelo Branco", lat: 39.8197, lng: -7.4965, dir: None, spread: Some(0.3) },
    PlaceProfile { name: "Santarém", lat: 39.2333, lng: -8.6833, dir: None, spread: Some(0.3) },
    PlaceProfile { name: "Évora", lat: 38.5667, lng: -7.9000, dir: None, spread: Some(0.35) },
    PlaceProfile { name: "Beja", lat: 38.0151, lng: -7.8632, dir: None, spread: Some(0.35) },
    PlaceProfile { name: "Portalegre", lat: 39.2908, lng: -7.4335, dir: None, spread: Some(0.3) },
    PlaceProfile { name: "Funchal", lat: 32.6669, lng: -16.9241, dir: Some(SpreadDirection::All), spread: Some(0.08) },
    PlaceProfile { name: "Ponta Delgada", lat: 37.7412, lng: -25.6756, dir: Some(SpreadDirection::All), spread: Some(0.05) },
];

/// Country-wide anchor for locations that match no known place.
pub static PORTUGAL_FALLBACK: PlaceProfile = PlaceProfile {
    name: "Portugal",
    lat: 39.3999,
    lng: -8.2245,
    dir: None,
    spread: Some(0.5),
};

/// Look up a scatter profile by place name. Matching trims surrounding
/// whitespace and ignores case (Unicode-aware, so "SETÚBAL" finds Setúbal).
/// Returns `None` for unknown names; callers fall back to
/// [`PORTUGAL_FALLBACK`].
pub fn place_profile(name: &str) -> Option<&'static PlaceProfile> {
    let norm = name.trim().to_lowercase();
    PLACES.iter().find(|p| p.name.to_lowercase() == norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_twenty_districts() {
        assert_eq!(DISTRICTS.len(), 20);
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let porto = place_profile("  porto ").unwrap();
        assert_eq!(porto.dir, Some(SpreadDirection::NorthEast));
        assert_eq!(porto.spread, Some(0.3));
    }

    #[test]
    fn lookup_handles_accented_names() {
        assert!(place_profile("SETÚBAL").is_some());
        assert!(place_profile("évora").is_some());
        assert!(place_profile("santarém").is_some());
    }

    #[test]
    fn unknown_places_have_no_profile() {
        assert!(place_profile("Madrid").is_none());
        assert!(place_profile("").is_none());
    }

    #[test]
    fn every_district_resolves_to_a_profile() {
        for district in &DISTRICTS {
            assert!(
                place_profile(&district.display_name()).is_some(),
                "no scatter profile for {}",
                district.name
            );
        }
    }

    #[test]
    fn display_names_are_title_cased_and_sorted() {
        let names = district_display_names();
        assert_eq!(names.len(), 20);
        assert!(names.contains(&"Viana Do Castelo".to_string()));
        assert!(names.contains(&"Évora".to_string()));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn country_fallback_sits_mid_country() {
        assert!((PORTUGAL_FALLBACK.lat - 39.3999).abs() < 1e-9);
        assert!((PORTUGAL_FALLBACK.lng - -8.2245).abs() < 1e-9);
        assert_eq!(PORTUGAL_FALLBACK.spread, Some(0.5));
        assert_eq!(PORTUGAL_FALLBACK.dir, None);
    }
}
