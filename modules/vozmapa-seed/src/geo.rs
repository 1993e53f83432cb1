//! Coordinate scatter around place anchors.
//!
//! A pin exactly on the district anchor looks synthetic, and a naive
//! unbiased scatter drops coastal pins into the Atlantic. Each place profile
//! carries a spread magnitude and an optional compass bias; the scatter
//! draws uniform offsets and forces their signs to match the bias.

use rand::Rng;

use vozmapa_world::{place_profile, PlaceProfile, SpreadDirection, PORTUGAL_FALLBACK};

/// Spread applied when a profile does not pin one.
pub const DEFAULT_SPREAD: f64 = 0.30;

/// Scatter a point around `(lat, lng)`: independent uniform offsets in
/// `[-spread/2, +spread/2)` per axis, with signs forced by `dir`.
pub fn scatter(
    rng: &mut impl Rng,
    lat: f64,
    lng: f64,
    dir: SpreadDirection,
    spread: f64,
) -> (f64, f64) {
    let mut lat_offset = (rng.random::<f64>() - 0.5) * spread;
    let mut lng_offset = (rng.random::<f64>() - 0.5) * spread;

    match dir {
        SpreadDirection::East => lng_offset = lng_offset.abs(),
        SpreadDirection::West => lng_offset = -lng_offset.abs(),
        SpreadDirection::North => lat_offset = lat_offset.abs(),
        SpreadDirection::South => lat_offset = -lat_offset.abs(),
        SpreadDirection::NorthEast => {
            lat_offset = lat_offset.abs();
            lng_offset = lng_offset.abs();
        }
        SpreadDirection::NorthWest => {
            lat_offset = lat_offset.abs();
            lng_offset = -lng_offset.abs();
        }
        SpreadDirection::SouthEast => {
            lat_offset = -lat_offset.abs();
            lng_offset = lng_offset.abs();
        }
        SpreadDirection::SouthWest => {
            lat_offset = -lat_offset.abs();
            lng_offset = -lng_offset.abs();
        }
        SpreadDirection::All => {}
    }

    (lat + lat_offset, lng + lng_offset)
}

/// Scatter around a profile's anchor, defaulting the direction to
/// [`SpreadDirection::All`] and the spread to [`DEFAULT_SPREAD`] when the
/// profile leaves them unset.
pub fn scatter_profile(rng: &mut impl Rng, profile: &PlaceProfile) -> (f64, f64) {
    let dir = profile.dir.unwrap_or(SpreadDirection::All);
    let spread = profile.spread.unwrap_or(DEFAULT_SPREAD);
    scatter(rng, profile.lat, profile.lng, dir, spread)
}

/// Coordinates for a location name: resolve its scatter profile (trimmed,
/// case-insensitive) and scatter around the anchor. Unknown names scatter
/// around the country anchor instead of failing, so a bad location yields a
/// plausible pin rather than an error.
pub fn place(rng: &mut impl Rng, location: &str) -> (f64, f64) {
    let profile = place_profile(location).unwrap_or(&PORTUGAL_FALLBACK);
    scatter_profile(rng, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use vozmapa_common::PORTUGAL_BOUNDS;
    use vozmapa_world::DISTRICTS;

    #[test]
    fn northeast_bias_never_goes_south_or_west() {
        let mut rng = StdRng::seed_from_u64(42);
        let porto = place_profile("Porto").unwrap();
        for _ in 0..1000 {
            let (lat, lng) = scatter_profile(&mut rng, porto);
            assert!(lat >= porto.lat, "southward offset under NE bias");
            assert!(lng >= porto.lng, "westward offset under NE bias");
        }
    }

    #[test]
    fn spread_bounds_the_offsets() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..1000 {
            let (lat, lng) = scatter(&mut rng, 40.0, -8.0, SpreadDirection::All, 0.5);
            assert!((lat - 40.0).abs() <= 0.25 + 1e-9);
            assert!((lng - -8.0).abs() <= 0.25 + 1e-9);
        }
    }

    #[test]
    fn unbiased_scatter_uses_both_sides_of_the_anchor() {
        let mut rng = StdRng::seed_from_u64(1);
        let (mut south, mut north) = (false, false);
        for _ in 0..500 {
            let (lat, _) = scatter(&mut rng, 40.0, -8.0, SpreadDirection::All, 0.3);
            if lat < 40.0 {
                south = true;
            }
            if lat > 40.0 {
                north = true;
            }
        }
        assert!(south && north);
    }

    #[test]
    fn unknown_location_scatters_around_the_country_anchor() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let (lat, lng) = place(&mut rng, "Atlantis");
            assert!((lat - PORTUGAL_FALLBACK.lat).abs() <= 0.25 + 1e-9);
            assert!((lng - PORTUGAL_FALLBACK.lng).abs() <= 0.25 + 1e-9);
        }
    }

    #[test]
    fn every_district_placement_lands_inside_portugal() {
        let mut rng = StdRng::seed_from_u64(33);
        for district in &DISTRICTS {
            let name = district.display_name();
            for _ in 0..50 {
                let (lat, lng) = place(&mut rng, &name);
                assert!(
                    PORTUGAL_BOUNDS.contains(lat, lng),
                    "({lat}, {lng}) outside Portugal for {name}"
                );
            }
        }
    }
}
