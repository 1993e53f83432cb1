//! Progressive pin reveal.
//!
//! Showing all ~700 pins at the country view turns the map into noise, so
//! each pin carries a random rank in `[0, 1)` and the map reveals more of the
//! distribution as the visitor zooms in. Tiers, near to far (first match
//! wins):
//!
//! | zoom        | shown         |
//! |-------------|---------------|
//! | >= 10       | everything    |
//! | >= 8        | rank < 0.6    |
//! | below 8     | rank < 0.35   |
//!
//! Visitor contributions are always shown: their rank is pinned to 0.0 at
//! construction, and the check also short-circuits on the flag so the
//! promise survives a record with a rewritten rank.

/// Zoom level at and above which every pin is shown.
pub const FULL_REVEAL_ZOOM: f64 = 10.0;

/// Zoom level at and above which the mid-tier cutoff applies.
pub const MID_REVEAL_ZOOM: f64 = 8.0;

/// Rank cutoff for pins shown at mid zoom.
pub const MID_ZOOM_RANK_CUTOFF: f64 = 0.6;

/// Rank cutoff for pins shown at the country view.
pub const FAR_ZOOM_RANK_CUTOFF: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomTier {
    Far,
    Mid,
    Near,
}

impl ZoomTier {
    pub fn for_zoom(zoom: f64) -> ZoomTier {
        if zoom >= FULL_REVEAL_ZOOM {
            ZoomTier::Near
        } else if zoom >= MID_REVEAL_ZOOM {
            ZoomTier::Mid
        } else {
            ZoomTier::Far
        }
    }

    /// Whether a pin with the given rank is shown at this tier.
    pub fn shows(&self, rank: f64) -> bool {
        match self {
            ZoomTier::Near => true,
            ZoomTier::Mid => rank < MID_ZOOM_RANK_CUTOFF,
            ZoomTier::Far => rank < FAR_ZOOM_RANK_CUTOFF,
        }
    }
}

/// Whether the map shows a pin with the given rank at the given zoom.
/// Visitor contributions bypass the tiers entirely.
pub fn visible_at(rank: f64, zoom: f64, is_user_contribution: bool) -> bool {
    if is_user_contribution {
        return true;
    }
    ZoomTier::for_zoom(zoom).shows(rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(ZoomTier::for_zoom(7.99), ZoomTier::Far);
        assert_eq!(ZoomTier::for_zoom(8.0), ZoomTier::Mid);
        assert_eq!(ZoomTier::for_zoom(9.99), ZoomTier::Mid);
        assert_eq!(ZoomTier::for_zoom(10.0), ZoomTier::Near);
        assert_eq!(ZoomTier::for_zoom(13.0), ZoomTier::Near);
    }

    #[test]
    fn mid_tier_applies_the_point_six_cutoff() {
        assert!(visible_at(0.5, 8.0, false));
        assert!(!visible_at(0.6, 8.0, false));
        assert!(!visible_at(0.5, 7.0, false));
    }

    #[test]
    fn far_tier_applies_the_point_three_five_cutoff() {
        assert!(visible_at(0.34, 7.0, false));
        assert!(!visible_at(0.35, 7.0, false));
    }

    #[test]
    fn near_tier_shows_everything() {
        assert!(visible_at(0.95, 10.0, false));
        assert!(visible_at(0.999, 12.5, false));
    }

    #[test]
    fn user_contributions_survive_every_tier() {
        for zoom in [5.0, 7.0, 8.0, 10.0] {
            assert!(visible_at(0.99, zoom, true));
        }
    }
}
