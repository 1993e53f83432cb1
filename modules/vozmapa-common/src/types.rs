use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use vozmapa_world::{Icon, Theme};

// --- Testimonial record ---

/// A single story pin on the national map, either synthesized by the seed
/// pass or contributed live by a visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// `gen-{DISTRICT}-{suffix}` for seeded records, `new-{millis}` for
    /// visitor submissions.
    pub id: String,
    /// Display attribution, `"Name, Age"`.
    pub author: String,
    /// District or city display name (title-cased).
    pub location: String,
    pub tag: Theme,
    pub text: String,
    pub lat: f64,
    pub lng: f64,
    pub icon: Icon,
    /// Progressive-reveal rank in `[0, 1)`. Lower ranks surface at lower
    /// zoom levels; visitor submissions are pinned to 0.0.
    #[serde(default)]
    pub visibility_rank: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_user_contribution: bool,
}

impl Testimonial {
    /// Whether the map shows this pin at the given zoom level.
    pub fn visible_at(&self, zoom: f64) -> bool {
        crate::visibility::visible_at(self.visibility_rank, zoom, self.is_user_contribution)
    }
}

// --- Geo bounds ---

/// Axis-aligned lat/lng box, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// The box every pin must land in: mainland Portugal plus Madeira and the
/// Azores.
pub const PORTUGAL_BOUNDS: GeoBounds = GeoBounds {
    min_lat: 30.0,
    max_lat: 43.0,
    min_lng: -32.0,
    max_lng: -4.0,
};
