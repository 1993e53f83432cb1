//! The seed pass: a full synthetic dataset in one run.
//!
//! Stories are drafted district by district (text, author, theme, back-dated
//! timestamp), then a separate placement pass assigns coordinates and the
//! progressive-reveal rank. Every run produces a fresh map; nothing about a
//! run is meant to be reproducible across invocations.

use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use vozmapa_common::Testimonial;
use vozmapa_world::{Theme, DISTRICTS, FEMALE_NAMES};

use crate::age::infer_age;
use crate::config::SeedConfig;
use crate::deck::TemplateDeck;
use crate::geo;

/// Draft record before the placement pass assigns coordinates and rank.
struct Draft {
    id: String,
    author: String,
    location: String,
    tag: Theme,
    text: String,
    created_at: DateTime<Utc>,
}

pub struct SeedGenerator {
    config: SeedConfig,
}

impl SeedGenerator {
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Generate the full dataset: `stories_per_district` per roster
    /// district, geo-placed and ranked. Config knobs are assumed validated
    /// (see [`SeedConfig::validate`]).
    pub fn generate(&self, rng: &mut impl Rng) -> Vec<Testimonial> {
        let started = std::time::Instant::now();
        let health: Vec<Theme> = Theme::health_themes().collect();
        let mut deck = TemplateDeck::new(rng);
        let mut drafts = Vec::with_capacity(DISTRICTS.len() * self.config.stories_per_district);

        for district in &DISTRICTS {
            let location = district.display_name();
            for _ in 0..self.config.stories_per_district {
                let theme = if rng.random_bool(self.config.daily_life_ratio) {
                    Theme::DailyLife
                } else {
                    *health.choose(rng).unwrap_or(&Theme::DailyLife)
                };
                let text = deck.draw(rng, theme);
                let age = infer_age(rng, theme, text);
                let name = FEMALE_NAMES.choose(rng).unwrap_or(&"Maria");

                drafts.push(Draft {
                    id: format!("gen-{}-{}", district.name, random_suffix(rng)),
                    author: format!("{name}, {age}"),
                    location: location.clone(),
                    tag: theme,
                    text: text.to_string(),
                    created_at: random_past_timestamp(
                        rng,
                        self.config.min_days_ago,
                        self.config.max_days_ago,
                    ),
                });
            }
            debug!(district = district.name, "district drafted");
        }

        // Placement runs as its own mapping pass over the finished drafts,
        // mirroring how the map layer consumes the records.
        let testimonials: Vec<Testimonial> = drafts
            .into_iter()
            .map(|draft| {
                let (lat, lng) = geo::place(rng, &draft.location);
                Testimonial {
                    id: draft.id,
                    author: draft.author,
                    location: draft.location,
                    tag: draft.tag,
                    icon: draft.tag.icon(),
                    text: draft.text,
                    lat,
                    lng,
                    visibility_rank: rng.random::<f64>(),
                    created_at: draft.created_at,
                    is_user_contribution: false,
                }
            })
            .collect();

        info!(
            districts = DISTRICTS.len(),
            per_district = self.config.stories_per_district,
            total = testimonials.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Seed dataset generated"
        );
        testimonials
    }
}

/// Generate with the default knobs and the thread RNG.
pub fn generate_seed() -> Vec<Testimonial> {
    SeedGenerator::new(SeedConfig::default()).generate(&mut rand::rng())
}

/// Six characters of `[0-9a-z]`, the id suffix alphabet.
fn random_suffix(rng: &mut impl Rng) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..6)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Uniform timestamp between `min_days` and `max_days` ago, with the time of
/// day re-rolled to a random hour and minute.
fn random_past_timestamp(rng: &mut impl Rng, min_days: i64, max_days: i64) -> DateTime<Utc> {
    let days_ago = rng.random_range(min_days..=max_days);
    let date = Utc::now() - Duration::days(days_ago);
    let hour = rng.random_range(0..24);
    let minute = rng.random_range(0..60);
    date.date_naive()
        .and_hms_opt(hour, minute, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn honors_the_stories_per_district_knob() {
        let mut rng = StdRng::seed_from_u64(17);
        let config = SeedConfig {
            stories_per_district: 3,
            ..SeedConfig::default()
        };
        let records = SeedGenerator::new(config).generate(&mut rng);
        assert_eq!(records.len(), DISTRICTS.len() * 3);
    }

    #[test]
    fn id_suffix_is_six_lowercase_alphanumerics() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let suffix = random_suffix(&mut rng);
            assert_eq!(suffix.len(), 6);
            assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn back_dated_timestamps_stay_in_the_window() {
        let mut rng = StdRng::seed_from_u64(8);
        let started = Utc::now();
        for _ in 0..200 {
            let ts = random_past_timestamp(&mut rng, 1, 120);
            assert!(ts <= Utc::now());
            assert!(ts >= started - Duration::days(121));
        }
    }
}
