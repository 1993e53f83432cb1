//! Visitor story submissions.
//!
//! The share form captures a story, an identity (suggested pseudonym or
//! real first name), a birth date and a district; this module validates the
//! capture and turns it into a live map record. Submitted pins are placed
//! inside their district, pinned to rank 0.0 so every zoom tier shows them,
//! and flagged as visitor contributions.

use chrono::{Datelike, NaiveDate, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::info;
use typed_builder::TypedBuilder;

use vozmapa_common::{Testimonial, VozmapaError};
use vozmapa_world::{title_case, Theme, FEMALE_NAMES};

use crate::geo;

/// A story as captured by the share form, before validation.
#[derive(Debug, Clone, TypedBuilder)]
pub struct StorySubmission {
    /// Chosen pseudonym or the visitor's real first name.
    #[builder(setter(into))]
    pub author_name: String,
    pub birth_date: NaiveDate,
    /// District display name picked from the selector.
    #[builder(setter(into))]
    pub district: String,
    pub theme: Theme,
    #[builder(setter(into))]
    pub text: String,
}

/// Validate a submission and turn it into a map record.
pub fn submit(
    rng: &mut impl Rng,
    submission: &StorySubmission,
) -> Result<Testimonial, VozmapaError> {
    let now = Utc::now();
    let name = submission.author_name.trim();
    if name.is_empty() {
        return Err(VozmapaError::Validation("author name must not be blank".into()));
    }
    let text = submission.text.trim();
    if text.is_empty() {
        return Err(VozmapaError::Validation("story text must not be empty".into()));
    }
    let today = now.date_naive();
    if submission.birth_date > today {
        return Err(VozmapaError::Validation("birth date lies in the future".into()));
    }

    let age = age_on(submission.birth_date, today);
    let location = title_case(submission.district.trim());
    let (lat, lng) = geo::place(rng, &location);

    let record = Testimonial {
        id: format!("new-{}", now.timestamp_millis()),
        author: format!("{name}, {age}"),
        location,
        tag: submission.theme,
        icon: submission.theme.icon(),
        text: text.to_string(),
        lat,
        lng,
        visibility_rank: 0.0,
        created_at: now,
        is_user_contribution: true,
    };
    info!(id = %record.id, location = %record.location, tag = %record.tag, "Story submitted");
    Ok(record)
}

/// Full years between `birth` and `on`, the everyday calendar rule.
pub fn age_on(birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Suggest a pseudonym from the name bank.
pub fn suggest_pseudonym(rng: &mut impl Rng) -> &'static str {
    FEMALE_NAMES.choose(rng).copied().unwrap_or("Maria")
}

/// Re-roll the pseudonym, avoiding an immediate repeat.
pub fn next_pseudonym(rng: &mut impl Rng, current: &str) -> &'static str {
    let mut next = suggest_pseudonym(rng);
    while next == current && FEMALE_NAMES.len() > 1 {
        next = suggest_pseudonym(rng);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn valid_submission() -> StorySubmission {
        StorySubmission::builder()
            .author_name("Clara")
            .birth_date(NaiveDate::from_ymd_opt(1974, 3, 2).unwrap())
            .district("Évora")
            .theme(Theme::Sleep)
            .text("Acordo às 5 da manhã e já não durmo mais.")
            .build()
    }

    #[test]
    fn builds_a_user_contribution_record() {
        let mut rng = StdRng::seed_from_u64(21);
        let record = submit(&mut rng, &valid_submission()).unwrap();

        assert!(record.id.starts_with("new-"));
        assert!(record.is_user_contribution);
        assert_eq!(record.visibility_rank, 0.0);
        assert_eq!(record.location, "Évora");
        assert_eq!(record.tag, Theme::Sleep);
        assert_eq!(record.icon, Theme::Sleep.icon());

        let (name, age) = record.author.split_once(", ").unwrap();
        assert_eq!(name, "Clara");
        let age: i32 = age.parse().unwrap();
        assert!(age >= 51, "born 1974, age should have caught up: {age}");
    }

    #[test]
    fn places_the_pin_inside_the_chosen_district() {
        let mut rng = StdRng::seed_from_u64(22);
        // Évora profile: spread 0.35, unbiased
        for _ in 0..100 {
            let record = submit(&mut rng, &valid_submission()).unwrap();
            assert!((record.lat - 38.5667).abs() <= 0.175 + 1e-9);
            assert!((record.lng - -7.9).abs() <= 0.175 + 1e-9);
        }
    }

    #[test]
    fn title_cases_the_district_on_the_way_in() {
        let mut rng = StdRng::seed_from_u64(23);
        let submission = StorySubmission::builder()
            .author_name("Rosa")
            .birth_date(NaiveDate::from_ymd_opt(1969, 11, 20).unwrap())
            .district("  setúbal ")
            .theme(Theme::Menopause)
            .text("Os afrontamentos apanham-me em reuniões de trabalho.")
            .build();
        let record = submit(&mut rng, &submission).unwrap();
        assert_eq!(record.location, "Setúbal");
    }

    #[test]
    fn rejects_blank_name_empty_text_and_future_birth() {
        let mut rng = StdRng::seed_from_u64(24);

        let mut s = valid_submission();
        s.author_name = "   ".to_string();
        assert!(matches!(submit(&mut rng, &s), Err(VozmapaError::Validation(_))));

        let mut s = valid_submission();
        s.text = "".to_string();
        assert!(matches!(submit(&mut rng, &s), Err(VozmapaError::Validation(_))));

        let mut s = valid_submission();
        s.birth_date = NaiveDate::from_ymd_opt(2090, 1, 1).unwrap();
        assert!(matches!(submit(&mut rng, &s), Err(VozmapaError::Validation(_))));
    }

    #[test]
    fn age_counts_completed_years_only() {
        let birth = NaiveDate::from_ymd_opt(1980, 6, 15).unwrap();
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2026, 6, 14).unwrap()), 45);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()), 46);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap()), 46);
    }

    #[test]
    fn pseudonym_refresh_avoids_an_immediate_repeat() {
        let mut rng = StdRng::seed_from_u64(25);
        let current = suggest_pseudonym(&mut rng);
        for _ in 0..50 {
            assert_ne!(next_pseudonym(&mut rng, current), current);
        }
    }
}
