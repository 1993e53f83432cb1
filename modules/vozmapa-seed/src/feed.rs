//! Ambient activity notices.
//!
//! The map surfaces a slow trickle of "Maria, 52 acabou de partilhar a sua
//! história" toasts so the dataset feels alive. This module owns the notice
//! data, the cadence numbers, and the time labels stories carry; rendering
//! and actual timers stay in the UI layer.

use chrono::{DateTime, Datelike, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use vozmapa_common::Testimonial;

/// Fixed action phrasings, uniform-picked for ambient notices.
pub const ACTIONS: [&str; 3] = [
    "acabou de partilhar a sua história.",
    "contou a sua história.",
    "partilhou como se sente.",
];

/// Time label every notice carries; the feed always presents stories as
/// happening now.
pub const JUST_NOW: &str = "Agora mesmo";

/// Delay before the first ambient notice of a session.
pub const FIRST_NOTICE_DELAY_MS: u64 = 1000;

/// Gap bounds between ambient notices; the actual gap is uniform in
/// `[AMBIENT_GAP_MIN_MS, AMBIENT_GAP_MAX_MS)`.
pub const AMBIENT_GAP_MIN_MS: u64 = 4000;
pub const AMBIENT_GAP_MAX_MS: u64 = 10_000;

/// How long an ambient notice stays on screen.
pub const NOTICE_DISPLAY_MS: u64 = 5000;

/// How long the visitor's own submission notice stays on screen.
pub const SUBMISSION_DISPLAY_MS: u64 = 6000;

/// Ambient notices shown per session; the visitor's own submission notice is
/// exempt from the cap.
pub const MAX_AMBIENT_NOTICES: u32 = 4;

/// One toast's worth of data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityNotice {
    /// Id of the story the toast navigates to.
    pub id: String,
    pub name: String,
    /// Age part of the attribution; empty when the author string has none.
    pub age: String,
    pub location: String,
    pub action: String,
    pub time_label: String,
}

/// Split a `"Name, Age"` attribution. Attributions without a comma keep the
/// whole string as the name and an empty age.
pub fn split_author(author: &str) -> (String, String) {
    match author.split_once(',') {
        Some((name, age)) => (name.trim().to_string(), age.trim().to_string()),
        None => (author.trim().to_string(), String::new()),
    }
}

/// Uniform ambient notice over the dataset. `None` when there are no
/// stories to announce.
pub fn random_notice(rng: &mut impl Rng, stories: &[Testimonial]) -> Option<ActivityNotice> {
    let story = stories.choose(rng)?;
    let action = ACTIONS.choose(rng).copied().unwrap_or(ACTIONS[0]);
    Some(notice_for(story, action))
}

/// Notice for the visitor's own submission, always phrased as a fresh share.
pub fn submission_notice(story: &Testimonial) -> ActivityNotice {
    notice_for(story, ACTIONS[0])
}

fn notice_for(story: &Testimonial, action: &str) -> ActivityNotice {
    let (name, age) = split_author(&story.author);
    ActivityNotice {
        id: story.id.clone(),
        name,
        age,
        location: story.location.clone(),
        action: action.to_string(),
        time_label: JUST_NOW.to_string(),
    }
}

const MONTH_ABBREV: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.",
    "dez.",
];

/// Relative label a story card shows for its timestamp: "Agora mesmo",
/// "Há 5 min", "Há 3 h", "Ontem", "Há 12 dias". Stories older than a month
/// get an absolute date like "5 de mar." instead.
pub fn relative_time_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - created_at;
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return JUST_NOW.to_string();
    }
    if minutes < 60 {
        return format!("Há {minutes} min");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("Há {hours} h");
    }
    let days = elapsed.num_days();
    if days == 1 {
        return "Ontem".to_string();
    }
    if days < 30 {
        return format!("Há {days} dias");
    }
    format!(
        "{} de {}",
        created_at.day(),
        MONTH_ABBREV[created_at.month0() as usize]
    )
}

/// Millisecond gap before the next ambient notice.
pub fn ambient_delay_ms(rng: &mut impl Rng, is_first: bool) -> u64 {
    if is_first {
        FIRST_NOTICE_DELAY_MS
    } else {
        rng.random_range(AMBIENT_GAP_MIN_MS..AMBIENT_GAP_MAX_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use vozmapa_world::Theme;

    fn story(author: &str) -> Testimonial {
        Testimonial {
            id: "gen-BEJA-k2m4p1".to_string(),
            author: author.to_string(),
            location: "Beja".to_string(),
            tag: Theme::Sleep,
            text: "O meu sono é muito leve.".to_string(),
            lat: 38.0,
            lng: -7.9,
            icon: Theme::Sleep.icon(),
            visibility_rank: 0.2,
            created_at: Utc::now(),
            is_user_contribution: false,
        }
    }

    #[test]
    fn splits_name_and_age() {
        assert_eq!(split_author("Maria, 52"), ("Maria".to_string(), "52".to_string()));
        assert_eq!(split_author("Fátima"), ("Fátima".to_string(), String::new()));
    }

    #[test]
    fn random_notice_fills_every_field() {
        let mut rng = StdRng::seed_from_u64(2);
        let stories = vec![story("Amélia, 63")];
        let notice = random_notice(&mut rng, &stories).unwrap();
        assert_eq!(notice.id, "gen-BEJA-k2m4p1");
        assert_eq!(notice.name, "Amélia");
        assert_eq!(notice.age, "63");
        assert_eq!(notice.location, "Beja");
        assert!(ACTIONS.contains(&notice.action.as_str()));
        assert_eq!(notice.time_label, JUST_NOW);
    }

    #[test]
    fn no_stories_means_no_notice() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(random_notice(&mut rng, &[]).is_none());
    }

    #[test]
    fn submission_notice_uses_the_share_phrasing() {
        let notice = submission_notice(&story("Clara, 49"));
        assert_eq!(notice.action, "acabou de partilhar a sua história.");
        assert_eq!(notice.time_label, JUST_NOW);
    }

    #[test]
    fn relative_labels_cover_every_bucket() {
        let now = Utc::now();
        assert_eq!(relative_time_label(now, now), JUST_NOW);
        assert_eq!(relative_time_label(now + Duration::minutes(10), now), JUST_NOW);
        assert_eq!(relative_time_label(now - Duration::minutes(5), now), "Há 5 min");
        assert_eq!(relative_time_label(now - Duration::hours(3), now), "Há 3 h");
        assert_eq!(relative_time_label(now - Duration::days(1), now), "Ontem");
        assert_eq!(relative_time_label(now - Duration::days(12), now), "Há 12 dias");
    }

    #[test]
    fn month_old_stories_get_an_absolute_date() {
        let created = Utc.with_ymd_and_hms(2026, 3, 5, 9, 30, 0).unwrap();
        let now = created + Duration::days(45);
        assert_eq!(relative_time_label(created, now), "5 de mar.");
    }

    #[test]
    fn cadence_delays_stay_in_their_windows() {
        let mut rng = StdRng::seed_from_u64(14);
        assert_eq!(ambient_delay_ms(&mut rng, true), FIRST_NOTICE_DELAY_MS);
        for _ in 0..500 {
            let gap = ambient_delay_ms(&mut rng, false);
            assert!((AMBIENT_GAP_MIN_MS..AMBIENT_GAP_MAX_MS).contains(&gap));
        }
    }
}
