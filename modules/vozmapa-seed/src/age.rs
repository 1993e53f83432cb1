//! Plausible author ages inferred from story text.
//!
//! The generated map pairs every story with a "Name, Age" attribution; an
//! age that contradicts the story ("tenho 60" under "Maria, 31") breaks the
//! illusion instantly. Rules, applied to the lowercased text:
//!
//! 1. An explicit mention ("aos 52", "tenho 47", "fiz 60", ...) pins the
//!    range to [n, n+8] and skips everything else.
//! 2. Otherwise life-stage keywords nudge the bounds (menopausa raises the
//!    floor to 45, netos/avó to 55, reforma to 58, filhos casarem/saírem to
//!    50), then spelled-out decade words override the range to their decade,
//!    later decades overriding earlier ones.
//! 3. If no rule touched the floor, the theme supplies a fallback range.
//! 4. A ceiling at or below the floor is pushed to floor + 5.
//!
//! The sampled age is uniform over the resulting closed range.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use vozmapa_world::Theme;

const DEFAULT_MIN_AGE: u32 = 25;
const DEFAULT_MAX_AGE: u32 = 65;

/// Matches "aos 52", "tenho 47", "fiz 60", "dos 40", "nos 50" and
/// "cheguei aos 45" in lowercased text.
static AGE_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:aos|tenho|fiz|dos|nos|cheguei aos)\s+(\d+)").unwrap());

/// Inclusive age range a story supports, before sampling.
pub fn age_range(theme: Theme, text: &str) -> (u32, u32) {
    let lower = text.to_lowercase();
    let mut min_age = DEFAULT_MIN_AGE;
    let mut max_age = DEFAULT_MAX_AGE;

    let mention = AGE_MENTION_RE
        .captures(&lower)
        .and_then(|caps| caps[1].parse::<u32>().ok());

    if let Some(age) = mention {
        min_age = age;
        max_age = age.saturating_add(8);
    } else {
        if lower.contains("menopausa") {
            min_age = min_age.max(45);
            max_age = max_age.max(60);
        }
        if lower.contains("netos") || lower.contains("avó") {
            min_age = min_age.max(55);
            max_age = 75;
        }
        if lower.contains("reforma") {
            min_age = min_age.max(58);
            max_age = 75;
        }
        if lower.contains("filhos casarem") || lower.contains("filhos saírem") {
            min_age = min_age.max(50);
        }

        // Decade words override whatever the keywords set.
        if lower.contains("trinta") {
            min_age = 30;
            max_age = 39;
        }
        if lower.contains("quarenta") {
            min_age = 40;
            max_age = 49;
        }
        if lower.contains("cinquenta") {
            min_age = 50;
            max_age = 59;
        }
        if lower.contains("sessenta") {
            min_age = 60;
            max_age = 69;
        }

        // Theme fallback only when no rule touched the floor.
        if min_age == DEFAULT_MIN_AGE {
            match theme {
                Theme::Menopause => {
                    min_age = 45;
                    max_age = 60;
                }
                Theme::Longevity => {
                    min_age = 50;
                    max_age = 75;
                }
                Theme::BonesAndJoints => min_age = 45,
                Theme::DailyLife => min_age = 30,
                _ => {}
            }
        }
    }

    if max_age <= min_age {
        max_age = min_age + 5;
    }
    (min_age, max_age)
}

/// Sample an age for the story, uniform over [`age_range`].
pub fn infer_age(rng: &mut impl Rng, theme: Theme, text: &str) -> u32 {
    let (min_age, max_age) = age_range(theme, text);
    rng.random_range(min_age..=max_age)
}
